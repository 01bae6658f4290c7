//! Shared Value Objects
//!
//! Small, validated types used across the domain: instrument symbols and
//! UTC timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Symbol
// =============================================================================

/// An instrument ticker symbol.
///
/// Normalized to uppercase at construction. Validation is separate from
/// construction so raw feed data can be carried before it is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

/// Maximum accepted ticker length.
const MAX_SYMBOL_LEN: usize = 12;

impl Symbol {
    /// Create a new symbol, normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check whether the symbol is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate the symbol for use in a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty, too long, or contains
    /// characters outside `[A-Z0-9.]`.
    pub fn validate(&self) -> Result<(), SymbolError> {
        if self.0.is_empty() {
            return Err(SymbolError::Empty);
        }
        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong(self.0.clone()));
        }
        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
        {
            return Err(SymbolError::InvalidCharacters(self.0.clone()));
        }
        Ok(())
    }
}

/// Symbol validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// The symbol has no characters.
    #[error("symbol cannot be empty")]
    Empty,
    /// The symbol exceeds the maximum ticker length.
    #[error("symbol {0} exceeds maximum length")]
    TooLong(String),
    /// The symbol contains characters outside the ticker alphabet.
    #[error("symbol {0} contains invalid characters")]
    InvalidCharacters(String),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Timestamp
// =============================================================================

/// A UTC instant attached to domain events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the current timestamp.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse from an RFC 3339 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as an RFC 3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Get the Unix timestamp in seconds.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("aapl");
        assert_eq!(s.as_str(), "AAPL");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("MSFT");
        assert_eq!(format!("{s}"), "MSFT");
    }

    #[test]
    fn symbol_validate_empty() {
        assert_eq!(Symbol::new("").validate(), Err(SymbolError::Empty));
    }

    #[test]
    fn symbol_validate_too_long() {
        let s = Symbol::new("A".repeat(13));
        assert!(matches!(s.validate(), Err(SymbolError::TooLong(_))));
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        let s = Symbol::new("AA PL");
        assert!(matches!(
            s.validate(),
            Err(SymbolError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn symbol_validate_allows_class_shares() {
        assert!(Symbol::new("BRK.B").validate().is_ok());
    }

    #[test]
    fn symbol_from_conversions() {
        let s1: Symbol = "AAPL".into();
        assert_eq!(s1.as_str(), "AAPL");

        let s2: Symbol = String::from("msft").into();
        assert_eq!(s2.as_str(), "MSFT");
    }

    #[test]
    fn symbol_hash_dedupes_case_variants() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Symbol::new("AAPL"));
        set.insert(Symbol::new("aapl"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn timestamp_parse_and_format() {
        let ts = Timestamp::parse("2026-03-02T12:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-03-02T12:00:00+00:00");
    }

    #[test]
    fn timestamp_parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn timestamp_ordering() {
        let t0 = Timestamp::parse("2026-03-02T12:00:00Z").unwrap();
        let t1 = Timestamp::parse("2026-03-02T13:00:00Z").unwrap();
        assert!(t0 < t1);
    }

    #[test]
    fn timestamp_datetime_roundtrip() {
        let dt = Utc::now();
        let ts: Timestamp = dt.into();
        let back: DateTime<Utc> = ts.into();
        assert_eq!(back, dt);
    }

    #[test]
    fn timestamp_serde_roundtrip() {
        let ts = Timestamp::parse("2026-03-02T12:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
