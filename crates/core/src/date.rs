//! Order date value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainResult, ValidationError};
use crate::value_object::ValueObject;

/// Point in time at which a purchase order was placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDate(DateTime<Utc>);

impl OrderDate {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse an RFC 3339 timestamp, normalized to UTC.
    pub fn parse(text: &str) -> DomainResult<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::new(format!("Invalid order date '{text}': {e}")))
    }

    pub fn from_timestamp_millis(millis: i64) -> DomainResult<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::new(format!("Invalid order date: {millis} ms is out of range"))
            })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl ValueObject for OrderDate {}

impl From<DateTime<Utc>> for OrderDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for OrderDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_normalizes_to_utc() {
        let date = OrderDate::parse("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(date, OrderDate::parse("2024-03-01T10:00:00Z").unwrap());
    }

    #[test]
    fn rejects_unresolvable_dates() {
        let err = OrderDate::parse("2024-02-30T00:00:00Z").unwrap_err();
        assert!(err.message().starts_with("Invalid order date"));
        assert!(OrderDate::parse("yesterday").is_err());
        assert!(OrderDate::from_timestamp_millis(i64::MAX).is_err());
    }

    #[test]
    fn from_millis_matches_instant() {
        let date = OrderDate::from_timestamp_millis(0).unwrap();
        assert_eq!(date.instant().timestamp(), 0);
        assert_eq!(date.to_string(), "1970-01-01T00:00:00+00:00");
    }
}
