//! Canonical `YYYY-MM-DD` storage keys.
//!
//! A key always carries the Gregorian projection, so two dates with the
//! same day number produce the same key no matter which calendar they
//! were built from. Every in-window key has a four-digit year, which
//! keeps lexicographic and chronological order identical.
//!
//! [`CalendarDate`] serializes through this form, so dates embedded in
//! JSON or TOML documents are stored as their keys.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Encodes a date as its canonical storage key.
pub fn encode(date: CalendarDate) -> String {
    date.gregorian().to_string()
}

/// Decodes a storage key back into a date.
///
/// The three fields must be dash-separated unsigned integers; zero
/// padding is not required on input.
///
/// # Errors
///
/// Returns [`CalendarError::MalformedKey`] if the key does not have
/// three integer fields, names a Gregorian date that does not exist,
/// or falls outside the supported window.
pub fn decode(key: &str) -> Result<CalendarDate, CalendarError> {
    let malformed = |reason: &str| CalendarError::MalformedKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = key.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed("expected three dash-separated fields"));
    };

    let year: i32 = parse_field(year).ok_or_else(|| malformed("year is not a valid number"))?;
    let month: u8 = parse_field(month).ok_or_else(|| malformed("month is not a valid number"))?;
    let day: u8 = parse_field(day).ok_or_else(|| malformed("day is not a valid number"))?;

    CalendarDate::from_gregorian(year, month, day).map_err(|e| malformed(&e.to_string()))
}

/// Parses a non-empty all-digit field. Signs, spaces, and group
/// separators are all rejected.
fn parse_field<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(*self))
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DateKeyVisitor)
    }
}

struct DateKeyVisitor;

impl Visitor<'_> for DateKeyVisitor {
    type Value = CalendarDate;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a date key in YYYY-MM-DD form")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode(value).map_err(E::custom)
    }
}
