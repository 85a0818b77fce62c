//! Error types for the khayyam-calendar crate.

use crate::view::CalendarView;

/// Error type for all fallible operations in the khayyam-calendar crate.
///
/// This enum covers field validation for both calendars, the supported
/// Julian day range, and storage-key parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {calendar} month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The calendar the date was expressed in.
        calendar: CalendarView,
        /// The year containing the rejected date.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year is outside the supported span of its calendar.
    #[error("{calendar} year {year} outside supported range {min}..={max}")]
    InvalidYear {
        /// The calendar the year was expressed in.
        calendar: CalendarView,
        /// The invalid year that was provided.
        year: i32,
        /// The first supported year of the calendar.
        min: i32,
        /// The last supported year of the calendar.
        max: i32,
    },

    /// Returned when a Julian day number falls outside the span the
    /// requested conversion covers.
    #[error("julian day {jdn} outside supported range {min}..={max}")]
    JdnOutOfRange {
        /// The rejected Julian day number.
        jdn: i64,
        /// The first Julian day number the conversion covers.
        min: i64,
        /// The last Julian day number the conversion covers.
        max: i64,
    },

    /// Returned when a storage key cannot be parsed back into a date.
    #[error("malformed date key {key:?}: {reason}")]
    MalformedKey {
        /// The key that failed to parse.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },
}
