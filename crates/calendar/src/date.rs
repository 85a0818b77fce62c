//! Calendar-neutral civil days keyed by Julian day number.

use std::fmt;
use std::ops::Sub;

use crate::clock::{Clock, SystemClock};
use crate::error::CalendarError;
use crate::format;
use crate::gregorian::{self, GregorianDate};
use crate::jalali::{self, JalaliDate};
use crate::key;
use crate::view::CalendarView;

/// A single civil day, stored as its Julian day number.
///
/// Construction from either calendar resolves to the canonical day
/// number immediately, so a `CalendarDate` built from a Gregorian date
/// and one built from the matching Jalali date compare equal. Views,
/// ordering, and arithmetic all work on that number.
///
/// The supported window is where both calendars are defined: Jalali
/// years 1..=3177, Gregorian 622-03-22 through 3799-03-19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    jdn: i64,
}

impl CalendarDate {
    /// Creates a `CalendarDate` from a Julian day number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if `jdn` is outside
    /// [`jalali::MIN_JDN`]..=[`jalali::MAX_JDN`].
    pub fn from_jdn(jdn: i64) -> Result<Self, CalendarError> {
        if !(jalali::MIN_JDN..=jalali::MAX_JDN).contains(&jdn) {
            return Err(CalendarError::JdnOutOfRange {
                jdn,
                min: jalali::MIN_JDN,
                max: jalali::MAX_JDN,
            });
        }
        Ok(Self { jdn })
    }

    /// Creates a `CalendarDate` from a Gregorian year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns the field validation errors of [`GregorianDate::new`],
    /// or [`CalendarError::JdnOutOfRange`] for valid Gregorian dates
    /// that fall outside the supported window.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_jdn(GregorianDate::new(year, month, day)?.to_jdn())
    }

    /// Creates a `CalendarDate` from a Jalali year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns the field validation errors of [`JalaliDate::new`].
    pub fn from_jalali(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_jdn(JalaliDate::new(year, month, day)?.to_jdn())
    }

    /// Creates a `CalendarDate` from fields interpreted in the given
    /// calendar.
    ///
    /// # Errors
    ///
    /// As [`CalendarDate::from_gregorian`] and
    /// [`CalendarDate::from_jalali`].
    pub fn from_ymd(
        view: CalendarView,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        match view {
            CalendarView::Gregorian => Self::from_gregorian(year, month, day),
            CalendarView::Jalali => Self::from_jalali(year, month, day),
        }
    }

    /// Returns the current date according to `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock reports a date outside the
    /// supported window.
    pub fn today<C: Clock>(clock: &C) -> Result<Self, CalendarError> {
        let (year, month, day) = clock.today();
        Self::from_gregorian(year, month, day)
    }

    /// Returns the current date according to the system clock, in the
    /// local civil day.
    ///
    /// # Errors
    ///
    /// As [`CalendarDate::today`].
    pub fn now() -> Result<Self, CalendarError> {
        Self::today(&SystemClock)
    }

    /// Returns the Julian day number.
    pub fn jdn(self) -> i64 {
        self.jdn
    }

    /// Returns the Gregorian view of this date.
    pub fn gregorian(self) -> GregorianDate {
        GregorianDate::from_jdn(self.jdn).expect("CalendarDate always holds an in-window jdn")
    }

    /// Returns the Jalali view of this date.
    pub fn jalali(self) -> JalaliDate {
        JalaliDate::from_jdn(self.jdn).expect("CalendarDate always holds an in-window jdn")
    }

    /// Returns `(year, month, day)` in the given calendar.
    pub fn ymd(self, view: CalendarView) -> (i32, u8, u8) {
        match view {
            CalendarView::Gregorian => {
                let date = self.gregorian();
                (date.year(), date.month(), date.day())
            }
            CalendarView::Jalali => {
                let date = self.jalali();
                (date.year(), date.month(), date.day())
            }
        }
    }

    /// Returns the day of the week, 0 = Saturday through 6 = Friday
    /// (Persian week convention).
    pub fn day_of_week(self) -> u8 {
        ((self.jdn + 2) % 7) as u8
    }

    /// Returns whether this date falls on a weekend in the given
    /// calendar's regional convention: Friday for Jalali, Friday and
    /// Saturday for Gregorian.
    pub fn is_weekend(self, view: CalendarView) -> bool {
        let dow = self.day_of_week();
        match view {
            CalendarView::Jalali => dow == 6,
            CalendarView::Gregorian => dow == 6 || dow == 0,
        }
    }

    /// Returns whether `self` and `other` are the same civil day.
    pub fn is_same_day(self, other: Self) -> bool {
        self == other
    }

    /// Returns the number of days from `self` to `other`, negative if
    /// `other` is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        other.jdn - self.jdn
    }

    /// Returns the date `days` days later (earlier if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if the result leaves
    /// the supported window.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_jdn(self.jdn.saturating_add(days))
    }

    /// Returns the date `months` months later (earlier if negative),
    /// stepping through the given calendar's fields.
    ///
    /// The day-of-month is kept and clamped to the target month's
    /// length, so Shahrivar 31 plus one month is Mehr 30.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting year leaves the supported
    /// window.
    pub fn add_months(self, view: CalendarView, months: i32) -> Result<Self, CalendarError> {
        let (year, month, day) = self.ymd(view);
        let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(months);
        // total / 12 fits i32 for any in-window year and i32 step.
        let new_year = total.div_euclid(12) as i32;
        let new_month = (total.rem_euclid(12) + 1) as u8;
        Self::with_clamped_day(view, new_year, new_month, day)
    }

    /// Returns the date `years` years later (earlier if negative),
    /// stepping through the given calendar's fields.
    ///
    /// The day-of-month is kept and clamped to the target month's
    /// length, so Esfand 30 of a leap year plus one year is Esfand 29.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting year leaves the supported
    /// window.
    pub fn add_years(self, view: CalendarView, years: i32) -> Result<Self, CalendarError> {
        let (year, month, day) = self.ymd(view);
        Self::with_clamped_day(view, year.saturating_add(years), month, day)
    }

    /// Builds a date in the given calendar with `day` clamped to the
    /// target month's length.
    fn with_clamped_day(
        view: CalendarView,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        let max_day = match view {
            CalendarView::Gregorian => gregorian::days_in_month(year, month)?,
            CalendarView::Jalali => jalali::days_in_month(year, month)?,
        };
        Self::from_ymd(view, year, month, day.min(max_day))
    }

    /// Renders this date through a token pattern in the given calendar.
    /// See [`format::format_date`] for the token set.
    pub fn format(self, pattern: &str, view: CalendarView) -> String {
        format::format_date(self, pattern, view)
    }

    /// Returns the canonical `YYYY-MM-DD` Gregorian storage key.
    pub fn date_key(self) -> String {
        key::encode(self)
    }

    /// Parses a date from its canonical storage key.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedKey`] if `key` is not a valid
    /// key.
    pub fn from_date_key(date_key: &str) -> Result<Self, CalendarError> {
        key::decode(date_key)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.gregorian().fmt(f)
    }
}

impl Sub for CalendarDate {
    type Output = i64;

    /// Days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        self.jdn - rhs.jdn
    }
}
