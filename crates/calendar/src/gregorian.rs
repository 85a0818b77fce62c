//! Proleptic Gregorian dates and their Julian day number conversions.

use std::fmt;

use crate::error::CalendarError;
use crate::view::CalendarView;

/// First supported Gregorian year (the start of the Julian period).
pub const YEAR_MIN: i32 = -4712;
/// Last supported Gregorian year.
pub const YEAR_MAX: i32 = 9999;

/// Julian day number of January 1 of [`YEAR_MIN`].
pub const MIN_JDN: i64 = 38;
/// Julian day number of December 31 of [`YEAR_MAX`].
pub const MAX_JDN: i64 = 5_373_484;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year 0 exists and is 1 BCE, so there
/// is no ambiguity around the BCE/CE boundary. Field values are validated
/// at construction, which makes [`GregorianDate::to_jdn`] infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside
    /// [`YEAR_MIN`]..=[`YEAR_MAX`], [`CalendarError::InvalidMonth`] if
    /// `month` is not in 1..=12, and [`CalendarError::InvalidDay`] if `day`
    /// does not exist in the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(CalendarError::InvalidYear {
                calendar: CalendarView::Gregorian,
                year,
                min: YEAR_MIN,
                max: YEAR_MAX,
            });
        }
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                calendar: CalendarView::Gregorian,
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `GregorianDate` from a Julian day number.
    ///
    /// This is the exact inverse of [`GregorianDate::to_jdn`] over the
    /// whole supported range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if `jdn` is outside
    /// [`MIN_JDN`]..=[`MAX_JDN`].
    pub fn from_jdn(jdn: i64) -> Result<Self, CalendarError> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return Err(CalendarError::JdnOutOfRange {
                jdn,
                min: MIN_JDN,
                max: MAX_JDN,
            });
        }
        // Richards' integer inversion of the civil formula. Every
        // intermediate value is non-negative for jdn >= MIN_JDN, so plain
        // integer division is floor division.
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146_097;
        let c = a - 146_097 * b / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        let day = (e - (153 * m + 2) / 5 + 1) as u8;
        let month = (m + 3 - 12 * (m / 10)) as u8;
        let year = (100 * b + d - 4800 + m / 10) as i32;
        Ok(Self { year, month, day })
    }

    /// Returns the Julian day number of this date.
    pub fn to_jdn(self) -> i64 {
        civil_jdn(self.year, self.month, self.day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Civil Gregorian-to-JDN formula.
///
/// Defined for every date with `year >= YEAR_MIN`: the shifted year
/// `y = year + 4800` is then positive, so plain integer division is floor
/// division throughout.
pub(crate) fn civil_jdn(year: i32, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Returns whether `year` is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given Gregorian month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            GregorianDate::new(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            GregorianDate::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            GregorianDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                calendar: CalendarView::Gregorian,
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_leap_day() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn new_invalid_year() {
        assert_eq!(
            GregorianDate::new(-4713, 1, 1).unwrap_err(),
            CalendarError::InvalidYear {
                calendar: CalendarView::Gregorian,
                year: -4713,
                min: YEAR_MIN,
                max: YEAR_MAX,
            }
        );
        assert!(GregorianDate::new(10_000, 1, 1).is_err());
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn days_in_month_common_and_leap() {
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2024, 1).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn to_jdn_known_values() {
        let cases: &[(i32, u8, u8, i64)] = &[
            (1970, 1, 1, 2_440_588),
            (2000, 1, 1, 2_451_545),
            (2024, 3, 20, 2_460_390),
            (1979, 2, 11, 2_443_916),
            (1999, 3, 21, 2_451_259),
            (622, 3, 22, 1_948_321),
            (-4712, 1, 1, 38),
        ];
        for &(year, month, day, jdn) in cases {
            let date = GregorianDate::new(year, month, day).unwrap();
            assert_eq!(
                date.to_jdn(),
                jdn,
                "to_jdn mismatch for {year}-{month}-{day}"
            );
        }
    }

    #[test]
    fn from_jdn_known_values() {
        let cases: &[(i64, i32, u8, u8)] = &[
            (2_440_588, 1970, 1, 1),
            (2_451_545, 2000, 1, 1),
            (2_460_390, 2024, 3, 20),
            (2_443_916, 1979, 2, 11),
            (38, -4712, 1, 1),
        ];
        for &(jdn, year, month, day) in cases {
            let date = GregorianDate::from_jdn(jdn).unwrap();
            assert_eq!(
                (date.year(), date.month(), date.day()),
                (year, month, day),
                "from_jdn mismatch for jdn {jdn}"
            );
        }
    }

    #[test]
    fn from_jdn_out_of_range() {
        assert_eq!(
            GregorianDate::from_jdn(MIN_JDN - 1).unwrap_err(),
            CalendarError::JdnOutOfRange {
                jdn: 37,
                min: MIN_JDN,
                max: MAX_JDN,
            }
        );
        assert!(GregorianDate::from_jdn(MAX_JDN + 1).is_err());
    }

    #[test]
    fn jdn_range_constants() {
        assert_eq!(GregorianDate::new(YEAR_MIN, 1, 1).unwrap().to_jdn(), MIN_JDN);
        assert_eq!(
            GregorianDate::new(YEAR_MAX, 12, 31).unwrap().to_jdn(),
            MAX_JDN
        );
    }

    #[test]
    fn roundtrip_two_decades() {
        for year in 1990..=2010 {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month).unwrap() {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    let back = GregorianDate::from_jdn(date.to_jdn()).unwrap();
                    assert_eq!(date, back, "roundtrip failed for {year}-{month}-{day}");
                }
            }
        }
    }

    #[test]
    fn consecutive_days_consecutive_jdns() {
        // Dec 31 -> Jan 1 and Feb 28 -> Feb 29 -> Mar 1 boundaries.
        let pairs: &[((i32, u8, u8), (i32, u8, u8))] = &[
            ((1999, 12, 31), (2000, 1, 1)),
            ((2024, 2, 28), (2024, 2, 29)),
            ((2024, 2, 29), (2024, 3, 1)),
            ((2023, 2, 28), (2023, 3, 1)),
        ];
        for &((y1, m1, d1), (y2, m2, d2)) in pairs {
            let first = GregorianDate::new(y1, m1, d1).unwrap();
            let second = GregorianDate::new(y2, m2, d2).unwrap();
            assert_eq!(
                first.to_jdn() + 1,
                second.to_jdn(),
                "expected consecutive jdns for {first} and {second}"
            );
        }
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(
            GregorianDate::new(622, 3, 22).unwrap().to_string(),
            "0622-03-22"
        );
        assert_eq!(
            GregorianDate::new(2024, 11, 5).unwrap().to_string(),
            "2024-11-05"
        );
    }

    #[test]
    fn ordering_is_chronological() {
        let earlier = GregorianDate::new(2024, 3, 20).unwrap();
        let later = GregorianDate::new(2024, 3, 21).unwrap();
        let next_year = GregorianDate::new(2025, 1, 1).unwrap();
        assert!(earlier < later);
        assert!(later < next_year);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<GregorianDate>();
    }
}
