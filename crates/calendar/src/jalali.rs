//! Solar Hijri (Jalali) dates and their Julian day number conversions.
//!
//! Leap years follow the arithmetic 2820-year cycle: a table of break
//! years partitions the calendar into spans of well-behaved 33-year
//! sub-cycles, and both the leap flag and the Gregorian date of Nowruz
//! (Farvardin 1) are derived by walking that table.

use std::fmt;

use crate::error::CalendarError;
use crate::gregorian::{self, GregorianDate};
use crate::view::CalendarView;

/// First supported Jalali year (Gregorian 622 CE).
pub const YEAR_MIN: i32 = 1;
/// Last supported Jalali year, bounded by the final break-table entry.
pub const YEAR_MAX: i32 = 3177;

/// Julian day number of Farvardin 1 of [`YEAR_MIN`] (622-03-22 Gregorian).
pub const MIN_JDN: i64 = 1_948_321;
/// Julian day number of Esfand 29 of [`YEAR_MAX`] (3799-03-19 Gregorian).
pub const MAX_JDN: i64 = 3_108_694;

/// Years in which a new sequence of 33-year leap sub-cycles begins,
/// after Borkowski's analysis of the astronomical calendar. The final
/// entry bounds the supported range.
#[rustfmt::skip]
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// Derived per-year facts shared by the leap test and the conversions.
#[derive(Debug, Clone, Copy)]
struct YearInfo {
    leap: bool,
    nowruz_jdn: i64,
}

/// Walks the break table for `year`.
///
/// Counts Jalali and Gregorian leap days since the epoch to locate
/// Nowruz within March, then reduces the year's position inside its
/// 33-year sub-cycle to the leap flag.
fn year_info(year: i32) -> Result<YearInfo, CalendarError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(CalendarError::InvalidYear {
            calendar: CalendarView::Jalali,
            year,
            min: YEAR_MIN,
            max: YEAR_MAX,
        });
    }

    let mut leap_j = -14;
    let mut prev_break = BREAKS[0];
    let mut jump = 0;
    for &brk in &BREAKS[1..] {
        jump = brk - prev_break;
        if year < brk {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        prev_break = brk;
    }
    let mut n = year - prev_break;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let gregorian_year = year + 621;
    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;
    let nowruz_jdn = gregorian::civil_jdn(gregorian_year, 3, march as u8);

    // Years in the head of a span that has no full leading sub-cycle
    // borrow their position from the end of a notional 33-year cycle.
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let r = (n + 1) % 33;
    let leap = r != 0 && (r - 1) % 4 == 0;

    Ok(YearInfo { leap, nowruz_jdn })
}

/// Days from Farvardin 1 to the first day of `month`.
fn month_offset(month: u8) -> i64 {
    let month = i64::from(month);
    if month <= 6 {
        (month - 1) * 31
    } else {
        186 + (month - 7) * 30
    }
}

/// Returns whether `year` is a Jalali leap year (Esfand has 30 days).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside
/// [`YEAR_MIN`]..=[`YEAR_MAX`].
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    year_info(year).map(|info| info.leap)
}

/// Returns the number of days in the given Jalali month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is out of range and
/// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let info = year_info(year)?;
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 => Ok(if info.leap { 30 } else { 29 }),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Returns the number of days in the given Jalali year (365 or 366).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is out of range.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    year_info(year).map(|info| if info.leap { 366 } else { 365 })
}

/// A date in the Solar Hijri (Jalali) calendar.
///
/// Field values are validated at construction, which makes
/// [`JalaliDate::to_jdn`] infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    /// Creates a new `JalaliDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside
    /// [`YEAR_MIN`]..=[`YEAR_MAX`], [`CalendarError::InvalidMonth`] if
    /// `month` is not in 1..=12, and [`CalendarError::InvalidDay`] if
    /// `day` does not exist in the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                calendar: CalendarView::Jalali,
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `JalaliDate` from a Julian day number.
    ///
    /// This is the exact inverse of [`JalaliDate::to_jdn`] over the
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
        // A date on or after Nowruz of the Gregorian year's nominal
        // Jalali year belongs to that year; otherwise it falls in the
        // previous one. The final supported year spills into Gregorian
        // year YEAR_MAX + 622, so the nominal year is clamped before
        // the table is consulted.
        let gregorian = GregorianDate::from_jdn(jdn)?;
        let mut year = (gregorian.year() - 621).min(YEAR_MAX);
        let mut offset = jdn - year_info(year)?.nowruz_jdn;
        if offset < 0 {
            year -= 1;
            offset = jdn - year_info(year)?.nowruz_jdn;
        }
        let (month, day) = if offset < 186 {
            ((offset / 31 + 1) as u8, (offset % 31 + 1) as u8)
        } else {
            let rest = offset - 186;
            ((rest / 30 + 7) as u8, (rest % 30 + 1) as u8)
        };
        Ok(Self { year, month, day })
    }

    /// Returns the Julian day number of this date.
    pub fn to_jdn(self) -> i64 {
        let info = year_info(self.year).expect("JalaliDate always holds an in-range year");
        info.nowruz_jdn + month_offset(self.month) + i64::from(self.day) - 1
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

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
