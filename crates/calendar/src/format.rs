//! Token-pattern date rendering with per-calendar name tables.
//!
//! Patterns are plain strings scanned left to right; the longest token
//! match wins and everything else passes through literally. The token
//! set:
//!
//! | Token  | Meaning                               |
//! |--------|---------------------------------------|
//! | `YYYY` | year, unpadded                        |
//! | `YY`   | last two digits of the year           |
//! | `MM`   | month, zero-padded to 2 digits        |
//! | `M`    | month, unpadded                       |
//! | `DD`   | day, zero-padded to 2 digits          |
//! | `D`    | day, unpadded                         |
//! | `MMMM` | full month name                       |
//! | `dddd` | full weekday name                     |
//! | `ddd`  | abbreviated weekday name              |
//! | `HH`, `mm`, `ss` | clock fields, always `00`   |
//!
//! There is no escaping; any occurrence of a token substitutes.

use crate::date::CalendarDate;
use crate::view::CalendarView;

const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[rustfmt::skip]
const JALALI_MONTHS: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور",
    "مهر", "آبان", "آذر", "دی", "بهمن", "اسفند",
];

// Weekday tables are indexed by day-of-week, 0 = Saturday.
#[rustfmt::skip]
const GREGORIAN_WEEKDAYS: [&str; 7] = [
    "Saturday", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
];

const GREGORIAN_WEEKDAYS_ABBR: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

#[rustfmt::skip]
const JALALI_WEEKDAYS: [&str; 7] = [
    "شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنجشنبه", "جمعه",
];

const JALALI_WEEKDAYS_ABBR: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Returns the name of `month` (1..=12) in the given calendar, or
/// `None` for an out-of-range month.
pub fn month_name(view: CalendarView, month: u8) -> Option<&'static str> {
    let idx = usize::from(month.checked_sub(1)?);
    match view {
        CalendarView::Gregorian => GREGORIAN_MONTHS.get(idx).copied(),
        CalendarView::Jalali => JALALI_MONTHS.get(idx).copied(),
    }
}

/// Returns the name of `weekday` (0 = Saturday..=6 = Friday) in the
/// given calendar, or `None` for an out-of-range weekday.
pub fn weekday_name(view: CalendarView, weekday: u8) -> Option<&'static str> {
    let idx = usize::from(weekday);
    match view {
        CalendarView::Gregorian => GREGORIAN_WEEKDAYS.get(idx).copied(),
        CalendarView::Jalali => JALALI_WEEKDAYS.get(idx).copied(),
    }
}

/// Returns the abbreviated name of `weekday` (0 = Saturday..=6 =
/// Friday) in the given calendar, or `None` for an out-of-range
/// weekday.
pub fn weekday_abbr(view: CalendarView, weekday: u8) -> Option<&'static str> {
    let idx = usize::from(weekday);
    match view {
        CalendarView::Gregorian => GREGORIAN_WEEKDAYS_ABBR.get(idx).copied(),
        CalendarView::Jalali => JALALI_WEEKDAYS_ABBR.get(idx).copied(),
    }
}

/// Renders `date` through `pattern` using the given calendar's fields
/// and names.
pub fn format_date(date: CalendarDate, pattern: &str, view: CalendarView) -> String {
    let (year, month, day) = date.ymd(view);
    let month_idx = usize::from(month - 1);
    let weekday_idx = usize::from(date.day_of_week());

    let (months, weekdays, weekday_abbrs) = match view {
        CalendarView::Gregorian => (
            &GREGORIAN_MONTHS,
            &GREGORIAN_WEEKDAYS,
            &GREGORIAN_WEEKDAYS_ABBR,
        ),
        CalendarView::Jalali => (&JALALI_MONTHS, &JALALI_WEEKDAYS, &JALALI_WEEKDAYS_ABBR),
    };

    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    // Token literals are ASCII, so slicing by their byte length stays
    // on character boundaries; literal passthrough advances by the
    // full width of the character.
    while let Some(ch) = rest.chars().next() {
        let eaten = if rest.starts_with("YYYY") {
            out.push_str(&year.to_string());
            4
        } else if rest.starts_with("YY") {
            out.push_str(&format!("{:02}", year.rem_euclid(100)));
            2
        } else if rest.starts_with("MMMM") {
            out.push_str(months[month_idx]);
            4
        } else if rest.starts_with("MM") {
            out.push_str(&format!("{month:02}"));
            2
        } else if rest.starts_with('M') {
            out.push_str(&month.to_string());
            1
        } else if rest.starts_with("DD") {
            out.push_str(&format!("{day:02}"));
            2
        } else if rest.starts_with('D') {
            out.push_str(&day.to_string());
            1
        } else if rest.starts_with("dddd") {
            out.push_str(weekdays[weekday_idx]);
            4
        } else if rest.starts_with("ddd") {
            out.push_str(weekday_abbrs[weekday_idx]);
            3
        } else if rest.starts_with("HH") || rest.starts_with("mm") || rest.starts_with("ss") {
            // Dates carry no time of day; clock tokens render midnight.
            out.push_str("00");
            2
        } else {
            out.push(ch);
            ch.len_utf8()
        };
        rest = &rest[eaten..];
    }
    out
}
