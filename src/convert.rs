//! Translation between CLI strings and engine types.

use anyhow::{Context, Result, bail};
use khayyam_calendar::{CalendarDate, CalendarView};

/// Parses a calendar name given on the command line or in config.
pub fn parse_view(name: &str) -> Result<CalendarView> {
    match name.to_ascii_lowercase().as_str() {
        "gregorian" | "g" | "miladi" => Ok(CalendarView::Gregorian),
        "jalali" | "j" | "shamsi" | "persian" => Ok(CalendarView::Jalali),
        _ => bail!("unknown calendar {name:?}: expected \"gregorian\" or \"jalali\""),
    }
}

/// Parses a `Y-M-D` or `Y/M/D` date argument in the given calendar.
pub fn parse_date(text: &str, view: CalendarView) -> Result<CalendarDate> {
    let sep = if text.contains('/') { '/' } else { '-' };
    let mut fields = text.split(sep);
    let (Some(year), Some(month), Some(day), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        bail!("expected a Y-M-D or Y/M/D date, got {text:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year {year:?} in date {text:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month {month:?} in date {text:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day {day:?} in date {text:?}"))?;
    Ok(CalendarDate::from_ymd(view, year, month, day)?)
}
