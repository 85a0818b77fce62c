//! Year command: leap status and month table for one year.

use anyhow::{Result, bail};
use tracing::info_span;

use khayyam_calendar::{CalendarView, format, gregorian, jalali};

use crate::cli::YearArgs;
use crate::config;
use crate::convert;

pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let cfg = config::load(&args.config)?;
    let view = match &args.calendar {
        Some(name) => convert::parse_view(name)?,
        None => convert::parse_view(&cfg.display.calendar)?,
    };

    let leap = match view {
        CalendarView::Gregorian => {
            if !(gregorian::YEAR_MIN..=gregorian::YEAR_MAX).contains(&args.year) {
                bail!(
                    "gregorian year {} outside supported range {}..={}",
                    args.year,
                    gregorian::YEAR_MIN,
                    gregorian::YEAR_MAX
                );
            }
            gregorian::is_leap_year(args.year)
        }
        CalendarView::Jalali => jalali::is_leap_year(args.year)?,
    };

    let mut total = 0u16;
    let mut rows = Vec::with_capacity(12);
    for month in 1..=12u8 {
        let days = match view {
            CalendarView::Gregorian => gregorian::days_in_month(args.year, month)?,
            CalendarView::Jalali => jalali::days_in_month(args.year, month)?,
        };
        let name = format::month_name(view, month).expect("months 1..=12 are always named");
        rows.push((month, name, days));
        total += u16::from(days);
    }

    println!(
        "{} ({view}): {}, {total} days",
        args.year,
        if leap { "leap year" } else { "common year" }
    );
    for (month, name, days) in rows {
        println!("{month:>4}  {name:<12} {days:>2}");
    }
    Ok(())
}
