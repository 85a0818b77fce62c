//! Today command: show the current date.

use anyhow::Result;
use tracing::{info, info_span};

use khayyam_calendar::CalendarDate;

use crate::cli::TodayArgs;
use crate::config;
use crate::convert;

pub fn run(args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let cfg = config::load(&args.config)?;
    let primary = convert::parse_view(&cfg.display.calendar)?;

    let today = CalendarDate::now()?;
    info!(jdn = today.jdn(), key = %today.date_key(), "resolved current day");

    println!("{}", today.format(&cfg.display.pattern, primary));
    if cfg.display.secondary {
        println!("{}", today.format(&cfg.display.pattern, primary.other()));
    }
    if args.key {
        println!("{}", today.date_key());
    }
    Ok(())
}
