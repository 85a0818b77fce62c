//! Convert command: re-express a date in the other calendar.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::ConvertArgs;
use crate::config;
use crate::convert;

pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let cfg = config::load(&args.config)?;

    let from = match &args.from {
        Some(name) => convert::parse_view(name)?,
        None => convert::parse_view(&cfg.display.calendar)?,
    };
    let to = match &args.to {
        Some(name) => convert::parse_view(name)?,
        None => from.other(),
    };
    let pattern = args.format.as_deref().unwrap_or(&cfg.display.pattern);

    let date = convert::parse_date(&args.date, from)?;
    info!(jdn = date.jdn(), %from, %to, "date resolved");

    println!("{}", date.format(pattern, to));
    Ok(())
}
