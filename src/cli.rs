use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Khayyam Gregorian / Solar Hijri calendar toolkit.
#[derive(Parser)]
#[command(
    name = "khayyam",
    version,
    about = "Gregorian / Solar Hijri (Jalali) calendar converter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a date from one calendar to the other.
    Convert(ConvertArgs),
    /// Show the current date.
    Today(TodayArgs),
    /// Describe a year: leap status and month lengths.
    Year(YearArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date to convert, as Y-M-D or Y/M/D.
    pub date: String,

    /// Calendar the input date is expressed in (defaults to the
    /// configured primary calendar).
    #[arg(long, value_name = "CALENDAR")]
    pub from: Option<String>,

    /// Calendar to convert into (defaults to the other calendar).
    #[arg(long, value_name = "CALENDAR")]
    pub to: Option<String>,

    /// Format pattern for the output (overrides the config pattern).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "khayyam.toml")]
    pub config: PathBuf,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Also print the canonical storage key.
    #[arg(short, long)]
    pub key: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "khayyam.toml")]
    pub config: PathBuf,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Year number to describe.
    pub year: i32,

    /// Calendar the year belongs to (defaults to the configured
    /// primary calendar).
    #[arg(long, value_name = "CALENDAR")]
    pub calendar: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "khayyam.toml")]
    pub config: PathBuf,
}
