//! Sources of the current civil date.

/// Supplies the current date as a proleptic Gregorian
/// `(year, month, day)` triple.
///
/// Abstracting the wall clock keeps everything that depends on "today"
/// testable with a fixed date.
pub trait Clock {
    /// Returns the current local civil date.
    fn today(&self) -> (i32, u8, u8);
}

/// The system wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> (i32, u8, u8) {
        use chrono::Datelike;

        let now = chrono::Local::now().date_naive();
        (now.year(), now.month() as u8, now.day() as u8)
    }
}

/// A clock pinned to one date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    year: i32,
    month: u8,
    day: u8,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}
