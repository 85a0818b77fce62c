//! Calendar view selection.

use std::fmt;

/// The calendar a date is being expressed in.
///
/// Every date is stored as a Julian day number; the view only selects which
/// projection field-based constructors, month arithmetic, formatting, and
/// weekend rules operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarView {
    /// The proleptic Gregorian calendar.
    Gregorian,
    /// The Solar Hijri (Jalali) calendar.
    Jalali,
}

impl CalendarView {
    /// Returns the lowercase name of the view.
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarView::Gregorian => "gregorian",
            CalendarView::Jalali => "jalali",
        }
    }

    /// Returns the opposite view.
    pub fn other(self) -> Self {
        match self {
            CalendarView::Gregorian => CalendarView::Jalali,
            CalendarView::Jalali => CalendarView::Gregorian,
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
