//! # khayyam-calendar
//!
//! Bidirectional Gregorian / Solar Hijri (Jalali) date engine over a
//! canonical Julian day number.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     G["GregorianDate"] -->|".to_jdn()"| J["JDN"]
//!     J -->|"GregorianDate::from_jdn()"| G
//!     P["JalaliDate"] -->|".to_jdn()"| J
//!     J -->|"JalaliDate::from_jdn()"| P
//!     J -->|"CalendarDate::from_jdn()"| C["CalendarDate"]
//!     C -->|".format()"| F["display string"]
//!     C -->|".date_key()"| K["YYYY-MM-DD key"]
//!     K -->|"CalendarDate::from_date_key()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use khayyam_calendar::{CalendarDate, CalendarView};
//!
//! // Convert between calendars through one canonical day number
//! let nowruz = CalendarDate::from_jalali(1403, 1, 1).unwrap();
//! let g = nowruz.gregorian();
//! assert_eq!((g.year(), g.month(), g.day()), (2024, 3, 20));
//!
//! // Weekday (0 = Saturday) and token formatting
//! assert_eq!(nowruz.day_of_week(), 4); // Wednesday
//! assert_eq!(nowruz.format("D MMMM YYYY", CalendarView::Jalali), "1 فروردین 1403");
//!
//! // Stable storage keys are always the Gregorian projection
//! assert_eq!(nowruz.date_key(), "2024-03-20");
//!
//! // Field-space arithmetic with day clamping
//! let next = nowruz.add_months(CalendarView::Jalali, 1).unwrap();
//! assert_eq!(next.ymd(CalendarView::Jalali), (1403, 2, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Proleptic Gregorian dates and the civil JDN formulas |
//! | `jalali` | Solar Hijri dates and the break-table leap rule |
//! | `date` | Calendar-neutral date keyed by JDN |
//! | `view` | Gregorian/Jalali calendar selector |
//! | `format` | Token-pattern rendering and name tables |
//! | `key` | Canonical storage-key codec |
//! | `clock` | Injectable current-date source |
//! | `error` | Error types |

mod clock;
mod date;
mod error;
pub mod format;
pub mod gregorian;
pub mod jalali;
pub mod key;
mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use error::CalendarError;
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use view::CalendarView;
