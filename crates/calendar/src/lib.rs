//! # nephele-calendar
//!
//! Date arithmetic for daily-to-sub-daily disaggregation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=366)"]
//!     A -->|"month_of()"| C["month (1..=12)"]
//!     A -->|"daily_sequence()"| D["Vec of NaiveDate"]
//!     D -->|"check_contiguous()"| D
//!     E["TimeStep"] --> F["SubDailyGrid"]
//!     A --> F
//!     F -->|".timestamps() / .minutes()"| G["sub-daily axis"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use nephele_calendar::{Doy, SubDailyGrid, TimeStep};
//!
//! let start = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();
//! assert_eq!(Doy::from_date(start).get(), 61); // leap year
//!
//! let step = TimeStep::new(30).unwrap();
//! let grid = SubDailyGrid::new(start, 2, step);
//! assert_eq!(grid.len(), 96);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and month lookup |
//! | `step` | Validated sub-daily time step |
//! | `sequence` | Daily date sequences and contiguity checks |
//! | `grid` | Regular sub-daily time grid |
//! | `error` | Error types |

mod doy;
mod error;
mod grid;
mod sequence;
mod step;

pub use doy::{Doy, month_of};
pub use error::CalendarError;
pub use grid::SubDailyGrid;
pub use sequence::{check_contiguous, daily_sequence};
pub use step::{MINUTES_PER_DAY, TimeStep};
