//! Console calendar with national holiday highlighting.
//!
//! Features:
//! - Single month or whole year views
//! - Configurable number of months per row
//! - Today and holiday highlighting in ANSI color
//! - Holiday listings from a cached public holiday API

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod holidays;
pub mod logging;
pub mod types;

pub use holiday_cache::HolidaySet;
