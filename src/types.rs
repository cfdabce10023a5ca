//! Type definitions and constants for calendar formatting.

/// Calendar formatting context containing all display options.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Months per row in the year view; always divides 12.
    pub cals_per_row: usize,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether debug logging was requested.
    pub debug: bool,
    /// Today's date for highlighting.
    pub today: chrono::NaiveDate,
    /// Whether to fetch and show national holidays. Cleared when they
    /// cannot be loaded.
    pub holidays: bool,
}

/// What the positional arguments asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Whole year, tiled `cals_per_row` months wide.
    Year(i32),
    /// A single month.
    Month { month: u32, year: i32 },
}

impl View {
    pub fn year(self) -> i32 {
        match self {
            View::Year(year) | View::Month { year, .. } => year,
        }
    }
}

// Constants for calendar formatting
pub const CALENDAR_WIDTH: usize = 20;
pub const SPACES_BETWEEN_CALS: usize = 2;
pub const DEFAULT_CALS_PER_ROW: usize = 3;
pub const MONTHS_PER_YEAR: usize = 12;
pub const GRID_ROWS: usize = 6; // enough for any month
pub const DAY_CELL_WIDTH: usize = 3;

pub const WEEKDAY_LABELS: &str = "Su Mo Tu We Th Fr Sa";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_TODAY: &str = "\x1b[1;97;44m";
pub const COLOR_HOLIDAY: &str = "\x1b[38;5;179m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
