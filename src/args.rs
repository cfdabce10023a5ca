//! Command-line argument parsing using clap.
//!
//! Arguments follow the convention `[month] [year]`: a single value above
//! 12 is a year, otherwise a month of the current year.

use chrono::Datelike;
use clap::{ArgAction, Parser};
use std::io::IsTerminal;

use crate::error::CalError;
use crate::types::{CalContext, DEFAULT_CALS_PER_ROW, View};

/// Overrides today's date, as `YYYY-MM-DD`.
pub const TEST_TIME_ENV: &str = "CAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "cal")]
#[command(about = "Console calendar generator", long_about = None)]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Number of calendars per row in year view (must divide 12).
    #[arg(
        short = 'n',
        long = "num",
        value_name = "num",
        allow_negative_numbers = true,
        help_heading = "Display options"
    )]
    pub num: Option<i64>,

    /// Display local country holidays in the calendar.
    #[arg(short = 'd', long = "display-holidays", help_heading = "Display options")]
    pub display_holidays: bool,

    /// Clear the holiday cache on the local computer and exit.
    #[arg(short = 'c', long = "clear-cache", help_heading = "Holiday options")]
    pub clear_cache: bool,

    /// Disable colorized output.
    #[arg(short = 'z', long = "no-color", help_heading = "Output options")]
    pub no_color: bool,

    /// Display extra program information on stderr.
    #[arg(short = 'D', long, help_heading = "Output options")]
    pub debug: bool,

    /// Show the program version and exit.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Display this help and exit.
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Month and/or year.
    #[arg(value_name = "MONTH_AND_OR_YEAR", allow_negative_numbers = true)]
    pub dates: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Parameters:
  <None>         Display the current year
  YEAR           Display the entire YEAR
  MONTH          Display the MONTH in the current year
  MONTH YEAR     Display the MONTH and YEAR provided

Examples:
  cal            Display the current year
  cal -n 4 -d    Display the current year with 4 months per row with holidays
  cal 9          Display September of the current year
  cal 2022       Display the entire year 2022
  cal 9 2022     Display only September of 2022
  cal -D 6       Display June of the current year in debug mode

Holidays come from https://date.nager.at; see https://date.nager.at/Country
for the supported countries. Set CAL_COUNTRY to override the locale.";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    /// Build the context from parsed arguments.
    ///
    /// `--num` is not applied here; see [`CalContext::set_cals_per_row`].
    pub fn new(args: &Args) -> Self {
        CalContext {
            cals_per_row: DEFAULT_CALS_PER_ROW,
            color: !args.no_color && std::io::stdout().is_terminal(),
            debug: args.debug,
            today: get_today_date(),
            holidays: args.display_holidays,
        }
    }
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Parse one positional value as a positive number.
fn parse_positive(value: &str) -> Result<i32, CalError> {
    let number: i64 = value.trim().parse().map_err(|_| {
        CalError::Input("Parameters can only be numbers.  Usage '-h' for options".to_string())
    })?;
    if number <= 0 {
        return Err(CalError::Input(
            "Month & Year values must be greater than zero".to_string(),
        ));
    }
    i32::try_from(number)
        .map_err(|_| CalError::Input(format!("Invalid Month and/or Year: '{}'", value)))
}

/// Decide what to display from the positional arguments.
///
/// Argument patterns:
/// - 0 args: the current year
/// - 1 arg: a year if greater than 12, else a month of the current year
/// - 2 args: month year
pub fn get_display_request(args: &Args, today: chrono::NaiveDate) -> Result<View, CalError> {
    if args.dates.len() > 2 {
        return Err(CalError::Input(
            "There can not be more than 2 dates given on the commandline.  Please see Help (-h)"
                .to_string(),
        ));
    }

    let values = args
        .dates
        .iter()
        .map(|v| parse_positive(v))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [] => Ok(View::Year(today.year())),
        [year] if *year > 12 => Ok(View::Year(*year)),
        [month] => Ok(View::Month {
            month: *month as u32,
            year: today.year(),
        }),
        [month, year] => {
            if !(1..=12).contains(month) {
                return Err(CalError::InvalidMonth(i64::from(*month)));
            }
            Ok(View::Month {
                month: *month as u32,
                year: *year,
            })
        }
        _ => unreachable!("at most two values"),
    }
}
