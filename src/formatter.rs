//! Calendar formatting: single month grids and the tiled year view.

use holiday_cache::HolidaySet;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::calendar::{day_of_week, days_in_month, iso_date};
use crate::holidays::{holiday_display_width, month_list, year_header, year_two_column};
use crate::types::{
    CALENDAR_WIDTH, COLOR_HOLIDAY, COLOR_RED, COLOR_RESET, COLOR_SAND_YELLOW, COLOR_TEAL,
    COLOR_TODAY, CalContext, DAY_CELL_WIDTH, GRID_ROWS, MONTH_NAMES, SPACES_BETWEEN_CALS,
    WEEKDAY_LABELS,
};

/// Wrap text in an ANSI color when color output is enabled.
pub fn paint(ctx: &CalContext, color: &str, text: &str) -> String {
    if ctx.color && !text.is_empty() {
        format!("{}{}{}", color, text, COLOR_RESET)
    } else {
        text.to_string()
    }
}

/// Red message, used for warnings and errors.
pub fn paint_error(ctx: &CalContext, text: &str) -> String {
    paint(ctx, COLOR_RED, text)
}

/// Display width of text, ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequence: ESC '[' params final-byte
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) && c != '[' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain.width()
}

/// Prefix text with `width/2 - len/2` spaces.
///
/// Both halves are truncated separately, so odd lengths lean one column
/// to the right of true center.
pub fn center_text(text: &str, width: usize) -> String {
    let spaces = (width / 2).saturating_sub(text.width() / 2);
    format!("{}{}", " ".repeat(spaces), text)
}

/// Centered `"<MonthName> <Year>"` header for one calendar.
pub fn month_header(month: u32, year: i32) -> String {
    let name = MONTH_NAMES[(month as usize + 11) % MONTH_NAMES.len()];
    center_text(&format!("{} {}", name, year), CALENDAR_WIDTH)
}

/// Format a day number, highlighting today and holidays when colored.
///
/// Color priority: today > holiday > regular
fn format_day(
    ctx: &CalContext,
    day: u32,
    month: u32,
    year: i32,
    holidays: Option<&HolidaySet>,
) -> String {
    let day_str = format!("{:>2}", day);

    if ctx.is_today(year, month, day) {
        paint(ctx, COLOR_TODAY, &day_str)
    } else if holidays.is_some_and(|h| h.contains(&iso_date(year, month, day))) {
        paint(ctx, COLOR_HOLIDAY, &day_str)
    } else {
        day_str
    }
}

/// Pad a grid row with `CALENDAR_WIDTH - width + 1` spaces if it is short.
fn pad_row(row: &mut String, width: &mut usize) {
    if *width < CALENDAR_WIDTH {
        let padding = CALENDAR_WIDTH - *width + 1;
        row.push_str(&" ".repeat(padding));
        *width += padding;
    }
}

/// Format the day grid of one month as exactly six rows.
///
/// Every row has the same visible width (`CALENDAR_WIDTH + 1`) whether or
/// not it holds any days, so grids can be placed side by side.
pub fn format_month_grid(
    ctx: &CalContext,
    month: u32,
    year: i32,
    holidays: Option<&HolidaySet>,
) -> Vec<String> {
    let mut rows = vec![String::new(); GRID_ROWS];
    // Visible widths, tracked apart from the strings since those carry
    // escape sequences when colored.
    let mut widths = [0usize; GRID_ROWS];

    let first_dow = day_of_week(month, 1, year) as usize;
    let last_day = days_in_month(month, year);
    debug!(month, year, first_dow, "first weekday of month");

    rows[0].push_str(&" ".repeat(first_dow * DAY_CELL_WIDTH));
    widths[0] = first_dow * DAY_CELL_WIDTH;

    let mut row = 0;
    for day in 1..=last_day {
        rows[row].push_str(&format_day(ctx, day, month, year, holidays));
        rows[row].push(' ');
        widths[row] += DAY_CELL_WIDTH;

        // Start a new row after Saturday or at the end of the month
        if (day as usize + first_dow) % 7 == 0 || day == last_day {
            pad_row(&mut rows[row], &mut widths[row]);
            row += 1;
        }
    }

    for (row, width) in rows.iter_mut().zip(widths.iter_mut()) {
        pad_row(row, width);
    }

    rows
}

/// Lines for a single month, followed by its holidays when enabled.
pub fn render_month(
    ctx: &CalContext,
    month: u32,
    year: i32,
    holidays: Option<&HolidaySet>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(GRID_ROWS + 4);
    lines.push(paint(ctx, COLOR_TEAL, &month_header(month, year)));
    lines.push(paint(ctx, COLOR_SAND_YELLOW, WEEKDAY_LABELS));
    lines.extend(format_month_grid(ctx, month, year, holidays));

    if let Some(holidays) = holidays.filter(|_| ctx.holidays) {
        lines.push(String::new());
        lines.push(paint(ctx, COLOR_SAND_YELLOW, "Holidays"));
        for entry in month_list(holidays, month) {
            lines.push(paint(ctx, COLOR_TEAL, &entry));
        }
    }

    lines
}

/// Lines for the whole year, `ctx.cals_per_row` months wide.
pub fn render_year(ctx: &CalContext, year: i32, holidays: Option<&HolidaySet>) -> Vec<String> {
    let gutter = " ".repeat(SPACES_BETWEEN_CALS);
    let months: Vec<u32> = (1..=12).collect();
    let mut lines = Vec::new();

    for group in months.chunks(ctx.cals_per_row.max(1)) {
        let headers: String = group
            .iter()
            .map(|&month| {
                let header = month_header(month, year);
                let padding = (CALENDAR_WIDTH + 1).saturating_sub(header.width());
                format!("{}{}{}", header, " ".repeat(padding), gutter)
            })
            .collect();
        lines.push(paint(ctx, COLOR_TEAL, &headers));

        let labels = format!("{} {}", WEEKDAY_LABELS, gutter).repeat(group.len());
        lines.push(paint(ctx, COLOR_SAND_YELLOW, &labels));

        let grids: Vec<Vec<String>> = group
            .iter()
            .map(|&month| format_month_grid(ctx, month, year, holidays))
            .collect();
        for row in 0..GRID_ROWS {
            let line: String = grids
                .iter()
                .map(|grid| format!("{}{}", grid[row], gutter))
                .collect();
            lines.push(line);
        }

        lines.push(String::new());
    }

    if let Some(holidays) = holidays.filter(|_| ctx.holidays) {
        let width = holiday_display_width(ctx.cals_per_row);
        debug!(width, "holiday list display width");
        lines.push(paint(ctx, COLOR_SAND_YELLOW, &year_header(holidays, width)));
        for entry in year_two_column(holidays, width) {
            lines.push(paint(ctx, COLOR_TEAL, &entry));
        }
    }

    lines
}
