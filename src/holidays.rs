//! Holiday listings shown under the calendar, and loading them for a run.

use holiday_cache::{HolidayCache, HolidayError, HolidaySet};
use tracing::{debug, warn};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::error_chain;
use crate::formatter::{center_text, paint_error};
use crate::types::{CALENDAR_WIDTH, CalContext, SPACES_BETWEEN_CALS};

/// Width of the year view, which the two-column holiday list spans.
pub fn holiday_display_width(cals_per_row: usize) -> usize {
    (CALENDAR_WIDTH + SPACES_BETWEEN_CALS) * cals_per_row
}

/// Holidays falling in `month`, one `"YYYY-MM-DD | LocalName"` line each.
pub fn month_list(holidays: &HolidaySet, month: u32) -> Vec<String> {
    let month = format!("{month:02}");
    holidays
        .iter()
        .filter(|(date, _)| date.split('-').nth(1) == Some(month.as_str()))
        .map(|(date, name)| format!("{} | {}", date, name))
        .collect()
}

/// `"<year> holidays for <country>"`, centered on the display width.
pub fn year_header(holidays: &HolidaySet, display_width: usize) -> String {
    let header = format!("{} holidays for {}", holidays.year(), holidays.country().name);
    center_text(&header, display_width)
}

/// The year's holidays in two columns, earlier half on the left.
///
/// With an odd count the left column is one longer and its last entry
/// stands alone on the final line.
pub fn year_two_column(holidays: &HolidaySet, display_width: usize) -> Vec<String> {
    let entries: Vec<String> = holidays
        .iter()
        .map(|(date, name)| fit_entry(&short_entry(date, name), display_width))
        .collect();

    let left_count = entries.len().div_ceil(2);
    let column_width = display_width / 2;

    (0..left_count)
        .map(|i| {
            let left = &entries[i];
            match entries.get(left_count + i) {
                Some(right) => {
                    let padding = column_width.saturating_sub(left.width());
                    format!("{}{}{}", left, " ".repeat(padding), right)
                }
                None => left.clone(),
            }
        })
        .collect()
}

/// `"MM-DD|LocalName"`; the year is already in the header.
fn short_entry(date: &str, name: &str) -> String {
    let month_day = date.split_once('-').map_or(date, |(_, rest)| rest);
    format!("{}|{}", month_day, name)
}

/// Shorten an entry that would not fit in half the display width.
fn fit_entry(entry: &str, display_width: usize) -> String {
    let half = display_width / 2;
    if entry.width() <= half.saturating_sub(1) {
        return entry.to_string();
    }

    let budget = half.saturating_sub(5);
    let mut used = 0;
    let mut shortened: String = entry
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    shortened.push_str("..>");
    shortened
}

/// Fetch the holidays for `year` if they are enabled.
///
/// Any failure turns holiday display off for the rest of the run and
/// prints a warning; the calendar itself is still shown.
pub fn load_holidays(ctx: &mut CalContext, cache: &HolidayCache, year: i32) -> Option<HolidaySet> {
    if !ctx.holidays {
        return None;
    }

    match cache.get(year) {
        Ok(holidays) => {
            debug!(year, count = holidays.len(), "holidays loaded");
            Some(holidays)
        }
        Err(e) => {
            disable_holidays(ctx, &e);
            None
        }
    }
}

/// Turn holiday display off and tell the user why.
pub fn disable_holidays(ctx: &mut CalContext, err: &HolidayError) {
    ctx.holidays = false;
    warn!(error = %err, "holiday display disabled");
    eprintln!(
        "{}",
        paint_error(ctx, &format!("Holidays unavailable: {}", error_chain(err)))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_entry_drops_the_year() {
        assert_eq!(short_entry("2023-07-04", "Independence Day"), "07-04|Independence Day");
    }

    #[test]
    fn fit_entry_leaves_short_names_alone() {
        // 66 / 2 - 1 = 32 columns allowed
        let entry = "01-16|Martin Luther King Jr. Day";
        assert_eq!(entry.len(), 32);
        assert_eq!(fit_entry(entry, 66), entry);
    }

    #[test]
    fn fit_entry_truncates_long_names() {
        // 66 / 2 - 5 = 28 columns kept
        let fitted = fit_entry("10-09|Columbus Day and Indigenous Peoples' Day", 66);
        assert_eq!(fitted, "10-09|Columbus Day and Indig..>");
        assert_eq!(fitted.len(), 31);
    }

    #[test]
    fn display_width_spans_the_calendar_row() {
        assert_eq!(holiday_display_width(3), 66);
        assert_eq!(holiday_display_width(4), 88);
    }
}
