//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! cal          // Current year
//! cal 2026     // Year 2026
//! cal 2        // February of the current year
//! cal 2 2026   // February 2026
//! cal -n 4 -d  // Four months per row, with holidays
//! ```

use std::io::Write;

use cal::args::{Args, get_display_request};
use cal::error::{CalError, error_chain};
use cal::formatter::{paint_error, render_month, render_year};
use cal::holidays::{disable_holidays, load_holidays};
use cal::logging::init_logger;
use cal::types::{CalContext, View};
use holiday_cache::HolidayCache;
use tracing::debug;

fn main() {
    let args = Args::parse();
    let ctx = CalContext::new(&args);

    if let Err(e) = run(&args, ctx.clone()) {
        eprintln!(
            "{}",
            paint_error(&ctx, &format!("FATAL ERROR: {}", error_chain(&e)))
        );
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args, mut ctx: CalContext) -> Result<(), CalError> {
    init_logger(ctx.debug)?;

    if let Some(num) = args.num
        && let Err(e) = ctx.set_cals_per_row(num)
    {
        eprintln!("{}", paint_error(&ctx, &e.to_string()));
    }

    debug!(
        cals_per_row = ctx.cals_per_row,
        color = ctx.color,
        holidays = ctx.holidays,
        today = %ctx.today,
        "options"
    );

    if args.clear_cache {
        let cache = HolidayCache::from_env()
            .map_err(|e| CalError::Resource(format!("Unable to locate the cache: {e}")))?;
        cache.clear()?;
        println!("Holiday cache cleared");
        return Ok(());
    }

    let view = get_display_request(args, ctx.today)?;
    debug!(?view, "display request");

    let holidays = if ctx.holidays {
        match HolidayCache::from_env() {
            Ok(cache) => load_holidays(&mut ctx, &cache, view.year()),
            Err(e) => {
                disable_holidays(&mut ctx, &e);
                None
            }
        }
    } else {
        None
    };

    let lines = match view {
        View::Year(year) => render_year(&ctx, year, holidays.as_ref()),
        View::Month { month, year } => render_month(&ctx, month, year, holidays.as_ref()),
    };

    let mut out = std::io::stdout().lock();
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
