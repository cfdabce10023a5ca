//! Errors raised while resolving holiday data.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed transport error so test fetchers can fail without a real HTTP stack.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("it doesn't look like the following country is supported: '{0}'")]
    UnsupportedCountry(String),

    #[error("unable to retrieve the {year} holidays for {country}")]
    FetchFailed {
        year: i32,
        country: String,
        #[source]
        source: BoxedSource,
    },

    #[error("unable to process the {year} holidays for {country}")]
    ParseFailed {
        year: i32,
        country: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("holiday cache error at {}", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("holiday cache file {} is not valid JSON", path.display())]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no cache directory available; set CAL_CACHE_DIR")]
    NoCacheDir,
}

pub type Result<T> = std::result::Result<T, HolidayError>;
