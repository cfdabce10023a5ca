//! National holiday lookup for cal.
//!
//! Holidays come from the date.nager.at public holiday API and are kept in a
//! local per-country, per-year cache. Once a year is cached it is never
//! fetched again until the cache is cleared.

pub mod country;
pub mod error;
pub mod fetch;
pub mod locale;
pub mod store;

use serde::Deserialize;
use tracing::{debug, warn};

pub use country::Country;
pub use error::{HolidayError, Result};
pub use fetch::{API_URL, HolidayFetcher, HttpFetcher};
pub use locale::{CountryResolver, FixedCountry, LocaleResolver};
pub use store::{CacheStore, Entries, FileStore, MemoryStore};

/// Nationwide holidays of one country for one year, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    country: Country,
    year: i32,
    entries: Entries,
}

impl HolidaySet {
    pub fn new(country: Country, year: i32, entries: Entries) -> Self {
        HolidaySet {
            country,
            year,
            entries,
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Check whether an ISO date (`YYYY-MM-DD`) is a holiday.
    pub fn contains(&self, date: &str) -> bool {
        self.entries.contains_key(date)
    }

    pub fn name(&self, date: &str) -> Option<&str> {
        self.entries.get(date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(date, localName)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(d, n)| (d.as_str(), n.as_str()))
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }
}

/// One record of the API response. Only the consumed fields are declared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicHoliday {
    date: String,
    local_name: String,
    global: bool,
}

/// Parse an API response, keeping only nationwide (`global`) holidays.
pub fn parse_holidays(body: &str) -> std::result::Result<Entries, serde_json::Error> {
    let records: Vec<PublicHoliday> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .filter(|h| h.global)
        .map(|h| (h.date, h.local_name))
        .collect())
}

/// Resolves holiday sets through the cache, fetching on a miss.
pub struct HolidayCache {
    fetcher: Box<dyn HolidayFetcher>,
    store: Box<dyn CacheStore>,
    resolver: Box<dyn CountryResolver>,
}

impl HolidayCache {
    pub fn new<F, S, R>(fetcher: F, store: S, resolver: R) -> Self
    where
        F: HolidayFetcher + 'static,
        S: CacheStore + 'static,
        R: CountryResolver + 'static,
    {
        HolidayCache {
            fetcher: Box::new(fetcher),
            store: Box::new(store),
            resolver: Box::new(resolver),
        }
    }

    /// HTTP fetcher, on-disk store and locale-based country detection.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            HttpFetcher::new(),
            FileStore::from_env()?,
            LocaleResolver,
        ))
    }

    pub fn country(&self) -> Result<Country> {
        self.resolver.resolve()
    }

    /// Holidays of the detected country for `year`.
    pub fn get(&self, year: i32) -> Result<HolidaySet> {
        let country = self.country()?;
        let iso2 = country.iso2;

        match self.store.load(iso2, year) {
            Ok(Some(entries)) => {
                debug!(country = iso2, year, count = entries.len(), "using cached holidays");
                return Ok(HolidaySet::new(country, year, entries));
            }
            Ok(None) => debug!(country = iso2, year, "holidays not cached"),
            Err(e) => warn!(error = %e, "ignoring unreadable holiday cache"),
        }

        let body = self.fetcher.fetch(year, iso2)?;
        let entries = parse_holidays(&body).map_err(|source| HolidayError::ParseFailed {
            year,
            country: country.name.to_string(),
            source,
        })?;

        if let Err(e) = self.store.save(iso2, year, &entries) {
            warn!(error = %e, "could not persist holidays");
        }

        Ok(HolidaySet::new(country, year, entries))
    }

    /// Delete every cached country and year.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}
