//! Retrieval of raw holiday JSON from the date.nager.at API.

use std::time::Duration;

use tracing::debug;

use crate::error::{HolidayError, Result};

/// Base URL of the public holiday endpoint; `/{year}/{ISO2}` is appended.
pub const API_URL: &str = "https://date.nager.at/api/v3/publicholidays";

/// Upper bound on a single holiday request, connect through body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can return the raw JSON body for a year and country.
pub trait HolidayFetcher {
    fn fetch(&self, year: i32, country: &str) -> Result<String>;
}

/// Blocking HTTP fetcher backed by a `ureq` agent.
#[derive(Debug)]
pub struct HttpFetcher {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build();
        HttpFetcher {
            agent: ureq::Agent::new_with_config(config),
            base_url: base_url.into(),
        }
    }

    /// Endpoint for one country and year, e.g. `.../publicholidays/2023/US`.
    pub fn url(&self, year: i32, country: &str) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), year, country)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayFetcher for HttpFetcher {
    fn fetch(&self, year: i32, country: &str) -> Result<String> {
        let url = self.url(year, country);
        debug!(%url, "fetching holidays");

        let failed = |source: ureq::Error| HolidayError::FetchFailed {
            year,
            country: country.to_string(),
            source: Box::new(source),
        };

        let mut response = self.agent.get(&url).call().map_err(failed)?;
        response.body_mut().read_to_string().map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_templated_by_year_and_country() {
        let fetcher = HttpFetcher::new();
        assert_eq!(
            fetcher.url(2023, "US"),
            "https://date.nager.at/api/v3/publicholidays/2023/US"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let fetcher = HttpFetcher::with_base_url("http://localhost:8080/api/");
        assert_eq!(fetcher.url(6, "DE"), "http://localhost:8080/api/6/DE");
    }
}
