//! Country detection from the process locale.

use tracing::debug;

use crate::country::{self, Country};
use crate::error::{HolidayError, Result};

/// Environment variable that overrides locale-based detection (ISO2 or ISO3).
pub const COUNTRY_ENV: &str = "CAL_COUNTRY";

/// Source of the country whose holidays should be shown.
pub trait CountryResolver {
    fn resolve(&self) -> Result<Country>;
}

/// Resolves the country from `CAL_COUNTRY`, then `LC_ALL` > `LC_TIME` > `LANG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocaleResolver;

impl CountryResolver for LocaleResolver {
    fn resolve(&self) -> Result<Country> {
        let code = country_code_from_env()?;
        let country =
            country::lookup(&code).ok_or_else(|| HolidayError::UnsupportedCountry(code.clone()))?;
        debug!(
            iso3 = country.iso3,
            iso2 = country.iso2,
            name = country.name,
            "resolved locale country"
        );
        Ok(country)
    }
}

/// Always resolves to the same country.
#[derive(Debug, Clone, Copy)]
pub struct FixedCountry(pub Country);

impl CountryResolver for FixedCountry {
    fn resolve(&self) -> Result<Country> {
        Ok(self.0)
    }
}

/// Determine the raw country code from the environment.
///
/// Falls back to `en_US` when no locale variable is set. The code is the
/// territory part of the locale name (`en_US.UTF-8` -> `US`); a locale
/// without one (`C.UTF-8`, `sv`) is reported as unsupported.
pub fn country_code_from_env() -> Result<String> {
    if let Some(code) = non_empty_var(COUNTRY_ENV) {
        return Ok(code.trim().to_ascii_uppercase());
    }

    let locale = non_empty_var("LC_ALL")
        .or_else(|| non_empty_var("LC_TIME"))
        .or_else(|| non_empty_var("LANG"))
        .unwrap_or_else(|| "en_US.UTF-8".to_string());

    match territory(&locale) {
        Some(territory) => Ok(territory.to_ascii_uppercase()),
        None => Err(HolidayError::UnsupportedCountry(locale)),
    }
}

/// Extract the territory from a POSIX locale name (`ll_TT.encoding@modifier`).
pub fn territory(locale: &str) -> Option<&str> {
    let name = locale.split(['.', '@']).next().unwrap_or(locale);
    name.split_once('_')
        .map(|(_, territory)| territory)
        .filter(|territory| !territory.is_empty())
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
