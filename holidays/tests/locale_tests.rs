//! Country detection from locale environment variables.

use std::sync::Mutex;

use holiday_cache::locale::{COUNTRY_ENV, country_code_from_env};
use holiday_cache::{CountryResolver, HolidayError, LocaleResolver};

/// Mutex to serialize tests that modify environment variables.
/// `set_var` is not thread-safe, so locale tests must not run in parallel.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Reset all locale env vars to a clean state, then set `LC_ALL` to the given value.
fn set_locale(lc_all: &str) {
    clear_locale();
    unsafe { std::env::set_var("LC_ALL", lc_all) };
}

fn clear_locale() {
    unsafe {
        std::env::remove_var(COUNTRY_ENV);
        std::env::remove_var("LC_ALL");
        std::env::remove_var("LC_TIME");
        std::env::remove_var("LANG");
    }
}

#[test]
fn country_from_locale_us() {
    let _guard = lock_env();
    set_locale("en_US.UTF-8");
    assert_eq!(country_code_from_env().unwrap(), "US");
    assert_eq!(LocaleResolver.resolve().unwrap().iso3, "USA");
}

#[test]
fn country_from_locale_de() {
    let _guard = lock_env();
    set_locale("de_DE.UTF-8");
    assert_eq!(LocaleResolver.resolve().unwrap().name, "Germany");
}

#[test]
fn lc_time_used_when_lc_all_missing() {
    let _guard = lock_env();
    clear_locale();
    unsafe { std::env::set_var("LC_TIME", "es_MX.UTF-8") };
    assert_eq!(country_code_from_env().unwrap(), "MX");
}

#[test]
fn empty_lc_all_falls_through_to_lang() {
    let _guard = lock_env();
    clear_locale();
    unsafe {
        std::env::set_var("LC_ALL", "");
        std::env::set_var("LANG", "fr_CA.UTF-8");
    }
    assert_eq!(country_code_from_env().unwrap(), "CA");
}

#[test]
fn no_locale_defaults_to_us() {
    let _guard = lock_env();
    clear_locale();
    assert_eq!(country_code_from_env().unwrap(), "US");
}

#[test]
fn override_accepts_iso3() {
    let _guard = lock_env();
    set_locale("en_US.UTF-8");
    unsafe { std::env::set_var(COUNTRY_ENV, "gbr") };
    assert_eq!(LocaleResolver.resolve().unwrap().iso2, "GB");
    clear_locale();
}

#[test]
fn posix_locale_is_unsupported() {
    let _guard = lock_env();
    set_locale("C.UTF-8");
    assert!(matches!(
        LocaleResolver.resolve(),
        Err(HolidayError::UnsupportedCountry(locale)) if locale == "C.UTF-8"
    ));
}

#[test]
fn language_only_locale_is_unsupported() {
    let _guard = lock_env();
    for locale in ["sv", "ca.UTF-8", "ar", "be"] {
        set_locale(locale);
        assert!(
            matches!(
                LocaleResolver.resolve(),
                Err(HolidayError::UnsupportedCountry(ref raw)) if raw == locale
            ),
            "{locale}"
        );
    }
    clear_locale();
}

#[test]
fn override_wins_over_language_only_locale() {
    let _guard = lock_env();
    set_locale("sv");
    unsafe { std::env::set_var(COUNTRY_ENV, "SE") };
    assert_eq!(LocaleResolver.resolve().unwrap().name, "Sweden");
    clear_locale();
}
