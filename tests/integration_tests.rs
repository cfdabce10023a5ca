//! End-to-end tests of the `cal` binary.
//!
//! Every run pins today's date and points the holiday cache at a temporary
//! directory, so nothing touches the network or the user's cache.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cal(cache: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cal").unwrap();
    cmd.env("CAL_TEST_TIME", "2023-07-04")
        .env("CAL_CACHE_DIR", cache)
        .env("CAL_COUNTRY", "US")
        .env_remove("RUST_LOG");
    cmd
}

fn seed_us_2023(cache: &Path) {
    let dir = cache.join("holidays").join("US");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("2023.json"),
        r#"{
  "2023-01-02": "New Year's Day",
  "2023-07-04": "Independence Day",
  "2023-12-25": "Christmas Day"
}"#,
    )
    .unwrap();
}

mod views {
    use super::*;

    #[test]
    fn test_month_and_year() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .args(["-z", "7", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("\n      July 2023\nSu Mo Tu We Th Fr Sa\n"))
            .stdout(predicate::str::contains("30 31                \n"));
    }

    #[test]
    fn test_single_month_uses_current_year() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .arg("2")
            .assert()
            .success()
            .stdout(predicate::str::contains("February 2023"));
    }

    #[test]
    fn test_no_arguments_shows_current_year() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("January 2023"))
            .stdout(predicate::str::contains("December 2023"));
    }

    #[test]
    fn test_year_with_four_per_row() {
        let cache = TempDir::new().unwrap();
        let output = cal(cache.path()).args(["-n", "4", "1999"]).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        let first = stdout.lines().nth(1).unwrap();
        assert!(first.contains("January 1999") && first.contains("April 1999"));
    }

    #[test]
    fn test_output_is_plain_when_piped() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .args(["7", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_invalid_month_exits_7() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .args(["13", "2023"])
            .assert()
            .code(7)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("FATAL ERROR"));
    }

    #[test]
    fn test_non_numeric_exits_6() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .arg("june")
            .assert()
            .code(6)
            .stderr(predicate::str::contains("FATAL ERROR"));
    }

    #[test]
    fn test_too_many_dates_exits_6() {
        let cache = TempDir::new().unwrap();
        cal(cache.path()).args(["1", "2", "3"]).assert().code(6);
    }

    #[test]
    fn test_zero_exits_6() {
        let cache = TempDir::new().unwrap();
        cal(cache.path()).arg("0").assert().code(6);
    }

    #[test]
    fn test_bad_num_is_not_fatal() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .args(["-n", "5", "2023"])
            .assert()
            .success()
            .stderr(predicate::str::contains("must be evenly divisible into 12"))
            .stdout(predicate::str::contains("March 2023"));
    }
}

mod holidays {
    use super::*;

    #[test]
    fn test_month_view_lists_cached_holidays() {
        let cache = TempDir::new().unwrap();
        seed_us_2023(cache.path());
        cal(cache.path())
            .args(["-d", "7", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "\nHolidays\n2023-07-04 | Independence Day\n",
            ))
            .stdout(predicate::str::contains("Christmas").not());
    }

    #[test]
    fn test_year_view_lists_cached_holidays() {
        let cache = TempDir::new().unwrap();
        seed_us_2023(cache.path());
        cal(cache.path())
            .args(["-d", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2023 holidays for United States"))
            .stdout(predicate::str::contains("01-02|New Year's Day"))
            .stdout(predicate::str::contains("12-25|Christmas Day"));
    }

    #[test]
    fn test_unsupported_country_still_prints_calendar() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .env("CAL_COUNTRY", "ZZ")
            .args(["-d", "7", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains("July 2023"))
            .stdout(predicate::str::contains("Holidays").not())
            .stderr(predicate::str::contains("Holidays unavailable"));
    }

    #[test]
    fn test_clear_cache_removes_entries() {
        let cache = TempDir::new().unwrap();
        seed_us_2023(cache.path());
        cal(cache.path())
            .arg("-c")
            .assert()
            .success()
            .stdout(predicate::str::contains("Holiday cache cleared"));
        assert!(!cache.path().join("holidays/US/2023.json").exists());
    }

    #[test]
    fn test_clear_empty_cache_succeeds() {
        let cache = TempDir::new().unwrap();
        cal(cache.path()).arg("--clear-cache").assert().success();
    }
}

mod info {
    use super::*;

    #[test]
    fn test_help() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .arg("-h")
            .assert()
            .success()
            .stdout(predicate::str::contains("MONTH YEAR"))
            .stdout(predicate::str::contains("--display-holidays"));
    }

    #[test]
    fn test_version() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_debug_logs_to_stderr() {
        let cache = TempDir::new().unwrap();
        cal(cache.path())
            .args(["-D", "7", "2023"])
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG"))
            .stdout(predicate::str::contains("DEBUG").not());
    }
}
