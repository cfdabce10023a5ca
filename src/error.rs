//! Error taxonomy and process exit codes.

use holiday_cache::HolidayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalError {
    /// Rejected option value; the previous value stays in effect.
    #[error("Error: {0}")]
    Config(String),

    /// Unusable month/year arguments.
    #[error("{0}")]
    Input(String),

    #[error("'{0}' is not a valid month number")]
    InvalidMonth(i64),

    /// Something the program needs at startup is unavailable.
    #[error("{0}")]
    Resource(String),

    #[error(transparent)]
    Holiday(#[from] HolidayError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CalError {
    /// Exit status used when this error terminates the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalError::Config(_) => 0,
            CalError::Input(_) => 6,
            CalError::InvalidMonth(_) => 7,
            CalError::Resource(_) => 3,
            CalError::Holiday(_) | CalError::Io(_) => 1,
        }
    }
}

/// Render an error followed by its chain of sources on one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
