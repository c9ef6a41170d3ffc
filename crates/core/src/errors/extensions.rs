//! Extension traits for error handling

use super::types::{Error, Result};
use crate::outcome::Outcome;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }
}

/// Lift a std `Result` into an [`Outcome`] carrying the crate error
pub trait IntoOutcome<T> {
    /// `Ok` becomes `Success`; `Err` is converted into [`Error`] and becomes
    /// `Failure`
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}
