//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a parse error for the given input
    #[must_use]
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for a named field
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a dispatch error
    #[must_use]
    pub fn dispatch(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Dispatch {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with the operation that failed
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Short machine-readable name of the variant, logged as the `kind` field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Parse { .. } => "parse",
            Error::Validation { .. } => "validation",
            Error::Configuration { .. } => "configuration",
            Error::Dispatch { .. } => "dispatch",
            Error::Io { .. } => "io",
            Error::Json { .. } => "json",
        }
    }
}
