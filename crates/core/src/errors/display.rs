//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { input, message } => {
                if input.is_empty() {
                    write!(f, "parse error: {message}")
                } else {
                    write!(f, "failed to parse '{input}': {message}")
                }
            }
            Error::Validation { field, message } => {
                write!(f, "validation failed for '{field}': {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Dispatch { operation, message } => {
                write!(f, "dispatch operation '{operation}' failed: {message}")
            }
            Error::Io { operation, source } => {
                write!(f, "I/O {operation} operation failed: {source}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
