//! Core error type definitions

/// Result type alias for plumb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for plumb operations using thiserror
///
/// This is the default failure payload of [`crate::Outcome`]. Combinators never
/// inspect it; they only pass it along or hand it to a caller-supplied mapping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be parsed into the expected shape
    Parse { input: String, message: String },

    /// A value was well-formed but violated a rule
    Validation { field: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// Background/foreground handoff errors
    Dispatch { operation: String, message: String },

    /// I/O errors, including failure to spawn worker threads
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
