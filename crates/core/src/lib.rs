//! Core types, errors, and combinators for `plumb`.
//!
//! This crate provides the pieces application code threads through its call
//! sites: a two-variant [`Outcome`] with short-circuiting combinators, the
//! shared [`Error`] type, and small functional helpers.
//!
//! ## Key Components
//!
//! - **`outcome`**: The `Outcome` enum, its combinators, operator sugar and
//!   `sequence`/`traverse` for collapsing many outcomes into one.
//! - **`errors`**: The primary `Error` enum and `Result` alias used by the
//!   library's own fallible operations, plus context extensions.
//! - **`functional`**: Composition, currying, pipelines and collection helpers.
//! - **`constants`**: Environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod outcome;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    constants::*,
    errors::{Error, IntoOutcome, Result, ResultExt},
    outcome::{sequence, traverse, Outcome},
};
