//! Functional programming helpers for plumb
//!
//! Composition, currying, pipelines and small collection combinators that keep
//! call sites short. Everything here is pure.

pub mod collections;
pub mod composition;
pub mod logic;

// Re-export commonly used traits and utilities
pub use collections::{cartesian, fold_over, repeat_n, with_entry, zip_with, SliceExt};
pub use composition::operators::{
    apply, apply_to, backward_compose, constant, curry, curry3, flip, forward_compose, fst,
    identity, snd, uncurry,
};
pub use composition::{Compose, Pipe};
pub use logic::BoolExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::collections::*;
    pub use super::composition::operators::*;
    pub use super::composition::{Compose, Pipe};
    pub use super::logic::BoolExt;
    pub use crate::outcome::{bind, effect, fmap, sequence, traverse, Outcome};
    pub use crate::{pipeline, try_pipeline};
}
