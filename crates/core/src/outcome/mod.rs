//! Two-variant success/failure container with short-circuiting combinators
//!
//! An [`Outcome`] is created wherever an operation either produces a value or
//! fails, threaded through chains of [`map`](Outcome::map),
//! [`flat_map`](Outcome::flat_map) and [`map_error`](Outcome::map_error), and
//! finally unwrapped by the caller. The first failure in a chain is terminal:
//! every later step is skipped and the error reaches the caller untouched.
//!
//! ## Key Components
//!
//! - **`Outcome`**: the `Success` / `Failure` enum and its methods.
//! - **`ops`**: operator sugar (`>>` as bind) and function-first free functions.
//! - **`sequence`**: collapsing many outcomes into one, first failure wins.
//!
//! ```
//! use plumb_core::{Error, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i64> {
//!     input
//!         .parse::<i64>()
//!         .map_err(|e| Error::parse(input, e.to_string()))
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(42));
//! ```

pub mod ops;
pub mod sequence;

pub use ops::{bind, effect, fmap};
pub use sequence::{sequence, traverse};

use crate::errors::Error;

/// Either a success value or a failure payload, never both
#[must_use = "an Outcome may be a Failure that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = Error> {
    /// The operation produced a value
    Success(T),
    /// The operation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is a success
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is a failure
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, or `None` for a failure
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure payload, or `None` for a success
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrow the success value
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure payload
    pub fn as_error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert `&Outcome<T, E>` to `Outcome<&T, &E>`
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value with a total function
    ///
    /// A failure is returned as-is and `f` is never called. If `f` can itself
    /// fail, use [`flat_map`](Self::flat_map).
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a fallible step
    ///
    /// On success the result of `f` is returned directly; on failure `f` is
    /// skipped and the failure propagates.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map)
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Transform the failure payload, leaving a success untouched
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Run `f` on the success value for its side effect and pass `self` on
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Run `f` on the success value for its side effect, discarding the outcome
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Outcome::Success(value) = self {
            f(value);
        }
    }

    /// The success value, or `default` on failure
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The success value, or one computed from the failure
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Convert into a std `Result` so `?` can be used at the boundary
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum Fault {
        Io,
        Wrapped(Box<Fault>),
    }

    #[test]
    fn test_variant_queries() {
        let ok: Outcome<i32, Fault> = Outcome::Success(7);
        let failed: Outcome<i32, Fault> = Outcome::Failure(Fault::Io);

        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(failed.is_failure());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_projections_are_exclusive() {
        let ok: Outcome<i32, Fault> = Outcome::Success(7);
        assert_eq!(ok.as_value(), Some(&7));
        assert_eq!(ok.as_error(), None);
        assert_eq!(ok.clone().value(), Some(7));
        assert_eq!(ok.error(), None);

        let failed: Outcome<i32, Fault> = Outcome::Failure(Fault::Io);
        assert_eq!(failed.as_value(), None);
        assert_eq!(failed.as_error(), Some(&Fault::Io));
        assert_eq!(failed.clone().value(), None);
        assert_eq!(failed.error(), Some(Fault::Io));
    }

    #[test]
    fn test_map_skips_function_on_failure() {
        let calls = Cell::new(0);
        let failed: Outcome<i32, Fault> = Outcome::Failure(Fault::Io);

        let mapped = failed.map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });

        assert_eq!(mapped, Outcome::Failure(Fault::Io));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map_chains_until_first_failure() {
        let calls = Cell::new(0);
        let step = |n: i32| -> Outcome<i32, Fault> {
            calls.set(calls.get() + 1);
            if n > 2 {
                Outcome::Failure(Fault::Io)
            } else {
                Outcome::Success(n + 1)
            }
        };

        let result = Outcome::Success(1)
            .flat_map(step)
            .flat_map(step)
            .flat_map(step)
            .flat_map(step);

        assert_eq!(result, Outcome::Failure(Fault::Io));
        // 1 -> 2 -> 3 -> failure; the fourth step never runs
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_map_error_only_touches_failures() {
        let ok: Outcome<i32, Fault> = Outcome::Success(3);
        let failed: Outcome<i32, Fault> = Outcome::Failure(Fault::Io);

        let wrap = |e: Fault| Fault::Wrapped(Box::new(e));

        assert_eq!(ok.map_error(wrap), Outcome::Success(3));
        assert_eq!(
            failed.map_error(wrap),
            Outcome::Failure(Fault::Wrapped(Box::new(Fault::Io)))
        );
    }

    #[test]
    fn test_map_error_changes_error_type() {
        let failed: Outcome<(), Fault> = Outcome::Failure(Fault::Io);
        let relabelled: Outcome<(), Error> =
            failed.map_error(|e| Error::configuration(format!("{e:?}")));

        assert_eq!(
            relabelled.error().map(|e| e.to_string()),
            Some("configuration error: Io".to_string())
        );
    }

    #[test]
    fn test_tap_and_for_each_run_only_on_success() {
        let seen = Cell::new(0);

        let ok: Outcome<i32, Fault> = Outcome::Success(5);
        let tapped = ok.tap(|n| seen.set(*n));
        assert_eq!(tapped, Outcome::Success(5));
        assert_eq!(seen.get(), 5);

        Outcome::<i32, Fault>::Failure(Fault::Io).for_each(|n| seen.set(n * 100));
        assert_eq!(seen.get(), 5);

        Outcome::<i32, Fault>::Success(9).for_each(|n| seen.set(n));
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn test_value_fallbacks() {
        let failed: Outcome<i32, Fault> = Outcome::Failure(Fault::Io);
        assert_eq!(failed.clone().value_or(0), 0);
        assert_eq!(failed.value_or_else(|_| -1), -1);
        assert_eq!(Outcome::<i32, Fault>::Success(4).value_or(0), 4);
    }

    #[test]
    fn test_result_round_trip_through_question_mark() {
        fn half(n: i32) -> Result<i32, Fault> {
            let checked: Outcome<i32, Fault> = if n % 2 == 0 {
                Outcome::Success(n / 2)
            } else {
                Outcome::Failure(Fault::Io)
            };
            let value = checked.into_result()?;
            Ok(value)
        }

        assert_eq!(half(8), Ok(4));
        assert_eq!(half(3), Err(Fault::Io));
    }
}
