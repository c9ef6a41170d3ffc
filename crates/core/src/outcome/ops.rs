//! Operator sugar and function-first combinators for [`Outcome`]
//!
//! Rust has no user-defined infix operators, so only bind gets a symbol
//! (`>>`). The function-first forms are plain functions that slot into
//! [`Pipe`](crate::functional::Pipe) chains and iterator adaptors.

use super::Outcome;
use std::ops::Shr;

/// `outcome >> f` is `outcome.flat_map(f)`
///
/// ```
/// use plumb_core::Outcome;
///
/// let halve = |n: i32| -> Outcome<i32, &'static str> {
///     if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::Failure("odd") }
/// };
///
/// assert_eq!(Outcome::Success(12) >> halve >> halve, Outcome::Success(3));
/// assert_eq!(Outcome::Success(6) >> halve >> halve, Outcome::Failure("odd"));
/// ```
impl<T, U, E, F> Shr<F> for Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    type Output = Outcome<U, E>;

    fn shr(self, f: F) -> Self::Output {
        self.flat_map(f)
    }
}

/// Apply `f` to the success value, function first
#[inline]
pub fn fmap<T, U, E, F>(f: F, outcome: Outcome<T, E>) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// Chain a fallible step, outcome first
#[inline]
pub fn bind<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.flat_map(f)
}

/// Run `f` for its effect when `outcome` is a success; nothing is returned
#[inline]
pub fn effect<T, E, F>(f: F, outcome: Outcome<T, E>)
where
    F: FnOnce(T),
{
    outcome.for_each(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn positive(n: i32) -> Outcome<i32, String> {
        if n > 0 {
            Outcome::Success(n)
        } else {
            Outcome::Failure(format!("{n} is not positive"))
        }
    }

    #[test]
    fn test_shr_matches_flat_map() {
        let via_operator =
            Outcome::Success(4) >> positive >> |n: i32| Outcome::<i32, String>::Success(n * 10);
        let via_method = Outcome::Success(4)
            .flat_map(positive)
            .flat_map(|n| Outcome::<i32, String>::Success(n * 10));

        assert_eq!(via_operator, via_method);
        assert_eq!(via_operator, Outcome::Success(40));
    }

    #[test]
    fn test_shr_short_circuits() {
        let result = Outcome::Success(-1) >> positive >> |_: i32| -> Outcome<i32, String> {
            panic!("must not run after a failure")
        };

        assert_eq!(result, Outcome::Failure("-1 is not positive".to_string()));
    }

    #[test]
    fn test_fmap_is_function_first_map() {
        let len = |s: &str| s.len();
        assert_eq!(
            fmap(len, Outcome::<&str, ()>::Success("plumb")),
            Outcome::Success(5)
        );
        assert_eq!(fmap(len, Outcome::<&str, ()>::Failure(())), Outcome::Failure(()));
    }

    #[test]
    fn test_bind_free_function() {
        assert_eq!(bind(Outcome::Success(3), positive), Outcome::Success(3));
        assert!(bind(Outcome::Success(0), positive).is_failure());
    }

    #[test]
    fn test_effect_discards_and_skips_failures() {
        let log = RefCell::new(Vec::new());

        effect(|n: i32| log.borrow_mut().push(n), Outcome::<i32, ()>::Success(1));
        effect(|n: i32| log.borrow_mut().push(n), Outcome::<i32, ()>::Failure(()));
        effect(|n: i32| log.borrow_mut().push(n), Outcome::<i32, ()>::Success(2));

        assert_eq!(*log.borrow(), vec![1, 2]);
    }
}
