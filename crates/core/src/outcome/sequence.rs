//! Collapsing many outcomes into one

use super::Outcome;

/// Collapse ordered outcomes into one outcome of an ordered `Vec`
///
/// Every success yields `Success` of the unwrapped values in input order. Any
/// failure yields the error of the first failing item scanning left to right;
/// the iterator is not advanced past that item, so later failures are never
/// observed. An empty input is `Success(vec![])`.
pub fn sequence<T, E, I>(items: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    items.into_iter().collect()
}

/// Map each item through a fallible `f` and [`sequence`] the results
///
/// `f` is not called for any item after the first failure.
pub fn traverse<A, T, E, I, F>(items: I, f: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    items.into_iter().map(f).collect()
}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
