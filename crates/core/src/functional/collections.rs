//! Slice and map helpers for terse call sites

use std::collections::HashMap;
use std::hash::Hash;

/// Extension methods for slices
pub trait SliceExt<T> {
    /// `true` when every element satisfies `p` (vacuously true when empty)
    fn all_match<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// `true` when at least one element satisfies `p`
    fn any_match<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Split into the longest prefix satisfying `p` and the remainder
    fn span<P>(&self, p: P) -> (&[T], &[T])
    where
        P: FnMut(&T) -> bool;

    /// Owned copy of the longest prefix satisfying `p`
    fn take_while_vec<P>(&self, p: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone;

    /// The first `n` elements, or the whole slice when it is shorter
    fn take_first(&self, n: usize) -> &[T];

    /// The first element and everything after it
    fn uncons(&self) -> (Option<&T>, &[T]);

    /// Apply `f` and keep only the `Some` results, in order
    fn map_optional<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>;

    /// The first `Some` produced by `f`
    fn first_optional<U, F>(&self, f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>;
}

impl<T> SliceExt<T> for [T] {
    fn all_match<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(p)
    }

    fn any_match<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(p)
    }

    fn span<P>(&self, mut p: P) -> (&[T], &[T])
    where
        P: FnMut(&T) -> bool,
    {
        let split = self.iter().position(|x| !p(x)).unwrap_or(self.len());
        self.split_at(split)
    }

    fn take_while_vec<P>(&self, p: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.span(p).0.to_vec()
    }

    fn take_first(&self, n: usize) -> &[T] {
        &self[..n.min(self.len())]
    }

    fn uncons(&self) -> (Option<&T>, &[T]) {
        match self.split_first() {
            Some((head, tail)) => (Some(head), tail),
            None => (None, self),
        }
    }

    fn map_optional<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().filter_map(f).collect()
    }

    fn first_optional<U, F>(&self, f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().find_map(f)
    }
}

/// Combine two slices element-wise, stopping at the shorter one
pub fn zip_with<A, B, C, F>(first: &[A], second: &[B], mut f: F) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| f(a, b))
        .collect()
}

/// Every `(a, b)` pair, ordered by `a` first
pub fn cartesian<A, B>(first: &[A], second: &[B]) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

/// `items` concatenated `times` times
///
/// An empty `items` gives an empty vector for any `times`.
///
/// # Panics
///
/// Panics with "capacity overflow" if the result cannot be allocated.
pub fn repeat_n<T: Clone>(times: usize, items: &[T]) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut accumulator = Vec::with_capacity(items.len().saturating_mul(times));
    for _ in 0..times {
        accumulator.extend_from_slice(items);
    }
    accumulator
}

/// Fix the seed and the input of a fold, leaving the reducer open
///
/// ```
/// use plumb_core::functional::collections::fold_over;
///
/// let total = fold_over(0, vec![1, 2, 3])(|acc, x| acc + x);
/// assert_eq!(total, 6);
/// ```
pub fn fold_over<A, B, R>(init: A, items: Vec<B>) -> impl FnOnce(R) -> A
where
    R: FnMut(A, B) -> A,
{
    move |reducer| items.into_iter().fold(init, reducer)
}

/// Copy of `map` with `key` set to `value`; `map` itself is untouched
pub fn with_entry<K, V>(map: &HashMap<K, V>, key: K, value: V) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut updated = map.clone();
    updated.insert(key, value);
    updated
}
