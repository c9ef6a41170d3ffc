//! Function composition, currying and the `Pipe` wrapper

use crate::outcome::Outcome;
use std::fmt::Debug;

/// Function composition trait for creating pipelines
pub trait Compose<A, B> {
    /// Run `self`, then `g` on its output (`self >>> g`)
    fn then<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
        Self: Fn(A) -> B + Sized;

    /// Run `g` after `self` and short-circuit on failure
    fn then_try<G, C, E>(self, g: G) -> impl Fn(A) -> Outcome<C, E>
    where
        G: Fn(B) -> Outcome<C, E>,
        Self: Fn(A) -> Outcome<B, E> + Sized;
}

impl<T, A, B> Compose<A, B> for T {
    fn then<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
        Self: Fn(A) -> B,
    {
        move |a| g(self(a))
    }

    fn then_try<G, C, E>(self, g: G) -> impl Fn(A) -> Outcome<C, E>
    where
        G: Fn(B) -> Outcome<C, E>,
        Self: Fn(A) -> Outcome<B, E>,
    {
        move |a| self(a).flat_map(&g)
    }
}

/// Value wrapper for left-to-right application
pub struct Pipe<T>(pub T);

impl<T> Pipe<T> {
    /// Create a new pipe
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Apply a function to the wrapped value
    pub fn pipe<F, U>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(f(self.0))
    }

    /// Apply a fallible function to the wrapped value
    pub fn try_pipe<F, U, E>(self, f: F) -> Outcome<Pipe<U>, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        f(self.0).map(Pipe)
    }

    /// Apply a function only if condition is true
    pub fn pipe_if<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        if condition {
            Pipe(f(self.0))
        } else {
            self
        }
    }

    /// Extract the wrapped value
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Get a reference to the wrapped value
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Apply a side effect function without changing the value
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.0);
        self
    }
}

impl<T: Debug> Debug for Pipe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pipe({:?})", self.0)
    }
}

impl<T: Clone> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Pipe(self.0.clone())
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Pipe(value)
    }
}

/// Free-standing combinators
pub mod operators {

    /// `value |> f`
    #[inline]
    pub fn apply<T, U, F>(value: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(value)
    }

    /// `f <| value`
    #[inline]
    pub fn apply_to<T, U, F>(f: F, value: T) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(value)
    }

    /// Forward composition (`f >>> g`): `f` runs first
    pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a| g(f(a))
    }

    /// Backward composition (`g <<< f`): `f` still runs first
    pub fn backward_compose<A, B, C, F, G>(g: G, f: F) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a| g(f(a))
    }

    /// Identity function
    pub fn identity<T>(x: T) -> T {
        x
    }

    /// Constant function
    pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
    where
        T: Clone,
    {
        move |_| value.clone()
    }

    /// Flip the arguments of a two-argument function
    pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |b, a| f(a, b)
    }

    /// Curry a two-argument function
    pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
    where
        F: Fn(A, B) -> C + Clone + 'static,
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        move |a| {
            let f = f.clone();
            Box::new(move |b| f(a.clone(), b))
        }
    }

    /// Curry a three-argument function
    #[allow(clippy::type_complexity)]
    pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
    where
        F: Fn(A, B, C) -> D + Clone + 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        D: 'static,
    {
        move |a| {
            let f = f.clone();
            Box::new(move |b: B| -> Box<dyn Fn(C) -> D> {
                let f = f.clone();
                let a = a.clone();
                Box::new(move |c| f(a.clone(), b.clone(), c))
            }) as Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
        }
    }

    /// Uncurry a curried function
    pub fn uncurry<A, B, C, F>(f: F) -> impl Fn(A, B) -> C
    where
        F: Fn(A) -> Box<dyn Fn(B) -> C>,
    {
        move |a, b| f(a)(b)
    }

    /// First element of a pair
    pub fn fst<A, B>(pair: (A, B)) -> A {
        pair.0
    }

    /// Second element of a pair
    pub fn snd<A, B>(pair: (A, B)) -> B {
        pair.1
    }
}

/// Pipeline macro for more readable function composition
#[macro_export]
macro_rules! pipeline {
    ($value:expr) => {
        $crate::functional::composition::Pipe::new($value)
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let result = $crate::functional::composition::Pipe::new($value);
        $(
            let result = result.pipe($func);
        )+
        result
    }};
}

/// Fallible pipeline: each step returns an `Outcome` and the first failure
/// ends the chain
#[macro_export]
macro_rules! try_pipeline {
    ($value:expr) => {
        $crate::outcome::Outcome::Success($value)
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let result = $crate::outcome::Outcome::Success($value);
        $(
            let result = result.flat_map($func);
        )+
        result
    }};
}
