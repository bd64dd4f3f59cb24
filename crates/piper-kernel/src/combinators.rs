//! Elementary combinators.
//!
//! These are the units of composition: `identity` is the neutral element
//! of [`pipe!`](crate::pipe), `always` discards its input, and `noop`
//! stands in wherever a callback is required but nothing should happen.

/// A boxed, type-erased unary function.
///
/// Closures all have distinct types, so a sequence of them can only be
/// held homogeneously once erased. `'f` bounds whatever the closure
/// borrows.
pub type UnaryFunction<'f, T, R> = Box<dyn Fn(T) -> R + Send + Sync + 'f>;

/// Return the argument unchanged.
#[inline]
pub fn identity<A>(a: A) -> A {
    a
}

/// Build a function that ignores its argument and always yields `a`.
///
/// Each call hands out a fresh clone, so the returned function can be
/// called any number of times.
pub fn always<A, X>(a: A) -> impl Fn(X) -> A + Clone
where
    A: Clone,
{
    move |_| a.clone()
}

/// Do nothing.
#[inline]
pub fn noop() {}
