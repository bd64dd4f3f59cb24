//! Left-to-right composition of unary functions.
//!
//! Given `f: A → B` and `g: B → C`, `then(f, g)` is the function
//! `x ↦ g(f(x))`. [`pipe!`](crate::pipe) extends this to any number of
//! steps:
//!
//! ```text
//! pipe!()            = identity
//! pipe!(f)           = f
//! pipe!(f, g, …, h)  = then(f, pipe!(g, …, h))
//! ```
//!
//! Each step keeps its own input and output types. When the steps are
//! only known at runtime they must share one type `T → T`, and
//! [`pipe`] folds the sequence instead.
//!
//! Composition is strictly sequential and never catches. A panic in a
//! step unwinds through the composed function untouched. The `try_`
//! variants thread `Result` and stop at the first `Err`, handing it back
//! as-is; later steps are not invoked.

/// Compose two functions left to right: `then(f, g)(x) == g(f(x))`.
pub fn then<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Compose two fallible functions left to right.
///
/// `g` only runs when `f` succeeds; an `Err` from `f` is returned
/// unchanged.
pub fn then_try<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |a| g(f(a)?)
}

/// Fold a runtime sequence of `T → T` steps into one function.
///
/// An empty sequence yields the identity. Steps of different closure
/// types can be mixed by boxing them as
/// [`UnaryFunction`](crate::UnaryFunction).
pub fn pipe<T, F, I>(fns: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let fns: Vec<F> = fns.into_iter().collect();
    move |input| fns.iter().fold(input, |acc, f| f(acc))
}

/// Fold a runtime sequence of fallible `T → T` steps into one function.
///
/// Stops at the first `Err`. An empty sequence wraps its input in `Ok`.
pub fn try_pipe<T, E, F, I>(fns: I) -> impl Fn(T) -> Result<T, E>
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> Result<T, E>,
{
    let fns: Vec<F> = fns.into_iter().collect();
    move |input| fns.iter().try_fold(input, |acc, f| f(acc))
}

/// Compose unary functions left to right, keeping each step's types.
///
/// `pipe!()` is [`identity`](crate::identity) and `pipe!(f)` is `f`
/// itself, with no wrapping.
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::then($f, $crate::pipe!($($rest),+))
    };
}

/// Compose `Result`-returning unary functions left to right.
///
/// `try_pipe!()` is `Ok`. The composed function returns the first `Err`
/// any step produces and skips every step after it.
#[macro_export]
macro_rules! try_pipe {
    () => {
        ::core::result::Result::Ok
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::then_try($f, $crate::try_pipe!($($rest),+))
    };
}
