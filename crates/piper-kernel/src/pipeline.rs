//! Persistent composition builder.
//!
//! A [`Pipeline`] holds one function `A → B`. [`Pipeline::map`]
//! returns a *new* pipeline for `A → C` and leaves the receiver as it
//! was, so a partially built pipeline can be extended in several
//! directions or grown inside a loop:
//!
//! ```text
//! pipeline(f).map(g).map(h).run(x)  ==  pipe!(f, g, h)(x)
//! ```
//!
//! `'f` bounds whatever the steps borrow, as with
//! [`UnaryFunction`](crate::UnaryFunction). Inputs may borrow from locals
//! and steps may capture `Rc` or `Cell`. The held function is shared
//! behind an `Rc`, which keeps `map` and `clone` cheap regardless of
//! chain length.

use std::fmt;
use std::rc::Rc;

type Shared<'f, A, B> = Rc<dyn Fn(A) -> B + 'f>;

/// An immutable wrapper around a composed unary function.
pub struct Pipeline<'f, A, B> {
    f: Shared<'f, A, B>,
    stages: usize,
}

impl<'f, A: 'f, B: 'f> Pipeline<'f, A, B> {
    /// Wrap a single function.
    pub fn new(f: impl Fn(A) -> B + 'f) -> Self {
        Self {
            f: Rc::new(f),
            stages: 1,
        }
    }

    /// Extend the pipeline with a follow-up step.
    ///
    /// The result computes `next(self.run(a))`; `self` is untouched.
    pub fn map<C: 'f>(&self, next: impl Fn(B) -> C + 'f) -> Pipeline<'f, A, C> {
        let prev = Rc::clone(&self.f);
        Pipeline {
            f: Rc::new(move |a: A| next(prev(a))),
            stages: self.stages + 1,
        }
    }

    /// Apply the composed function.
    pub fn run(&self, input: A) -> B {
        (self.f)(input)
    }

    /// Number of functions composed so far.
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Unwrap into a plain function.
    pub fn into_fn(self) -> impl Fn(A) -> B + Clone + 'f {
        let f = self.f;
        move |a: A| f(a)
    }
}

impl<'f, A: 'f, B: 'f, E: 'f> Pipeline<'f, A, Result<B, E>> {
    /// Extend a fallible pipeline with another fallible step.
    ///
    /// `next` only runs on `Ok`; an `Err` from earlier stages passes
    /// through unchanged.
    pub fn and_then<C: 'f>(
        &self,
        next: impl Fn(B) -> Result<C, E> + 'f,
    ) -> Pipeline<'f, A, Result<C, E>> {
        self.map(move |res| res.and_then(&next))
    }
}

impl<A, B> Clone for Pipeline<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
            stages: self.stages,
        }
    }
}

impl<A, B> fmt::Debug for Pipeline<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish()
    }
}

/// Start a pipeline from `f`.
pub fn pipeline<'f, A: 'f, B: 'f>(f: impl Fn(A) -> B + 'f) -> Pipeline<'f, A, B> {
    Pipeline::new(f)
}
