//! Positional partial application for minting pipeline stages.
//!
//! [`Curry2`] and [`Curry3`] wrap a multi-argument function and inject a
//! single argument at a chosen parameter position, yielding a function of
//! the remaining arguments. The position is picked once, by method:
//! [`apply`](Curry2::apply) fills the first parameter,
//! [`apply_second`](Curry2::apply_second) the second,
//! [`apply_third`](Curry3::apply_third) the third.
//!
//! The wrapped function is shared behind an `Rc`, so one wrapper can mint
//! any number of stages, and injected arguments are cloned per call, so a
//! minted stage is itself re-invokable.
//!
//! # Laws
//!
//! For all functions `f`, injected values `x`, and remaining arguments
//! `a`, `b`:
//!
//! ```text
//! curry2(f).apply(x)(a)         == f(x, a)
//! curry2(f).apply_second(x)(a)  == f(a, x)
//! curry3(f).apply(x)(a, b)      == f(x, a, b)
//! curry3(f).apply_second(x)(a, b) == f(a, x, b)
//! curry3(f).apply_third(x)(a, b)  == f(a, b, x)
//! ```
//!
//! # Examples
//!
//! Adapting a two-argument function into a unary pipeline stage:
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! fn repeat(text: String, times: usize) -> String {
//!     text.repeat(times)
//! }
//!
//! let pipeline = Functor::wrap(String::from("ab"))
//!     >> curry2(repeat).apply_second(3);
//! assert_eq!(pipeline.run(), "ababab");
//! ```

use std::rc::Rc;

/// A two-argument function with one slot awaiting injection.
///
/// Built by [`curry2`]; see the [module docs](self) for the laws.
pub struct Curry2<F> {
    function: Rc<F>,
}

/// Wraps a two-argument function for positional injection.
#[inline]
pub fn curry2<F>(function: F) -> Curry2<F> {
    Curry2 {
        function: Rc::new(function),
    }
}

impl<F> Curry2<F> {
    /// Injects `first` into the first parameter, yielding a function of
    /// the remaining one.
    pub fn apply<A, B, C>(&self, first: A) -> impl Fn(B) -> C + use<F, A, B, C>
    where
        F: Fn(A, B) -> C + 'static,
        A: Clone + 'static,
    {
        let function = Rc::clone(&self.function);
        move |second| function(first.clone(), second)
    }

    /// Injects `second` into the second parameter, yielding a function of
    /// the first.
    pub fn apply_second<A, B, C>(&self, second: B) -> impl Fn(A) -> C + use<F, A, B, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: Clone + 'static,
    {
        let function = Rc::clone(&self.function);
        move |first| function(first, second.clone())
    }
}

impl<F> Clone for Curry2<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

/// A three-argument function with one slot awaiting injection.
///
/// Built by [`curry3`]; the two remaining parameters are taken together,
/// in declaration order.
pub struct Curry3<F> {
    function: Rc<F>,
}

/// Wraps a three-argument function for positional injection.
#[inline]
pub fn curry3<F>(function: F) -> Curry3<F> {
    Curry3 {
        function: Rc::new(function),
    }
}

impl<F> Curry3<F> {
    /// Injects `first` into the first parameter.
    pub fn apply<A, B, C, D>(&self, first: A) -> impl Fn(B, C) -> D + use<F, A, B, C, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        A: Clone + 'static,
    {
        let function = Rc::clone(&self.function);
        move |second, third| function(first.clone(), second, third)
    }

    /// Injects `second` into the second parameter.
    pub fn apply_second<A, B, C, D>(&self, second: B) -> impl Fn(A, C) -> D + use<F, A, B, C, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: Clone + 'static,
    {
        let function = Rc::clone(&self.function);
        move |first, third| function(first, second.clone(), third)
    }

    /// Injects `third` into the third parameter.
    pub fn apply_third<A, B, C, D>(&self, third: C) -> impl Fn(A, B) -> D + use<F, A, B, C, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        C: Clone + 'static,
    {
        let function = Rc::clone(&self.function);
        move |first, second| function(first, second, third.clone())
    }
}

impl<F> Clone for Curry3<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}
