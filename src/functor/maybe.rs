//! The optional instance: presence, absence, and failure collapse.
//!
//! [`Maybe`] wraps an `Option<T>` — `None` is the absent state — together
//! with a queue of deferred stages. Stages flow the optional value itself:
//! a total stage maps the present value through, a [`bind`](Maybe::bind)
//! stage may collapse the pipeline to absent, and absence short-circuits
//! everything downstream. Evaluation is total: no stage failure ever
//! escapes, it becomes the absent state instead.
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let doubled = Maybe::just(21) >> (|x: i32| x * 2);
//! assert_eq!(doubled.run(), Some(42));
//!
//! let collapsed = Maybe::just(21).bind(|_| None) >> (|x: i32| x * 2);
//! assert_eq!(collapsed.run(), None);
//! ```
//!
//! Rendering distinguishes evaluated from deferred containers:
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! assert_eq!(format!("{}", Maybe::just(42)), "Just(42)");
//! assert_eq!(format!("{}", Maybe::just("abc")), "Just(\"abc\")");
//! assert_eq!(format!("{}", Maybe::<i32>::nothing()), "Nothing");
//! assert_eq!(format!("{}", Maybe::just(1) >> (|x: i32| x + 1)), "Maybe(?)");
//! ```

use std::fmt;
use std::ops::{Shl, Shr};
use std::rc::Rc;

use super::container::{Pipeline, Stage, StageQueue, same_stages};

/// The optional container: a present-or-absent value plus a queue of
/// deferred stages over it.
///
/// The absent state is `Option::None` — the one process-wide sentinel the
/// language already provides — so absence compares equal across every
/// `Maybe` of the same element type.
///
/// # Examples
///
/// ```rust
/// use functorial::prelude::*;
///
/// let add = Maybe::lift2(|x: String, y: String| x + &y);
/// assert_eq!(add(&Maybe::just("a".to_string()), &Maybe::just("b".to_string())).run(),
///            Some("ab".to_string()));
/// assert_eq!(add(&Maybe::just("a".to_string()), &Maybe::nothing()).run(), None);
/// ```
#[derive(Clone)]
pub struct Maybe<T> {
    value: Option<T>,
    stages: StageQueue<Option<T>>,
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub fn just(value: T) -> Self {
        Self {
            value: Some(value),
            stages: StageQueue::new(),
        }
    }

    /// The absent container.
    #[inline]
    pub fn nothing() -> Self {
        Self {
            value: None,
            stages: StageQueue::new(),
        }
    }

    /// Returns `true` if the wrapped value is present.
    ///
    /// This inspects the captured value, not the (deferred) result of the
    /// pipeline: a present value whose stages would collapse it still
    /// reports `true` until run.
    #[inline]
    pub fn is_just(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the wrapped value is absent.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if stages are queued but not yet evaluated.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        !self.stages.is_empty()
    }

    /// The number of queued stages.
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// `Some` becomes present, `None` becomes absent.
impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self {
            value,
            stages: StageQueue::new(),
        }
    }
}

impl<A: Clone + 'static> Maybe<A> {
    /// Queues a short-circuiting stage: a `None` result collapses the rest
    /// of the pipeline to the absent state.
    ///
    /// This is the place to put fallible transformations; failure is
    /// expressed as `None` rather than unwinding, so evaluation never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let halve = |x: i32| (x % 2 == 0).then_some(x / 2);
    /// assert_eq!(Maybe::just(6).bind(halve).run(), Some(3));
    /// assert_eq!(Maybe::just(7).bind(halve).run(), None);
    /// ```
    pub fn bind<F>(&self, stage: F) -> Self
    where
        F: Fn(A) -> Option<A> + 'static,
    {
        let mut stages = self.stages.clone();
        stages.push(Rc::new(move |value: Option<A>| {
            value.and_then(|inner| stage(inner))
        }));
        Self {
            value: self.value.clone(),
            stages,
        }
    }

    /// Lifts a total unary function: absent input stays absent.
    pub fn lift<B, F>(function: F) -> impl Fn(&Self) -> Maybe<B>
    where
        F: Fn(A) -> B,
    {
        move |ma| Maybe::from(ma.run().map(|inner| function(inner)))
    }

    /// Lifts a fallible unary function: an `Err` result, like an absent
    /// input, yields the absent container. No failure escapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let double_positive = Maybe::try_lift(|x: i32| {
    ///     if x > 0 { Ok(x * 2) } else { Err("not positive") }
    /// });
    /// assert_eq!(double_positive(&Maybe::just(1)).run(), Some(2));
    /// assert_eq!(double_positive(&Maybe::just(0)).run(), None);
    /// ```
    pub fn try_lift<B, E, F>(function: F) -> impl Fn(&Self) -> Maybe<B>
    where
        F: Fn(A) -> Result<B, E>,
    {
        move |ma| Maybe::from(ma.run().and_then(|inner| function(inner).ok()))
    }

    /// Lifts a total binary function: present iff both arguments evaluate
    /// to present.
    pub fn lift2<B, C, F>(function: F) -> impl Fn(&Self, &Maybe<B>) -> Maybe<C>
    where
        B: Clone + 'static,
        F: Fn(A, B) -> C,
    {
        move |ma, mb| match (ma.run(), mb.run()) {
            (Some(x), Some(y)) => Maybe::just(function(x, y)),
            _ => Maybe::nothing(),
        }
    }
}

impl<T: Clone + 'static> Pipeline for Maybe<T> {
    type Value = T;
    type Output = Option<T>;

    /// Adapts a total function into a presence-preserving stage: absent
    /// input passes through untouched.
    fn compose<F>(&self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        let mut stages = self.stages.clone();
        stages.push(Rc::new(move |value: Option<T>| {
            value.map(|inner| stage(inner))
        }));
        Self {
            value: self.value.clone(),
            stages,
        }
    }

    /// Folds the stages over the optional value itself and returns it.
    fn run(&self) -> Option<T> {
        self.stages
            .iter()
            .fold(self.value.clone(), |value, stage| stage(value))
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && same_stages(&self.stages, &other.stages)
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Maybe")
            .field("value", &self.value)
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Renders `Just(value)` / `Nothing` once settled, `Maybe(?)` while a
/// present value still has pending stages.
impl<T: fmt::Debug> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => formatter.write_str("Nothing"),
            Some(_) if self.is_deferred() => formatter.write_str("Maybe(?)"),
            Some(value) => write!(formatter, "Just({value:?})"),
        }
    }
}

/// Left-to-right composition: `maybe >> stage`.
impl<T, F> Shr<F> for Maybe<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Self;

    fn shr(self, stage: F) -> Self {
        self.compose(stage)
    }
}

/// Left-to-right composition off a borrowed container.
impl<T, F> Shr<F> for &Maybe<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Maybe<T>;

    fn shr(self, stage: F) -> Maybe<T> {
        self.compose(stage)
    }
}

/// Right-to-left composition: `stage(f) << maybe`.
impl<T, F> Shl<Maybe<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Maybe<T>;

    fn shl(self, container: Maybe<T>) -> Maybe<T> {
        container.compose(self.0)
    }
}

/// Right-to-left composition onto a borrowed container.
impl<T, F> Shl<&Maybe<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Maybe<T>;

    fn shl(self, container: &Maybe<T>) -> Maybe<T> {
        container.compose(self.0)
    }
}
