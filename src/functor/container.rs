//! The deferred-pipeline core: the [`Pipeline`] trait and the base
//! [`Functor`] container.
//!
//! A container pairs a captured value with an ordered queue of pending
//! stages. Composing a stage never executes it and never mutates the source
//! container; evaluation is a pure left-to-right fold triggered by
//! [`Pipeline::run`].
//!
//! # Laws
//!
//! Every [`Pipeline`] instance must satisfy the functor laws:
//!
//! ## Identity Law
//!
//! Composing the identity stage does not change the result:
//!
//! ```text
//! wrap(v).compose(identity).run() == v
//! ```
//!
//! ## Composition Law
//!
//! Composing two stages in sequence applies them in sequence:
//!
//! ```text
//! wrap(v).compose(f).compose(g).run() == g(f(v))
//! ```
//!
//! In addition, `run` is pure: it never mutates the stage queue, so a
//! container may be evaluated any number of times with equal results.
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let pipeline = Functor::wrap(String::from("abc"))
//!     >> (|text: String| text.to_uppercase())
//!     >> (|text: String| text + "def");
//!
//! // Nothing has run yet; evaluation is on demand.
//! assert!(pipeline.is_deferred());
//! assert_eq!(pipeline.run(), "ABCdef");
//! ```

use std::fmt;
use std::ops::{Shl, Shr};
use std::rc::Rc;

use smallvec::SmallVec;

use super::scope::Scope;

/// Stage queues store up to this many stages inline before spilling to the
/// heap. Pipelines rarely grow past a handful of stages.
pub(crate) const STAGE_INLINE_CAPACITY: usize = 4;

/// The adapted-stage queue shared by every container variant. `S` is the
/// state a stored stage consumes and produces: the plain value for
/// [`Functor`], a lazy sequence for [`ListF`](super::ListF), an optional
/// value for [`Maybe`](super::Maybe).
pub(crate) type StageQueue<S> = SmallVec<[Rc<dyn Fn(S) -> S>; STAGE_INLINE_CAPACITY]>;

/// Stage equality is closure identity: two queues are equal iff they hold
/// the same stages, in the same order, by pointer.
pub(crate) fn same_stages<S>(left: &StageQueue<S>, right: &StageQueue<S>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(first, second)| Rc::ptr_eq(first, second))
}

/// A lazily evaluated transformation pipeline.
///
/// `Pipeline` is the seam between the shared composition/evaluation model
/// and the per-variant adaptation of stages: [`compose`](Self::compose)
/// decides how a raw `Value -> Value` function becomes a stored stage
/// (elementwise for lists, presence-preserving for optionals), while
/// [`run`](Self::run) is always the same pure fold.
///
/// # Associated Types
///
/// - `Value`: what a raw stage transforms (an element for
///   [`ListF`](super::ListF), the wrapped value otherwise).
/// - `Output`: what [`run`](Self::run) yields (`Vec` for lists, `Option`
///   for optionals, the bare value for the base container).
pub trait Pipeline: Clone {
    /// The type a raw stage function consumes and produces.
    type Value;

    /// The type evaluation yields.
    type Output;

    /// Returns a new pipeline with `stage` queued after the existing
    /// stages. The receiver is left untouched and remains evaluable.
    fn compose<F>(&self, stage: F) -> Self
    where
        F: Fn(Self::Value) -> Self::Value + 'static;

    /// Evaluates the pipeline: folds the queued stages, in composition
    /// order, over the captured value.
    ///
    /// Evaluation is pure. The stage queue is not consumed, so `run` may be
    /// called repeatedly and yields equal results each time.
    fn run(&self) -> Self::Output;

    /// Runs `body` with a [`Scope`] proxy collecting stages in registration
    /// order, then evaluates the accumulated pipeline exactly once and
    /// returns the result.
    ///
    /// If `body` panics, the pipeline is never evaluated and the panic
    /// propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let result = Functor::wrap(String::from("abc")).scope(|block| {
    ///     block.call(|text: String| text.to_uppercase());
    ///     block.call(|text: String| text + "def");
    /// });
    /// assert_eq!(result, "ABCdef");
    /// ```
    fn scope<B>(&self, body: B) -> Self::Output
    where
        B: FnOnce(&mut Scope<Self>),
    {
        let mut scope = Scope::new(self.clone());
        body(&mut scope);
        scope.finish()
    }

    /// Fallible form of [`scope`](Self::scope): if `body` returns `Err`,
    /// nothing is evaluated and the error propagates to the caller.
    ///
    /// # Errors
    ///
    /// Returns whatever error `body` returns, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let outcome: Result<i32, &str> = Functor::wrap(1).try_scope(|block| {
    ///     block.call(|x: i32| x + 1);
    ///     Err("abandoned")
    /// });
    /// assert_eq!(outcome, Err("abandoned"));
    /// ```
    fn try_scope<B, E>(&self, body: B) -> Result<Self::Output, E>
    where
        B: FnOnce(&mut Scope<Self>) -> Result<(), E>,
    {
        let mut scope = Scope::new(self.clone());
        body(&mut scope)?;
        Ok(scope.finish())
    }
}

/// Evaluates a pipeline.
///
/// Free-function form of [`Pipeline::run`], for call sites that read better
/// as `run(&pipeline)` than as a method chain.
///
/// # Examples
///
/// ```rust
/// use functorial::prelude::*;
///
/// let pipeline = Functor::wrap(20) >> (|x: i32| x + 1);
/// assert_eq!(run(&pipeline), 21);
/// ```
pub fn run<P: Pipeline>(pipeline: &P) -> P::Output {
    pipeline.run()
}

// =============================================================================
// Functor<T> - the base container
// =============================================================================

/// The base container: a value plus a queue of deferred `T -> T` stages.
///
/// `Functor` is the identity instance of [`Pipeline`]: stages are stored
/// exactly as given and transform the whole wrapped value. Errors raised by
/// a stage during [`run`](Pipeline::run) propagate unchanged to the caller.
///
/// Composition is non-destructive: each queued stage yields a fresh
/// container, and the source container stays evaluable.
///
/// # Examples
///
/// ```rust
/// use functorial::prelude::*;
///
/// let base = Functor::wrap(5);
/// let doubled = &base >> (|x: i32| x * 2);
///
/// assert_eq!(base.run(), 5);
/// assert_eq!(doubled.run(), 10);
/// ```
#[derive(Clone)]
pub struct Functor<T> {
    value: T,
    stages: StageQueue<T>,
}

impl<T> Functor<T> {
    /// Wraps a value into a container with an empty stage queue.
    #[inline]
    pub fn wrap(value: T) -> Self {
        Self {
            value,
            stages: StageQueue::new(),
        }
    }

    /// Returns the captured value, untouched by any queued stage.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
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

impl<A: Clone + 'static> Functor<A> {
    /// Lifts a unary function into the container: the returned closure
    /// evaluates its argument and wraps the function's result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let stringify = Functor::lift(|x: i32| x.to_string());
    /// let result = stringify(&(Functor::wrap(6) >> (|x: i32| x * 7)));
    /// assert_eq!(result.run(), "42");
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(&Self) -> Functor<B>
    where
        F: Fn(A) -> B,
    {
        move |fa| Functor::wrap(function(fa.run()))
    }

    /// Lifts a binary function into the container: the returned closure
    /// evaluates both arguments and wraps the function's result.
    ///
    /// Evaluation happens when the returned closure is invoked, not when
    /// `lift2` itself is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let x = Functor::wrap(3) >> (|x: i32| x + 1);
    /// let y = Functor::wrap(5) >> (|x: i32| x * x);
    /// let add = Functor::lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(add(&x, &y).run(), 29);
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(&Self, &Functor<B>) -> Functor<C>
    where
        B: Clone + 'static,
        F: Fn(A, B) -> C,
    {
        move |fa, fb| Functor::wrap(function(fa.run(), fb.run()))
    }
}

impl<T: Clone + 'static> Pipeline for Functor<T> {
    type Value = T;
    type Output = T;

    fn compose<F>(&self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        let mut stages = self.stages.clone();
        stages.push(Rc::new(stage));
        Self {
            value: self.value.clone(),
            stages,
        }
    }

    fn run(&self) -> T {
        self.stages
            .iter()
            .fold(self.value.clone(), |value, stage| stage(value))
    }
}

impl<T: PartialEq> PartialEq for Functor<T> {
    /// Containers are equal iff their values are equal and their stage
    /// queues hold the same stages by closure identity.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && same_stages(&self.stages, &other.stages)
    }
}

impl<T: fmt::Debug> fmt::Debug for Functor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Functor")
            .field("value", &self.value)
            .field("stages", &self.stages.len())
            .finish()
    }
}

// =============================================================================
// Pipeline operators
// =============================================================================

/// Left-to-right composition: `container >> stage`.
impl<T, F> Shr<F> for Functor<T>
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
impl<T, F> Shr<F> for &Functor<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Functor<T>;

    fn shr(self, stage: F) -> Functor<T> {
        self.compose(stage)
    }
}

/// Wraps a function so it can sit on the left of the `<<` pipeline
/// operator: `stage(f) << container` queues `f` exactly as
/// `container >> f` would.
///
/// # Examples
///
/// ```rust
/// use functorial::prelude::*;
///
/// let left_to_right = Functor::wrap(4) >> (|x: i32| x + 1);
/// let right_to_left = stage(|x: i32| x + 1) << Functor::wrap(4);
/// assert_eq!(left_to_right.run(), right_to_left.run());
/// ```
pub struct Stage<F>(pub(crate) F);

/// Wraps `function` for right-to-left composition with `<<`.
#[inline]
pub fn stage<F>(function: F) -> Stage<F> {
    Stage(function)
}

/// Right-to-left composition: `stage(f) << container`.
impl<T, F> Shl<Functor<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Functor<T>;

    fn shl(self, container: Functor<T>) -> Functor<T> {
        container.compose(self.0)
    }
}

/// Right-to-left composition onto a borrowed container.
impl<T, F> Shl<&Functor<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Functor<T>;

    fn shl(self, container: &Functor<T>) -> Functor<T> {
        container.compose(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[rstest]
    fn wrap_has_no_stages() {
        let container = Functor::wrap(7);
        assert_eq!(container.stage_count(), 0);
        assert!(!container.is_deferred());
        assert_eq!(*container.value(), 7);
    }

    #[rstest]
    fn compose_defers_and_run_folds_in_order() {
        let pipeline = Functor::wrap(5) >> add_one >> double;
        assert!(pipeline.is_deferred());
        assert_eq!(pipeline.run(), 12);
    }

    #[rstest]
    fn compose_leaves_source_untouched() {
        let base = Functor::wrap(5) >> add_one;
        let extended = &base >> double;

        assert_eq!(base.stage_count(), 1);
        assert_eq!(extended.stage_count(), 2);
        assert_eq!(base.run(), 6);
        assert_eq!(extended.run(), 12);
    }

    #[rstest]
    fn run_is_repeatable() {
        let pipeline = Functor::wrap(3) >> double;
        assert_eq!(pipeline.run(), pipeline.run());
    }

    #[rstest]
    fn both_operator_directions_agree() {
        let forward = Functor::wrap(10) >> add_one;
        let backward = stage(add_one) << Functor::wrap(10);
        assert_eq!(forward.run(), backward.run());

        let borrowed = Functor::wrap(10);
        assert_eq!((stage(add_one) << &borrowed).run(), 11);
    }

    #[rstest]
    fn clones_share_stages_and_compare_equal() {
        let original = Functor::wrap(1) >> add_one;
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[rstest]
    fn recomposed_stages_are_distinct() {
        // Equal source text, distinct closures: identity-based stage
        // equality keeps these apart.
        let first = Functor::wrap(1) >> (|x: i32| x + 1);
        let second = Functor::wrap(1) >> (|x: i32| x + 1);
        assert_ne!(first, second);
    }

    #[rstest]
    fn lift_wraps_the_result() {
        let stringify = Functor::lift(|x: i32| x.to_string());
        assert_eq!(stringify(&Functor::wrap(42)).run(), "42");
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 4, 7)]
    #[case(-2, 2, 0)]
    fn lift2_combines_evaluated_arguments(#[case] x: i32, #[case] y: i32, #[case] sum: i32) {
        let add = Functor::lift2(|x: i32, y: i32| x + y);
        assert_eq!(add(&Functor::wrap(x), &Functor::wrap(y)).run(), sum);
    }

    #[rstest]
    fn debug_reports_stage_count() {
        let pipeline = Functor::wrap(1) >> add_one;
        assert_eq!(format!("{pipeline:?}"), "Functor { value: 1, stages: 1 }");
    }
}
