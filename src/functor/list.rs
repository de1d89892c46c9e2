//! The list instance: stages fan over every element, lazily.
//!
//! [`ListF`] wraps a finite sequence. Composed stages are adapted into lazy
//! `map` layers, so no element is transformed until [`run`](Pipeline::run)
//! materializes the result or the container is iterated. Iterating a
//! borrowed container yields the same sequence `run` would produce, without
//! collecting it.
//!
//! Multi-argument lifting ([`ListF::lift2`]) evaluates its argument
//! containers eagerly and combines them as a Cartesian product, first
//! container varying slowest. The product must be eager: independent lazy
//! sequences cannot be co-iterated without materializing all but one of
//! them.
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let list = ListF::wrap([1, 2, 3]) >> (|x: i32| x + 1);
//! assert_eq!(list.run(), vec![2, 3, 4]);
//!
//! let pair = ListF::lift2(|x: i32, y: char| (x, y));
//! let pairs = pair(&ListF::wrap(0..2), &ListF::wrap(['a', 'b']));
//! assert_eq!(pairs.run(), vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')]);
//! ```

use std::fmt;
use std::ops::{Shl, Shr};
use std::rc::Rc;

use super::container::{Pipeline, Stage, StageQueue, same_stages};

/// A lazily transformed sequence: the state flowing between list stages.
pub type LazySeq<T> = Box<dyn Iterator<Item = T>>;

/// The list container: a materialized source sequence plus a queue of lazy
/// sequence transformations.
///
/// Evaluation re-clones the source, so a `ListF` may be run any number of
/// times with equal results.
///
/// # Examples
///
/// ```rust
/// use functorial::prelude::*;
///
/// let doubled = ListF::wrap(0..4) >> (|x: i32| x * 2);
/// assert_eq!(doubled.run(), vec![0, 2, 4, 6]);
///
/// // Borrowed iteration stays lazy: no intermediate Vec.
/// let first_two: Vec<i32> = (&doubled).into_iter().take(2).collect();
/// assert_eq!(first_two, vec![0, 2]);
/// ```
#[derive(Clone)]
pub struct ListF<T> {
    value: Vec<T>,
    stages: StageQueue<LazySeq<T>>,
}

impl<T> ListF<T> {
    /// Wraps a sequence into a container with an empty stage queue.
    ///
    /// The source is materialized once here; stages stay lazy.
    pub fn wrap<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            value: source.into_iter().collect(),
            stages: StageQueue::new(),
        }
    }

    /// Returns the captured source elements, untouched by any queued stage.
    #[inline]
    pub fn value(&self) -> &[T] {
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

impl<A: Clone + 'static> ListF<A> {
    /// The lazy sequence `run` would materialize: the stage queue folded
    /// over a fresh pass of the source.
    fn lazy_sequence(&self) -> LazySeq<A> {
        let source: LazySeq<A> = Box::new(self.value.clone().into_iter());
        self.stages
            .iter()
            .fold(source, |sequence, stage| stage(sequence))
    }

    /// Lifts a unary function over every element of an evaluated container.
    pub fn lift<B, F>(function: F) -> impl Fn(&Self) -> ListF<B>
    where
        F: Fn(A) -> B,
    {
        move |fa| ListF::wrap(fa.run().into_iter().map(|element| function(element)))
    }

    /// Lifts a binary function over the Cartesian product of two evaluated
    /// containers, first container varying slowest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::prelude::*;
    ///
    /// let pair = ListF::lift2(|x: i32, y: char| (x, y));
    /// let pairs = pair(&ListF::wrap(0..3), &ListF::wrap(['a', 'b']));
    /// assert_eq!(
    ///     pairs.run(),
    ///     vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')],
    /// );
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(&Self, &ListF<B>) -> ListF<C>
    where
        B: Clone + 'static,
        F: Fn(A, B) -> C,
    {
        move |fa, fb| {
            let left = fa.run();
            let right = fb.run();
            let mut combined = Vec::with_capacity(left.len() * right.len());
            for x in &left {
                for y in &right {
                    combined.push(function(x.clone(), y.clone()));
                }
            }
            ListF::wrap(combined)
        }
    }
}

impl<T: Clone + 'static> Pipeline for ListF<T> {
    type Value = T;
    type Output = Vec<T>;

    /// Adapts an elementwise function into a lazy `map` layer over the
    /// flowing sequence.
    fn compose<F>(&self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        let stage = Rc::new(stage);
        let mut stages = self.stages.clone();
        stages.push(Rc::new(move |sequence: LazySeq<T>| -> LazySeq<T> {
            let stage = Rc::clone(&stage);
            Box::new(sequence.map(move |element| stage(element)))
        }));
        Self {
            value: self.value.clone(),
            stages,
        }
    }

    /// Materializes the lazy sequence into an ordered `Vec`.
    fn run(&self) -> Vec<T> {
        self.lazy_sequence().collect()
    }
}

/// Borrowed iteration yields the sequence [`run`](Pipeline::run) would
/// materialize, without collecting it first.
impl<T: Clone + 'static> IntoIterator for &ListF<T> {
    type Item = T;
    type IntoIter = LazySeq<T>;

    fn into_iter(self) -> LazySeq<T> {
        self.lazy_sequence()
    }
}

impl<T: PartialEq> PartialEq for ListF<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && same_stages(&self.stages, &other.stages)
    }
}

impl<T: fmt::Debug> fmt::Debug for ListF<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ListF")
            .field("value", &self.value)
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Left-to-right elementwise composition: `list >> stage`.
impl<T, F> Shr<F> for ListF<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = Self;

    fn shr(self, stage: F) -> Self {
        self.compose(stage)
    }
}

/// Left-to-right elementwise composition off a borrowed container.
impl<T, F> Shr<F> for &ListF<T>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = ListF<T>;

    fn shr(self, stage: F) -> ListF<T> {
        self.compose(stage)
    }
}

/// Right-to-left composition: `stage(f) << list`.
impl<T, F> Shl<ListF<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = ListF<T>;

    fn shl(self, container: ListF<T>) -> ListF<T> {
        container.compose(self.0)
    }
}

/// Right-to-left composition onto a borrowed container.
impl<T, F> Shl<&ListF<T>> for Stage<F>
where
    T: Clone + 'static,
    F: Fn(T) -> T + 'static,
{
    type Output = ListF<T>;

    fn shl(self, container: &ListF<T>) -> ListF<T> {
        container.compose(self.0)
    }
}
