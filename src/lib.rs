//! # functorial
//!
//! Lazy functor pipelines for Rust: containers that pair a value with a
//! deferred queue of transformations, evaluated on demand.
//!
//! ## Overview
//!
//! The library provides:
//!
//! - **Pipelines**: [`Functor`](functor::Functor) wraps a value and queues
//!   stages without executing them; [`Pipeline::run`](functor::Pipeline::run)
//!   folds the queue when (and only when) the result is needed.
//! - **Operators**: `container >> stage` queues a stage left-to-right;
//!   `stage(f) << container` does the same right-to-left.
//! - **Scoped blocks**: [`Pipeline::scope`](functor::Pipeline::scope) collects
//!   stages registered inside a closure and evaluates the pipeline exactly
//!   once on normal exit.
//! - **Currying**: [`curry2`](compose::curry2) and [`curry3`](compose::curry3)
//!   inject one argument into a multi-argument function at a chosen position,
//!   producing ready-made pipeline stages.
//! - **Instances**: [`ListF`](functor::ListF) fans stages lazily over every
//!   element; [`Maybe`](functor::Maybe) models presence/absence and collapses
//!   failing stages into the absent state.
//!
//! ## Example
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let pipeline = Functor::wrap(2) >> (|x: i32| x + 1) >> (|x: i32| x * 10);
//! assert_eq!(pipeline.run(), 30);
//!
//! let list = ListF::wrap([1, 2, 3]) >> (|x: i32| x + 1);
//! assert_eq!(list.run(), vec![2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use functorial::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::functor::*;
}

pub mod compose;
pub mod functor;
