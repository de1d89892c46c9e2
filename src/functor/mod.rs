//! Deferred-pipeline containers.
//!
//! This module provides the pipeline core and its instances:
//!
//! - [`Pipeline`]: the trait tying composition, evaluation, and scoped
//!   blocks together
//! - [`Functor`]: the base container over a single value
//! - [`ListF`]: the list instance, fanning stages lazily over elements
//! - [`Maybe`]: the optional instance, collapsing failures into absence
//! - [`Scope`]: the proxy collecting stages inside a scoped block
//! - [`run`]: the free-function evaluation trigger
//! - [`stage`]: the wrapper enabling right-to-left `<<` composition
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let pipeline = Functor::wrap(vec![3, 1, 2])
//!     >> (|mut values: Vec<i32>| { values.sort_unstable(); values })
//!     >> (|values: Vec<i32>| values.into_iter().map(|x| x * 10).collect());
//! assert_eq!(pipeline.run(), vec![10, 20, 30]);
//! ```

mod container;
mod list;
mod maybe;
mod scope;

pub use container::{Functor, Pipeline, Stage, run, stage};
pub use list::{LazySeq, ListF};
pub use maybe::Maybe;
pub use scope::Scope;
