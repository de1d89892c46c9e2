//! Function-adaptation utilities for building pipeline stages.
//!
//! Pipelines consume unary stages; real functions often take more than one
//! argument. This module bridges the two:
//!
//! - [`curry2`] / [`curry3`]: inject one argument into a multi-argument
//!   function at a chosen position, yielding a function of the rest
//! - [`identity`], [`constant`], [`flip`]: small combinators used as
//!   trivial stages and composition building blocks
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! fn keep_below(limit: i32, values: Vec<i32>) -> Vec<i32> {
//!     values.into_iter().filter(|value| *value < limit).collect()
//! }
//!
//! let pipeline = Functor::wrap(vec![1, 5, 9, 3]) >> curry2(keep_below).apply(5);
//! assert_eq!(pipeline.run(), vec![1, 3]);
//! ```

mod curry;
mod utils;

pub use curry::{Curry2, Curry3, curry2, curry3};
pub use utils::{constant, flip, identity};
