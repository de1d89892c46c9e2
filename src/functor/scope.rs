//! Scoped pipeline blocks.
//!
//! A scope bundles several stage registrations into one block and defers
//! evaluation to the block's end. Stages are registered explicitly with
//! [`Scope::call`], in the order they should apply; when the block body
//! returns normally the accumulated pipeline is evaluated exactly once.
//!
//! Entry points are [`Pipeline::scope`] and [`Pipeline::try_scope`]; the
//! error paths (an `Err` from the body, or a panic) skip evaluation
//! entirely.
//!
//! # Examples
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let result = Functor::wrap(0).scope(|block| {
//!     block.call(|x: i32| x + 10);
//!     block.call(|x: i32| x * 2);
//! });
//! assert_eq!(result, 20);
//! ```

use super::container::Pipeline;

/// The proxy handed to a scoped block's body.
///
/// `Scope` owns the pipeline being built. Each [`call`](Self::call) queues
/// one stage; stages apply in registration order (first registered, first
/// applied). Nothing is evaluated until the surrounding
/// [`scope`](Pipeline::scope) call finishes normally.
pub struct Scope<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Scope<P> {
    pub(crate) fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Registers `stage` as the next pipeline stage.
    ///
    /// Registration order is application order; when two stages could
    /// equally well come first, whichever is registered first wins.
    /// Returns the scope so registrations can be chained.
    pub fn call<F>(&mut self, stage: F) -> &mut Self
    where
        F: Fn(P::Value) -> P::Value + 'static,
    {
        self.pipeline = self.pipeline.compose(stage);
        self
    }

    /// Evaluates the accumulated pipeline. Called once, on normal exit.
    pub(crate) fn finish(self) -> P::Output {
        self.pipeline.run()
    }
}
