//! Lockstep Eval - single-pass multiplexed evaluation
//!
//! A request holder binds one [`Source`](lockstep_core::Source) to up to
//! sixteen typed consumers. Extracting the holder opens the source once,
//! feeds every element to every consumer in registration order, and returns
//! a tuple of results aligned with the order the requests were added.
//!
//! # Modules
//!
//! - [`holder`] - [`RequestHolder`] and the [`requests`] entry point
//! - [`factory`] - [`ConsumerFactory`] for the standard request kinds
//! - [`consumer`] - Concrete sum, first, count, fold and stream-bridge consumers
//! - [`select`] - Zero-erasure selector and predicate wrappers
//! - [`set`] - Tuple-based consumer sets of arity 1 through 16
//! - [`stream`] - Minimal push-stream primitive used by the bridge
//! - [`evaluator`] - The single-pass driver
//!
//! # Example
//!
//! ```
//! use lockstep_eval::requests;
//!
//! let (total, evens, first_big) = requests(vec![1i64, 2, 3, 4, 5])
//!     .sum()
//!     .count_where(|x| x % 2 == 0)
//!     .first_or_where(-1, |x| *x > 10)
//!     .extract()
//!     .unwrap();
//!
//! assert_eq!(total, 15);
//! assert_eq!(evens, 2);
//! assert_eq!(first_big, -1);
//! ```

#![allow(clippy::type_complexity)]

pub mod consumer;
pub mod evaluator;
pub mod factory;
pub mod holder;
pub mod select;
pub mod set;
pub mod stream;

pub use consumer::{
    CountConsumer, FirstConsumer, FoldConsumer, GetConsumer, OptionalSumConsumer, SumConsumer,
};
pub use evaluator::evaluate;
pub use factory::ConsumerFactory;
pub use holder::{requests, RequestHolder};
pub use set::{Append, ConsumerSet};
pub use stream::{Observer, Stream};
