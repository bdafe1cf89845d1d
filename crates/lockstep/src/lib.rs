//! Lockstep - single-pass multiplexed aggregation in Rust
//!
//! Attach up to sixteen typed requests to one source and get every answer
//! from a single enumeration.
//!
//! # Example
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let (total, first_big, count) = requests(vec![1i64, 2, 3, 4, 5])
//!     .sum()
//!     .first_or_default_where(|x| *x > 3)
//!     .count()
//!     .extract()
//!     .unwrap();
//!
//! assert_eq!(total, 15);
//! assert_eq!(first_big, 4);
//! assert_eq!(count, 5);
//! ```

// Core contracts
pub use lockstep_core::{source, BoxError, Consumer, LockstepError, Result, Source, Summable};

#[cfg(feature = "decimal")]
pub use lockstep_core::Decimal;

// Evaluation settings
pub use lockstep_config::{ConfigError, EvaluationConfig};

// Request holders and consumers
pub use lockstep_eval::{consumer, select, stream};
pub use lockstep_eval::{
    evaluate, requests, Append, ConsumerFactory, ConsumerSet, Observer, RequestHolder, Stream,
};

#[cfg(feature = "console")]
pub use lockstep_console as console;

pub mod prelude {
    pub use super::{requests, ConsumerFactory, RequestHolder};
    pub use super::{Consumer, LockstepError, Source};
    pub use super::EvaluationConfig;
    pub use super::{Observer, Stream};
}
