//! Lockstep Core - Core types and traits for single-pass aggregation
//!
//! This crate provides the fundamental abstractions for Lockstep:
//! - The [`Consumer`] contract for incremental accumulators
//! - The [`Source`] contract for sequences enumerated once per evaluation
//! - Checked numeric accumulation via [`Summable`]
//! - The [`LockstepError`] taxonomy

pub mod consumer;
pub mod error;
pub mod numeric;
pub mod source;

pub use consumer::Consumer;
pub use error::{BoxError, LockstepError, Result};
pub use numeric::Summable;
pub use source::Source;

#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;
