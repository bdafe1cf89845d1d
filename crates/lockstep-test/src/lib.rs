//! Shared test fixtures for Lockstep crates.
//!
//! This crate depends only on `lockstep-core`, so every other crate can use
//! it as a dev-dependency without cycles.
//!
//! - [`source`] - sources that record session acquisition and release
//! - [`probe`] - consumers that record, fail or panic on demand
//! - [`order`] - a small order-line domain with decimal prices
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! lockstep-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use lockstep_test::{CountingSource, ProbeConsumer};
//! ```

pub mod order;
pub mod probe;
pub mod source;

pub use order::{sample_orders, Order};
pub use probe::{Boom, FailOn, PanicOn, ProbeConsumer, ProbeLog};
pub use source::{CountingSource, FailingSource, SessionStats};
