//! Minimal push-stream primitive used by the stream-bridge consumer.
//!
//! Only what the bridge needs: an [`Observer`] sink with `on_next`,
//! `on_error` and `on_complete`, and a [`Stream`] recipe type with a handful
//! of stages. Completion-sensitive stages (`last`, `single`, `count`, `reduce`) emit
//! when the input completes, which is why the bridge signals completion
//! before reading its result.

mod observer;
mod operators;

pub use observer::{BoxObserver, Observer};
pub use operators::Stream;

#[cfg(test)]
mod tests;
