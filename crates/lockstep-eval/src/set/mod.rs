// Typed consumer sets for zero-erasure lock-step evaluation.

mod tuple;


pub use tuple::{Append, ConsumerSet};
