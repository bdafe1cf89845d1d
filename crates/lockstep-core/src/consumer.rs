//! The incremental accumulator contract.

use crate::error::Result;

/// An incremental accumulator driven one element at a time.
///
/// A consumer is created with its configuration, receives zero or more
/// [`accept`](Consumer::accept) calls in source order, and is finalized with
/// [`finish`](Consumer::finish).
///
/// # Contract
///
/// - `finish` must be callable after zero `accept` calls and then reports
///   the empty-sequence result for the operation.
/// - `finish` is idempotent: calling it again returns the same value.
/// - A consumer that no longer needs data may turn `accept` into a no-op,
///   but it never ends the shared pass. Other consumers keep receiving
///   every element.
/// - Errors raised by user callbacks are returned unchanged from `accept`
///   or `finish`.
///
/// # Example
///
/// ```
/// use lockstep_core::{Consumer, Result};
///
/// struct MaxConsumer {
///     max: Option<i64>,
/// }
///
/// impl Consumer<i64> for MaxConsumer {
///     type Output = Option<i64>;
///
///     fn accept(&mut self, element: &i64) -> Result<()> {
///         self.max = Some(self.max.map_or(*element, |m| m.max(*element)));
///         Ok(())
///     }
///
///     fn finish(&mut self) -> Result<Option<i64>> {
///         Ok(self.max)
///     }
/// }
///
/// let mut consumer = MaxConsumer { max: None };
/// assert_eq!(consumer.finish().unwrap(), None);
/// consumer.accept(&3).unwrap();
/// consumer.accept(&7).unwrap();
/// assert_eq!(consumer.finish().unwrap(), Some(7));
/// ```
pub trait Consumer<T> {
    /// The final result type.
    type Output;

    /// Incorporates a single element.
    fn accept(&mut self, element: &T) -> Result<()>;

    /// Returns the accumulated result.
    fn finish(&mut self) -> Result<Self::Output>;

    /// Returns true once further elements can no longer change the result.
    ///
    /// Informational only: the evaluator keeps feeding every element.
    fn is_satisfied(&self) -> bool {
        false
    }
}

impl<T, C> Consumer<T> for &mut C
where
    C: Consumer<T> + ?Sized,
{
    type Output = C::Output;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        (**self).accept(element)
    }

    #[inline]
    fn finish(&mut self) -> Result<Self::Output> {
        (**self).finish()
    }

    #[inline]
    fn is_satisfied(&self) -> bool {
        (**self).is_satisfied()
    }
}
