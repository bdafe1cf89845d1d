//! Minimal push-stream sink.

use lockstep_core::LockstepError;

/// A push-based sink for a stream of values.
///
/// Streams follow the usual grammar: any number of `on_next` calls,
/// optionally ended by exactly one terminal `on_error` or `on_complete`.
/// Stages ignore every event after a terminal one.
pub trait Observer<T> {
    /// Receives the next value.
    fn on_next(&mut self, value: T);

    /// Receives a terminal error.
    fn on_error(&mut self, error: LockstepError);

    /// Receives the terminal completion signal.
    fn on_complete(&mut self);
}

/// Boxed observer used to connect stages.
pub type BoxObserver<'a, T> = Box<dyn Observer<T> + 'a>;

impl<T, O> Observer<T> for Box<O>
where
    O: Observer<T> + ?Sized,
{
    #[inline]
    fn on_next(&mut self, value: T) {
        (**self).on_next(value);
    }

    #[inline]
    fn on_error(&mut self, error: LockstepError) {
        (**self).on_error(error);
    }

    #[inline]
    fn on_complete(&mut self) {
        (**self).on_complete();
    }
}
