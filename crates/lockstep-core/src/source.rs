//! Sources of elements and their iteration sessions.
//!
//! A [`Source`] is opened exactly once per evaluation. Opening yields an
//! iteration session (an ordinary [`Iterator`]) whose lifetime is scoped to
//! the evaluation: it is dropped when the source is exhausted, or while
//! unwinding from a failure, before the evaluation returns.

use std::marker::PhantomData;

use crate::error::{BoxError, LockstepError, Result};

/// A sequence that can be enumerated once per evaluation.
///
/// Borrowed slice sources clone each element into the session so that
/// consumers always receive owned values in enumeration order.
pub trait Source {
    /// Element type produced by the session.
    type Item;

    /// Iteration session type.
    type Session: Iterator<Item = Self::Item>;

    /// Acquires the iteration session.
    ///
    /// # Errors
    ///
    /// Returns [`LockstepError::Source`] if the session cannot be acquired.
    fn open(self) -> Result<Self::Session>;
}

impl<T> Source for Vec<T> {
    type Item = T;
    type Session = std::vec::IntoIter<T>;

    #[inline]
    fn open(self) -> Result<Self::Session> {
        Ok(self.into_iter())
    }
}

impl<T, const N: usize> Source for [T; N] {
    type Item = T;
    type Session = std::array::IntoIter<T, N>;

    #[inline]
    fn open(self) -> Result<Self::Session> {
        Ok(self.into_iter())
    }
}

impl<'a, T: Clone> Source for &'a [T] {
    type Item = T;
    type Session = std::iter::Cloned<std::slice::Iter<'a, T>>;

    #[inline]
    fn open(self) -> Result<Self::Session> {
        Ok(self.iter().cloned())
    }
}

impl<'a, T: Clone> Source for &'a Vec<T> {
    type Item = T;
    type Session = std::iter::Cloned<std::slice::Iter<'a, T>>;

    #[inline]
    fn open(self) -> Result<Self::Session> {
        Ok(self.iter().cloned())
    }
}

/// Creates a source from any [`IntoIterator`].
///
/// # Example
///
/// ```
/// use lockstep_core::source::{self, Source};
///
/// let session = source::iter(1..=3).open().unwrap();
/// assert_eq!(session.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn iter<I: IntoIterator>(items: I) -> Iter<I> {
    Iter { items }
}

/// Source adapter over an [`IntoIterator`].
///
/// Created by [`iter()`].
#[derive(Debug, Clone)]
pub struct Iter<I> {
    items: I,
}

impl<I: IntoIterator> Source for Iter<I> {
    type Item = I::Item;
    type Session = I::IntoIter;

    #[inline]
    fn open(self) -> Result<Self::Session> {
        Ok(self.items.into_iter())
    }
}

/// Creates a source whose session is acquired by a fallible function.
///
/// The function is not called until the evaluation starts, so a holder that
/// is never extracted never touches the underlying resource.
///
/// # Example
///
/// ```
/// use lockstep_core::source::{self, Source};
/// use lockstep_core::LockstepError;
///
/// let failing = source::from_fn(|| Err::<Vec<i32>, _>("disk unavailable"));
/// assert!(matches!(failing.open(), Err(LockstepError::Source(_))));
/// ```
pub fn from_fn<F, I, E>(open: F) -> FromFn<F, E>
where
    F: FnOnce() -> std::result::Result<I, E>,
    I: IntoIterator,
    E: Into<BoxError>,
{
    FromFn {
        open,
        _phantom: PhantomData,
    }
}

/// Source backed by a fallible open function.
///
/// Created by [`from_fn()`].
pub struct FromFn<F, E> {
    open: F,
    _phantom: PhantomData<fn() -> E>,
}

impl<F, I, E> Source for FromFn<F, E>
where
    F: FnOnce() -> std::result::Result<I, E>,
    I: IntoIterator,
    E: Into<BoxError>,
{
    type Item = I::Item;
    type Session = I::IntoIter;

    fn open(self) -> Result<Self::Session> {
        (self.open)()
            .map(IntoIterator::into_iter)
            .map_err(LockstepError::source)
    }
}
