//! Element predicates.

use std::marker::PhantomData;

use lockstep_core::{BoxError, LockstepError, Result};

/// Decides whether an element matches a request.
pub trait Predicate<T> {
    /// Returns true if the element matches.
    fn test(&mut self, element: &T) -> Result<bool>;
}

/// A predicate that matches every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<T> Predicate<T> for Always {
    #[inline]
    fn test(&mut self, _: &T) -> Result<bool> {
        Ok(true)
    }
}

/// A predicate backed by an infallible closure.
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, element: &T) -> Result<bool> {
        Ok((self.f)(element))
    }
}

/// A predicate backed by a fallible closure.
pub struct TryFnPredicate<F, E> {
    f: F,
    _phantom: PhantomData<fn() -> E>,
}

impl<F, E> TryFnPredicate<F, E> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, F> Predicate<T> for TryFnPredicate<F, E>
where
    F: FnMut(&T) -> std::result::Result<bool, E>,
    E: Into<BoxError>,
{
    #[inline]
    fn test(&mut self, element: &T) -> Result<bool> {
        (self.f)(element).map_err(LockstepError::callback)
    }
}
