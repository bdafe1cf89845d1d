//! Per-element value selectors.

use std::marker::PhantomData;

use lockstep_core::{BoxError, LockstepError, Result};

/// Maps an element to the value a consumer accumulates.
///
/// Selectors are stored as concrete generic types inside consumers, so
/// `sum()`, `sum_by(f)` and `try_sum_by(f)` share one accumulator
/// implementation without dynamic dispatch.
pub trait Selector<T> {
    /// The selected value type.
    type Output;

    /// Selects the value for one element.
    fn select(&mut self, element: &T) -> Result<Self::Output>;
}

/// Selects the element itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: Clone> Selector<T> for Identity {
    type Output = T;

    #[inline]
    fn select(&mut self, element: &T) -> Result<T> {
        Ok(element.clone())
    }
}

/// Selects through an infallible closure.
pub struct FnSelector<F, V> {
    f: F,
    _phantom: PhantomData<fn() -> V>,
}

impl<F, V> FnSelector<F, V> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, V, F> Selector<T> for FnSelector<F, V>
where
    F: FnMut(&T) -> V,
{
    type Output = V;

    #[inline]
    fn select(&mut self, element: &T) -> Result<V> {
        Ok((self.f)(element))
    }
}

/// Selects through a fallible closure; its error aborts the evaluation.
pub struct TryFnSelector<F, V, E> {
    f: F,
    _phantom: PhantomData<fn() -> (V, E)>,
}

impl<F, V, E> TryFnSelector<F, V, E> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, V, E, F> Selector<T> for TryFnSelector<F, V, E>
where
    F: FnMut(&T) -> std::result::Result<V, E>,
    E: Into<BoxError>,
{
    type Output = V;

    #[inline]
    fn select(&mut self, element: &T) -> Result<V> {
        (self.f)(element).map_err(LockstepError::callback)
    }
}
