// Fold consumer for user-defined accumulators.

use std::marker::PhantomData;

use lockstep_core::{BoxError, Consumer, LockstepError, Result};

// A single fold step: updates the accumulator with one element.
pub trait Folder<T, A> {
    fn step(&mut self, acc: &mut A, element: &T) -> Result<()>;
}

// Fold step backed by an infallible closure.
pub struct FnFolder<F> {
    f: F,
}

impl<F> FnFolder<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, A, F> Folder<T, A> for FnFolder<F>
where
    F: FnMut(&mut A, &T),
{
    #[inline]
    fn step(&mut self, acc: &mut A, element: &T) -> Result<()> {
        (self.f)(acc, element);
        Ok(())
    }
}

// Fold step backed by a fallible closure.
pub struct TryFnFolder<F, E> {
    f: F,
    _phantom: PhantomData<fn() -> E>,
}

impl<F, E> TryFnFolder<F, E> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, A, E, F> Folder<T, A> for TryFnFolder<F, E>
where
    F: FnMut(&mut A, &T) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    #[inline]
    fn step(&mut self, acc: &mut A, element: &T) -> Result<()> {
        (self.f)(acc, element).map_err(LockstepError::callback)
    }
}

// Folds every element into an accumulator seeded with an initial value.
//
// The empty-sequence result is the initial value.
pub struct FoldConsumer<T, A, F> {
    acc: A,
    folder: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, A, F> FoldConsumer<T, A, F>
where
    A: Clone,
    F: Folder<T, A>,
{
    pub fn new(init: A, folder: F) -> Self {
        Self {
            acc: init,
            folder,
            _phantom: PhantomData,
        }
    }
}

impl<T, A, F> Consumer<T> for FoldConsumer<T, A, F>
where
    A: Clone,
    F: Folder<T, A>,
{
    type Output = A;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        self.folder.step(&mut self.acc, element)
    }

    fn finish(&mut self) -> Result<A> {
        Ok(self.acc.clone())
    }
}
