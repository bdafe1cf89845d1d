// Checked sum consumers.
//
// Both variants add selected values with `Summable::checked_sum`, so an
// overflowing accumulation fails the evaluation instead of wrapping.

use std::marker::PhantomData;

use lockstep_core::{Consumer, LockstepError, Result, Summable};

use crate::select::Selector;

// Sums the values selected from every element.
//
// Created by `ConsumerFactory::sum`, `sum_by` and `try_sum_by`.
// The empty-sequence result is `V::zero()`.
pub struct SumConsumer<T, V, S> {
    selector: S,
    total: V,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, V, S> SumConsumer<T, V, S>
where
    V: Summable,
    S: Selector<T, Output = V>,
{
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            total: V::zero(),
            _phantom: PhantomData,
        }
    }
}

impl<T, V, S> Consumer<T> for SumConsumer<T, V, S>
where
    V: Summable,
    S: Selector<T, Output = V>,
{
    type Output = V;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        let value = self.selector.select(element)?;
        self.total = self
            .total
            .checked_sum(&value)
            .ok_or(LockstepError::Overflow { operation: "sum" })?;
        Ok(())
    }

    #[inline]
    fn finish(&mut self) -> Result<V> {
        Ok(self.total.clone())
    }
}

// Sums the present values selected from every element, skipping `None`.
//
// A sequence that is empty or contains only absent values sums to zero.
pub struct OptionalSumConsumer<T, V, S> {
    selector: S,
    total: V,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, V, S> OptionalSumConsumer<T, V, S>
where
    V: Summable,
    S: Selector<T, Output = Option<V>>,
{
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            total: V::zero(),
            _phantom: PhantomData,
        }
    }
}

impl<T, V, S> Consumer<T> for OptionalSumConsumer<T, V, S>
where
    V: Summable,
    S: Selector<T, Output = Option<V>>,
{
    type Output = V;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        if let Some(value) = self.selector.select(element)? {
            self.total = self
                .total
                .checked_sum(&value)
                .ok_or(LockstepError::Overflow {
                    operation: "optional sum",
                })?;
        }
        Ok(())
    }

    #[inline]
    fn finish(&mut self) -> Result<V> {
        Ok(self.total.clone())
    }
}
