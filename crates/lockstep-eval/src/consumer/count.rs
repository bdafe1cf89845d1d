// Count consumer.

use lockstep_core::{Consumer, LockstepError, Result};

use crate::select::Predicate;

// Counts the elements matching the predicate.
pub struct CountConsumer<P> {
    predicate: P,
    count: usize,
}

impl<P> CountConsumer<P> {
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            count: 0,
        }
    }
}

impl<T, P> Consumer<T> for CountConsumer<P>
where
    P: Predicate<T>,
{
    type Output = usize;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        if self.predicate.test(element)? {
            self.count = self
                .count
                .checked_add(1)
                .ok_or(LockstepError::Overflow { operation: "count" })?;
        }
        Ok(())
    }

    #[inline]
    fn finish(&mut self) -> Result<usize> {
        Ok(self.count)
    }
}
