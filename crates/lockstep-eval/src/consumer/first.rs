// First-or-default consumer.

use lockstep_core::{Consumer, Result};

use crate::select::Predicate;

// Records the first element matching the predicate.
//
// Once an element is recorded every later `accept` is a no-op for this
// consumer only; the shared pass continues for the others.
pub struct FirstConsumer<T, P> {
    predicate: P,
    default: T,
    found: Option<T>,
}

impl<T, P> FirstConsumer<T, P>
where
    T: Clone,
    P: Predicate<T>,
{
    pub fn new(predicate: P, default: T) -> Self {
        Self {
            predicate,
            default,
            found: None,
        }
    }
}

impl<T, P> Consumer<T> for FirstConsumer<T, P>
where
    T: Clone,
    P: Predicate<T>,
{
    type Output = T;

    #[inline]
    fn accept(&mut self, element: &T) -> Result<()> {
        if self.found.is_none() && self.predicate.test(element)? {
            self.found = Some(element.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<T> {
        Ok(self.found.as_ref().unwrap_or(&self.default).clone())
    }

    #[inline]
    fn is_satisfied(&self) -> bool {
        self.found.is_some()
    }
}
