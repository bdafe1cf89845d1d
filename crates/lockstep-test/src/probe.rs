//! Consumers that observe, fail or panic on demand.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use lockstep_core::{Consumer, LockstepError, Result};
use thiserror::Error;

/// Error raised by test callbacks and sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("boom: {0}")]
pub struct Boom(pub String);

impl Boom {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Shared, ordered record of `(slot, element)` deliveries.
pub type ProbeLog<T> = Rc<RefCell<Vec<(usize, T)>>>;

/// Records every element it accepts, tagged with its slot number.
///
/// Several probes sharing one [`ProbeLog`] reveal the order in which the
/// evaluator delivers elements to slots. The output is the number of
/// elements accepted.
pub struct ProbeConsumer<T> {
    slot: usize,
    log: ProbeLog<T>,
    accepted: usize,
    finishes: Rc<RefCell<usize>>,
}

impl<T> ProbeConsumer<T> {
    pub fn new(slot: usize, log: &ProbeLog<T>) -> Self {
        Self {
            slot,
            log: Rc::clone(log),
            accepted: 0,
            finishes: Rc::new(RefCell::new(0)),
        }
    }

    /// Creates an empty shared log.
    pub fn log() -> ProbeLog<T> {
        Rc::new(RefCell::new(Vec::new()))
    }

    /// Handle counting how many times this probe was finished.
    pub fn finishes(&self) -> Rc<RefCell<usize>> {
        Rc::clone(&self.finishes)
    }
}

impl<T: Clone> Consumer<T> for ProbeConsumer<T> {
    type Output = usize;

    fn accept(&mut self, element: &T) -> Result<()> {
        self.log.borrow_mut().push((self.slot, element.clone()));
        self.accepted += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<usize> {
        *self.finishes.borrow_mut() += 1;
        Ok(self.accepted)
    }
}

/// Fails with a callback error when it sees a given element.
#[derive(Debug, Clone)]
pub struct FailOn<T>(pub T);

impl<T: PartialEq + Debug> Consumer<T> for FailOn<T> {
    type Output = ();

    fn accept(&mut self, element: &T) -> Result<()> {
        if *element == self.0 {
            Err(LockstepError::callback(Boom::new(format!(
                "rejected {:?}",
                element
            ))))
        } else {
            Ok(())
        }
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Panics when it sees a given element.
#[derive(Debug, Clone)]
pub struct PanicOn<T>(pub T);

impl<T: PartialEq + Debug> Consumer<T> for PanicOn<T> {
    type Output = ();

    fn accept(&mut self, element: &T) -> Result<()> {
        if *element == self.0 {
            panic!("consumer panicked on {:?}", element);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
