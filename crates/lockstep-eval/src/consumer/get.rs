// Stream-bridge consumer.
//
// Adapts the element-at-a-time consumer protocol to a push stream: every
// accepted element becomes one `on_next`, finishing becomes `on_complete`,
// and the last value the derived stream emitted is the result.

use std::cell::RefCell;
use std::rc::Rc;

use lockstep_core::{BoxError, Consumer, LockstepError, Result};

use crate::stream::{BoxObserver, Observer, Stream};

// What the derived stream has produced so far.
struct Capture<R> {
    last: Option<R>,
    error: Option<LockstepError>,
}

// Terminal observer recording the most recent emission.
struct CaptureSink<R>(Rc<RefCell<Capture<R>>>);

impl<R> Observer<R> for CaptureSink<R> {
    fn on_next(&mut self, value: R) {
        self.0.borrow_mut().last = Some(value);
    }

    fn on_error(&mut self, error: LockstepError) {
        let mut capture = self.0.borrow_mut();
        if capture.error.is_none() {
            capture.error = Some(error);
        }
    }

    fn on_complete(&mut self) {}
}

// Bridges the pass into a user-defined stream transform.
//
// Created by `ConsumerFactory::get` or `try_get`. The transform is applied
// and subscribed once, at construction.
pub struct GetConsumer<'a, T, R> {
    input: BoxObserver<'a, T>,
    capture: Rc<RefCell<Capture<R>>>,
    completed: bool,
    failed: Option<LockstepError>,
}

impl<'a, T: 'a, R: 'a> GetConsumer<'a, T, R> {
    pub fn new<F>(transform: F) -> Self
    where
        F: FnOnce(Stream<'a, T, T>) -> Stream<'a, T, R>,
    {
        Self::connect(transform(Stream::source()))
    }

    // Like `new`, for transforms that can reject their configuration.
    //
    // The transform's error is returned before any element is pushed.
    pub fn try_new<F, E>(transform: F) -> Result<Self>
    where
        F: FnOnce(Stream<'a, T, T>) -> std::result::Result<Stream<'a, T, R>, E>,
        E: Into<BoxError>,
    {
        transform(Stream::source())
            .map(Self::connect)
            .map_err(LockstepError::callback)
    }

    fn connect(derived: Stream<'a, T, R>) -> Self {
        let capture = Rc::new(RefCell::new(Capture {
            last: None,
            error: None,
        }));
        let input = derived.subscribe(CaptureSink(Rc::clone(&capture)));
        Self {
            input,
            capture,
            completed: false,
            failed: None,
        }
    }

    // Surfaces an error the derived stream signalled.
    //
    // The first error is kept, so every later call fails the same way.
    fn check_failed(&mut self) -> Result<()> {
        if self.failed.is_none() {
            self.failed = self.capture.borrow_mut().error.take();
        }
        match &self.failed {
            Some(error) => Err(error.replicate()),
            None => Ok(()),
        }
    }
}

impl<'a, T, R> Consumer<T> for GetConsumer<'a, T, R>
where
    T: Clone + 'a,
    R: Clone + 'a,
{
    type Output = R;

    fn accept(&mut self, element: &T) -> Result<()> {
        self.check_failed()?;
        if self.completed {
            return Ok(());
        }
        self.input.on_next(element.clone());
        self.check_failed()
    }

    fn finish(&mut self) -> Result<R> {
        if !self.completed {
            self.completed = true;
            self.input.on_complete();
        }
        self.check_failed()?;
        self.capture
            .borrow()
            .last
            .clone()
            .ok_or(LockstepError::NoValue)
    }
}
