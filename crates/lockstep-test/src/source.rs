//! Sources that record how their iteration sessions are used.
//!
//! # Example
//!
//! ```
//! use lockstep_core::Source;
//! use lockstep_test::CountingSource;
//!
//! let source = CountingSource::new(vec![1, 2, 3]);
//! let stats = source.stats();
//!
//! let session = source.open().unwrap();
//! assert_eq!(stats.opens(), 1);
//! assert_eq!(session.sum::<i32>(), 6);
//! assert_eq!(stats.releases(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lockstep_core::{LockstepError, Result, Source};

use crate::probe::Boom;

#[derive(Debug, Default)]
struct Counters {
    opens: AtomicUsize,
    releases: AtomicUsize,
    yielded: AtomicUsize,
}

/// Shared view of a [`CountingSource`]'s session history.
///
/// Cloning shares the same counters; the handle stays valid after the
/// source has been moved into an evaluation.
#[derive(Clone, Debug, Default)]
pub struct SessionStats {
    counters: Arc<Counters>,
}

impl SessionStats {
    /// Number of sessions acquired.
    pub fn opens(&self) -> usize {
        self.counters.opens.load(Ordering::SeqCst)
    }

    /// Number of sessions dropped.
    pub fn releases(&self) -> usize {
        self.counters.releases.load(Ordering::SeqCst)
    }

    /// Number of elements handed out across all sessions.
    pub fn yielded(&self) -> usize {
        self.counters.yielded.load(Ordering::SeqCst)
    }
}

/// A vector-backed source that counts session acquisitions, releases and
/// yielded elements.
pub struct CountingSource<T> {
    items: Vec<T>,
    stats: SessionStats,
}

impl<T> CountingSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            stats: SessionStats::default(),
        }
    }

    /// Returns a handle to this source's counters.
    pub fn stats(&self) -> SessionStats {
        self.stats.clone()
    }
}

impl<T> Source for CountingSource<T> {
    type Item = T;
    type Session = CountingSession<T>;

    fn open(self) -> Result<CountingSession<T>> {
        self.stats.counters.opens.fetch_add(1, Ordering::SeqCst);
        Ok(CountingSession {
            inner: self.items.into_iter(),
            stats: self.stats,
        })
    }
}

/// Session of a [`CountingSource`]; records its release on drop.
pub struct CountingSession<T> {
    inner: std::vec::IntoIter<T>,
    stats: SessionStats,
}

impl<T> Iterator for CountingSession<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.inner.next()?;
        self.stats.counters.yielded.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }
}

impl<T> Drop for CountingSession<T> {
    fn drop(&mut self) {
        self.stats.counters.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// A source whose session can never be acquired.
pub struct FailingSource<T> {
    stats: SessionStats,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> FailingSource<T> {
    pub fn new() -> Self {
        Self {
            stats: SessionStats::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns a handle to this source's counters.
    pub fn stats(&self) -> SessionStats {
        self.stats.clone()
    }
}

impl<T> Default for FailingSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Source for FailingSource<T> {
    type Item = T;
    type Session = std::iter::Empty<T>;

    fn open(self) -> Result<std::iter::Empty<T>> {
        self.stats.counters.opens.fetch_add(1, Ordering::SeqCst);
        Err(LockstepError::source(Boom::new("source unavailable")))
    }
}
