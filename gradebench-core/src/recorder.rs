//! Shared collection point for values produced inside runners.
//!
//! Runners return nothing, so anything the harness wants back from a run
//! (timings, computed averages) is pushed into a `Recorder` the runner was
//! built with.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a shared, append-only list of records
#[derive(Debug)]
pub struct Recorder<T> {
    records: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Recorder<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn push(&self, record: T) {
        self.lock().push(record);
    }

    /// Number of records collected so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }

    // A runner that panicked mid-push leaves the list intact.
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_records() {
        let recorder = Recorder::new();
        let handle = recorder.clone();

        handle.push(1u64);
        handle.push(2);

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.take(), vec![1, 2]);
    }

    #[test]
    fn test_take_drains() {
        let recorder = Recorder::new();
        recorder.push("a");

        assert_eq!(recorder.take(), vec!["a"]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_push_from_threads() {
        let recorder = Recorder::new();
        std::thread::scope(|s| {
            for i in 0..4u64 {
                let recorder = recorder.clone();
                s.spawn(move || recorder.push(i));
            }
        });

        let mut values = recorder.take();
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }
}
