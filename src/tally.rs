//! Collection of per-worker element counts across threads.
//!
//! Each worker records how many elements it summed into a slot private to its own thread
//! (a [`ThreadLocal`](https://docs.rs/thread_local/latest/thread_local/) held by the
//! [`TallyCollector`]), so recording never contends with other workers. Once all workers have
//! terminated and joined the collecting thread, [`TallyCollector::drain`] merges the slots into
//! a single [`WorkerLoad`].
//!
//! ## Usage pattern
//!
//! ```rust
//! use std::thread;
//! use parallel_array_sum::tally::TallyCollector;
//!
//! let mut collector = TallyCollector::new();
//!
//! thread::scope(|s| {
//!     for worker in 0..4 {
//!         let collector = &collector;
//!         s.spawn(move || collector.record(worker, 25));
//!     }
//! });
//!
//! let load = collector.drain().unwrap();
//! assert_eq!(load.total(), 100);
//! ```

use std::{cell::RefCell, collections::BTreeMap, fmt::Debug, mem::replace, sync::Arc};
use thiserror::Error;
use thread_local::ThreadLocal;

/// Number of elements summed by each worker, keyed by worker id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerLoad {
    counts: BTreeMap<usize, usize>,
}

impl WorkerLoad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` elements to `worker`, creating its entry if needed. A zero count still
    /// registers the worker, so idle workers show up in the load.
    pub fn add(&mut self, worker: usize, count: usize) {
        *self.counts.entry(worker).or_default() += count;
    }

    pub fn get(&self, worker: usize) -> Option<usize> {
        self.counts.get(&worker).copied()
    }

    /// Number of workers that reported.
    pub fn workers(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(worker, count)` in worker order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(w, c)| (*w, *c))
    }

    fn merge(mut self, other: WorkerLoad) -> WorkerLoad {
        for (worker, count) in other.counts {
            self.add(worker, count);
        }
        self
    }
}

/// [`TallyCollector::drain`] was called while another handle to the collector was still alive,
/// i.e. some worker may not have joined yet.
#[derive(Error, Debug, PartialEq)]
#[error("worker load drained while workers were still active")]
pub struct ActiveWorkersError;

/// Collects [`WorkerLoad`] entries recorded from any number of threads.
///
/// Workers should share the collector by reference (for example inside [`std::thread::scope`]);
/// clones share the same state and keep [`drain`](Self::drain) from succeeding until dropped.
pub struct TallyCollector {
    state: Arc<ThreadLocal<RefCell<WorkerLoad>>>,
}

impl Clone for TallyCollector {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl Debug for TallyCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TallyCollector({:?})", self.state)
    }
}

impl TallyCollector {
    pub fn new() -> Self {
        Self {
            state: Arc::new(ThreadLocal::new()),
        }
    }

    /// Records that `worker` summed `count` elements, in the calling thread's slot.
    pub fn record(&self, worker: usize, count: usize) {
        let cell = self.state.get_or(|| RefCell::new(WorkerLoad::new()));
        cell.borrow_mut().add(worker, count);
    }

    /// Returns the merged load of all threads and resets `self` to an empty state.
    ///
    /// Returns an error, leaving the state unchanged, if another clone of `self` still exists.
    pub fn drain(&mut self) -> Result<WorkerLoad, ActiveWorkersError> {
        let state = replace(&mut self.state, Arc::new(ThreadLocal::new()));
        let unwr_state = match Arc::try_unwrap(state) {
            Ok(unwr_state) => unwr_state,
            Err(state) => {
                _ = replace(&mut self.state, state); // put it back
                return Err(ActiveWorkersError);
            }
        };
        let load = unwr_state
            .into_iter()
            .map(RefCell::into_inner)
            .fold(WorkerLoad::new(), WorkerLoad::merge);
        log::trace!("drained worker load {:?}", load);
        Ok(load)
    }
}

impl Default for TallyCollector {
    fn default() -> Self {
        Self::new()
    }
}
