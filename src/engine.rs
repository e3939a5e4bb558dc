//! Parallel elementwise summation over a fixed pool of statically partitioned workers.
//!
//! [`parallel_sum`] starts exactly the requested number of scoped worker threads. Worker `k`
//! owns the `k`-th range of `partition::static_ranges(n, workers)` and the matching chunk of the
//! result slice, so writes to the result never overlap and need no lock. The only shared mutable
//! resource is the [`Console`], which workers use for:
//!
//! - a one-time announcement from worker 0, which every worker waits for at a start barrier;
//! - one trace line per index below [`TRACE_LIMIT`], in whatever order the workers get there.
//!
//! No worker starts before the whole pool has been spawned. If a spawn fails, the workers
//! already running are released without doing any work and [`SumError::Spawn`] is returned.
//! Otherwise all workers meet again at an end barrier before the scope joins them, so the result
//! is fully written when [`parallel_sum`] returns.

use crate::{
    console::Console,
    partition::{split_by_ranges, static_ranges},
    tally::TallyCollector,
};
use std::{
    io::{self, Write},
    ops::Range,
    panic,
    sync::{Barrier, Condvar, Mutex, MutexGuard},
    thread,
    time::{Duration, Instant},
};
use thiserror::Error;

/// Indices below this get a trace line.
pub const TRACE_LIMIT: usize = 20;

/// Errors returned by [`parallel_sum`].
#[derive(Error, Debug)]
pub enum SumError {
    #[error("input and result lengths differ: a={a}, b={b}, r={r}")]
    LengthMismatch { a: usize, b: usize, r: usize },

    #[error("at least one worker is required")]
    NoWorkers,

    /// The operating system refused to start worker `worker`. No element was summed.
    #[error("failed to start worker {worker} of {workers}: {source}")]
    Spawn {
        worker: usize,
        workers: usize,
        source: io::Error,
    },

    /// Writing the announcement or a trace line failed. The sum itself was still completed.
    #[error("failed to write worker output: {0}")]
    Io(#[from] io::Error),
}

/// Holds workers back until the spawning thread decides whether they may proceed.
///
/// Once set, the decision never changes.
struct StartGate {
    proceed: Mutex<Option<bool>>,
    decided: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self {
            proceed: Mutex::new(None),
            decided: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<bool>> {
        self.proceed.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn open(&self, proceed: bool) {
        let mut lock = self.lock();
        if lock.is_none() {
            *lock = Some(proceed);
            self.decided.notify_all();
        }
    }

    /// Blocks until [`open`](Self::open) is called and returns its decision.
    fn wait(&self) -> bool {
        let mut lock = self.lock();
        while lock.is_none() {
            lock = self.decided.wait(lock).unwrap_or_else(|e| e.into_inner());
        }
        *lock == Some(true)
    }

    /// Returns a guard that releases the workers with "do not proceed" when dropped, unless
    /// the gate was opened before.
    fn abort_on_drop(&self) -> AbortOnDrop<'_> {
        AbortOnDrop(self)
    }
}

struct AbortOnDrop<'a>(&'a StartGate);

impl Drop for AbortOnDrop<'_> {
    fn drop(&mut self) {
        self.0.open(false);
    }
}

fn announce<W: Write>(console: &Console<W>, workers: usize) -> io::Result<()> {
    console.with(|out| {
        writeln!(out, "Active workers: {workers}")?;
        writeln!(out, "\nProcessing parallel sum...")?;
        out.flush()
    })
}

/// Sums `range` of `a` and `b` into `out`, which holds exactly that range of the result.
///
/// Keeps computing after a failed trace write so the worker still reaches the end barrier;
/// the first write error is returned.
fn sum_chunk<W: Write>(
    id: usize,
    a: &[i64],
    b: &[i64],
    out: &mut [i64],
    range: Range<usize>,
    console: &Console<W>,
) -> io::Result<()> {
    let mut traced = Ok(());
    for (slot, i) in out.iter_mut().zip(range) {
        *slot = a[i] + b[i];
        if i < TRACE_LIMIT && traced.is_ok() {
            traced = console.line(format_args!(
                "  Worker {id}: R[{i}] = {} + {} = {}",
                a[i], b[i], *slot
            ));
        }
    }
    traced
}

/// Computes `r[i] = a[i] + b[i]` for every index using exactly `workers` threads, records each
/// worker's element count in `tally`, and returns the wall-clock time spent in the parallel
/// region.
pub fn parallel_sum<W: Write + Send>(
    a: &[i64],
    b: &[i64],
    r: &mut [i64],
    workers: usize,
    console: &Console<W>,
    tally: &TallyCollector,
) -> Result<Duration, SumError> {
    sum_with_spawn_limit(a, b, r, workers, console, tally, usize::MAX)
}

/// [`parallel_sum`], except that spawning worker `spawn_limit` or any later one fails as if
/// the operating system had refused it.
fn sum_with_spawn_limit<W: Write + Send>(
    a: &[i64],
    b: &[i64],
    r: &mut [i64],
    workers: usize,
    console: &Console<W>,
    tally: &TallyCollector,
    spawn_limit: usize,
) -> Result<Duration, SumError> {
    if a.len() != b.len() || a.len() != r.len() {
        return Err(SumError::LengthMismatch {
            a: a.len(),
            b: b.len(),
            r: r.len(),
        });
    }
    if workers == 0 {
        return Err(SumError::NoWorkers);
    }

    log::debug!(
        "static partition of {} elements over {workers} workers",
        r.len()
    );
    let ranges = static_ranges(r.len(), workers);
    let chunks = split_by_ranges(r, ranges.clone());
    let gate = StartGate::new();
    let start_barrier = Barrier::new(workers);
    let end_barrier = Barrier::new(workers);

    let started = Instant::now();

    let (results, spawn_error) = thread::scope(|s| {
        let gate = &gate;
        let start_barrier = &start_barrier;
        let end_barrier = &end_barrier;
        let mut hs = Vec::new();
        let mut spawn_error = None;

        {
            let _abort = gate.abort_on_drop();
            for (id, (chunk, range)) in chunks.zip(ranges).enumerate() {
                let worker = move || -> io::Result<()> {
                    if !gate.wait() {
                        log::trace!("worker {id} released without work");
                        return Ok(());
                    }
                    log::trace!("worker {id} started on {range:?}");
                    let announced = if id == 0 {
                        announce(console, workers)
                    } else {
                        Ok(())
                    };
                    start_barrier.wait();

                    let count = range.len();
                    let summed = sum_chunk(id, a, b, chunk, range, console);
                    tally.record(id, count);

                    end_barrier.wait();
                    log::trace!("worker {id} finished {count} elements");
                    announced.and(summed)
                };

                let spawned = if id < spawn_limit {
                    thread::Builder::new()
                        .name(format!("worker-{id}"))
                        .spawn_scoped(s, worker)
                } else {
                    Err(io::ErrorKind::WouldBlock.into())
                };
                match spawned {
                    Ok(h) => hs.push(h),
                    Err(e) => {
                        log::debug!("spawning worker {id} failed: {e}");
                        spawn_error = Some((id, e));
                        break;
                    }
                }
            }
            gate.open(spawn_error.is_none());
        }

        let results = hs
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>();
        (results, spawn_error)
    });

    let elapsed = started.elapsed();
    if let Some((worker, source)) = spawn_error {
        return Err(SumError::Spawn {
            worker,
            workers,
            source,
        });
    }
    results.into_iter().collect::<io::Result<()>>()?;
    Ok(elapsed)
}
