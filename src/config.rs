//! Validated inputs of a single run.

use crate::fill::FillMode;

/// Everything a run needs to know before the arrays are allocated.
///
/// Built from the interactive prompts by [`crate::input::read_config`], or directly by tests and
/// benchmarks. `seed` is only consulted for [`FillMode::Random`]; when it is [`None`] a seed is
/// derived from the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of elements in each of the three arrays. Always positive.
    pub len: usize,
    /// Number of workers started for the parallel phase. Always positive.
    pub threads: usize,
    pub fill: FillMode,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(len: usize, threads: usize, fill: FillMode) -> Self {
        Self {
            len,
            threads,
            fill,
            seed: None,
        }
    }

    /// Returns a copy that fills randomly from `seed` instead of a time-derived one.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}
