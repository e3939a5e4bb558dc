//! Static partitioning of the index range across workers.
//!
//! Both functions are lazy, so the number of workers only costs memory as ranges are consumed.

use std::{mem, ops::Range};

/// Lower bound of worker `k`'s range, `k * n / workers`, computed without overflow.
fn bound(k: usize, n: usize, workers: usize) -> usize {
    (k as u128 * n as u128 / workers as u128) as usize
}

/// Range owned by worker `k`.
fn worker_range(k: usize, n: usize, workers: usize) -> Range<usize> {
    bound(k, n, workers)..bound(k + 1, n, workers)
}

/// Splits `0..n` into `workers` contiguous ranges, worker `k` receiving
/// `[k*n/workers, (k+1)*n/workers)`.
///
/// Range lengths differ by at most one. When `workers > n` some ranges are empty.
/// Yields no ranges when `workers` is zero.
pub fn static_ranges(n: usize, workers: usize) -> impl Iterator<Item = Range<usize>> + Clone {
    (0..workers).map(move |k| worker_range(k, n, workers))
}

/// Splits `values` into disjoint mutable chunks matching `ranges`.
///
/// `ranges` must be contiguous, ascending and start at 0, as produced by [`static_ranges`].
/// Panics if a range extends past `values`.
pub fn split_by_ranges<'a, T>(
    values: &'a mut [T],
    ranges: impl IntoIterator<Item = Range<usize>>,
) -> impl Iterator<Item = &'a mut [T]> {
    let mut rest = values;
    ranges.into_iter().map(move |range| {
        let (head, tail) = mem::take(&mut rest).split_at_mut(range.len());
        rest = tail;
        head
    })
}
