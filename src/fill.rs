//! Population of the two input arrays.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    ops::Range,
    time::{SystemTime, UNIX_EPOCH},
};

/// Values drawn by [`FillMode::Random`].
pub const RANDOM_RANGE: Range<i64> = 0..100;

/// How the input arrays are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// `A[i] = i + 1`, `B[i] = i + 1 + n`.
    Sequential,
    /// Every element drawn uniformly from [`RANDOM_RANGE`].
    Random,
}

impl FillMode {
    /// Interprets the menu answer. Only `1` selects [`FillMode::Sequential`]; anything else,
    /// including text that is not a number, selects [`FillMode::Random`].
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().parse::<i64>() {
            Ok(1) => FillMode::Sequential,
            _ => FillMode::Random,
        }
    }
}

/// Derives a seed from the wall clock.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

pub fn fill_sequential(a: &mut [i64], b: &mut [i64]) {
    let n = a.len() as i64;
    for (i, (x, y)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
        let i = i as i64;
        *x = i + 1;
        *y = i + 1 + n;
    }
}

/// Fills `a` and `b` with values from [`RANDOM_RANGE`], drawing pairwise as the serial loop goes.
pub fn fill_random(a: &mut [i64], b: &mut [i64], rng: &mut impl Rng) {
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        *x = rng.gen_range(RANDOM_RANGE);
        *y = rng.gen_range(RANDOM_RANGE);
    }
}

/// Populates `a` and `b` according to `mode`, on the calling thread.
///
/// Returns the seed that was used for [`FillMode::Random`], so a run can be reproduced, or
/// [`None`] for [`FillMode::Sequential`].
pub fn populate(a: &mut [i64], b: &mut [i64], mode: FillMode, seed: Option<u64>) -> Option<u64> {
    match mode {
        FillMode::Sequential => {
            fill_sequential(a, b);
            None
        }
        FillMode::Random => {
            let seed = seed.unwrap_or_else(time_seed);
            log::debug!("random fill of {} elements with seed={}", a.len(), seed);
            fill_random(a, b, &mut StdRng::seed_from_u64(seed));
            Some(seed)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{populate, FillMode, RANDOM_RANGE};
    use crate::test_support::assert_eq_and_println;

    fn filled(n: usize, mode: FillMode, seed: Option<u64>) -> (Vec<i64>, Vec<i64>) {
        let mut a = vec![0; n];
        let mut b = vec![0; n];
        populate(&mut a, &mut b, mode, seed);
        (a, b)
    }

    #[test]
    fn sequential_values() {
        let (a, b) = filled(10, FillMode::Sequential, None);
        assert_eq_and_println(a, (1..=10).collect(), "A");
        assert_eq_and_println(b, (11..=20).collect(), "B");
    }

    #[test]
    fn sequential_is_deterministic() {
        assert_eq!(
            filled(37, FillMode::Sequential, None),
            filled(37, FillMode::Sequential, None)
        );
    }

    #[test]
    fn random_values_in_range() {
        let (a, b) = filled(5_000, FillMode::Random, None);
        assert!(a.iter().chain(b.iter()).all(|v| RANDOM_RANGE.contains(v)));
    }

    #[test]
    fn random_with_fixed_seed_is_reproducible() {
        let first = filled(200, FillMode::Random, Some(42));
        let second = filled(200, FillMode::Random, Some(42));
        assert_eq_and_println(&first, &second, "same seed");
        assert_ne!(first, filled(200, FillMode::Random, Some(43)));
    }

    #[test]
    fn populate_reports_seed() {
        let mut a = vec![0; 3];
        let mut b = vec![0; 3];
        let seed = populate(&mut a, &mut b, FillMode::Random, Some(7));
        assert_eq!(seed, Some(7));
        let seed = populate(&mut a, &mut b, FillMode::Sequential, Some(7));
        assert_eq!(seed, None);
    }

    #[test]
    fn menu_choice() {
        assert_eq!(FillMode::from_choice("1\n"), FillMode::Sequential);
        assert_eq!(FillMode::from_choice(" 1 "), FillMode::Sequential);
        assert_eq!(FillMode::from_choice("2"), FillMode::Random);
        assert_eq!(FillMode::from_choice("7"), FillMode::Random);
        assert_eq!(FillMode::from_choice("abc"), FillMode::Random);
        assert_eq!(FillMode::from_choice(""), FillMode::Random);
    }
}
