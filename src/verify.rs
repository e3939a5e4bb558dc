//! Sequential check of the summation result.

use std::io::{self, Write};

/// Leading elements whose check is printed one by one.
pub const VERIFY_SHOWN: usize = 10;

/// Outcome of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Number of elements checked with a printed line.
    pub shown: usize,
    pub all_correct: bool,
    /// First index found wrong, if any.
    pub first_error: Option<usize>,
}

/// Recomputes `a[i] + b[i]` and compares it with `r[i]`.
///
/// The first [`VERIFY_SHOWN`] elements are all printed, even past a mismatch. Only if they
/// were all correct are the remaining elements checked, silently, stopping at the first
/// mismatch.
pub fn verify(out: &mut impl Write, a: &[i64], b: &[i64], r: &[i64]) -> io::Result<Verification> {
    let n = r.len().min(a.len()).min(b.len());
    let shown = n.min(VERIFY_SHOWN);
    let mut all_correct = true;
    let mut first_error = None;

    writeln!(out, "\nVerifying the first {shown} elements:\n")?;
    for i in 0..shown {
        let expected = a[i] + b[i];
        write!(
            out,
            "Position {i:>4}: {:>3} + {:>3} = {:>4}",
            a[i], b[i], r[i]
        )?;
        if r[i] == expected {
            writeln!(out, "  -  Correct")?;
        } else {
            writeln!(out, "  -  Error (expected: {expected})")?;
            all_correct = false;
            if first_error.is_none() {
                first_error = Some(i);
            }
        }
    }

    if all_correct && n > shown {
        writeln!(out, "\nChecking remaining elements...")?;
        if let Some(i) = (shown..n).find(|&i| r[i] != a[i] + b[i]) {
            all_correct = false;
            first_error = Some(i);
            writeln!(out, "Error found at position {i}")?;
        }
    }

    if all_correct {
        writeln!(out, "RESULT: All results are CORRECT!")?;
    } else {
        writeln!(out, "RESULT: ERRORS were found in the results.")?;
    }

    Ok(Verification {
        shown,
        all_correct,
        first_error,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{verify, Verification};
    use crate::{fill::fill_sequential, test_support::assert_eq_and_println};

    fn summed(n: usize) -> (Vec<i64>, Vec<i64>, Vec<i64>) {
        let mut a = vec![0; n];
        let mut b = vec![0; n];
        fill_sequential(&mut a, &mut b);
        let r = a.iter().zip(&b).map(|(x, y)| x + y).collect();
        (a, b, r)
    }

    fn run(a: &[i64], b: &[i64], r: &[i64]) -> (Verification, String) {
        let mut out = Vec::new();
        let v = verify(&mut out, a, b, r).unwrap();
        (v, String::from_utf8(out).unwrap())
    }

    #[test]
    fn ten_sequential_all_correct() {
        let (a, b, r) = summed(10);
        assert_eq!(r, (6..=15).map(|k| 2 * k).collect::<Vec<_>>());
        let (v, out) = run(&a, &b, &r);
        assert_eq_and_println(
            v,
            Verification {
                shown: 10,
                all_correct: true,
                first_error: None,
            },
            "verification",
        );
        assert_eq!(out.matches("  -  Correct").count(), 10);
        assert!(!out.contains("Checking remaining"));
        assert!(out.contains("RESULT: All results are CORRECT!"));
        assert!(out.contains("Position    0:   1 +  11 =   12  -  Correct"));
    }

    #[test]
    fn large_all_correct_checks_rest() {
        let (a, b, r) = summed(1000);
        let (v, out) = run(&a, &b, &r);
        assert!(v.all_correct);
        assert!(out.contains("Checking remaining elements..."));
        assert!(out.contains("RESULT: All results are CORRECT!"));
    }

    #[test]
    fn corrupted_in_shown_batch() {
        let (a, b, mut r) = summed(30);
        r[3] += 1;
        r[25] += 1;
        let (v, out) = run(&a, &b, &r);
        assert!(!v.all_correct);
        assert_eq!(v.first_error, Some(3));
        assert_eq!(out.matches("  -  Correct").count(), 9);
        let wrong = "Position    3:   4 +  34 =   39  -  Error (expected: 38)";
        assert!(out.contains(wrong));
        // Silent phase is skipped once the first batch failed.
        assert!(!out.contains("Checking remaining"));
        assert!(out.contains("RESULT: ERRORS were found in the results."));
    }

    #[test]
    fn corrupted_after_shown_batch_stops_at_first() {
        let (a, b, mut r) = summed(100);
        r[42] = -1;
        r[77] = -1;
        let (v, out) = run(&a, &b, &r);
        assert_eq!(v.first_error, Some(42));
        assert!(out.contains("Error found at position 42"));
        assert!(!out.contains("position 77"));
        assert!(out.contains("RESULT: ERRORS were found in the results."));
    }

    #[test]
    fn single_element() {
        let (a, b, r) = summed(1);
        let (v, out) = run(&a, &b, &r);
        assert_eq!(v.shown, 1);
        assert!(v.all_correct);
        assert!(out.contains("Verifying the first 1 elements:"));
    }
}
