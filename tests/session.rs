//! Scripted end-to-end sessions.

use parallel_array_sum::{
    fill::RANDOM_RANGE,
    input::{InputError, NOT_A_NUMBER, SIZE_ERROR, THREADS_ERROR},
    run::{run, RunError, RunOutcome},
    test_support::assert_eq_and_println,
};
use std::io::Cursor;

fn session(script: &str, seed: Option<u64>) -> (Result<RunOutcome, RunError>, String) {
    _ = env_logger::builder().is_test(true).try_init();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let res = run(&mut input, &mut out, seed);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn ten_elements_two_threads_sequential() {
    let (res, out) = session("10\n2\n1\n", None);
    let outcome = res.unwrap();

    assert!(outcome.verification.all_correct);
    assert_eq!(outcome.verification.shown, 10);
    assert_eq_and_println(
        outcome.load.iter().collect::<Vec<_>>(),
        vec![(0, 5), (1, 5)],
        "load",
    );

    let shown = |label: &str, row: &str| format!("{label} (showing all 10 elements):\n{row}\n");
    let a_row = "1  2  3  4  5  6  7  8  9  10  ";
    let b_row = "11  12  13  14  15  16  17  18  19  20  ";
    let r_row = "12  14  16  18  20  22  24  26  28  30  ";
    assert!(out.contains(&shown("Array A", a_row)));
    assert!(out.contains(&shown("Array B", b_row)));
    assert!(out.contains(&shown("Result array (A + B)", r_row)));
    assert_eq!(out.matches("  -  Correct").count(), 10);
    assert!(out.contains("RESULT: All results are CORRECT!"));
    assert!(out.contains("Active workers: 2"));
    assert!(out.contains("Elements per worker (approx): 5\n"));
    assert!(out.trim_end().ends_with(&"=".repeat(60)));
    assert!(out.contains("Program finished successfully."));
}

#[test]
fn one_element_four_threads() {
    let (res, out) = session("1\n4\n1\n", None);
    let outcome = res.unwrap();

    assert!(outcome.verification.all_correct);
    assert_eq!(outcome.load.total(), 1);
    assert_eq!(outcome.load.workers(), 4);
    assert!(out.contains("Array A (showing all 1 elements):\n1  \n"));
    // The last worker owns the only index: [3*1/4, 4*1/4) = [0, 1).
    assert!(out.contains("  Worker 3: R[0] = 1 + 2 = 3\n"));
    assert!(out.contains(
        "Elements per worker (approx): 0 (more workers than elements; some were idle)"
    ));
}

#[test]
fn large_random_run_previews_prefix() {
    let (res, out) = session("500\n3\n2\n", Some(2024));
    let outcome = res.unwrap();

    assert!(outcome.verification.all_correct);
    assert_eq!(outcome.seed, Some(2024));
    assert!(out.contains("Array A (showing first 20 of 500 elements):"));
    assert!(out.contains("Checking remaining elements..."));

    let preview = out
        .split("Array A (showing first 20 of 500 elements):\n")
        .nth(1)
        .unwrap()
        .lines()
        .take(2)
        .flat_map(|l| l.split_whitespace())
        .map(|v| v.parse::<i64>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(preview.len(), 20);
    assert!(preview.iter().all(|v| RANDOM_RANGE.contains(v)));
}

#[test]
fn same_seed_same_transcript_values() {
    let (_, first) = session("30\n2\n2\n", Some(7));
    let (_, second) = session("30\n2\n2\n", Some(7));
    let arrays = |out: &str| {
        out.split("Array A")
            .nth(1)
            .and_then(|s| s.split("----").next())
            .unwrap()
            .to_owned()
    };
    assert_eq!(arrays(&first), arrays(&second));
}

#[test]
fn reprompts_until_valid() {
    let (res, out) = session("0\nabc\n-2\n6\n0\nx\n3\n1\n", None);
    let outcome = res.unwrap();

    assert!(outcome.verification.all_correct);
    assert_eq!(outcome.load.workers(), 3);
    assert_eq!(out.matches(SIZE_ERROR).count(), 2);
    assert_eq!(out.matches(THREADS_ERROR).count(), 1);
    assert_eq!(out.matches(NOT_A_NUMBER).count(), 2);
}

#[test]
fn input_ends_early() {
    let (res, out) = session("5\n", None);
    assert!(matches!(res, Err(RunError::Input(InputError::EndOfInput))));
    assert!(!out.contains("Program finished successfully."));
}
