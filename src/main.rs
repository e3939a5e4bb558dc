//! Interactive parallel sum of two arrays on the terminal.

use parallel_array_sum::{
    engine::SumError,
    input::InputError,
    run::{run, RunError},
};
use std::io;

fn main() {
    _ = env_logger::try_init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run(&mut input, &mut out, None) {
        Ok(outcome) => log::debug!(
            "finished: all_correct={}, elapsed={:?}, seed={:?}",
            outcome.verification.all_correct,
            outcome.elapsed,
            outcome.seed
        ),
        Err(RunError::Input(InputError::EndOfInput)) => {
            println!("\nInput ended before the run was configured; nothing to do.");
        }
        Err(RunError::Sum(e @ SumError::Spawn { .. })) => {
            log::error!("run aborted: {e:?}");
            eprintln!("error: {e}");
            eprintln!("Try again with fewer threads.");
        }
        Err(e) => {
            log::error!("run aborted: {e:?}");
            eprintln!("error: {e}");
        }
    }
}
