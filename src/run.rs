//! A complete interactive session, from prompts to statistics.

use crate::{
    config::RunConfig,
    console::Console,
    engine::{parallel_sum, SumError},
    fill::populate,
    input::{read_config, InputError},
    preview::{display_count, print_array},
    report::{millis, print_banner, print_rule, print_section, print_summary, Summary},
    tally::{ActiveWorkersError, TallyCollector, WorkerLoad},
    verify::{verify, Verification},
};
use std::{
    io::{self, BufRead, Write},
    time::Duration,
};
use thiserror::Error;

/// Errors that end a session early.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Sum(#[from] SumError),

    #[error(transparent)]
    Tally(#[from] ActiveWorkersError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// The three arrays of a run together with the configuration that sized them.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: RunConfig,
    pub a: Vec<i64>,
    pub b: Vec<i64>,
    pub r: Vec<i64>,
    /// Seed actually used for random fill.
    pub seed: Option<u64>,
}

impl RunContext {
    /// Allocates the arrays and populates `a` and `b` according to `config.fill`.
    pub fn new(config: RunConfig) -> Self {
        let mut a = vec![0; config.len];
        let mut b = vec![0; config.len];
        let seed = populate(&mut a, &mut b, config.fill, config.seed);
        Self {
            config,
            a,
            b,
            r: vec![0; config.len],
            seed,
        }
    }
}

/// What a finished session observed.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub verification: Verification,
    pub elapsed: Duration,
    pub load: WorkerLoad,
    pub seed: Option<u64>,
}

/// Runs everything after the prompts: previews, parallel sum, verification and statistics.
pub fn execute<W: Write + Send>(ctx: &mut RunContext, out: &mut W) -> Result<RunOutcome, RunError> {
    let RunConfig { len, threads, .. } = ctx.config;
    let show = display_count(len);

    print_section(out, "Original arrays")?;
    print_array(out, "Array A", &ctx.a, len, Some(show))?;
    print_array(out, "Array B", &ctx.b, len, Some(show))?;

    print_section(out, "Running the parallel sum")?;
    writeln!(out, "\nConfigured workers: {threads}")?;

    let mut tally = TallyCollector::new();
    let elapsed = {
        let console = Console::new(&mut *out);
        parallel_sum(&ctx.a, &ctx.b, &mut ctx.r, threads, &console, &tally)?
    };
    let load = tally.drain()?;
    log::debug!("parallel phase took {elapsed:?}, load={load:?}");

    writeln!(out, "\nSum completed successfully!")?;
    writeln!(out, "Execution time: {} ms", millis(elapsed))?;

    print_section(out, "Final array")?;
    print_array(out, "Result array (A + B)", &ctx.r, len, Some(show))?;

    print_section(out, "Result verification")?;
    let verification = verify(out, &ctx.a, &ctx.b, &ctx.r)?;

    print_section(out, "STATISTICS")?;
    let summary = Summary {
        len,
        threads,
        elapsed,
        load: &load,
    };
    print_summary(out, &summary)?;

    Ok(RunOutcome {
        verification,
        elapsed,
        load,
        seed: ctx.seed,
    })
}

/// Runs a whole session, reading answers from `input` and writing everything to `out`.
///
/// `seed` fixes the random fill; [`None`] seeds from the clock.
pub fn run<W: Write + Send>(
    input: &mut impl BufRead,
    out: &mut W,
    seed: Option<u64>,
) -> Result<RunOutcome, RunError> {
    print_banner(out, "PARALLEL SUM OF TWO ARRAYS")?;
    let config = read_config(input, out, seed)?;
    let mut ctx = RunContext::new(config);
    let outcome = execute(&mut ctx, out)?;
    drop(ctx);

    writeln!(out, "\nProgram finished successfully.")?;
    print_rule(out)?;
    out.flush()?;
    Ok(outcome)
}
