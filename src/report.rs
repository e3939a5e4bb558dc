//! Banner, section rules and the closing statistics.

use crate::tally::WorkerLoad;
use std::{
    io::{self, Write},
    time::Duration,
};

const RULE_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 66;

pub fn print_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title:^width$}", width = RULE_WIDTH)?;
    writeln!(out, "{rule}")
}

pub fn print_rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Prints `title` centered in a dashed line, preceded by a blank line.
pub fn print_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n{:-^width$}",
        format!(" {title} "),
        width = SECTION_WIDTH
    )
}

/// Milliseconds with sub-millisecond precision.
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1e6
}

/// Nominal share of each worker, `len / threads` rounded down. Zero when there are more
/// workers than elements, or no workers at all.
pub fn elements_per_worker(len: usize, threads: usize) -> usize {
    len.checked_div(threads).unwrap_or(0)
}

/// Figures printed in the statistics section.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    pub len: usize,
    pub threads: usize,
    pub elapsed: Duration,
    pub load: &'a WorkerLoad,
}

pub fn print_summary(out: &mut impl Write, summary: &Summary<'_>) -> io::Result<()> {
    let Summary {
        len,
        threads,
        elapsed,
        load,
    } = *summary;

    writeln!(out, "Total elements processed: {len}")?;
    writeln!(out, "Number of threads used: {threads}")?;
    write!(
        out,
        "Elements per worker (approx): {}",
        elements_per_worker(len, threads)
    )?;
    if threads > len {
        write!(out, " (more workers than elements; some were idle)")?;
    }
    writeln!(out)?;

    if !load.is_empty() {
        writeln!(out, "Elements summed by each worker:")?;
        for (worker, count) in load.iter() {
            writeln!(out, "  Worker {worker}: {count}")?;
        }
    }

    writeln!(out, "Execution time: {} ms", millis(elapsed))
}
