//! Console preview of an array prefix.

use std::io::{self, Write};

/// Elements shown when the caller does not pass a count.
pub const DEFAULT_SHOW: usize = 20;
/// Elements printed per output line.
pub const PER_LINE: usize = 10;
/// Arrays up to this length are shown in full.
pub const SHOW_ALL_UP_TO: usize = 50;

/// Number of elements to preview for an array of length `n`.
pub fn display_count(n: usize) -> usize {
    if n <= SHOW_ALL_UP_TO {
        n
    } else {
        DEFAULT_SHOW
    }
}

/// Prints a header naming `label` followed by the first `show` (default [`DEFAULT_SHOW`]) of
/// `total` elements of `values`, [`PER_LINE`] to a line.
pub fn print_array(
    out: &mut impl Write,
    label: &str,
    values: &[i64],
    total: usize,
    show: Option<usize>,
) -> io::Result<()> {
    let show = show.unwrap_or(DEFAULT_SHOW);
    if show >= total {
        writeln!(out, "\n{label} (showing all {total} elements):")?;
    } else {
        writeln!(out, "\n{label} (showing first {show} of {total} elements):")?;
    }

    let limit = show.min(total).min(values.len());
    for (i, v) in values[..limit].iter().enumerate() {
        write!(out, "{v}  ")?;
        if (i + 1) % PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    if limit % PER_LINE != 0 {
        writeln!(out)?;
    }
    Ok(())
}
