//! Table rendering for solver traces.
//!
//! This is the report-sink side of the crate: it consumes a finished
//! [`SolveTrace`] and writes the classic four-column run table
//! (iteration index, iterate, absolute successive difference, estimated
//! rate). The destination is any [`std::io::Write`], so a file, a stream,
//! or an in-memory buffer all work; the solvers know nothing about it.

use std::io::{self, Write};

use crate::report::SolveTrace;

const NAME_WIDTH: usize = 24;
const NUM_WIDTH: usize = 25;

/// Writes `trace` to `w` as a left-aligned table in scientific notation,
/// preceded by the caller-supplied `title` line and terminated by an `END`
/// line.
///
/// The difference column is blank on the first row (no predecessor) and
/// undefined rate entries render as NaN, keeping every row aligned with its
/// iterate index.
pub fn write_table<W: Write>(w: &mut W, title: &str, trace: &SolveTrace) -> io::Result<()> {
    writeln!(w, "{title}")?;
    writeln!(
        w,
        "{:<width$}{:<width$}{:<width$}{:<width$}",
        "i",
        "x_i",
        "|x_i - x_{i - 1}|",
        "rate",
        width = NAME_WIDTH,
    )?;

    let diffs = trace.successive_diffs();
    for (i, &x) in trace.iterates.iter().enumerate() {
        write!(w, "{:<width$}", i, width = NUM_WIDTH)?;
        write!(w, "{:<width$.15e}", x, width = NUM_WIDTH)?;
        if i == 0 {
            write!(w, "{:<width$}", "", width = NUM_WIDTH)?;
        } else {
            write!(w, "{:<width$.15e}", diffs[i], width = NUM_WIDTH)?;
        }
        writeln!(w, "{:<width$.15e}", trace.rates[i], width = NUM_WIDTH)?;
    }

    writeln!(w, "END")
}
