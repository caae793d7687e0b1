// Solves every machine of a puzzle file and prints per-machine diagnostics
// followed by the grand total.

use crate::machine::{self, Machine};
use crate::search;
use anyhow::{Context as _, ensure};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Only print the total.
    pub quiet: bool,
    /// Also print one optimal press sequence per machine. Has no effect
    /// when `quiet` is set.
    pub explain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Minimum presses, one entry per machine in input order.
    pub presses: Vec<usize>,
    pub total: usize,
}

impl Report {
    /// Solves `machines` in order, stopping at the first one that has no
    /// solution. Each machine comes with its line number in the puzzle file.
    pub fn solve<W: Write>(
        machines: &[(usize, Machine)],
        options: Options,
        out: &mut W,
    ) -> anyhow::Result<Self> {
        let mut report = Report {
            presses: Vec::with_capacity(machines.len()),
            total: 0,
        };
        for (line, m) in machines {
            let presses = m
                .min_presses()
                .with_context(|| format!("line {}: {}", line, m))?;
            if !options.quiet {
                let diagnostic = std::iter::once(m.initial().to_string())
                    .chain(m.buttons.iter().map(|b| b.to_string()))
                    .chain(std::iter::once(m.target().to_string()))
                    .join(" ");
                writeln!(out, "{}", diagnostic)?;
                writeln!(out, "{}", presses)?;
            }
            if options.explain && !options.quiet {
                let seq = m
                    .shortest_presses()
                    .with_context(|| format!("line {}: {}", line, m))?;
                ensure!(
                    seq.len() == presses
                        && search::check_presses(m.initial(), &m.buttons, &seq, &m.target()),
                    "line {}: press sequence {:?} does not solve {}",
                    line,
                    seq,
                    m
                );
                writeln!(
                    out,
                    "presses {}",
                    seq.iter().map(|&b| m.buttons[b].to_string()).join(" ")
                )?;
            }
            report.presses.push(presses);
            report.total += presses;
        }
        writeln!(out, "total {}", report.total)?;
        Ok(report)
    }
}

/// Loads the puzzle file at `path` and solves it.
pub fn solve_file<W: Write>(path: &Path, options: Options, out: &mut W) -> anyhow::Result<Report> {
    let machines = machine::load_machines(path)?;
    Report::solve(&machines, options, out)
}
