//! Text reports for simulation results.
//!
//! Renders the summary block (faults, hits, hit ratio per algorithm) and the
//! step-by-step tables. Everything is written to a caller-supplied writer so the
//! layout can be checked in tests.

use std::io::{self, Write};

use pagesim_core::sim::input::format_reference_string;
use pagesim_core::{ComparisonResult, RunResult, StepRecord};

const RULE_HEAVY: &str = "==========================================================";
const RULE_LIGHT: &str = "----------------------------------------------------------";

/// Resident frames as `[1, 2, 3]`.
fn frames_cell(step: &StepRecord<u64>) -> String {
    format!("[{}]", format_reference_string(&step.frames))
}

/// Short outcome of a step, e.g. `fault (-4)` or `hit`.
fn outcome_cell(step: &StepRecord<u64>) -> String {
    match (step.is_hit, step.evicted) {
        (true, _) => "hit".to_string(),
        (false, Some(victim)) => format!("fault (-{victim})"),
        (false, None) => "fault".to_string(),
    }
}

/// One-line explanation of a step.
pub fn describe_step(step: &StepRecord<u64>) -> String {
    if step.is_hit {
        format!("Page {} was a hit ({}).", step.page, step.algorithm)
    } else {
        format!("Page {} caused a fault ({}).", step.page, step.algorithm)
    }
}

fn write_header(
    out: &mut impl Write,
    title: &str,
    pages: &[u64],
    frames: usize,
) -> io::Result<()> {
    writeln!(out, "{RULE_HEAVY}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE_HEAVY}")?;
    writeln!(out, "reference                {}", format_reference_string(pages))?;
    writeln!(out, "references               {}", pages.len())?;
    writeln!(out, "frames                   {frames}")?;
    writeln!(out, "{RULE_LIGHT}")
}

fn write_summary_row(out: &mut impl Write, run: &RunResult<u64>) -> io::Result<()> {
    writeln!(
        out,
        "  {:<10} {:>8} {:>8} {:>10}%",
        run.algorithm.name(),
        run.faults,
        run.hits,
        run.hit_ratio
    )
}

fn write_summary_head(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "  {:<10} {:>8} {:>8} {:>11}",
        "algorithm", "faults", "hits", "hit_ratio"
    )
}

/// Writes the comparison summary block.
pub fn write_comparison(out: &mut impl Write, result: &ComparisonResult<u64>) -> io::Result<()> {
    write_header(out, "PAGE REPLACEMENT COMPARISON", &result.reference, result.frames)?;
    write_summary_head(out)?;
    for run in result.runs() {
        write_summary_row(out, run)?;
    }
    writeln!(out, "{RULE_LIGHT}")?;
    writeln!(out, "best online              {}", result.best_online())?;
    writeln!(out, "{RULE_HEAVY}")
}

/// Writes the side-by-side step table for all three algorithms.
pub fn write_step_table(out: &mut impl Write, result: &ComparisonResult<u64>) -> io::Result<()> {
    let cells: Vec<[String; 3]> = result
        .step_rows()
        .map(|row| row.map(|step| format!("{} {}", frames_cell(step), outcome_cell(step))))
        .collect();
    let width = cells
        .iter()
        .flat_map(|row| row.iter().map(String::len))
        .chain(result.runs().map(|run| run.algorithm.name().len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "STEP-BY-STEP")?;
    writeln!(
        out,
        "  {:>4} {:>6} | {:<width$} | {:<width$} | {:<width$}",
        "step",
        "page",
        result.fifo.algorithm.name(),
        result.lru.algorithm.name(),
        result.optimal.algorithm.name(),
    )?;
    for ((step, page), [fifo, lru, optimal]) in (1..).zip(&result.reference).zip(&cells) {
        writeln!(
            out,
            "  {step:>4} {page:>6} | {fifo:<width$} | {lru:<width$} | {optimal:<width$}"
        )?;
    }
    writeln!(out, "{RULE_HEAVY}")
}

/// Writes the summary block for a single run.
pub fn write_run(out: &mut impl Write, pages: &[u64], run: &RunResult<u64>) -> io::Result<()> {
    write_header(out, "PAGE REPLACEMENT RUN", pages, run.frames)?;
    write_summary_head(out)?;
    write_summary_row(out, run)?;
    writeln!(out, "  evictions  {:>8}", run.evictions())?;
    writeln!(out, "{RULE_HEAVY}")
}

/// Writes one line per step of a single run.
pub fn write_run_steps(out: &mut impl Write, run: &RunResult<u64>) -> io::Result<()> {
    writeln!(out, "STEP-BY-STEP")?;
    for step in &run.steps {
        writeln!(
            out,
            "  Step {:>3}: {:<20} {}",
            step.step,
            frames_cell(step),
            describe_step(step)
        )?;
    }
    writeln!(out, "{RULE_HEAVY}")
}
