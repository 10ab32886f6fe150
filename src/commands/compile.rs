use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::db::compiler::{compile_file, CompileOutcome};
use crate::db::connection::DbSession;
use crate::error::Result;

/// Aggregate result of compiling a set of files.
#[derive(Debug)]
pub struct CompileReport {
    pub outcomes: Vec<CompileOutcome>,
    /// True when `stop_on_error` cut the run short.
    pub stopped_early: bool,
    pub elapsed: Duration,
}

impl CompileReport {
    pub fn all_succeeded(&self) -> bool {
        !self.stopped_early && self.outcomes.iter().all(CompileOutcome::succeeded)
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }
}

/// Compile files in the given order. With `stop_on_error`, the first failed
/// file ends the run and the remaining files are never touched.
pub fn execute_compile(
    session: &dyn DbSession,
    files: &[PathBuf],
    stop_on_error: bool,
) -> Result<CompileReport> {
    let started = Instant::now();
    let mut outcomes = Vec::with_capacity(files.len());
    let mut stopped_early = false;

    for (index, path) in files.iter().enumerate() {
        let outcome = compile_file(session, path)?;
        let failed = !outcome.succeeded();
        outcomes.push(outcome);

        if failed && stop_on_error {
            stopped_early = index + 1 < files.len();
            if stopped_early {
                tracing::warn!(
                    remaining = files.len() - index - 1,
                    "stopping after failure"
                );
            }
            break;
        }
    }

    Ok(CompileReport {
        outcomes,
        stopped_early,
        elapsed: started.elapsed(),
    })
}

#[cfg(feature = "cli")]
pub fn print_compile_summary(report: &CompileReport) {
    use crate::db::compiler::CompileStatus;
    use owo_colors::OwoColorize;

    println!();
    for outcome in &report.outcomes {
        let label = outcome
            .object_name
            .as_deref()
            .unwrap_or_else(|| outcome.path.to_str().unwrap_or("?"));

        match outcome.status {
            CompileStatus::Success => {
                println!("  {} {}", "✓".green(), label);
            }
            CompileStatus::SuccessWithWarnings => {
                println!(
                    "  {} {} ({} warnings)",
                    "⚠".yellow(),
                    label,
                    outcome.diagnostics.len()
                );
                for diagnostic in &outcome.diagnostics {
                    println!("      {}", diagnostic.to_string().yellow());
                }
            }
            CompileStatus::Failed => {
                println!("  {} {}", "✗".red(), label);
                if let Some(failure) = &outcome.failure {
                    println!("      {}", failure.red());
                }
                for diagnostic in &outcome.diagnostics {
                    println!("      {}", diagnostic.to_string().red());
                }
            }
        }
    }

    println!();
    let failed = report.failure_count();
    let compiled = report.outcomes.len() - failed;
    let elapsed = crate::logging::format_duration(report.elapsed);
    if failed == 0 {
        println!(
            "{}",
            format!("Compiled {} file(s) successfully in {}", compiled, elapsed)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Compiled {} file(s), {} failed ({})", compiled, failed, elapsed)
                .red()
                .bold()
        );
    }
    if report.stopped_early {
        println!("{}", "Run stopped after first failure (--stop-on-error)".yellow());
    }
}
