//! Lint orchestration: one engine call per source file, findings aggregated
//! in file order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::engine::{Finding, LintEngine};
use crate::error::{GuardError, Result};
use crate::output::LintProgress;
use crate::project::ResolvedProject;

/// Aggregated outcome of linting a resolved project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub files_checked: usize,
    pub findings: Vec<Finding>,
}

impl LintReport {
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// # Errors
    /// Returns `LintingWarningsPresent` with the finding count if any finding exists.
    pub fn ensure_clean(&self) -> Result<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(GuardError::LintingWarningsPresent(self.finding_count()))
        }
    }
}

/// Lint every source of `project` against its configuration.
///
/// Files are linted in parallel; findings keep source order and each file's
/// emission order. The first failing file (in source order) aborts the run.
///
/// # Errors
/// Returns the configuration load error or the first per-file engine error.
pub fn lint_project<E: LintEngine>(
    engine: &E,
    project: &ResolvedProject,
    progress: &LintProgress,
) -> Result<LintReport> {
    lint_files(engine, &project.configuration, &project.sources, progress)
}

/// Lint `files` with the configuration at `configuration`.
///
/// # Errors
/// Returns the configuration load error or the first per-file engine error.
pub fn lint_files<E: LintEngine>(
    engine: &E,
    configuration: &Path,
    files: &[PathBuf],
    progress: &LintProgress,
) -> Result<LintReport> {
    let configuration = engine.load_configuration(configuration)?;

    let per_file: Vec<Result<Vec<Finding>>> = files
        .par_iter()
        .map(|file| {
            let result = engine.lint(file, &configuration);
            progress.inc();
            result
        })
        .collect();
    progress.finish();

    let mut findings = Vec::new();
    for result in per_file {
        findings.extend(result?);
    }
    for finding in &findings {
        debug!(%finding, "finding");
    }
    debug!(
        files = files.len(),
        findings = findings.len(),
        "lint pass complete"
    );

    Ok(LintReport {
        files_checked: files.len(),
        findings,
    })
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
