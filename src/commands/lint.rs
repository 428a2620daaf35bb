use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::Cli;
use crate::context::RunContext;
use crate::engine::SwiftFormatEngine;
use crate::error::{GuardError, Result};
use crate::lint::{LintReport, lint_project};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, LintProgress, OutputFormat, OutputFormatter,
    TextFormatter,
};
use crate::project::ProjectResolver;
use crate::{EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

#[must_use]
pub fn run_lint(cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(ColorMode::from(cli.color));
    match run_lint_impl(cli) {
        Ok(report) => match report.ensure_clean() {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                errors.print_guard_error(&e);
                EXIT_FINDINGS
            }
        },
        Err(e) => {
            errors.print_guard_error(&e);
            EXIT_ERROR
        }
    }
}

/// Resolves the project, lints every source and prints the report.
///
/// # Errors
/// Returns an error if the project cannot be resolved or the engine fails.
/// Findings are not an error here; callers decide via [`LintReport::ensure_clean`].
pub fn run_lint_impl(cli: &Cli) -> Result<LintReport> {
    let ctx = RunContext::new(cli.verbose, cli.quiet);
    let project_path = canonicalize_project(&cli.project_path)?;

    let resolver = ProjectResolver::new(cli.layout());
    let project = resolver.resolve(&project_path, cli.ignore_file.as_deref(), &ctx)?;
    info!(
        sources = project.sources.len(),
        configuration = %project.configuration.display(),
        "project resolved"
    );

    let engine = SwiftFormatEngine::new(&cli.swift_format);
    let progress = LintProgress::new(project.sources.len() as u64, ctx.show_progress());
    let report = lint_project(&engine, &project, &progress)?;

    let rendered = render_report(&report, cli.format, ColorMode::from(cli.color))?;
    write_output(&mut std::io::stdout().lock(), &rendered)?;
    Ok(report)
}

/// Render the report in the requested output format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &LintReport, format: OutputFormat, color: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(report),
        OutputFormat::Json => {
            let mut output = JsonFormatter.format(report)?;
            output.push('\n');
            Ok(output)
        }
    }
}

/// Write the rendered report and flush.
///
/// # Errors
/// Returns `Io` if the writer fails.
pub fn write_output<W: Write>(w: &mut W, rendered: &str) -> Result<()> {
    w.write_all(rendered.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Canonicalize the project root, requiring an existing directory.
///
/// # Errors
/// Returns `ProjectDiscovery` if the path does not exist or is not a directory.
pub fn canonicalize_project(path: &Path) -> Result<PathBuf> {
    let canonical = dunce::canonicalize(path)
        .map_err(|e| GuardError::ProjectDiscovery(format!("{}: {e}", path.display())))?;
    if !canonical.is_dir() {
        return Err(GuardError::ProjectDiscovery(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(canonical)
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
