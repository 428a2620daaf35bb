use std::fmt::Write;

use super::{ColorMode, OutputFormatter, ansi};
use crate::engine::Finding;
use crate::error::Result;
use crate::lint::LintReport;

const SEPARATOR: &str = "-----------------------";

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Findings without a location are counted but not printed.
    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let Some(location) = &finding.location else {
            return;
        };
        let _ = writeln!(
            output,
            "Category: {}",
            self.paint(ansi::YELLOW, &finding.category)
        );
        let _ = writeln!(output, "File: {}", location.file.display());
        let _ = writeln!(output, "Line: {} Col: {}", location.line, location.column);
        let _ = writeln!(output, "Message: {}", finding.message);
        let _ = writeln!(output, "{SEPARATOR}");
    }

    fn format_summary(&self, report: &LintReport, output: &mut String) {
        if report.is_clean() {
            let _ = writeln!(output, "{}", self.paint(ansi::GREEN, "✅ All Good!"));
        } else {
            let line = format!("Warnings: {}", report.finding_count());
            let _ = writeln!(output, "{}", self.paint(ansi::RED, &line));
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{SEPARATOR}");
        for finding in &report.findings {
            self.format_finding(finding, &mut output);
        }
        self.format_summary(report, &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
