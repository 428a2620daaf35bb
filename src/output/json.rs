use serde::Serialize;

use super::OutputFormatter;
use crate::engine::Finding;
use crate::error::Result;
use crate::lint::LintReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    findings: usize,
    status: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: report.files_checked,
                findings: report.finding_count(),
                status: if report.is_clean() { "clean" } else { "warnings" },
            },
            findings: &report.findings,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
