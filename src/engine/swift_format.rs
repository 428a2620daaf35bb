use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::{Finding, LintEngine, Location};
use crate::error::{GuardError, Result};

pub const DEFAULT_EXECUTABLE: &str = "swift-format";

/// Parsed `.swift-format` file. The settings are opaque to the guard and
/// only validated as JSON; the engine reads the file itself.
#[derive(Debug, Clone)]
pub struct SwiftFormatConfiguration {
    path: PathBuf,
    settings: JsonValue,
}

impl SwiftFormatConfiguration {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn settings(&self) -> &JsonValue {
        &self.settings
    }
}

/// Parser for `swift-format lint` diagnostic lines:
/// `<file>:<line>:<column>: <severity>: [<Category>] <message>`.
pub struct DiagnosticParser {
    pattern: Regex,
}

impl Default for DiagnosticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(
                r"^(?P<file>.+?):(?P<line>\d+):(?P<column>\d+): (?P<severity>warning|error|note|remark): (?:\[(?P<category>[^\]]+)\] )?(?P<message>.*)$",
            )
            .expect("Invalid regex"),
        }
    }

    /// Extract findings from engine output, in emission order.
    /// Lines that are not diagnostics are ignored.
    #[must_use]
    pub fn parse(&self, output: &str) -> Vec<Finding> {
        output
            .lines()
            .filter_map(|line| self.parse_line(line.trim_end()))
            .collect()
    }

    fn parse_line(&self, line: &str) -> Option<Finding> {
        let caps = self.pattern.captures(line)?;
        let line_no = caps.name("line")?.as_str().parse().ok()?;
        let column = caps.name("column")?.as_str().parse().ok()?;
        let category = caps
            .name("category")
            .or_else(|| caps.name("severity"))
            .map_or_else(String::new, |m| m.as_str().to_string());

        Some(Finding {
            location: Some(Location {
                file: PathBuf::from(caps.name("file")?.as_str()),
                line: line_no,
                column,
            }),
            category,
            message: caps
                .name("message")
                .map_or("", |m| m.as_str())
                .trim()
                .to_string(),
        })
    }
}

/// Runs the `swift-format` executable in `lint` mode for each file.
pub struct SwiftFormatEngine {
    executable: PathBuf,
    parser: DiagnosticParser,
}

impl Default for SwiftFormatEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl SwiftFormatEngine {
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            parser: DiagnosticParser::new(),
        }
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl LintEngine for SwiftFormatEngine {
    type Configuration = SwiftFormatConfiguration;

    fn load_configuration(&self, path: &Path) -> Result<Self::Configuration> {
        let content = fs::read_to_string(path).map_err(|source| GuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings =
            serde_json::from_str(&content).map_err(|source| GuardError::InvalidConfiguration {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(SwiftFormatConfiguration {
            path: path.to_path_buf(),
            settings,
        })
    }

    fn lint(&self, file: &Path, configuration: &Self::Configuration) -> Result<Vec<Finding>> {
        debug!(file = %file.display(), "running {}", self.executable.display());
        let output = Command::new(&self.executable)
            .arg("lint")
            .arg("--configuration")
            .arg(configuration.path())
            .arg(file)
            .output()
            .map_err(|source| GuardError::EngineUnavailable {
                executable: self.executable.display().to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut findings = self.parser.parse(&stderr);
        findings.extend(self.parser.parse(&stdout));

        if !output.status.success() && findings.is_empty() {
            return Err(GuardError::EngineFailed {
                file: file.to_path_buf(),
                stderr: stderr.trim().to_string(),
            });
        }

        debug!(file = %file.display(), findings = findings.len(), "lint finished");
        Ok(findings)
    }
}

#[cfg(test)]
#[path = "swift_format_tests.rs"]
mod tests;
