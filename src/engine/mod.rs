//! Boundary to the external formatting/linting engine.
//!
//! The guard never evaluates style rules itself. An engine loads the
//! project configuration once and is then asked for findings one file at a
//! time, possibly from several threads.

mod swift_format;

pub use swift_format::{
    DEFAULT_EXECUTABLE, DiagnosticParser, SwiftFormatConfiguration, SwiftFormatEngine,
};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Source position a finding points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

/// One diagnostic reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub location: Option<Location>,
    pub category: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(
                f,
                "{}:{}:{}: [{}] {}",
                loc.file.display(),
                loc.line,
                loc.column,
                self.category,
                self.message
            ),
            None => write!(f, "[{}] {}", self.category, self.message),
        }
    }
}

pub trait LintEngine: Sync {
    type Configuration: Sync;

    /// Load the configuration file shared by every lint call.
    ///
    /// # Errors
    /// Returns an error if the file is missing or malformed.
    fn load_configuration(&self, path: &Path) -> Result<Self::Configuration>;

    /// Lint a single source file.
    ///
    /// # Errors
    /// Returns an error if the engine cannot process the file.
    fn lint(&self, file: &Path, configuration: &Self::Configuration) -> Result<Vec<Finding>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
