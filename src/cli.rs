use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engine::DEFAULT_EXECUTABLE;
use crate::output::{ColorMode, OutputFormat};
use crate::project::{CONFIGURATION_FILE_NAME, IGNORE_FILE_MARKER, ProjectLayout, SOURCE_EXTENSION};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "swift-format-guard")]
#[command(author, version, about = "Run swift-format lint over every source file of a project")]
#[command(long_about = "Locates the swift-format configuration and ignore list of a project, \
    lints every source file and reports the findings.\n\n\
    Exit codes:\n  \
    0 - No findings\n  \
    1 - Lint findings present\n  \
    2 - Project, configuration or engine error")]
pub struct Cli {
    /// Project root directory
    pub project_path: PathBuf,

    /// Ignore file listing excluded path components (auto-discovered when omitted)
    pub ignore_file: Option<PathBuf>,

    /// Increase output verbosity (-v traces resolution, -vv adds debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// swift-format executable
    #[arg(long = "swift-format", env = "SWIFT_FORMAT_PATH", default_value = DEFAULT_EXECUTABLE)]
    pub swift_format: PathBuf,

    /// Configuration file name expected at the project root
    #[arg(long, default_value = CONFIGURATION_FILE_NAME)]
    pub config_name: String,

    /// Substring identifying the ignore file during auto-discovery
    #[arg(long, default_value = IGNORE_FILE_MARKER)]
    pub ignore_marker: String,

    /// Source file extension to lint (without the dot)
    #[arg(long, default_value = SOURCE_EXTENSION)]
    pub extension: String,
}

impl Cli {
    /// Project layout built from the naming overrides.
    #[must_use]
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout {
            configuration_file: self.config_name.clone(),
            ignore_marker: self.ignore_marker.clone(),
            source_extension: self.extension.trim_start_matches('.').to_string(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
