use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Can not find the project: {0}")]
    ProjectDiscovery(String),

    #[error("Can not find the {name} configuration file under {}", root.display())]
    ConfigurationMissing { name: String, root: PathBuf },

    #[error("Can not find a {marker} file under {}", root.display())]
    IgnoreFileMissing { marker: String, root: PathBuf },

    #[error("Project has some warnings: {0}")]
    LintingWarningsPresent(usize),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file: {}", path.display())]
    InvalidConfiguration {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to run linting engine: {executable}")]
    EngineUnavailable {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Linting engine failed on {}: {stderr}", file.display())]
    EngineFailed { file: PathBuf, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GuardError {
    /// Short category label shown in front of the error message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ProjectDiscovery(_) => "Project",
            Self::ConfigurationMissing { .. } | Self::InvalidConfiguration { .. } => {
                "Configuration"
            }
            Self::IgnoreFileMissing { .. } => "Ignore file",
            Self::LintingWarningsPresent(_) => "Lint",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::EngineUnavailable { .. } | Self::EngineFailed { .. } => "Engine",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Actionable hint for errors the user can fix directly.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigurationMissing { .. } => {
                Some("add the configuration file at the project root (swift-format dump-configuration)")
            }
            Self::IgnoreFileMissing { .. } => {
                Some("pass the ignore file path as the second argument or add one to the project")
            }
            Self::EngineUnavailable { .. } => {
                Some("install swift-format or point --swift-format / SWIFT_FORMAT_PATH at it")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
