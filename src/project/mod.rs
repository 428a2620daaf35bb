//! Project resolution: locate the ignore file, the configuration file and the
//! lintable sources under a project root.
//!
//! Lookups for a single file (ignore file, configuration) take the first
//! match in scan order; duplicates are not reported. Source discovery keeps
//! every match.

mod filter;
mod ignore_list;

pub use filter::{MatchRule, ProjectFilter};
pub use ignore_list::IgnoreList;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::RunContext;
use crate::error::{GuardError, Result};
use crate::scanner::{NameContains, PathScanner};

pub const CONFIGURATION_FILE_NAME: &str = ".swift-format";
pub const IGNORE_FILE_MARKER: &str = "swift-format-ignore";
pub const SOURCE_EXTENSION: &str = "swift";

/// Fixed names the resolver searches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Configuration file, matched against the full relative path.
    pub configuration_file: String,
    /// Case-insensitive substring identifying the ignore file.
    pub ignore_marker: String,
    /// Source file extension without the dot.
    pub source_extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            configuration_file: CONFIGURATION_FILE_NAME.to_string(),
            ignore_marker: IGNORE_FILE_MARKER.to_string(),
            source_extension: SOURCE_EXTENSION.to_string(),
        }
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub configuration: PathBuf,
    pub sources: Vec<PathBuf>,
    pub ignore_file: PathBuf,
    pub ignore_list: IgnoreList,
}

pub struct ProjectResolver {
    layout: ProjectLayout,
    scanner: PathScanner,
}

impl ProjectResolver {
    #[must_use]
    pub const fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            scanner: PathScanner::files_only(),
        }
    }

    #[must_use]
    pub const fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Resolve the configuration file and source files of `project_path`.
    ///
    /// When `ignore_file` is `None`, the first file whose path contains the
    /// ignore marker is used.
    ///
    /// # Errors
    /// - `IgnoreFileMissing` if no ignore file is given or discoverable
    /// - `FileRead` if the ignore file cannot be read
    /// - `ConfigurationMissing` if no non-ignored configuration file exists
    pub fn resolve(
        &self,
        project_path: &Path,
        ignore_file: Option<&Path>,
        ctx: &RunContext,
    ) -> Result<ResolvedProject> {
        let ignore_file = match ignore_file {
            Some(path) => path.to_path_buf(),
            None => self.discover_ignore_file(project_path)?,
        };
        ctx.trace("Ignore file path:", ignore_file.display());
        ctx.trace("Project path:", project_path.display());

        let ignore_list = IgnoreList::load(&ignore_file)?;
        ctx.trace("Ignore list:", &ignore_list);

        let configuration = self.find_configuration(project_path, &ignore_list)?;
        ctx.trace("Found configuration file at:", configuration.display());

        let sources = self.find_sources(project_path, &ignore_list);
        debug!(count = sources.len(), "discovered source files");

        Ok(ResolvedProject {
            configuration,
            sources,
            ignore_file,
            ignore_list,
        })
    }

    /// Find the ignore file by marker substring, joined onto the project root.
    ///
    /// # Errors
    /// Returns `IgnoreFileMissing` if nothing under the root matches.
    pub fn discover_ignore_file(&self, project_path: &Path) -> Result<PathBuf> {
        let marker = NameContains::new(&self.layout.ignore_marker);
        self.scanner
            .first_match(project_path, &marker)
            .map(|rel| project_path.join(rel))
            .ok_or_else(|| GuardError::IgnoreFileMissing {
                marker: self.layout.ignore_marker.clone(),
                root: project_path.to_path_buf(),
            })
    }

    /// Find the configuration file, skipping ignored paths.
    ///
    /// # Errors
    /// Returns `ConfigurationMissing` if no candidate survives filtering.
    pub fn find_configuration(&self, project_path: &Path, ignore: &IgnoreList) -> Result<PathBuf> {
        let filter = ProjectFilter::new(
            ignore,
            MatchRule::ExactPath(PathBuf::from(&self.layout.configuration_file)),
        );
        self.scanner
            .first_match(project_path, &filter)
            .map(|rel| project_path.join(rel))
            .ok_or_else(|| GuardError::ConfigurationMissing {
                name: self.layout.configuration_file.clone(),
                root: project_path.to_path_buf(),
            })
    }

    /// Find every source file outside the ignore list, in scan order.
    #[must_use]
    pub fn find_sources(&self, project_path: &Path, ignore: &IgnoreList) -> Vec<PathBuf> {
        let filter = ProjectFilter::new(
            ignore,
            MatchRule::Extension(self.layout.source_extension.clone()),
        );
        self.scanner
            .scan(project_path, &filter)
            .into_iter()
            .map(|rel| project_path.join(rel))
            .collect()
    }
}

impl Default for ProjectResolver {
    fn default() -> Self {
        Self::new(ProjectLayout::default())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
