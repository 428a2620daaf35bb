use std::path::{Path, PathBuf};

use super::IgnoreList;
use crate::scanner::PathFilter;

/// What a path must look like once it survives the ignore list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// The whole relative path equals this value.
    ExactPath(PathBuf),
    /// The file extension equals this value (without the dot).
    Extension(String),
}

/// Ignore-aware filter used for configuration and source discovery.
pub struct ProjectFilter<'a> {
    ignore: &'a IgnoreList,
    rule: MatchRule,
}

impl<'a> ProjectFilter<'a> {
    #[must_use]
    pub const fn new(ignore: &'a IgnoreList, rule: MatchRule) -> Self {
        Self { ignore, rule }
    }

    fn matches_rule(&self, path: &Path) -> bool {
        match &self.rule {
            MatchRule::ExactPath(expected) => path == expected.as_path(),
            MatchRule::Extension(ext) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == ext),
        }
    }
}

impl PathFilter for ProjectFilter<'_> {
    fn should_include(&self, path: &Path) -> bool {
        !self.ignore.excludes(path) && self.matches_rule(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
