use std::fmt;
use std::fs;
use std::path::{Component, Path};

use crate::error::{GuardError, Result};

/// Ordered path-component tokens excluded from discovery.
///
/// A path is excluded when one of its components equals a token exactly.
/// Tokens are never treated as globs, prefixes or substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    tokens: Vec<String>,
}

impl IgnoreList {
    /// Parse ignore-file content: one token per line, surrounding `/` stripped.
    ///
    /// Lines that are empty after trimming are kept as empty tokens.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let tokens = content
            .lines()
            .map(|line| line.trim_matches('/').to_string())
            .collect();
        Self { tokens }
    }

    /// Read and parse an ignore file.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn contains(&self, component: &str) -> bool {
        self.tokens.iter().any(|t| t == component)
    }

    /// True if any normal component of `path` is an ignored token.
    #[must_use]
    pub fn excludes(&self, path: &Path) -> bool {
        path.components().any(|c| match c {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.contains(n)),
            _ => false,
        })
    }
}

impl fmt::Display for IgnoreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tokens)
    }
}

#[cfg(test)]
#[path = "ignore_list_tests.rs"]
mod tests;
