mod filter;

pub use filter::{NameContains, PathFilter};

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Recursive directory walker yielding paths relative to the scan root.
///
/// Entries come back in the order the filesystem enumerates them; nothing is
/// sorted. A root that does not exist (or cannot be read) produces no
/// entries, and unreadable entries below the root are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathScanner {
    files_only: bool,
}

impl PathScanner {
    /// Scanner that reports both files and directories.
    #[must_use]
    pub const fn new() -> Self {
        Self { files_only: false }
    }

    /// Scanner that reports regular files only.
    #[must_use]
    pub const fn files_only() -> Self {
        Self { files_only: true }
    }

    /// Return every relative path under `root` accepted by `filter`.
    pub fn scan<F: PathFilter + ?Sized>(&self, root: &Path, filter: &F) -> Vec<PathBuf> {
        self.entries(root)
            .filter(|p| filter.should_include(p))
            .collect()
    }

    /// Return every relative path whose lower-cased form contains `name`.
    pub fn scan_containing(&self, root: &Path, name: &str) -> Vec<PathBuf> {
        self.scan(root, &NameContains::new(name))
    }

    /// Return the first relative path accepted by `filter`, stopping the walk early.
    pub fn first_match<F: PathFilter + ?Sized>(&self, root: &Path, filter: &F) -> Option<PathBuf> {
        self.entries(root).find(|p| filter.should_include(p))
    }

    fn entries(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        let files_only = self.files_only;
        let base = root.to_path_buf();

        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(move |e| !files_only || is_file_entry(e))
            .filter_map(move |e| {
                e.path()
                    .strip_prefix(&base)
                    .ok()
                    .map(Path::to_path_buf)
            })
    }
}

/// Regular files, plus symlinks resolving to a regular file. Dangling links
/// and links to directories are not files.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
