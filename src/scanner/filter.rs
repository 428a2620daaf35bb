use std::path::Path;

/// Decides whether a scanned path (relative to the scan root) is kept.
pub trait PathFilter {
    fn should_include(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn should_include(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Case-insensitive substring match against the whole relative path.
pub struct NameContains {
    needle: String,
}

impl NameContains {
    #[must_use]
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl PathFilter for NameContains {
    fn should_include(&self, path: &Path) -> bool {
        path.to_string_lossy().to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
