use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar advanced once per linted file.
///
/// Draws to stderr so stdout stays clean for reports. Hidden when disabled
/// by the caller or when stderr is not a TTY.
#[derive(Clone)]
pub struct LintProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl LintProgress {
    #[must_use]
    pub fn new(total: u64, enabled: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, enabled && is_tty)
    }

    /// Progress bar that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new_with_visibility(0, false)
    }

    fn new_with_visibility(total: u64, visible: bool) -> Self {
        let progress_bar = if visible {
            Self::create_visible_progress_bar(total)
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Linting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Thread-safe; called from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
