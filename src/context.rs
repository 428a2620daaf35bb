use std::fmt::Display;

/// Invocation-wide settings passed explicitly to the resolver and commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunContext {
    pub verbose: u8,
    pub quiet: bool,
}

impl RunContext {
    #[must_use]
    pub const fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Progress bars fight with trace lines on the terminal, so they are
    /// only shown for plain, non-quiet runs.
    #[must_use]
    pub const fn show_progress(&self) -> bool {
        !self.quiet && !self.is_verbose()
    }

    /// Print a diagnostic trace line to stdout in verbose mode.
    pub fn trace(&self, label: &str, value: impl Display) {
        if self.is_verbose() {
            println!("{label} {value}");
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
