pub mod cli;
pub mod commands;
pub mod context;
pub mod engine;
pub mod error;
pub mod lint;
pub mod output;
pub mod project;
pub mod scanner;

pub use error::{GuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
