pub mod lint;

pub use lint::{canonicalize_project, render_report, run_lint, run_lint_impl, write_output};
