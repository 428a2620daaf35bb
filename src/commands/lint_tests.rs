use tempfile::TempDir;

use super::*;

#[test]
fn canonicalize_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let canonical = canonicalize_project(temp_dir.path()).unwrap();

    assert!(canonical.is_absolute());
    assert!(canonical.is_dir());
}

#[test]
fn canonicalize_missing_path_is_project_error() {
    let err = canonicalize_project(Path::new("/nonexistent/App")).unwrap_err();
    assert!(matches!(err, GuardError::ProjectDiscovery(_)));
}

#[test]
fn canonicalize_file_is_project_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Package.swift");
    std::fs::write(&file, "").unwrap();

    let err = canonicalize_project(&file).unwrap_err();
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn render_report_text_and_json() {
    let report = LintReport {
        files_checked: 1,
        findings: vec![],
    };

    let text = render_report(&report, OutputFormat::Text, ColorMode::Never).unwrap();
    assert!(text.contains("✅ All Good!"));

    let json = render_report(&report, OutputFormat::Json, ColorMode::Never).unwrap();
    assert!(json.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["files_checked"], 1);
}

#[test]
fn run_lint_missing_project_returns_error_code() {
    let cli = <Cli as clap::Parser>::parse_from(["swift-format-guard", "/nonexistent/App"]);
    assert_eq!(run_lint(&cli), EXIT_ERROR);
}

#[test]
fn run_lint_impl_missing_ignore_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".swift-format"), "{}").unwrap();
    let cli = <Cli as clap::Parser>::parse_from([
        std::ffi::OsStr::new("swift-format-guard"),
        temp_dir.path().as_os_str(),
    ]);

    let err = run_lint_impl(&cli).unwrap_err();
    assert!(matches!(err, GuardError::IgnoreFileMissing { .. }));
}

#[test]
fn write_output_writes_rendered_report() {
    let mut buf = Vec::new();
    write_output(&mut buf, "✅ All Good!\n").unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "✅ All Good!\n");
}

/// Writer whose stream has been closed.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_output_failure_is_io_error() {
    let err = write_output(&mut ClosedPipe, "Warnings: 1\n").unwrap_err();

    assert!(matches!(err, GuardError::Io(_)));
    assert_eq!(err.error_type(), "IO");
}
