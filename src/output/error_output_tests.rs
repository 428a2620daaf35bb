use std::path::PathBuf;

use super::*;

fn render(out: &ErrorOutput, detail: Option<&str>, suggestion: Option<&str>) -> String {
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "Configuration",
        "missing file",
        detail,
        suggestion,
    );
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let result = render(&ErrorOutput::with_colors(false), None, None);
    assert_eq!(result, "✖ Configuration: missing file\n");
}

#[test]
fn error_without_colors_full() {
    let result = render(
        &ErrorOutput::with_colors(false),
        Some("expected at the project root"),
        Some("run swift-format dump-configuration"),
    );
    assert_eq!(
        result,
        "✖ Configuration: missing file\n  × expected at the project root\n  help: run swift-format dump-configuration\n"
    );
}

#[test]
fn error_with_colors_wraps_header() {
    let result = render(&ErrorOutput::with_colors(true), Some("detail"), Some("hint"));
    assert!(result.starts_with("\x1b[1m\x1b[31m✖ Configuration:\x1b[0m missing file\n"));
    assert!(result.contains("\x1b[2m× detail\x1b[0m"));
    assert!(result.contains("\x1b[36mhelp:\x1b[0m hint"));
}

#[test]
fn never_mode_disables_colors() {
    let result = render(&ErrorOutput::new(ColorMode::Never), None, None);
    assert!(!result.contains("\x1b["));
}

#[test]
fn guard_error_fields_render_through_write_error() {
    let error = GuardError::ConfigurationMissing {
        name: ".swift-format".to_string(),
        root: PathBuf::from("/work/App"),
    };
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        error.error_type(),
        &error.to_string(),
        None,
        error.suggestion(),
    );
    let result = String::from_utf8(buf).unwrap();

    assert!(result.starts_with("✖ Configuration: Can not find the .swift-format configuration file"));
    assert!(result.contains("  help: "));
}
