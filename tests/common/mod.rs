#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the swift-format-guard binary.
#[macro_export]
macro_rules! swift_format_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("swift-format-guard"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a project with a configuration, an ignore file and the given sources.
    pub fn with_project(ignore: &str, sources: &[&str]) -> Self {
        let fixture = Self::new();
        fixture.create_file(".swift-format", "{\"lineLength\": 100}");
        fixture.create_file(".swift-format-ignore", ignore);
        for source in sources {
            fixture.create_file(source, "let x = 1\n");
        }
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes an executable shell script standing in for swift-format.
///
/// The script lives in its own temp directory so it is never scanned as part
/// of a project.
#[cfg(unix)]
pub fn stub_engine(body: &str) -> (TempDir, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = TempDir::new().expect("Failed to create temp directory");
    let path = bin_dir.path().join("swift-format");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to set permissions");
    (bin_dir, path)
}
