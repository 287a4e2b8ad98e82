//! Common test utilities for cnab-bundle integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding bundle documents for a test
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture bundle into the workspace and return its path
    pub fn copy_fixture_bundle(&self, fixture_name: &str) -> PathBuf {
        let content = fixture_bundle(fixture_name);
        self.write_file(&format!("{fixture_name}.json"), &content)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a fixture bundle
pub fn fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("bundles")
        .join(format!("{fixture_name}.json"))
}

/// Contents of a fixture bundle
pub fn fixture_bundle(fixture_name: &str) -> String {
    std::fs::read_to_string(fixture_path(fixture_name)).expect("Failed to read fixture bundle")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_workspace_copy_fixture_bundle() {
        let workspace = TestWorkspace::new();
        let path = workspace.copy_fixture_bundle("helloworld");
        assert!(path.exists());
    }
}
