//! [`TestTree`] builder for rewrite scenarios.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary source tree with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use forkkeep_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.write("A.txt", "old_call(x)");
/// tree.assert_file_eq("A.txt", "old_call(x)");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` at `path` (relative to root), creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Read the file at `path` (relative to root).
    ///
    /// # Panics
    /// Panics if the file cannot be read as UTF-8.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert the file at `path` has exactly `expected` as content.
    pub fn assert_file_eq(&self, path: &str, expected: &str) {
        let actual = self.read(path);
        assert!(
            actual == expected,
            "File {} differs.\nExpected: {}\nActual: {}",
            path,
            expected,
            actual
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }

    /// Modification time of the file at `path`.
    pub fn modified(&self, path: &str) -> std::time::SystemTime {
        fs::metadata(self.root().join(path))
            .and_then(|m| m.modified())
            .unwrap()
    }
}
