//! Test utilities for building throwaway documentation projects.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory holding C# sources.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a C# class with `members` documented methods, properties and
/// one trailing enum.
pub fn generated_class(members: usize) -> String {
    let mut source = String::from("namespace Generated\n{\n    public class Sample\n    {\n");
    for i in 0..members {
        source.push_str(&format!(
            "        /// <summary>\n        /// Method number {i}.\n        /// </summary>\n        public int Method{i}(int value, string name)\n        {{\n            if (value > {i})\n            {{\n                return value;\n            }}\n            return {i};\n        }}\n\n        public string Property{i} {{ get; set; }}\n\n        [MoonSharpVisible(false)]\n        public void Hidden{i}() {{ }}\n\n"
        ));
    }
    source.push_str("    }\n\n    public enum Kind\n    {\n");
    for i in 0..members {
        source.push_str(&format!("        Kind{i} = {i},\n"));
    }
    source.push_str("    }\n}\n");
    source
}
