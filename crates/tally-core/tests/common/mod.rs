use std::path::PathBuf;

use tempfile::TempDir;

/// Helper function to create a temporary directory and save-file path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let data_path = temp_dir.path().join("tasks.txt");
    (temp_dir, data_path)
}
