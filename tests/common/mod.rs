//! Shared test helpers for all docfacts integration tests.
//!
//! Import from any integration test file with:
//!   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// README that satisfies every `readme-content` expectation.
#[allow(dead_code)]
pub const COMPLIANT_README: &str = include_str!("../fixtures/compliant/README.md");

/// Guide that satisfies every `compatibility-guide` expectation.
#[allow(dead_code)]
pub const COMPLIANT_GUIDE: &str = include_str!("../fixtures/compliant/docs/CUDA_COMPATIBILITY.md");

#[allow(dead_code)]
pub const README_PATH: &str = "README.md";
#[allow(dead_code)]
pub const GUIDE_PATH: &str = "docs/CUDA_COMPATIBILITY.md";

/// Create a project directory from a set of files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    let project_root = root.to_path_buf();
    (dir, project_root)
}

/// Project with both documents present and compliant.
#[allow(dead_code)]
pub fn compliant_project() -> (TempDir, PathBuf) {
    create_project(&[(README_PATH, COMPLIANT_README), (GUIDE_PATH, COMPLIANT_GUIDE)])
}

/// Get path to compiled docfacts binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn docfacts_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("docfacts");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "docfacts-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build docfacts");
    assert!(status.success(), "Failed to build docfacts binary");
    path
}

/// Run docfacts with `args` inside `dir`.
#[allow(dead_code)]
pub fn run_docfacts(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(docfacts_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run docfacts")
}
