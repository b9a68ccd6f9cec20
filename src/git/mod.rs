//! Git operations for scaffolded projects

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Check if the given directory is inside a git repository
pub fn is_repo(path: &Path) -> Result<bool> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--git-dir"])
        .output()
        .context("Failed to check if directory is a git repository")?;

    Ok(output.status.success())
}

/// Initialize a new repository in the given directory
pub fn init(path: &Path) -> Result<()> {
    let output = Command::new("git")
        .current_dir(path)
        .arg("init")
        .output()
        .context("Failed to initialize git repository")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to initialize git repository: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Initialize a repository only if the directory is not already in one
pub fn ensure_repo(path: &Path) -> Result<()> {
    if !is_repo(path)? {
        init(path)?;
        println!("✓ Initialized git repository");
    }
    Ok(())
}

/// Stage all changes
pub fn add_all(path: &Path) -> Result<()> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["add", "."])
        .output()
        .context("Failed to stage changes")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to stage changes: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Create a commit
pub fn commit(path: &Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["commit", "-m", message])
        .output()
        .context("Failed to create commit")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    #[test]
    fn test_ensure_repo_initializes_once() -> Result<()> {
        if !git_available() {
            return Ok(());
        }

        let temp = TempDir::new()?;
        ensure_repo(temp.path())?;
        assert!(is_repo(temp.path())?);

        // Second call is a no-op
        ensure_repo(temp.path())?;
        assert!(is_repo(temp.path())?);
        Ok(())
    }

    #[test]
    fn test_add_all_stages_new_files() -> Result<()> {
        if !git_available() {
            return Ok(());
        }

        let temp = TempDir::new()?;
        init(temp.path())?;
        fs::write(temp.path().join("hello.txt"), "hello\n")?;
        add_all(temp.path())?;

        let output = Command::new("git")
            .current_dir(temp.path())
            .args(["status", "--porcelain"])
            .output()?;
        let status = String::from_utf8_lossy(&output.stdout);
        assert!(status.contains("hello.txt"));
        assert!(status.starts_with('A'));
        Ok(())
    }
}
