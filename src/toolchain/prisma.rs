//! Schema/migration tool invocations

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

fn run(project_path: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("bunx")
        .current_dir(project_path)
        .arg("prisma")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run prisma {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("prisma {} failed ({status})", args.join(" "));
    }

    Ok(())
}

/// Initialize prisma in the project (creates prisma/ and a stub .env)
pub fn init(project_path: &Path) -> Result<()> {
    run(
        project_path,
        &["init", "--datasource-provider", "postgresql"],
    )
}

/// Create and apply the initial migration against the configured database
pub fn migrate_dev(project_path: &Path, name: &str) -> Result<()> {
    run(project_path, &["migrate", "dev", "--name", name])
}

/// Regenerate the prisma client from the schema
pub fn generate(project_path: &Path) -> Result<()> {
    run(project_path, &["generate"])
}

/// Launch the database admin UI in the background
pub fn studio_detached(project_path: &Path) -> Result<()> {
    super::spawn_detached(project_path, "bunx", &["prisma", "studio"])
}
