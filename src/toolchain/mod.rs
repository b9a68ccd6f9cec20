//! Invocations of the external frontend and package-manager CLIs

pub mod prisma;

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Fixed flag set passed to the frontend generator
const CREATE_NEXT_APP_FLAGS: &[&str] = &[
    "--typescript",
    "--tailwind",
    "--eslint",
    "--app",
    "--src-dir",
    "--import-alias",
    "@/*",
    "--use-bun",
];

/// Run the frontend project generator
///
/// This is the one step whose failure aborts the whole scaffold: everything
/// after it writes into the directory this command creates.
pub fn create_next_app(folder: &Path) -> Result<()> {
    println!("🚀 Creating Next.js project...");

    let status = Command::new("bunx")
        .arg("create-next-app@latest")
        .arg(folder)
        .args(CREATE_NEXT_APP_FLAGS)
        .status()
        .context("Failed to run create-next-app (is bun installed?)")?;

    if !status.success() {
        anyhow::bail!("create-next-app failed ({status})");
    }

    println!("✓ Created Next.js project\n");
    Ok(())
}

/// Add packages with bun, inside the project folder
pub fn bun_add(project_path: &Path, packages: &[&str], dev: bool) -> Result<()> {
    let mut command = Command::new("bun");
    command.current_dir(project_path).arg("add");
    if dev {
        command.arg("-d");
    }

    let status = command
        .args(packages)
        .status()
        .context("Failed to run bun add")?;

    if !status.success() {
        anyhow::bail!("bun add {} failed ({status})", packages.join(" "));
    }

    Ok(())
}

/// Spawn a command in the project folder and leave it running
///
/// Output is discarded and the child is never waited on; the two dev-service
/// launches at the end of the scaffold are fire-and-forget.
pub fn spawn_detached(project_path: &Path, program: &str, args: &[&str]) -> Result<()> {
    Command::new(program)
        .current_dir(project_path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch {program}"))?;

    Ok(())
}

/// Launch the local dev server in the background
pub fn dev_server_detached(project_path: &Path) -> Result<()> {
    spawn_detached(project_path, "bun", &["run", "dev"])
}
