//! Abort behavior when the frontend generator fails
//!
//! Shadows bun/bunx with stub scripts on PATH so the generator exits non-zero
//! without any network or toolchain access.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use primer::starter::STARTER_FILES;

fn write_stub(dir: &Path, name: &str, body: &str) -> std::io::Result<()> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[test]
fn failing_generator_aborts_before_any_file_writes() -> anyhow::Result<()> {
    let stub_bin = TempDir::new()?;
    // bun passes detection; bunx fails, so create-next-app reports non-zero
    write_stub(stub_bin.path(), "bun", "#!/bin/sh\necho \"1.0.0\"\nexit 0\n")?;
    write_stub(stub_bin.path(), "bunx", "#!/bin/sh\nexit 1\n")?;

    let workspace = TempDir::new()?;
    let target = workspace.path().join("app");

    let path = format!(
        "{}:{}",
        stub_bin.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );

    let output = Command::new(env!("CARGO_BIN_EXE_primer"))
        .current_dir(workspace.path())
        .env("PATH", path)
        .args(["new", "app", "--defaults", "--local", "--no-launch"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("create-next-app"), "stderr was: {stderr}");

    // Nothing after the generator may have run
    assert!(!target.join(".env").exists());
    assert!(!target.join("prisma/schema.prisma").exists());
    for file in STARTER_FILES {
        assert!(!target.join(file).exists(), "unexpected {file}");
    }
    Ok(())
}
