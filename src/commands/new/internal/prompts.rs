//! User interaction utilities for the scaffold pipeline

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::process::Command;

/// Whether we can ask the user anything at all
pub fn interactive() -> bool {
    console::user_attended()
}

/// Prompt for a value, falling back to the default on empty input
pub fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    print!("{prompt} [{default}]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Confirm prompt; empty input takes the default
pub fn confirm(prompt: &str, default_yes: bool) -> Result<bool> {
    let suffix = if default_yes { "[Y/n]" } else { "[y/N]" };
    print!("{prompt} {suffix}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        Ok(default_yes)
    } else {
        Ok(trimmed == "y" || trimmed == "yes")
    }
}

/// Instruction line seeded into the editor buffer; never part of the schema
const SEED_LINE: &str = "// Write your Prisma models below, then save and close the editor.";

/// Drop the seed line wherever the user left it, keep everything else as-is
fn strip_seed(fragment: &str) -> String {
    let kept = fragment
        .lines()
        .filter(|line| line.trim() != SEED_LINE)
        .fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        });
    kept.trim_start_matches('\n').to_string()
}

/// Collect a custom schema fragment through the user's editor
///
/// Opens $VISUAL/$EDITOR on a temp file, blocks until the editor exits, then
/// asks for confirmation. Returns None when the user backs out or saves an
/// empty file. Apart from removing the seeded instruction line, the fragment
/// is taken verbatim; no syntax validation happens here.
pub fn edit_schema_fragment() -> Result<Option<String>> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    let path = std::env::temp_dir().join(format!("primer-model-{}.prisma", std::process::id()));
    fs::write(&path, format!("{SEED_LINE}\n")).context("Failed to create temp schema file")?;

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;

    if !status.success() {
        println!("⚠️  Editor exited with {status}; keeping the default model");
        let _ = fs::remove_file(&path);
        return Ok(None);
    }

    let saved = fs::read_to_string(&path).context("Failed to read back schema fragment")?;
    let _ = fs::remove_file(&path);

    let fragment = strip_seed(&saved);
    if fragment.trim().is_empty() {
        println!("⚠️  Empty schema fragment; keeping the default model");
        return Ok(None);
    }

    println!("\n{fragment}");
    if confirm("Append this to schema.prisma?", true)? {
        Ok(Some(fragment))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_line_is_removed() {
        let saved = format!("{SEED_LINE}\nmodel Post {{\n  id Int @id\n}}\n");
        assert_eq!(strip_seed(&saved), "model Post {\n  id Int @id\n}\n");
    }

    #[test]
    fn test_seed_line_removed_anywhere_in_buffer() {
        let saved = format!("model Tag {{ id Int @id }}\n  {SEED_LINE}  \n");
        assert_eq!(strip_seed(&saved), "model Tag { id Int @id }\n");
    }

    #[test]
    fn test_user_text_survives_untouched() {
        let saved = "model Post {\n  id    Int    @id\n  title String\n}\n";
        assert_eq!(strip_seed(saved), saved);
    }

    #[test]
    fn test_untouched_buffer_strips_to_empty() {
        let saved = format!("{SEED_LINE}\n");
        assert!(strip_seed(&saved).trim().is_empty());
    }
}
