//! Project folder and database name resolution

use std::path::{Path, PathBuf};

/// Inputs for a scaffold run, fully resolved before any external command runs
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Target folder for the generated project
    pub folder: PathBuf,
    /// Database name used in the connection URL
    pub db_name: String,
}

impl ProjectSpec {
    pub fn new(folder: PathBuf, db_name: String) -> Self {
        Self { folder, db_name }
    }

    /// Human-readable project name for generated files (landing page heading)
    pub fn display_name(&self) -> String {
        display_name(&self.folder)
    }
}

/// Resolve the raw folder input: empty means current directory, `~` expands
pub fn resolve_folder(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let raw = if trimmed.is_empty() { "./" } else { trimmed };

    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(raw)
}

/// Normalize a database-name override: whitespace-only values are discarded
/// so the derived name stays in effect
pub fn normalize_db_override(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Derive the database name from the project folder
///
/// The current directory (`.` or `./`) maps to "mydb"; any other folder uses
/// its final path segment, so `apps/site` gives "site".
pub fn derive_db_name(folder: &Path) -> String {
    match folder.file_name().and_then(|n| n.to_str()) {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => "mydb".to_string(),
    }
}

/// Display name for the project: final path segment, or the current directory
/// name when scaffolding in place
pub fn display_name(folder: &Path) -> String {
    if let Some(name) = folder.file_name().and_then(|n| n.to_str()) {
        return name.to_string();
    }
    std::env::current_dir()
        .ok()
        .and_then(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "my-app".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_defaults_to_current_dir() {
        assert_eq!(resolve_folder(""), PathBuf::from("./"));
        assert_eq!(resolve_folder("   "), PathBuf::from("./"));
    }

    #[test]
    fn test_default_folder_derives_mydb() {
        assert_eq!(derive_db_name(&resolve_folder("")), "mydb");
        assert_eq!(derive_db_name(Path::new("./")), "mydb");
        assert_eq!(derive_db_name(Path::new(".")), "mydb");
    }

    #[test]
    fn test_db_name_is_final_path_segment() {
        assert_eq!(derive_db_name(Path::new("blog")), "blog");
        assert_eq!(derive_db_name(Path::new("apps/site")), "site");
        assert_eq!(derive_db_name(Path::new("apps/site/")), "site");
    }

    #[test]
    fn test_blank_db_override_is_discarded() {
        assert_eq!(normalize_db_override(None), None);
        assert_eq!(normalize_db_override(Some("")), None);
        assert_eq!(normalize_db_override(Some("   ")), None);
        assert_eq!(normalize_db_override(Some(" blog ")), Some("blog".to_string()));
    }

    #[test]
    fn test_display_name_uses_final_segment() {
        assert_eq!(display_name(Path::new("apps/site")), "site");
        assert_eq!(display_name(Path::new("blog")), "blog");
    }

    #[test]
    fn test_tilde_expansion() {
        if dirs::home_dir().is_none() {
            return;
        }
        let folder = resolve_folder("~/projects/demo");
        assert!(!folder.to_string_lossy().starts_with('~'));
        assert!(folder.ends_with("projects/demo"));
    }
}
