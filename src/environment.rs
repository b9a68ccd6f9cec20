use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::process::Command;

/// Tools the scaffold pipeline cannot run without
pub const REQUIRED_TOOLS: &[&str] = &["bun", "bunx", "git"];

/// Tools that improve the experience but are not blocking
pub const OPTIONAL_TOOLS: &[&str] = &["node", "code", "psql", "docker"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub tools: HashMap<String, ToolInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    pub fn detect() -> Result<Self> {
        let mut environment = Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            tools: HashMap::new(),
        };

        for tool in REQUIRED_TOOLS.iter().chain(OPTIONAL_TOOLS) {
            environment.tools.insert((*tool).to_string(), probe(tool));
        }

        Ok(environment)
    }

    /// Whether a tool was found on PATH
    pub fn has(&self, tool: &str) -> bool {
        self.tools.get(tool).is_some_and(|info| info.available)
    }
}

fn probe(tool: &str) -> ToolInfo {
    let mut info = ToolInfo {
        available: false,
        version: None,
        path: None,
    };

    if let Ok(path) = which::which(tool) {
        info.available = true;
        info.path = Some(path.display().to_string());

        if let Ok(output) = Command::new(tool).arg("--version").output() {
            let version_str = String::from_utf8_lossy(&output.stdout);
            let first_line = version_str.lines().next().unwrap_or("").trim();
            if !first_line.is_empty() {
                info.version = Some(first_line.to_string());
            }
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_probes_all_tools() {
        let environment = Environment::detect().unwrap();
        for tool in REQUIRED_TOOLS.iter().chain(OPTIONAL_TOOLS) {
            assert!(environment.tools.contains_key(*tool));
        }
    }

    #[test]
    fn test_missing_tool_reports_unavailable() {
        let info = probe("definitely-not-a-real-tool-xyz");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }
}
