use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use primer::environment::{Environment, OPTIONAL_TOOLS, REQUIRED_TOOLS};

#[derive(Serialize)]
struct HealthCheck {
    status: String, // "healthy" or "critical"
    os: String,
    arch: String,
    tools: Vec<ToolStatus>,
    recommendations: Vec<String>,
}

#[derive(Serialize)]
struct ToolStatus {
    name: String,
    required: bool,
    available: bool,
    version: Option<String>,
}

pub fn execute(json_output: bool) -> Result<i32> {
    if !json_output {
        println!("🏥 Checking environment...\n");
    }

    let environment = Environment::detect()?;

    let mut tools = Vec::new();
    let mut recommendations = Vec::new();

    let probed = REQUIRED_TOOLS
        .iter()
        .map(|t| (*t, true))
        .chain(OPTIONAL_TOOLS.iter().map(|t| (*t, false)));

    for (name, required) in probed {
        let info = environment.tools.get(name);
        let available = info.is_some_and(|i| i.available);
        let version = info.and_then(|i| i.version.clone());

        if required && !available {
            let hint = install_hint(name);
            if !recommendations.contains(&hint) {
                recommendations.push(hint);
            }
        }

        tools.push(ToolStatus {
            name: name.to_string(),
            required,
            available,
            version,
        });
    }

    let critical = tools.iter().any(|t| t.required && !t.available);
    let status = if critical { "critical" } else { "healthy" };

    if json_output {
        let report = HealthCheck {
            status: status.to_string(),
            os: environment.os,
            arch: environment.arch,
            tools,
            recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for tool in &tools {
            let label = if tool.required { "required" } else { "optional" };
            if tool.available {
                let version = tool.version.as_deref().unwrap_or("detected");
                println!("  {} {} ({label}): {version}", "✓".green(), tool.name);
            } else if tool.required {
                println!("  {} {} ({label}): not found", "✗".red(), tool.name);
            } else {
                println!("  {} {} ({label}): not found", "-".yellow(), tool.name);
            }
        }

        if !recommendations.is_empty() {
            println!();
            for hint in &recommendations {
                println!("  💡 {hint}");
            }
        }

        println!();
        if critical {
            println!("{}", "Environment check failed".red().bold());
        } else {
            println!("{}", "Environment looks healthy".green().bold());
        }
    }

    Ok(if critical { 1 } else { 0 })
}

fn install_hint(tool: &str) -> String {
    match tool {
        "bun" | "bunx" => "Install bun: https://bun.sh".to_string(),
        "git" => "Install git: https://git-scm.com/downloads".to_string(),
        other => format!("Install {other} and make sure it is on PATH"),
    }
}
