//! Internal implementation for the new command

pub mod prompts;

use anyhow::Result;

use primer::environment::Environment;
use primer::project::{self, ProjectSpec};
use primer::toolchain::{self, prisma};
use primer::{git, starter, Config};

/// Main execution logic for the scaffold pipeline
pub fn execute_new(
    name: Option<String>,
    db: Option<String>,
    defaults: bool,
    local: bool,
    no_launch: bool,
) -> Result<()> {
    let config = Config::load()?;
    let interactive = !defaults && prompts::interactive();

    // === STEP 0: PREFLIGHT (FAIL FAST BEFORE ANY PROMPT) ===
    println!("🧱 Primer\n");
    let environment = Environment::detect()?;
    preflight(&environment)?;

    // === STEP 1: RESOLVE INPUTS ===
    let folder_input = match name {
        Some(n) => n,
        None if interactive => prompts::prompt_with_default("Project folder", "./")?,
        None => "./".to_string(),
    };
    let folder = project::resolve_folder(&folder_input);

    let derived = project::derive_db_name(&folder);
    let db_name = match project::normalize_db_override(db.as_deref()) {
        Some(d) => d,
        None if interactive => prompts::prompt_with_default("Database name", &derived)?,
        None => derived,
    };

    let spec = ProjectSpec::new(folder, db_name);
    println!(
        "\nScaffolding '{}' (database '{}')\n",
        spec.folder.display(),
        spec.db_name
    );

    // === STEP 2: FRONTEND GENERATOR (THE ONLY FATAL EXTERNAL STEP) ===
    toolchain::create_next_app(&spec.folder)?;

    // === STEP 3: DATA-ACCESS LAYER ===
    println!("🗄️  Wiring up the data layer...");
    best_effort(
        "install @prisma/client",
        toolchain::bun_add(&spec.folder, &["@prisma/client"], false),
    );
    best_effort(
        "install prisma",
        toolchain::bun_add(&spec.folder, &["prisma"], true),
    );
    best_effort("prisma init", prisma::init(&spec.folder));

    let database_url = config.database_url(&spec.db_name);
    starter::write_env(&spec.folder, &database_url)?;

    let custom_model = if interactive && prompts::confirm("Add a custom Prisma model?", false)? {
        prompts::edit_schema_fragment()?
    } else {
        None
    };
    starter::write_schema(&spec.folder, custom_model.as_deref())?;

    best_effort(
        "apply initial migration",
        prisma::migrate_dev(&spec.folder, "init"),
    );
    best_effort("generate prisma client", prisma::generate(&spec.folder));

    // === STEP 4: STARTER FILES ===
    starter::write_starter_files(&spec.folder, &spec.display_name())?;

    // === STEP 5: VERSION CONTROL ===
    if local {
        println!("  - Skipping git setup (--local)");
    } else if environment.has("git") {
        best_effort("git setup", commit_scaffold(&spec));
    } else {
        println!("⚠️  git not found; skipping version-control setup");
    }

    // === STEP 6: LAUNCH DEV SERVICES ===
    if !no_launch {
        println!("\n🚀 Launching dev services...");
        best_effort(
            "open editor",
            toolchain::spawn_detached(&spec.folder, &config.editor, &["."]),
        );
        best_effort("launch prisma studio", prisma::studio_detached(&spec.folder));
        best_effort("launch dev server", toolchain::dev_server_detached(&spec.folder));
    }

    println!(
        "\n✨ Project '{}' is ready at {}",
        spec.display_name(),
        spec.folder.display()
    );
    Ok(())
}

/// Fail fast when the generator cannot run at all
fn preflight(environment: &Environment) -> Result<()> {
    if environment.has("bun") && environment.has("bunx") {
        if let Some(info) = environment.tools.get("bun") {
            if let Some(version) = &info.version {
                println!("  ✓ bun: {version}");
            }
        }
        return Ok(());
    }

    eprintln!("Error: bun is required but was not found on PATH.");
    eprintln!();
    eprintln!("Install it from https://bun.sh, for example:");
    eprintln!("  curl -fsSL https://bun.sh/install | bash");
    anyhow::bail!("bun not found")
}

/// Run a non-critical step, downgrading failure to a warning
fn best_effort(step: &str, result: Result<()>) {
    if let Err(e) = result {
        println!("⚠️  Could not {step}: {e:#}");
        println!("   Continuing; you can run this step manually later.");
    }
}

fn commit_scaffold(spec: &ProjectSpec) -> Result<()> {
    git::ensure_repo(&spec.folder)?;
    git::add_all(&spec.folder)?;
    git::commit(&spec.folder, "initial scaffold")?;
    println!("  ✓ Committed initial scaffold");
    Ok(())
}
