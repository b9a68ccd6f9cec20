//! Scaffold a new web application project
//!
//! Public interface stays thin; the pipeline lives in internal/ submodules.
//!
//! # Example
//!
//! ```no_run
//! // Equivalent of `primer new blog --defaults --local --no-launch`
//! // execute(Some("blog".into()), None, true, true, true)?;
//! ```

mod internal;

use anyhow::Result;

/// Execute the scaffold pipeline
///
/// # Arguments
///
/// * `name` - Project folder, prompted with default "./" when omitted
/// * `db` - Database name, derived from the folder when omitted
/// * `defaults` - Accept every default, skip all prompts
/// * `local` - Skip version-control setup
/// * `no_launch` - Skip the trailing editor and dev-service launches
///
/// # Process
///
/// 1. **Inputs**: resolve folder and database name
/// 2. **Generate**: run create-next-app (the only fatal external step)
/// 3. **Data layer**: install prisma packages, init, write schema, migrate
/// 4. **Starter files**: .env, client accessors, stylesheet, landing page
/// 5. **Git**: init, stage, commit (best effort)
/// 6. **Launch**: editor, prisma studio, dev server (fire and forget)
///
/// # Errors
///
/// Returns an error when bun is missing or create-next-app exits non-zero.
/// Every other external failure is reported as a warning and skipped.
pub fn execute(
    name: Option<String>,
    db: Option<String>,
    defaults: bool,
    local: bool,
    no_launch: bool,
) -> Result<()> {
    internal::execute_new(name, db, defaults, local, no_launch)
}
