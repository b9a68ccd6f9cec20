use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold full-stack web apps - Next.js + Prisma in one command", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new web application project
    New {
        /// Project folder (prompted when omitted, default "./")
        name: Option<String>,

        /// Database name (derived from the folder when omitted)
        #[arg(long)]
        db: Option<String>,

        /// Accept all defaults without prompting
        #[arg(long)]
        defaults: bool,

        /// Skip version-control setup
        #[arg(long)]
        local: bool,

        /// Skip the editor, dev-server, and database UI launches
        #[arg(long)]
        no_launch: bool,
    },

    /// Check that required external tools are installed
    Doctor {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            db,
            defaults,
            local,
            no_launch,
        } => {
            commands::new::execute(name, db, defaults, local, no_launch)?;
        }
        Commands::Doctor { json } => {
            let exit_code = commands::doctor::execute(json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
