//! # Spider Web - Interconnected sales dashboard engine
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - CLI parsing & logging                    │
//! │    │                                                            │
//! │    ├── context.rs: SpiderWebConfig -> AppState                  │
//! │    │     ├── InMemoryStateStore (adapter)                       │
//! │    │     ├── ReactionEngine<SystemClock, UuidIds> (domain)      │
//! │    │     └── Workspace (usecase)                                │
//! │    └── commands/: demo, autopilot, catalog, discover            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   spiderweb demo [--analyze]                    - Run the scripted scenario
//!   spiderweb autopilot --ticks N --interval-ms M - Let the autopilot work
//!   spiderweb catalog [--hide <module>]           - List AI actions
//!   spiderweb discover --term T --location L      - Search for leads

mod commands;
mod context;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AutopilotCommand, CatalogCommand, DemoCommand, DiscoverCommand};
use context::AppContext;

#[derive(Parser)]
#[command(name = "spiderweb")]
#[command(about = "Spider Web - Every action ripples through leads, scores and coaching")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON, or YAML by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted example scenario
    Demo(DemoCommand),
    /// Run the background AI autopilot
    Autopilot(AutopilotCommand),
    /// List the AI action catalog
    Catalog(CatalogCommand),
    /// Discover leads from the places fixture
    Discover(DiscoverCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spiderweb=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config.as_deref(), cli.json)?;

    match cli.command {
        Commands::Demo(cmd) => cmd.run(&ctx).await,
        Commands::Autopilot(cmd) => cmd.run(&ctx).await,
        Commands::Catalog(cmd) => cmd.run(&ctx),
        Commands::Discover(cmd) => cmd.run(&ctx).await,
    }
}
