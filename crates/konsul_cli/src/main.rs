use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;

use konsul_cli::commands;
use konsul_cli::config::Config;

#[derive(Parser)]
#[command(name = "konsul")]
#[command(about = "Consultation intake toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the database schema from embedded assets
    Rebuild(commands::rebuild::RebuildArgs),

    /// List consultations with search, status filter, and pagination
    List(commands::list::ListArgs),

    /// Show total and per-status consultation counts
    Stats(commands::stats::StatsArgs),

    /// Move a consultation to a new status (transition-checked)
    SetStatus(commands::set_status::SetStatusArgs),

    /// Export a consultation's printable bundle to disk
    Export(commands::export::ExportArgs),

    /// Insert one complete demo consultation through the intake path
    Seed(commands::seed::SeedArgs),

    /// Permanently delete a consultation by id
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load config (fails fast if invalid)
    let config = Config::from_env()?;

    // 2. Connect to Postgres
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // 3. Parse arguments and route to the correct command
    let cli = Cli::parse();

    match cli.command {
        Commands::Rebuild(args) => commands::rebuild::execute(pool, args).await?,
        Commands::List(args) => commands::list::execute(pool, args).await?,
        Commands::Stats(args) => commands::stats::execute(pool, args).await?,
        Commands::SetStatus(args) => commands::set_status::execute(pool, args).await?,
        Commands::Export(args) => commands::export::execute(pool, args).await?,
        Commands::Seed(args) => commands::seed::execute(pool, args).await?,
        Commands::Delete(args) => commands::delete::execute(pool, args).await?,
    }

    Ok(())
}
