use clap::Args;
use sqlx::PgPool;

#[derive(Debug, Args)]
pub struct RebuildArgs {
    /// Skip the confirmation prompt (for scripts)
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}

pub async fn execute(pool: PgPool, args: RebuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        println!("⚠️  This DROPS and recreates the consultations table. Re-run with --yes to proceed.");
        return Ok(());
    }

    println!("🔄 Rebuilding schema from embedded assets...");
    konsul_db::schema::rebuild_database(&pool).await?;
    println!("✅ Schema applied.");
    Ok(())
}
