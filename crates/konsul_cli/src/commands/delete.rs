use clap::Args;
use sqlx::PgPool;
use uuid::Uuid;

use konsul_service::KonsulService;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The UUID of the consultation to delete (hard delete)
    #[arg(short, long)]
    pub id: Uuid,

    /// Skip the confirmation prompt (for scripts)
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}

pub async fn execute(pool: PgPool, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        println!("⚠️  This permanently deletes {}. Re-run with --yes to proceed.", args.id);
        return Ok(());
    }

    let service = KonsulService::new(pool);
    service.delete_consultation(args.id).await?;

    println!("🗑️  Deleted {}", args.id);
    Ok(())
}
