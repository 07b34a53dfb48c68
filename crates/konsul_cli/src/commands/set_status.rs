use clap::Args;
use sqlx::PgPool;
use uuid::Uuid;

use konsul_core::models::ConsultationStatus;
use konsul_service::KonsulService;

#[derive(Debug, Args)]
pub struct SetStatusArgs {
    /// The UUID of the consultation
    #[arg(short, long)]
    pub id: Uuid,

    /// The new status (DRAFT, SUBMITTED, IN_REVIEW, PROCESSED, COMPLETED, REJECTED)
    #[arg(short, long)]
    pub status: String,
}

pub async fn execute(pool: PgPool, args: SetStatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let status = ConsultationStatus::parse(&args.status)
        .ok_or_else(|| format!("Unknown status '{}'", args.status))?;

    let service = KonsulService::new(pool);
    let record = service.update_status(args.id, status).await?;

    println!("✅ {} is now {}", record.id, record.status);
    Ok(())
}
