use clap::Args;
use sqlx::PgPool;

use konsul_db::ConsultationRepository;

#[derive(Debug, Args)]
pub struct StatsArgs {}

pub async fn execute(pool: PgPool, _args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stats = ConsultationRepository::new(pool).statistics().await?;

    println!("📊 Consultations: {}", stats.total);
    println!("   DRAFT      {:>6}", stats.by_status.draft);
    println!("   SUBMITTED  {:>6}", stats.by_status.submitted);
    println!("   IN_REVIEW  {:>6}", stats.by_status.in_review);
    println!("   PROCESSED  {:>6}", stats.by_status.processed);
    println!("   COMPLETED  {:>6}", stats.by_status.completed);
    println!("   REJECTED   {:>6}", stats.by_status.rejected);

    Ok(())
}
