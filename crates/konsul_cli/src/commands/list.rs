use clap::Args;
use sqlx::PgPool;

use konsul_core::models::ConsultationStatus;
use konsul_db::models::ListParams;
use konsul_db::ConsultationRepository;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Free-text search across name, organization, and issue type
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact status filter (e.g. SUBMITTED, COMPLETED)
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

pub async fn execute(pool: PgPool, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let status = match &args.status {
        Some(raw) => Some(
            ConsultationStatus::parse(raw)
                .ok_or_else(|| format!("Unknown status '{}'", raw))?,
        ),
        None => None,
    };

    let repo = ConsultationRepository::new(pool);
    let page = repo
        .list(ListParams {
            page: args.page,
            limit: args.limit,
            search: args.search,
            status,
        })
        .await?;

    println!(
        "📋 {} consultations (page {}/{}, total {})",
        page.consultations.len(),
        page.pagination.page,
        page.pagination.pages.max(1),
        page.pagination.total
    );
    println!("{:-<100}", "-");
    for record in &page.consultations {
        println!(
            "{}  {:<10}  {:<24}  {:<24}  {}",
            record.id,
            record.status,
            truncate(&record.form.nama, 24),
            truncate(&record.form.instansi, 24),
            truncate(&record.form.jenis_permasalahan, 28),
        );
    }

    Ok(())
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
