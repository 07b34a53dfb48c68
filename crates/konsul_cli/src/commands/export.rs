use clap::Args;
use sqlx::PgPool;
use std::path::PathBuf;
use uuid::Uuid;

use konsul_service::KonsulService;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// The UUID of the consultation to export
    #[arg(short, long)]
    pub id: Uuid,

    /// The output directory (e.g. ./output/konsultasi-0001)
    #[arg(short, long)]
    pub output: PathBuf,
}

pub async fn execute(pool: PgPool, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("📦 Exporting consultation {}", args.id);
    println!("📂 Output directory: {:?}", args.output);

    let service = KonsulService::new(pool);
    let out_dir = service.export_consultation(args.id, args.output).await?;

    println!("✅ Bundle written to {:?} (see sha256.txt for the manifest)", out_dir);
    Ok(())
}
