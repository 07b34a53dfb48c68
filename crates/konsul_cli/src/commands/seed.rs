use clap::Args;
use sqlx::PgPool;

use konsul_core::form::{SaveOutcome, SignaturePad};
use konsul_core::models::ConsultationForm;
use konsul_service::submission::IntakeRequest;
use konsul_service::KonsulService;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Applicant name for the seeded record
    #[arg(long, default_value = "Budi")]
    pub nama: String,

    /// Organization for the seeded record
    #[arg(long, default_value = "PT Maju")]
    pub instansi: String,
}

/// Inserts one complete consultation through the same intake path the
/// public form uses, signature included.
pub async fn execute(pool: PgPool, args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConsultationForm::default();
    form.tanggal = "2025-03-12".into();
    form.waktu = "09:30".into();
    form.nama = args.nama;
    form.instansi = args.instansi;
    form.jabatan = "Direktur".into();
    form.alamat = "Jl. Merdeka No. 1".into();
    form.provinsi_pemohon = "Jawa Barat".into();
    form.no_telp = "081234567890".into();
    form.jumlah_tamu = 1;
    form.wilayah_pengadaan = "DKI Jakarta".into();
    form.jenis_pengadaan = "Barang".into();
    form.metode_pemilihan = "Tender".into();
    form.ttd_kontrak = true;
    form.jenis_permasalahan = "denda".into();
    form.kronologi = Some("Dokumen seed untuk pengujian.".into());

    let mut pad = SignaturePad::new();
    pad.add_stroke(vec![(20.0, 80.0), (120.0, 40.0), (260.0, 110.0)]);
    let signature = match pad.save() {
        SaveOutcome::Saved(artifact) => Some(artifact.data_url()),
        SaveOutcome::Empty => None,
    };

    let service = KonsulService::new(pool);
    let record = service
        .submit_consultation(IntakeRequest {
            form,
            signature_data: signature,
        })
        .await?;

    println!("🌱 Seeded consultation");
    println!("   Primary Key (UUID): {}", record.id);
    println!("   Status: {} (locked: {})", record.status, record.is_locked);
    Ok(())
}
