use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use konsul_core::models::{ConsultationForm, ConsultationRecord, ConsultationStatus};

use crate::error::Error;

/// One row of the `consultations` table, column-for-column.
#[derive(Debug, Clone, FromRow)]
pub struct ConsultationRow {
    pub id: Uuid,
    pub tanggal: String,
    pub waktu: String,
    pub nama: String,
    pub instansi: String,
    pub jabatan: String,
    pub alamat: String,
    pub provinsi_pemohon: String,
    pub no_telp: String,
    pub jumlah_tamu: i32,
    pub id_paket_pengadaan: Option<String>,
    pub nama_paket_pengadaan: Option<String>,
    pub nilai_kontrak: Option<String>,
    pub ttd_kontrak: bool,
    pub jenis_kontrak: Option<String>,
    pub wilayah_pengadaan: String,
    pub sumber_anggaran: Option<String>,
    pub jenis_pengadaan: String,
    pub metode_pemilihan: String,
    pub jenis_permasalahan: String,
    pub kronologi: Option<String>,
    pub status: String,
    pub is_locked: bool,
    pub signature_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ConsultationRow> for ConsultationRecord {
    type Error = Error;

    fn try_from(row: ConsultationRow) -> Result<Self, Error> {
        // Status is a free-form TEXT column; the enumeration lives in the
        // application. A value outside it means the row was tampered with.
        let status = ConsultationStatus::parse(&row.status)
            .ok_or_else(|| Error::Corrupt(format!("unknown status '{}'", row.status)))?;

        Ok(ConsultationRecord {
            id: row.id,
            form: ConsultationForm {
                tanggal: row.tanggal,
                waktu: row.waktu,
                nama: row.nama,
                instansi: row.instansi,
                jabatan: row.jabatan,
                alamat: row.alamat,
                provinsi_pemohon: row.provinsi_pemohon,
                no_telp: row.no_telp,
                jumlah_tamu: row.jumlah_tamu,
                id_paket_pengadaan: row.id_paket_pengadaan,
                nama_paket_pengadaan: row.nama_paket_pengadaan,
                nilai_kontrak: row.nilai_kontrak,
                ttd_kontrak: row.ttd_kontrak,
                jenis_kontrak: row.jenis_kontrak,
                wilayah_pengadaan: row.wilayah_pengadaan,
                sumber_anggaran: row.sumber_anggaran,
                jenis_pengadaan: row.jenis_pengadaan,
                metode_pemilihan: row.metode_pemilihan,
                jenis_permasalahan: row.jenis_permasalahan,
                kronologi: row.kronologi,
            },
            status,
            is_locked: row.is_locked,
            signature_data: row.signature_data,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Listing parameters: page/limit plus the optional search and status
/// filters. `normalized` clamps to the same bounds the original intake
/// surface enforced (page >= 1, 1 <= limit <= 100, default 10).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<ConsultationStatus>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            page: default_page(),
            limit: default_limit(),
            search: None,
            status: None,
        }
    }
}

impl ListParams {
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.limit = self.limit.clamp(1, 100);
        // A blank search box means no filter.
        if matches!(self.search.as_deref(), Some(s) if s.trim().is_empty()) {
            self.search = None;
        }
        self
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(params: &ListParams, total: i64) -> Self {
        Pagination {
            page: params.page,
            limit: params.limit,
            total,
            pages: (total + params.limit - 1) / params.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub consultations: Vec<ConsultationRecord>,
    pub pagination: Pagination,
}

/// Aggregate counts for the dashboard overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: i64,
    pub by_status: StatusCounts,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub draft: i64,
    pub submitted: i64,
    pub in_review: i64,
    pub processed: i64,
    pub completed: i64,
    pub rejected: i64,
}

impl StatusCounts {
    pub fn bump(&mut self, status: ConsultationStatus, count: i64) {
        match status {
            ConsultationStatus::Draft => self.draft += count,
            ConsultationStatus::Submitted => self.submitted += count,
            ConsultationStatus::InReview => self.in_review += count,
            ConsultationStatus::Processed => self.processed += count,
            ConsultationStatus::Completed => self.completed += count,
            ConsultationStatus::Rejected => self.rejected += count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_clamp_to_sane_bounds() {
        let params = ListParams {
            page: 0,
            limit: 1000,
            search: Some("   ".into()),
            status: None,
        }
        .normalized();

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 100);
        assert_eq!(params.search, None);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let params = ListParams {
            page: 3,
            limit: 10,
            search: None,
            status: None,
        }
        .normalized();
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn pagination_rounds_pages_up() {
        let params = ListParams::default(); // limit 10
        assert_eq!(Pagination::new(&params, 0).pages, 0);
        assert_eq!(Pagination::new(&params, 10).pages, 1);
        assert_eq!(Pagination::new(&params, 11).pages, 2);
    }

    #[test]
    fn rows_with_unknown_status_are_rejected() {
        let row = sample_row("ARCHIVED");
        assert!(matches!(
            ConsultationRecord::try_from(row),
            Err(Error::Corrupt(_))
        ));

        let row = sample_row("SUBMITTED");
        let record = ConsultationRecord::try_from(row).unwrap();
        assert_eq!(record.status, ConsultationStatus::Submitted);
        assert!(record.is_locked);
    }

    fn sample_row(status: &str) -> ConsultationRow {
        let now = chrono::Utc::now();
        ConsultationRow {
            id: Uuid::new_v4(),
            tanggal: "2025-03-12".into(),
            waktu: "09:30".into(),
            nama: "Budi".into(),
            instansi: "PT Maju".into(),
            jabatan: "Direktur".into(),
            alamat: "Jl. Merdeka No. 1".into(),
            provinsi_pemohon: "Jawa Barat".into(),
            no_telp: "081234567890".into(),
            jumlah_tamu: 1,
            id_paket_pengadaan: None,
            nama_paket_pengadaan: None,
            nilai_kontrak: None,
            ttd_kontrak: true,
            jenis_kontrak: None,
            wilayah_pengadaan: "DKI Jakarta".into(),
            sumber_anggaran: None,
            jenis_pengadaan: "Barang".into(),
            metode_pemilihan: "Tender".into(),
            jenis_permasalahan: "denda".into(),
            kronologi: None,
            status: status.into(),
            is_locked: true,
            signature_data: None,
            created_at: now,
            updated_at: now,
        }
    }
}
