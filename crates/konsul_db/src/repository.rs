use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use konsul_core::models::{
    ConsultationForm, ConsultationRecord, ConsultationStatus, ConsultationUpdate,
};

use crate::error::{Error, Result};
use crate::models::{ConsultationRow, ListPage, ListParams, Pagination, Statistics, StatusCounts};

const ALL_COLUMNS: &str = "id, tanggal, waktu, nama, instansi, jabatan, alamat, \
     provinsi_pemohon, no_telp, jumlah_tamu, id_paket_pengadaan, nama_paket_pengadaan, \
     nilai_kontrak, ttd_kontrak, jenis_kontrak, wilayah_pengadaan, sumber_anggaran, \
     jenis_pengadaan, metode_pemilihan, jenis_permasalahan, kronologi, status, \
     is_locked, signature_data, created_at, updated_at";

// Search and status filters are optional; a NULL bind skips its clause.
const LIST_FILTER: &str = "($1::text IS NULL \
        OR nama ILIKE '%' || $1 || '%' \
        OR instansi ILIKE '%' || $1 || '%' \
        OR jenis_permasalahan ILIKE '%' || $1 || '%') \
     AND ($2::text IS NULL OR status = $2)";

pub struct ConsultationRepository {
    pool: PgPool,
}

impl ConsultationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The single insert of the public intake: the full form plus the
    /// signature, stored already locked with status SUBMITTED.
    pub async fn create(
        &self,
        form: &ConsultationForm,
        signature_data: Option<&str>,
    ) -> Result<ConsultationRecord> {
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, ConsultationRow>(&format!(
            r#"
            INSERT INTO consultations
            (id, tanggal, waktu, nama, instansi, jabatan, alamat,
             provinsi_pemohon, no_telp, jumlah_tamu,
             id_paket_pengadaan, nama_paket_pengadaan, nilai_kontrak,
             ttd_kontrak, jenis_kontrak, wilayah_pengadaan, sumber_anggaran,
             jenis_pengadaan, metode_pemilihan, jenis_permasalahan, kronologi,
             status, is_locked, signature_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21,
                    $22, TRUE, $23)
            RETURNING {ALL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&form.tanggal)
        .bind(&form.waktu)
        .bind(&form.nama)
        .bind(&form.instansi)
        .bind(&form.jabatan)
        .bind(&form.alamat)
        .bind(&form.provinsi_pemohon)
        .bind(&form.no_telp)
        .bind(form.jumlah_tamu)
        .bind(&form.id_paket_pengadaan)
        .bind(&form.nama_paket_pengadaan)
        .bind(&form.nilai_kontrak)
        .bind(form.ttd_kontrak)
        .bind(&form.jenis_kontrak)
        .bind(&form.wilayah_pengadaan)
        .bind(&form.sumber_anggaran)
        .bind(&form.jenis_pengadaan)
        .bind(&form.metode_pemilihan)
        .bind(&form.jenis_permasalahan)
        .bind(&form.kronologi)
        .bind(ConsultationStatus::Submitted.as_str())
        .bind(signature_data)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(%id, "consultation created");
        row.try_into()
    }

    pub async fn get(&self, id: Uuid) -> Result<ConsultationRecord> {
        let row = sqlx::query_as::<_, ConsultationRow>(&format!(
            "SELECT {ALL_COLUMNS} FROM consultations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("consultation {}", id)))?;

        row.try_into()
    }

    /// Paginated listing, newest first, with the original's free-text
    /// search (nama / instansi / jenis_permasalahan, case-insensitive)
    /// and exact-match status filter.
    pub async fn list(&self, params: ListParams) -> Result<ListPage> {
        let params = params.normalized();
        let status = params.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, ConsultationRow>(&format!(
            r#"
            SELECT {ALL_COLUMNS} FROM consultations
            WHERE {LIST_FILTER}
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&params.search)
        .bind(status)
        .bind(params.limit)
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM consultations WHERE {LIST_FILTER}"
        ))
        .bind(&params.search)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        let consultations = rows
            .into_iter()
            .map(ConsultationRecord::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(ListPage {
            pagination: Pagination::new(&params, total),
            consultations,
        })
    }

    /// Partial update: only provided fields change, `updated_at` always
    /// refreshes. Nullable columns carry a set-flag so an explicit null in
    /// the patch writes NULL instead of being swallowed by COALESCE. When
    /// `expected_updated_at` is given, the update only applies if the
    /// stored timestamp still matches (optimistic check).
    pub async fn update(
        &self,
        id: Uuid,
        patch: &ConsultationUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<ConsultationRecord> {
        let row = sqlx::query_as::<_, ConsultationRow>(&format!(
            r#"
            UPDATE consultations SET
                tanggal            = COALESCE($2,  tanggal),
                waktu              = COALESCE($3,  waktu),
                nama               = COALESCE($4,  nama),
                instansi           = COALESCE($5,  instansi),
                jabatan            = COALESCE($6,  jabatan),
                alamat             = COALESCE($7,  alamat),
                provinsi_pemohon   = COALESCE($8,  provinsi_pemohon),
                no_telp            = COALESCE($9,  no_telp),
                jumlah_tamu        = COALESCE($10, jumlah_tamu),
                ttd_kontrak        = COALESCE($11, ttd_kontrak),
                wilayah_pengadaan  = COALESCE($12, wilayah_pengadaan),
                jenis_pengadaan    = COALESCE($13, jenis_pengadaan),
                metode_pemilihan   = COALESCE($14, metode_pemilihan),
                jenis_permasalahan = COALESCE($15, jenis_permasalahan),
                status             = COALESCE($16, status),
                id_paket_pengadaan   = CASE WHEN $17 THEN $18 ELSE id_paket_pengadaan END,
                nama_paket_pengadaan = CASE WHEN $19 THEN $20 ELSE nama_paket_pengadaan END,
                nilai_kontrak        = CASE WHEN $21 THEN $22 ELSE nilai_kontrak END,
                jenis_kontrak        = CASE WHEN $23 THEN $24 ELSE jenis_kontrak END,
                sumber_anggaran      = CASE WHEN $25 THEN $26 ELSE sumber_anggaran END,
                kronologi            = CASE WHEN $27 THEN $28 ELSE kronologi END,
                updated_at         = NOW()
            WHERE id = $1
              AND ($29::timestamptz IS NULL OR updated_at = $29)
            RETURNING {ALL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.tanggal)
        .bind(&patch.waktu)
        .bind(&patch.nama)
        .bind(&patch.instansi)
        .bind(&patch.jabatan)
        .bind(&patch.alamat)
        .bind(&patch.provinsi_pemohon)
        .bind(&patch.no_telp)
        .bind(patch.jumlah_tamu)
        .bind(patch.ttd_kontrak)
        .bind(&patch.wilayah_pengadaan)
        .bind(&patch.jenis_pengadaan)
        .bind(&patch.metode_pemilihan)
        .bind(&patch.jenis_permasalahan)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.id_paket_pengadaan.is_some())
        .bind(patch.id_paket_pengadaan.as_ref().and_then(|v| v.as_deref()))
        .bind(patch.nama_paket_pengadaan.is_some())
        .bind(patch.nama_paket_pengadaan.as_ref().and_then(|v| v.as_deref()))
        .bind(patch.nilai_kontrak.is_some())
        .bind(patch.nilai_kontrak.as_ref().and_then(|v| v.as_deref()))
        .bind(patch.jenis_kontrak.is_some())
        .bind(patch.jenis_kontrak.as_ref().and_then(|v| v.as_deref()))
        .bind(patch.sumber_anggaran.is_some())
        .bind(patch.sumber_anggaran.as_ref().and_then(|v| v.as_deref()))
        .bind(patch.kronologi.is_some())
        .bind(patch.kronologi.as_ref().and_then(|v| v.as_deref()))
        .bind(expected_updated_at)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => {
                // Distinguish a stale token from a missing record.
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM consultations WHERE id = $1)")
                        .bind(id)
                        .fetch_one(&self.pool)
                        .await?;
                if exists {
                    Err(Error::Conflict(format!(
                        "consultation {} changed since it was read",
                        id
                    )))
                } else {
                    Err(Error::NotFound(format!("consultation {}", id)))
                }
            }
        }
    }

    /// Status-only update. Transition legality is the service's concern;
    /// this just writes the column and refreshes `updated_at`.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ConsultationStatus,
    ) -> Result<ConsultationRecord> {
        let row = sqlx::query_as::<_, ConsultationRow>(&format!(
            r#"
            UPDATE consultations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {ALL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("consultation {}", id)))?;

        tracing::info!(%id, status = status.as_str(), "status updated");
        row.try_into()
    }

    /// Hard delete. No tombstone, matching the original behavior.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM consultations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("consultation {}", id)));
        }
        tracing::info!(%id, "consultation deleted");
        Ok(())
    }

    /// Total plus per-status counts for the dashboard overview.
    pub async fn statistics(&self) -> Result<Statistics> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM consultations GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        let mut total = 0;
        let mut by_status = StatusCounts::default();
        for (status, count) in rows {
            total += count;
            match ConsultationStatus::parse(&status) {
                Some(status) => by_status.bump(status, count),
                None => {
                    tracing::warn!(status, count, "rows with unknown status excluded from buckets")
                }
            }
        }

        Ok(Statistics { total, by_status })
    }
}
