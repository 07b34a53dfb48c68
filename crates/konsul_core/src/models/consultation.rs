use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vocab;

// ---------------------------------------------------------------------------
// Workflow status
// ---------------------------------------------------------------------------
// Stored as TEXT in Postgres; the enumeration lives here, not in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    Draft,
    Submitted,
    InReview,
    Processed,
    Completed,
    Rejected,
}

impl ConsultationStatus {
    pub const ALL: [ConsultationStatus; 6] = [
        ConsultationStatus::Draft,
        ConsultationStatus::Submitted,
        ConsultationStatus::InReview,
        ConsultationStatus::Processed,
        ConsultationStatus::Completed,
        ConsultationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Draft => "DRAFT",
            ConsultationStatus::Submitted => "SUBMITTED",
            ConsultationStatus::InReview => "IN_REVIEW",
            ConsultationStatus::Processed => "PROCESSED",
            ConsultationStatus::Completed => "COMPLETED",
            ConsultationStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<ConsultationStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    /// Allow-listed forward transitions. A status may always "transition"
    /// to itself (admin re-saving a record is not an error).
    ///
    /// DRAFT -> SUBMITTED -> IN_REVIEW -> PROCESSED -> COMPLETED
    /// with REJECTED reachable from any non-terminal state.
    pub fn can_transition(self, to: ConsultationStatus) -> bool {
        use ConsultationStatus::*;
        if self == to {
            return true;
        }
        match self {
            Draft => matches!(to, Submitted),
            Submitted => matches!(to, InReview | Rejected),
            InReview => matches!(to, Processed | Rejected),
            Processed => matches!(to, Completed | Rejected),
            Completed | Rejected => false,
        }
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Issue type (jenisPermasalahan)
// ---------------------------------------------------------------------------

/// The fixed vocabulary that applies once a contract has been signed
/// (TTDKontrak = true).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractIssue {
    PermasalahanKontrak,
    PerubahanKontrak,
    Denda,
    PenyesuaianHarga,
    DaftarHitam,
    SengketaPengadaan,
    KeteranganAhli,
    PendampinganPbj,
}

impl ContractIssue {
    pub const ALL: [ContractIssue; 8] = [
        ContractIssue::PermasalahanKontrak,
        ContractIssue::PerubahanKontrak,
        ContractIssue::Denda,
        ContractIssue::PenyesuaianHarga,
        ContractIssue::DaftarHitam,
        ContractIssue::SengketaPengadaan,
        ContractIssue::KeteranganAhli,
        ContractIssue::PendampinganPbj,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractIssue::PermasalahanKontrak => "permasalahan kontrak",
            ContractIssue::PerubahanKontrak => "perubahan kontrak",
            ContractIssue::Denda => "denda",
            ContractIssue::PenyesuaianHarga => "penyesuaian harga",
            ContractIssue::DaftarHitam => "daftar hitam",
            ContractIssue::SengketaPengadaan => "sengketa pengadaan PBJ",
            ContractIssue::KeteranganAhli => "pemberian keterangan ahli",
            ContractIssue::PendampinganPbj => "pendampingan PBJ",
        }
    }

    pub fn parse(value: &str) -> Option<ContractIssue> {
        Self::ALL.iter().copied().find(|i| i.as_str() == value)
    }
}

/// Tagged form of the issue field: an enumerated value while a contract is
/// signed, free text otherwise. The wire carries a plain string; this is
/// the schema-level view of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueType {
    Contracted(ContractIssue),
    FreeText(String),
}

impl IssueType {
    /// Classifies a raw issue string under the contract-signed flag.
    /// Returns None when the flag demands the fixed vocabulary and the
    /// value is not in it (or is empty either way).
    pub fn classify(ttd_kontrak: bool, raw: &str) -> Option<IssueType> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if ttd_kontrak {
            ContractIssue::parse(trimmed).map(IssueType::Contracted)
        } else {
            Some(IssueType::FreeText(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IssueType::Contracted(issue) => issue.as_str(),
            IssueType::FreeText(text) => text,
        }
    }
}

// ---------------------------------------------------------------------------
// The form values
// ---------------------------------------------------------------------------
// Field names follow the original wire format (camelCase, with the one
// historical oddity: TTDKontrak).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    // Step 1: Data Pemohon
    pub tanggal: String,
    pub waktu: String,
    pub nama: String,
    pub instansi: String,
    pub jabatan: String,
    pub alamat: String,
    pub provinsi_pemohon: String,
    pub no_telp: String,
    pub jumlah_tamu: i32,

    // Step 2: Data Pengadaan
    #[serde(default)]
    pub id_paket_pengadaan: Option<String>,
    #[serde(default)]
    pub nama_paket_pengadaan: Option<String>,
    #[serde(default)]
    pub nilai_kontrak: Option<String>,
    #[serde(rename = "TTDKontrak", default)]
    pub ttd_kontrak: bool,
    #[serde(default)]
    pub jenis_kontrak: Option<String>,
    pub wilayah_pengadaan: String,
    #[serde(default)]
    pub sumber_anggaran: Option<String>,
    pub jenis_pengadaan: String,
    pub metode_pemilihan: String,

    // Step 3: Permasalahan
    pub jenis_permasalahan: String,
    #[serde(default)]
    pub kronologi: Option<String>,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        ConsultationForm {
            tanggal: String::new(),
            waktu: String::new(),
            nama: String::new(),
            instansi: String::new(),
            jabatan: String::new(),
            alamat: String::new(),
            provinsi_pemohon: String::new(),
            no_telp: String::new(),
            jumlah_tamu: 1,
            id_paket_pengadaan: None,
            nama_paket_pengadaan: None,
            nilai_kontrak: None,
            ttd_kontrak: false,
            jenis_kontrak: None,
            wilayah_pengadaan: String::new(),
            sumber_anggaran: None,
            jenis_pengadaan: String::new(),
            metode_pemilihan: String::new(),
            jenis_permasalahan: String::new(),
            kronologi: None,
        }
    }
}

impl ConsultationForm {
    /// Schema-level view of the issue field, if it currently classifies.
    pub fn issue_type(&self) -> Option<IssueType> {
        IssueType::classify(self.ttd_kontrak, &self.jenis_permasalahan)
    }

    /// Generic per-field check used by the step gate: is this named field
    /// currently satisfied? Unknown names are treated as satisfied so that
    /// optional fields never block navigation.
    pub fn field_is_filled(&self, field: &str) -> bool {
        match field {
            "tanggal" => !self.tanggal.trim().is_empty(),
            "waktu" => !self.waktu.trim().is_empty(),
            "nama" => !self.nama.trim().is_empty(),
            "instansi" => !self.instansi.trim().is_empty(),
            "jabatan" => !self.jabatan.trim().is_empty(),
            "alamat" => !self.alamat.trim().is_empty(),
            "provinsiPemohon" => !self.provinsi_pemohon.trim().is_empty(),
            "noTelp" => !self.no_telp.trim().is_empty(),
            "jumlahTamu" => self.jumlah_tamu >= 1,
            "wilayahPengadaan" => !self.wilayah_pengadaan.trim().is_empty(),
            "jenisPengadaan" => !self.jenis_pengadaan.trim().is_empty(),
            "metodePemilihan" => !self.metode_pemilihan.trim().is_empty(),
            "jenisPermasalahan" => self.issue_type().is_some(),
            _ => true,
        }
    }
}

// ---------------------------------------------------------------------------
// The persisted record
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub form: ConsultationForm,
    pub status: ConsultationStatus,
    pub is_locked: bool,
    #[serde(default)]
    pub signature_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial admin update: only fields that are present change. `updatedAt`
/// is refreshed on every update regardless.
///
/// Nullable columns use a double `Option` so the wire can distinguish
/// "leave untouched" (field absent, outer None) from "clear to NULL"
/// (field explicitly null, `Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationUpdate {
    pub tanggal: Option<String>,
    pub waktu: Option<String>,
    pub nama: Option<String>,
    pub instansi: Option<String>,
    pub jabatan: Option<String>,
    pub alamat: Option<String>,
    pub provinsi_pemohon: Option<String>,
    pub no_telp: Option<String>,
    pub jumlah_tamu: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub id_paket_pengadaan: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub nama_paket_pengadaan: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub nilai_kontrak: Option<Option<String>>,
    #[serde(rename = "TTDKontrak")]
    pub ttd_kontrak: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub jenis_kontrak: Option<Option<String>>,
    pub wilayah_pengadaan: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub sumber_anggaran: Option<Option<String>>,
    pub jenis_pengadaan: Option<String>,
    pub metode_pemilihan: Option<String>,
    pub jenis_permasalahan: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub kronologi: Option<Option<String>>,
    pub status: Option<ConsultationStatus>,
}

// Absent field -> outer None; explicit null -> Some(None); value -> Some(Some).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub fn provinsi_is_known(value: &str) -> bool {
    vocab::contains(vocab::PROVINSI, value)
}
