use crate::models::consultation::provinsi_is_known;
use crate::models::{vocab, ConsultationForm, ContractIssue};
use crate::validation::{ValidationError, ValidationRule};

fn required(code: &str, field: &str, label: &str, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError {
            code: code.to_string(),
            severity: "Error".to_string(),
            message: format!("{} harus diisi", label),
            field: Some(field.to_string()),
        })
    } else {
        None
    }
}

// =========================================================================
// RULE: KONS-001
// "All applicant identity fields must be present"
// Step 1 of the intake form (Data Pemohon)
// =========================================================================
pub struct RuleKons001;

impl ValidationRule for RuleKons001 {
    fn rule_id(&self) -> &str { "KONS-001" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let checks = [
            ("tanggal", "Tanggal", form.tanggal.as_str()),
            ("waktu", "Waktu", form.waktu.as_str()),
            ("nama", "Nama lengkap", form.nama.as_str()),
            ("instansi", "Instansi", form.instansi.as_str()),
            ("jabatan", "Jabatan", form.jabatan.as_str()),
            ("alamat", "Alamat", form.alamat.as_str()),
            ("provinsiPemohon", "Provinsi pemohon", form.provinsi_pemohon.as_str()),
            ("noTelp", "Nomor telepon", form.no_telp.as_str()),
        ];

        checks
            .iter()
            .filter_map(|(field, label, value)| required(self.rule_id(), field, label, value))
            .collect()
    }
}

// =========================================================================
// RULE: KONS-002
// "Guest count must be at least 1"
// =========================================================================
pub struct RuleKons002;

impl ValidationRule for RuleKons002 {
    fn rule_id(&self) -> &str { "KONS-002" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if form.jumlah_tamu < 1 {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: "Jumlah tamu minimal 1".to_string(),
                field: Some("jumlahTamu".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: KONS-003
// "Applicant province must come from the province list"
// =========================================================================
pub struct RuleKons003;

impl ValidationRule for RuleKons003 {
    fn rule_id(&self) -> &str { "KONS-003" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let value = form.provinsi_pemohon.trim();
        if !value.is_empty() && !provinsi_is_known(value) {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: format!("Provinsi '{}' tidak dikenal", value),
                field: Some("provinsiPemohon".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: KONS-004
// "Required procurement fields must be present"
// Step 2 of the intake form (Data Pengadaan)
// =========================================================================
pub struct RuleKons004;

impl ValidationRule for RuleKons004 {
    fn rule_id(&self) -> &str { "KONS-004" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let checks = [
            ("wilayahPengadaan", "Wilayah pengadaan", form.wilayah_pengadaan.as_str()),
            ("jenisPengadaan", "Jenis pengadaan", form.jenis_pengadaan.as_str()),
            ("metodePemilihan", "Metode pemilihan", form.metode_pemilihan.as_str()),
        ];

        checks
            .iter()
            .filter_map(|(field, label, value)| required(self.rule_id(), field, label, value))
            .collect()
    }
}

// =========================================================================
// RULE: KONS-005
// "Procurement type must come from the fixed list"
// =========================================================================
pub struct RuleKons005;

impl ValidationRule for RuleKons005 {
    fn rule_id(&self) -> &str { "KONS-005" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let value = form.jenis_pengadaan.trim();
        if !value.is_empty() && !vocab::contains(vocab::JENIS_PENGADAAN, value) {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: format!("Jenis pengadaan '{}' tidak dikenal", value),
                field: Some("jenisPengadaan".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: KONS-006
// "Selection method must come from the fixed list"
// =========================================================================
pub struct RuleKons006;

impl ValidationRule for RuleKons006 {
    fn rule_id(&self) -> &str { "KONS-006" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let value = form.metode_pemilihan.trim();
        if !value.is_empty() && !vocab::contains(vocab::METODE_PEMILIHAN, value) {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: format!("Metode pemilihan '{}' tidak dikenal", value),
                field: Some("metodePemilihan".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: KONS-007
// "Issue type is required; under a signed contract it must come from the
//  fixed 8-value vocabulary"
// =========================================================================
pub struct RuleKons007;

impl ValidationRule for RuleKons007 {
    fn rule_id(&self) -> &str { "KONS-007" }

    fn check(&self, form: &ConsultationForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let value = form.jenis_permasalahan.trim();

        if value.is_empty() {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: "Jenis permasalahan harus diisi".to_string(),
                field: Some("jenisPermasalahan".to_string()),
            });
        } else if form.ttd_kontrak && ContractIssue::parse(value).is_none() {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: "Error".to_string(),
                message: format!(
                    "Jenis permasalahan '{}' tidak termasuk daftar permasalahan kontrak",
                    value
                ),
                field: Some("jenisPermasalahan".to_string()),
            });
        }
        errors
    }
}
