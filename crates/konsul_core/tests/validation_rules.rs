use konsul_core::models::ConsultationForm;
use konsul_core::standard_validator;

fn valid_form() -> ConsultationForm {
    let mut form = ConsultationForm::default();
    form.tanggal = "2025-03-12".into();
    form.waktu = "09:30".into();
    form.nama = "Budi".into();
    form.instansi = "PT Maju".into();
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
    form
}

fn codes_for_field(form: &ConsultationForm, field: &str) -> Vec<String> {
    standard_validator()
        .run(form)
        .into_iter()
        .filter(|e| e.field.as_deref() == Some(field))
        .map(|e| e.code)
        .collect()
}

#[test]
fn a_fully_valid_form_passes() {
    assert!(standard_validator().run(&valid_form()).is_empty());
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = standard_validator().run(&ConsultationForm::default());
    let fields: Vec<_> = errors.iter().filter_map(|e| e.field.clone()).collect();

    for required in [
        "tanggal",
        "waktu",
        "nama",
        "instansi",
        "jabatan",
        "alamat",
        "provinsiPemohon",
        "noTelp",
        "wilayahPengadaan",
        "jenisPengadaan",
        "metodePemilihan",
        "jenisPermasalahan",
    ] {
        assert!(
            fields.iter().any(|f| f == required),
            "no error reported for {}",
            required
        );
    }
}

#[test]
fn guest_count_below_one_fails() {
    let mut form = valid_form();
    form.jumlah_tamu = 0;
    assert_eq!(codes_for_field(&form, "jumlahTamu"), vec!["KONS-002"]);
}

#[test]
fn unknown_province_fails() {
    let mut form = valid_form();
    form.provinsi_pemohon = "Atlantis".into();
    assert_eq!(codes_for_field(&form, "provinsiPemohon"), vec!["KONS-003"]);
}

#[test]
fn vocabulary_fields_reject_unknown_values() {
    let mut form = valid_form();
    form.jenis_pengadaan = "Lain-lain".into();
    assert_eq!(codes_for_field(&form, "jenisPengadaan"), vec!["KONS-005"]);

    let mut form = valid_form();
    form.metode_pemilihan = "Lelang Terbuka".into();
    assert_eq!(codes_for_field(&form, "metodePemilihan"), vec!["KONS-006"]);
}

#[test]
fn issue_vocabulary_only_applies_under_a_signed_contract() {
    let mut form = valid_form();
    form.jenis_permasalahan = "keterlambatan vendor".into();

    // Signed contract: outside the 8-value vocabulary, rejected.
    assert_eq!(codes_for_field(&form, "jenisPermasalahan"), vec!["KONS-007"]);

    // No signed contract: the same value is valid free text.
    form.ttd_kontrak = false;
    assert!(codes_for_field(&form, "jenisPermasalahan").is_empty());
}

#[test]
fn whitespace_only_values_count_as_empty() {
    let mut form = valid_form();
    form.nama = "   ".into();
    assert_eq!(codes_for_field(&form, "nama"), vec!["KONS-001"]);
}
