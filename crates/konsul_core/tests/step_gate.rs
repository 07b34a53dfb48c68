// Step gate navigation contract:
// - backward (or staying put) is always allowed
// - forward validates every step in [current, target) and halts on the
//   first incomplete one, naming exactly its missing fields
// - a locked form rejects everything with a distinct Locked outcome

use konsul_core::form::{missing_fields, plan_step_change, step, NavigationOutcome, STEPS};
use konsul_core::models::ConsultationForm;

fn filled_step1(form: &mut ConsultationForm) {
    form.tanggal = "2025-03-12".into();
    form.waktu = "09:30".into();
    form.nama = "Budi".into();
    form.instansi = "PT Maju".into();
    form.jabatan = "Direktur".into();
    form.alamat = "Jl. Merdeka No. 1".into();
    form.provinsi_pemohon = "Jawa Barat".into();
    form.no_telp = "081234567890".into();
    form.jumlah_tamu = 1;
}

fn filled_step2(form: &mut ConsultationForm) {
    form.wilayah_pengadaan = "DKI Jakarta".into();
    form.jenis_pengadaan = "Barang".into();
    form.metode_pemilihan = "Tender".into();
}

fn filled_step3(form: &mut ConsultationForm) {
    form.ttd_kontrak = true;
    form.jenis_permasalahan = "denda".into();
}

fn complete_form() -> ConsultationForm {
    let mut form = ConsultationForm::default();
    filled_step1(&mut form);
    filled_step2(&mut form);
    filled_step3(&mut form);
    form
}

#[test]
fn backward_navigation_is_unconditional() {
    // Even a completely empty form may go back or stay put.
    let form = ConsultationForm::default();
    let n = STEPS.len();
    for current in 1..=n {
        for target in 1..=current {
            assert_eq!(
                plan_step_change(current, target, false, &form),
                NavigationOutcome::Moved(target),
                "({} -> {}) should always be allowed",
                current,
                target
            );
        }
    }
}

#[test]
fn forward_navigation_halts_at_first_invalid_step() {
    let mut form = ConsultationForm::default();
    form.nama = "Budi".into();

    match plan_step_change(1, 3, false, &form) {
        NavigationOutcome::Blocked { step, title, missing } => {
            assert_eq!(step, 1);
            assert_eq!(title, "Data Pemohon");
            // Every step-1 field except nama and jumlahTamu (defaults to 1).
            assert_eq!(
                missing,
                vec![
                    "Tanggal",
                    "Waktu",
                    "Instansi",
                    "Jabatan",
                    "Alamat",
                    "Provinsi Pemohon",
                    "Nomor Telepon",
                ]
            );
        }
        other => panic!("expected Blocked at step 1, got {:?}", other),
    }
}

#[test]
fn forward_navigation_reports_the_intermediate_step() {
    let mut form = ConsultationForm::default();
    filled_step1(&mut form);

    // Step 1 is complete, so a 1 -> 3 jump must halt at step 2.
    match plan_step_change(1, 3, false, &form) {
        NavigationOutcome::Blocked { step, title, missing } => {
            assert_eq!(step, 2);
            assert_eq!(title, "Data Pengadaan");
            assert_eq!(
                missing,
                vec!["Jenis Pengadaan", "Metode Pemilihan", "Wilayah Pengadaan"]
            );
        }
        other => panic!("expected Blocked at step 2, got {:?}", other),
    }
}

#[test]
fn forward_navigation_succeeds_when_all_steps_validate() {
    let form = complete_form();
    assert_eq!(
        plan_step_change(1, 3, false, &form),
        NavigationOutcome::Moved(3)
    );
    assert_eq!(
        plan_step_change(2, 3, false, &form),
        NavigationOutcome::Moved(3)
    );
}

#[test]
fn contracted_issue_outside_vocabulary_fails_the_final_step_check() {
    let mut form = complete_form();
    form.jenis_permasalahan = "keterlambatan".into();

    // ttd_kontrak = true, so the issue must be in the fixed vocabulary.
    let final_step = step(3).unwrap();
    assert_eq!(missing_fields(final_step, &form), vec!["jenisPermasalahan"]);

    // Without a signed contract the same text is acceptable free text.
    form.ttd_kontrak = false;
    assert!(missing_fields(final_step, &form).is_empty());
}

#[test]
fn out_of_range_targets_clamp_to_real_steps() {
    let form = complete_form();
    let last = STEPS.len();

    // Past the end lands on the final step, not an imaginary one.
    assert_eq!(
        plan_step_change(1, last + 5, false, &form),
        NavigationOutcome::Moved(last)
    );
    // Below the start lands on step 1.
    assert_eq!(
        plan_step_change(2, 0, false, &form),
        NavigationOutcome::Moved(1)
    );
}

#[test]
fn locked_form_rejects_all_navigation() {
    let form = complete_form();
    for current in 1..=3 {
        for target in 1..=3 {
            assert_eq!(
                plan_step_change(current, target, true, &form),
                NavigationOutcome::Locked
            );
        }
    }
}
