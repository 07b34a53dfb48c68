// Submission workflow state machine, end to end:
//   Scenario A: valid data -> confirm -> sign -> persist => LockedPrintView
//   Scenario B: missing nama => blocked at step 1, nothing to persist
//   Scenario C: persistence failure => back to Editing(3), still editable

use konsul_core::form::{SubmissionWorkflow, WorkflowError, WorkflowState};
use konsul_core::models::ConsultationForm;

fn fill_valid(form: &mut ConsultationForm) {
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
}

fn workflow_at_final_step() -> SubmissionWorkflow {
    let mut wf = SubmissionWorkflow::new();
    wf.update_form(fill_valid).unwrap();
    wf.goto_step(3).unwrap();
    wf
}

#[test]
fn scenario_a_happy_path_reaches_locked_print_view() {
    let mut wf = workflow_at_final_step();

    wf.request_submit(true).unwrap();
    assert_eq!(wf.state(), WorkflowState::AwaitingSignature);

    wf.add_signature_stroke(vec![(10.0, 20.0), (40.0, 60.0), (80.0, 50.0)])
        .unwrap();
    wf.save_signature().unwrap();
    assert_eq!(wf.state(), WorkflowState::Submitting);

    let (form, signature) = wf.submission_payload().unwrap();
    assert_eq!(form.nama, "Budi");
    assert!(signature.starts_with("data:image/svg+xml;base64,"));

    wf.persistence_succeeded().unwrap();
    assert_eq!(wf.state(), WorkflowState::LockedUnprinted);
    assert!(wf.is_locked());

    wf.show_print_view().unwrap();
    assert_eq!(wf.state(), WorkflowState::LockedPrintView);
}

#[test]
fn scenario_b_missing_name_blocks_at_step_one() {
    let mut wf = SubmissionWorkflow::new();
    wf.update_form(|form| {
        fill_valid(form);
        form.nama = String::new();
    })
    .unwrap();

    let err = wf.goto_step(3).unwrap_err();
    match err {
        WorkflowError::Blocked { step, missing, .. } => {
            assert_eq!(step, 1);
            assert_eq!(missing, vec!["Nama Pemohon"]);
        }
        other => panic!("expected Blocked, got {:?}", other),
    }

    // The session is driven back to the step containing the hole.
    assert_eq!(wf.state(), WorkflowState::Editing(1));

    // A submit attempt from here is blocked the same way; nothing ever
    // reaches the Submitting state.
    assert!(matches!(
        wf.request_submit(true),
        Err(WorkflowError::Blocked { step: 1, .. })
    ));
    assert!(wf.submission_payload().is_err());
}

#[test]
fn scenario_c_persistence_failure_reverts_to_editing() {
    let mut wf = workflow_at_final_step();
    wf.request_submit(true).unwrap();
    wf.add_signature_stroke(vec![(0.0, 0.0), (100.0, 100.0)]).unwrap();
    wf.save_signature().unwrap();

    wf.persistence_failed().unwrap();
    assert_eq!(wf.state(), WorkflowState::Editing(3));
    assert!(!wf.is_locked());

    // Form stays editable for a user-initiated retry.
    wf.update_form(|form| form.kronologi = Some("Dicoba ulang".into()))
        .unwrap();
    wf.request_submit(true).unwrap();
    assert_eq!(wf.state(), WorkflowState::AwaitingSignature);
}

#[test]
fn empty_signature_is_rejected_and_state_is_kept() {
    let mut wf = workflow_at_final_step();
    wf.request_submit(true).unwrap();

    assert!(matches!(
        wf.save_signature(),
        Err(WorkflowError::EmptySignature)
    ));
    assert_eq!(wf.state(), WorkflowState::AwaitingSignature);

    // Clearing and then saving is still empty.
    wf.clear_signature().unwrap();
    assert!(matches!(
        wf.save_signature(),
        Err(WorkflowError::EmptySignature)
    ));
}

#[test]
fn declining_the_confirmation_keeps_editing() {
    let mut wf = workflow_at_final_step();
    wf.request_submit(false).unwrap();
    assert_eq!(wf.state(), WorkflowState::Editing(3));
}

#[test]
fn cancelling_the_signature_returns_to_final_step() {
    let mut wf = workflow_at_final_step();
    wf.request_submit(true).unwrap();
    wf.cancel_signature().unwrap();
    assert_eq!(wf.state(), WorkflowState::Editing(3));
}

#[test]
fn locked_session_rejects_mutation_navigation_and_reset() {
    let mut wf = workflow_at_final_step();
    wf.request_submit(true).unwrap();
    wf.add_signature_stroke(vec![(1.0, 1.0), (2.0, 2.0)]).unwrap();
    wf.save_signature().unwrap();
    wf.persistence_succeeded().unwrap();

    assert!(matches!(
        wf.update_form(|f| f.nama = "Lain".into()),
        Err(WorkflowError::Locked)
    ));
    assert!(matches!(wf.goto_step(1), Err(WorkflowError::Locked)));
    assert!(matches!(wf.reset(true), Err(WorkflowError::Locked)));

    // Locked is a distinct signal, not a validation failure.
    assert!(matches!(wf.request_submit(true), Err(WorkflowError::Locked)));
}

#[test]
fn reset_discards_values_and_returns_to_step_one() {
    let mut wf = workflow_at_final_step();

    // Without confirmation the reset is a no-op.
    wf.reset(false).unwrap();
    assert_eq!(wf.state(), WorkflowState::Editing(3));
    assert_eq!(wf.form().nama, "Budi");

    wf.reset(true).unwrap();
    assert_eq!(wf.state(), WorkflowState::Editing(1));
    assert_eq!(wf.form(), &ConsultationForm::default());
    assert!(wf.signature().is_none());
}
