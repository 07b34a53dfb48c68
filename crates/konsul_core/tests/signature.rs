use konsul_core::form::{SaveOutcome, SignatureArtifact, SignaturePad};

#[test]
fn blank_save_is_a_noop_that_flags_empty() {
    let mut pad = SignaturePad::new();
    assert!(pad.is_empty());

    assert_eq!(pad.save(), SaveOutcome::Empty);
    // The surface stays open so the user can try again.
    assert!(pad.is_open());
}

#[test]
fn stroked_save_produces_an_artifact_and_closes_the_pad() {
    let mut pad = SignaturePad::new();
    pad.add_stroke(vec![(10.0, 20.0), (30.0, 40.0), (50.0, 30.0)]);
    assert!(!pad.is_empty());

    let artifact = match pad.save() {
        SaveOutcome::Saved(a) => a,
        SaveOutcome::Empty => panic!("stroked pad saved as empty"),
    };
    assert!(!pad.is_open());

    let svg = artifact.svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("M 10 20 L 30 40 L 50 30"));

    // The stored representation is a base64 data URL that decodes back to
    // the same SVG bytes.
    let url = artifact.data_url();
    assert!(url.starts_with("data:image/svg+xml;base64,"));
    let bytes = SignatureArtifact::decode_data_url(&url).unwrap();
    assert_eq!(bytes, svg.as_bytes());
}

#[test]
fn clear_resets_to_blank_without_closing() {
    let mut pad = SignaturePad::new();
    pad.add_stroke(vec![(1.0, 1.0), (2.0, 2.0)]);
    pad.clear();

    assert!(pad.is_empty());
    assert!(pad.is_open());
    assert_eq!(pad.save(), SaveOutcome::Empty);
}

#[test]
fn a_single_tap_still_counts_as_content() {
    let mut pad = SignaturePad::new();
    pad.add_stroke(vec![(100.0, 50.0)]);
    assert!(matches!(pad.save(), SaveOutcome::Saved(_)));
}

#[test]
fn malformed_data_urls_do_not_decode() {
    assert!(SignatureArtifact::decode_data_url("not a data url").is_none());
    assert!(SignatureArtifact::decode_data_url("data:image/svg+xml;base64,!!!").is_none());
}
