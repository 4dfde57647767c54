//! Gate resolution against the embedded dataset.

use airside_foundation::ErrorKind;
use airside_lookup::{Gate, LookupSource};

fn gates() -> airside_lookup::LookupIndex<Gate> {
    LookupSource::Embedded.build().unwrap()
}

#[test]
fn current_gate() {
    assert_eq!(gates().find_current("A9").unwrap().wof_id, 1_763_588_417);
}

#[test]
fn gate_before_the_renumbering() {
    assert_eq!(gates().find_for_date("A9", "2020-06").unwrap().wof_id, 1_914_601_013);
}

#[test]
fn boundary_days_belong_to_both_windows() {
    let index = gates();
    // The first candidate in dataset order wins the shared day.
    assert_eq!(index.find_for_date("A9", "2021-11-09").unwrap().wof_id, 1_763_588_417);
    assert!(index.find_for_date_strict("A9", "2021-11-09").unwrap_err().is_multiple_candidates());
    assert_eq!(index.find_for_date_strict("A9", "2021-11-10").unwrap().wof_id, 1_763_588_417);
}

#[test]
fn unknown_gate() {
    let err = gates().find_current("Z99").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotFound { .. }));
    assert_eq!(err.to_string(), "Gate 'Z99' not found");
}

#[test]
fn every_gate_code_has_one_current_record() {
    let index = gates();
    for code in ["A9", "A10", "B12", "C3", "D16", "E4", "G101"] {
        assert_eq!(index.find_current(code).unwrap().name, code);
    }
}
