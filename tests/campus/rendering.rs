//! Rendering derived complexes.

use airside_campus::render::{to_json, write_json, write_tree};
use airside_campus::{Deriver, Entity};
use airside_foundation::Placetype;

use crate::fixtures::*;

fn current() -> (Fixture, Entity) {
    let f = fixture();
    let complex = Deriver::new(&f.store, &f.index).derive_complex(None).unwrap();
    (f, complex)
}

#[test]
fn tree_outline_reads_names_from_the_store() {
    let (f, complex) = current();
    let mut out = Vec::new();
    write_tree(&complex, &f.store, &mut out).unwrap();

    let expected = [
        format!("(complex) {CURRENT_COMPLEX} SFO Terminal Complex"),
        format!("\t(terminal) {TERMINAL_2} Terminal 2"),
        format!("\t\t(commonarea) {DEPARTURES} Terminal 2 Departures"),
        format!("\t\t\t(checkpoint) {CHECKPOINT} Checkpoint D"),
        format!("\t\t\t(museum) {MUSEUM} Aviation Museum"),
        format!("\t\t\t\t(publicart) {ARTWORK} Untitled"),
        format!("\t\t(boardingarea) {BOARDING_AREA_D} Boarding Area D"),
        format!("\t\t\t(gate) {GATE_D10} D10"),
        format!("\t\t\t(gate) {GATE_D11} D11"),
        format!("\t\t\t(observationdeck) {SKY_TERRACE} Sky Terrace"),
        format!("\t\t\t\t(gallery) {GALLERY} Sky Terrace Platform"),
    ];
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn json_nests_collections_by_key() {
    let (_f, complex) = current();
    let value = to_json(&complex).unwrap();

    assert_eq!(value["id"], CURRENT_COMPLEX);
    assert_eq!(value["sfo:id"], "SFO");
    let terminal = &value["terminals"][0];
    assert_eq!(terminal["sfo:id"], "300");
    assert_eq!(terminal["commonareas"][0]["checkpoints"][0]["sfo:id"], "CP-D");
    assert_eq!(terminal["commonareas"][0]["museums"][0]["publicart"][0]["sfomuseum:id"], "T2#1511214277");

    let area = &terminal["boardingareas"][0];
    assert_eq!(area["gates"].as_array().unwrap().len(), 2);
    assert_eq!(area["observationdecks"][0]["galleries"][0]["sfomuseum:id"], "2D#80");
    assert!(area.get("checkpoints").is_none());
}

#[test]
fn json_writer_matches_value() {
    let (_f, complex) = current();
    let mut out = Vec::new();
    write_json(&complex, &mut out, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, to_json(&complex).unwrap());
}

#[test]
fn empty_complex_still_lists_terminals() {
    let complex = Entity::new(Placetype::Complex, CURRENT_COMPLEX, "SFO");
    let value = to_json(&complex).unwrap();
    assert_eq!(value["terminals"], serde_json::json!([]));
}

#[test]
fn projections() {
    let (_f, complex) = current();

    let layers = complex.ids_by_placetype();
    assert_eq!(layers[&Placetype::Gate], vec![GATE_D10, GATE_D11]);
    assert_eq!(layers[&Placetype::Complex], vec![CURRENT_COMPLEX]);
    assert!(!layers.contains_key(&Placetype::Garage));

    let lookup = complex.alt_lookup();
    assert_eq!(lookup.len(), 10);
    assert_eq!(lookup["300CAD"], DEPARTURES);
    assert_eq!(lookup["2D#80"], GALLERY);
    assert!(!lookup.contains_key("SFO"));
}
