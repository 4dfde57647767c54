//! Integration tests for raw records

use airside_foundation::Record;
use serde_json::json;

fn record(props: serde_json::Value) -> Record {
    Record::from_value(json!({"type": "Feature", "properties": props, "geometry": null})).unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parses_documents_from_bytes() {
    let bytes = br#"{"type":"Feature","properties":{"wof:id":1159396329,"wof:name":"SFO Terminal Complex"},"geometry":{"type":"Point","coordinates":[0,0]}}"#;
    let record = Record::from_slice(bytes).unwrap();
    assert_eq!(record.id(), 1_159_396_329);
    assert_eq!(record.name().as_deref(), Some("SFO Terminal Complex"));
}

#[test]
fn documents_need_an_integer_id() {
    assert!(Record::from_slice(b"[]").is_err());
    assert!(Record::from_slice(br#"{"properties":{}}"#).is_err());
    assert!(Record::from_slice(br#"{"properties":{"wof:id":"abc"}}"#).is_err());
    assert_eq!(Record::from_slice(br#"{"properties":{"wof:id":"42"}}"#).unwrap().id(), 42);
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn lifecycle_properties() {
    let r = record(json!({
        "wof:id": 1,
        "wof:parent_id": 2,
        "mz:is_current": 0,
        "edtf:inception": "2020~",
        "edtf:cessation": "2021-05-25",
        "wof:superseded_by": [3],
        "wof:supersedes": 4,
        "sfomuseum:placetype": "gallery",
    }));
    assert_eq!(r.parent_id(), Some(2));
    assert_eq!(r.is_current(), Some(0));
    assert_eq!(r.inception(), "2020~");
    assert_eq!(r.cessation(), "2021-05-25");
    assert_eq!(r.superseded_by(), vec![3]);
    assert_eq!(r.supersedes(), vec![4]);
    assert_eq!(r.placetype_label().as_deref(), Some("gallery"));
    assert!(!r.is_deprecated());
}

#[test]
fn null_counts_as_absent() {
    let r = record(json!({"wof:id": 1, "sfo:id": null, "mz:is_current": null}));
    assert!(!r.has("sfo:id"));
    assert_eq!(r.string_property("sfo:id"), None);
    assert_eq!(r.is_current(), None);
}

#[test]
fn strings_and_numbers_interconvert() {
    let r = record(json!({"wof:id": 1, "sfo:building_id": 300, "sfomuseum:gallery_id": "81"}));
    assert_eq!(r.string_property("sfo:building_id").as_deref(), Some("300"));
    assert_eq!(r.int_property("sfomuseum:gallery_id"), Some(81));
}

#[test]
fn names_group_name_properties() {
    let r = record(json!({
        "wof:id": 1,
        "wof:name": "Terminal 2",
        "name:eng_x_preferred": ["Terminal 2"],
        "name:eng_x_variant": ["T2"],
    }));
    let names = r.names();
    assert_eq!(names.len(), 2);
    assert_eq!(names["name:eng_x_variant"], vec!["T2".to_string()]);
}
