//! Building indexes from local repositories and lookup URIs.

use std::path::Path;

use airside_lookup::compile::{compile, from_json, to_json};
use airside_lookup::{Gallery, Gate, LookupIndex, LookupKind, LookupSource, LookupUri, SharedLookup, Terminal};
use airside_storage::uri::id_to_rel_path;
use airside_storage::{Cancellation, DirectorySource};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(root: &Path, props: &Value) {
    let id = props["wof:id"].as_i64().unwrap();
    let path = root.join("data").join(id_to_rel_path(id).unwrap());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let doc = json!({"type": "Feature", "properties": props, "geometry": null});
    std::fs::write(path, serde_json::to_vec(&doc).unwrap()).unwrap();
}

fn repository() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, &json!({
        "wof:id": 1_001, "wof:name": "K1", "sfomuseum:placetype": "gate", "sfo:id": "K-01",
        "mz:is_current": 0, "edtf:inception": "2001", "edtf:cessation": "2010",
    }));
    write(root, &json!({
        "wof:id": 1_002, "wof:name": "K1", "sfomuseum:placetype": "gate",
        "mz:is_current": 1, "edtf:inception": "2010", "edtf:cessation": "..",
    }));
    write(root, &json!({
        "wof:id": 2_001, "wof:name": "Gallery K", "sfomuseum:placetype": "gallery",
        "sfomuseum:map_id": "KG", "sfomuseum:gallery_id": 12, "mz:is_current": 1,
    }));
    write(root, &json!({
        "wof:id": 3_001, "wof:name": "Terminal K", "sfomuseum:placetype": "terminal",
        "sfomuseum:terminal_id": "TK", "mz:is_current": 1,
        "name:eng_x_preferred": ["Terminal K"], "name:eng_x_variant": ["TK", "K Terminal"],
    }));
    write(root, &json!({
        "wof:id": 4_001, "wof:name": "Checkpoint K", "sfomuseum:placetype": "checkpoint",
        "mz:is_current": 1,
    }));
    dir
}

fn iterator_uri(kind: &str, root: &Path) -> String {
    format!("{kind}://iterator?source={}", root.display())
}

#[test]
fn compile_selects_one_placetype() {
    let repo = repository();
    let source = DirectorySource::new([repo.path()]);
    let gates: Vec<Gate> = compile(&source, &Cancellation::new()).unwrap();
    assert_eq!(gates.iter().map(|g| g.wof_id).collect::<Vec<_>>(), vec![1_001, 1_002]);

    let galleries: Vec<Gallery> = compile(&source, &Cancellation::new()).unwrap();
    assert_eq!(galleries.len(), 1);
    assert_eq!(galleries[0].map_id, "KG");
    assert_eq!(galleries[0].sfomuseum_id, 12);
}

#[test]
fn iterator_uris_build_fresh_indexes() {
    let repo = repository();
    let uri: LookupUri = iterator_uri("gates", repo.path()).parse().unwrap();
    assert_eq!(uri.kind, LookupKind::Gates);

    let index: LookupIndex<Gate> = uri.source.build().unwrap();
    assert_eq!(index.find_current("K1").unwrap().wof_id, 1_002);
    assert_eq!(index.find_for_date("K-01", "2005").unwrap().wof_id, 1_001);
    assert!(index.find_current("Checkpoint K").is_err());
}

#[test]
fn terminal_names_from_repository() {
    let repo = repository();
    let uri: LookupUri = iterator_uri("terminals", repo.path()).parse().unwrap();
    let index: LookupIndex<Terminal> = uri.source.build().unwrap();
    let terminal = index.find_current("K Terminal").unwrap();
    assert_eq!(terminal.wof_id, 3_001);
    assert_eq!(terminal.preferred_names, vec!["Terminal K".to_string()]);
}

#[test]
fn compiled_datasets_load_back() {
    let repo = repository();
    let gates: Vec<Gate> = compile(&DirectorySource::new([repo.path()]), &Cancellation::new()).unwrap();
    let bytes = to_json(&gates, false).unwrap();

    let index = LookupSource::Json(bytes.clone()).build::<Gate>().unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(from_json::<Gate>(&bytes).unwrap().len(), 2);
}

#[test]
fn missing_repositories_fail_to_build() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    let shared = SharedLookup::<Gate>::new(LookupSource::Iterator { roots: vec![missing] });
    assert!(shared.get().is_err());
    assert!(!shared.is_built());
}

#[test]
fn appended_records_are_local_to_the_snapshot() {
    let shared = SharedLookup::<Gate>::embedded();
    let extra = Gate {
        wof_id: 9_999,
        name: "Z1".to_string(),
        sfo_id: None,
        is_current: 1,
        inception: "2024".to_string(),
        cessation: "..".to_string(),
    };
    let snapshot = shared.append([extra]).unwrap();
    assert_eq!(snapshot.find_current("Z1").unwrap().wof_id, 9_999);
    assert!(shared.get().unwrap().find("Z1").is_empty());
}

#[test]
fn unknown_uris_are_rejected() {
    for uri in ["runways://", "gates://elsewhere", "gates://iterator"] {
        assert!(uri.parse::<LookupUri>().is_err(), "{uri}");
    }
}
