//! An on-disk fixture repository shaped like the airport's architecture data.

use std::path::Path;

use airside_storage::uri::id_to_rel_path;
use airside_storage::{Catalog, DirectorySource, FsRecordStore};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const FIRST_COMPLEX: i64 = 1_159_396_329;
pub const CURRENT_COMPLEX: i64 = 1_745_882_083;
pub const TERMINAL_2: i64 = 1_745_882_101;
pub const DEPRECATED_TERMINAL: i64 = 1_745_882_103;
pub const HISTORIC_TERMINAL: i64 = 1_159_396_341;
pub const DEPARTURES: i64 = 1_745_882_201;
pub const BOARDING_AREA_D: i64 = 1_745_882_203;
pub const GATE_D10: i64 = 1_745_882_301;
pub const GATE_D11: i64 = 1_745_882_303;
pub const CHECKPOINT: i64 = 1_745_882_305;
pub const SKY_TERRACE: i64 = 1_745_882_307;
pub const MUSEUM: i64 = 1_745_882_309;
pub const GALLERY: i64 = 1_745_882_459;
pub const ARTWORK: i64 = 1_511_214_277;
pub const GARAGE: i64 = 1_745_882_401;
pub const GARAGE_ART: i64 = 1_511_214_279;

fn node(id: i64, parent: i64, placetype: &str, name: &str, extra: Value) -> Value {
    let mut props = json!({
        "wof:id": id,
        "wof:parent_id": parent,
        "wof:name": name,
        "sfomuseum:placetype": placetype,
        "mz:is_current": 1,
        "edtf:inception": "2021-05-25",
        "edtf:cessation": "..",
    });
    if let (Some(props), Value::Object(extra)) = (props.as_object_mut(), extra) {
        props.extend(extra);
    }
    props
}

fn documents() -> Vec<Value> {
    vec![
        json!({"wof:id": FIRST_COMPLEX, "wof:name": "SFO Terminal Complex", "mz:is_current": 0,
               "edtf:cessation": "2021-05-25", "wof:superseded_by": [CURRENT_COMPLEX]}),
        json!({"wof:id": CURRENT_COMPLEX, "wof:name": "SFO Terminal Complex", "mz:is_current": 1,
               "wof:supersedes": [FIRST_COMPLEX]}),
        node(HISTORIC_TERMINAL, FIRST_COMPLEX, "terminal", "International Terminal",
             json!({"mz:is_current": 0, "edtf:cessation": "2021-05-25", "sfomuseum:terminal_id": "ITB"})),
        node(TERMINAL_2, CURRENT_COMPLEX, "terminal", "Terminal 2", json!({"sfomuseum:terminal_id": "T2"})),
        node(DEPRECATED_TERMINAL, CURRENT_COMPLEX, "terminal", "Terminal 2 (draft)",
             json!({"sfomuseum:terminal_id": "T2", "edtf:deprecated": "2021-06-01"})),
        node(DEPARTURES, TERMINAL_2, "commonarea", "Terminal 2 Departures", json!({"sfo:building_id": "T2"})),
        node(BOARDING_AREA_D, TERMINAL_2, "boardingarea", "Boarding Area D", json!({"sfo:id": "D"})),
        node(GATE_D10, BOARDING_AREA_D, "gate", "D10", json!({})),
        node(GATE_D11, BOARDING_AREA_D, "gate", "D11", json!({"mz:is_current": 0})),
        node(CHECKPOINT, DEPARTURES, "checkpoint", "Checkpoint D", json!({"sfo:id": "CP-D"})),
        node(SKY_TERRACE, BOARDING_AREA_D, "observationdeck", "Sky Terrace", json!({"sfo:id": "2D"})),
        node(GALLERY, SKY_TERRACE, "gallery", "Sky Terrace Platform",
             json!({"sfomuseum:map_id": "2D", "sfomuseum:gallery_id": 80})),
        node(MUSEUM, DEPARTURES, "museum", "Aviation Museum", json!({"sfo:id": "AML"})),
        node(ARTWORK, MUSEUM, "publicart", "Untitled", json!({"sfomuseum:map_id": "T2", "sfomuseum:object_id": 1_511_214_277})),
        node(GARAGE, CURRENT_COMPLEX, "garage", "Domestic Garage", json!({"sfo:id": "DG"})),
        node(GARAGE_ART, GARAGE, "publicart", "Mural", json!({"sfomuseum:object_id": 7})),
    ]
}

/// Writes one document under its canonical path.
pub fn write(root: &Path, props: &Value) {
    let id = props["wof:id"].as_i64().unwrap();
    let path = root.join("data").join(id_to_rel_path(id).unwrap());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let doc = json!({"type": "Feature", "properties": props, "geometry": null});
    std::fs::write(path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
}

/// A repository on disk, its record store, and its relational index.
pub struct Fixture {
    pub dir: TempDir,
    pub store: FsRecordStore,
    pub index: Catalog,
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    for doc in documents() {
        write(dir.path(), &doc);
    }
    let store = FsRecordStore::new([dir.path()]);
    let index = Catalog::from_source(&DirectorySource::new([dir.path()])).unwrap();
    Fixture { dir, store, index }
}
