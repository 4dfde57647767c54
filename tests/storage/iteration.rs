//! Integration tests for corpus iteration

use std::path::{Path, PathBuf};

use airside_foundation::RecordId;
use airside_storage::uri::id_to_rel_path;
use airside_storage::{Cancellation, Catalog, DirectorySource, DocumentSource};

fn write(root: &Path, rel: &Path, id: RecordId) {
    let path = root.join("data").join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let doc = serde_json::json!({"type": "Feature", "properties": {"wof:id": id}});
    std::fs::write(path, serde_json::to_vec(&doc).unwrap()).unwrap();
}

fn repository() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for id in [300, 100, 200] {
        write(dir.path(), &id_to_rel_path(id).unwrap(), id);
    }
    write(dir.path(), Path::new("100/100-alt-sfomuseum.geojson"), 100);
    write(dir.path(), Path::new("200/200.geojson~"), 200);
    dir
}

fn visited(source: &dyn DocumentSource, cancel: &Cancellation) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    source
        .for_each(cancel, &mut |path, _| {
            paths.push(path.file_name().map(PathBuf::from).unwrap_or_default());
            Ok(())
        })
        .unwrap();
    paths
}

#[test]
fn walks_documents_in_order_skipping_alternates_and_backups() {
    let dir = repository();
    let source = DirectorySource::new([dir.path()]);
    assert_eq!(visited(&source, &Cancellation::new()), vec![
        PathBuf::from("100.geojson"),
        PathBuf::from("200.geojson"),
        PathBuf::from("300.geojson"),
    ]);
}

#[test]
fn cancellation_stops_the_walk() {
    let dir = repository();
    let source = DirectorySource::new([dir.path()]);
    let cancel = Cancellation::new();
    let mut count = 0;
    source
        .for_each(&cancel, &mut |_, _| {
            count += 1;
            cancel.cancel();
            Ok(())
        })
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn missing_roots_fail() {
    let source = DirectorySource::new(["/nonexistent/airside"]);
    assert!(source.for_each(&Cancellation::new(), &mut |_, _| Ok(())).is_err());
}

#[test]
fn catalogs_index_whole_repositories() {
    let dir = repository();
    let catalog = Catalog::from_source(&DirectorySource::new([dir.path()])).unwrap();
    assert_eq!(catalog.ids(), vec![100, 200, 300]);
}
