//! Bulk iteration over a corpus of record documents.
//!
//! A [`DocumentSource`] feeds `(path, bytes)` pairs to a callback. Sources
//! never emit alternate-geometry files or editor backups (paths ending in
//! `~`), and stop early once a shared [`Cancellation`] is signalled.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use airside_foundation::{Error, RecordId, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::fs::data_dir;
use crate::uri;

/// Callback invoked for every document.
pub type DocumentCallback<'a> = dyn FnMut(&Path, &[u8]) -> Result<()> + 'a;

/// A corpus that can be walked document by document.
pub trait DocumentSource {
    /// Invokes `callback` for every eligible document, in a stable order.
    ///
    /// Remaining documents are skipped once `cancel` is signalled.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while reading a document or by the
    /// callback; iteration stops there.
    fn for_each(&self, cancel: &Cancellation, callback: &mut DocumentCallback<'_>) -> Result<()>;
}

/// Early-exit signal shared between an iteration and its observers.
#[derive(Clone, Debug, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    /// Creates an unsignalled cancellation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals every holder of this cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Returns true for paths the iterator must not emit.
///
/// # Errors
///
/// Returns an error for `.geojson` files whose names are not record paths.
pub fn should_skip(path: &Path) -> Result<bool> {
    if path.as_os_str().to_string_lossy().ends_with('~') {
        return Ok(true);
    }
    Ok(uri::parse_path(path)?.is_alternate())
}

// =============================================================================
// Directory source
// =============================================================================

/// Walks one or more repository roots on disk.
///
/// For a root with a `data/` directory only that directory is walked.
/// Files are visited in file-name order within each directory.
#[derive(Clone, Debug, Default)]
pub struct DirectorySource {
    roots: Vec<PathBuf>,
}

impl DirectorySource {
    /// Creates a source over the given roots.
    #[must_use]
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the roots.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl DocumentSource for DirectorySource {
    fn for_each(&self, cancel: &Cancellation, callback: &mut DocumentCallback<'_>) -> Result<()> {
        for root in &self.roots {
            let dir = data_dir(root);
            if !dir.is_dir() {
                return Err(Error::io(format!("not a directory: {}", dir.display())));
            }

            for entry in WalkDir::new(&dir).sort_by_file_name() {
                if cancel.is_cancelled() {
                    debug!(root = %root.display(), "iteration cancelled");
                    return Ok(());
                }

                let entry = entry
                    .map_err(|err| Error::io(format!("failed to walk {}: {err}", dir.display())))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                if !is_document(path) {
                    continue;
                }
                if should_skip(path)? {
                    debug!(path = %path.display(), "skip");
                    continue;
                }

                let bytes = std::fs::read(path)
                    .map_err(|err| Error::io(format!("failed to read {}: {err}", path.display())))?;
                callback(path, &bytes)
                    .map_err(|err| err.with_frame(format!("processing {}", path.display())))?;
            }
        }
        Ok(())
    }
}

fn is_document(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.ends_with(".geojson") || name.ends_with(".geojson~")
}

// =============================================================================
// Memory source
// =============================================================================

/// An in-memory corpus, emitted in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: Vec<(PathBuf, Vec<u8>)>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document under an explicit path.
    pub fn push(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.documents.push((path.into(), bytes.into()));
    }

    /// Adds a document under the canonical path for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error for ids that have no path.
    pub fn push_record(&mut self, id: RecordId, bytes: impl Into<Vec<u8>>) -> Result<()> {
        self.push(uri::id_to_rel_path(id)?, bytes);
        Ok(())
    }

    /// Builds a source from property maps, wrapping each one in a feature
    /// document stored under its canonical path.
    ///
    /// # Errors
    ///
    /// Returns an error if a property map has no integer `wof:id`.
    pub fn from_properties(
        properties: impl IntoIterator<Item = serde_json::Value>,
    ) -> Result<Self> {
        let mut source = Self::new();
        for props in properties {
            let id = props
                .get("wof:id")
                .and_then(serde_json::Value::as_i64)
                .ok_or_else(|| Error::serialization("properties have no integer wof:id"))?;
            let doc = serde_json::json!({
                "type": "Feature",
                "properties": props,
                "geometry": null,
            });
            source.push_record(id, serde_json::to_vec(&doc)?)?;
        }
        Ok(source)
    }

    /// Returns the number of documents, including any that will be skipped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the source holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn for_each(&self, cancel: &Cancellation, callback: &mut DocumentCallback<'_>) -> Result<()> {
        for (path, bytes) in &self.documents {
            if cancel.is_cancelled() {
                return Ok(());
            }
            if should_skip(path)? {
                continue;
            }
            callback(path, bytes)
                .map_err(|err| err.with_frame(format!("processing {}", path.display())))?;
        }
        Ok(())
    }
}
