//! Documents read from Who's On First style repositories on disk.

use std::io;
use std::path::{Path, PathBuf};

use airside_foundation::{Error, RecordId, Result};
use tracing::debug;

use crate::store::RecordStore;
use crate::uri;

/// Reads record documents from one or more repository roots.
///
/// Each root is a repository checkout holding a `data/` directory. Roots
/// are searched in order and the first one that has the document wins.
#[derive(Clone, Debug, Default)]
pub struct FsRecordStore {
    roots: Vec<PathBuf>,
}

impl FsRecordStore {
    /// Creates a store over the given repository roots.
    #[must_use]
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a repository root, searched after the existing ones.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Returns the repository roots.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Returns the path of the document for `id`, if any root has it.
    ///
    /// # Errors
    ///
    /// Returns an error for ids that have no path.
    pub fn path_for(&self, id: RecordId) -> Result<Option<PathBuf>> {
        let rel = uri::id_to_rel_path(id)?;
        Ok(self
            .roots
            .iter()
            .map(|root| data_dir(root).join(&rel))
            .find(|p| p.is_file()))
    }
}

impl RecordStore for FsRecordStore {
    fn load(&self, id: RecordId) -> Result<Vec<u8>> {
        let Some(path) = self.path_for(id)? else {
            return Err(Error::record_not_found(id));
        };
        debug!(id, path = %path.display(), "load");
        std::fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::record_not_found(id),
            _ => Error::io(format!("failed to read {}: {err}", path.display())),
        })
    }
}

/// Returns `<root>/data` if it exists, otherwise `root` itself.
pub(crate) fn data_dir(root: &Path) -> PathBuf {
    let data = root.join("data");
    if data.is_dir() { data } else { root.to_path_buf() }
}
