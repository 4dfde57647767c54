//! Who's On First path conventions.
//!
//! Record `1159396329` lives at `115/939/632/9/1159396329.geojson`; an
//! alternate-geometry variant of it lives next to it as
//! `1159396329-alt-<source>[-<function>...].geojson`.

use std::path::{Path, PathBuf};

use airside_foundation::{Error, ErrorKind, RecordId, Result};

/// File extension of record documents.
pub const EXTENSION: &str = "geojson";

/// An id and alternate flag recovered from a document path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPath {
    /// The record id encoded in the file name.
    pub id: RecordId,
    /// The alternate label (`sfomuseum`, `sfomuseum-map`, ...), if this is an
    /// alternate-geometry file.
    pub alternate: Option<String>,
}

impl ParsedPath {
    /// Returns true for alternate-geometry files.
    #[must_use]
    pub fn is_alternate(&self) -> bool {
        self.alternate.is_some()
    }
}

/// Returns the tree directory for `id`, e.g. `115/939/632/9` for `1159396329`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidUri`] for negative ids.
pub fn id_to_tree(id: RecordId) -> Result<PathBuf> {
    if id < 0 {
        return Err(Error::new(ErrorKind::InvalidUri(format!(
            "cannot derive a path for id {id}"
        ))));
    }
    let digits = id.to_string();
    let mut tree = PathBuf::new();
    for chunk in digits.as_bytes().chunks(3) {
        tree.push(String::from_utf8_lossy(chunk).as_ref());
    }
    Ok(tree)
}

/// Returns the path of the document for `id`, relative to a repository's
/// `data` directory.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidUri`] for negative ids.
pub fn id_to_rel_path(id: RecordId) -> Result<PathBuf> {
    Ok(id_to_tree(id)?.join(format!("{id}.{EXTENSION}")))
}

/// Parses the id and alternate label from a document path.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidUri`] if the file name is not
/// `<id>.geojson` or `<id>-alt-<label>.geojson`.
pub fn parse_path(path: &Path) -> Result<ParsedPath> {
    let invalid = || {
        Error::new(ErrorKind::InvalidUri(format!(
            "not a record path: {}",
            path.display()
        )))
    };

    let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
    let stem = name
        .strip_suffix(EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(invalid)?;

    let (id, alternate) = match stem.split_once("-alt-") {
        Some((id, label)) if !label.is_empty() => (id, Some(label.to_string())),
        Some(_) => return Err(invalid()),
        None => (stem, None),
    };

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let id = id.parse().map_err(|_| invalid())?;
    Ok(ParsedPath { id, alternate })
}
