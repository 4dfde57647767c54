//! Where a lookup index is populated from.
//!
//! Lookup URIs name a dataset kind by scheme and a source by host:
//!
//! | URI | source |
//! |-----|--------|
//! | `gates://` or `gates://sfomuseum` | the dataset compiled into this crate |
//! | `gates://github` | the published dataset, fetched over HTTP |
//! | `gates://iterator?source=<dir>&source=<dir>` | a fresh compilation of local repositories |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use airside_foundation::{Error, ErrorKind, Result};
use airside_storage::{Cancellation, DirectorySource};
use tracing::info;
use url::Url;

use crate::compile::{compile, from_json};
use crate::index::LookupIndex;
use crate::kind::LookupKind;
use crate::record::LookupRecord;

/// Base URL of the published datasets.
pub const PUBLISHED_DATA_URL: &str =
    "https://raw.githubusercontent.com/sfomuseum/go-sfomuseum-architecture/main/data";

/// A place to populate a lookup index from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupSource {
    /// The precompiled dataset shipped with this crate.
    Embedded,
    /// Compile from local repositories.
    Iterator {
        /// Repository roots, walked in order.
        roots: Vec<PathBuf>,
    },
    /// Fetch a precompiled dataset over HTTP.
    Remote {
        /// The dataset URL.
        url: String,
    },
    /// Caller-provided precompiled data.
    Json(Vec<u8>),
}

impl LookupSource {
    /// The published copy of a kind's dataset.
    #[must_use]
    pub fn published(kind: LookupKind) -> Self {
        Self::Remote {
            url: format!("{PUBLISHED_DATA_URL}/{}", kind.file_name()),
        }
    }

    /// Builds an index of `R` records from this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read, fetched, parsed, or
    /// compiled.
    pub fn build<R: LookupRecord>(&self) -> Result<LookupIndex<R>> {
        let records: Vec<R> = match self {
            Self::Embedded => from_json(R::KIND.embedded())
                .map_err(|err| err.with_frame(format!("reading embedded {}", R::KIND.file_name())))?,
            Self::Iterator { roots } => {
                compile(&DirectorySource::new(roots.iter().cloned()), &Cancellation::new())?
            }
            Self::Remote { url } => from_json(&fetch(url)?)
                .map_err(|err| err.with_frame(format!("reading {url}")))?,
            Self::Json(bytes) => from_json(bytes)?,
        };
        info!(kind = %R::KIND, source = %self, records = records.len(), "built lookup");
        Ok(LookupIndex::from_records(records))
    }
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::Iterator { roots } => {
                f.write_str("iterator")?;
                for root in roots {
                    write!(f, " {}", root.display())?;
                }
                Ok(())
            }
            Self::Remote { url } => f.write_str(url),
            Self::Json(bytes) => write!(f, "json ({} bytes)", bytes.len()),
        }
    }
}

#[cfg(feature = "remote")]
fn fetch(url: &str) -> Result<Vec<u8>> {
    let remote = |err: reqwest::Error| Error::new(ErrorKind::Remote(format!("{url}: {err}")));
    let response = reqwest::blocking::get(url)
        .map_err(remote)?
        .error_for_status()
        .map_err(remote)?;
    Ok(response.bytes().map_err(remote)?.to_vec())
}

#[cfg(not(feature = "remote"))]
fn fetch(url: &str) -> Result<Vec<u8>> {
    Err(Error::new(ErrorKind::Remote(format!(
        "{url}: built without the `remote` feature"
    ))))
}

/// A parsed lookup URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupUri {
    /// The dataset kind.
    pub kind: LookupKind,
    /// Where the dataset comes from.
    pub source: LookupSource,
}

impl FromStr for LookupUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::new(ErrorKind::InvalidUri(format!("{s}: {reason}")));
        let url = Url::parse(s).map_err(|err| invalid(&err.to_string()))?;
        let kind: LookupKind = url.scheme().parse()?;

        let source = match url.host_str().unwrap_or_default() {
            "" | "sfomuseum" => LookupSource::Embedded,
            "github" => LookupSource::published(kind),
            "iterator" => {
                let roots: Vec<PathBuf> = url
                    .query_pairs()
                    .filter(|(key, _)| key == "source")
                    .map(|(_, value)| PathBuf::from(value.into_owned()))
                    .collect();
                if roots.is_empty() {
                    return Err(invalid("iterator sources require at least one source parameter"));
                }
                LookupSource::Iterator { roots }
            }
            other => return Err(invalid(&format!("unknown source '{other}'"))),
        };

        Ok(Self { kind, source })
    }
}
