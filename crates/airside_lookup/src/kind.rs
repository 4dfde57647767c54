//! The families of lookup datasets.

use std::fmt;
use std::str::FromStr;

use airside_foundation::{Error, ErrorKind, Placetype};

/// A lookup dataset family, named as in lookup URIs (`gates://`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// Boarding gates.
    Gates,
    /// Museum galleries.
    Galleries,
    /// Terminals.
    Terminals,
}

impl LookupKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Gates, Self::Galleries, Self::Terminals];

    /// Returns the URI scheme and dataset name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gates => "gates",
            Self::Galleries => "galleries",
            Self::Terminals => "terminals",
        }
    }

    /// Returns the placetype of the records in this dataset.
    #[must_use]
    pub const fn placetype(self) -> Placetype {
        match self {
            Self::Gates => Placetype::Gate,
            Self::Galleries => Placetype::Gallery,
            Self::Terminals => Placetype::Terminal,
        }
    }

    /// Returns the dataset file name (`gates.json`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.label())
    }

    /// Returns the precompiled dataset shipped with this crate.
    #[must_use]
    pub const fn embedded(self) -> &'static [u8] {
        match self {
            Self::Gates => include_bytes!("../data/gates.json"),
            Self::Galleries => include_bytes!("../data/galleries.json"),
            Self::Terminals => include_bytes!("../data/terminals.json"),
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LookupKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| Error::new(ErrorKind::InvalidUri(format!("unknown lookup kind '{s}'"))))
    }
}
