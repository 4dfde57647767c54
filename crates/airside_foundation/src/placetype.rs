//! Placetypes: the schema of the airport hierarchy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The category of an airport space.
///
/// Placetypes form a closed set. Each one owns a fixed, ordered list of
/// child placetypes (see [`Placetype::child_placetypes`]), which is the
/// only thing the hierarchy derivation needs to know about the schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placetype {
    /// The terminal complex, root of the hierarchy.
    Complex,
    /// A terminal building.
    Terminal,
    /// A pre-security common area inside a terminal.
    CommonArea,
    /// A post-security boarding area.
    BoardingArea,
    /// A passenger gate.
    Gate,
    /// A security checkpoint.
    Checkpoint,
    /// A museum gallery.
    Gallery,
    /// A public art placement.
    PublicArt,
    /// An observation deck.
    ObservationDeck,
    /// A dedicated museum space, distinct from galleries.
    Museum,
    /// A parking garage.
    Garage,
    /// A hotel.
    Hotel,
}

impl Placetype {
    /// Every placetype, in hierarchy order.
    pub const ALL: [Placetype; 12] = [
        Self::Complex,
        Self::Terminal,
        Self::CommonArea,
        Self::BoardingArea,
        Self::Gate,
        Self::Checkpoint,
        Self::Gallery,
        Self::PublicArt,
        Self::ObservationDeck,
        Self::Museum,
        Self::Garage,
        Self::Hotel,
    ];

    /// Returns the label used by the relational index (`sfomuseum:placetype`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complex => "complex",
            Self::Terminal => "terminal",
            Self::CommonArea => "commonarea",
            Self::BoardingArea => "boardingarea",
            Self::Gate => "gate",
            Self::Checkpoint => "checkpoint",
            Self::Gallery => "gallery",
            Self::PublicArt => "publicart",
            Self::ObservationDeck => "observationdeck",
            Self::Museum => "museum",
            Self::Garage => "garage",
            Self::Hotel => "hotel",
        }
    }

    /// Returns the capitalized human-facing name, used at the start of messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Complex => "Complex",
            Self::Terminal => "Terminal",
            Self::CommonArea => "Common area",
            Self::BoardingArea => "Boarding area",
            Self::Gate => "Gate",
            Self::Checkpoint => "Checkpoint",
            Self::Gallery => "Gallery",
            Self::PublicArt => "Public art",
            Self::ObservationDeck => "Observation deck",
            Self::Museum => "Museum",
            Self::Garage => "Garage",
            Self::Hotel => "Hotel",
        }
    }

    /// Returns the lowercase human-facing name, used mid-sentence.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Complex => "complex",
            Self::Terminal => "terminal",
            Self::CommonArea => "common area",
            Self::BoardingArea => "boarding area",
            Self::Gate => "gate",
            Self::Checkpoint => "checkpoint",
            Self::Gallery => "gallery",
            Self::PublicArt => "public art",
            Self::ObservationDeck => "observation deck",
            Self::Museum => "museum",
            Self::Garage => "garage",
            Self::Hotel => "hotel",
        }
    }

    /// Returns the JSON key under which a parent lists children of this placetype.
    #[must_use]
    pub const fn collection_key(self) -> &'static str {
        match self {
            Self::Complex => "complexes",
            Self::Terminal => "terminals",
            Self::CommonArea => "commonareas",
            Self::BoardingArea => "boardingareas",
            Self::Gate => "gates",
            Self::Checkpoint => "checkpoints",
            Self::Gallery => "galleries",
            Self::PublicArt => "publicart",
            Self::ObservationDeck => "observationdecks",
            Self::Museum => "museums",
            Self::Garage => "garages",
            Self::Hotel => "hotels",
        }
    }

    /// Returns the JSON key for this placetype's alternate identifier.
    ///
    /// Galleries and public art carry museum identifiers; everything else
    /// carries an airport identifier.
    #[must_use]
    pub const fn alt_id_key(self) -> &'static str {
        match self {
            Self::Gallery | Self::PublicArt => "sfomuseum:id",
            _ => "sfo:id",
        }
    }

    /// Returns the placetypes this placetype may own, in derivation order.
    #[must_use]
    pub const fn child_placetypes(self) -> &'static [Placetype] {
        match self {
            Self::Complex => &[Self::Terminal],
            Self::Terminal => &[Self::CommonArea, Self::BoardingArea],
            Self::CommonArea | Self::BoardingArea => &[
                Self::Gate,
                Self::Checkpoint,
                Self::Gallery,
                Self::PublicArt,
                Self::ObservationDeck,
                Self::Museum,
            ],
            Self::ObservationDeck | Self::Museum => &[Self::Gallery, Self::PublicArt],
            Self::Garage | Self::Hotel => &[Self::PublicArt],
            Self::Gate | Self::Checkpoint | Self::Gallery | Self::PublicArt => &[],
        }
    }

    /// Returns true if this placetype never has children.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        self.child_placetypes().is_empty()
    }
}

impl fmt::Display for Placetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Placetype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pt| pt.label() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownPlacetype(s.to_string())))
    }
}
