//! Museum galleries.

use std::fmt;

use airside_foundation::record::props;
use airside_foundation::{Error, Record, RecordId, Result};
use serde::{Deserialize, Serialize};

use crate::kind::LookupKind;
use crate::record::{LookupRecord, UNKNOWN_CURRENCY, unknown_currency};

/// A version of a museum gallery.
///
/// The same physical gallery is usually represented by several records, one
/// per installation period, sharing a map id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// The record id.
    #[serde(rename = "wof:id")]
    pub wof_id: RecordId,
    /// The museum's gallery number.
    #[serde(rename = "sfomuseum:id")]
    pub sfomuseum_id: i64,
    /// The map label (`2E`).
    #[serde(rename = "sfomuseum:map_id", alias = "map_id", default)]
    pub map_id: String,
    /// The gallery name.
    #[serde(rename = "wof:name")]
    pub name: String,
    /// The currency flag.
    #[serde(rename = "mz:is_current", default = "unknown_currency")]
    pub is_current: i64,
    /// The inception date.
    #[serde(rename = "edtf:inception", default)]
    pub inception: String,
    /// The cessation date.
    #[serde(rename = "edtf:cessation", default)]
    pub cessation: String,
}

impl fmt::Display for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} {}-{} {} {}",
            self.wof_id, self.sfomuseum_id, self.inception, self.cessation, self.map_id, self.name
        )
    }
}

impl LookupRecord for Gallery {
    const KIND: LookupKind = LookupKind::Galleries;

    fn wof_id(&self) -> RecordId {
        self.wof_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_current(&self) -> i64 {
        self.is_current
    }

    fn inception(&self) -> &str {
        &self.inception
    }

    fn cessation(&self) -> &str {
        &self.cessation
    }

    fn aliases(&self) -> Vec<String> {
        vec![self.name.clone(), self.wof_id.to_string(), self.map_id.clone()]
    }

    fn from_record(record: &Record) -> Result<Self> {
        let id = record.id();
        let name = record
            .name()
            .ok_or_else(|| Error::missing_property(id, props::NAME))?;
        if !record.has(props::GALLERY_ID) {
            return Err(Error::missing_property(id, props::GALLERY_ID));
        }
        let sfomuseum_id = record
            .int_property(props::GALLERY_ID)
            .ok_or_else(|| Error::invalid_property(id, props::GALLERY_ID, "not an integer"))?;

        Ok(Self {
            wof_id: id,
            sfomuseum_id,
            map_id: record.string_property(props::MAP_ID).unwrap_or_default(),
            name,
            is_current: record.is_current().unwrap_or(UNKNOWN_CURRENCY),
            inception: record.inception(),
            cessation: record.cessation(),
        })
    }
}
