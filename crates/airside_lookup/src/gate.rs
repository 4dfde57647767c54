//! Boarding gates.

use std::fmt;

use airside_foundation::record::props;
use airside_foundation::{Error, Record, RecordId, Result};
use serde::{Deserialize, Serialize};

use crate::kind::LookupKind;
use crate::record::{LookupRecord, UNKNOWN_CURRENCY, unknown_currency};

/// A version of a boarding gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// The record id.
    #[serde(rename = "wof:id")]
    pub wof_id: RecordId,
    /// The gate name, usually its code (`A9`).
    #[serde(rename = "wof:name")]
    pub name: String,
    /// The operational code, when it differs from the name.
    #[serde(rename = "sfo:id", default, skip_serializing_if = "Option::is_none")]
    pub sfo_id: Option<String>,
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

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl LookupRecord for Gate {
    const KIND: LookupKind = LookupKind::Gates;

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
        let mut aliases = vec![self.name.clone(), self.wof_id.to_string()];
        aliases.extend(self.sfo_id.clone());
        aliases
    }

    fn from_record(record: &Record) -> Result<Self> {
        let id = record.id();
        Ok(Self {
            wof_id: id,
            name: record
                .name()
                .ok_or_else(|| Error::missing_property(id, props::NAME))?,
            sfo_id: record.string_property(props::SFO_ID),
            is_current: record.is_current().unwrap_or(UNKNOWN_CURRENCY),
            inception: record.inception(),
            cessation: record.cessation(),
        })
    }
}
