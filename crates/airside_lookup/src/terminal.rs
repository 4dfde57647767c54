//! Terminals.

use std::fmt;

use airside_foundation::record::props;
use airside_foundation::{Error, ErrorKind, Record, RecordId, Result};
use serde::{Deserialize, Serialize};

use crate::kind::LookupKind;
use crate::record::LookupRecord;

/// A version of a terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// The record id.
    #[serde(rename = "wof:id")]
    pub wof_id: RecordId,
    /// The terminal name.
    #[serde(rename = "wof:name")]
    pub name: String,
    /// The terminal code (`ITB`, `T1`, `T2`, `T3`).
    #[serde(rename = "sfomuseum:terminal_id", default, skip_serializing_if = "String::is_empty")]
    pub terminal_id: String,
    /// The currency flag.
    #[serde(rename = "mz:is_current")]
    pub is_current: i64,
    /// Preferred names in every language.
    #[serde(rename = "name:preferred", default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_names: Vec<String>,
    /// Variant names in every language.
    #[serde(rename = "name:variant", default, skip_serializing_if = "Vec::is_empty")]
    pub variant_names: Vec<String>,
    /// The inception date.
    #[serde(rename = "edtf:inception", default)]
    pub inception: String,
    /// The cessation date.
    #[serde(rename = "edtf:cessation", default)]
    pub cessation: String,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.wof_id, self.name, self.is_current)
    }
}

impl LookupRecord for Terminal {
    const KIND: LookupKind = LookupKind::Terminals;

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
        aliases.extend(self.preferred_names.iter().cloned());
        aliases.extend(self.variant_names.iter().cloned());
        aliases.push(self.terminal_id.clone());
        aliases
    }

    fn from_record(record: &Record) -> Result<Self> {
        let id = record.id();
        let name = record
            .name()
            .ok_or_else(|| Error::missing_property(id, props::NAME))?;
        let is_current = record
            .is_current()
            .ok_or_else(|| Error::new(ErrorKind::MissingCurrencyFlag(id)))?;

        let mut preferred_names = Vec::new();
        let mut variant_names = Vec::new();
        for (key, names) in record.names() {
            if key.ends_with("_preferred") {
                preferred_names.extend(names);
            } else if key.ends_with("_variant") {
                variant_names.extend(names);
            }
        }

        Ok(Self {
            wof_id: id,
            name,
            terminal_id: record.string_property(props::TERMINAL_ID).unwrap_or_default(),
            is_current,
            preferred_names,
            variant_names,
            inception: record.inception(),
            cessation: record.cessation(),
        })
    }
}
