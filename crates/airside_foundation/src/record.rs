//! Raw records as read from the record store.
//!
//! A record is a GeoJSON-like document whose `properties` object holds the
//! Who's On First property bag. Only properties are ever inspected; geometry
//! is carried along untouched.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Numeric record identifier, globally unique and never reused.
pub type RecordId = i64;

/// Well-known property names.
pub mod props {
    /// Record identifier.
    pub const ID: &str = "wof:id";
    /// Display name.
    pub const NAME: &str = "wof:name";
    /// Parent record identifier.
    pub const PARENT_ID: &str = "wof:parent_id";
    /// Currency flag (0/1, sometimes -1 for unknown).
    pub const IS_CURRENT: &str = "mz:is_current";
    /// Inception date (EDTF).
    pub const INCEPTION: &str = "edtf:inception";
    /// Cessation date (EDTF).
    pub const CESSATION: &str = "edtf:cessation";
    /// Deprecation date; presence signals retirement.
    pub const DEPRECATED: &str = "edtf:deprecated";
    /// Records that replace this one.
    pub const SUPERSEDED_BY: &str = "wof:superseded_by";
    /// Records this one replaces.
    pub const SUPERSEDES: &str = "wof:supersedes";
    /// Airport placetype label.
    pub const PLACETYPE: &str = "sfomuseum:placetype";
    /// Airport business identifier.
    pub const SFO_ID: &str = "sfo:id";
    /// Airport building identifier.
    pub const SFO_BUILDING_ID: &str = "sfo:building_id";
    /// Museum terminal vocabulary.
    pub const TERMINAL_ID: &str = "sfomuseum:terminal_id";
    /// Museum map label.
    pub const MAP_ID: &str = "sfomuseum:map_id";
    /// Museum gallery identifier.
    pub const GALLERY_ID: &str = "sfomuseum:gallery_id";
    /// Museum object identifier (public art).
    pub const OBJECT_ID: &str = "sfomuseum:object_id";
}

/// A parsed record: its id plus the full property bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    id: RecordId,
    properties: Map<String, Value>,
}

impl Record {
    /// Parses a record from raw document bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a JSON object with a
    /// `properties` object carrying an integer `wof:id`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let doc: Value = serde_json::from_slice(bytes)?;
        Self::from_value(doc)
    }

    /// Builds a record from an already-parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document lacks a `properties` object or an
    /// integer `wof:id`.
    pub fn from_value(doc: Value) -> Result<Self> {
        let Value::Object(mut doc) = doc else {
            return Err(Error::serialization("document is not a JSON object"));
        };
        let Some(Value::Object(properties)) = doc.remove("properties") else {
            return Err(Error::serialization("document has no properties object"));
        };
        let id = properties
            .get(props::ID)
            .and_then(value_as_int)
            .ok_or_else(|| Error::serialization("document has no integer wof:id property"))?;
        Ok(Self { id, properties })
    }

    /// Builds a record directly from a property map.
    ///
    /// # Errors
    ///
    /// Returns an error if the map has no integer `wof:id`.
    pub fn from_properties(properties: Map<String, Value>) -> Result<Self> {
        let id = properties
            .get(props::ID)
            .and_then(value_as_int)
            .ok_or_else(|| Error::serialization("properties have no integer wof:id"))?;
        Ok(Self { id, properties })
    }

    /// Returns the record id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the raw property map.
    #[must_use]
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns a property, treating JSON `null` as absent.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }

    /// Returns true if the property is present and not `null`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.property(key).is_some()
    }

    /// Returns a property as a string.
    ///
    /// Numbers and booleans are stringified; arrays and objects are `None`.
    #[must_use]
    pub fn string_property(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns a property as an integer, accepting numeric strings.
    #[must_use]
    pub fn int_property(&self, key: &str) -> Option<i64> {
        self.property(key).and_then(value_as_int)
    }

    /// Returns a property as a list of integers; a scalar is a list of one.
    #[must_use]
    pub fn int_list_property(&self, key: &str) -> Vec<i64> {
        match self.property(key) {
            Some(Value::Array(items)) => items.iter().filter_map(value_as_int).collect(),
            Some(v) => value_as_int(v).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Returns `wof:name`, if any.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.string_property(props::NAME)
    }

    /// Returns `wof:parent_id`, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<RecordId> {
        self.int_property(props::PARENT_ID)
    }

    /// Returns the `mz:is_current` flag, if present.
    #[must_use]
    pub fn is_current(&self) -> Option<i64> {
        self.int_property(props::IS_CURRENT)
    }

    /// Returns `edtf:inception`, or the empty string.
    #[must_use]
    pub fn inception(&self) -> String {
        self.string_property(props::INCEPTION).unwrap_or_default()
    }

    /// Returns `edtf:cessation`, or the empty string.
    #[must_use]
    pub fn cessation(&self) -> String {
        self.string_property(props::CESSATION).unwrap_or_default()
    }

    /// Returns true if `edtf:deprecated` is present and non-empty.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.string_property(props::DEPRECATED)
            .is_some_and(|s| !s.is_empty())
    }

    /// Returns the ids that supersede this record.
    #[must_use]
    pub fn superseded_by(&self) -> Vec<RecordId> {
        self.int_list_property(props::SUPERSEDED_BY)
    }

    /// Returns the ids this record supersedes.
    #[must_use]
    pub fn supersedes(&self) -> Vec<RecordId> {
        self.int_list_property(props::SUPERSEDES)
    }

    /// Returns the airport placetype label, if any.
    #[must_use]
    pub fn placetype_label(&self) -> Option<String> {
        self.string_property(props::PLACETYPE)
    }

    /// Returns every `name:*` property as a map from key to names.
    ///
    /// Keys look like `name:eng_x_preferred` or `name:fra_x_variant`.
    #[must_use]
    pub fn names(&self) -> BTreeMap<String, Vec<String>> {
        self.properties
            .iter()
            .filter(|(k, _)| k.starts_with("name:"))
            .filter_map(|(k, v)| {
                let Value::Array(items) = v else {
                    return None;
                };
                let names = items
                    .iter()
                    .filter_map(|n| n.as_str().map(str::to_string))
                    .collect();
                Some((k.clone(), names))
            })
            .collect()
    }
}

fn value_as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
