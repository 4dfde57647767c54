//! Alternate (business) identifiers.
//!
//! Each placetype has its own fallback chain from the record body to a
//! human-facing code.

use airside_foundation::record::props;
use airside_foundation::{Error, Placetype, Record, Result};

/// Derives the alternate id of `record`, read as a `placetype`.
///
/// | placetype | rule |
/// |-----------|------|
/// | terminal | `sfo:id`, else `sfomuseum:terminal_id` ITB/T1/T2/T3 -> 100/200/300/400 |
/// | common area | `sfo:id`, else `sfo:building_id` ITB/T1/T2/T3 (or 100..400) -> 100CAD..400CAD |
/// | boarding area | `sfo:id`, else `sfo:building_id` verbatim |
/// | gate | `sfo:id`, else `wof:name` |
/// | gallery | `{sfomuseum:map_id}#{sfomuseum:gallery_id}` |
/// | public art | `{sfomuseum:map_id}#{sfomuseum:object_id}` |
/// | others | `sfo:id` |
///
/// # Errors
///
/// Returns a data-integrity error when the required properties are absent
/// or a controlled-vocabulary value is unrecognized.
pub fn derive_alt_id(placetype: Placetype, record: &Record) -> Result<String> {
    let id = record.id();
    let sfo_id = record.string_property(props::SFO_ID);

    match placetype {
        Placetype::Terminal => {
            if let Some(sfo_id) = sfo_id {
                return Ok(sfo_id);
            }
            let terminal_id = record
                .string_property(props::TERMINAL_ID)
                .ok_or_else(|| Error::missing_property(id, props::TERMINAL_ID))?;
            let code = match terminal_id.as_str() {
                "ITB" => "100",
                "T1" => "200",
                "T2" => "300",
                "T3" => "400",
                _ => return Err(Error::unrecognized_value(id, "terminal_id", terminal_id)),
            };
            Ok(code.to_string())
        }
        Placetype::CommonArea => {
            if let Some(sfo_id) = sfo_id {
                return Ok(sfo_id);
            }
            let building_id = record
                .string_property(props::SFO_BUILDING_ID)
                .ok_or_else(|| Error::missing_property(id, props::SFO_BUILDING_ID))?;
            let code = match building_id.as_str() {
                "ITB" | "100" => "100CAD",
                "T1" | "200" => "200CAD",
                "T2" | "300" => "300CAD",
                "T3" | "400" => "400CAD",
                _ => return Err(Error::unrecognized_value(id, "building_id", building_id)),
            };
            Ok(code.to_string())
        }
        Placetype::BoardingArea => sfo_id
            .or_else(|| record.string_property(props::SFO_BUILDING_ID))
            .ok_or_else(|| Error::missing_property(id, props::SFO_BUILDING_ID)),
        Placetype::Gate => sfo_id
            .or_else(|| record.name())
            .ok_or_else(|| Error::missing_property(id, props::NAME)),
        Placetype::Gallery => museum_composite(record, props::GALLERY_ID),
        Placetype::PublicArt => museum_composite(record, props::OBJECT_ID),
        Placetype::Complex
        | Placetype::Checkpoint
        | Placetype::ObservationDeck
        | Placetype::Museum
        | Placetype::Garage
        | Placetype::Hotel => sfo_id.ok_or_else(|| Error::missing_property(id, props::SFO_ID)),
    }
}

/// `{map_id}#{integer_id}`; the map component may be empty.
fn museum_composite(record: &Record, id_property: &str) -> Result<String> {
    let id = record.id();
    if !record.has(id_property) {
        return Err(Error::missing_property(id, id_property));
    }
    let object_id = record
        .int_property(id_property)
        .ok_or_else(|| Error::invalid_property(id, id_property, "not an integer"))?;
    let map_id = record.string_property(props::MAP_ID).unwrap_or_default();
    Ok(format!("{map_id}#{object_id}"))
}
