//! Dataset compilation.
//!
//! A dataset is the flat list of lookup records of one kind, compiled from
//! a corpus and stored as a JSON array. Compiling once and shipping the
//! result avoids walking the whole corpus on every start.

use std::io::Write;

use airside_foundation::{Record, Result};
use airside_storage::{Cancellation, DocumentSource};
use tracing::{debug, info};

use crate::record::LookupRecord;

/// Compiles every record of kind `R` from `source`, in iteration order.
///
/// Documents are selected by `sfomuseum:placetype`; everything else in the
/// corpus is ignored.
///
/// # Errors
///
/// Returns the first parse or data-integrity error, with the document path
/// as a context frame.
pub fn compile<R: LookupRecord>(source: &dyn DocumentSource, cancel: &Cancellation) -> Result<Vec<R>> {
    let label = R::placetype().label();
    let mut records = Vec::new();
    let mut seen = 0_usize;

    source.for_each(cancel, &mut |path, bytes| {
        seen += 1;
        let record = Record::from_slice(bytes)?;
        if record.placetype_label().as_deref() != Some(label) {
            return Ok(());
        }
        let compiled = R::from_record(&record)
            .map_err(|err| err.with_frame(format!("compiling {}", path.display())))?;
        debug!(id = compiled.wof_id(), name = compiled.name(), "compiled");
        records.push(compiled);
        Ok(())
    })?;

    info!(kind = %R::KIND, documents = seen, records = records.len(), "compiled dataset");
    Ok(records)
}

/// Serializes records as a dataset.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<R: LookupRecord>(records: &[R], pretty: bool) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_json(records, &mut out, pretty)?;
    Ok(out)
}

/// Writes records as a dataset, followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<R: LookupRecord, W: Write>(records: &[R], mut writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Reads a dataset.
///
/// # Errors
///
/// Returns an error if `bytes` is not a JSON array of `R`.
pub fn from_json<R: LookupRecord>(bytes: &[u8]) -> Result<Vec<R>> {
    Ok(serde_json::from_slice(bytes)?)
}
