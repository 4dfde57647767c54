//! Presentation views over a derived tree.

use std::io::Write;
use std::ops::ControlFlow;

use airside_foundation::{Error, RecordId, Result};
use airside_storage::RecordStore;
use tracing::warn;

use crate::entity::Entity;

/// Returns the tree as nested JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(entity: &Entity) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(entity)?)
}

/// Writes the tree as JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(entity: &Entity, mut writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, entity)?;
    } else {
        serde_json::to_writer(&mut writer, entity)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Writes the tree as a tab-indented outline, one node per line:
/// `(<placetype>) <id> <name>`.
///
/// Names are read from `store`; a node whose name cannot be read is logged
/// and printed with an empty name.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tree<W: Write, S: RecordStore + ?Sized>(
    entity: &Entity,
    store: &S,
    mut writer: W,
) -> Result<()> {
    let flow = entity.walk(&mut |node, depth| {
        let line = tree_line(node, depth, &display_name(store, node.id()));
        match writeln!(writer, "{line}") {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(err),
        }
    });
    match flow {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(err) => Err(Error::from(err)),
    }
}

fn tree_line(node: &Entity, depth: usize, name: &str) -> String {
    format!(
        "{}({}) {} {name}",
        "\t".repeat(depth),
        node.placetype(),
        node.id()
    )
}

fn display_name<S: RecordStore + ?Sized>(store: &S, id: RecordId) -> String {
    match store.load_record(id) {
        Ok(record) => record.name().unwrap_or_else(|| {
            warn!(id, "record has no name");
            String::new()
        }),
        Err(err) => {
            warn!(id, error = %err, "failed to read name");
            String::new()
        }
    }
}
