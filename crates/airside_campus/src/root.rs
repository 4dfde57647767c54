//! Hierarchy root resolution.

use std::collections::HashSet;

use airside_foundation::{Error, ErrorKind, RecordId, Result};
use airside_storage::RelationalIndex;
use tracing::debug;

/// Follows supersession forward from `seed` to the current record.
///
/// Zero successors means the record is current; exactly one means keep
/// walking; more than one is [`ErrorKind::AmbiguousSupersession`].
/// Revisiting a record, or taking more than `max_depth` steps, is
/// [`ErrorKind::CycleDetected`].
///
/// # Errors
///
/// Returns an error on ambiguity, cycles, or index failures.
pub fn find_current_root<I: RelationalIndex + ?Sized>(
    index: &I,
    seed: RecordId,
    max_depth: usize,
) -> Result<RecordId> {
    let mut chain = vec![seed];
    let mut visited = HashSet::from([seed]);
    let mut current = seed;

    loop {
        let successors = index.superseded_by(current)?;
        match successors.as_slice() {
            [] => {
                debug!(seed, current, steps = chain.len() - 1, "current root");
                return Ok(current);
            }
            [next] => {
                if !visited.insert(*next) || chain.len() > max_depth {
                    return Err(Error::new(ErrorKind::CycleDetected {
                        id: *next,
                        chain,
                    }));
                }
                debug!(from = current, to = *next, "superseded");
                chain.push(*next);
                current = *next;
            }
            _ => {
                return Err(Error::new(ErrorKind::AmbiguousSupersession {
                    id: current,
                    candidates: successors,
                }));
            }
        }
    }
}
