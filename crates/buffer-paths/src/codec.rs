use buffer_paths_json_pointer::{format_json_pointer, get_node, set_node, Path};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::tag::{buffer_index, buffer_reference, is_buffer_reference};
use crate::{BufferPathError, BufferPaths};

/// Order `paths` by the buffer index each one references in `patch`.
///
/// The result has at least `paths.len()` slots. Slot `i` holds the
/// candidate whose value is `@buffer_reference@i`, or `None`. Candidates
/// that are missing, malformed for the tree, or not references are skipped.
/// When two candidates reference the same buffer the later one wins.
pub fn reorder_buffer_paths(paths: &[Path], patch: &Value) -> BufferPaths {
    let mut out: BufferPaths = vec![None; paths.len()];
    for path in paths {
        let leaf = match get_node(patch, path) {
            Ok(Some(Value::String(leaf))) => leaf,
            Ok(_) => continue,
            Err(err) => {
                trace!(path = %format_json_pointer(path), %err, "skipping buffer path");
                continue;
            }
        };
        if !is_buffer_reference(leaf) {
            continue;
        }
        let index = buffer_index(leaf);
        // Buffers shared across several states can point past the candidate count.
        let Some(len) = index.checked_add(1) else {
            warn!(path = %format_json_pointer(path), "buffer index out of range");
            continue;
        };
        if out.len() < len {
            if let Err(err) = out.try_reserve(len - out.len()) {
                warn!(path = %format_json_pointer(path), index, %err, "buffer index out of range");
                continue;
            }
            out.resize(len, None);
        }
        out[index] = Some(path.clone());
    }
    debug!(
        candidates = paths.len(),
        slots = out.len(),
        "reordered buffer paths"
    );
    out
}

/// Write `@buffer_reference@i` at `paths[i]` for every present slot.
///
/// Missing intermediate objects and array slots are created. Fails on the
/// first path that disagrees with the shape of `patch`.
pub fn insert_buffer_paths(
    patch: &mut Value,
    paths: &[Option<Path>],
) -> Result<(), BufferPathError> {
    let mut written = 0usize;
    for (index, path) in paths.iter().enumerate() {
        let Some(path) = path else {
            continue;
        };
        set_node(patch, path, Value::String(buffer_reference(index)))?;
        written += 1;
    }
    debug!(slots = paths.len(), written, "inserted buffer paths");
    Ok(())
}
