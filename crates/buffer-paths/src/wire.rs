//! JSON form of a buffer-path list as carried inside widget messages.
//!
//! The list is a JSON array with one entry per buffer: an array of path
//! steps, or `null` for an unused slot.

use buffer_paths_json_pointer::Path;
use serde_json::Value;

use crate::{BufferPathError, BufferPaths};

pub fn buffer_paths_to_json(paths: &[Option<Path>]) -> Value {
    Value::Array(
        paths
            .iter()
            .map(|path| match path {
                Some(steps) => Value::Array(steps.iter().cloned().map(Value::String).collect()),
                None => Value::Null,
            })
            .collect(),
    )
}

/// Decode a buffer-path list from its JSON form.
///
/// Steps may be strings or non-negative integers; integers become their
/// decimal string, which is how array indices are addressed.
pub fn buffer_paths_from_json(value: &Value) -> Result<BufferPaths, BufferPathError> {
    let entries = value.as_array().ok_or(BufferPathError::NotAList)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Null => Ok(None),
            Value::Array(steps) => steps
                .iter()
                .enumerate()
                .map(|(position, step)| {
                    path_step(step).ok_or(BufferPathError::InvalidStep { index, position })
                })
                .collect::<Result<Path, _>>()
                .map(Some),
            _ => Err(BufferPathError::InvalidPath { index }),
        })
        .collect()
}

fn path_step(step: &Value) -> Option<String> {
    match step {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|v| v.to_string()),
        _ => None,
    }
}
