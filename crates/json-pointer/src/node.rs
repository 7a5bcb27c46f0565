use serde_json::{Map, Value};

use crate::util::parse_index;
use crate::JsonPointerError;

fn malformed(step: &str, depth: usize) -> JsonPointerError {
    JsonPointerError::MalformedIndex {
        step: step.to_string(),
        depth,
    }
}

/// Read the node at `path` without modifying the tree.
///
/// A missing key, an out-of-range index or a scalar in the middle of the
/// path gives `Ok(None)`. A step with no leading digits applied to an array
/// gives [`JsonPointerError::MalformedIndex`].
pub fn get_node<'a>(root: &'a Value, path: &[String]) -> Result<Option<&'a Value>, JsonPointerError> {
    let mut current = root;
    for (depth, step) in path.iter().enumerate() {
        let next = match current {
            Value::Array(items) => {
                let index = parse_index(step).ok_or_else(|| malformed(step, depth))?;
                items.get(index)
            }
            Value::Object(map) => map.get(step),
            _ => None,
        };
        match next {
            Some(node) => current = node,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Return a mutable handle to the node at `path`, creating whatever is missing.
///
/// - A `null` node being descended into becomes an empty object.
/// - An array indexed at or past its end is extended with `null`.
/// - A missing object key is inserted as `null`.
///
/// Fails when the path disagrees with the existing shape (a non-numeric
/// step against an array, or a step into a bool/number/string) and when an
/// array cannot grow to the requested index.
pub fn get_or_create_node<'a>(
    root: &'a mut Value,
    path: &[String],
) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = root;
    for (depth, step) in path.iter().enumerate() {
        if current.is_null() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Array(items) => {
                let index = parse_index(step).ok_or_else(|| malformed(step, depth))?;
                let too_large = || JsonPointerError::IndexTooLarge {
                    step: step.to_string(),
                    depth,
                };
                let len = index.checked_add(1).ok_or_else(too_large)?;
                if items.len() < len {
                    items
                        .try_reserve(len - items.len())
                        .map_err(|_| too_large())?;
                    items.resize(len, Value::Null);
                }
                &mut items[index]
            }
            Value::Object(map) => map.entry(step.as_str()).or_insert(Value::Null),
            _ => return Err(JsonPointerError::NotAContainer { depth }),
        };
    }
    Ok(current)
}

/// Overwrite the node at `path` with `value`, creating intermediate nodes.
pub fn set_node(root: &mut Value, path: &[String], value: Value) -> Result<(), JsonPointerError> {
    *get_or_create_node(root, path)? = value;
    Ok(())
}
