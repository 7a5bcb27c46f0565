//! Buffer-reference rewriting for JSON widget patches.
//!
//! Binary payloads travel next to a JSON patch as an ordered list of
//! buffers. Inside the patch each payload is replaced by a string tag
//! `@buffer_reference@<N>` pointing at buffer `N`. This crate keeps the two
//! in sync:
//!
//! - [`reorder_buffer_paths`] probes candidate paths and returns them
//!   indexed by the buffer each one references.
//! - [`insert_buffer_paths`] writes the tag for buffer `i` at path `i`.
//!
//! ```
//! use buffer_paths::{insert_buffer_paths, reorder_buffer_paths};
//! use serde_json::json;
//!
//! let patch = json!({"a": "@buffer_reference@1", "b": "@buffer_reference@0"});
//! let candidates = vec![vec!["a".to_string()], vec!["b".to_string()]];
//! let ordered = reorder_buffer_paths(&candidates, &patch);
//! assert_eq!(ordered, vec![Some(vec!["b".to_string()]), Some(vec!["a".to_string()])]);
//!
//! let mut rebuilt = json!({});
//! insert_buffer_paths(&mut rebuilt, &ordered).unwrap();
//! assert_eq!(rebuilt, json!({"b": "@buffer_reference@0", "a": "@buffer_reference@1"}));
//! ```

use buffer_paths_json_pointer::{JsonPointerError, Path};
use thiserror::Error;

mod codec;
mod tag;
mod wire;

pub use buffer_paths_json_pointer as json_pointer;
pub use codec::{insert_buffer_paths, reorder_buffer_paths};
pub use tag::{
    buffer_index, buffer_reference, buffer_reference_prefix, is_buffer_reference,
    BUFFER_REFERENCE_PREFIX,
};
pub use wire::{buffer_paths_from_json, buffer_paths_to_json};

/// Patch locations indexed by buffer position; `None` marks an unused slot.
pub type BufferPaths = Vec<Option<Path>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferPathError {
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("buffer path list must be a JSON array")]
    NotAList,
    #[error("buffer path {index} must be an array of steps or null")]
    InvalidPath { index: usize },
    #[error("buffer path {index} has an invalid step at position {position}")]
    InvalidStep { index: usize, position: usize },
}
