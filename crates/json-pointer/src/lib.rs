//! Path-addressed traversal over `serde_json::Value` trees.
//!
//! A path is an ordered list of string steps. Against an array a step is
//! read as an index with leading-digit semantics (`"3abc"` addresses
//! element 3); against an object it is used verbatim as a key.
//!
//! ```
//! use buffer_paths_json_pointer::{get_node, parse_json_pointer, set_node};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": [1, 2]});
//! let path = parse_json_pointer("/a/1").unwrap();
//! assert_eq!(get_node(&doc, &path), Ok(Some(&json!(2))));
//!
//! set_node(&mut doc, &parse_json_pointer("/b/c").unwrap(), json!(true)).unwrap();
//! assert_eq!(doc, json!({"a": [1, 2], "b": {"c": true}}));
//! ```

use thiserror::Error;

mod node;
mod types;
mod util;

pub use node::{get_node, get_or_create_node, set_node};
pub use types::{Path, PathStep};
pub use util::{
    escape_component, format_json_pointer, leading_digits, parse_index, parse_json_pointer,
    unescape_component,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("json pointer must be absolute or empty")]
    NotAbsolute,
    #[error("malformed array index {step:?} at depth {depth}")]
    MalformedIndex { step: String, depth: usize },
    #[error("array index {step:?} at depth {depth} is too large to allocate")]
    IndexTooLarge { step: String, depth: usize },
    #[error("cannot descend into a scalar at depth {depth}")]
    NotAContainer { depth: usize },
}
