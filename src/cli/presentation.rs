//! Presentation: reply formatters reproducing the redis-cli text surface.
//!
//! Every formatter is a pure function from a [`crate::reply::Reply`] to text.
//! A shape mismatch never panics; it degrades to a textual sentinel so a
//! malformed reply only ever spoils its own line.

mod composite;
mod scalar;

pub use composite::{hash_pairs, list, members, scan_result};
pub use scalar::{bulk_string, integer, simple_string};

/// Sentinel printed for absent replies.
pub(crate) const NIL: &str = "(nil)";

/// Sentinel printed for an empty hash or set listing.
pub(crate) const EMPTY_LIST: &str = "(empty list or set)";

/// Sentinel printed when a reply's shape does not match the formatter.
pub(crate) const INVALID_TYPE: &str = "(error) invalid type";
