//! CLI domain: classification, rendering dispatch, and presentation only.
//! No command execution; the surrounding client hands in decoded replies.

mod classify;
mod output;
mod presentation;

pub use classify::{classify, Strategy};
pub use output::{render, Rendered, RenderedError};
pub use presentation::{
    bulk_string, hash_pairs, integer, list, members, scan_result, simple_string,
};
