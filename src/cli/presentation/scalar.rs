//! Scalar formatters: simple-string, integer, and bulk-string replies.

use crate::reply::Reply;

use super::{INVALID_TYPE, NIL};

/// Render a simple-string reply: the nil sentinel or the plain text form,
/// unquoted and unmodified.
pub fn simple_string(reply: &Reply) -> String {
    match reply {
        Reply::Nil => NIL.to_string(),
        other => other.plain(),
    }
}

/// Render an integer reply with the `(integer)` prefix.
///
/// A non-integer, non-nil reply reports the invalid-type sentinel instead of
/// failing.
pub fn integer(reply: &Reply) -> String {
    match reply {
        Reply::Nil => NIL.to_string(),
        Reply::Int(n) => format!("(integer) {}", n),
        _ => INVALID_TYPE.to_string(),
    }
}

/// Render a bulk-string reply. Integer payloads delegate to [`integer`]
/// because some commands return integer-typed values under bulk rendering.
pub fn bulk_string(reply: &Reply) -> String {
    match reply {
        Reply::Nil => NIL.to_string(),
        Reply::Int(_) => integer(reply),
        other => other.plain(),
    }
}
