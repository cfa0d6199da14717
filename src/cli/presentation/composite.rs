//! Composite formatters: numbered lists, hash pairs, set members, and
//! cursor-paged scan results.

use crate::reply::Reply;

use super::{EMPTY_LIST, INVALID_TYPE, NIL};

const INVALID_HASH_PAIRS: &str = "(error) invalid hash pair format";
const INVALID_SCAN: &str = "(error) invalid type or format";
const INVALID_SCAN_ITEMS: &str = "(error) invalid scan items format";

/// Render a list reply: 1-based numbered entries, one per line, quoted
/// unless the text already carries surrounding double quotes. Nil entries
/// render as `(nil)` without quotes. An empty array renders zero lines.
pub fn list(reply: &Reply) -> String {
    let items = match reply {
        Reply::Array(items) => items,
        _ => return INVALID_TYPE.to_string(),
    };

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if item.is_nil() {
            out.push_str(&format!("{}) {}\n", i + 1, NIL));
            continue;
        }

        let mut text = item.plain();
        if !(text.starts_with('"') && text.ends_with('"')) {
            text = format!("\"{}\"", text);
        }
        out.push_str(&format!("{}) {}\n", i + 1, text));
    }
    out
}

/// Render a flat key/value listing as aligned key and value line pairs.
///
/// The reply must be an even-length array alternating key, value. An empty
/// array renders the empty-listing sentinel. Odd length or a non-array
/// shape renders the hash-pair format error. Indices right-align to the
/// digit width of the pair count; each value line is indented to sit
/// exactly under its key, debug-quoted only when the value text contains a
/// double quote.
pub fn hash_pairs(reply: &Reply) -> String {
    let items = match reply {
        Reply::Array(items) => items,
        _ => return INVALID_HASH_PAIRS.to_string(),
    };
    if items.is_empty() {
        return EMPTY_LIST.to_string();
    }
    if items.len() % 2 != 0 {
        return INVALID_HASH_PAIRS.to_string();
    }

    let index_width = decimal_width(items.len() / 2);
    let mut out = String::new();
    for (pair, kv) in items.chunks(2).enumerate() {
        let key = kv[0].plain();
        let mut value = kv[1].plain();

        let index_str = format!("{:>width$}) ", pair + 1, width = index_width);
        out.push_str(&index_str);
        out.push_str(&key);
        out.push('\n');

        if value.contains('"') {
            value = format!("{:?}", value);
        }
        out.push_str(&" ".repeat(index_str.len()));
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Render set or sorted-set members: one line per member, 1-based indices
/// right-aligned to the digit width of the count, unquoted.
pub fn members(reply: &Reply) -> String {
    let items = match reply {
        Reply::Array(items) => items,
        _ => return INVALID_TYPE.to_string(),
    };

    let index_width = decimal_width(items.len());
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:>width$}) {}\n",
            i + 1,
            item.plain(),
            width = index_width
        ));
    }
    out
}

/// Render a cursor-paged scan reply: `[cursor, items]` where items feed the
/// hash-pair formatter. The cursor line comes first, then the page render
/// verbatim. Trailing elements beyond the first two are ignored.
pub fn scan_result(reply: &Reply) -> String {
    let parts = match reply {
        Reply::Array(parts) if parts.len() >= 2 => parts,
        _ => return INVALID_SCAN.to_string(),
    };

    let items = &parts[1];
    if !matches!(items, Reply::Array(_)) {
        return INVALID_SCAN_ITEMS.to_string();
    }

    format!("(cursor) {}\n{}", parts[0].plain(), hash_pairs(items))
}

fn decimal_width(n: usize) -> usize {
    n.to_string().len()
}
