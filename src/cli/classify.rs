//! Command classification: static command-group tables and strategy lookup.

/// Rendering strategy for a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SimpleString,
    Int,
    BulkString,
    List,
}

/// Commands whose replies render as unquoted simple strings.
const SIMPLE_STRING_COMMANDS: &[&str] = &[
    "AUTH", "SELECT", "RENAME", "RESTORE", "MSET", "SET", "PFMERGE", "FLUSHDB",
];

/// Commands whose replies render with the `(integer)` prefix.
const INT_COMMANDS: &[&str] = &[
    "COPY",
    "DEL",
    "EXISTS",
    "EXPIRE",
    "EXPIREAT",
    "EXPIRETIME",
    "PERSIST",
    "PTTL",
    "TTL",
    "TOUCH",
    "HDEL",
    "HEXISTS",
    "HINCRBY",
    "HSET",
    "HSETNX",
    "HSTRLEN",
    "PFADD",
    "PFCOUNT",
    "LPUSH",
    "RPUSH",
    "LLEN",
    "SADD",
    "SREM",
    "SCARD",
    "SETBIT",
    "SETNX",
    "INCR",
    "INCRBY",
    "DECR",
    "DECRBY",
    "APPEND",
    "ZADD",
    "HINCRBYFLOAT",
    "BITPOS",
];

/// Commands whose replies render as bulk strings.
const BULK_STRING_COMMANDS: &[&str] = &[
    "ECHO",
    "PING",
    "DUMP",
    "TYPE",
    "GEODIST",
    "HGET",
    "HINCRBYFLOAT",
    "GET",
    "GETEX",
    "GETDEL",
    "GETRANGE",
    "GETSET",
    "INCRBYFLOAT",
    "ZSCORE",
];

/// Commands whose replies render as quoted, numbered lists.
const LIST_COMMANDS: &[&str] = &[
    "HELLO",
    "KEYS",
    "HKEYS",
    "HMGET",
    "HVALS",
    "HRANDFIELD",
    "SMEMBERS",
    "SDIFF",
    "SINTER",
    "MGET",
    "BITFIELD",
    "COMMAND",
];

/// Map a command name to its rendering strategy.
///
/// Names are trimmed and uppercased before lookup. Groups are checked in a
/// fixed order (simple string, integer, bulk string, list); a command listed
/// in more than one table gets the earlier group's formatter. Unknown
/// commands return `None` and the reply passes through unformatted.
pub fn classify(command: &str) -> Option<Strategy> {
    let normalized = command.trim().to_ascii_uppercase();
    let name = normalized.as_str();

    if SIMPLE_STRING_COMMANDS.contains(&name) {
        Some(Strategy::SimpleString)
    } else if INT_COMMANDS.contains(&name) {
        Some(Strategy::Int)
    } else if BULK_STRING_COMMANDS.contains(&name) {
        Some(Strategy::BulkString)
    } else if LIST_COMMANDS.contains(&name) {
        Some(Strategy::List)
    } else {
        None
    }
}
