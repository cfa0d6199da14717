//! Decoded reply values handed to the rendering layer.
//!
//! The protocol decoder (outside this crate) produces exactly these shapes:
//! absent, 64-bit integer, text, error, or an ordered sequence of further
//! replies. Formatters pattern-match over the tag instead of inspecting
//! runtime types.

use serde::{Deserialize, Serialize};

/// A decoded command result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    /// Absent / null reply
    Nil,
    /// 64-bit integer reply
    Int(i64),
    /// Text reply
    Str(String),
    /// Error value carried inside a reply
    Error(String),
    /// Ordered sequence of replies, possibly nested
    Array(Vec<Reply>),
}

impl Reply {
    /// Plain, unquoted text form that the formatters build on.
    pub fn plain(&self) -> String {
        match self {
            Reply::Nil => "(nil)".to_string(),
            Reply::Int(n) => n.to_string(),
            Reply::Str(s) => s.clone(),
            Reply::Error(msg) => msg.clone(),
            Reply::Array(items) => {
                let parts: Vec<String> = items.iter().map(Reply::plain).collect();
                format!("[{}]", parts.join(" "))
            }
        }
    }

    /// True for the absent/null reply.
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// JSON form for the client's machine-readable output mode.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Reply::Nil => serde_json::Value::Null,
            Reply::Int(n) => serde_json::Value::from(*n),
            Reply::Str(s) => serde_json::Value::from(s.as_str()),
            Reply::Error(msg) => serde_json::json!({ "error": msg }),
            Reply::Array(items) => {
                serde_json::Value::Array(items.iter().map(Reply::to_json).collect())
            }
        }
    }
}

impl From<&str> for Reply {
    fn from(s: &str) -> Self {
        Reply::Str(s.to_string())
    }
}

impl From<String> for Reply {
    fn from(s: String) -> Self {
        Reply::Str(s)
    }
}

impl From<i64> for Reply {
    fn from(n: i64) -> Self {
        Reply::Int(n)
    }
}
