//! Rendering dispatch: error precedence, strategy lookup, and the stable
//! `(error)` surface for execution errors.

use thiserror::Error;
use tracing::debug;

use crate::error::ClientError;
use crate::reply::Reply;

use super::classify::{classify, Strategy};
use super::presentation::{bulk_string, integer, list, simple_string};

/// Successfully rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Render-ready text produced by a formatter.
    Text(String),
    /// Pass-through for commands without a registered formatter.
    Raw(Reply),
}

/// Execution error formatted for display.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("(error) {0}")]
pub struct RenderedError(pub String);

/// Render a command result or execution error for display.
///
/// An execution error always wins: the reply is ignored and the error's
/// message gets the `(error)` prefix. Otherwise the command name selects a
/// formatter; unrecognized commands pass the reply through untouched.
pub fn render(
    command: &str,
    reply: Reply,
    err: Option<ClientError>,
) -> Result<Rendered, RenderedError> {
    if let Some(err) = err {
        return Err(RenderedError(err.to_string()));
    }

    let strategy = classify(command);
    debug!(command, ?strategy, "selected rendering strategy");

    let Some(strategy) = strategy else {
        return Ok(Rendered::Raw(reply));
    };

    let text = match strategy {
        Strategy::SimpleString => simple_string(&reply),
        Strategy::Int => integer(&reply),
        Strategy::BulkString => bulk_string(&reply),
        Strategy::List => list(&reply),
    };
    Ok(Rendered::Text(text))
}
