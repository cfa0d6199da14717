//! kvcli: Output Rendering for Key-Value Store Clients
//!
//! The display layer of a command-line client for Redis-compatible key-value
//! stores. Decoded command results come in as [`reply::Reply`] values and
//! leave as the exact text surface redis-cli users expect.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reply;
