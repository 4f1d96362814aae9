//! Command handlers: each binds one CLI subcommand to the core's resource
//! operations and renders the result for the terminal.

pub mod config;
pub mod documents;
pub mod questions;
pub mod status;
