//! calltrace-cli library
//!
//! This module exposes the command types and handlers of the `calltrace`
//! binary for testing purposes.

#[doc(hidden)]
pub mod commands;

pub mod types;
pub use types::{Cli, Commands, RepoArgs};
