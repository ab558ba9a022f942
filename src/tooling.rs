//! Tooling & Integration Layer
//!
//! Provides the command-line entry points over a desktop filesystem session.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
