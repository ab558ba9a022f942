//! Integration tests for the desktop virtual filesystem

mod cli_contracts;
mod filesystem_properties;
mod generated_properties;
mod seed_files;
mod shell_session;
