//! Merge of configuration sources into a `DeskConfig`.

pub(crate) mod merge_policy;
pub mod service;
