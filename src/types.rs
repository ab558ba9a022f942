//! Core types shared across the virtual filesystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the root directory and the user-facing root alias.
pub const ROOT_ALIAS: &str = "~";

/// Base name used when creating a new file.
pub const DEFAULT_FILE_BASE: &str = "Untitled";

/// Base name used when creating a new directory.
pub const DEFAULT_FOLDER_BASE: &str = "New Folder";

/// Extension appended to generated file names.
pub const DEFAULT_FILE_EXTENSION: &str = ".txt";

/// Kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// Base name `create` uses for this kind.
    pub fn default_base(&self) -> &'static str {
        match self {
            NodeKind::File => DEFAULT_FILE_BASE,
            NodeKind::Directory => DEFAULT_FOLDER_BASE,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub kind: NodeKind,
    /// Content length in bytes for files, child count for directories.
    pub size: usize,
}

/// A listing entry paired with the `~/…` path that addresses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub path: String,
    #[serde(flatten)]
    pub entry: Entry,
}
