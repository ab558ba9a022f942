//! deskfs: Virtual Filesystem for a Simulated Desktop
//!
//! An in-memory tree of directories and files addressed by `~`-relative path
//! strings. Every desktop surface (file manager, editor, terminal, music
//! player) reads and mutates the same tree through the operations here.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod seed;
pub mod shell;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod vfs;

pub use concurrency::{SharedFs, Snapshot};
pub use error::{ApiError, FsError};
pub use tree::{DirectoryNode, FileNode, Node};
pub use types::{Entry, NodeKind};
pub use vfs::VirtualFs;
