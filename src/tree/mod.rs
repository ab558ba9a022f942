//! Tree structure: nodes, path conventions and the operations over them.

pub mod node;
pub mod ops;
pub mod path;

pub use node::{DirectoryNode, FileNode, Node};
pub use ops::{create, delete, list, read_file, rename, resolve, resolve_mut, unique_name, write_file};
pub use path::{display_path, extension, join_path, split_parent, split_path};
