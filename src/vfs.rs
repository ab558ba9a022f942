//! Virtual Filesystem
//!
//! Owns the tree root and exposes the path-string operation set used by the
//! desktop surfaces: explorer, editor, terminal and music player.

use crate::error::FsError;
use crate::seed;
use crate::tree::{self, split_path, DirectoryNode, Node};
use crate::types::{Entry, NodeKind, PathEntry};
use tracing::debug;

/// Directory whose children are shown as desktop icons.
pub const HOME_PATH: &str = "~/Home";

/// Directory the music player reads its tracks from.
pub const MUSIC_PATH: &str = "~/Home/Music";

/// In-memory filesystem rooted at `~`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    root: Node,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Create a filesystem holding the built-in desktop tree.
    pub fn with_default_seed() -> Self {
        Self {
            root: seed::default_seed(),
        }
    }

    /// Wrap an existing tree. The root must be a directory with consistent
    /// child names.
    pub fn from_root(root: Node) -> Result<Self, FsError> {
        if !root.is_dir() {
            return Err(FsError::NotADirectory(root.name().to_string()));
        }
        root.validate()?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Resolve a pre-split segment sequence.
    pub fn resolve_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Node> {
        tree::resolve(segments, &self.root)
    }

    /// Resolve a path string.
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        tree::resolve(&split_path(path), &self.root)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// Name `create` would assign for `base_name` inside `parent_path`.
    pub fn unique_name(
        &self,
        parent_path: &str,
        base_name: &str,
        kind: NodeKind,
    ) -> Result<String, FsError> {
        let parent = self.directory(parent_path)?;
        Ok(tree::unique_name(parent, base_name, kind))
    }

    pub fn create(&mut self, parent_path: &str, kind: NodeKind) -> Result<String, FsError> {
        match tree::create(parent_path, kind, &mut self.root) {
            Ok(name) => {
                debug!(parent = parent_path, %kind, name = %name, "Created item");
                Ok(name)
            }
            Err(e) => {
                debug!(parent = parent_path, %kind, error = %e, "Create failed");
                Err(e)
            }
        }
    }

    /// Delete the item at `path`, returning the removed subtree.
    pub fn delete(&mut self, path: &str) -> Result<Node, FsError> {
        match tree::delete(path, &mut self.root) {
            Ok(removed) => {
                debug!(path, nodes = removed.count(), "Deleted item");
                Ok(removed)
            }
            Err(e) => {
                debug!(path, error = %e, "Delete failed");
                Err(e)
            }
        }
    }

    /// Rename the item at `path`, returning the name it is stored under.
    pub fn rename(&mut self, path: &str, new_name: &str) -> Result<String, FsError> {
        match tree::rename(path, new_name, &mut self.root) {
            Ok(name) => {
                debug!(path, requested = new_name, name = %name, "Renamed item");
                Ok(name)
            }
            Err(e) => {
                debug!(path, requested = new_name, error = %e, "Rename failed");
                Err(e)
            }
        }
    }

    /// Replace a file's content (the editor's save).
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        tree::write_file(path, content, &mut self.root)?;
        debug!(path, bytes = content.len(), "Saved file");
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        tree::read_file(path, &self.root)
    }

    pub fn list(&self, path: &str) -> Result<Vec<Entry>, FsError> {
        tree::list(path, &self.root)
    }

    /// Children of `~/Home` with the paths the desktop opens them by.
    ///
    /// Empty when `~/Home` is missing or not a directory.
    pub fn desktop_items(&self) -> Vec<PathEntry> {
        self.path_entries(HOME_PATH, |_| true)
    }

    /// Files in `~/Home/Music`. Each file's content is the track's source URL.
    pub fn music_tracks(&self) -> Vec<PathEntry> {
        self.path_entries(MUSIC_PATH, |node| node.is_file())
    }

    fn path_entries(&self, dir_path: &str, keep: impl Fn(&Node) -> bool) -> Vec<PathEntry> {
        let Ok(dir) = self.directory(dir_path) else {
            return Vec::new();
        };
        dir.children()
            .filter(|node| keep(node))
            .map(|node| PathEntry {
                path: tree::join_path(dir_path, node.name()),
                entry: node.entry(),
            })
            .collect()
    }

    fn directory(&self, path: &str) -> Result<&DirectoryNode, FsError> {
        self.resolve(path)
            .ok_or_else(|| FsError::NotFound(path.to_string()))?
            .as_dir()
            .ok_or_else(|| FsError::NotADirectory(path.to_string()))
    }
}
