//! Filesystem node types

use crate::error::FsError;
use crate::types::{Entry, NodeKind, ROOT_ALIAS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub(crate) name: String,
    /// Opaque payload: document text, a URL, anything the consumer stores.
    #[serde(default)]
    pub content: String,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Directory node representation
///
/// Children are owned and keyed by their own name. The only way to insert a
/// child is [`DirectoryNode::insert`], which keys the node by `node.name()`,
/// so the stored key and the node's name cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub(crate) name: String,
    #[serde(default)]
    children: BTreeMap<String, Node>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Build a directory from a list of children.
    pub fn with_children(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        let mut dir = Self::new(name);
        for child in children {
            dir.insert(child);
        }
        dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Insert a child under its own name, returning any node it replaced.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.children.insert(node.name().to_string(), node)
    }

    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    /// Children sorted by name
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Listing rows for every child, sorted by name.
    pub fn entries(&self) -> Vec<Entry> {
        self.children.values().map(Node::entry).collect()
    }
}

/// Filesystem node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Node::File(FileNode::new(name, content))
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory(DirectoryNode::new(name))
    }

    /// An empty root directory named `~`.
    pub fn root() -> Self {
        Node::directory(ROOT_ALIAS)
    }

    /// Empty node of the given kind.
    pub fn empty(name: impl Into<String>, kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Node::file(name, String::new()),
            NodeKind::Directory => Node::directory(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    /// Only the rename operation may call this; the parent must rekey the node.
    pub(crate) fn set_name(&mut self, name: String) {
        match self {
            Node::File(f) => f.name = name,
            Node::Directory(d) => d.name = name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Directory(_) => NodeKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_dir(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    /// True for an empty file or an empty directory.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::File(f) => f.content.is_empty(),
            Node::Directory(d) => d.is_empty(),
        }
    }

    pub fn entry(&self) -> Entry {
        let size = match self {
            Node::File(f) => f.content.len(),
            Node::Directory(d) => d.len(),
        };
        Entry {
            name: self.name().to_string(),
            kind: self.kind(),
            size,
        }
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        match self {
            Node::File(_) => 1,
            Node::Directory(d) => 1 + d.children().map(Node::count).sum::<usize>(),
        }
    }

    /// Check that every stored key matches its node's name and that no child
    /// name is empty, contains `/` or is the root alias `~`.
    ///
    /// Trees built through the directory API always pass; this exists for
    /// trees that arrive through deserialization.
    pub fn validate(&self) -> Result<(), FsError> {
        self.validate_at(ROOT_ALIAS)
    }

    fn validate_at(&self, path: &str) -> Result<(), FsError> {
        let Node::Directory(dir) = self else {
            return Ok(());
        };
        for (key, child) in &dir.children {
            let child_path = format!("{}/{}", path, key);
            if key != child.name() {
                return Err(FsError::InvalidArgument(format!(
                    "{} is stored under '{}' but named '{}'",
                    child_path,
                    key,
                    child.name()
                )));
            }
            if key.is_empty() || key.contains('/') || key == ROOT_ALIAS {
                return Err(FsError::InvalidArgument(format!(
                    "invalid name '{}' under {}",
                    key, path
                )));
            }
            child.validate_at(&child_path)?;
        }
        Ok(())
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<DirectoryNode> for Node {
    fn from(dir: DirectoryNode) -> Self {
        Node::Directory(dir)
    }
}
