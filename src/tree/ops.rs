//! Tree operations: resolution, naming and mutation
//!
//! Every mutating operation either completes fully or leaves the tree
//! untouched; all checks run before the first change.

use super::node::{DirectoryNode, Node};
use super::path::{extension, split_parent, split_path};
use crate::error::FsError;
use crate::types::{Entry, NodeKind, DEFAULT_FILE_EXTENSION, ROOT_ALIAS};

fn is_noop_segment(segment: &str) -> bool {
    segment.is_empty() || segment == ROOT_ALIAS
}

/// Walk `segments` down from `root`.
///
/// Empty and `~` segments are skipped. Returns `None` as soon as a segment
/// names nothing, or names something below a file.
pub fn resolve<'a, S: AsRef<str>>(segments: &[S], root: &'a Node) -> Option<&'a Node> {
    let mut current = root;
    for segment in segments {
        let segment = segment.as_ref();
        if is_noop_segment(segment) {
            continue;
        }
        current = current.as_dir()?.get(segment)?;
    }
    Some(current)
}

/// Mutable twin of [`resolve`] with identical traversal rules.
pub fn resolve_mut<'a, S: AsRef<str>>(segments: &[S], root: &'a mut Node) -> Option<&'a mut Node> {
    let mut current = root;
    for segment in segments {
        let segment = segment.as_ref();
        if is_noop_segment(segment) {
            continue;
        }
        current = current.as_dir_mut()?.get_mut(segment)?;
    }
    Some(current)
}

/// Pick a name not yet present in `parent`.
///
/// Files are numbered on `base_name` minus any trailing `.txt` and always get
/// `.txt`, so `Untitled` and `Untitled.txt` behave the same. Directories use
/// `base_name` verbatim. The first candidate is `<base><ext>`, then
/// `<base> (1)<ext>`, `<base> (2)<ext>` and so on.
pub fn unique_name(parent: &DirectoryNode, base_name: &str, kind: NodeKind) -> String {
    let (stem, ext) = match kind {
        NodeKind::File => (
            base_name
                .strip_suffix(DEFAULT_FILE_EXTENSION)
                .unwrap_or(base_name),
            DEFAULT_FILE_EXTENSION,
        ),
        NodeKind::Directory => (base_name, ""),
    };

    let candidate = format!("{}{}", stem, ext);
    if !parent.contains(&candidate) {
        return candidate;
    }

    // Terminates: the children map is finite, so some counter is free.
    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{} ({}){}", stem, counter, ext);
        if !parent.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Create an empty node of `kind` inside the directory at `parent_path`.
///
/// Returns the generated name.
pub fn create(parent_path: &str, kind: NodeKind, root: &mut Node) -> Result<String, FsError> {
    let segments = split_path(parent_path);
    let parent = resolve_mut(&segments, root)
        .ok_or_else(|| FsError::NotFound(parent_path.to_string()))?
        .as_dir_mut()
        .ok_or_else(|| FsError::NotADirectory(parent_path.to_string()))?;

    let name = unique_name(parent, kind.default_base(), kind);
    parent.insert(Node::empty(name.clone(), kind));
    Ok(name)
}

/// Remove the item at `path` together with its whole subtree.
///
/// Returns the removed node. The root has no final name and so is never
/// removable.
pub fn delete(path: &str, root: &mut Node) -> Result<Node, FsError> {
    let not_found = || FsError::NotFound(path.to_string());
    let (parent_segments, name) = split_parent(path).ok_or_else(not_found)?;
    resolve_mut(&parent_segments, root)
        .and_then(Node::as_dir_mut)
        .and_then(|parent| parent.remove(&name))
        .ok_or_else(not_found)
}

/// Rename the item at `path` to `new_name` within its directory.
///
/// A file whose old name had an extension keeps it when `new_name` has none;
/// a `new_name` with its own extension is used verbatim. Returns the name the
/// item ends up stored under.
pub fn rename(path: &str, new_name: &str, root: &mut Node) -> Result<String, FsError> {
    if new_name.trim().is_empty() {
        return Err(FsError::InvalidArgument("name cannot be empty".to_string()));
    }
    if new_name.contains('/') {
        return Err(FsError::InvalidArgument(format!(
            "name cannot contain '/': {}",
            new_name
        )));
    }
    if new_name == ROOT_ALIAS {
        return Err(FsError::InvalidArgument(format!(
            "'{}' is reserved for the root",
            ROOT_ALIAS
        )));
    }

    let not_found = || FsError::NotFound(path.to_string());
    let (parent_segments, old_name) = split_parent(path).ok_or_else(not_found)?;
    let parent = resolve_mut(&parent_segments, root)
        .and_then(Node::as_dir_mut)
        .ok_or_else(not_found)?;
    let item = parent.get(&old_name).ok_or_else(not_found)?;

    let mut final_name = new_name.to_string();
    if item.is_file() && extension(new_name).is_none() {
        if let Some(ext) = extension(&old_name) {
            final_name.push_str(ext);
        }
    }

    if final_name == old_name {
        return Ok(final_name);
    }
    if parent.contains(&final_name) {
        return Err(FsError::Conflict(final_name));
    }

    let mut item = parent.remove(&old_name).ok_or_else(not_found)?;
    item.set_name(final_name.clone());
    parent.insert(item);
    Ok(final_name)
}

/// Replace the content of the file at `path`.
pub fn write_file(path: &str, content: &str, root: &mut Node) -> Result<(), FsError> {
    match resolve_mut(&split_path(path), root) {
        Some(Node::File(file)) => {
            file.content = content.to_string();
            Ok(())
        }
        Some(Node::Directory(_)) => Err(FsError::IsADirectory(path.to_string())),
        None => Err(FsError::NotFound(path.to_string())),
    }
}

/// Content of the file at `path`.
pub fn read_file<'a>(path: &str, root: &'a Node) -> Result<&'a str, FsError> {
    match resolve(&split_path(path), root) {
        Some(Node::File(file)) => Ok(&file.content),
        Some(Node::Directory(_)) => Err(FsError::IsADirectory(path.to_string())),
        None => Err(FsError::NotFound(path.to_string())),
    }
}

/// Entries of the directory at `path`, sorted by name.
pub fn list(path: &str, root: &Node) -> Result<Vec<Entry>, FsError> {
    match resolve(&split_path(path), root) {
        Some(Node::Directory(dir)) => Ok(dir.entries()),
        Some(Node::File(_)) => Err(FsError::NotADirectory(path.to_string())),
        None => Err(FsError::NotFound(path.to_string())),
    }
}
