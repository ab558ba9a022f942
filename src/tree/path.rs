//! Path string conventions
//!
//! The tree operations work on segment sequences. These helpers turn the
//! user-facing `~`, `~/a/b` and `a/b` forms into segments and back.

use crate::types::ROOT_ALIAS;

/// Split a path string into segments.
///
/// `~/a/b` drops the two-character prefix then splits, a bare `~` is the root
/// (no segments), and anything else splits directly on `/`. Empty segments are
/// kept; resolution treats them as no-ops.
pub fn split_path(path: &str) -> Vec<String> {
    if path == ROOT_ALIAS {
        return Vec::new();
    }
    let rest = path.strip_prefix("~/").unwrap_or(path);
    rest.split('/').map(str::to_string).collect()
}

/// Split a path into its parent segments and the final name.
///
/// Returns `None` when there is no final name: the root, the empty string or
/// a path ending in `/`.
pub fn split_parent(path: &str) -> Option<(Vec<String>, String)> {
    let mut segments = split_path(path);
    let name = segments.pop()?;
    if name.is_empty() {
        return None;
    }
    Some((segments, name))
}

/// Join a parent path and a child name into a `~/…` path.
pub fn join_path(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() || parent == ROOT_ALIAS {
        format!("{}/{}", ROOT_ALIAS, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Render a segment sequence as a `~/…` path.
pub fn display_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::from(ROOT_ALIAS);
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() || segment == ROOT_ALIAS {
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Trailing `.<word>` suffix of a name, dot included.
///
/// A word is one or more ASCII alphanumerics or underscores, so `notes.txt`
/// yields `.txt` while `notes`, `notes.` and `a.b-c` yield nothing.
pub fn extension(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    let suffix = &name[dot + 1..];
    if !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Some(&name[dot..])
    } else {
        None
    }
}
