//! Single-writer access to a shared filesystem session
//!
//! Every surface of the desktop (explorer, editor, terminal) mutates the same
//! tree. `SharedFs` serializes those mutations: reads share the lock, writes
//! take it exclusively, so a read-modify-replace cycle is never interleaved
//! with another operation.

use crate::tree::Node;
use crate::vfs::VirtualFs;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to one filesystem session.
///
/// Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct SharedFs {
    inner: Arc<RwLock<VirtualFs>>,
}

/// Deep copy of a tree taken by [`SharedFs::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    fs: VirtualFs,
}

impl Snapshot {
    pub fn root(&self) -> &Node {
        self.fs.root()
    }
}

impl SharedFs {
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            inner: Arc::new(RwLock::new(fs)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&VirtualFs) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run `f` with exclusive write access.
    pub fn write<R>(&self, f: impl FnOnce(&mut VirtualFs) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Copy the current tree.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            fs: self.inner.read().clone(),
        }
    }

    /// Replace the current tree with a snapshot.
    pub fn restore(&self, snapshot: Snapshot) {
        *self.inner.write() = snapshot.fs;
    }
}
