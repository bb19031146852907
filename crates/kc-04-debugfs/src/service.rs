//! # Virtual Filesystem Service
//!
//! The tree is one `RwLock` around the root directory. Structural changes
//! (create/remove) take the write lock; lookups and `open` take the read
//! lock. File I/O runs outside the tree lock, synchronized by the object
//! behind the operation table.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use shared_types::{SubsystemId, PAGE_SIZE};
use tracing::{debug, info};

use crate::domain::{
    components, join_path, normalize_path, validate_name, Dentry, FileMode, Metadata, NodeKind,
    VfsError,
};
use crate::ports::FileOperations;

const TAG: &str = SubsystemId::Debugfs.tag();

enum Node {
    Directory {
        mode: FileMode,
        children: BTreeMap<String, Node>,
    },
    File {
        mode: FileMode,
        ops: Arc<dyn FileOperations>,
    },
}

impl Node {
    fn empty_dir() -> Self {
        Node::Directory {
            mode: FileMode::DIRECTORY,
            children: BTreeMap::new(),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    fn mode(&self) -> FileMode {
        match self {
            Node::Directory { mode, .. } | Node::File { mode, .. } => *mode,
        }
    }

    /// Number of entries in this subtree, itself included.
    fn count(&self) -> usize {
        match self {
            Node::File { .. } => 1,
            Node::Directory { children, .. } => 1 + children.values().map(Node::count).sum::<usize>(),
        }
    }
}

fn lookup<'a>(root: &'a Node, path: &str) -> Result<&'a Node, VfsError> {
    let mut node = root;
    for component in components(path)? {
        node = match node {
            Node::Directory { children, .. } => children
                .get(component)
                .ok_or_else(|| VfsError::NotFound(path.to_owned()))?,
            Node::File { .. } => return Err(VfsError::NotADirectory(path.to_owned())),
        };
    }
    Ok(node)
}

fn lookup_dir_mut<'a>(
    root: &'a mut Node,
    path: &str,
) -> Result<&'a mut BTreeMap<String, Node>, VfsError> {
    let mut node = root;
    for component in components(path)? {
        node = match node {
            Node::Directory { children, .. } => children
                .get_mut(component)
                .ok_or_else(|| VfsError::NotFound(path.to_owned()))?,
            Node::File { .. } => return Err(VfsError::NotADirectory(path.to_owned())),
        };
    }
    match node {
        Node::Directory { children, .. } => Ok(children),
        Node::File { .. } => Err(VfsError::NotADirectory(path.to_owned())),
    }
}

/// In-process virtual file tree.
pub struct VirtualFs {
    root: RwLock<Node>,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VirtualFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualFs")
            .field("entries", &(self.root.read().count() - 1))
            .finish()
    }
}

impl VirtualFs {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::empty_dir()),
        }
    }

    fn insert(&self, name: &str, parent: Option<&Dentry>, node: Node) -> Result<Dentry, VfsError> {
        validate_name(name)?;
        let parent_path = parent.map(Dentry::path).unwrap_or("");

        let mut root = self.root.write();
        let children = lookup_dir_mut(&mut root, parent_path)?;
        let path = join_path(parent_path, name);
        if children.contains_key(name) {
            return Err(VfsError::AlreadyExists(path));
        }
        children.insert(name.to_owned(), node);

        Ok(Dentry::new(path))
    }

    /// Create a directory under `parent`, or under the root when `None`.
    pub fn create_dir(&self, name: &str, parent: Option<&Dentry>) -> Result<Dentry, VfsError> {
        let dentry = self.insert(name, parent, Node::empty_dir())?;
        debug!("[{}] Created directory {}", TAG, dentry);
        Ok(dentry)
    }

    /// Create a file with an operation table.
    pub fn create_file(
        &self,
        name: &str,
        mode: FileMode,
        parent: Option<&Dentry>,
        ops: Arc<dyn FileOperations>,
    ) -> Result<Dentry, VfsError> {
        let dentry = self.insert(name, parent, Node::File { mode, ops })?;
        debug!("[{}] Created file {} (mode {})", TAG, dentry, mode);
        Ok(dentry)
    }

    /// Remove an entry and, for directories, everything below it.
    ///
    /// The detached subtree is dropped after the tree lock is released.
    pub fn remove(&self, dentry: &Dentry) -> Result<(), VfsError> {
        let path = normalize_path(dentry.path())?;
        let (parent_path, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (parent, name),
            None if path.is_empty() => {
                return Err(VfsError::InvalidPath(String::from("Cannot remove root")))
            }
            None => ("", path.as_str()),
        };

        let detached = {
            let mut root = self.root.write();
            let children = lookup_dir_mut(&mut root, parent_path)?;
            children
                .remove(name)
                .ok_or_else(|| VfsError::NotFound(path.clone()))?
        };

        info!("[{}] Removed {} ({} entries)", TAG, path, detached.count());
        drop(detached);
        Ok(())
    }

    /// Open a file for I/O. The handle starts at offset 0.
    pub fn open(&self, path: &str) -> Result<OpenFile, VfsError> {
        let path = normalize_path(path)?;
        let root = self.root.read();
        match lookup(&root, &path)? {
            Node::File { mode, ops } => Ok(OpenFile {
                path,
                mode: *mode,
                ops: Arc::downgrade(ops),
                pos: 0,
            }),
            Node::Directory { .. } => Err(VfsError::IsADirectory(path)),
        }
    }

    /// Names in a directory, sorted.
    pub fn list(&self, path: &str) -> Result<Vec<String>, VfsError> {
        let path = normalize_path(path)?;
        let root = self.root.read();
        match lookup(&root, &path)? {
            Node::Directory { children, .. } => Ok(children.keys().cloned().collect()),
            Node::File { .. } => Err(VfsError::NotADirectory(path)),
        }
    }

    /// Whether an entry exists at `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.metadata(path).is_ok()
    }

    /// Kind and mode of the entry at `path`.
    pub fn metadata(&self, path: &str) -> Result<Metadata, VfsError> {
        let path = normalize_path(path)?;
        let root = self.root.read();
        let node = lookup(&root, &path)?;
        Ok(Metadata {
            kind: node.kind(),
            mode: node.mode(),
            path,
        })
    }
}

/// An open file: operation table, mode and cursor.
///
/// Holds the table weakly, so removing the entry invalidates the handle.
pub struct OpenFile {
    path: String,
    mode: FileMode,
    ops: Weak<dyn FileOperations>,
    pos: u64,
}

impl fmt::Debug for OpenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenFile")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("pos", &self.pos)
            .finish()
    }
}

impl OpenFile {
    fn ops(&self) -> Result<Arc<dyn FileOperations>, VfsError> {
        self.ops
            .upgrade()
            .ok_or_else(|| VfsError::Stale(self.path.clone()))
    }

    /// Read up to `len` bytes at the cursor, advancing it.
    ///
    /// No file serves more than one page per request, so larger requests
    /// return a short read.
    pub fn read(&mut self, len: usize) -> Result<Vec<u8>, VfsError> {
        let mut out = vec![0u8; len.min(PAGE_SIZE)];
        let count = self.read_into(&mut out)?;
        out.truncate(count);
        Ok(out)
    }

    /// Read into `dst` at the cursor, advancing it.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<usize, VfsError> {
        if !self.mode.owner_can_read() {
            return Err(VfsError::PermissionDenied(self.path.clone()));
        }
        self.ops()?.read(&mut self.pos, dst)
    }

    /// Read everything from the cursor to end of content.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>, VfsError> {
        let mut out = Vec::new();
        let mut chunk = [0u8; 512];
        loop {
            let count = self.read_into(&mut chunk)?;
            if count == 0 {
                return Ok(out);
            }
            out.extend_from_slice(&chunk[..count]);
        }
    }

    /// Write `data` at the cursor, advancing it by the count accepted.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, VfsError> {
        if !self.mode.owner_can_write() {
            return Err(VfsError::PermissionDenied(self.path.clone()));
        }
        self.ops()?.write(&mut self.pos, data)
    }

    /// Move the cursor.
    pub fn seek(&mut self, pos: u64) {
        self.pos = pos;
    }

    /// Current cursor.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Normalized path the handle was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Mode at open time.
    pub fn mode(&self) -> FileMode {
        self.mode
    }
}
