//! In-Memory Tree
//!
//! An arena-backed virtual file system tree. Slot 0 always holds the root
//! directory `/`.

use super::node::{Node, NodeEntry};
use super::types::*;

/// In-memory virtual file system tree.
#[derive(Debug, Clone)]
pub struct VfsTree {
    nodes: Vec<Option<Node>>,
}

const ROOT: NodeId = NodeId(0);

impl VfsTree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self { nodes: vec![Some(Node::directory("/", None))] }
    }

    /// Drop every node and start over with an empty root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Some(Node::directory("/", None)));
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.node(ROOT)
            .and_then(|n| n.children())
            .map_or(true, |c| c.is_empty())
    }

    /// Create a directory under `parent`.
    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.check_insert(parent, name, "mkdir")?;
        Ok(self.attach(parent, Node::directory(name, Some(parent))))
    }

    /// Create a file under `parent`.
    pub fn add_file(
        &mut self,
        parent: NodeId,
        name: &str,
        content: Vec<u8>,
        encoding: Encoding,
    ) -> Result<NodeId, FsError> {
        self.check_insert(parent, name, "open")?;
        Ok(self.attach(parent, Node::file(name, parent, content, encoding)))
    }

    fn check_insert(&self, parent: NodeId, name: &str, operation: &str) -> Result<(), FsError> {
        let children = self
            .node(parent)
            .and_then(|n| n.children())
            .ok_or_else(|| FsError::NotDirectory {
                path: self.absolute_path(parent),
                operation: operation.to_string(),
            })?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists {
                path: join_path(&self.absolute_path(parent), name),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = node.name.clone();
        self.nodes.push(Some(node));
        if let Some(children) = self.nodes[parent.0].as_mut().and_then(|n| n.children_mut()) {
            children.insert(name, id);
        }
        id
    }

    /// Resolve `path` against `cwd`.
    ///
    /// Absolute paths start at the root, relative ones at the node `cwd`
    /// names. `.` stays put, `..` climbs one level and is a no-op at the
    /// root. Returns `None` when a segment is missing or when any segment
    /// follows a file.
    pub fn resolve(&self, path: &str, cwd: &str) -> Option<NodeId> {
        let start = if path.starts_with('/') {
            ROOT
        } else {
            self.walk(ROOT, cwd)?
        };
        self.walk(start, path)
    }

    fn walk(&self, start: NodeId, path: &str) -> Option<NodeId> {
        let mut current = start;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let node = self.node(current)?;
            let children = node.children()?;
            match segment {
                "." => {}
                ".." => current = node.parent.unwrap_or(current),
                name => current = *children.get(name)?,
            }
        }
        Some(current)
    }

    /// Direct child of `dir` named `name`.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.node(dir)?.children()?.get(name).copied()
    }

    /// Children of a directory, sorted by name.
    pub fn list_children(&self, id: NodeId) -> Result<Vec<DirentEntry>, FsError> {
        let children = self
            .node(id)
            .and_then(|n| n.children())
            .ok_or_else(|| self.not_directory(id, "scandir"))?;

        let mut entries: Vec<DirentEntry> = children
            .iter()
            .filter_map(|(name, child)| {
                self.node(*child).map(|n| DirentEntry {
                    name: name.clone(),
                    is_directory: n.is_directory(),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Bytes and encoding hint of a file.
    pub fn read_file(&self, id: NodeId) -> Result<FileData<'_>, FsError> {
        match self.node(id).map(|n| &n.entry) {
            Some(NodeEntry::File { content, encoding }) => Ok(FileData {
                content,
                encoding: *encoding,
            }),
            Some(_) => Err(FsError::IsDirectory {
                path: self.absolute_path(id),
                operation: "read".to_string(),
            }),
            None => Err(self.not_found(id, "read")),
        }
    }

    /// Canonical absolute path of a node, rebuilt from parent links.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            let Some(parent) = node.parent else { break };
            names.push(node.name.as_str());
            current = self.node(parent);
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Detach an empty directory from its parent.
    pub fn remove_empty_directory(&mut self, id: NodeId) -> Result<(), FsError> {
        let operation = "rmdir";
        if id == ROOT {
            return Err(FsError::RootRemoval { operation: operation.to_string() });
        }
        let node = self.node(id).ok_or_else(|| self.not_found(id, operation))?;
        let children = node.children().ok_or_else(|| self.not_directory(id, operation))?;
        if !children.is_empty() {
            return Err(FsError::NotEmpty {
                path: self.absolute_path(id),
                operation: operation.to_string(),
            });
        }

        let name = node.name.clone();
        if let Some(parent) = node.parent {
            if let Some(siblings) = self.nodes[parent.0].as_mut().and_then(|n| n.children_mut()) {
                siblings.remove(&name);
            }
        }
        self.nodes[id.0] = None;
        Ok(())
    }

    /// Total bytes held by files at or below `id`.
    pub fn subtree_size(&self, id: NodeId) -> u64 {
        let mut total = 0u64;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.node(current).map(|n| &n.entry) {
                Some(NodeEntry::File { content, .. }) => total += content.len() as u64,
                Some(NodeEntry::Directory { children }) => {
                    stack.extend(children.values().copied())
                }
                None => {}
            }
        }
        total
    }

    fn not_found(&self, id: NodeId, operation: &str) -> FsError {
        FsError::NotFound {
            path: format!("#{}", id.0),
            operation: operation.to_string(),
        }
    }

    fn not_directory(&self, id: NodeId, operation: &str) -> FsError {
        FsError::NotDirectory {
            path: self.absolute_path(id),
            operation: operation.to_string(),
        }
    }
}

impl Default for VfsTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a directory path and a child name.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Split a path into its parent part and final segment.
///
/// Trailing slashes are ignored. A bare name has parent `.`; a name directly
/// under the root has parent `/`. Returns `None` for the root itself.
pub fn split_parent(path: &str) -> Option<(String, String)> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind('/') {
        None => Some((".".to_string(), trimmed.to_string())),
        Some(0) => Some(("/".to_string(), trimmed[1..].to_string())),
        Some(pos) => Some((trimmed[..pos].to_string(), trimmed[pos + 1..].to_string())),
    }
}
