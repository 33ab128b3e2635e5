//! Tree node

use std::collections::HashMap;

use super::types::{Encoding, NodeId, NodeKind};

/// A single entry of the virtual file system.
///
/// Nodes live in the tree arena. `parent` is a lookup index only; the
/// parent's `children` map is the single edge that keeps a node reachable.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) entry: NodeEntry,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeEntry {
    Directory { children: HashMap<String, NodeId> },
    File { content: Vec<u8>, encoding: Encoding },
}

impl Node {
    pub(crate) fn directory(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            entry: NodeEntry::Directory { children: HashMap::new() },
        }
    }

    pub(crate) fn file(
        name: impl Into<String>,
        parent: NodeId,
        content: Vec<u8>,
        encoding: Encoding,
    ) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent),
            entry: NodeEntry::File { content, encoding },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        match self.entry {
            NodeEntry::Directory { .. } => NodeKind::Directory,
            NodeEntry::File { .. } => NodeKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.entry, NodeEntry::Directory { .. })
    }

    /// Children of a directory; `None` for files.
    pub(crate) fn children(&self) -> Option<&HashMap<String, NodeId>> {
        match &self.entry {
            NodeEntry::Directory { children } => Some(children),
            NodeEntry::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut HashMap<String, NodeId>> {
        match &mut self.entry {
            NodeEntry::Directory { children } => Some(children),
            NodeEntry::File { .. } => None,
        }
    }
}
