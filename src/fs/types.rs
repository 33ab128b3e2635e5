//! File System Types
//!
//! Core types for the virtual file system.

use thiserror::Error;

/// Index of a node inside the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("ENOTEMPTY: directory not empty, {operation} '{path}'")]
    NotEmpty { path: String, operation: String },

    #[error("EBUSY: cannot remove the root directory, {operation}")]
    RootRemoval { operation: String },
}

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// How a file's bytes are rendered back to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Text,
    Binary,
}

impl Encoding {
    /// Parse an encoding tag from a VFS description.
    ///
    /// `base64` marks the payload as encoded; anything else is text.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "base64" => Self::Binary,
            _ => Self::Text,
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub is_directory: bool,
}

impl DirentEntry {
    /// Name as shown by `ls`: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Content of a file together with its encoding hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileData<'a> {
    pub content: &'a [u8],
    pub encoding: Encoding,
}
