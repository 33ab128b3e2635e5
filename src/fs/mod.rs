//! File System Module
//!
//! Provides the in-memory virtual file system the shell operates on:
//! - VfsTree: arena-backed tree of directories and files
//! - loader: builds a VfsTree from a JSON/YAML/TOML description

pub mod types;
pub mod node;
pub mod tree;
pub mod loader;

pub use types::*;
pub use node::Node;
pub use tree::{join_path, split_parent, VfsTree};
pub use loader::{Declaration, DescriptionFormat, LoadError, LoadSummary, VfsDescription};
