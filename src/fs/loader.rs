//! VFS Description Loader
//!
//! Builds a [`VfsTree`] from a declarative description. The same schema is
//! accepted as JSON, YAML or TOML:
//!
//! ```json
//! { "entries": [
//!     { "type": "directory", "name": "docs", "children": [
//!         { "type": "file", "name": "a.txt", "encoding": "text", "content": "hello" }
//!     ] }
//! ] }
//! ```

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

use super::tree::VfsTree;
use super::types::{Encoding, NodeId};

/// Errors raised while reading or parsing a VFS description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read VFS description '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed VFS description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed VFS description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed VFS description: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Serialization format of a description document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl DescriptionFormat {
    /// Pick a format from a file extension, JSON when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Root of a description document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VfsDescription {
    #[serde(default)]
    pub entries: Vec<Declaration>,
}

/// A directory or file declaration.
///
/// Every attribute is optional; missing ones fall back to defaults when the
/// tree is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    #[serde(alias = "dir")]
    Directory {
        name: Option<String>,
        #[serde(default)]
        children: Vec<Declaration>,
    },
    File {
        name: Option<String>,
        encoding: Option<String>,
        content: Option<String>,
    },
}

/// Counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
    pub base64_fallbacks: usize,
}

impl VfsDescription {
    /// Parse a description document.
    pub fn parse(text: &str, format: DescriptionFormat) -> Result<Self, LoadError> {
        Ok(match format {
            DescriptionFormat::Json => serde_json::from_str(text)?,
            DescriptionFormat::Yaml => serde_yaml::from_str(text)?,
            DescriptionFormat::Toml => toml::from_str(text)?,
        })
    }
}

impl VfsTree {
    /// Replace the tree's contents with the given description.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = description.entries.len()))]
    pub fn load(&mut self, description: &VfsDescription) -> LoadSummary {
        self.clear();
        let mut summary = LoadSummary::default();
        let root = self.root();
        self.build(root, &description.entries, &mut summary);
        tracing::info!(
            directories = summary.directories,
            files = summary.files,
            skipped = summary.skipped,
            "VFS loaded"
        );
        summary
    }

    /// Parse `text` in `format` and load it.
    pub fn load_str(&mut self, text: &str, format: DescriptionFormat) -> Result<LoadSummary, LoadError> {
        let description = VfsDescription::parse(text, format)?;
        Ok(self.load(&description))
    }

    /// Read a description file from the host filesystem and load it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_str(&text, DescriptionFormat::from_path(path))
    }

    fn build(&mut self, parent: NodeId, declarations: &[Declaration], summary: &mut LoadSummary) {
        for declaration in declarations {
            match declaration {
                Declaration::Directory { name, children } => {
                    let Some(name) = self.accept_name(parent, name.as_deref(), summary) else {
                        continue;
                    };
                    match self.add_directory(parent, name) {
                        Ok(id) => {
                            summary.directories += 1;
                            self.build(id, children, summary);
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "skipping directory declaration");
                            summary.skipped += 1;
                        }
                    }
                }
                Declaration::File { name, encoding, content } => {
                    let Some(name) = self.accept_name(parent, name.as_deref(), summary) else {
                        continue;
                    };
                    let tag = encoding.as_deref().unwrap_or("text");
                    let (bytes, encoding) =
                        decode_content(name, tag, content.as_deref().unwrap_or(""), summary);
                    match self.add_file(parent, name, bytes, encoding) {
                        Ok(_) => summary.files += 1,
                        Err(e) => {
                            tracing::warn!(error = %e, "skipping file declaration");
                            summary.skipped += 1;
                        }
                    }
                }
            }
        }
    }

    /// Validate a declared name, counting and logging rejections.
    fn accept_name<'a>(
        &self,
        parent: NodeId,
        name: Option<&'a str>,
        summary: &mut LoadSummary,
    ) -> Option<&'a str> {
        let reason = match name {
            None => "missing name",
            Some("") | Some(".") | Some("..") => "reserved name",
            Some(n) if n.contains('/') => "name contains '/'",
            Some(n) if self.lookup(parent, n).is_some() => "duplicate name",
            Some(n) => return Some(n),
        };
        tracing::warn!(
            parent = %self.absolute_path(parent),
            name = name.unwrap_or_default(),
            reason,
            "skipping declaration"
        );
        summary.skipped += 1;
        None
    }
}

/// Turn declared content into stored bytes.
///
/// Text gets a trailing newline when it lacks one. Base64 that fails to
/// decode is kept as its raw text and marked binary.
fn decode_content(
    name: &str,
    tag: &str,
    content: &str,
    summary: &mut LoadSummary,
) -> (Vec<u8>, Encoding) {
    match Encoding::from_tag(tag) {
        Encoding::Binary => {
            let cleaned: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            match STANDARD.decode(&cleaned) {
                Ok(bytes) => (bytes, Encoding::Binary),
                Err(e) => {
                    tracing::warn!(file = name, error = %e, "invalid base64, storing raw text");
                    summary.base64_fallbacks += 1;
                    (content.as_bytes().to_vec(), Encoding::Binary)
                }
            }
        }
        Encoding::Text => {
            let mut bytes = content.as_bytes().to_vec();
            if !bytes.is_empty() && !bytes.ends_with(b"\n") {
                bytes.push(b'\n');
            }
            (bytes, Encoding::Text)
        }
    }
}
