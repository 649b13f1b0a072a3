//! Writer layer: serializing a configuration tree
//!
//! Every renderer implements [`TreeWriter`]: it receives a branch and an
//! indentation depth and appends text. The tree itself is agnostic to which
//! renderer is used; four are provided, covering native figtree syntax, an
//! internally annotated debugging view, JSON, and YAML.

pub mod figtree;
pub mod internal;
pub mod json;
pub mod yaml;

pub use figtree::FigtreeWriter;
pub use internal::InternalWriter;
pub use json::JsonWriter;
pub use yaml::YamlWriter;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Branch, Item};

/// Errors raised when writing a rendered tree out.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// A renderer for configuration trees.
pub trait TreeWriter {
    /// Append the rendering of `branch`, indented `depth` levels, to `out`.
    fn serialize(&self, branch: &Branch, out: &mut String, depth: usize);
}

impl Branch {
    /// Render this branch to a string with the given writer.
    pub fn write_to_string(&self, writer: &dyn TreeWriter) -> String {
        let mut out = String::new();
        writer.serialize(self, &mut out, 0);
        out
    }

    /// Render this branch to a file with the given writer.
    ///
    /// Typically called on the root branch, but safe on any branch, allowing
    /// a pruned portion of a tree to be serialized. The output directory
    /// must already exist and be writable.
    pub fn write_to_file(&self, writer: &dyn TreeWriter, path: &Path) -> WriteResult<()> {
        std::fs::write(path, self.write_to_string(writer)).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The rendered inline comment of an item, empty when it has none.
pub(crate) fn terminal_annotation(item: &Item) -> String {
    if item.terminal_comment().is_empty() {
        String::new()
    } else {
        format!("{}# {}", item.terminal_whitespace(), item.terminal_comment())
    }
}

/// Strip the trailing `[]` marker that forces array rendering, if present.
///
/// Returns the bare key name and whether the marker was there. The marker is
/// a renderer-side convention: it makes JSON and YAML emit an array even for
/// a key with zero or one occurrence.
pub(crate) fn array_suffix(key: &str) -> (&str, bool) {
    match key.strip_suffix("[]") {
        Some(bare) => (bare, true),
        None => (key, false),
    }
}
