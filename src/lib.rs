//! Multi-paradigm SDK for figtree configuration file access.
//!
//! Figtree syntax is built on classic key/value pairs that may be organized
//! into a nested hierarchy of named sections. Key/value pairs carry no colon
//! or equal-sign: the whitespace between the key name and the beginning of
//! the value is enough to split a line into its left-hand and right-hand
//! halves, and values are never quote-delimited. Named sections are
//! multi-line collections of key/value pairs between a `key {` line and a
//! closing `}` line, nested arbitrarily deep. Block comments start a line
//! with `#`; terminal comments may follow a value after whitespace and a
//! hashtag.
//!
//! Three pragmas compose trees from several files: `!include` splices
//! another file's items inline, `!baseline` names a fallback-defaults file
//! merged underneath the whole document, and `!dtd` names a document type
//! definition that is parsed but not enforced.
//!
//! ```no_run
//! use figtree::{read_config, FigtreeWriter};
//!
//! # fn main() -> Result<(), figtree::ParseError> {
//! let root = read_config("conf/server")?;
//! if let Ok(host) = root.get_value("network/host") {
//!     println!("host = {host}");
//! }
//! print!("{}", root.write_to_string(&FigtreeWriter));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;
pub mod writer;

pub use domain::{
    merge_baseline_with_user, Branch, FileOrigin, Item, ItemKind, ItemValue, TreeError, TreeResult,
};
pub use parser::{FigtreeReader, ParseError, ParseOptions, ParseResult};
pub use writer::{
    FigtreeWriter, InternalWriter, JsonWriter, TreeWriter, WriteError, WriteResult, YamlWriter,
};

/// Read a user's configuration file, honoring any `!baseline` pragma it may
/// contain.
///
/// Returns the root branch of the tree created by merging the user's file
/// with any baseline file it points to. Fails with an I/O error naming the
/// requested path, or with a structural parse error such as an unmatched
/// closing brace.
pub fn read_config(path: impl AsRef<Path>) -> ParseResult<Branch> {
    FigtreeReader::new().read_config(path.as_ref())
}

/// Read one file of figtree syntax, plus any files embedded via `!include`
/// pragmas, without baseline merging.
pub fn read_figtree(path: impl AsRef<Path>, origin: FileOrigin) -> ParseResult<Branch> {
    FigtreeReader::new().read_figtree(path.as_ref(), origin)
}
