//! Item: one key/value entry of a branch, with its formatting metadata

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::branch::Branch;
use crate::domain::error::{TreeError, TreeResult};

/// Where an item was parsed from.
///
/// Distinguishes the user's configuration file from files pulled in via the
/// `!include`, `!baseline`, and `!dtd` pragmas. Used only for diagnostic
/// rendering, never for semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrigin {
    /// The configuration file named directly in a read call
    #[default]
    User,
    /// A file spliced in via the `!include` pragma
    Include,
    /// A fallback-defaults file referenced via the `!baseline` pragma
    Baseline,
    /// A document type definition referenced via the `!dtd` pragma
    Dtd,
}

impl fmt::Display for FileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileOrigin::User => "User",
            FileOrigin::Include => "Incl",
            FileOrigin::Baseline => "Base",
            FileOrigin::Dtd => "Dtd",
        };
        write!(f, "{s}")
    }
}

/// An item's payload: either a leaf string or an owned sub-tree.
///
/// An empty leaf string means a "key-only" item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Leaf(String),
    Branch(Branch),
}

impl ItemValue {
    pub fn is_leaf(&self) -> bool {
        matches!(self, ItemValue::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, ItemValue::Branch(_))
    }
}

/// The two item kinds, as reported by [`Item::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Leaf,
    Branch,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Leaf => write!(f, "[leaf]"),
            ItemKind::Branch => write!(f, "[branch]"),
        }
    }
}

/// A key paired with a leaf value or an inner branch.
///
/// The `block_comments` field holds any blank lines or `#` comment lines that
/// immediately precede the item, verbatim, so a tree can round-trip back to
/// text. `terminal_whitespace` is the literal run of tabs and spaces between
/// the value and an inline comment; `terminal_comment` is that comment's text.
/// `src_file`, `src_line`, and `origin` record where the item was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) key: String,
    pub(crate) value: ItemValue,
    pub(crate) block_comments: Vec<String>,
    pub(crate) terminal_whitespace: String,
    pub(crate) terminal_comment: String,
    pub(crate) src_file: PathBuf,
    pub(crate) src_line: usize,
    pub(crate) origin: FileOrigin,
}

impl Item {
    /// Create a leaf item with no comments or provenance.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: ItemValue::Leaf(value.into()),
            block_comments: Vec::new(),
            terminal_whitespace: String::new(),
            terminal_comment: String::new(),
            src_file: PathBuf::new(),
            src_line: 0,
            origin: FileOrigin::User,
        }
    }

    /// Create an item holding an inner branch.
    pub fn with_branch(key: impl Into<String>, branch: Branch) -> Self {
        Self {
            key: key.into(),
            value: ItemValue::Branch(branch),
            block_comments: Vec::new(),
            terminal_whitespace: String::new(),
            terminal_comment: String::new(),
            src_file: PathBuf::new(),
            src_line: 0,
            origin: FileOrigin::User,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Whether the item is a leaf or a branch.
    pub fn kind(&self) -> ItemKind {
        match self.value {
            ItemValue::Leaf(_) => ItemKind::Leaf,
            ItemValue::Branch(_) => ItemKind::Branch,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.value.is_leaf()
    }

    pub fn is_branch(&self) -> bool {
        self.value.is_branch()
    }

    /// The item's leaf value.
    ///
    /// Returns `NotLeaf` if the item holds a branch rather than a leaf.
    pub fn value(&self) -> TreeResult<&str> {
        match &self.value {
            ItemValue::Leaf(v) => Ok(v),
            ItemValue::Branch(_) => Err(TreeError::NotLeaf(self.key.clone())),
        }
    }

    /// Replace the item's value with a leaf string.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = ItemValue::Leaf(value.into());
    }

    /// The item's inner branch.
    ///
    /// Returns `NotBranch` if the item holds a leaf rather than a branch.
    pub fn branch(&self) -> TreeResult<&Branch> {
        match &self.value {
            ItemValue::Branch(b) => Ok(b),
            ItemValue::Leaf(_) => Err(TreeError::NotBranch(self.key.clone())),
        }
    }

    /// Mutable access to the item's inner branch.
    pub fn branch_mut(&mut self) -> TreeResult<&mut Branch> {
        match &mut self.value {
            ItemValue::Branch(b) => Ok(b),
            ItemValue::Leaf(_) => Err(TreeError::NotBranch(self.key.clone())),
        }
    }

    /// Replace the item's value with an inner branch.
    pub fn set_branch(&mut self, branch: Branch) {
        self.value = ItemValue::Branch(branch);
    }

    /// Number of items in the inner branch; 0 for a leaf.
    pub fn item_count(&self) -> usize {
        match &self.value {
            ItemValue::Leaf(_) => 0,
            ItemValue::Branch(b) => b.item_count(),
        }
    }

    /// Blank lines and `#` comment lines immediately preceding this item.
    pub fn block_comments(&self) -> &[String] {
        &self.block_comments
    }

    /// The literal whitespace between the value and an inline comment.
    pub fn terminal_whitespace(&self) -> &str {
        &self.terminal_whitespace
    }

    /// The text of an inline comment on the item's line, if any.
    pub fn terminal_comment(&self) -> &str {
        &self.terminal_comment
    }

    pub fn src_file(&self) -> &Path {
        &self.src_file
    }

    /// 1-based line number the item was parsed from.
    pub fn src_line(&self) -> usize {
        self.src_line
    }

    pub fn origin(&self) -> FileOrigin {
        self.origin
    }

    /// A string that orders this item amongst its siblings: key/value items
    /// first, then branches, each set alphabetically.
    pub(crate) fn sort_key(&self) -> String {
        match &self.value {
            ItemValue::Leaf(v) => format!("0{} {}", self.key, v),
            ItemValue::Branch(_) => format!("1{}", self.key),
        }
    }
}
