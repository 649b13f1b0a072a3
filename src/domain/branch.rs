//! Branch: an ordered collection of items, and the mutations over it
//!
//! Figtree syntax is built from classic key/value pairs that may be grouped
//! into a nested hierarchy of named sections. Key/value pairs carry no
//! assignment operator; the whitespace between the key name and the start of
//! the value splits the line into its two halves, and the value runs to the
//! end of the line with surrounding whitespace stripped. Named sections have
//! a key and a pair of braces: the opening brace is the last non-whitespace
//! character of its line, the closing brace the first of its own line, and
//! sections nest arbitrarily deep. Block comments start a line with `#`;
//! terminal comments follow a value after whitespace and a `#`.
//!
//! A branch holds multiple items with the same key; that repetition is the
//! format's native array mechanism.

use std::path::Path;

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::item::{FileOrigin, Item, ItemValue};

/// An ordered sequence of items; the document root is also a branch.
///
/// Item order is insertion order and is preserved by every read, merge, and
/// write operation unless [`Branch::sort_items`] is requested explicitly.
/// Keys need not be unique within a branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    pub(crate) items: Vec<Item>,
}

impl Branch {
    /// Create an empty branch, the starting point for in-memory figtree
    /// construction or for an inner branch to be added with one of the
    /// insertion functions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item at the end of the branch.
    pub fn append_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Add an item at the beginning of the branch.
    pub fn prepend_item(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Insert an item immediately before the first item with `target_key`.
    ///
    /// Returns `NotFound` if `target_key` is not in this branch.
    pub fn insert_before(&mut self, target_key: &str, item: Item) -> TreeResult<()> {
        match self.items.iter().position(|i| i.key == target_key) {
            Some(index) => {
                self.items.insert(index, item);
                Ok(())
            }
            None => Err(TreeError::NotFound(target_key.to_string())),
        }
    }

    /// Insert an item immediately after the first item with `target_key`.
    ///
    /// Returns `NotFound` if `target_key` is not in this branch.
    pub fn insert_after(&mut self, target_key: &str, item: Item) -> TreeResult<()> {
        match self.items.iter().position(|i| i.key == target_key) {
            Some(index) => {
                self.items.insert(index + 1, item);
                Ok(())
            }
            None => Err(TreeError::NotFound(target_key.to_string())),
        }
    }

    /// Remove the first item with the given key.
    ///
    /// When a branch has more than one item with the key, only the first one
    /// is removed. Returns `NotFound` if the key is not in this branch.
    pub fn remove_item(&mut self, key: &str) -> TreeResult<()> {
        match self.items.iter().position(|i| i.key == key) {
            Some(index) => {
                self.items.remove(index);
                Ok(())
            }
            None => Err(TreeError::NotFound(key.to_string())),
        }
    }

    /// Reorder the branch recursively: key/value items first, then inner
    /// branches, each set alphabetical by key (leaf ties broken by value).
    pub fn sort_items(&mut self) {
        self.items.sort_by_key(|item| item.sort_key());

        for item in &mut self.items {
            if let ItemValue::Branch(inner) = &mut item.value {
                inner.sort_items();
            }
        }
    }

    /// Move every item of `other` to the end of this branch, preserving
    /// order. Used to splice an included file's top level inline.
    pub(crate) fn splice_items(&mut self, other: Branch) {
        self.items.extend(other.items);
    }

    /// Append a freshly parsed item carrying its comments and provenance.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn push_parsed(
        &mut self,
        key: impl Into<String>,
        value: ItemValue,
        block_comments: Vec<String>,
        terminal_whitespace: String,
        terminal_comment: String,
        src_file: &Path,
        src_line: usize,
        origin: FileOrigin,
    ) {
        self.items.push(Item {
            key: key.into(),
            value,
            block_comments,
            terminal_whitespace,
            terminal_comment,
            src_file: src_file.to_path_buf(),
            src_line,
            origin,
        });
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
