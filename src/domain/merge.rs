//! Merging a fallback-defaults tree with a user's overrides
//!
//! The destination is typically a baseline tree of fallback values and the
//! source is the user's tree of explicit overrides: the source determines
//! final structure, the destination supplies only what the source omits.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::branch::Branch;
use crate::domain::item::{Item, ItemValue};

/// Combine a baseline tree with a user's tree.
///
/// With no baseline the user tree is returned untouched. Otherwise the
/// baseline is copied and the user tree merged into the copy, so a caller
/// that retains a baseline may reuse it as read-only input across merges.
pub fn merge_baseline_with_user(baseline: Option<&Branch>, user_tree: Branch) -> Branch {
    match baseline {
        None => user_tree,
        Some(baseline) => {
            let mut merged = baseline.clone();
            merged.merge(&user_tree);
            merged
        }
    }
}

impl Branch {
    /// Recursively merge all items of `source` into this branch, replacing
    /// any item that already exists.
    ///
    /// Each distinct key of a branch pair is handled once, in source order:
    ///
    /// * A key that is an array in either branch (two or more occurrences)
    ///   uses replace semantics: when the source has no occurrence the
    ///   destination is kept; when the destination has none all source
    ///   occurrences are appended; when both have occurrences every
    ///   destination occurrence is discarded and all source occurrences are
    ///   appended.
    /// * A scalar key overwrites in place: the value is replaced only if the
    ///   destination item is a leaf, while comments, terminal whitespace,
    ///   and provenance always take the source's. A key absent from the
    ///   destination appends a copy of the source item.
    /// * An item branch-valued on both sides is merged structurally by
    ///   recursing into the inner branches.
    ///
    /// The source is never mutated; spliced items are copies, not aliases.
    #[instrument(level = "debug", skip_all)]
    pub fn merge(&mut self, source: &Branch) {
        let mut already_seen: HashSet<&str> = HashSet::new();

        for src_item in &source.items {
            let key = src_item.key();
            if source.item_is_array(key) || self.item_is_array(key) {
                if already_seen.insert(key) {
                    self.merge_array_items(source, key);
                }
            } else {
                self.merge_scalar_item(src_item);
            }
        }
    }

    /// Merge one scalar-keyed source item into this branch, then recurse
    /// into the inner branches when both sides hold one.
    fn merge_scalar_item(&mut self, src_item: &Item) {
        let index = match self.items.iter().position(|i| i.key == src_item.key) {
            Some(index) => {
                let dst_item = &mut self.items[index];
                if dst_item.value.is_leaf() {
                    dst_item.value = src_item.value.clone();
                }
                dst_item.block_comments = src_item.block_comments.clone();
                dst_item.terminal_whitespace = src_item.terminal_whitespace.clone();
                dst_item.terminal_comment = src_item.terminal_comment.clone();
                dst_item.src_file = src_item.src_file.clone();
                dst_item.src_line = src_item.src_line;
                dst_item.origin = src_item.origin;
                index
            }
            None => {
                self.items.push(src_item.clone());
                self.items.len() - 1
            }
        };

        if let (ItemValue::Branch(inner_dst), ItemValue::Branch(inner_src)) =
            (&mut self.items[index].value, &src_item.value)
        {
            inner_dst.merge(inner_src);
        }
    }

    /// Merge the array items with the given key: keep whichever side is the
    /// only one populated, otherwise discard every destination occurrence
    /// and append all source occurrences.
    fn merge_array_items(&mut self, source: &Branch, key: &str) {
        let src_items: Vec<Item> = source
            .items
            .iter()
            .filter(|i| i.key == key)
            .cloned()
            .collect();

        if src_items.is_empty() {
            return;
        }
        if self.items.iter().any(|i| i.key == key) {
            self.items.retain(|i| i.key != key);
        }
        self.items.extend(src_items);
    }
}
