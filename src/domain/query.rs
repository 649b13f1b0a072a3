//! Querying and retrieving items from the tree
//!
//! A lookup key is either a simple key name (no slash) or a key path, a
//! slash-separated sequence of simple keys where all but the last must
//! resolve to branches. A single leading slash is stripped, so `/a/b`
//! addresses the same item as `a/b`. Path resolution walks branches left to
//! right and descends through the first item whose key matches each
//! non-terminal segment.

use crate::domain::branch::Branch;
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::item::{Item, ItemValue};

impl Branch {
    /// Find all items matching the given key path.
    ///
    /// Returns every item of the terminal branch whose key equals the final
    /// path segment, in branch order. A repeated key therefore comes back as
    /// the format's array. An unresolvable path yields an empty collection,
    /// never an error.
    pub fn find_all(&self, key_path: &str) -> Vec<&Item> {
        if let Some(rest) = key_path.strip_prefix('/') {
            return self.find_all(rest);
        }

        if let Some((left, right)) = key_path.split_once('/') {
            for item in &self.items {
                if item.key == left {
                    return match &item.value {
                        ItemValue::Branch(inner) => inner.find_all(right),
                        ItemValue::Leaf(_) => Vec::new(),
                    };
                }
            }
            return Vec::new();
        }

        self.items.iter().filter(|i| i.key == key_path).collect()
    }

    /// Find the first item matching the given key path.
    ///
    /// If more than one item matches, the first in branch order is returned.
    /// Returns `NotFound` when no item matches.
    pub fn find_first(&self, key_path: &str) -> TreeResult<&Item> {
        self.find_all(key_path)
            .into_iter()
            .next()
            .ok_or_else(|| TreeError::NotFound(key_path.to_string()))
    }

    /// Get the item with the given key path.
    ///
    /// Returns `NotFound` when the path does not exist and `NotBranch` when a
    /// non-terminal segment resolves to a leaf.
    pub fn get_item(&self, key_path: &str) -> TreeResult<&Item> {
        if let Some(rest) = key_path.strip_prefix('/') {
            return self.get_item(rest);
        }

        if let Some((left, right)) = key_path.split_once('/') {
            let item = self.get_item(left)?;
            let inner = item.branch()?;
            return inner.get_item(right);
        }

        self.items
            .iter()
            .find(|i| i.key == key_path)
            .ok_or_else(|| TreeError::NotFound(key_path.to_string()))
    }

    /// Mutable counterpart of [`Branch::get_item`].
    pub fn get_item_mut(&mut self, key_path: &str) -> TreeResult<&mut Item> {
        if let Some(rest) = key_path.strip_prefix('/') {
            return self.get_item_mut(rest);
        }

        if let Some((left, right)) = key_path.split_once('/') {
            let item = self.get_item_mut(left)?;
            let inner = item.branch_mut()?;
            return inner.get_item_mut(right);
        }

        self.items
            .iter_mut()
            .find(|i| i.key == key_path)
            .ok_or_else(|| TreeError::NotFound(key_path.to_string()))
    }

    /// Get the inner branch at the given key path.
    ///
    /// Returns `NotFound` when the path does not exist and `NotBranch` when
    /// it resolves to a leaf.
    pub fn get_branch(&self, key_path: &str) -> TreeResult<&Branch> {
        let item = self.find_first(key_path)?;
        match &item.value {
            ItemValue::Branch(inner) => Ok(inner),
            ItemValue::Leaf(_) => Err(TreeError::NotBranch(key_path.to_string())),
        }
    }

    /// Mutable counterpart of [`Branch::get_branch`].
    pub fn get_branch_mut(&mut self, key_path: &str) -> TreeResult<&mut Branch> {
        let item = self.get_item_mut(key_path)?;
        match &mut item.value {
            ItemValue::Branch(inner) => Ok(inner),
            ItemValue::Leaf(_) => Err(TreeError::NotBranch(key_path.to_string())),
        }
    }

    /// Get the leaf item at the given key path.
    ///
    /// Returns `NotFound` when the path does not exist and `NotLeaf` when it
    /// resolves to a branch.
    pub fn get_leaf(&self, key_path: &str) -> TreeResult<&Item> {
        let item = self.find_first(key_path)?;
        match item.value {
            ItemValue::Leaf(_) => Ok(item),
            ItemValue::Branch(_) => Err(TreeError::NotLeaf(key_path.to_string())),
        }
    }

    /// Get the value of the leaf at the given key path.
    ///
    /// A "key-only" item yields the empty string. Returns `NotFound` when the
    /// path does not exist and `NotLeaf` when it resolves to a branch.
    pub fn get_value(&self, key_path: &str) -> TreeResult<&str> {
        let item = self.find_first(key_path)?;
        match &item.value {
            ItemValue::Leaf(value) => Ok(value),
            ItemValue::Branch(_) => Err(TreeError::NotLeaf(key_path.to_string())),
        }
    }

    /// All branch-valued items of this branch, in order.
    pub fn list_branches(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.is_branch()).collect()
    }

    /// All leaf-valued items of this branch, in order.
    pub fn list_leaves(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| i.is_leaf()).collect()
    }

    /// Whether an item with the given simple key exists in this branch.
    ///
    /// Accepts simple keys only, not key paths.
    pub fn item_exists(&self, simple_key: &str) -> bool {
        self.items.iter().any(|i| i.key == simple_key)
    }

    /// Whether the item at the given key path is a branch.
    pub fn item_is_branch(&self, key_path: &str) -> bool {
        self.find_first(key_path).map_or(false, Item::is_branch)
    }

    /// Whether the item at the given key path is a leaf.
    pub fn item_is_leaf(&self, key_path: &str) -> bool {
        self.find_first(key_path).map_or(false, Item::is_leaf)
    }

    /// Whether this branch holds two or more items with the given simple key.
    ///
    /// Repetition is the sole signal that a key acts as an array; the merge
    /// engine and the serializers both consume it. Accepts simple keys only.
    pub fn item_is_array(&self, simple_key: &str) -> bool {
        self.items.iter().filter(|i| i.key == simple_key).count() > 1
    }

    /// Whether an item with the given key path exists, descending through
    /// successively deeper branches.
    pub fn path_exists(&self, key_path: &str) -> bool {
        if let Some(rest) = key_path.strip_prefix('/') {
            return self.path_exists(rest);
        }

        if let Some((left, right)) = key_path.split_once('/') {
            for item in &self.items {
                if item.key == left {
                    return match &item.value {
                        ItemValue::Branch(inner) => inner.path_exists(right),
                        ItemValue::Leaf(_) => false,
                    };
                }
            }
            return false;
        }

        self.item_exists(key_path)
    }
}
