//! Domain layer: the configuration tree and the operations over it
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod branch;
pub mod error;
pub mod item;
pub mod merge;
pub mod query;

pub use branch::Branch;
pub use error::{TreeError, TreeResult};
pub use item::{FileOrigin, Item, ItemKind, ItemValue};
pub use merge::merge_baseline_with_user;
