//! Native figtree syntax renderer

use crate::domain::{Branch, ItemValue};
use crate::writer::{terminal_annotation, TreeWriter};

/// Serializes a configuration using native figtree syntax.
///
/// Block comments, inline comments, and their whitespace are emitted
/// verbatim, so a freshly parsed tree round-trips back to its source text.
/// Each nesting level is indented with one tab.
pub struct FigtreeWriter;

impl TreeWriter for FigtreeWriter {
    fn serialize(&self, branch: &Branch, out: &mut String, depth: usize) {
        let prefix = "\t".repeat(depth);

        for item in branch {
            for comment in item.block_comments() {
                out.push_str(&format!("{prefix}{comment}\n"));
            }

            let annotation = terminal_annotation(item);
            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!("{prefix}{} {value}{annotation}\n", item.key()));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!("{prefix}{} {{{annotation}\n", item.key()));
                    self.serialize(inner, out, depth + 1);
                    out.push_str(&format!("{prefix}}}\n"));
                }
            }
        }
    }
}
