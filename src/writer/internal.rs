//! Debug renderer exposing parsing provenance

use std::path::Path;

use crate::domain::{Branch, Item, ItemValue};
use crate::writer::{terminal_annotation, TreeWriter};

/// Serializes a configuration together with internal parsing information.
///
/// Every output line is prefixed with the item's origin, source file name,
/// and source line number, making it easy to see where each part of a
/// composed tree came from.
pub struct InternalWriter;

fn source_context(item: &Item, prefix: &str) -> String {
    let file = file_name(item.src_file());
    let context = format!("({})[{}:{}]", item.origin(), file, item.src_line());
    format!("{context:<32}{prefix} ")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

impl TreeWriter for InternalWriter {
    fn serialize(&self, branch: &Branch, out: &mut String, depth: usize) {
        let prefix = "\t".repeat(depth);

        for item in branch {
            let context = source_context(item, &prefix);

            for comment in item.block_comments() {
                out.push_str(&format!("{context}{comment}\n"));
            }

            let annotation = terminal_annotation(item);
            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!("{context}{} {value}{annotation}\n", item.key()));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!("{context}{} {{{annotation}\n", item.key()));
                    self.serialize(inner, out, depth + 1);
                    out.push_str(&format!("{context}}}\n"));
                }
            }
        }
    }
}
