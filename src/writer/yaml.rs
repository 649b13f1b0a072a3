//! YAML renderer

use std::collections::HashSet;

use crate::domain::{Branch, Item, ItemValue};
use crate::writer::{array_suffix, terminal_annotation, TreeWriter};

/// Serializes a configuration using YAML syntax.
///
/// A key occurring more than once in a branch renders as a YAML sequence, as
/// does any key carrying the `[]` name suffix, even with zero or one
/// occurrence. Block and inline comments are carried over; each nesting
/// level is indented with two spaces.
pub struct YamlWriter;

impl TreeWriter for YamlWriter {
    fn serialize(&self, branch: &Branch, out: &mut String, depth: usize) {
        out.push_str("---\n");
        self.serialize_branch(branch, out, depth);
        out.push('\n');
    }
}

impl YamlWriter {
    fn serialize_branch(&self, branch: &Branch, out: &mut String, depth: usize) {
        let prefix = "  ".repeat(depth);

        // keys already rendered as sequences; later occurrences are skipped
        let mut array_keys: HashSet<&str> = HashSet::new();

        for item in branch {
            let key = item.key();
            if array_keys.contains(key) {
                continue;
            }

            for comment in item.block_comments() {
                out.push_str(&format!("{prefix}{comment}\n"));
            }

            let (_, forced) = array_suffix(key);
            let all_items = branch.find_all(key);
            if forced || all_items.len() > 1 {
                self.serialize_array(key, &all_items, out, depth);
                array_keys.insert(key);
                continue;
            }

            let annotation = terminal_annotation(item);
            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!(
                        "{prefix}{}: {}{annotation}\n",
                        escape_yaml(key),
                        escape_yaml(value)
                    ));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!("{prefix}{}:{annotation}\n", escape_yaml(key)));
                    self.serialize_branch(inner, out, depth + 1);
                }
            }
        }
    }

    fn serialize_array(&self, key: &str, all_items: &[&Item], out: &mut String, depth: usize) {
        let prefix0 = "  ".repeat(depth);
        let prefix1 = "  ".repeat(depth + 1);

        let (bare_key, _) = array_suffix(key);

        // a forced array with one empty-valued item renders as []
        if all_items.len() == 1 && all_items[0].value().map_or(false, str::is_empty) {
            let item = all_items[0];
            let annotation = if item.terminal_comment().is_empty() {
                String::new()
            } else {
                format!(" {}# {}", item.terminal_whitespace(), item.terminal_comment())
            };
            out.push_str(&format!(
                "{prefix0}{}: []{annotation}\n",
                escape_yaml(bare_key)
            ));
            return;
        }

        out.push_str(&format!("{prefix0}{}:\n", escape_yaml(bare_key)));

        for item in all_items {
            let annotation = terminal_annotation(item);
            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!(
                        "{prefix1}- {}{annotation}\n",
                        escape_yaml(value)
                    ));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!("{prefix1}-\n"));
                    self.serialize_branch(inner, out, depth + 2);
                }
            }
        }
    }
}

fn escape_yaml(unescaped: &str) -> String {
    if unescaped.is_empty() {
        return "null ".to_string();
    }

    // numbers must not get quote delimiters
    if unescaped.parse::<f64>().is_ok() {
        return unescaped.to_string();
    }

    let needs_delimiter = unescaped.contains([
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '`',
    ]);

    let mut escaped = String::with_capacity(unescaped.len());
    for c in unescaped.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }

    if escaped != unescaped || needs_delimiter {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    #[test]
    fn given_plain_values_when_escaping_then_left_bare() {
        assert_eq!(escape_yaml("plain"), "plain");
        assert_eq!(escape_yaml("3.25"), "3.25");
        assert_eq!(escape_yaml(""), "null ");
    }

    #[test]
    fn given_yaml_indicators_when_escaping_then_delimited() {
        assert_eq!(escape_yaml("a:b"), "\"a:b\"");
        assert_eq!(escape_yaml("- dash"), "\"- dash\"");
        assert_eq!(escape_yaml("it's"), "\"it\\'s\"");
    }

    #[test]
    fn given_repeated_key_when_serializing_then_renders_sequence() {
        let mut root = Branch::new();
        root.append_item(Item::new("name", "first"));
        root.append_item(Item::new("name", "second"));

        let text = root.write_to_string(&YamlWriter);
        assert_eq!(text, "---\nname:\n  - first\n  - second\n\n");
    }

    #[test]
    fn given_nested_section_when_serializing_then_indents_two_spaces() {
        let mut inner = Branch::new();
        inner.append_item(Item::new("key2", "value2"));

        let mut root = Branch::new();
        root.append_item(Item::with_branch("section1", inner));

        let text = root.write_to_string(&YamlWriter);
        assert_eq!(text, "---\nsection1:\n  key2: value2\n\n");
    }
}
