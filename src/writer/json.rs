//! JSON renderer

use std::collections::HashSet;

use crate::domain::{Branch, Item, ItemValue};
use crate::writer::{array_suffix, TreeWriter};

/// Serializes a configuration using JSON syntax.
///
/// A key occurring more than once in a branch renders as a JSON array, as
/// does any key carrying the `[]` name suffix, even with zero or one
/// occurrence. Comments have no JSON representation and are dropped.
pub struct JsonWriter;

impl TreeWriter for JsonWriter {
    fn serialize(&self, branch: &Branch, out: &mut String, depth: usize) {
        out.push('{');
        self.serialize_branch(branch, out, depth + 1);
        out.push_str("\n}");
    }
}

impl JsonWriter {
    fn serialize_branch(&self, branch: &Branch, out: &mut String, depth: usize) {
        let prefix = "\t".repeat(depth);

        // keys already rendered as arrays; later occurrences are skipped
        let mut array_keys: HashSet<&str> = HashSet::new();

        let mut comma_lf = "\n"; // begin first item without a comma

        for item in branch {
            let key = item.key();
            if array_keys.contains(key) {
                continue;
            }

            let (_, forced) = array_suffix(key);
            let all_items = branch.find_all(key);
            if forced || all_items.len() > 1 {
                out.push_str(comma_lf);
                self.serialize_array(key, &all_items, out, depth);
                comma_lf = ",\n";
                array_keys.insert(key);
                continue;
            }

            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!(
                        "{comma_lf}{prefix}\"{}\": {}",
                        escape_json_key(key),
                        escape_json_value(value)
                    ));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!(
                        "{comma_lf}{prefix}\"{}\": {{",
                        escape_json_key(key)
                    ));
                    self.serialize_branch(inner, out, depth + 1);
                    out.push_str(&format!("\n{prefix}}}"));
                }
            }
            comma_lf = ",\n"; // second and subsequent lines
        }
    }

    fn serialize_array(&self, key: &str, all_items: &[&Item], out: &mut String, depth: usize) {
        let prefix0 = "\t".repeat(depth);
        let prefix1 = "\t".repeat(depth + 1);

        let (bare_key, _) = array_suffix(key);
        out.push_str(&format!("{prefix0}\"{}\": [\n", escape_json_key(bare_key)));

        // a forced array with one empty-valued item renders as []
        let mut all_items = all_items;
        if all_items.len() == 1 && all_items[0].value().map_or(false, str::is_empty) {
            all_items = &[];
        }

        let mut comma_lf = ""; // begin first item without a comma

        for item in all_items {
            match &item.value {
                ItemValue::Leaf(value) => {
                    out.push_str(&format!("{comma_lf}{prefix1}{}", escape_json_value(value)));
                }
                ItemValue::Branch(inner) => {
                    out.push_str(&format!("{comma_lf}{prefix1}{{"));
                    self.serialize_branch(inner, out, depth + 2);
                    out.push_str(&format!("\n{prefix1}}}"));
                }
            }
            comma_lf = ",\n"; // second and subsequent lines
        }

        out.push_str(&format!("\n{prefix0}]"));
    }
}

fn escape_json_key(unescaped: &str) -> String {
    let mut escaped = String::with_capacity(unescaped.len());
    for c in unescaped.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{000B}' => escaped.push_str("\\u000b"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_json_value(unescaped: &str) -> String {
    // empty values and explicit nulls
    if unescaped.is_empty() || unescaped == "null" {
        return "null".to_string();
    }
    // booleans stay bare
    if unescaped == "true" || unescaped == "false" {
        return unescaped.to_string();
    }
    // numbers must not get quote delimiters
    if unescaped.parse::<f64>().is_ok() {
        return unescaped.to_string();
    }
    format!("\"{}\"", escape_json_key(unescaped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_special_values_when_escaping_then_bare_types_survive() {
        assert_eq!(escape_json_value(""), "null");
        assert_eq!(escape_json_value("null"), "null");
        assert_eq!(escape_json_value("true"), "true");
        assert_eq!(escape_json_value("false"), "false");
        assert_eq!(escape_json_value("3.25"), "3.25");
        assert_eq!(escape_json_value("-17"), "-17");
        assert_eq!(escape_json_value("plain text"), "\"plain text\"");
    }

    #[test]
    fn given_quotes_and_tabs_when_escaping_then_they_are_backslashed() {
        assert_eq!(escape_json_key("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_json_key("a\tb"), "a\\tb");
        assert_eq!(escape_json_key("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn given_repeated_key_when_serializing_then_renders_one_array() {
        let mut root = Branch::new();
        root.append_item(crate::domain::Item::new("name", "first"));
        root.append_item(crate::domain::Item::new("name", "second"));

        let text = root.write_to_string(&JsonWriter);
        assert_eq!(text, "{\n\t\"name\": [\n\t\t\"first\",\n\t\t\"second\"\n\t]\n}");
    }

    #[test]
    fn given_bracket_suffix_with_empty_item_when_serializing_then_empty_array() {
        let mut root = Branch::new();
        root.append_item(crate::domain::Item::new("tags[]", ""));

        let text = root.write_to_string(&JsonWriter);
        assert_eq!(text, "{\n\t\"tags\": [\n\n\t]\n}");
    }
}
