//! Classifying one raw line of figtree syntax
//!
//! A line is split at the first whitespace character or opening brace into a
//! key and a right-hand remainder. The remainder is scanned for an inline
//! comment marker: a `#` preceded by a tab or space, with tab-then-hash tried
//! before space-then-hash. A `#` with no whitespace in front of it is part of
//! the value, so URLs with `#` fragments survive intact.

/// The pieces of a key-bearing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineParts {
    pub key: String,
    pub value: String,
    pub terminal_whitespace: String,
    pub terminal_comment: String,
}

/// What one trimmed line of input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassifiedLine {
    /// A blank line or a line whose first character is `#`, kept verbatim
    /// for the block-comment accumulator.
    Comment(String),
    /// `key {` — the right-hand side, after whitespace, is a single brace.
    BranchOpen(LineParts),
    /// A line whose key begins with `}`.
    BranchClose,
    /// An ordinary key/value line; the value may be empty (key-only item).
    KeyValue(LineParts),
}

/// Classify one raw input line.
pub(crate) fn classify(raw: &str) -> ClassifiedLine {
    let line = raw.trim_matches([' ', '\t']);

    if line.is_empty() || line.starts_with('#') {
        return ClassifiedLine::Comment(line.to_string());
    }

    // split into two halves at the first whitespace or opening brace
    let (left, right) = match line.find([' ', '\t', '{']) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    };

    // split the right side into value and possible inline comment
    let hash = right.find("\t#").or_else(|| right.find(" #"));
    let (value, terminal_whitespace, terminal_comment) = match hash {
        None => (
            right.trim_matches([' ', '\t']).to_string(),
            String::new(),
            String::new(),
        ),
        Some(pos) => {
            // keep the whitespace run before the hash, then peel it off the
            // value's tail so it can be preserved verbatim
            let val = right[..pos + 1].trim_start_matches([' ', '\t']);
            let comment = right[pos + 2..].trim_matches([' ', '\t']).to_string();
            let content = val.trim_end_matches([' ', '\t']);
            let whitespace = val[content.len()..].to_string();
            (content.to_string(), whitespace, comment)
        }
    };

    if value == "{" {
        return ClassifiedLine::BranchOpen(LineParts {
            key: left.to_string(),
            value,
            terminal_whitespace,
            terminal_comment,
        });
    }
    if left.starts_with('}') {
        return ClassifiedLine::BranchClose;
    }
    ClassifiedLine::KeyValue(LineParts {
        key: left.to_string(),
        value,
        terminal_whitespace,
        terminal_comment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_value(raw: &str) -> LineParts {
        match classify(raw) {
            ClassifiedLine::KeyValue(parts) => parts,
            other => panic!("expected key/value, got {other:?}"),
        }
    }

    #[test]
    fn given_plain_pair_when_classifying_then_splits_at_first_whitespace() {
        let parts = key_value("key1 value with spaces");
        assert_eq!(parts.key, "key1");
        assert_eq!(parts.value, "value with spaces");
        assert_eq!(parts.terminal_comment, "");
    }

    #[test]
    fn given_key_only_line_when_classifying_then_value_is_empty() {
        let parts = key_value("lonely-key");
        assert_eq!(parts.key, "lonely-key");
        assert_eq!(parts.value, "");
    }

    #[test]
    fn given_inline_comment_when_classifying_then_whitespace_is_preserved() {
        let parts = key_value("key1 value1   # trailing words");
        assert_eq!(parts.value, "value1");
        assert_eq!(parts.terminal_whitespace, "   ");
        assert_eq!(parts.terminal_comment, "trailing words");
    }

    #[test]
    fn given_url_with_fragment_when_classifying_then_hash_stays_in_value() {
        let parts = key_value("homepage http://example.com/page#section");
        assert_eq!(parts.value, "http://example.com/page#section");
        assert_eq!(parts.terminal_comment, "");
    }

    #[test]
    fn given_tab_and_space_markers_when_classifying_then_tab_hash_wins() {
        let parts = key_value("key1 with #embedded\t# real comment");
        assert_eq!(parts.value, "with #embedded");
        assert_eq!(parts.terminal_whitespace, "\t");
        assert_eq!(parts.terminal_comment, "real comment");
    }

    #[test]
    fn given_opening_brace_when_classifying_then_reports_branch_open() {
        match classify("section1 {") {
            ClassifiedLine::BranchOpen(parts) => assert_eq!(parts.key, "section1"),
            other => panic!("expected branch open, got {other:?}"),
        }
    }

    #[test]
    fn given_opening_brace_with_comment_when_classifying_then_comment_is_kept() {
        match classify("section1 {\t# section comment") {
            ClassifiedLine::BranchOpen(parts) => {
                assert_eq!(parts.key, "section1");
                assert_eq!(parts.terminal_comment, "section comment");
            }
            other => panic!("expected branch open, got {other:?}"),
        }
    }

    #[test]
    fn given_brace_glued_to_key_when_classifying_then_splits_at_brace() {
        match classify("section1{") {
            ClassifiedLine::BranchOpen(parts) => assert_eq!(parts.key, "section1"),
            other => panic!("expected branch open, got {other:?}"),
        }
    }

    #[test]
    fn given_closing_brace_when_classifying_then_reports_branch_close() {
        assert_eq!(classify("}"), ClassifiedLine::BranchClose);
        assert_eq!(classify("  }  "), ClassifiedLine::BranchClose);
    }

    #[test]
    fn given_comment_or_blank_line_when_classifying_then_accumulates_verbatim() {
        assert_eq!(
            classify("# a block comment"),
            ClassifiedLine::Comment("# a block comment".to_string())
        );
        assert_eq!(classify("   "), ClassifiedLine::Comment(String::new()));
    }

    #[test]
    fn given_value_resembling_brace_when_classifying_then_stays_key_value() {
        let parts = key_value("key1 { not a section");
        assert_eq!(parts.value, "{ not a section");
    }
}
