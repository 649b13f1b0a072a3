//! Reading figtree files into a configuration tree
//!
//! [`FigtreeReader::read_config`] reads a user's file and merges it with any
//! fallback-defaults file referenced by a `!baseline` pragma.
//! [`FigtreeReader::read_figtree`] reads one file of figtree syntax plus any
//! files embedded via `!include` pragmas, with no baseline handling.
//! Parsing is a single forward pass: a recursive function consumes lines
//! from a shared cursor, building nested branches as it encounters braces.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::{Branch, FileOrigin, ItemValue};
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::line::{classify, ClassifiedLine, LineParts};
use crate::util::path::resolve_pragma_path;

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Reject a section that is still open at end of input.
    ///
    /// By default an unterminated section simply absorbs the remaining items
    /// of the file; with `strict_braces` it is reported as
    /// [`ParseError::UnterminatedBranch`] instead.
    pub strict_braces: bool,
}

/// Outcome of parsing one branch level.
///
/// `EndOfBranch` is the normal return for an inner section whose closing
/// brace was found; it ends that recursion level only. `EndOfInput` is the
/// normal return for the outermost level. Either one in the wrong place is a
/// structural problem handled by the caller, not by the parser itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BranchEnd {
    EndOfInput,
    EndOfBranch,
}

/// Forward-only cursor over the lines of one file, with a running 1-based
/// line counter shared by every recursion level.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line)
    }
}

/// Reads figtree files, carrying the pending baseline tree captured by a
/// `!baseline` pragma between parse and merge.
///
/// The baseline slot is reset at the start of every top-level read and
/// consumed by its merge step, so one reader may be reused across reads
/// without leakage. Each reader is independent; concurrent reads want
/// separate readers.
#[derive(Debug, Default)]
pub struct FigtreeReader {
    options: ParseOptions,
    baseline: Option<Branch>,
}

impl FigtreeReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            baseline: None,
        }
    }

    /// Read a user's configuration file, honoring any `!baseline` pragma it
    /// may contain.
    ///
    /// Returns the root of the tree created by merging the user's file with
    /// the baseline file it points to, or the user's tree alone when no
    /// baseline was referenced.
    #[instrument(level = "debug", skip(self))]
    pub fn read_config(&mut self, path: &Path) -> ParseResult<Branch> {
        // reset the slot: at most one baseline per top-level read, and
        // nothing may leak in from an earlier read
        self.baseline = None;

        let user_tree = self.read_figtree(path, FileOrigin::User)?;

        // reading the user's file may have captured a baseline tree; both
        // trees are fully in memory now, so merge them
        match self.baseline.take() {
            None => Ok(user_tree),
            Some(mut baseline) => {
                debug!("merging baseline into user tree");
                baseline.merge(&user_tree);
                Ok(baseline)
            }
        }
    }

    /// Open, parse, and close one file of figtree syntax.
    ///
    /// Any `!include` pragma splices the referenced file inline; a
    /// `!baseline` pragma stores its tree in the reader for a later
    /// [`FigtreeReader::read_config`] merge. Rarely needed directly, but
    /// public so a raw tree can be read without baseline handling.
    #[instrument(level = "debug", skip(self))]
    pub fn read_figtree(&mut self, path: &Path, origin: FileOrigin) -> ParseResult<Branch> {
        let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        self.parse_source(&text, path, origin)
    }

    fn parse_source(&mut self, text: &str, path: &Path, origin: FileOrigin) -> ParseResult<Branch> {
        let mut root = Branch::new();
        let mut cursor = LineCursor::new(text);

        match self.parse_branch(&mut root, &mut cursor, path, origin)? {
            BranchEnd::EndOfInput => Ok(root),
            BranchEnd::EndOfBranch => Err(ParseError::UnmatchedClosingBrace {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Recursively consume lines from the cursor, adding key/value pairs and
    /// inner sections to `branch` until a closing brace or end of input.
    fn parse_branch(
        &mut self,
        branch: &mut Branch,
        cursor: &mut LineCursor<'_>,
        src_file: &Path,
        origin: FileOrigin,
    ) -> ParseResult<BranchEnd> {
        // blank lines and comment lines accumulate here until the next item
        // claims them
        let mut block_comments: Vec<String> = Vec::new();

        while let Some(raw) = cursor.next_line() {
            match classify(raw) {
                ClassifiedLine::Comment(text) => block_comments.push(text),

                ClassifiedLine::BranchOpen(parts) => {
                    let opened_at = cursor.line_no;
                    let mut inner = Branch::new();
                    let end = self.parse_branch(&mut inner, cursor, src_file, origin)?;

                    branch.push_parsed(
                        parts.key,
                        ItemValue::Branch(inner),
                        std::mem::take(&mut block_comments),
                        parts.terminal_whitespace,
                        parts.terminal_comment,
                        src_file,
                        opened_at,
                        origin,
                    );

                    if end == BranchEnd::EndOfInput {
                        if self.options.strict_braces {
                            return Err(ParseError::UnterminatedBranch {
                                path: src_file.to_path_buf(),
                                line: opened_at,
                            });
                        }
                        // tolerated: the unterminated section has absorbed
                        // the rest of the file
                        return Ok(BranchEnd::EndOfInput);
                    }
                }

                ClassifiedLine::BranchClose => return Ok(BranchEnd::EndOfBranch),

                ClassifiedLine::KeyValue(parts) => {
                    let block = std::mem::take(&mut block_comments);
                    self.handle_key_value(branch, parts, block, cursor.line_no, src_file, origin)?;
                }
            }
        }
        Ok(BranchEnd::EndOfInput)
    }

    /// Append one key/value item, with special handling for the `!include`,
    /// `!baseline`, and `!dtd` pragmas.
    fn handle_key_value(
        &mut self,
        branch: &mut Branch,
        parts: LineParts,
        block_comments: Vec<String>,
        line: usize,
        src_file: &Path,
        origin: FileOrigin,
    ) -> ParseResult<()> {
        if parts.key.starts_with("!include") {
            branch.push_parsed(
                "!include",
                ItemValue::Leaf(parts.value.clone()),
                block_comments,
                parts.terminal_whitespace,
                parts.terminal_comment,
                src_file,
                line,
                origin,
            );
            let include_path = resolve_pragma_path(&parts.value);
            let include_tree = self.read_figtree(&include_path, FileOrigin::Include)?;
            branch.splice_items(include_tree);
        } else if parts.key.starts_with("!baseline") {
            branch.push_parsed(
                "!baseline",
                ItemValue::Leaf(parts.value.clone()),
                block_comments,
                parts.terminal_whitespace,
                parts.terminal_comment,
                src_file,
                line,
                origin,
            );
            let baseline_path = resolve_pragma_path(&parts.value);
            let baseline_tree = self.read_figtree(&baseline_path, FileOrigin::Baseline)?;
            // overwriting, not merging: the last baseline pragma wins
            self.baseline = Some(baseline_tree);
        } else if parts.key.starts_with("!dtd") {
            branch.push_parsed(
                "!dtd",
                ItemValue::Leaf(parts.value.clone()),
                block_comments,
                parts.terminal_whitespace,
                parts.terminal_comment,
                src_file,
                line,
                origin,
            );
            let dtd_path = resolve_pragma_path(&parts.value);
            // parsed for validation only; validation itself is not performed
            let _dtd_tree = self.read_figtree(&dtd_path, FileOrigin::Dtd)?;
        } else {
            branch.push_parsed(
                parts.key,
                ItemValue::Leaf(parts.value),
                block_comments,
                parts.terminal_whitespace,
                parts.terminal_comment,
                src_file,
                line,
                origin,
            );
        }
        Ok(())
    }
}
