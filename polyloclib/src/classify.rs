//! Per-line comment/code classification.
//!
//! This module is the core scanning engine: given one line of text, a
//! language's comment delimiters, and whether a block comment is currently
//! open, it decides whether the line contains code and/or comment and whether
//! the block comment is still open afterwards.
//!
//! Delimiters are matched by literal prefix comparison at the current scan
//! offset, with no tokenizing and no backtracking. The block-comment flag is carried
//! across lines by the caller so multi-line block comments are attributed
//! correctly: a line fully inside an open block counts only as comment.

/// The start/end marker pair for block comments.
///
/// Constructing the pair as a single value makes the "start without end"
/// configuration unrepresentable; the pairing invariant is enforced once at
/// registration and the scanner never has to consider it. Registration also
/// rejects empty delimiter strings, so every match consumes at least one
/// byte and the scan always advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPair {
    /// Marker opening a block comment (e.g. `/*`)
    pub start: String,
    /// Marker closing a block comment (e.g. `*/`)
    pub end: String,
}

/// Comment delimiters for one language.
///
/// A language may define block comments, end-of-line comments, both, or
/// neither (e.g. Markdown, where every non-blank line is code).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delimiters {
    /// Block comment start/end pair, if the language has block comments
    pub block: Option<BlockPair>,
    /// Marker after which the rest of the line is comment (e.g. `//`)
    pub eol: Option<String>,
}

impl Delimiters {
    /// Delimiters for a language with both block and EOL comments.
    pub fn new(block: Option<(&str, &str)>, eol: Option<&str>) -> Self {
        Self {
            block: block.map(|(start, end)| BlockPair {
                start: start.to_string(),
                end: end.to_string(),
            }),
            eol: eol.map(str::to_string),
        }
    }
}

/// The classification of a single line, plus the scan state to carry into
/// the next line of the same stream.
///
/// `code` and `comment` are independent: a line like `int x = 1; // note`
/// sets both. A line is blank exactly when neither is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Line contains at least one code character
    pub code: bool,
    /// Line contains at least one comment character
    pub comment: bool,
    /// A block comment is still open at the end of the line
    pub in_block_comment: bool,
}

impl Classification {
    /// True when the line contained neither code nor comment.
    pub fn is_blank(&self) -> bool {
        !self.code && !self.comment
    }
}

/// Classify one line of text.
///
/// Scans left to right. Whitespace never sets a flag and never matches a
/// delimiter (delimiters are assumed to begin with a non-whitespace
/// character). Inside a block comment every position marks comment until the
/// end marker is consumed, after which scanning resumes in outside mode on
/// the same line. Outside a block comment, a block-start match opens a block,
/// an EOL match ends the scan with the rest of the line as comment, and any
/// other non-whitespace character marks code.
///
/// When the block-start and EOL delimiters could both match at the same
/// position (e.g. Lua's `--[[` vs `--`), the block-start delimiter wins: the
/// block comment is the more specific construct. This ordering is pinned by a
/// regression test.
///
/// A trailing `\r` or `\n` on the line is ignored (it is whitespace anyway).
pub fn classify_line(line: &str, delims: &Delimiters, in_block_comment: bool) -> Classification {
    let mut code = false;
    let mut comment = false;
    let mut in_block = in_block_comment;

    let mut i = 0;
    while i < line.len() {
        let rest = &line[i..];
        // i always sits on a char boundary, so this cannot be None.
        let Some(ch) = rest.chars().next() else { break };

        if ch.is_whitespace() {
            i += ch.len_utf8();
            continue;
        }

        if in_block {
            comment = true;
            match &delims.block {
                Some(pair) if rest.starts_with(pair.end.as_str()) => {
                    in_block = false;
                    i += pair.end.len();
                }
                _ => i += ch.len_utf8(),
            }
            continue;
        }

        if let Some(pair) = &delims.block {
            if rest.starts_with(pair.start.as_str()) {
                comment = true;
                in_block = true;
                i += pair.start.len();
                continue;
            }
        }

        if let Some(eol) = &delims.eol {
            if rest.starts_with(eol.as_str()) {
                comment = true;
                break;
            }
        }

        code = true;
        i += ch.len_utf8();
    }

    Classification {
        code,
        comment,
        in_block_comment: in_block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_style() -> Delimiters {
        Delimiters::new(Some(("/*", "*/")), Some("//"))
    }

    fn classify(line: &str, delims: &Delimiters) -> Classification {
        classify_line(line, delims, false)
    }

    #[test]
    fn plain_code_line() {
        let c = classify("int x = 1;", &c_style());
        assert!(c.code);
        assert!(!c.comment);
        assert!(!c.in_block_comment);
    }

    #[test]
    fn code_with_trailing_eol_comment() {
        let c = classify("int x = 1; // note", &c_style());
        assert!(c.code);
        assert!(c.comment);
        assert!(!c.in_block_comment);
    }

    #[test]
    fn eol_comment_only() {
        let c = classify("// just a note", &c_style());
        assert!(!c.code);
        assert!(c.comment);
    }

    #[test]
    fn nothing_after_eol_marker_is_code() {
        // Everything past the EOL marker is comment, even delimiters.
        let c = classify("// has /* inside", &c_style());
        assert!(!c.code);
        assert!(c.comment);
        assert!(!c.in_block_comment);
    }

    #[test]
    fn full_block_on_one_line() {
        let c = classify("/* full block */", &c_style());
        assert!(!c.code);
        assert!(c.comment);
        assert!(!c.in_block_comment);
    }

    #[test]
    fn block_spanning_lines() {
        let only_blocks = Delimiters::new(Some(("/*", "*/")), None);

        let first = classify("/*", &only_blocks);
        assert!(!first.code);
        assert!(first.comment);
        assert!(first.in_block_comment);

        let middle = classify_line("still inside", &only_blocks, true);
        assert!(!middle.code);
        assert!(middle.comment);
        assert!(middle.in_block_comment);

        let last = classify_line("end */ int y;", &only_blocks, true);
        assert!(last.code);
        assert!(last.comment);
        assert!(!last.in_block_comment);
    }

    #[test]
    fn code_before_block_open() {
        let c = classify("int x; /* trailing", &c_style());
        assert!(c.code);
        assert!(c.comment);
        assert!(c.in_block_comment);
    }

    #[test]
    fn block_closed_and_reopened_on_one_line() {
        let c = classify("/* a */ code /* b", &c_style());
        assert!(c.code);
        assert!(c.comment);
        assert!(c.in_block_comment);
    }

    #[test]
    fn whitespace_only_is_blank() {
        let c = classify("   \t  ", &c_style());
        assert!(c.is_blank());
        assert!(!c.in_block_comment);
    }

    #[test]
    fn empty_line_is_blank() {
        let c = classify("", &c_style());
        assert!(c.is_blank());
    }

    #[test]
    fn blank_line_inside_block_stays_in_block() {
        let c = classify_line("", &c_style(), true);
        assert!(c.is_blank());
        assert!(c.in_block_comment);
    }

    #[test]
    fn trailing_newline_is_not_significant() {
        let c = classify("int x = 1;\r\n", &c_style());
        assert!(c.code);
        assert!(!c.comment);

        let c = classify("  \r\n", &c_style());
        assert!(c.is_blank());
    }

    #[test]
    fn block_start_wins_over_eol_at_same_position() {
        // Lua: `--[[` opens a block, `--` starts an EOL comment. The block
        // marker must be checked first or `--[[` would be misread as an EOL
        // comment and the block would never open.
        let lua = Delimiters::new(Some(("--[[", "]]")), Some("--"));

        let open = classify("--[[ long comment", &lua);
        assert!(!open.code);
        assert!(open.comment);
        assert!(open.in_block_comment);

        // A plain `--` that is not a block start still reads as EOL comment.
        let eol = classify("-- short comment", &lua);
        assert!(!eol.code);
        assert!(eol.comment);
        assert!(!eol.in_block_comment);
    }

    #[test]
    fn identical_start_and_end_markers() {
        // Python docstring-style: """ opens and closes.
        let python = Delimiters::new(Some(("\"\"\"", "\"\"\"")), Some("#"));

        let open = classify("\"\"\"module doc", &python);
        assert!(open.in_block_comment);

        let close = classify_line("done\"\"\"", &python, true);
        assert!(!close.in_block_comment);
        assert!(close.comment);
        assert!(!close.code);
    }

    #[test]
    fn multi_character_delimiters() {
        let html = Delimiters::new(Some(("<!--", "-->")), None);

        let c = classify("<!-- note -->", &html);
        assert!(!c.code);
        assert!(c.comment);
        assert!(!c.in_block_comment);

        // A lone `<` is just code.
        let c = classify("<p>hello</p>", &html);
        assert!(c.code);
        assert!(!c.comment);
    }

    #[test]
    fn no_delimiters_means_everything_is_code() {
        let markdown = Delimiters::default();

        let c = classify("# heading", &markdown);
        assert!(c.code);
        assert!(!c.comment);

        let c = classify("  ", &markdown);
        assert!(c.is_blank());
    }

    #[test]
    fn end_marker_as_last_bytes_of_line() {
        let c = classify_line("*/", &c_style(), true);
        assert!(c.comment);
        assert!(!c.code);
        assert!(!c.in_block_comment);
    }

    #[test]
    fn non_ascii_content() {
        let c = classify("let s = \"héllo\"; // commenté", &c_style());
        assert!(c.code);
        assert!(c.comment);
    }
}
