// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line layout transforms.
//!
//! Widths are measured in `char`s. Wrapping is greedy: a line takes as many
//! whole words as fit, and a word longer than the width is broken across lines.

use serde::Serialize;

use super::TextChoice;
use crate::errors::OperationError;

pub const DEFAULT_WIDTH: usize = 80;
pub const INDENT: &str = "    ";
const TAB_SIZE: usize = 8;
const CONTEXT: &str = "Text formatting";
/// Upper bound on the padding `center` may add across all lines.
pub const MAX_PADDING: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    Wrap,
    Indent,
    Center,
    Justify,
    Reverse,
    SortLines,
}

impl FormatType {
    /// Transforms that lay text out against a width.
    pub const LAYOUT: &'static [FormatType] = &[
        FormatType::Wrap,
        FormatType::Indent,
        FormatType::Center,
        FormatType::Justify,
    ];

    /// Transforms that reorder content.
    pub const TRANSFORMATION: &'static [FormatType] = &[FormatType::Reverse, FormatType::SortLines];

    /// Whether the `width` parameter affects the output.
    pub fn uses_width(&self) -> bool {
        matches!(self, FormatType::Wrap | FormatType::Center | FormatType::Justify)
    }
}

impl TextChoice for FormatType {
    const KIND: &'static str = "format type";
    const ALL: &'static [FormatType] = &[
        FormatType::Wrap,
        FormatType::Indent,
        FormatType::Center,
        FormatType::Justify,
        FormatType::Reverse,
        FormatType::SortLines,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            FormatType::Wrap => "wrap",
            FormatType::Indent => "indent",
            FormatType::Center => "center",
            FormatType::Justify => "justify",
            FormatType::Reverse => "reverse",
            FormatType::SortLines => "sort_lines",
        }
    }
}

pub fn format(text: &str, format_type: FormatType, width: usize) -> Result<String, OperationError> {
    match format_type {
        FormatType::Wrap => wrap(text, width),
        FormatType::Indent => Ok(indent(text)),
        FormatType::Center => center_lines(text, width),
        FormatType::Justify => {
            let collapsed = expand_tabs(text).split_whitespace().collect::<Vec<_>>().join(" ");
            wrap(&collapsed, width)
        }
        FormatType::Reverse => Ok(text.chars().rev().collect()),
        FormatType::SortLines => {
            let mut lines: Vec<&str> = text.split('\n').collect();
            lines.sort_unstable();
            Ok(lines.join("\n"))
        }
    }
}

fn is_wrap_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;
                expanded.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                expanded.push(ch);
                column = 0;
            }
            _ => {
                expanded.push(ch);
                column += 1;
            }
        }
    }

    expanded
}

fn wrap(text: &str, width: usize) -> Result<String, OperationError> {
    if width == 0 {
        return Err(OperationError::Execution {
            context: CONTEXT,
            message: format!("invalid width {} (must be > 0)", width),
        });
    }

    let prepared: Vec<char> = expand_tabs(text)
        .chars()
        .map(|ch| if is_wrap_whitespace(ch) { ' ' } else { ch })
        .collect();

    Ok(wrap_chunks(split_chunks(&prepared), width).join("\n"))
}

/// Split into alternating runs of spaces and words, then split words after
/// the hyphens of compound words ("well-known" becomes "well-" and "known").
fn split_chunks(chars: &[char]) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    for &ch in chars {
        match runs.last_mut() {
            Some(run) if (run[0] == ' ') == (ch == ' ') => run.push(ch),
            _ => runs.push(vec![ch]),
        }
    }

    runs.into_iter()
        .flat_map(|run| {
            if is_blank(&run) {
                vec![run]
            } else {
                split_hyphenated(run)
            }
        })
        .collect()
}

/// Letters for hyphenation purposes: word characters that are not digits.
fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Whether a word may break right after the hyphen at `i`.
///
/// The hyphen must follow two letters, or a letter preceded by another
/// hyphenated letter ("a-b-c"), and must be followed by a letter, an optional
/// hyphen and another letter.
fn is_hyphen_break(word: &[char], i: usize) -> bool {
    let at = |index: usize| word.get(index).copied();
    let letter_at = |index: usize| at(index).is_some_and(is_letter);

    let after_word = i >= 2 && letter_at(i - 1) && letter_at(i - 2);
    let after_compound = i >= 3 && letter_at(i - 1) && at(i - 2) == Some('-') && letter_at(i - 3);
    let before_word =
        letter_at(i + 1) && (letter_at(i + 2) || (at(i + 2) == Some('-') && letter_at(i + 3)));

    (after_word || after_compound) && before_word
}

fn split_hyphenated(word: Vec<char>) -> Vec<Vec<char>> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for i in 0..word.len() {
        if word[i] == '-' && is_hyphen_break(&word, i) {
            pieces.push(word[start..=i].to_vec());
            start = i + 1;
        }
    }

    if start < word.len() {
        pieces.push(word[start..].to_vec());
    }
    pieces
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&ch| ch == ' ')
}

fn wrap_chunks(mut chunks: Vec<Vec<char>>, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    chunks.reverse();

    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut line_len = 0;

        // Leading whitespace survives only on the first line.
        if !lines.is_empty() && chunks.last().is_some_and(|chunk| is_blank(chunk)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            if line_len + chunk.len() <= width {
                line_len += chunk.len();
                line.push(chunk);
            } else {
                chunks.push(chunk);
                break;
            }
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > width {
                let space_left = width - line_len;
                let rest = chunk.split_off(long_word_break(chunk, space_left));
                line.push(std::mem::replace(chunk, rest));
            }
        }

        if line.last().is_some_and(|chunk| is_blank(chunk)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }

    lines
}

/// Where to cut an overlong word with `space_left` columns free: after the
/// last hyphen that fits, or exactly at the edge when there is none.
fn long_word_break(chunk: &[char], space_left: usize) -> usize {
    chunk[..space_left]
        .iter()
        .rposition(|&ch| ch == '-')
        .filter(|&hyphen| hyphen > 0 && chunk[..hyphen].iter().any(|&ch| ch != '-'))
        .map_or(space_left, |hyphen| hyphen + 1)
}

fn center_lines(text: &str, width: usize) -> Result<String, OperationError> {
    let lines: Vec<&str> = text.split('\n').collect();

    let padding = lines
        .iter()
        .map(|line| width.saturating_sub(line.chars().count()))
        .try_fold(0usize, |total, margin| total.checked_add(margin))
        .filter(|total| *total <= MAX_PADDING)
        .ok_or_else(|| OperationError::Execution {
            context: CONTEXT,
            message: format!(
                "width {} needs more than {} padding characters",
                width, MAX_PADDING
            ),
        })?;

    let mut centered = String::with_capacity(text.len() + padding);
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            centered.push('\n');
        }
        center(&mut centered, line, width);
    }
    Ok(centered)
}

/// Center `line` in `width` columns, putting the odd space where `str.center` does.
fn center(out: &mut String, line: &str, width: usize) {
    let len = line.chars().count();
    if width <= len {
        out.push_str(line);
        return;
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(margin - left));
}

/// Prefix every line, blank and whitespace-only lines included, with [`INDENT`].
fn indent(text: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| format!("{}{}", INDENT, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, format_type: FormatType, width: usize) -> String {
        format(text, format_type, width).unwrap()
    }

    #[test]
    fn test_wrap_greedy() {
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(
            run(text, FormatType::Wrap, 10),
            "The quick\nbrown fox\njumps over\nthe lazy\ndog"
        );
        assert_eq!(run(text, FormatType::Wrap, DEFAULT_WIDTH), text);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(run("abcdefghij", FormatType::Wrap, 4), "abcd\nefgh\nij");
        assert_eq!(run("ab abcdefgh", FormatType::Wrap, 5), "ab ab\ncdefg\nh");
    }

    #[test]
    fn test_wrap_whitespace_handling() {
        assert_eq!(run("a\tb\nc", FormatType::Wrap, 80), "a       b c");
        assert_eq!(run("  hi there", FormatType::Wrap, 80), "  hi there");
        assert_eq!(run("   \n  ", FormatType::Wrap, 80), "");
        assert_eq!(run("", FormatType::Wrap, 80), "");
    }

    #[test]
    fn test_wrap_breaks_after_hyphens() {
        struct TestCase {
            text: &'static str,
            format_type: FormatType,
            width: usize,
            expected: &'static str,
        }

        let cases = vec![
            TestCase {
                text: "well-known fact",
                format_type: FormatType::Wrap,
                width: 6,
                expected: "well-\nknown\nfact",
            },
            TestCase {
                text: "state-of-the-art design",
                format_type: FormatType::Wrap,
                width: 10,
                expected: "state-of-\nthe-art\ndesign",
            },
            TestCase {
                text: "x-ray e-mail 3-4",
                format_type: FormatType::Wrap,
                width: 5,
                expected: "x-ray\ne-\nmail\n3-4",
            },
            TestCase {
                text: "a  well-known\tself-evident  fact",
                format_type: FormatType::Justify,
                width: 12,
                expected: "a well-known\nself-evident\nfact",
            },
            TestCase {
                text: "long-winded  remarks",
                format_type: FormatType::Justify,
                width: 8,
                expected: "long-\nwinded\nremarks",
            },
        ];

        for case in cases {
            assert_eq!(
                run(case.text, case.format_type, case.width),
                case.expected,
                "{:?} at width {} for {:?}",
                case.format_type,
                case.width,
                case.text
            );
        }
    }

    #[test]
    fn test_split_chunks_hyphenation_rules() {
        let chunks = |text: &str| -> Vec<String> {
            let chars: Vec<char> = text.chars().collect();
            split_chunks(&chars)
                .into_iter()
                .map(|chunk| chunk.into_iter().collect())
                .collect()
        };

        assert_eq!(chunks("well-known"), vec!["well-", "known"]);
        assert_eq!(chunks("a-b-c"), vec!["a-b-c"]);
        assert_eq!(chunks("12-34 ab-c"), vec!["12-34", " ", "ab-c"]);
        assert_eq!(chunks("co-op-er"), vec!["co-", "op-", "er"]);
    }

    #[test]
    fn test_long_word_breaks_at_last_hyphen_that_fits() {
        assert_eq!(run("ab-1234567", FormatType::Wrap, 5), "ab-\n12345\n67");
        assert_eq!(run("abc-defghijk", FormatType::Wrap, 6), "abc-de\nfghijk");
        assert_eq!(run("--abcdefgh", FormatType::Wrap, 4), "--ab\ncdef\ngh");
    }

    #[test]
    fn test_justify_collapses_whitespace() {
        assert_eq!(run("a\t\tb   c", FormatType::Justify, 80), "a b c");
        assert_eq!(run("one   two\tthree", FormatType::Justify, 8), "one two\nthree");
    }

    #[test]
    fn test_zero_width_is_an_execution_error() {
        let err = format("text", FormatType::Wrap, 0).unwrap_err();
        assert_eq!(err.to_string(), "Text formatting failed: invalid width 0 (must be > 0)");
    }

    #[test]
    fn test_center_padding() {
        assert_eq!(run("ab", FormatType::Center, 6), "  ab  ");
        assert_eq!(run("abc", FormatType::Center, 6), " abc  ");
        assert_eq!(run("ab", FormatType::Center, 5), "  ab ");
        assert_eq!(run("toolong", FormatType::Center, 3), "toolong");
        assert_eq!(run("a\nbb", FormatType::Center, 4), " a  \n bb ");
    }

    #[test]
    fn test_center_rejects_excessive_padding() {
        let err = format("x", FormatType::Center, 1 << 50).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Text formatting failed: width 1125899906842624 needs more than"));

        let many_lines = "\n".repeat(16);
        assert!(format(&many_lines, FormatType::Center, MAX_PADDING / 8).is_err());
        assert!(format("x", FormatType::Center, MAX_PADDING).is_ok());
    }

    #[test]
    fn test_indent_every_line() {
        assert_eq!(run("a\nb\n", FormatType::Indent, 0), "    a\n    b\n");
        assert_eq!(run("a\n\nb", FormatType::Indent, 80), "    a\n    \n    b");
        assert_eq!(run("a\n  \nb", FormatType::Indent, 80), "    a\n      \n    b");
        assert_eq!(run("", FormatType::Indent, 80), "");
    }

    #[test]
    fn test_reverse_and_sort() {
        assert_eq!(run("héllo\nworld", FormatType::Reverse, 80), "dlrow\nolléh");
        assert_eq!(run("b\na\nc", FormatType::SortLines, 80), "a\nb\nc");
        assert_eq!(run("b\nB\n\na", FormatType::SortLines, 80), "\nB\na\nb");
    }

    #[test]
    fn test_width_usage() {
        let used: Vec<_> = FormatType::ALL
            .iter()
            .filter(|format_type| format_type.uses_width())
            .map(|format_type| format_type.as_str())
            .collect();
        assert_eq!(used, vec!["wrap", "center", "justify"]);
    }
}
