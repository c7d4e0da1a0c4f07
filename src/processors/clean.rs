// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(patterns::URL).unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Which cleaning passes to run. Every pass is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    pub remove_html: bool,
    pub remove_urls: bool,
    pub normalize_whitespace: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            remove_html: true,
            remove_urls: true,
            normalize_whitespace: true,
        }
    }
}

impl CleanOptions {
    /// Option names in the order the passes run.
    pub const NAMES: &'static [&'static str] =
        &["remove_html", "remove_urls", "normalize_whitespace"];
}

/// Apply the enabled passes to `text`.
///
/// Passes always run in the same order: HTML tags, then URLs, then whitespace.
/// A URL inside a tag attribute is therefore removed along with the tag.
pub fn clean(text: &str, options: CleanOptions) -> String {
    let mut cleaned = text.to_string();

    if options.remove_html {
        cleaned = HTML_TAG.replace_all(&cleaned, "").into_owned();
    }

    if options.remove_urls {
        cleaned = URL.replace_all(&cleaned, "").into_owned();
    }

    if options.normalize_whitespace {
        cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string();
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passes() {
        assert_eq!(
            clean("<b>hi</b> http://x.com   there", CleanOptions::default()),
            "hi there"
        );
    }

    #[test]
    fn test_passes_toggle_independently() {
        let input = "<p>see  https://a.io</p>";
        let cases = vec![
            ((false, false, false), "<p>see  https://a.io</p>"),
            ((true, false, false), "see  https://a.io"),
            ((false, true, false), "<p>see  "),
            ((false, false, true), "<p>see https://a.io</p>"),
            ((true, true, true), "see"),
        ];

        for ((remove_html, remove_urls, normalize_whitespace), expected) in cases {
            let options = CleanOptions {
                remove_html,
                remove_urls,
                normalize_whitespace,
            };
            assert_eq!(clean(input, options), expected, "options: {:?}", options);
        }
    }

    #[test]
    fn test_tag_attribute_url_goes_with_the_tag() {
        let input = r#"<a href="https://example.com">link</a> text"#;
        let options = CleanOptions {
            remove_urls: false,
            ..CleanOptions::default()
        };
        assert_eq!(clean(input, options), "link text");
    }

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        let options = CleanOptions {
            remove_html: false,
            remove_urls: false,
            normalize_whitespace: true,
        };
        assert_eq!(clean("  a\t\tb\n\nc  ", options), "a b c");
    }
}
