// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Named regular expressions for entity extraction.
//!
//! The expressions are compiled once on first use and shared across threads.
//! The `regex` crate matches in linear time, so none of these can backtrack
//! catastrophically regardless of input.
//!
//! The phone and ip patterns are deliberately permissive: `999.999.999.999`
//! is an ip match and area codes are not checked.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::TextChoice;

pub(crate) const EMAIL: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
pub(crate) const URL: &str = r"https?://(?:[a-zA-Z0-9$-_@.&+!*(),\\]|%[0-9a-fA-F]{2})+";
pub(crate) const PHONE: &str = r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";
pub(crate) const HASHTAG: &str = r"#\w+";
pub(crate) const MENTION: &str = r"@\w+";
pub(crate) const IP: &str = r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL).unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(URL).unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE).unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(HASHTAG).unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(MENTION).unwrap());
static IP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(IP).unwrap());

/// Entity categories known to the pattern library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Email,
    Url,
    Phone,
    Hashtag,
    Mention,
    Ip,
}

impl PatternType {
    pub fn regex(&self) -> &'static Regex {
        match self {
            PatternType::Email => &*EMAIL_RE,
            PatternType::Url => &*URL_RE,
            PatternType::Phone => &*PHONE_RE,
            PatternType::Hashtag => &*HASHTAG_RE,
            PatternType::Mention => &*MENTION_RE,
            PatternType::Ip => &*IP_RE,
        }
    }

    /// All non-overlapping matches in `text`, in order of appearance.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl TextChoice for PatternType {
    const KIND: &'static str = "pattern type";
    const ALL: &'static [PatternType] = &[
        PatternType::Email,
        PatternType::Url,
        PatternType::Phone,
        PatternType::Hashtag,
        PatternType::Mention,
        PatternType::Ip,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PatternType::Email => "email",
            PatternType::Url => "url",
            PatternType::Phone => "phone",
            PatternType::Hashtag => "hashtag",
            PatternType::Mention => "mention",
            PatternType::Ip => "ip",
        }
    }
}
