// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::TextChoice;

/// Supported case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Upper,
    Lower,
    Title,
    Capitalize,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
}

impl CaseType {
    /// Styles that only change letter case and keep the text's shape.
    pub const BASIC: &'static [CaseType] = &[
        CaseType::Upper,
        CaseType::Lower,
        CaseType::Title,
        CaseType::Capitalize,
    ];

    /// Identifier styles that retokenize the input.
    pub const PROGRAMMING: &'static [CaseType] = &[
        CaseType::Camel,
        CaseType::Pascal,
        CaseType::Snake,
        CaseType::Kebab,
        CaseType::Constant,
    ];
}

impl TextChoice for CaseType {
    const KIND: &'static str = "case type";
    const ALL: &'static [CaseType] = &[
        CaseType::Upper,
        CaseType::Lower,
        CaseType::Title,
        CaseType::Capitalize,
        CaseType::Camel,
        CaseType::Pascal,
        CaseType::Snake,
        CaseType::Kebab,
        CaseType::Constant,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CaseType::Upper => "upper",
            CaseType::Lower => "lower",
            CaseType::Title => "title",
            CaseType::Capitalize => "capitalize",
            CaseType::Camel => "camel",
            CaseType::Pascal => "pascal",
            CaseType::Snake => "snake",
            CaseType::Kebab => "kebab",
            CaseType::Constant => "constant",
        }
    }
}

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());
static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert `text` to the requested case style.
pub fn convert(text: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::Upper => text.to_uppercase(),
        CaseType::Lower => text.to_lowercase(),
        CaseType::Title => to_title(text),
        CaseType::Capitalize => capitalize(text),
        CaseType::Camel => to_camel(text),
        CaseType::Pascal => tokens(text).map(capitalize).collect(),
        CaseType::Snake => join_identifier(text, "_"),
        CaseType::Kebab => join_identifier(text, "-"),
        CaseType::Constant => join_identifier(text, "_").to_uppercase(),
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    SEPARATORS.split(text).filter(|token| !token.is_empty())
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn to_title(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            result.push(ch);
            at_word_start = true;
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

fn to_camel(text: &str) -> String {
    let mut words = tokens(text);
    match words.next() {
        None => String::new(),
        Some(first) => first.to_lowercase() + &words.map(capitalize).collect::<String>(),
    }
}

/// Shared body of snake, kebab and constant case.
fn join_identifier(text: &str, separator: &str) -> String {
    let split_camel = WORD_BOUNDARY.replace_all(text, "$1 $2");
    tokens(&split_camel)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(separator)
}
