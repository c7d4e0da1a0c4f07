// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharacterCounts {
    pub total: usize,
    pub letters: usize,
    pub digits: usize,
    pub spaces: usize,
    /// Anything that is neither alphanumeric nor whitespace.
    pub punctuation: usize,
}

/// Word, sentence and character statistics for a piece of text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_counts: CharacterCounts,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
}

/// Compute [`TextStats`] for `text`.
///
/// Words are whitespace-separated tokens. Sentences are the non-blank segments
/// left after splitting on runs of `.`, `!` and `?`. Both averages are `0.0`
/// when there is nothing to average over.
pub fn analyze(text: &str) -> TextStats {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count();

    let chars_in_words: usize = words.iter().map(|word| word.chars().count()).sum();

    let average_word_length = if words.is_empty() {
        0.0
    } else {
        chars_in_words as f64 / words.len() as f64
    };
    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        words.len() as f64 / sentence_count as f64
    };

    TextStats {
        word_count: words.len(),
        sentence_count,
        character_counts: count_characters(text),
        average_word_length,
        average_sentence_length,
    }
}

fn count_characters(text: &str) -> CharacterCounts {
    text.chars().fold(CharacterCounts::default(), |mut counts, ch| {
        counts.total += 1;
        if ch.is_alphabetic() {
            counts.letters += 1;
        }
        if ch.is_numeric() {
            counts.digits += 1;
        }
        if ch.is_whitespace() {
            counts.spaces += 1;
        }
        if !ch.is_alphanumeric() && !ch.is_whitespace() {
            counts.punctuation += 1;
        }
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        let stats = analyze("");
        assert_eq!(stats, TextStats::default());
        assert_eq!(stats.average_word_length, 0.0);
        assert_eq!(stats.average_sentence_length, 0.0);
    }

    #[test]
    fn test_basic_statistics() {
        let stats = analyze("Hello world. How are you?! Fine");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.average_sentence_length, 2.0);
        // "Hello"5 "world."6 "How"3 "are"3 "you?!"5 "Fine"4
        assert!((stats.average_word_length - 26.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_character_classes() {
        let counts = analyze("Ab 12, ok!").character_counts;
        assert_eq!(
            counts,
            CharacterCounts {
                total: 10,
                letters: 4,
                digits: 2,
                spaces: 2,
                punctuation: 2,
            }
        );
    }

    #[test]
    fn test_punctuation_only_has_no_sentences() {
        let stats = analyze("...!?");
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.average_sentence_length, 0.0);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(analyze("one two")).unwrap();
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["character_counts"]["spaces"], 1);
        assert_eq!(json["average_word_length"], 3.0);
    }
}
