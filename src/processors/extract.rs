// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::patterns::PatternType;
use super::TextChoice;
use crate::errors::OperationError;

/// Which patterns an extraction runs: one library pattern, or every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternSelection {
    #[default]
    All,
    Single(PatternType),
}

impl PatternSelection {
    pub const ALL_NAME: &'static str = "all";

    pub fn parse(value: &str) -> Result<Self, OperationError> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == Self::ALL_NAME {
            return Ok(PatternSelection::All);
        }

        PatternType::parse(&normalized)
            .map(PatternSelection::Single)
            .map_err(|_| OperationError::UnsupportedValue {
                kind: PatternType::KIND,
                value: normalized,
                available: format!("{}, {}", PatternType::names().join(", "), Self::ALL_NAME),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternSelection::All => Self::ALL_NAME,
            PatternSelection::Single(pattern) => pattern.as_str(),
        }
    }

    pub fn patterns(&self) -> Vec<PatternType> {
        match self {
            PatternSelection::All => PatternType::ALL.to_vec(),
            PatternSelection::Single(pattern) => vec![*pattern],
        }
    }
}

impl Serialize for PatternSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Matches grouped by pattern, in library order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub results: IndexMap<PatternType, Vec<String>>,
    pub total_matches: usize,
}

/// Run the selected patterns over `text`.
///
/// Every selected pattern gets a key in `results`, even when it found nothing.
pub fn extract(text: &str, selection: PatternSelection) -> Extraction {
    let results: IndexMap<PatternType, Vec<String>> = selection
        .patterns()
        .into_iter()
        .map(|pattern| (pattern, pattern.find_all(text)))
        .collect();
    let total_matches = results.values().map(Vec::len).sum();

    Extraction {
        results,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Contact support@example.com or call 555-123-4567. \
                          Docs at https://docs.example.com, server 192.168.0.10. #help @ops";

    #[test]
    fn test_all_includes_every_key() {
        let extraction = extract("nothing to see", PatternSelection::All);
        assert_eq!(extraction.results.len(), PatternType::ALL.len());
        assert!(extraction.results.values().all(Vec::is_empty));
        assert_eq!(extraction.total_matches, 0);

        let keys: Vec<_> = extraction.results.keys().copied().collect();
        assert_eq!(keys, PatternType::ALL.to_vec());
    }

    #[test]
    fn test_total_matches_is_sum_of_lists() {
        let extraction = extract(SAMPLE, PatternSelection::All);
        let sum: usize = extraction.results.values().map(Vec::len).sum();
        assert_eq!(extraction.total_matches, sum);
        assert_eq!(extraction.results[&PatternType::Email], vec!["support@example.com"]);
        assert_eq!(extraction.results[&PatternType::Ip], vec!["192.168.0.10"]);
        assert_eq!(extraction.results[&PatternType::Hashtag], vec!["#help"]);
    }

    #[test]
    fn test_single_selection_returns_one_key() {
        let extraction = extract(SAMPLE, PatternSelection::Single(PatternType::Url));
        assert_eq!(extraction.results.len(), 1);
        assert_eq!(extraction.results[&PatternType::Url], vec!["https://docs.example.com,"]);
        assert_eq!(extraction.total_matches, 1);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(PatternSelection::parse("ALL").unwrap(), PatternSelection::All);
        assert_eq!(
            PatternSelection::parse("email").unwrap(),
            PatternSelection::Single(PatternType::Email)
        );

        let err = PatternSelection::parse("zipcode").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported pattern type: zipcode. Available: email, url, phone, hashtag, mention, ip, all"
        );
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let extraction = extract("#tag", PatternSelection::Single(PatternType::Hashtag));
        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["results"]["hashtag"][0], "#tag");
        assert_eq!(json["total_matches"], 1);
    }
}
