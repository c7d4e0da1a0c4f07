// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Read-only reference resources describing the supported choices.
//!
//! Every list is derived from the processor enums, so adding a variant there
//! shows up here without a second edit. Group membership is decided by
//! exhaustive matches, which makes an unclassified variant a compile error.

use serde::Serialize;
use serde_json::{json, Value};

use crate::processors::{CaseType, CleanOptions, EncodingType, FormatType, PatternType, TextChoice};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseTypeCatalog {
    pub basic_cases: Vec<CaseType>,
    pub programming_cases: Vec<CaseType>,
    pub all_cases: Vec<CaseType>,
}

impl CaseTypeCatalog {
    pub fn build() -> Self {
        Self {
            basic_cases: CaseType::BASIC.to_vec(),
            programming_cases: CaseType::PROGRAMMING.to_vec(),
            all_cases: CaseType::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodingCatalog {
    pub encoding_methods: Vec<EncodingType>,
    pub decoding_methods: Vec<EncodingType>,
    pub hash_methods: Vec<EncodingType>,
}

impl EncodingCatalog {
    pub fn build() -> Self {
        let (decoding_methods, hash_methods) = EncodingType::ALL
            .iter()
            .copied()
            .partition(|encoding| encoding.is_reversible());

        Self {
            encoding_methods: EncodingType::ALL.to_vec(),
            decoding_methods,
            hash_methods,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternCatalog {
    pub contact_patterns: Vec<PatternType>,
    pub web_patterns: Vec<PatternType>,
    pub social_patterns: Vec<PatternType>,
    pub all_patterns: Vec<PatternType>,
}

enum PatternGroup {
    Contact,
    Web,
    Social,
}

fn pattern_group(pattern: PatternType) -> PatternGroup {
    match pattern {
        PatternType::Email | PatternType::Phone => PatternGroup::Contact,
        PatternType::Url | PatternType::Ip => PatternGroup::Web,
        PatternType::Hashtag | PatternType::Mention => PatternGroup::Social,
    }
}

impl PatternCatalog {
    pub fn build() -> Self {
        let mut catalog = Self {
            contact_patterns: Vec::new(),
            web_patterns: Vec::new(),
            social_patterns: Vec::new(),
            all_patterns: PatternType::ALL.to_vec(),
        };

        for pattern in PatternType::ALL.iter().copied() {
            match pattern_group(pattern) {
                PatternGroup::Contact => catalog.contact_patterns.push(pattern),
                PatternGroup::Web => catalog.web_patterns.push(pattern),
                PatternGroup::Social => catalog.social_patterns.push(pattern),
            }
        }

        catalog
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatOperationCatalog {
    pub layout_operations: Vec<FormatType>,
    pub transformation_operations: Vec<FormatType>,
    pub all_operations: Vec<FormatType>,
}

impl FormatOperationCatalog {
    pub fn build() -> Self {
        Self {
            layout_operations: FormatType::LAYOUT.to_vec(),
            transformation_operations: FormatType::TRANSFORMATION.to_vec(),
            all_operations: FormatType::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningOptionCatalog {
    pub content_removal: Vec<&'static str>,
    pub formatting_options: Vec<&'static str>,
    pub all_options: Vec<&'static str>,
}

impl CleaningOptionCatalog {
    pub fn build() -> Self {
        let (formatting_options, content_removal) = CleanOptions::NAMES
            .iter()
            .copied()
            .partition(|name| *name == "normalize_whitespace");

        Self {
            content_removal,
            formatting_options,
            all_options: CleanOptions::NAMES.to_vec(),
        }
    }
}

/// Index entry for one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceInfo {
    pub name: &'static str,
    pub uri: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCatalog {
    CaseTypes,
    Encodings,
    Patterns,
    FormatOperations,
    CleaningOptions,
}

impl ResourceCatalog {
    pub const ALL: &'static [ResourceCatalog] = &[
        ResourceCatalog::CaseTypes,
        ResourceCatalog::Encodings,
        ResourceCatalog::Patterns,
        ResourceCatalog::FormatOperations,
        ResourceCatalog::CleaningOptions,
    ];

    pub fn info(&self) -> ResourceInfo {
        let (name, uri, description) = match self {
            ResourceCatalog::CaseTypes => (
                "text_case_types",
                "internal://text/case-types",
                "List of supported case transformation types",
            ),
            ResourceCatalog::Encodings => (
                "text_supported_encodings",
                "internal://text/encodings",
                "List of supported encoding methods",
            ),
            ResourceCatalog::Patterns => (
                "text_supported_patterns",
                "internal://text/patterns",
                "List of supported pattern types for extraction",
            ),
            ResourceCatalog::FormatOperations => (
                "text_format_operations",
                "internal://text/format-operations",
                "List of supported text formatting operations",
            ),
            ResourceCatalog::CleaningOptions => (
                "text_cleaning_options",
                "internal://text/cleaning-options",
                "List of available text cleaning options",
            ),
        };

        ResourceInfo {
            name,
            uri,
            description,
            kind: "reference",
        }
    }

    pub fn index() -> Vec<ResourceInfo> {
        Self::ALL.iter().map(|resource| resource.info()).collect()
    }

    /// Look a resource up by name or URI.
    pub fn find(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|resource| {
            let info = resource.info();
            info.name == key || info.uri == key
        })
    }

    /// Resource body: `{"success": true, <key>: <catalog>}`.
    pub fn contents(&self) -> Value {
        match self {
            ResourceCatalog::CaseTypes => json!({
                "success": true,
                "case_types": CaseTypeCatalog::build(),
            }),
            ResourceCatalog::Encodings => json!({
                "success": true,
                "encodings": EncodingCatalog::build(),
            }),
            ResourceCatalog::Patterns => json!({
                "success": true,
                "patterns": PatternCatalog::build(),
            }),
            ResourceCatalog::FormatOperations => json!({
                "success": true,
                "operations": FormatOperationCatalog::build(),
            }),
            ResourceCatalog::CleaningOptions => json!({
                "success": true,
                "cleaning_options": CleaningOptionCatalog::build(),
            }),
        }
    }
}
