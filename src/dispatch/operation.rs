// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::params::{ParameterDefault, ParameterKind, ParameterSpec};
use crate::errors::OperationError;
use crate::processors::format::DEFAULT_WIDTH;

/// Prefix the registration layer puts in front of operation names.
pub const ALIAS_PREFIX: &str = "text_";

/// Every operation the dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    TransformCase,
    AnalyzeText,
    CleanText,
    ExtractPatterns,
    EncodeText,
    FormatText,
}

const TRANSFORM_CASE_PARAMS: &[ParameterSpec] = &[ParameterSpec {
    name: "case_type",
    kind: ParameterKind::CaseType,
    default: None,
}];

const CLEAN_TEXT_PARAMS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "remove_html",
        kind: ParameterKind::Boolean,
        default: Some(ParameterDefault::Boolean(true)),
    },
    ParameterSpec {
        name: "remove_urls",
        kind: ParameterKind::Boolean,
        default: Some(ParameterDefault::Boolean(true)),
    },
    ParameterSpec {
        name: "normalize_whitespace",
        kind: ParameterKind::Boolean,
        default: Some(ParameterDefault::Boolean(true)),
    },
];

const EXTRACT_PATTERNS_PARAMS: &[ParameterSpec] = &[ParameterSpec {
    name: "pattern_type",
    kind: ParameterKind::PatternType,
    default: Some(ParameterDefault::Text("all")),
}];

const ENCODE_TEXT_PARAMS: &[ParameterSpec] = &[ParameterSpec {
    name: "encoding_type",
    kind: ParameterKind::EncodingType,
    default: None,
}];

const FORMAT_TEXT_PARAMS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "format_type",
        kind: ParameterKind::FormatType,
        default: None,
    },
    ParameterSpec {
        name: "width",
        kind: ParameterKind::PositiveInteger,
        default: Some(ParameterDefault::Integer(DEFAULT_WIDTH)),
    },
];

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::TransformCase,
        Operation::AnalyzeText,
        Operation::CleanText,
        Operation::ExtractPatterns,
        Operation::EncodeText,
        Operation::FormatText,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::TransformCase => "transform_case",
            Operation::AnalyzeText => "analyze_text",
            Operation::CleanText => "clean_text",
            Operation::ExtractPatterns => "extract_patterns",
            Operation::EncodeText => "encode_text",
            Operation::FormatText => "format_text",
        }
    }

    /// Name under which the registration layer publishes this operation.
    pub fn alias(&self) -> String {
        format!("{}{}", ALIAS_PREFIX, self.name())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::TransformCase => "Transform text case (upper, lower, title, camel, snake, etc.)",
            Operation::AnalyzeText => "Analyze text and provide statistics",
            Operation::CleanText => "Clean and normalize text",
            Operation::ExtractPatterns => "Extract patterns like emails, URLs, phone numbers from text",
            Operation::EncodeText => "Encode text using various encoding methods",
            Operation::FormatText => "Format text with various formatting options",
        }
    }

    /// Parameters accepted besides `text`, in declaration order.
    pub fn parameters(&self) -> &'static [ParameterSpec] {
        match self {
            Operation::TransformCase => TRANSFORM_CASE_PARAMS,
            Operation::AnalyzeText => &[],
            Operation::CleanText => CLEAN_TEXT_PARAMS,
            Operation::ExtractPatterns => EXTRACT_PATTERNS_PARAMS,
            Operation::EncodeText => ENCODE_TEXT_PARAMS,
            Operation::FormatText => FORMAT_TEXT_PARAMS,
        }
    }

    /// Prefix for execution failures, e.g. "Text formatting failed: ...".
    pub fn failure_context(&self) -> &'static str {
        match self {
            Operation::TransformCase => "Case transformation",
            Operation::AnalyzeText => "Text analysis",
            Operation::CleanText => "Text cleaning",
            Operation::ExtractPatterns => "Pattern extraction",
            Operation::EncodeText => "Text encoding",
            Operation::FormatText => "Text formatting",
        }
    }

    /// Look up an operation by canonical name or `text_`-prefixed alias.
    pub fn parse(name: &str) -> Result<Self, OperationError> {
        let trimmed = name.trim();
        let canonical = trimmed.strip_prefix(ALIAS_PREFIX).unwrap_or(trimmed);

        Self::ALL
            .iter()
            .copied()
            .find(|operation| operation.name() == canonical)
            .ok_or_else(|| OperationError::UnknownOperation {
                name: trimmed.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|operation| operation.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
