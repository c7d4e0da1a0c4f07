// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The uniform response returned by every invocation.
//!
//! A [`ResultEnvelope`] serializes to a flat JSON object:
//!
//! ```text
//! { "success": true,  "original": "...", "transformed": "...", "case_type": "snake" }
//! { "success": false, "error": "Unsupported case type: shouty. Available: ..." }
//! ```
//!
//! The fields are private and the only constructors are [`ResultEnvelope::success`]
//! and [`ResultEnvelope::failure`], so a successful envelope can never carry an
//! error and a failed one never carries partial output.

use serde::Serialize;
use std::fmt::Display;

use crate::processors::{
    CaseType, CleanOptions, EncodingType, Extraction, FormatType, PatternSelection, TextStats,
};

/// Operation-specific fields of a successful envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Case {
        original: String,
        transformed: String,
        case_type: CaseType,
    },
    Analysis {
        analysis: TextStats,
    },
    Cleaned {
        original: String,
        cleaned: String,
        operations: CleanOptions,
    },
    Patterns {
        pattern_type: PatternSelection,
        #[serde(flatten)]
        extraction: Extraction,
    },
    Encoded {
        original: String,
        encoded: String,
        encoding_type: EncodingType,
    },
    Formatted {
        original: String,
        formatted: String,
        format_type: FormatType,
        width: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEnvelope {
    success: bool,
    #[serde(flatten)]
    output: Option<OperationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

const UNKNOWN_ERROR: &str = "Unknown error";

impl ResultEnvelope {
    pub fn success(output: OperationOutput) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    /// A failed envelope. An empty message is replaced so `error` is never blank.
    pub fn failure(error: impl Display) -> Self {
        let message = error.to_string();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };

        Self {
            success: false,
            output: None,
            error: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&OperationOutput> {
        self.output.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_result(self) -> Result<OperationOutput, String> {
        match (self.output, self.error) {
            (Some(output), None) => Ok(output),
            (_, Some(error)) => Err(error),
            (None, None) => Err(UNKNOWN_ERROR.to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
