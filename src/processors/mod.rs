// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure text components invoked by the dispatcher.
//!
//! Every function in this module is side-effect free and safe to call from any
//! number of threads at once. Components never build envelopes themselves; they
//! return plain values or an [`OperationError`] and leave the conversion to
//! [`crate::dispatch`].
//!
//! # Components
//!
//! - [`case`] - nine case styles
//! - [`analyze`] - word, sentence and character statistics
//! - [`clean`] - HTML, URL and whitespace passes
//! - [`patterns`] / [`extract`] - named regexes and match aggregation
//! - [`encode`] - reversible encodings and one-way digests
//! - [`format`] - wrapping and line layout

pub mod analyze;
pub mod case;
pub mod clean;
pub mod encode;
pub mod extract;
pub mod format;
pub mod patterns;

pub use analyze::{analyze, CharacterCounts, TextStats};
pub use case::{convert, CaseType};
pub use clean::{clean, CleanOptions};
pub use encode::{encode, EncodingType};
pub use extract::{extract, Extraction, PatternSelection};
pub use format::{format, FormatType, DEFAULT_WIDTH};
pub use patterns::PatternType;

use crate::errors::OperationError;

/// A closed set of named choices selectable by string, such as [`CaseType`].
///
/// Parsing trims the input and ignores ASCII case. Unknown names produce an
/// [`OperationError::UnsupportedValue`] listing every valid name in
/// declaration order.
pub trait TextChoice: Sized + Copy + 'static {
    /// Human-readable name of the choice set, used in error messages.
    const KIND: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.as_str()).collect()
    }

    fn parse(value: &str) -> Result<Self, OperationError> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str() == normalized)
            .ok_or_else(|| OperationError::UnsupportedValue {
                kind: Self::KIND,
                value: normalized,
                available: Self::names().join(", "),
            })
    }
}
