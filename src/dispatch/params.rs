// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parameter schemas and validation of caller-supplied options.

use serde::Serialize;
use serde_json::Value;

use super::operation::Operation;
use crate::errors::OperationError;
use crate::processors::{
    CaseType, CleanOptions, EncodingType, FormatType, PatternSelection, PatternType, TextChoice,
};

/// Caller-supplied options, keyed by parameter name.
pub type Options = serde_json::Map<String, Value>;

/// Name of the input parameter shared by every operation.
pub const TEXT_PARAMETER: &str = "text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Boolean,
    PositiveInteger,
    CaseType,
    PatternType,
    EncodingType,
    FormatType,
}

impl ParameterKind {
    /// Valid values for enumerated kinds; empty for free-form kinds.
    pub fn allowed_values(&self) -> Vec<&'static str> {
        match self {
            ParameterKind::Boolean | ParameterKind::PositiveInteger => Vec::new(),
            ParameterKind::CaseType => CaseType::names(),
            ParameterKind::PatternType => {
                let mut names = PatternType::names();
                names.push(PatternSelection::ALL_NAME);
                names
            }
            ParameterKind::EncodingType => EncodingType::names(),
            ParameterKind::FormatType => FormatType::names(),
        }
    }

    /// JSON type the value must have.
    pub fn json_type(&self) -> &'static str {
        match self {
            ParameterKind::Boolean => "boolean",
            ParameterKind::PositiveInteger => "integer",
            _ => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterDefault {
    Boolean(bool),
    Integer(usize),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterKind,
    /// `None` means the caller must supply the parameter.
    pub default: Option<ParameterDefault>,
}

impl ParameterSpec {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A fully validated invocation, ready to hand to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationRequest {
    TransformCase(CaseType),
    AnalyzeText,
    CleanText(CleanOptions),
    ExtractPatterns(PatternSelection),
    EncodeText(EncodingType),
    FormatText { format_type: FormatType, width: usize },
}

impl OperationRequest {
    /// Validate `options` against `operation`'s schema.
    ///
    /// Rejects unknown parameter names, missing required parameters, values of
    /// the wrong JSON type, unknown enum values and widths below 1. A JSON `null`
    /// counts as absent.
    pub fn from_options(operation: Operation, options: &Options) -> Result<Self, OperationError> {
        let reader = OptionReader { operation, options };
        reader.reject_unknown()?;

        let request = match operation {
            Operation::TransformCase => {
                OperationRequest::TransformCase(CaseType::parse(reader.required_str("case_type")?)?)
            }
            Operation::AnalyzeText => OperationRequest::AnalyzeText,
            Operation::CleanText => {
                let defaults = CleanOptions::default();
                OperationRequest::CleanText(CleanOptions {
                    remove_html: reader.boolean("remove_html", defaults.remove_html)?,
                    remove_urls: reader.boolean("remove_urls", defaults.remove_urls)?,
                    normalize_whitespace: reader
                        .boolean("normalize_whitespace", defaults.normalize_whitespace)?,
                })
            }
            Operation::ExtractPatterns => {
                let selection = match reader.optional_str("pattern_type")? {
                    Some(value) => PatternSelection::parse(value)?,
                    None => PatternSelection::default(),
                };
                OperationRequest::ExtractPatterns(selection)
            }
            Operation::EncodeText => {
                OperationRequest::EncodeText(EncodingType::parse(reader.required_str("encoding_type")?)?)
            }
            Operation::FormatText => OperationRequest::FormatText {
                format_type: FormatType::parse(reader.required_str("format_type")?)?,
                width: reader.positive_integer("width", crate::processors::DEFAULT_WIDTH)?,
            },
        };

        Ok(request)
    }

    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::TransformCase(_) => Operation::TransformCase,
            OperationRequest::AnalyzeText => Operation::AnalyzeText,
            OperationRequest::CleanText(_) => Operation::CleanText,
            OperationRequest::ExtractPatterns(_) => Operation::ExtractPatterns,
            OperationRequest::EncodeText(_) => Operation::EncodeText,
            OperationRequest::FormatText { .. } => Operation::FormatText,
        }
    }
}

struct OptionReader<'a> {
    operation: Operation,
    options: &'a Options,
}

impl<'a> OptionReader<'a> {
    fn reject_unknown(&self) -> Result<(), OperationError> {
        let accepted = self.operation.parameters();
        let unknown = self.options.keys().find(|key| {
            key.as_str() != TEXT_PARAMETER && !accepted.iter().any(|spec| spec.name == key.as_str())
        });

        match unknown {
            None => Ok(()),
            Some(key) => Err(OperationError::UnknownParameter {
                operation: self.operation.name().to_string(),
                parameter: key.clone(),
                accepted: if accepted.is_empty() {
                    "(none)".to_string()
                } else {
                    accepted.iter().map(|spec| spec.name).collect::<Vec<_>>().join(", ")
                },
            }),
        }
    }

    fn value(&self, name: &str) -> Option<&'a Value> {
        self.options.get(name).filter(|value| !value.is_null())
    }

    fn optional_str(&self, name: &str) -> Result<Option<&'a str>, OperationError> {
        match self.value(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(invalid(name, "string", other)),
        }
    }

    fn required_str(&self, name: &str) -> Result<&'a str, OperationError> {
        self.optional_str(name)?
            .ok_or_else(|| OperationError::MissingParameter {
                operation: self.operation.name().to_string(),
                parameter: name.to_string(),
            })
    }

    fn boolean(&self, name: &str, default: bool) -> Result<bool, OperationError> {
        match self.value(name) {
            None => Ok(default),
            Some(Value::Bool(value)) => Ok(*value),
            Some(other) => Err(invalid(name, "boolean", other)),
        }
    }

    fn positive_integer(&self, name: &str, default: usize) -> Result<usize, OperationError> {
        match self.value(name) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .filter(|number| *number >= 1)
                .and_then(|number| usize::try_from(number).ok())
                .ok_or_else(|| invalid(name, "positive integer", value)),
        }
    }
}

fn invalid(name: &str, expected: &'static str, found: &Value) -> OperationError {
    let found = match found {
        Value::Null => "null".to_string(),
        Value::Bool(value) => format!("boolean {}", value),
        Value::Number(value) => value.to_string(),
        Value::String(value) => format!("string {:?}", value),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    };

    OperationError::InvalidParameter {
        parameter: name.to_string(),
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            _ => panic!("options must be an object"),
        }
    }

    #[test]
    fn test_defaults_apply() {
        let request = OperationRequest::from_options(Operation::CleanText, &Options::new()).unwrap();
        assert_eq!(request, OperationRequest::CleanText(CleanOptions::default()));

        let request =
            OperationRequest::from_options(Operation::ExtractPatterns, &Options::new()).unwrap();
        assert_eq!(request, OperationRequest::ExtractPatterns(PatternSelection::All));

        let request = OperationRequest::from_options(
            Operation::FormatText,
            &options(json!({ "format_type": "wrap", "width": null })),
        )
        .unwrap();
        assert_eq!(
            request,
            OperationRequest::FormatText {
                format_type: FormatType::Wrap,
                width: 80
            }
        );
    }

    #[test]
    fn test_validation_failures() {
        struct TestCase {
            name: &'static str,
            operation: Operation,
            options: Value,
            expected_error: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "missing case type",
                operation: Operation::TransformCase,
                options: json!({}),
                expected_error: "Missing required parameter 'case_type' for 'transform_case'",
            },
            TestCase {
                name: "unknown parameter",
                operation: Operation::AnalyzeText,
                options: json!({ "verbose": true }),
                expected_error: "Unknown parameter 'verbose' for 'analyze_text'. Accepted: (none)",
            },
            TestCase {
                name: "zero width",
                operation: Operation::FormatText,
                options: json!({ "format_type": "wrap", "width": 0 }),
                expected_error: "Invalid value for parameter 'width': expected positive integer, got 0",
            },
            TestCase {
                name: "fractional width",
                operation: Operation::FormatText,
                options: json!({ "format_type": "center", "width": 2.5 }),
                expected_error: "Invalid value for parameter 'width': expected positive integer, got 2.5",
            },
            TestCase {
                name: "string flag",
                operation: Operation::CleanText,
                options: json!({ "remove_html": "yes" }),
                expected_error: "Invalid value for parameter 'remove_html': expected boolean, got string \"yes\"",
            },
            TestCase {
                name: "non-string encoding",
                operation: Operation::EncodeText,
                options: json!({ "encoding_type": 64 }),
                expected_error: "Invalid value for parameter 'encoding_type': expected string, got 64",
            },
            TestCase {
                name: "unknown format",
                operation: Operation::FormatText,
                options: json!({ "format_type": "shout" }),
                expected_error: "Unsupported format type: shout. Available: wrap, indent, center, justify, reverse, sort_lines",
            },
        ];

        for test_case in test_cases {
            let err = OperationRequest::from_options(test_case.operation, &options(test_case.options))
                .expect_err(test_case.name);
            assert_eq!(err.to_string(), test_case.expected_error, "{}", test_case.name);
            assert!(err.is_validation(), "{}", test_case.name);
        }
    }

    #[test]
    fn test_text_key_is_tolerated() {
        let request = OperationRequest::from_options(
            Operation::EncodeText,
            &options(json!({ "text": "ignored here", "encoding_type": " HEX " })),
        )
        .unwrap();
        assert_eq!(request, OperationRequest::EncodeText(EncodingType::Hex));
        assert_eq!(request.operation(), Operation::EncodeText);
    }

    #[test]
    fn test_allowed_values() {
        assert_eq!(
            ParameterKind::PatternType.allowed_values(),
            vec!["email", "url", "phone", "hashtag", "mention", "ip", "all"]
        );
        assert!(ParameterKind::Boolean.allowed_values().is_empty());
    }
}
