// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use super::operation::Operation;
use super::params::{OperationRequest, Options, TEXT_PARAMETER};
use crate::envelope::{OperationOutput, ResultEnvelope};
use crate::errors::OperationError;
use crate::observability::messages::{dispatch::*, StructuredLog};
use crate::processors::{analyze, clean, convert, encode, extract, format};

/// Routes named invocations to the text components.
///
/// The dispatcher holds no state, so one instance can be shared freely
/// (for example behind an `Arc`) and called from many tasks at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationDispatcher;

impl OperationDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Invoke `operation_name` on `text` with `options`.
    ///
    /// Always returns an envelope; validation and execution failures are
    /// reported through [`ResultEnvelope::failure`].
    pub fn invoke(&self, operation_name: &str, text: &str, options: &Options) -> ResultEnvelope {
        let started = InvocationStarted {
            operation: operation_name,
            input_size: text.len(),
        };
        let span = started.span("invocation");
        let _guard = span.enter();
        started.log();

        let start_time = Instant::now();

        let request = match Operation::parse(operation_name)
            .and_then(|operation| OperationRequest::from_options(operation, options))
        {
            Ok(request) => request,
            Err(error) => {
                InvocationRejected {
                    operation: operation_name,
                    error: &error,
                }
                .log();
                return ResultEnvelope::failure(error);
            }
        };

        match execute_guarded(text, request) {
            Ok(output) => {
                InvocationCompleted {
                    operation: request.operation().name(),
                    input_size: text.len(),
                    duration: start_time.elapsed(),
                }
                .log();
                ResultEnvelope::success(output)
            }
            Err(error) => {
                InvocationFailed {
                    operation: request.operation().name(),
                    error: &error,
                }
                .log();
                ResultEnvelope::failure(error)
            }
        }
    }

    /// Invoke with a possibly absent `text`, as handed over by a binding layer.
    ///
    /// `None` is reported as a missing `text` parameter for the operation.
    pub fn invoke_optional(
        &self,
        operation_name: &str,
        text: Option<&str>,
        options: &Options,
    ) -> ResultEnvelope {
        match text {
            Some(text) => self.invoke(operation_name, text, options),
            None => {
                let operation = Operation::parse(operation_name)
                    .map(|operation| operation.name().to_string())
                    .unwrap_or_else(|_| operation_name.to_string());
                ResultEnvelope::failure(OperationError::MissingParameter {
                    operation,
                    parameter: TEXT_PARAMETER.to_string(),
                })
            }
        }
    }

    /// Invoke with every argument, including `text`, in one map.
    ///
    /// This is the shape a registration layer forwards verbatim from its caller.
    pub fn invoke_arguments(&self, operation_name: &str, arguments: &Options) -> ResultEnvelope {
        match arguments.get(TEXT_PARAMETER) {
            Some(serde_json::Value::String(text)) => self.invoke(operation_name, text, arguments),
            Some(other) if !other.is_null() => ResultEnvelope::failure(OperationError::InvalidParameter {
                parameter: TEXT_PARAMETER.to_string(),
                expected: "string",
                found: other.to_string(),
            }),
            _ => self.invoke_optional(operation_name, None, arguments),
        }
    }
}

/// Run a validated request, turning a component panic into an execution error.
fn execute_guarded(text: &str, request: OperationRequest) -> Result<OperationOutput, OperationError> {
    panic::catch_unwind(AssertUnwindSafe(|| execute(text, request))).unwrap_or_else(|payload| {
        Err(OperationError::Execution {
            context: request.operation().failure_context(),
            message: panic_message(payload.as_ref()),
        })
    })
}

fn execute(text: &str, request: OperationRequest) -> Result<OperationOutput, OperationError> {
    let output = match request {
        OperationRequest::TransformCase(case_type) => OperationOutput::Case {
            original: text.to_string(),
            transformed: convert(text, case_type),
            case_type,
        },
        OperationRequest::AnalyzeText => OperationOutput::Analysis {
            analysis: analyze(text),
        },
        OperationRequest::CleanText(options) => OperationOutput::Cleaned {
            original: text.to_string(),
            cleaned: clean(text, options),
            operations: options,
        },
        OperationRequest::ExtractPatterns(selection) => OperationOutput::Patterns {
            pattern_type: selection,
            extraction: extract(text, selection),
        },
        OperationRequest::EncodeText(encoding_type) => OperationOutput::Encoded {
            original: text.to_string(),
            encoded: encode(text, encoding_type),
            encoding_type,
        },
        OperationRequest::FormatText { format_type, width } => OperationOutput::Formatted {
            original: text.to_string(),
            formatted: format(text, format_type, width)?,
            format_type,
            width,
        },
    };

    Ok(output)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected internal error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_extraction() {
        let payload = panic::catch_unwind(|| panic!("boom {}", 42)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom 42");

        let payload = panic::catch_unwind(|| std::panic::panic_any(7_u8)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "unexpected internal error");
    }

    #[test]
    fn test_invoke_arguments_requires_text() {
        let dispatcher = OperationDispatcher::new();
        let envelope = dispatcher.invoke_arguments("text_analyze_text", &Options::new());
        assert!(!envelope.is_success());
        assert_eq!(
            envelope.error(),
            Some("Missing required parameter 'text' for 'analyze_text'")
        );

        let mut arguments = Options::new();
        arguments.insert("text".into(), serde_json::json!(12));
        let envelope = dispatcher.invoke_arguments("analyze_text", &arguments);
        assert_eq!(
            envelope.error(),
            Some("Invalid value for parameter 'text': expected string, got 12")
        );
    }

    #[test]
    fn test_invoke_optional_text() {
        let dispatcher = OperationDispatcher::new();
        let envelope = dispatcher.invoke_optional("format_text", None, &Options::new());
        assert_eq!(
            envelope.error(),
            Some("Missing required parameter 'text' for 'format_text'")
        );

        let envelope = dispatcher.invoke_optional("analyze_text", Some("a b"), &Options::new());
        assert!(envelope.is_success());
    }
}
