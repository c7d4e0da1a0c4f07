// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::dispatch::{Operation, ParameterSpec};
use crate::dispatch::params::{ParameterDefault, TEXT_PARAMETER};

/// Published description of one operation, as a registration layer would
/// advertise it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSpec {
    pub name: &'static str,
    pub tool_name: String,
    pub description: &'static str,
    pub parameters: Vec<ParameterDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub json_type: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParameterDefault>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<&'static str>,
}

impl From<&ParameterSpec> for ParameterDescriptor {
    fn from(spec: &ParameterSpec) -> Self {
        Self {
            name: spec.name,
            json_type: spec.kind.json_type(),
            required: spec.is_required(),
            default: spec.default,
            allowed_values: spec.kind.allowed_values(),
        }
    }
}

/// Every operation in dispatch order, with tool names built from `tool_prefix`.
///
/// The shared `text` input is listed first in each parameter list.
pub fn operation_specs(tool_prefix: &str) -> Vec<OperationSpec> {
    Operation::ALL
        .iter()
        .map(|operation| {
            let text = ParameterDescriptor {
                name: TEXT_PARAMETER,
                json_type: "string",
                required: true,
                default: None,
                allowed_values: Vec::new(),
            };

            let parameters = std::iter::once(text)
                .chain(operation.parameters().iter().map(ParameterDescriptor::from))
                .collect();

            OperationSpec {
                name: operation.name(),
                tool_name: format!("{}{}", tool_prefix, operation.name()),
                description: operation.description(),
                parameters,
            }
        })
        .collect()
}
