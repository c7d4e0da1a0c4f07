// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Prompt templates for language-model workflows built on top of the text
//! operations.
//!
//! Templates are fixed strings with `{name}` placeholders. `{text}` is always
//! supplied by the caller's input; any other placeholder must be given as a
//! named argument to [`PromptTemplate::render`].

use serde::Serialize;
use std::collections::HashMap;

use crate::dispatch::params::TEXT_PARAMETER;
use crate::errors::OperationError;
use crate::processors::TextChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    Summarize,
    ImproveWriting,
    ExtractKeywords,
    SentimentAnalysis,
    GrammarCheck,
    Explanation,
    GenerateOutline,
    ExtractKeyPoints,
    Translate,
    GenerateQuestions,
    Paraphrase,
}

impl TextChoice for PromptTemplate {
    const KIND: &'static str = "prompt";
    const ALL: &'static [PromptTemplate] = &[
        PromptTemplate::Summarize,
        PromptTemplate::ImproveWriting,
        PromptTemplate::ExtractKeywords,
        PromptTemplate::SentimentAnalysis,
        PromptTemplate::GrammarCheck,
        PromptTemplate::Explanation,
        PromptTemplate::GenerateOutline,
        PromptTemplate::ExtractKeyPoints,
        PromptTemplate::Translate,
        PromptTemplate::GenerateQuestions,
        PromptTemplate::Paraphrase,
    ];

    fn as_str(&self) -> &'static str {
        self.name()
    }
}

impl PromptTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            PromptTemplate::Summarize => "summarize",
            PromptTemplate::ImproveWriting => "improve_writing",
            PromptTemplate::ExtractKeywords => "extract_keywords",
            PromptTemplate::SentimentAnalysis => "sentiment_analysis",
            PromptTemplate::GrammarCheck => "grammar_check",
            PromptTemplate::Explanation => "explanation",
            PromptTemplate::GenerateOutline => "generate_outline",
            PromptTemplate::ExtractKeyPoints => "extract_key_points",
            PromptTemplate::Translate => "translate",
            PromptTemplate::GenerateQuestions => "generate_questions",
            PromptTemplate::Paraphrase => "paraphrase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptTemplate::Summarize => "Generate a summary of the given text",
            PromptTemplate::ImproveWriting => "Improve the writing quality of text",
            PromptTemplate::ExtractKeywords => "Extract key topics and keywords from text",
            PromptTemplate::SentimentAnalysis => "Analyze the sentiment of text",
            PromptTemplate::GrammarCheck => "Check and correct grammar in text",
            PromptTemplate::Explanation => "Explain complex text in simple terms",
            PromptTemplate::GenerateOutline => "Generate an outline from text content",
            PromptTemplate::ExtractKeyPoints => "Extract the key points from text",
            PromptTemplate::Translate => "Translate text from one language to another",
            PromptTemplate::GenerateQuestions => "Generate discussion questions about text",
            PromptTemplate::Paraphrase => "Paraphrase text while keeping its meaning",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            PromptTemplate::Summarize => {
                "Please provide a concise summary of the following text:\n\n{text}\n\nSummary:"
            }
            PromptTemplate::ImproveWriting => {
                "Please improve the following text for clarity, grammar, and style:\n\n{text}\n\nImproved version:"
            }
            PromptTemplate::ExtractKeywords => {
                "Extract the main keywords and topics from the following text:\n\n{text}\n\nKeywords:"
            }
            PromptTemplate::SentimentAnalysis => {
                "Analyze the sentiment (positive, negative, neutral) of the following text and provide reasoning:\n\n{text}\n\nSentiment Analysis:"
            }
            PromptTemplate::GrammarCheck => {
                "Check the following text for grammar errors and provide corrections:\n\n{text}\n\nGrammar Check:"
            }
            PromptTemplate::Explanation => {
                "Explain the following text in simple, easy-to-understand language:\n\n{text}\n\nSimple Explanation:"
            }
            PromptTemplate::GenerateOutline => {
                "Create a structured outline from the following text:\n\n{text}\n\nOutline:"
            }
            PromptTemplate::ExtractKeyPoints => {
                "Please extract the key points from the following text:\n\n{text}\n\nKey points:"
            }
            PromptTemplate::Translate => {
                "Please translate the following text from {source_language} to {target_language}:\n\n{text}\n\nTranslation:"
            }
            PromptTemplate::GenerateQuestions => {
                "Based on the following text, generate 3-5 thought-provoking questions:\n\n{text}\n\nQuestions:"
            }
            PromptTemplate::Paraphrase => {
                "Please paraphrase the following text while maintaining its original meaning:\n\n{text}\n\nParaphrased version:"
            }
        }
    }

    /// Named arguments the template needs besides `text`.
    pub fn arguments(&self) -> &'static [&'static str] {
        match self {
            PromptTemplate::Translate => &["source_language", "target_language"],
            _ => &[],
        }
    }

    /// Fill every placeholder in one left-to-right pass.
    ///
    /// Substituted values are never rescanned, so braces inside `text` or an
    /// argument come through verbatim. A `{` with no closing `}` is literal.
    pub fn render(&self, text: &str, args: &HashMap<String, String>) -> Result<String, OperationError> {
        let template = self.template();
        let mut rendered = String::with_capacity(template.len() + text.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            rendered.push_str(&rest[..open]);

            let name = &rest[open + 1..open + close];
            if name == TEXT_PARAMETER {
                rendered.push_str(text);
            } else {
                let value = args.get(name).ok_or_else(|| OperationError::MissingParameter {
                    operation: self.name().to_string(),
                    parameter: name.to_string(),
                })?;
                rendered.push_str(value);
            }

            rest = &rest[open + close + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}
