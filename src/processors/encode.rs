// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::Md5;
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::TextChoice;

/// Encodings and digests applied to the UTF-8 bytes of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingType {
    Base64,
    Url,
    Html,
    Hex,
    Md5,
    Sha256,
}

impl EncodingType {
    /// Whether a matching decode exists. Digests are one-way.
    pub fn is_reversible(&self) -> bool {
        !matches!(self, EncodingType::Md5 | EncodingType::Sha256)
    }
}

impl TextChoice for EncodingType {
    const KIND: &'static str = "encoding type";
    const ALL: &'static [EncodingType] = &[
        EncodingType::Base64,
        EncodingType::Url,
        EncodingType::Html,
        EncodingType::Hex,
        EncodingType::Md5,
        EncodingType::Sha256,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            EncodingType::Base64 => "base64",
            EncodingType::Url => "url",
            EncodingType::Html => "html",
            EncodingType::Hex => "hex",
            EncodingType::Md5 => "md5",
            EncodingType::Sha256 => "sha256",
        }
    }
}

pub fn encode(text: &str, encoding_type: EncodingType) -> String {
    let bytes = text.as_bytes();
    match encoding_type {
        EncodingType::Base64 => STANDARD.encode(bytes),
        EncodingType::Url => percent_encode(bytes),
        EncodingType::Html => escape_html(text),
        EncodingType::Hex => hex::encode(bytes),
        EncodingType::Md5 => hex::encode(Md5::digest(bytes)),
        EncodingType::Sha256 => hex::encode(Sha256::digest(bytes)),
    }
}

/// Percent-encode everything except unreserved characters and `/`.
fn percent_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' | b'/' => {
                encoded.push(byte as char)
            }
            _ => {
                encoded.push('%');
                encoded.push(HEX[(byte >> 4) as usize] as char);
                encoded.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    encoded
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
