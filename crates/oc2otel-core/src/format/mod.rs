// OpenCensus payload decoding
//
// Protobuf, canonical JSON and newline-delimited JSON all decode into the
// same prost message type.

pub mod field_names;
mod json_normalizer;

use oc2otel_proto::opencensus::proto::agent::metrics::v1::ExportMetricsServiceRequest;
use prost::Message;
use serde_json::Value as JsonValue;
use std::fmt;
use std::path::Path;
use std::str::{self, FromStr};

use crate::error::{ParseError, Result};
use json_normalizer::normalise_json_value;

/// Supported input formats for OpenCensus payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Binary protobuf (default, most efficient)
    Protobuf,
    /// Canonical protobuf JSON
    Json,
    /// Newline-delimited JSON, one batch per line
    Jsonl,
}

impl InputFormat {
    /// Detect format from a file extension. Unknown extensions yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pb" | "bin" | "protobuf" => Some(Self::Protobuf),
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::Jsonl),
            _ => None,
        }
    }

    /// Guess the format from the payload itself.
    ///
    /// A payload whose first non-whitespace byte is `{` is JSON, or JSONL when
    /// more than one non-empty line follows. Anything else is protobuf.
    pub fn sniff(bytes: &[u8]) -> Self {
        let Some(start) = bytes.iter().position(|b| !b.is_ascii_whitespace()) else {
            return Self::Protobuf;
        };
        if bytes[start] != b'{' {
            return Self::Protobuf;
        }

        let non_empty_lines = bytes[start..]
            .split(|b| *b == b'\n')
            .filter(|line| line.iter().any(|b| !b.is_ascii_whitespace()))
            .take(2)
            .count();
        if non_empty_lines > 1 && bytes[start..].split(|b| *b == b'\n').all(line_is_object) {
            Self::Jsonl
        } else {
            Self::Json
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protobuf => "protobuf",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

fn line_is_object(line: &[u8]) -> bool {
    let trimmed = line.trim_ascii();
    trimmed.is_empty() || (trimmed.starts_with(b"{") && trimmed.ends_with(b"}"))
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protobuf" | "proto" | "pb" => Ok(Self::Protobuf),
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::Jsonl),
            other => Err(format!(
                "unknown input format '{other}' (expected protobuf, json or jsonl)"
            )),
        }
    }
}

/// Parse OpenCensus batches from bytes in the specified format.
///
/// Protobuf and JSON payloads hold exactly one batch. JSONL yields one batch
/// per non-empty line, in order.
pub fn parse_oc_request(
    bytes: &[u8],
    format: InputFormat,
) -> Result<Vec<ExportMetricsServiceRequest>> {
    match format {
        InputFormat::Protobuf => parse_protobuf(bytes).map(|request| vec![request]),
        InputFormat::Json => parse_json(bytes).map(|request| vec![request]),
        InputFormat::Jsonl => parse_jsonl(bytes),
    }
}

fn parse_protobuf(bytes: &[u8]) -> Result<ExportMetricsServiceRequest> {
    Ok(ExportMetricsServiceRequest::decode(bytes)?)
}

fn parse_json(bytes: &[u8]) -> Result<ExportMetricsServiceRequest> {
    let value: JsonValue = serde_json::from_slice(bytes)?;
    canonical_json_to_request(value)
}

fn parse_jsonl(bytes: &[u8]) -> Result<Vec<ExportMetricsServiceRequest>> {
    let text = str::from_utf8(bytes)?;

    let mut requests = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let request = serde_json::from_str::<JsonValue>(trimmed)
            .map_err(ParseError::from)
            .and_then(canonical_json_to_request)
            .map_err(|e| e.at_line(line_num + 1))?;
        requests.push(request);
    }

    if requests.is_empty() {
        return Err(ParseError::EmptyJsonl);
    }

    Ok(requests)
}

fn canonical_json_to_request(mut value: JsonValue) -> Result<ExportMetricsServiceRequest> {
    normalise_json_value(&mut value, None)?;
    Ok(serde_json::from_value(value)?)
}
