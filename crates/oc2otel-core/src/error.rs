// Error types for payload parsing

use thiserror::Error;

/// Errors raised while decoding an OpenCensus payload.
///
/// Translation itself never fails; only turning bytes into batches does.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to decode OpenCensus protobuf message: {0}")]
    Protobuf(#[from] prost::DecodeError),

    #[error("failed to parse OpenCensus JSON message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse JSONL line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },

    #[error("JSONL input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("JSONL payload did not contain any metrics batches")]
    EmptyJsonl,

    #[error("invalid value '{value}' for field '{field}': {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn invalid_field(
        field: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        Self::JsonLine {
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
