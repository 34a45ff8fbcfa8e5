use thiserror::Error;

/// Errors that can occur when parsing filter expressions
#[derive(Debug, Error)]
pub enum FilterParseError {
    #[error("Unknown filter field: '{0}'. Valid fields are: status (s), host (h), method (m), path (p)")]
    UnknownFilterField(String),

    #[error("Empty filter value for field '{0}'")]
    EmptyValue(String),

    #[error("Invalid status value: '{0}'. Expected a code (404), a bucket (2XX), or a range (200..300, 200...299)")]
    InvalidStatusValue(String),

    #[error("Unknown HTTP method: '{0}'")]
    UnknownMethod(String),

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),
}

/// Error at the stored-filter persistence boundary
///
/// Decode failures are reported so the caller can drop or migrate the
/// stored configuration; encode shares the same error type. A successfully
/// decoded filter never fails at match time.
#[derive(Debug, Error)]
#[error("Failed to decode stored filter: {0}")]
pub struct FilterDecodeError(#[from] pub serde_json::Error);
