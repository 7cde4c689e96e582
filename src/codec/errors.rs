// ============================================================================
// Codec Errors
// Failures while walking tag=value fields
// ============================================================================

use crate::numeric::DecimalError;
use std::fmt;

/// Errors raised by the decimal field decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Configuration rejected by `DecimalFieldConfig::validate`
    InvalidConfig(String),
    /// Field starting at `offset` is not `tag=value<delimiter>`
    MalformedField { offset: usize },
    /// Decimal field `tag` failed to parse
    Decimal { tag: u32, source: DecimalError },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidConfig(reason) => write!(f, "invalid field config: {}", reason),
            CodecError::MalformedField { offset } => {
                write!(f, "malformed field at offset {}", offset)
            },
            CodecError::Decimal { tag, source } => write!(f, "tag {}: {}", tag, source),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Decimal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
