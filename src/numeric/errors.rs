// ============================================================================
// Decimal Errors
// Error types for decimal construction, parsing and encoding
// ============================================================================

use std::fmt;

/// Errors that can occur while building, parsing or encoding a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text does not match the decimal grammar
    InvalidFormat,
    /// Value is well formed but its mantissa or scale is out of range
    RangeOverflow,
    /// Operation was given a value or range it cannot accept (e.g. NaN)
    InvalidArgument,
    /// Destination buffer cannot hold the encoded value
    InsufficientCapacity {
        /// Bytes the encoded value needs
        required: usize,
        /// Bytes available from the requested offset
        available: usize,
    },
}

impl DecimalError {
    /// True for caller errors: bad arguments and capacity preconditions.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DecimalError::InvalidArgument | DecimalError::InsufficientCapacity { .. }
        )
    }
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidFormat => write!(f, "invalid format: not a decimal value"),
            DecimalError::RangeOverflow => {
                write!(f, "range overflow: value exceeds the supported digits or scale")
            },
            DecimalError::InvalidArgument => write!(f, "invalid argument: not a valid decimal"),
            DecimalError::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "insufficient capacity: need {} bytes, {} available",
                required, available
            ),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
