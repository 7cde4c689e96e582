// ============================================================================
// FIX Decimal Library
// Exact decimal values and their ASCII wire codec for FIX messaging
// ============================================================================

//! # FIX Decimal
//!
//! The exact-decimal value core of a FIX protocol engine.
//!
//! Prices and quantities travel on the wire as ASCII text. This crate keeps
//! them as a canonical `mantissa × 10^-scale` pair so that `"5"` and
//! `"5.00"` compare, hash and re-encode identically, with no binary
//! floating point anywhere.
//!
//! ## Features
//!
//! - **Canonical form**: every value is normalised on construction
//! - **Total ordering** across scales using checked integer arithmetic
//! - **Strict parsing** with separate format and range errors
//! - **Allocation-free** parse and encode over caller-owned buffers
//! - **Read-only constants** with explicit mutable working copies
//!
//! ## Example
//!
//! ```rust
//! use fix_decimal::prelude::*;
//!
//! // Parse a field in place from a larger buffer
//! let message = b"44=101.2500|38=200|";
//! let price = ReadOnlyDecimalFloat::parse_ascii_range(message, 3, 8).unwrap();
//! assert_eq!(price, ReadOnlyDecimalFloat::new(10125, 2).unwrap());
//!
//! // Ordering ignores how the value was written
//! let higher: ReadOnlyDecimalFloat = "101.3".parse().unwrap();
//! assert!(price < higher);
//!
//! // Encode the canonical text back into an outgoing buffer
//! let mut out = [0u8; 32];
//! let written = price.encode(&mut out, 0).unwrap();
//! assert_eq!(&out[..written], b"101.25");
//!
//! // Constants are read-only; mutate a copy instead
//! let mut working = ReadOnlyDecimalFloat::ZERO.mutable_copy();
//! working.set(&price).negate();
//! assert_eq!(working.to_string(), "-101.25");
//! assert!(ReadOnlyDecimalFloat::ZERO.is_zero());
//! ```

pub mod codec;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        encode_decimal_field, CodecError, DecimalFieldConfig, DecimalFieldDecoder,
        InvalidDecimalPolicy,
    };
    pub use crate::interfaces::{
        CollectingFieldHandler, DecimalFieldHandler, LoggingFieldHandler, NoOpFieldHandler,
    };
    pub use crate::numeric::{DecimalError, DecimalFloat, DecimalResult, ReadOnlyDecimalFloat};
}
