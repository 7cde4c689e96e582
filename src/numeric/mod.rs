// ============================================================================
// Numeric Module
// Exact decimal values for FIX price and quantity fields
// ============================================================================
//
// This module provides:
// - ReadOnlyDecimalFloat: canonical mantissa/scale value and shared constants
// - DecimalFloat: mutable working copy for decode loops
// - parse/encode: strict ASCII codec over borrowed buffers
// - DecimalError: error taxonomy for the above
//
// Design principles:
// - No floating-point operations
// - Every producer normalises; consumers never see a raw pair
// - Checked arithmetic, no panics on hostile input
// - No heap allocation while parsing or encoding

mod decimal_float;
mod encoder;
mod errors;
mod parser;

#[cfg(test)]
mod properties;

pub use decimal_float::{DecimalFloat, ReadOnlyDecimalFloat, MAX_DIGITS, MAX_MANTISSA};
pub use encoder::{encode, encoded_len};
pub use errors::{DecimalError, DecimalResult};

pub(crate) use encoder::ascii_digits;
