// ============================================================================
// Codec Module
// Boundary between message dictionaries and the decimal value core
// ============================================================================

pub mod config;
pub mod decoder;
pub mod errors;
pub mod writer;

pub use config::{DecimalFieldConfig, InvalidDecimalPolicy, PIPE, SOH};
pub use decoder::DecimalFieldDecoder;
pub use errors::{CodecError, CodecResult};
pub use writer::encode_decimal_field;
