// ============================================================================
// Decimal Field Writer
// Appends tag=value<delimiter> fields to an outgoing message buffer
// ============================================================================

use crate::numeric::{
    ascii_digits, encode, encoded_len, DecimalError, DecimalResult, ReadOnlyDecimalFloat,
};

/// Write `tag=value<delimiter>` into `buffer` at `offset`.
///
/// Returns the number of bytes written. Nothing is written on error.
///
/// # Errors
/// - `InvalidArgument` if `value` is the NaN sentinel
/// - `InsufficientCapacity` if the field does not fit after `offset`
pub fn encode_decimal_field(
    buffer: &mut [u8],
    offset: usize,
    tag: u32,
    value: &ReadOnlyDecimalFloat,
    delimiter: u8,
) -> DecimalResult<usize> {
    let tag_digits = ascii_digits(u64::from(tag));
    let value_len = encoded_len(value)?;

    // tag + '=' + value + delimiter
    let required = tag_digits.len() + value_len + 2;
    let available = buffer.len().saturating_sub(offset);
    if required > available {
        return Err(DecimalError::InsufficientCapacity {
            required,
            available,
        });
    }

    let mut pos = offset;
    buffer[pos..pos + tag_digits.len()].copy_from_slice(&tag_digits);
    pos += tag_digits.len();

    buffer[pos] = b'=';
    pos += 1;

    pos += encode(value, buffer, pos)?;

    buffer[pos] = delimiter;

    Ok(required)
}
