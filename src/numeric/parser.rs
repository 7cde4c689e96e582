// ============================================================================
// ASCII Decimal Parser
// Strict, allocation-free text to mantissa/scale conversion
// ============================================================================
//
// Grammar: [+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?
// At least one digit must appear before the exponent marker.
//
// Trailing zero runs are counted instead of multiplied in, so a long run of
// zeros after the last significant digit never overflows the accumulator on
// its own. Range checks happen after the scale is known.

use super::decimal_float::{normalise, MAX_MANTISSA};
use super::errors::{DecimalError, DecimalResult};

/// Borrow `length` bytes at `offset`, rejecting ranges outside `bytes`.
#[inline]
pub(crate) fn field_slice(bytes: &[u8], offset: usize, length: usize) -> DecimalResult<&[u8]> {
    offset
        .checked_add(length)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(DecimalError::InvalidArgument)
}

#[inline]
fn split_sign(text: &[u8]) -> (bool, &[u8]) {
    match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    }
}

/// Mantissa digits seen so far.
#[derive(Default)]
struct Significand {
    /// Significant digits up to the last non-zero digit
    digits: u64,
    /// Zeros after the last non-zero digit, not yet folded into `digits`
    pending_zeros: u64,
    /// Digits after the decimal point, zeros included
    fraction_digits: u64,
    seen_digit: bool,
    overflowed: bool,
}

impl Significand {
    #[inline]
    fn push(&mut self, digit: u64, in_fraction: bool) {
        self.seen_digit = true;
        if in_fraction {
            self.fraction_digits += 1;
        }
        if self.overflowed {
            return;
        }

        if digit == 0 {
            // Leading zeros carry no magnitude
            if self.digits != 0 {
                self.pending_zeros += 1;
            }
            return;
        }

        let folded = u32::try_from(self.pending_zeros + 1)
            .ok()
            .and_then(|shift| 10_u64.checked_pow(shift))
            .and_then(|factor| self.digits.checked_mul(factor))
            .and_then(|shifted| shifted.checked_add(digit))
            .filter(|folded| *folded <= MAX_MANTISSA as u64);

        match folded {
            Some(folded) => {
                self.digits = folded;
                self.pending_zeros = 0;
            },
            None => self.overflowed = true,
        }
    }
}

/// Parse the digits after `e`/`E`.
fn parse_exponent(text: &[u8]) -> DecimalResult<i32> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(DecimalError::InvalidFormat);
    }

    let mut magnitude: i64 = 0;
    for &byte in digits {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i64::from(byte - b'0')))
            .ok_or(DecimalError::RangeOverflow)?;
    }

    let exponent = if negative { -magnitude } else { magnitude };
    i32::try_from(exponent).map_err(|_| DecimalError::RangeOverflow)
}

/// Parse ASCII decimal text into a canonical `(value, scale)` pair.
///
/// # Errors
/// - `InvalidFormat` if the text does not match the grammar
/// - `RangeOverflow` if the value needs more than 18 digits, or the
///   exponent or resulting scale does not fit in an `i32`
pub(crate) fn parse_decimal(text: &[u8]) -> DecimalResult<(i64, i32)> {
    let (negative, body) = split_sign(text);

    let mut significand = Significand::default();
    let mut in_fraction = false;
    let mut exponent_at = None;

    for (index, &byte) in body.iter().enumerate() {
        match byte {
            b'0'..=b'9' => significand.push(u64::from(byte - b'0'), in_fraction),
            b'.' if !in_fraction => in_fraction = true,
            b'e' | b'E' => {
                exponent_at = Some(index);
                break;
            },
            _ => return Err(DecimalError::InvalidFormat),
        }
    }

    if !significand.seen_digit {
        return Err(DecimalError::InvalidFormat);
    }

    let exponent = match exponent_at {
        Some(index) => parse_exponent(&body[index + 1..])?,
        None => 0,
    };

    if significand.overflowed {
        return Err(DecimalError::RangeOverflow);
    }
    if significand.digits == 0 {
        return Ok((0, 0));
    }

    // fraction_digits and pending_zeros are bounded by the input length
    let scale = significand.fraction_digits as i64
        - significand.pending_zeros as i64
        - i64::from(exponent);

    let mut digits = significand.digits;
    let scale = if scale < 0 {
        digits = u32::try_from(scale.unsigned_abs())
            .ok()
            .and_then(|shift| 10_u64.checked_pow(shift))
            .and_then(|factor| digits.checked_mul(factor))
            .filter(|scaled| *scaled <= MAX_MANTISSA as u64)
            .ok_or(DecimalError::RangeOverflow)?;
        0
    } else {
        i32::try_from(scale).map_err(|_| DecimalError::RangeOverflow)?
    };

    // digits <= MAX_MANTISSA, so the cast is lossless
    let value = if negative {
        -(digits as i64)
    } else {
        digits as i64
    };

    normalise(value, scale)
}
