// ============================================================================
// ASCII Decimal Encoder
// Canonical decimal text written straight into caller-owned buffers
// ============================================================================

use super::decimal_float::ReadOnlyDecimalFloat;
use super::errors::{DecimalError, DecimalResult};
use arrayvec::ArrayVec;

/// Room for every digit of a u64.
const DIGIT_CAPACITY: usize = 20;

/// ASCII digits of `magnitude`, most significant first.
pub(crate) fn ascii_digits(mut magnitude: u64) -> ArrayVec<u8, DIGIT_CAPACITY> {
    let mut digits = ArrayVec::new();
    loop {
        digits.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Exact number of bytes `encode` writes for `value`.
///
/// # Errors
/// - `InvalidArgument` for the NaN sentinel
/// - `RangeOverflow` if the length does not fit in `usize`
pub fn encoded_len(value: &ReadOnlyDecimalFloat) -> DecimalResult<usize> {
    if value.is_nan() {
        return Err(DecimalError::InvalidArgument);
    }

    let digits = super::decimal_float::digit_count(value.unsigned_value()) as usize;
    let scale = usize::try_from(value.scale()).map_err(|_| DecimalError::InvalidArgument)?;
    let sign = usize::from(value.is_negative());

    let body = if scale == 0 {
        Some(digits)
    } else if scale >= digits {
        // "0." + zero padding + digits
        scale.checked_add(2)
    } else {
        Some(digits + 1)
    };

    body.and_then(|body| body.checked_add(sign))
        .ok_or(DecimalError::RangeOverflow)
}

/// Write the canonical text of `value` into `buffer` starting at `offset`.
///
/// Output is `-` for negatives, the integer digits, then `.` and the
/// fractional digits when the scale is positive. Exponent form is never
/// produced. Returns the number of bytes written.
///
/// # Errors
/// - `InvalidArgument` for the NaN sentinel
/// - `InsufficientCapacity` if the value does not fit after `offset`;
///   nothing is written in that case
pub fn encode(value: &ReadOnlyDecimalFloat, buffer: &mut [u8], offset: usize) -> DecimalResult<usize> {
    let required = encoded_len(value)?;
    let available = buffer.len().saturating_sub(offset);
    if required > available {
        return Err(DecimalError::InsufficientCapacity {
            required,
            available,
        });
    }

    let digits = ascii_digits(value.unsigned_value());
    let scale = value.scale() as usize;
    let out = &mut buffer[offset..offset + required];

    let mut pos = 0;
    if value.is_negative() {
        out[pos] = b'-';
        pos += 1;
    }

    if scale == 0 {
        out[pos..].copy_from_slice(&digits);
    } else if scale >= digits.len() {
        out[pos] = b'0';
        out[pos + 1] = b'.';
        pos += 2;

        let padding = scale - digits.len();
        out[pos..pos + padding].fill(b'0');
        pos += padding;

        out[pos..].copy_from_slice(&digits);
    } else {
        let integer_len = digits.len() - scale;
        out[pos..pos + integer_len].copy_from_slice(&digits[..integer_len]);
        pos += integer_len;

        out[pos] = b'.';
        pos += 1;

        out[pos..].copy_from_slice(&digits[integer_len..]);
    }

    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    type RO = ReadOnlyDecimalFloat;

    fn encode_to_string(value: RO) -> String {
        let mut buffer = [0u8; 64];
        let written = encode(&value, &mut buffer, 0).unwrap();
        String::from_utf8(buffer[..written].to_vec()).unwrap()
    }

    #[test]
    fn test_ascii_digits() {
        assert_eq!(&ascii_digits(0)[..], b"0");
        assert_eq!(&ascii_digits(907)[..], b"907");
        assert_eq!(&ascii_digits(u64::MAX)[..], b"18446744073709551615");
    }

    #[test]
    fn test_encode_integers() {
        assert_eq!(encode_to_string(RO::ZERO), "0");
        assert_eq!(encode_to_string(RO::new(5, 0).unwrap()), "5");
        assert_eq!(encode_to_string(RO::new(-5000, 0).unwrap()), "-5000");
        assert_eq!(encode_to_string(RO::MAX_VALUE), "999999999999999999");
        assert_eq!(encode_to_string(RO::MIN_VALUE), "-999999999999999999");
    }

    #[test]
    fn test_encode_fractions() {
        assert_eq!(encode_to_string(RO::new(12345, 2).unwrap()), "123.45");
        assert_eq!(encode_to_string(RO::new(-55, 1).unwrap()), "-5.5");
        assert_eq!(encode_to_string(RO::new(5, 1).unwrap()), "0.5");
        assert_eq!(encode_to_string(RO::new(45, 2).unwrap()), "0.45");
        assert_eq!(encode_to_string(RO::new(-5, 4).unwrap()), "-0.0005");
    }

    #[test]
    fn test_encode_matches_display() {
        for (value, scale) in [(0, 0), (1, 1), (-123, 5), (987654321, 3), (7, 30)] {
            let decimal = RO::new(value, scale).unwrap();
            assert_eq!(encode_to_string(decimal), decimal.to_string());
            assert_eq!(
                encoded_len(&decimal).unwrap(),
                decimal.to_string().len()
            );
        }
    }

    #[test]
    fn test_encode_at_offset() {
        let mut buffer = *b"44=??????|";
        let written = encode(&RO::new(-15, 1).unwrap(), &mut buffer, 3).unwrap();
        assert_eq!(written, 4);
        assert_eq!(&buffer, b"44=-1.5??|");
    }

    #[test]
    fn test_encode_nan_is_invalid_argument() {
        let mut buffer = [0u8; 1000];
        assert_eq!(
            encode(&RO::NAN, &mut buffer, 0),
            Err(DecimalError::InvalidArgument)
        );
        assert_eq!(encoded_len(&RO::MISSING), Err(DecimalError::InvalidArgument));
    }

    #[test]
    fn test_encode_insufficient_capacity() {
        let mut buffer = [b'x'; 6];
        let value = RO::new(-12345, 2).unwrap();

        assert_eq!(
            encode(&value, &mut buffer, 1),
            Err(DecimalError::InsufficientCapacity {
                required: 7,
                available: 5
            })
        );
        assert_eq!(&buffer, b"xxxxxx");

        assert_eq!(
            encode(&value, &mut buffer, 10),
            Err(DecimalError::InsufficientCapacity {
                required: 7,
                available: 0
            })
        );
    }
}
