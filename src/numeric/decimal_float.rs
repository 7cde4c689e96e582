// ============================================================================
// Decimal Float
// Exact mantissa/scale decimal with canonical form and total ordering
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Neg};
use std::str::FromStr;

/// Largest mantissa magnitude a decimal may hold (18 significant digits).
pub const MAX_MANTISSA: i64 = 999_999_999_999_999_999;

/// Number of significant digits a mantissa may carry.
pub const MAX_DIGITS: u32 = 18;

const NAN_VALUE: i64 = i64::MIN;
const NAN_SCALE: i32 = i32::MIN;

/// Immutable decimal value: `value × 10^-scale`.
///
/// Every instance is canonical:
/// - zero is always `(0, 0)`
/// - the scale is never negative
/// - a positive scale never leaves a trailing zero in the mantissa
/// - the mantissa magnitude never exceeds [`MAX_MANTISSA`]
///
/// Equality therefore compares the pair directly: `(5000, 0)`, `(500000, 2)`
/// and `(50, -2)` all build the same value.
///
/// This type has no mutating methods. The shared constants ([`Self::ZERO`],
/// [`Self::NAN`], ...) live here; a working copy that can be changed in place
/// comes from [`Self::mutable_copy`].
///
/// # Example
/// ```
/// use fix_decimal::numeric::ReadOnlyDecimalFloat;
///
/// let price: ReadOnlyDecimalFloat = "101.250".parse().unwrap();
/// assert_eq!(price.value(), 10125);
/// assert_eq!(price.scale(), 2);
/// assert_eq!(price.to_string(), "101.25");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadOnlyDecimalFloat {
    value: i64,
    scale: i32,
}

// ============================================================================
// Normalisation
// ============================================================================

/// Reduce a raw pair to canonical form.
///
/// Negative scales are folded into the mantissa, redundant trailing zeros
/// are absorbed into the scale.
///
/// # Errors
/// Returns `RangeOverflow` if the canonical mantissa needs more than
/// [`MAX_DIGITS`] digits.
pub(crate) fn normalise(mut value: i64, mut scale: i32) -> DecimalResult<(i64, i32)> {
    if value == 0 {
        return Ok((0, 0));
    }

    if scale < 0 {
        value = 10_i64
            .checked_pow(scale.unsigned_abs())
            .and_then(|factor| value.checked_mul(factor))
            .ok_or(DecimalError::RangeOverflow)?;
        scale = 0;
    }

    while scale > 0 && value % 10 == 0 {
        value /= 10;
        scale -= 1;
    }

    if value.unsigned_abs() > MAX_MANTISSA as u64 {
        return Err(DecimalError::RangeOverflow);
    }

    Ok((value, scale))
}

/// Number of decimal digits in `magnitude` (zero has one digit).
#[inline]
pub(crate) const fn digit_count(magnitude: u64) -> u32 {
    match magnitude.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// `magnitude × 10^shift` widened to u128, `None` if it does not fit.
#[inline]
fn scale_up(magnitude: u64, shift: u32) -> Option<u128> {
    10_u128
        .checked_pow(shift)
        .and_then(|factor| factor.checked_mul(u128::from(magnitude)))
}

impl ReadOnlyDecimalFloat {
    /// Canonical zero
    pub const ZERO: Self = Self::canonical(0, 0);

    /// Largest representable value (18 nines)
    pub const MAX_VALUE: Self = Self::canonical(MAX_MANTISSA, 0);

    /// Smallest representable value (-18 nines)
    pub const MIN_VALUE: Self = Self::canonical(-MAX_MANTISSA, 0);

    /// Sentinel "not a number". Sorts below every number, cannot be encoded.
    pub const NAN: Self = Self::canonical(NAN_VALUE, NAN_SCALE);

    /// Marker for an absent optional field; same sentinel as [`Self::NAN`].
    pub const MISSING: Self = Self::NAN;

    /// Build from parts that are already canonical.
    #[inline]
    const fn canonical(value: i64, scale: i32) -> Self {
        Self { value, scale }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a mantissa and scale, normalising immediately.
    ///
    /// # Errors
    /// Returns `RangeOverflow` if the value needs more than 18 digits.
    #[inline]
    pub fn new(value: i64, scale: i32) -> DecimalResult<Self> {
        let (value, scale) = normalise(value, scale)?;
        Ok(Self::canonical(value, scale))
    }

    /// Create from a whole number.
    #[inline]
    pub fn from_long(value: i64) -> DecimalResult<Self> {
        Self::new(value, 0)
    }

    /// Parse a complete ASCII field.
    #[inline]
    pub fn parse_ascii(text: &[u8]) -> DecimalResult<Self> {
        let (value, scale) = super::parser::parse_decimal(text)?;
        Ok(Self::canonical(value, scale))
    }

    /// Parse `length` bytes starting at `offset` inside a larger buffer.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the range falls outside `bytes`,
    /// otherwise the errors of [`Self::parse_ascii`].
    #[inline]
    pub fn parse_ascii_range(bytes: &[u8], offset: usize, length: usize) -> DecimalResult<Self> {
        Self::parse_ascii(super::parser::field_slice(bytes, offset, length)?)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The signed mantissa.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Digits after the decimal point.
    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Magnitude of the mantissa.
    #[inline]
    pub const fn unsigned_value(&self) -> u64 {
        self.value.unsigned_abs()
    }

    /// `-1`, `0` or `1`. NaN reports `0`.
    #[inline]
    pub const fn signum(&self) -> i64 {
        if self.is_nan() {
            0
        } else {
            self.value.signum()
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.value < 0 && !self.is_nan()
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.value > 0
    }

    /// True for the [`Self::NAN`] / [`Self::MISSING`] sentinel.
    #[inline]
    pub const fn is_nan(&self) -> bool {
        self.value == NAN_VALUE && self.scale == NAN_SCALE
    }

    // ========================================================================
    // Copies
    // ========================================================================

    /// An independent working copy that can be changed in place.
    #[inline]
    pub const fn mutable_copy(&self) -> DecimalFloat {
        DecimalFloat(*self)
    }

    /// The same magnitude with the opposite sign. Zero and NaN are unchanged.
    #[inline]
    pub const fn negated(&self) -> Self {
        if self.is_nan() {
            *self
        } else {
            Self::canonical(-self.value, self.scale)
        }
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Write the canonical text into `buffer` at `offset`.
    #[inline]
    pub fn encode(&self, buffer: &mut [u8], offset: usize) -> DecimalResult<usize> {
        super::encoder::encode(self, buffer, offset)
    }

    /// Exact number of bytes [`Self::encode`] writes.
    #[inline]
    pub fn encoded_len(&self) -> DecimalResult<usize> {
        super::encoder::encoded_len(self)
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Order two magnitudes with non-negative scales.
fn compare_magnitude(lhs: u64, lhs_scale: i32, rhs: u64, rhs_scale: i32) -> Ordering {
    let shift = (i64::from(lhs_scale) - i64::from(rhs_scale)).unsigned_abs();
    // Both scales are in 0..=i32::MAX, so the difference fits
    let shift = u32::try_from(shift).unwrap_or(u32::MAX);

    match lhs_scale.cmp(&rhs_scale) {
        Ordering::Equal => lhs.cmp(&rhs),
        // lhs has fewer fractional digits: bring it up to rhs's scale
        Ordering::Less => match scale_up(lhs, shift) {
            Some(aligned) => aligned.cmp(&u128::from(rhs)),
            None => Ordering::Greater,
        },
        Ordering::Greater => match scale_up(rhs, shift) {
            Some(aligned) => u128::from(lhs).cmp(&aligned),
            None => Ordering::Less,
        },
    }
}

impl Ord for ReadOnlyDecimalFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {},
        }

        let by_sign = self.value.signum().cmp(&other.value.signum());
        if by_sign != Ordering::Equal || self.value == 0 {
            return by_sign;
        }

        let by_magnitude = compare_magnitude(
            self.unsigned_value(),
            self.scale,
            other.unsigned_value(),
            other.scale,
        );

        if self.value < 0 {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

impl PartialOrd for ReadOnlyDecimalFloat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ReadOnlyDecimalFloat {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for ReadOnlyDecimalFloat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl FromStr for ReadOnlyDecimalFloat {
    type Err = DecimalError;

    /// Parse a decimal string.
    ///
    /// # Examples
    /// - "42" -> (42, 0)
    /// - "-0.050" -> (-5, 2)
    /// - "1.5e3" -> (1500, 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ascii(s.as_bytes())
    }
}

impl fmt::Debug for ReadOnlyDecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalFloat({}, value={}, scale={})",
            self, self.value, self.scale
        )
    }
}

impl fmt::Display for ReadOnlyDecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }

        let magnitude = self.unsigned_value();
        let scale = self.scale as u32;
        let width = scale as usize;

        if scale == 0 {
            write!(f, "{}", magnitude)
        } else if scale >= digit_count(magnitude) {
            write!(f, "0.{:0>width$}", magnitude, width = width)
        } else {
            let divisor = 10_u64.pow(scale);
            write!(
                f,
                "{}.{:0>width$}",
                magnitude / divisor,
                magnitude % divisor,
                width = width
            )
        }
    }
}

// ============================================================================
// Mutable Working Copy
// ============================================================================

/// Mutable decimal sharing the layout of [`ReadOnlyDecimalFloat`].
///
/// Reads go through `Deref`; only this type offers `set`, `negate`,
/// `reset` and in-place parsing. A decoder can keep one instance and
/// refill it for every field without allocating.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DecimalFloat(ReadOnlyDecimalFloat);

impl DecimalFloat {
    /// A fresh zero.
    #[inline]
    pub const fn zero() -> Self {
        Self(ReadOnlyDecimalFloat::ZERO)
    }

    /// Create from a mantissa and scale, normalising immediately.
    #[inline]
    pub fn new(value: i64, scale: i32) -> DecimalResult<Self> {
        ReadOnlyDecimalFloat::new(value, scale).map(Self)
    }

    /// Create from a whole number.
    #[inline]
    pub fn from_long(value: i64) -> DecimalResult<Self> {
        Self::new(value, 0)
    }

    /// Borrow as the read-only view.
    #[inline]
    pub const fn as_read_only(&self) -> &ReadOnlyDecimalFloat {
        &self.0
    }

    /// Snapshot the current value.
    #[inline]
    pub const fn freeze(&self) -> ReadOnlyDecimalFloat {
        self.0
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Copy another value into this one.
    #[inline]
    pub fn set(&mut self, other: &ReadOnlyDecimalFloat) -> &mut Self {
        self.0 = *other;
        self
    }

    /// Replace with a normalised `(value, scale)`.
    ///
    /// # Errors
    /// Returns `RangeOverflow` and leaves `self` untouched if the pair does
    /// not fit.
    #[inline]
    pub fn set_value(&mut self, value: i64, scale: i32) -> DecimalResult<&mut Self> {
        self.0 = ReadOnlyDecimalFloat::new(value, scale)?;
        Ok(self)
    }

    /// Flip the sign in place.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.0 = self.0.negated();
        self
    }

    /// Back to zero.
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.0 = ReadOnlyDecimalFloat::ZERO;
        self
    }

    /// Parse a complete ASCII field into this instance.
    ///
    /// On error the previous value is kept.
    #[inline]
    pub fn parse_from(&mut self, text: &[u8]) -> DecimalResult<&mut Self> {
        self.0 = ReadOnlyDecimalFloat::parse_ascii(text)?;
        Ok(self)
    }

    /// Parse `length` bytes at `offset` of `bytes` into this instance.
    #[inline]
    pub fn parse_from_range(
        &mut self,
        bytes: &[u8],
        offset: usize,
        length: usize,
    ) -> DecimalResult<&mut Self> {
        self.0 = ReadOnlyDecimalFloat::parse_ascii_range(bytes, offset, length)?;
        Ok(self)
    }
}

impl Deref for DecimalFloat {
    type Target = ReadOnlyDecimalFloat;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<ReadOnlyDecimalFloat> for DecimalFloat {
    #[inline]
    fn as_ref(&self) -> &ReadOnlyDecimalFloat {
        &self.0
    }
}

impl PartialEq<ReadOnlyDecimalFloat> for DecimalFloat {
    #[inline]
    fn eq(&self, other: &ReadOnlyDecimalFloat) -> bool {
        self.0 == *other
    }
}

impl PartialEq<DecimalFloat> for ReadOnlyDecimalFloat {
    #[inline]
    fn eq(&self, other: &DecimalFloat) -> bool {
        *self == other.0
    }
}

impl PartialOrd<ReadOnlyDecimalFloat> for DecimalFloat {
    #[inline]
    fn partial_cmp(&self, other: &ReadOnlyDecimalFloat) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

impl PartialOrd<DecimalFloat> for ReadOnlyDecimalFloat {
    #[inline]
    fn partial_cmp(&self, other: &DecimalFloat) -> Option<Ordering> {
        Some(self.cmp(&other.0))
    }
}

impl FromStr for DecimalFloat {
    type Err = DecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadOnlyDecimalFloat::from_str(s).map(Self)
    }
}

impl fmt::Debug for DecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for DecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl TryFrom<rust_decimal::Decimal> for ReadOnlyDecimalFloat {
    type Error = DecimalError;

    /// Convert from rust_decimal::Decimal.
    ///
    /// Trailing zeros are stripped first, so `1.000` converts even when its
    /// raw mantissa would not fit.
    ///
    /// # Errors
    /// Returns `RangeOverflow` if more than 18 significant digits remain.
    fn try_from(d: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        let d = d.normalize();
        let value = i64::try_from(d.mantissa()).map_err(|_| DecimalError::RangeOverflow)?;
        let scale = i32::try_from(d.scale()).map_err(|_| DecimalError::RangeOverflow)?;
        Self::new(value, scale)
    }
}

impl ReadOnlyDecimalFloat {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `InvalidArgument` for NaN
    /// - `RangeOverflow` if the scale exceeds rust_decimal's 28 digits
    pub fn to_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        if self.is_nan() {
            return Err(DecimalError::InvalidArgument);
        }
        rust_decimal::Decimal::try_new(self.value, self.scale as u32)
            .map_err(|_| DecimalError::RangeOverflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
