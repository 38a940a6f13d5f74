//! Construction of canonical values from two's-complement encodings.
//!
//! Byte strings and word arrays are read big-endian: the first byte or
//! word is the most significant and its top bit is the sign. Negative
//! encodings are converted to a magnitude by dropping sign-extension
//! words, complementing the rest and adding one.

use crate::{bigint::BigInt, buffer::WorkBuffer, errors::NumError};

/// Pack big-endian bytes into most-significant-first words, padding the
/// first word on the left with `fill`.
fn pack_bytes(bytes: &[u8], fill: u8) -> Vec<u32> {
    let len = bytes.len().div_ceil(4);
    let pad = len * 4 - bytes.len();
    let mut padded = vec![fill; pad];
    padded.extend_from_slice(bytes);
    padded
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Convert a most-significant-first two's-complement word array into a
/// canonical value. An empty array is zero.
pub(crate) fn from_twos_complement(words: &[u32]) -> BigInt {
    match words.first() {
        None => BigInt::zero(),
        Some(&top) if top & 0x8000_0000 == 0 => BigInt::from_magnitude(words.to_vec(), false),
        Some(_) => {
            let keep = words.iter().take_while(|&&w| w == u32::MAX).count();
            BigInt::from_magnitude(negate_words(&words[keep..]), true)
        }
    }
}

/// Magnitude of a negative two's-complement suffix (sign words removed).
///
/// Complements every word and adds one. When the complement is all zero
/// the carry runs out of the top word and a leading `1` word is added;
/// this is the case of `-2^k`, including an empty suffix for `-1`.
fn negate_words(suffix: &[u32]) -> Vec<u32> {
    let mut buf = WorkBuffer::from_le(suffix.iter().rev().map(|w| !w).collect());
    buf.increment();
    let mut words = buf.into_le();
    words.reverse();
    words
}

impl BigInt {
    /// Parse a big-endian two's-complement byte string.
    ///
    /// # Errors
    ///
    /// Returns `NumError::ConstructionError` for an empty input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NumError> {
        let Some(&first) = bytes.first() else {
            tracing::debug!("rejecting zero-length byte input");
            return Err(NumError::ConstructionError);
        };
        if first & 0x80 == 0 {
            return Ok(Self::from_unsigned_bytes(bytes));
        }
        let keep = bytes.iter().take_while(|&&b| b == 0xFF).count();
        let words = pack_bytes(&bytes[keep..], 0xFF);
        Ok(Self::from_magnitude(negate_words(&words), true))
    }

    /// Parse a big-endian two's-complement word array.
    ///
    /// # Errors
    ///
    /// Returns `NumError::ConstructionError` for an empty input.
    pub fn from_words(words: &[u32]) -> Result<Self, NumError> {
        if words.is_empty() {
            tracing::debug!("rejecting zero-length word input");
            return Err(NumError::ConstructionError);
        }
        Ok(from_twos_complement(words))
    }

    /// Interpret big-endian bytes as a non-negative magnitude. An empty
    /// slice is zero.
    #[must_use]
    pub fn from_unsigned_bytes(bytes: &[u8]) -> Self {
        let lead = bytes.iter().take_while(|&&b| b == 0).count();
        Self::from_magnitude(pack_bytes(&bytes[lead..], 0), false)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_i64(value: i64) -> Self {
        let bits = value as u64;
        from_twos_complement(&[(bits >> 32) as u32, bits as u32])
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(value: u64) -> Self {
        Self::from_magnitude(vec![(value >> 32) as u32, value as u32], false)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl TryFrom<&[u8]> for BigInt {
    type Error = NumError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::Sign;

    #[test]
    fn single_zero_byte_is_zero() {
        let v = BigInt::from_bytes(&[0x00]).unwrap();
        assert_eq!(v.sign(), Sign::Zero);
        assert!(v.magnitude().is_empty());
    }

    #[test]
    fn all_ones_byte_is_minus_one() {
        let v = BigInt::from_bytes(&[0xFF]).unwrap();
        assert_eq!(v.sign(), Sign::Negative);
        assert_eq!(v.magnitude(), &[1]);
        assert_eq!(BigInt::from_bytes(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap(), v);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(BigInt::from_bytes(&[]), Err(NumError::ConstructionError));
        assert_eq!(BigInt::from_words(&[]), Err(NumError::ConstructionError));
    }

    #[test]
    fn leading_zero_bytes_are_stripped() {
        let v = BigInt::from_bytes(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02]).unwrap();
        assert_eq!(v.magnitude(), &[0x0102]);
    }

    #[test]
    fn negative_bytes_convert_to_magnitude() {
        assert_eq!(BigInt::from_bytes(&[0x80]).unwrap(), BigInt::from_i64(-128));
        assert_eq!(BigInt::from_bytes(&[0xFF, 0x00]).unwrap(), BigInt::from_i64(-256));
        assert_eq!(BigInt::from_bytes(&[0xFE, 0xFF]).unwrap(), BigInt::from_i64(-257));
    }

    #[test]
    fn minimum_value_needs_extra_word() {
        let v = BigInt::from_words(&[0x8000_0000]).unwrap();
        assert_eq!(v.magnitude(), &[0x8000_0000]);
        assert!(v.is_negative());

        let v = BigInt::from_words(&[0x8000_0000, 0, 0]).unwrap();
        assert_eq!(v.magnitude(), &[0x8000_0000, 0, 0]);

        let v = BigInt::from_words(&[u32::MAX, 0]).unwrap();
        assert_eq!(v.magnitude(), &[1, 0]);
    }

    #[test]
    fn i64_extremes() {
        let min = BigInt::from_i64(i64::MIN);
        assert_eq!(min.magnitude(), &[0x8000_0000, 0]);
        assert!(min.is_negative());
        let max = BigInt::from_i64(i64::MAX);
        assert_eq!(max.magnitude(), &[0x7FFF_FFFF, u32::MAX]);
        assert!(BigInt::from_i64(0).is_zero());
    }

    #[test]
    fn unsigned_bytes_never_negative() {
        let v = BigInt::from_unsigned_bytes(&[0xFF, 0xFF]);
        assert_eq!(v.magnitude(), &[0xFFFF]);
        assert!(v.is_positive());
        assert!(BigInt::from_unsigned_bytes(&[]).is_zero());
    }

    #[test]
    fn words_with_leading_zero_are_positive() {
        let v = BigInt::from_words(&[0, 0xFFFF_FFFF]).unwrap();
        assert_eq!(v, BigInt::from_u64(0xFFFF_FFFF));
    }
}
