//! Two's-complement export, narrowing and text formatting.

use std::fmt;

use crate::{
    bigint::BigInt,
    bitwise::TwosComplement,
    buffer::WorkBuffer,
    division::divide_one_word,
    errors::NumError,
    words::WordSeq,
};

/// Largest power of ten below `2^32`; decimal digits are peeled off nine
/// at a time.
const DECIMAL_CHUNK: u32 = 1_000_000_000;

/// Number of leading units that only repeat the sign: a unit equal to
/// `fill` is redundant when the next unit's top bit still carries the sign.
fn redundant_prefix<T: Copy + PartialEq>(units: &[T], fill: T, top_bit_set: impl Fn(T) -> bool) -> usize {
    let sign_bit = top_bit_set(fill);
    units
        .windows(2)
        .take_while(|pair| pair[0] == fill && top_bit_set(pair[1]) == sign_bit)
        .count()
}

impl BigInt {
    /// Minimal big-endian two's-complement encoding. Zero is `[0x00]`.
    #[must_use]
    pub fn to_byte_array(&self) -> Vec<u8> {
        let words = TwosComplement::new(self).to_words(self.word_len() + 1);
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        let skip = redundant_prefix(&bytes, self.sign().fill_byte(), |b| b & 0x80 != 0);
        bytes[skip..].to_vec()
    }

    /// The encoding of [`to_byte_array`](Self::to_byte_array) left-padded
    /// with sign bytes to exactly `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `NumError::FieldWidthOverflow` when the minimal encoding is
    /// longer than `size`.
    pub fn to_zero_filled_byte_array(&self, size: usize) -> Result<Vec<u8>, NumError> {
        let natural = self.to_byte_array();
        let Some(pad) = size.checked_sub(natural.len()) else {
            tracing::debug!(width = size, needed = natural.len(), "value does not fit field");
            return Err(NumError::FieldWidthOverflow { width: size, needed: natural.len() });
        };
        let mut out = vec![self.sign().fill_byte(); pad];
        out.extend_from_slice(&natural);
        Ok(out)
    }

    /// Minimal big-endian two's-complement word array, the inverse of
    /// [`from_words`](Self::from_words). Zero is `[0]`.
    #[must_use]
    pub fn to_words(&self) -> Vec<u32> {
        let mut words = TwosComplement::new(self).to_words(self.word_len() + 1);
        let skip = redundant_prefix(&words, self.sign().fill_word(), |w| w & 0x8000_0000 != 0);
        words.drain(..skip);
        words
    }

    /// Narrow to `i64`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::Overflow` when the value lies outside the `i64`
    /// range.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_i64(&self) -> Result<i64, NumError> {
        if self.bit_length() > 63 {
            tracing::debug!(bits = self.bit_length(), "value exceeds i64");
            return Err(NumError::Overflow { bits: 64 });
        }
        let view = TwosComplement::new(self);
        Ok(((view.word_u64(1) << 32) | view.word_u64(0)) as i64)
    }

    /// Base-10^9 digits of the magnitude, least significant first.
    fn decimal_chunks(&self) -> Vec<u32> {
        let mut chunks = Vec::with_capacity(self.word_len() * 10 / 9 + 1);
        let mut rest = WorkBuffer::copy_of(self, 0);
        while rest.significant_len() > 0 {
            let (quotient, chunk) = divide_one_word(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }
        chunks
    }

    fn hex_digits(&self, upper: bool) -> String {
        let mut out = String::with_capacity(self.word_len() * 8);
        for (i, w) in self.magnitude().iter().enumerate() {
            let digits = match (i, upper) {
                (0, false) => format!("{w:x}"),
                (0, true) => format!("{w:X}"),
                (_, false) => format!("{w:08x}"),
                (_, true) => format!("{w:08X}"),
            };
            out.push_str(&digits);
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chunks = self.decimal_chunks();
        let mut digits = String::with_capacity(chunks.len() * 9);
        match chunks.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                digits.push_str(&top.to_string());
                for chunk in rest.iter().rev() {
                    digits.push_str(&format!("{chunk:09}"));
                }
            }
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.hex_digits(false))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.hex_digits(true))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self:#x})")
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = NumError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}
