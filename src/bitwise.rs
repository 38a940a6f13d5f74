//! Bitwise operations over an emulated two's-complement representation.
//!
//! Values are stored as sign and magnitude; the bitwise operators behave
//! as if the value were an infinitely sign-extended two's-complement word
//! string. [`TwosComplement`] produces those words on demand, and results
//! are rebuilt through the two's-complement constructor.

use crate::{
    bigint::{constants::WORD_BITS, BigInt},
    construct::from_twos_complement,
    errors::NumError,
    words::WordSeq,
};

/// Two's-complement word view of a value.
///
/// For a negative value, `-m == !m + 1`: words below the lowest non-zero
/// magnitude word stay zero, that word is negated, and every word above it
/// is complemented. Past the magnitude the view yields the sign fill.
pub(crate) struct TwosComplement<'a> {
    value: &'a BigInt,
    first_nonzero: usize,
}

impl<'a> TwosComplement<'a> {
    pub(crate) fn new(value: &'a BigInt) -> Self {
        let first_nonzero = (0..value.word_len()).find(|&i| value.word(i) != 0).unwrap_or(0);
        Self { value, first_nonzero }
    }

    /// Most-significant-first array of the low `len` view words.
    pub(crate) fn to_words(&self, len: usize) -> Vec<u32> {
        (0..len).rev().map(|i| self.word(i)).collect()
    }
}

impl WordSeq for TwosComplement<'_> {
    fn word_len(&self) -> usize {
        self.value.word_len()
    }

    fn word(&self, index: usize) -> u32 {
        if index >= self.value.word_len() {
            return self.value.sign().fill_word();
        }
        let raw = self.value.word(index);
        if !self.value.is_negative() {
            raw
        } else if index <= self.first_nonzero {
            raw.wrapping_neg()
        } else {
            !raw
        }
    }
}

/// Split a bit position into a word index and a bit offset. Positions past
/// the addressable range have no word index.
#[allow(clippy::cast_possible_truncation)]
fn locate(bit: u64) -> (Option<usize>, u32) {
    let index = usize::try_from(bit / u64::from(WORD_BITS)).ok();
    (index, (bit % u64::from(WORD_BITS)) as u32)
}

fn check_position(position: i64) -> Result<u64, NumError> {
    u64::try_from(position).map_err(|_| {
        tracing::debug!(position, "negative bit position");
        NumError::NegativeBitPosition { position }
    })
}

impl BigInt {
    /// Combine two views word by word over one word of headroom.
    fn combine_words(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let (x, y) = (TwosComplement::new(self), TwosComplement::new(other));
        let len = self.word_len().max(other.word_len()) + 1;
        let words: Vec<u32> = (0..len).rev().map(|i| op(x.word(i), y.word(i))).collect();
        from_twos_complement(&words)
    }

    /// `self & other`.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.combine_words(other, |a, b| a & b)
    }

    /// `self | other`.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        self.combine_words(other, |a, b| a | b)
    }

    /// `self ^ other`.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        self.combine_words(other, |a, b| a ^ b)
    }

    /// `self & !other`.
    #[must_use]
    pub fn and_not(&self, other: &Self) -> Self {
        self.combine_words(other, |a, b| a & !b)
    }

    /// `!self`, which equals `-(self + 1)`.
    #[must_use]
    pub fn not(&self) -> Self {
        let view = TwosComplement::new(self);
        let words: Vec<u32> = (0..=self.word_len()).rev().map(|i| !view.word(i)).collect();
        from_twos_complement(&words)
    }

    /// Bit `bit` of the two's-complement view.
    pub(crate) fn bit_at(&self, bit: u64) -> bool {
        match locate(bit) {
            (Some(index), offset) => TwosComplement::new(self).word(index) >> offset & 1 == 1,
            (None, _) => self.is_negative(),
        }
    }

    /// Whether bit `position` of the two's-complement view is set.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NegativeBitPosition` when `position < 0`.
    pub fn test_bit(&self, position: i64) -> Result<bool, NumError> {
        check_position(position).map(|bit| self.bit_at(bit))
    }

    /// Rewrite the view word holding `bit` and rebuild the value.
    fn modify_bit(&self, position: i64, op: impl Fn(u32, u32) -> u32) -> Result<Self, NumError> {
        let bit = check_position(position)?;
        let (Some(index), offset) = locate(bit) else {
            return Err(NumError::Overflow { bits: usize::BITS });
        };
        let view = TwosComplement::new(self);
        let len = (self.word_len() + 1).max(index + 2);
        let mut words = view.to_words(len);
        let slot = len - 1 - index;
        words[slot] = op(words[slot], 1 << offset);
        Ok(from_twos_complement(&words))
    }

    /// `self | (1 << position)`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NegativeBitPosition` when `position < 0`.
    pub fn set_bit(&self, position: i64) -> Result<Self, NumError> {
        if self.test_bit(position)? {
            return Ok(self.clone());
        }
        self.modify_bit(position, |w, mask| w | mask)
    }

    /// `self & !(1 << position)`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NegativeBitPosition` when `position < 0`.
    pub fn clear_bit(&self, position: i64) -> Result<Self, NumError> {
        if !self.test_bit(position)? {
            return Ok(self.clone());
        }
        self.modify_bit(position, |w, mask| w & !mask)
    }

    /// `self ^ (1 << position)`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NegativeBitPosition` when `position < 0`.
    pub fn flip_bit(&self, position: i64) -> Result<Self, NumError> {
        self.modify_bit(position, |w, mask| w ^ mask)
    }

    /// Bits in the magnitude, without a sign bit.
    fn magnitude_bits(&self) -> u64 {
        match self.magnitude().first() {
            None => 0,
            Some(top) => {
                (self.word_len() as u64) * u64::from(WORD_BITS) - u64::from(top.leading_zeros())
            }
        }
    }

    fn is_power_of_two_magnitude(&self) -> bool {
        match self.magnitude().split_first() {
            Some((top, rest)) => top.is_power_of_two() && rest.iter().all(|&w| w == 0),
            None => false,
        }
    }

    /// Length of the minimal two's-complement encoding, excluding the sign
    /// bit. `-2^k` needs one bit fewer than its magnitude.
    #[must_use]
    pub fn bit_length(&self) -> u64 {
        let bits = self.magnitude_bits();
        if self.is_negative() && self.is_power_of_two_magnitude() {
            bits - 1
        } else {
            bits
        }
    }

    /// Number of bits that differ from the sign bit.
    #[must_use]
    pub fn bit_count(&self) -> u64 {
        let ones: u64 = self.magnitude().iter().map(|w| u64::from(w.count_ones())).sum();
        match self.lowest_set_bit() {
            Some(trailing) if self.is_negative() => ones + trailing - 1,
            _ => ones,
        }
    }

    /// Index of the lowest set bit, `None` for zero. The index is the same
    /// for a value and its negation.
    #[must_use]
    pub fn lowest_set_bit(&self) -> Option<u64> {
        let index = (0..self.word_len()).find(|&i| self.word(i) != 0)?;
        let within = self.word(index).trailing_zeros();
        Some(index as u64 * u64::from(WORD_BITS) + u64::from(within))
    }

    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.word(0) & 1 == 1
    }

    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }
}
