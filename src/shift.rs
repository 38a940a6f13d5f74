//! Arithmetic shifts. Left shifts multiply by `2^n`; right shifts divide
//! by `2^n` rounding toward negative infinity, as a two's-complement
//! arithmetic shift would.

use crate::{
    bigint::{constants::WORD_BITS, BigInt},
    buffer::WorkBuffer,
    words::{funnel_left, funnel_right, WordSeq},
};

/// Split a shift amount into whole words and remaining bits.
#[allow(clippy::cast_possible_truncation)]
fn split_shift(bits: u64) -> (usize, u32) {
    let words = usize::try_from(bits / u64::from(WORD_BITS)).unwrap_or(usize::MAX);
    (words, (bits % u64::from(WORD_BITS)) as u32)
}

impl BigInt {
    /// `self * 2^n`; a negative `n` shifts right by `-n`.
    #[must_use]
    pub fn shift_left(&self, n: i64) -> Self {
        match n {
            0 => self.clone(),
            n if n < 0 => self.shift_right_by(n.unsigned_abs()),
            n => self.shift_left_by(n.unsigned_abs()),
        }
    }

    /// `floor(self / 2^n)`; a negative `n` shifts left by `-n`.
    #[must_use]
    pub fn shift_right(&self, n: i64) -> Self {
        match n {
            0 => self.clone(),
            n if n < 0 => self.shift_left_by(n.unsigned_abs()),
            n => self.shift_right_by(n.unsigned_abs()),
        }
    }

    fn shift_left_by(&self, bits: u64) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let (word_shift, bit_shift) = split_shift(bits);
        let len = self.word_len();
        let spill = funnel_left(0, self.word(len - 1), bit_shift);

        let mut words = Vec::with_capacity(len + word_shift + usize::from(spill != 0));
        if spill != 0 {
            words.push(spill);
        }
        for i in (0..len).rev() {
            let lower = if i == 0 { 0 } else { self.word(i - 1) };
            words.push(funnel_left(self.word(i), lower, bit_shift));
        }
        words.resize(words.len() + word_shift, 0);
        Self::from_magnitude(words, self.is_negative())
    }

    fn shift_right_by(&self, bits: u64) -> Self {
        let (word_shift, bit_shift) = split_shift(bits);
        let len = self.word_len();
        if word_shift >= len {
            return if self.is_negative() { Self::minus_one() } else { Self::zero() };
        }

        let mut out = WorkBuffer::from_le(
            (word_shift..len)
                .map(|i| funnel_right(self.word(i + 1), self.word(i), bit_shift))
                .collect(),
        );
        if self.is_negative() && self.drops_set_bits(word_shift, bit_shift) {
            // Truncation rounded the magnitude down; floor needs it rounded up.
            out.increment();
        }
        out.into_bigint(self.is_negative())
    }

    /// Whether any of the low `word_shift * 32 + bit_shift` magnitude bits
    /// is set.
    fn drops_set_bits(&self, word_shift: usize, bit_shift: u32) -> bool {
        let low_mask = (1u32 << bit_shift).wrapping_sub(1);
        (0..word_shift).any(|i| self.word(i) != 0) || self.word(word_shift) & low_mask != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    #[test]
    fn shift_left_scenarios() {
        assert_eq!(int(1).shift_left(10), int(1024));
        assert_eq!(int(-3).shift_left(33), int(-3 << 33));
        assert!(int(0).shift_left(500).is_zero());
    }

    #[test]
    fn extra_word_only_on_spill() {
        let v = BigInt::from_u64(0x0FFF_FFFF);
        assert_eq!(v.shift_left(4).magnitude(), &[0xFFFF_FFF0]);
        assert_eq!(v.shift_left(5).magnitude(), &[1, 0xFFFF_FFE0]);
        assert_eq!(v.shift_left(64).magnitude(), &[0x0FFF_FFFF, 0, 0]);
    }

    #[test]
    fn shift_right_scenarios() {
        assert_eq!(int(1024).shift_right(10), int(1));
        assert_eq!(int(1023).shift_right(10), int(0));
    }

    #[test]
    fn negative_right_shift_floors() {
        assert_eq!(int(-7).shift_right(1), int(-4));
        assert_eq!(int(-8).shift_right(1), int(-4));
        assert_eq!(int(-1).shift_right(1), int(-1));
        for v in [-1i64, -2, -5, -1 << 40, -(1 << 40) - 1, i64::MIN, -0x1234_5678_9ABC_DEF0] {
            for n in [1i64, 3, 31, 32, 33, 40, 63] {
                assert_eq!(int(v).shift_right(n), int(v >> n), "{v} >> {n}");
            }
        }
    }

    #[test]
    fn shifting_past_the_magnitude() {
        assert!(int(12_345).shift_right(64).is_zero());
        assert_eq!(int(-12_345).shift_right(64), int(-1));
        assert_eq!(int(-12_345).shift_right(i64::MAX), int(-1));
    }

    #[test]
    fn negative_amount_reverses_direction() {
        assert_eq!(int(5).shift_left(-1), int(2));
        assert_eq!(int(-5).shift_left(-1), int(-3));
        assert_eq!(int(5).shift_right(-3), int(40));
        assert!(int(5).shift_left(i64::MIN).is_zero());
    }

    #[test]
    fn left_then_right_is_identity() {
        let v = BigInt::from_words(&[0x8000_0001, 0, 0xDEAD_BEEF]).unwrap();
        for n in [1i64, 31, 32, 95, 200] {
            assert_eq!(v.shift_left(n).shift_right(n), v, "n = {n}");
        }
    }

    #[test]
    fn zero_shift_returns_operand() {
        let v = int(-99);
        assert!(v.shift_left(0).shares_magnitude(&v));
        assert!(v.shift_right(0).shares_magnitude(&v));
    }
}
