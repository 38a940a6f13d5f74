use std::cmp::Ordering;

use crate::{
    bigint::{constants::WORD_BITS, BigInt},
    buffer::WorkBuffer,
    compare::compare_magnitude,
    words::WordSeq,
};

/// `x + y` over magnitudes, with one word of carry headroom.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add_magnitudes<A, B>(x: &A, y: &B) -> WorkBuffer
where
    A: WordSeq + ?Sized,
    B: WordSeq + ?Sized,
{
    let len = x.word_len().max(y.word_len()) + 1;
    let mut out = WorkBuffer::zeroed(len);
    let mut carry = 0u64;
    for i in 0..len {
        carry += x.word_u64(i) + y.word_u64(i);
        out.set(i, carry as u32);
        carry >>= WORD_BITS;
    }
    out
}

/// `big - little` over magnitudes. Requires `|big| >= |little|`.
pub(crate) fn subtract_magnitudes<A, B>(big: &A, little: &B) -> WorkBuffer
where
    A: WordSeq + ?Sized,
    B: WordSeq + ?Sized,
{
    let len = big.word_len();
    let mut out = WorkBuffer::zeroed(len);
    let mut borrow = false;
    for i in 0..len {
        let (diff, b1) = big.word(i).overflowing_sub(little.word(i));
        let (diff, b2) = diff.overflowing_sub(u32::from(borrow));
        out.set(i, diff);
        borrow = b1 || b2;
    }
    debug_assert!(!borrow, "subtrahend larger than minuend");
    out
}

/// Signed sum of two non-zero values given as magnitude and sign.
fn combine(x: &BigInt, x_negative: bool, y: &BigInt, y_negative: bool) -> BigInt {
    if x_negative == y_negative {
        return add_magnitudes(x, y).into_bigint(x_negative);
    }
    match compare_magnitude(x, y) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => subtract_magnitudes(x, y).into_bigint(x_negative),
        Ordering::Less => subtract_magnitudes(y, x).into_bigint(y_negative),
    }
}

impl BigInt {
    /// `self + other`.
    ///
    /// Adding zero returns the other operand itself, sharing its magnitude.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        combine(self, self.is_negative(), other, other.is_negative())
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.negate();
        }
        combine(self, self.is_negative(), other, !other.is_negative())
    }

    /// `-self`; the magnitude is shared, not copied.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_sign(self.sign().negate())
    }

    /// `|self|`; non-negative values are returned as is.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }
}
