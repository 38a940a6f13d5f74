//! Truncating division.
//!
//! Quotients round toward zero and remainders carry the dividend's sign,
//! so `dividend == divisor * quotient + remainder` with
//! `|remainder| < |divisor|`. Multi-word divisors go through Knuth's
//! Algorithm D (TAOCP vol. 2, 4.3.1) in base `2^32`.

use std::cmp::Ordering;

use crate::{
    bigint::{
        constants::{WORD_BASE, WORD_BITS, WORD_MASK},
        BigInt,
    },
    buffer::WorkBuffer,
    compare::compare_magnitude,
    errors::NumError,
    words::{funnel_left, funnel_right, WordSeq},
};

/// Divide the two-word value `n` by `d`, returning `(quotient, remainder)`.
///
/// The caller guarantees `n < d * 2^32`, so the quotient fits a word.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn div_word(n: u64, d: u32) -> (u32, u32) {
    let d = u64::from(d);
    debug_assert!(n >> WORD_BITS < d, "quotient overflows a word");
    ((n / d) as u32, (n % d) as u32)
}

/// Divide a magnitude by a single non-zero word.
pub(crate) fn divide_one_word<A: WordSeq + ?Sized>(dividend: &A, divisor: u32) -> (WorkBuffer, u32) {
    let len = dividend.word_len();
    let mut quotient = WorkBuffer::zeroed(len);
    let mut rem = 0u32;
    for i in (0..len).rev() {
        let estimate = (u64::from(rem) << WORD_BITS) | dividend.word_u64(i);
        let (q, r) = div_word(estimate, divisor);
        quotient.set(i, q);
        rem = r;
    }
    (quotient, rem)
}

/// Knuth Algorithm D. `dividend` must have at least as many words as
/// `divisor`, and `divisor` at least two significant words.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::many_single_char_names)]
fn divide_knuth<A, B>(dividend: &A, divisor: &B) -> (WorkBuffer, WorkBuffer)
where
    A: WordSeq + ?Sized,
    B: WordSeq + ?Sized,
{
    let n = divisor.word_len();
    let m = dividend.word_len() - n;
    let _span = tracing::trace_span!("knuth_divide", dividend_words = dividend.word_len(), divisor_words = n)
        .entered();

    // D1: normalize so the divisor's top word has its high bit set.
    let shift = divisor.word(n - 1).leading_zeros();
    let vn: Vec<u32> = (0..n)
        .map(|i| funnel_left(divisor.word(i), if i == 0 { 0 } else { divisor.word(i - 1) }, shift))
        .collect();
    let mut window = WorkBuffer::zeroed(m + n + 1);
    let un = window.as_mut_slice();
    for (i, slot) in un.iter_mut().enumerate() {
        let lo = if i == 0 { 0 } else { dividend.word(i - 1) };
        *slot = funnel_left(dividend.word(i), lo, shift);
    }

    let v_top = u64::from(vn[n - 1]);
    let v_next = u64::from(vn[n - 2]);
    let mut quotient = WorkBuffer::zeroed(m + 1);

    for j in (0..=m).rev() {
        // D3: estimate the quotient digit from the top two window words.
        let num = (u64::from(un[j + n]) << WORD_BITS) | u64::from(un[j + n - 1]);
        let (mut qhat, mut rhat) = if u64::from(un[j + n]) >= v_top {
            // The raw ratio would not fit a word: clip to all ones.
            let qhat = WORD_MASK;
            (qhat, num - qhat * v_top)
        } else {
            (num / v_top, num % v_top)
        };
        while rhat < WORD_BASE && qhat * v_next > ((rhat << WORD_BITS) | u64::from(un[j + n - 2])) {
            qhat -= 1;
            rhat += v_top;
        }

        // D4: multiply and subtract.
        let mut borrow = 0i64;
        let mut carry = 0u64;
        for i in 0..n {
            let p = qhat * u64::from(vn[i]) + carry;
            carry = p >> WORD_BITS;
            let t = i64::from(un[i + j]) - borrow - (p & WORD_MASK) as i64;
            un[i + j] = t as u32;
            borrow = i64::from(t < 0);
        }
        let t = i64::from(un[j + n]) - borrow - carry as i64;
        un[j + n] = t as u32;

        // D5/D6: the estimate was one too high; add the divisor back.
        if t < 0 {
            qhat -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let s = u64::from(un[i + j]) + u64::from(vn[i]) + carry;
                un[i + j] = s as u32;
                carry = s >> WORD_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
        quotient.set(j, qhat as u32);
    }

    // D8: unnormalize the remainder.
    let remainder: Vec<u32> = (0..n).map(|i| funnel_right(un[i + 1], un[i], shift)).collect();
    tracing::trace!(quotient_words = m + 1, "knuth division done");
    (quotient, WorkBuffer::from_le(remainder))
}

impl BigInt {
    /// Truncated quotient and remainder, `None` when `divisor` is zero.
    pub(crate) fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if divisor.is_unit_magnitude() {
            let quotient = if divisor.is_negative() { self.negate() } else { self.clone() };
            return Some((quotient, Self::zero()));
        }
        if self.is_zero() {
            return Some((Self::zero(), Self::zero()));
        }
        let q_negative = self.is_negative() != divisor.is_negative();
        match compare_magnitude(self, divisor) {
            Ordering::Less => return Some((Self::zero(), self.clone())),
            Ordering::Equal => {
                let unit = if q_negative { Self::minus_one() } else { Self::one() };
                return Some((unit, Self::zero()));
            }
            Ordering::Greater => {}
        }
        let (quotient, remainder) = if divisor.word_len() == 1 {
            let (q, r) = divide_one_word(self, divisor.word(0));
            (q, WorkBuffer::from_le(vec![r]))
        } else {
            divide_knuth(self, divisor)
        };
        Some((quotient.into_bigint(q_negative), remainder.into_bigint(self.is_negative())))
    }

    /// Truncated quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns `NumError::DivisionByZero` when `divisor` is zero.
    pub fn divide_and_remainder(&self, divisor: &Self) -> Result<(Self, Self), NumError> {
        self.checked_div_rem(divisor).ok_or_else(|| {
            tracing::debug!("division by zero");
            NumError::DivisionByZero
        })
    }

    /// Quotient rounded toward zero.
    ///
    /// # Errors
    ///
    /// Returns `NumError::DivisionByZero` when `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> Result<Self, NumError> {
        self.divide_and_remainder(divisor).map(|(q, _)| q)
    }

    /// Remainder with the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::DivisionByZero` when `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self, NumError> {
        self.divide_and_remainder(divisor).map(|(_, r)| r)
    }

    /// Least non-negative residue, in `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NonPositiveModulus` unless `modulus > 0`.
    pub fn modulo(&self, modulus: &Self) -> Result<Self, NumError> {
        if !modulus.is_positive() {
            tracing::debug!("modulus not positive");
            return Err(NumError::NonPositiveModulus);
        }
        let r = self.remainder(modulus)?;
        Ok(if r.is_negative() { r.add(modulus) } else { r })
    }
}
