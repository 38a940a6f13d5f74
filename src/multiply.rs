use crate::{
    bigint::{constants::WORD_BITS, BigInt},
    buffer::WorkBuffer,
    words::WordSeq,
};

/// Schoolbook product of two magnitudes into `m + n` words.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn multiply_magnitudes<A, B>(x: &A, y: &B) -> WorkBuffer
where
    A: WordSeq + ?Sized,
    B: WordSeq + ?Sized,
{
    let (m, n) = (x.word_len(), y.word_len());
    let mut out = WorkBuffer::zeroed(m + n);
    let acc = out.as_mut_slice();
    for j in 0..n {
        let factor = y.word_u64(j);
        if factor == 0 {
            continue;
        }
        let mut carry = 0u64;
        for i in 0..m {
            // (2^32-1)^2 + 2 * (2^32-1) == 2^64-1, so this cannot overflow.
            let t = x.word_u64(i) * factor + u64::from(acc[i + j]) + carry;
            acc[i + j] = t as u32;
            carry = t >> WORD_BITS;
        }
        acc[j + m] = carry as u32;
    }
    out
}

impl BigInt {
    /// `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let negative = self.sign().multiply(other.sign()).is_negative();
        multiply_magnitudes(self, other).into_bigint(negative)
    }

    /// `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }
}
