use crate::{bigint::BigInt, errors::NumError};

impl BigInt {
    /// `self^exponent` by left-to-right square-and-multiply.
    ///
    /// `x.pow(0)` is `1` for every `x`, zero included, and `x.pow(1)`
    /// returns `x` itself.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NegativeExponent` when `exponent < 0`.
    pub fn pow(&self, exponent: i64) -> Result<Self, NumError> {
        match exponent {
            e if e < 0 => {
                tracing::debug!(exponent = e, "negative exponent");
                Err(NumError::NegativeExponent { exponent: e })
            }
            0 => Ok(Self::one()),
            1 => Ok(self.clone()),
            _ if self.is_zero() => Ok(Self::zero()),
            e => Ok(self.pow_unsigned(e.unsigned_abs())),
        }
    }

    /// Square-and-multiply over the bits of `exponent`, most significant
    /// first. `exponent` is at least 2.
    fn pow_unsigned(&self, exponent: u64) -> Self {
        let bits = u64::BITS - exponent.leading_zeros();
        let _span = tracing::trace_span!("pow", base_words = self.magnitude().len(), exponent).entered();
        let mut acc = self.clone();
        for bit in (0..bits - 1).rev() {
            acc = acc.square();
            if exponent >> bit & 1 == 1 {
                acc = acc.multiply(self);
            }
        }
        acc
    }
}
