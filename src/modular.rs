use crate::{bigint::BigInt, errors::NumError};

fn require_positive(modulus: &BigInt) -> Result<(), NumError> {
    if modulus.is_positive() {
        Ok(())
    } else {
        tracing::debug!("modulus not positive");
        Err(NumError::NonPositiveModulus)
    }
}

impl BigInt {
    /// `self^exponent mod modulus`, in `[0, modulus)`.
    ///
    /// A negative exponent raises the modular inverse of `self` instead.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NonPositiveModulus` unless `modulus > 0`, and
    /// `NumError::NotInvertible` for a negative exponent when `self` has no
    /// inverse modulo `modulus`.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, NumError> {
        require_positive(modulus)?;
        if modulus.is_unit_magnitude() {
            return Ok(Self::zero());
        }
        let (base, exponent) = if exponent.is_negative() {
            (self.mod_inverse(modulus)?, exponent.negate())
        } else {
            (self.modulo(modulus)?, exponent.clone())
        };

        let bits = exponent.bit_length();
        let _span = tracing::trace_span!("mod_pow", exponent_bits = bits, modulus_bits = modulus.bit_length())
            .entered();
        let mut acc = Self::one();
        for bit in (0..bits).rev() {
            acc = acc.square().modulo(modulus)?;
            if exponent.bit_at(bit) {
                acc = acc.multiply(&base).modulo(modulus)?;
            }
        }
        Ok(acc)
    }

    /// The `x` in `[0, modulus)` with `self * x == 1 (mod modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `NumError::NonPositiveModulus` unless `modulus > 0`, and
    /// `NumError::NotInvertible` when `gcd(self, modulus) != 1`.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self, NumError> {
        require_positive(modulus)?;
        let (mut r0, mut r1) = (modulus.clone(), self.modulo(modulus)?);
        let (mut t0, mut t1) = (Self::zero(), Self::one());
        while !r1.is_zero() {
            let (q, r) = r0.divide_and_remainder(&r1)?;
            let t = t0.subtract(&q.multiply(&t1));
            (r0, r1) = (r1, r);
            (t0, t1) = (t1, t);
        }
        if !r0.is_unit_magnitude() {
            tracing::debug!("value shares a factor with the modulus");
            return Err(NumError::NotInvertible);
        }
        t0.modulo(modulus)
    }

    /// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.abs(), other.abs());
        while let Some((_, r)) = a.checked_div_rem(&b) {
            a = b;
            b = r;
        }
        a
    }
}
