/// Sign tag of a [`BigInt`](crate::BigInt), tracked apart from the magnitude.
///
/// The declaration order gives `Negative < Zero < Positive`, which is the
/// first key of integer comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn state(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }

    /// Word used to sign-extend a two's-complement view past the magnitude.
    #[must_use]
    pub const fn fill_word(self) -> u32 {
        match self {
            Self::Negative => u32::MAX,
            _ => 0,
        }
    }

    /// Byte used to sign-extend a two's-complement encoding.
    #[must_use]
    pub const fn fill_byte(self) -> u8 {
        match self {
            Self::Negative => 0xFF,
            _ => 0x00,
        }
    }

    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    /// Sign of a product of two values carrying `self` and `other`.
    #[must_use]
    pub const fn multiply(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (Self::Negative, Self::Negative) | (Self::Positive, Self::Positive) => Self::Positive,
            _ => Self::Negative,
        }
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    #[must_use]
    pub const fn is_non_negative(self) -> bool {
        !self.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::Sign;

    #[test]
    fn ordering_follows_state() {
        assert!(Sign::Negative < Sign::Zero);
        assert!(Sign::Zero < Sign::Positive);
        assert_eq!(Sign::Negative.state(), -1);
        assert_eq!(Sign::Positive.state(), 1);
    }

    #[test]
    fn negate_keeps_zero() {
        assert_eq!(Sign::Zero.negate(), Sign::Zero);
        assert_eq!(Sign::Positive.negate(), Sign::Negative);
        assert_eq!(Sign::Negative.negate().negate(), Sign::Negative);
    }

    #[test]
    fn product_sign() {
        assert_eq!(Sign::Negative.multiply(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Negative.multiply(Sign::Positive), Sign::Negative);
        assert_eq!(Sign::Zero.multiply(Sign::Negative), Sign::Zero);
    }
}
