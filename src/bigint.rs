use std::sync::{Arc, LazyLock as Lazy};

use crate::{sign::Sign, words::WordSeq};

/// Word geometry of the magnitude representation.
pub mod constants {
    pub const WORD_BITS: u32 = u32::BITS;
    pub const WORD_BYTES: usize = 4;
    pub const WORD_MASK: u64 = 0xFFFF_FFFF;
    /// Number base of one magnitude digit, `2^32`.
    pub const WORD_BASE: u64 = 1 << WORD_BITS;
}

/// Immutable arbitrary-precision signed integer.
///
/// Stored as sign and magnitude: `mag` holds the absolute value in base
/// `2^32`, most significant word first, without leading zero words. The
/// sign is `Zero` exactly when `mag` is empty. The magnitude sits behind an
/// [`Arc`] so that negation, `abs`, and the operand-returning shortcuts of
/// the arithmetic share it instead of copying.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    mag: Arc<[u32]>,
    sign: Sign,
}

static ZERO: Lazy<BigInt> = Lazy::new(|| BigInt { mag: Arc::from(Vec::new()), sign: Sign::Zero });
static ONE: Lazy<BigInt> = Lazy::new(|| BigInt::from_u64(1));
static TWO: Lazy<BigInt> = Lazy::new(|| BigInt::from_u64(2));
static MINUS_ONE: Lazy<BigInt> = Lazy::new(|| BigInt::from_i64(-1));

impl BigInt {
    /// The shared `0` constant.
    #[must_use]
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// The shared `1` constant.
    #[must_use]
    pub fn one() -> Self {
        ONE.clone()
    }

    /// The shared `2` constant.
    #[must_use]
    pub fn two() -> Self {
        TWO.clone()
    }

    /// The shared `-1` constant.
    #[must_use]
    pub fn minus_one() -> Self {
        MINUS_ONE.clone()
    }

    /// Wrap an already canonical magnitude.
    pub(crate) fn from_shared(mag: Arc<[u32]>, sign: Sign) -> Self {
        debug_assert_eq!(mag.is_empty(), sign.is_zero(), "sign/magnitude mismatch");
        debug_assert!(mag.first() != Some(&0), "leading zero word");
        Self { mag, sign }
    }

    /// Build from a most-significant-first magnitude that may carry leading
    /// zero words.
    pub(crate) fn from_magnitude(mut words: Vec<u32>, negative: bool) -> Self {
        let lead = words.iter().take_while(|&&w| w == 0).count();
        if lead == words.len() {
            return Self::zero();
        }
        words.drain(..lead);
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Self::from_shared(Arc::from(words), sign)
    }

    /// Same magnitude allocation, different sign.
    pub(crate) fn with_sign(&self, sign: Sign) -> Self {
        if self.sign.is_zero() {
            return self.clone();
        }
        Self { mag: Arc::clone(&self.mag), sign }
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn signum(&self) -> i32 {
        self.sign.state()
    }

    /// Canonical magnitude words, most significant first.
    #[must_use]
    pub fn magnitude(&self) -> &[u32] {
        &self.mag
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.sign.is_positive()
    }

    /// Whether both values are backed by the same magnitude allocation.
    ///
    /// Operations that hand back an operand (adding zero, `pow(1)`,
    /// negation, a remainder smaller than its divisor) preserve this.
    #[must_use]
    pub fn shares_magnitude(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.mag, &other.mag)
    }

    /// True when the magnitude equals `1`.
    pub(crate) fn is_unit_magnitude(&self) -> bool {
        *self.mag == [1]
    }
}

/// A value addresses its magnitude words; the sign is ignored.
impl WordSeq for BigInt {
    #[inline]
    fn word_len(&self) -> usize {
        self.mag.len()
    }

    #[inline]
    fn word(&self, index: usize) -> u32 {
        self.mag[..].word(index)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}
