//! Random values drawn from a caller-supplied entropy source.

use crate::{bigint::BigInt, errors::NumError};

#[cfg(feature = "rand")]
pub use rand_core::OsRng as OsEntropy;

/// Supplier of uniformly distributed random bytes.
///
/// With the `rand` feature every [`rand_core::RngCore`] is a source.
pub trait EntropySource {
    /// Fill `buffer` completely with random bytes.
    fn fill_random_bytes(&mut self, buffer: &mut [u8]);
}

#[cfg(feature = "rand")]
impl<R: rand_core::RngCore + ?Sized> EntropySource for R {
    fn fill_random_bytes(&mut self, buffer: &mut [u8]) {
        self.fill_bytes(buffer);
    }
}

impl BigInt {
    /// Uniform value in `[0, 2^bits)`.
    #[must_use]
    pub fn random_bits<S: EntropySource + ?Sized>(bits: u32, source: &mut S) -> Self {
        let len = bits.div_ceil(8) as usize;
        let mut bytes = vec![0u8; len];
        source.fill_random_bytes(&mut bytes);
        let excess = (8 - bits % 8) % 8;
        Self::from_unsigned_bytes(&bytes).shift_right(i64::from(excess))
    }

    /// Uniform value in `[start, end)`.
    ///
    /// Draws `bit_length(end - start)` random bits and retries until the
    /// draw falls inside the range, so fewer than two draws are needed on
    /// average.
    ///
    /// # Errors
    ///
    /// Returns `NumError::EmptyRange` when `end <= start`, and
    /// `NumError::Overflow` when the bit length of the range does not fit a
    /// `u32`.
    pub fn random_between<S: EntropySource + ?Sized>(
        start: &Self,
        end: &Self,
        source: &mut S,
    ) -> Result<Self, NumError> {
        if end <= start {
            tracing::debug!("empty random range");
            return Err(NumError::EmptyRange);
        }
        let width = end.subtract(start);
        let bits = u32::try_from(width.bit_length()).map_err(|_| NumError::Overflow { bits: u32::BITS })?;
        let _span = tracing::trace_span!("random_between", bits).entered();
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let candidate = Self::random_bits(bits, source);
            if candidate < width {
                tracing::trace!(attempts, "accepted random draw");
                return Ok(candidate.add(start));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeats one byte forever.
    struct Constant(u8);

    impl EntropySource for Constant {
        fn fill_random_bytes(&mut self, buffer: &mut [u8]) {
            buffer.fill(self.0);
        }
    }

    #[test]
    fn random_bits_drops_excess() {
        assert_eq!(BigInt::random_bits(12, &mut Constant(0xFF)), BigInt::from_u64(0xFFF));
        assert_eq!(BigInt::random_bits(16, &mut Constant(0xAB)), BigInt::from_u64(0xABAB));
        assert!(BigInt::random_bits(0, &mut Constant(0xFF)).is_zero());
    }

    #[test]
    fn random_between_rejects_empty_range() {
        let five = BigInt::from_i64(5);
        assert_eq!(BigInt::random_between(&five, &five, &mut Constant(0)), Err(NumError::EmptyRange));
        assert_eq!(
            BigInt::random_between(&five, &BigInt::one(), &mut Constant(0)),
            Err(NumError::EmptyRange)
        );
    }

    #[test]
    fn random_between_offsets_by_start() {
        let start = BigInt::from_i64(-10);
        let end = BigInt::from_i64(10);
        assert_eq!(BigInt::random_between(&start, &end, &mut Constant(0)).unwrap(), start);
    }

    #[cfg(feature = "rand")]
    mod with_rng {
        use rand_core::{impls, RngCore};

        use super::*;

        /// SplitMix64, enough for reproducible draws.
        struct SplitMix(u64);

        impl RngCore for SplitMix {
            #[allow(clippy::cast_possible_truncation)]
            fn next_u32(&mut self) -> u32 {
                self.next_u64() as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
                let mut z = self.0;
                z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
                z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
                z ^ (z >> 31)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest);
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        #[test]
        fn draws_cover_small_range() {
            let mut rng = SplitMix(7);
            let (start, end) = (BigInt::from_i64(-3), BigInt::from_i64(4));
            let mut seen = [false; 7];
            for _ in 0..500 {
                let v = BigInt::random_between(&start, &end, &mut rng).unwrap();
                assert!(v >= start && v < end);
                let slot = usize::try_from(v.subtract(&start).to_i64().unwrap()).unwrap();
                seen[slot] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }

        #[test]
        fn os_entropy_stays_in_wide_range() {
            let start = BigInt::one().shift_left(200);
            let end = start.add(&BigInt::one().shift_left(130));
            for _ in 0..50 {
                let v = BigInt::random_between(&start, &end, &mut OsEntropy).unwrap();
                assert!(v >= start && v < end);
            }
        }
    }
}
