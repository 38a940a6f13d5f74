//! Indexed access over ordered sequences of 32-bit words.
//!
//! Every integer algorithm in the crate addresses words by significance:
//! index `0` is the least significant word whatever the storage order of
//! the implementor. Reads past the stored words yield `0`, which lets the
//! carry loops run over operands of unequal length without bounds checks.

/// Least-significant-first view over a sequence of `u32` words.
pub trait WordSeq {
    /// Number of stored words.
    fn word_len(&self) -> usize;

    /// Word at significance `index` (0 = least significant), `0` past the end.
    fn word(&self, index: usize) -> u32;

    #[inline]
    fn word_u64(&self, index: usize) -> u64 {
        u64::from(self.word(index))
    }

    /// Word at position `index` counted from the most significant end.
    #[inline]
    fn word_from_top(&self, index: usize) -> u32 {
        match self.word_len().checked_sub(index + 1) {
            Some(i) => self.word(i),
            None => 0,
        }
    }

    /// Number of words once leading zero words are disregarded.
    fn significant_len(&self) -> usize {
        let mut len = self.word_len();
        while len > 0 && self.word(len - 1) == 0 {
            len -= 1;
        }
        len
    }
}

/// Slices follow the canonical storage order: most significant word first.
impl WordSeq for [u32] {
    #[inline]
    fn word_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn word(&self, index: usize) -> u32 {
        if index < self.len() {
            self[self.len() - 1 - index]
        } else {
            0
        }
    }
}

/// Pack a shifted pair of adjacent words: the high word of `(hi:lo) << shift`.
///
/// `shift` must be below 32; a zero shift returns `hi`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn funnel_left(hi: u32, lo: u32, shift: u32) -> u32 {
    ((((hi as u64) << 32) | lo as u64) << shift >> 32) as u32
}

/// The low word of `(hi:lo) >> shift`. `shift` must be below 32.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn funnel_right(hi: u32, lo: u32, shift: u32) -> u32 {
    ((((hi as u64) << 32) | lo as u64) >> shift) as u32
}
