use std::sync::Arc;

use crate::{bigint::BigInt, sign::Sign, words::WordSeq};

/// Magnitude-only scratch buffer owned by a single arithmetic call.
///
/// Words are kept least significant first so the carry and borrow loops
/// index it directly. It is consumed by [`WorkBuffer::into_bigint`] and
/// never shared.
#[derive(Debug, Clone, Default)]
pub(crate) struct WorkBuffer {
    words: Vec<u32>,
}

impl WorkBuffer {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self { words: vec![0; len] }
    }

    /// Adopt a least-significant-first word vector.
    pub(crate) const fn from_le(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Copy any word sequence into a buffer of at least `len` words.
    pub(crate) fn copy_of<W: WordSeq + ?Sized>(src: &W, len: usize) -> Self {
        let len = len.max(src.word_len());
        Self { words: (0..len).map(|i| src.word(i)).collect() }
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: u32) {
        self.words[index] = value;
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Release the words, least significant first.
    pub(crate) fn into_le(self) -> Vec<u32> {
        self.words
    }

    /// Add one to the magnitude, growing by a word on carry out.
    pub(crate) fn increment(&mut self) {
        for w in &mut self.words {
            let (sum, carry) = w.overflowing_add(1);
            *w = sum;
            if !carry {
                return;
            }
        }
        self.words.push(1);
    }

    /// Freeze into a canonical value with the requested sign.
    ///
    /// Leading zero words are stripped; an all-zero buffer becomes zero
    /// regardless of `negative`.
    pub(crate) fn into_bigint(self, negative: bool) -> BigInt {
        let mut words = self.words;
        while words.last() == Some(&0) {
            words.pop();
        }
        if words.is_empty() {
            return BigInt::zero();
        }
        words.reverse();
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        BigInt::from_shared(Arc::from(words), sign)
    }
}

impl WordSeq for WorkBuffer {
    #[inline]
    fn word_len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn word(&self, index: usize) -> u32 {
        self.words.get(index).copied().unwrap_or(0)
    }
}
