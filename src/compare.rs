use std::cmp::Ordering;

use crate::{bigint::BigInt, sign::Sign, words::WordSeq};

/// Compare two magnitudes: longer is greater, equal lengths compare word by
/// word from the most significant end as unsigned values.
pub(crate) fn compare_magnitude<A, B>(x: &A, y: &B) -> Ordering
where
    A: WordSeq + ?Sized,
    B: WordSeq + ?Sized,
{
    let len = x.word_len();
    match len.cmp(&y.word_len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for i in (0..len).rev() {
        match x.word(i).cmp(&y.word(i)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

impl BigInt {
    /// Sign-then-magnitude ordering.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => match self.sign() {
                Sign::Positive => compare_magnitude(self, other),
                Sign::Negative => compare_magnitude(other, self),
                Sign::Zero => Ordering::Equal,
            },
            unequal => unequal,
        }
    }

    /// Compare absolute values.
    #[must_use]
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        compare_magnitude(self, other)
    }
}

/// Also supplies `min`, `max` and `clamp`, which hand back one of the
/// operands unchanged.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
