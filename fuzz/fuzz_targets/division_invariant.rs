#![no_main]

use crypt_num::BigInt;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    // First byte picks the split between dividend and divisor encodings.
    let Some((&split, rest)) = data.split_first() else { return };
    let split = usize::from(split).min(rest.len());
    let (Ok(d), Ok(v)) = (BigInt::from_bytes(&rest[..split]), BigInt::from_bytes(&rest[split..])) else {
        return;
    };
    let Ok((q, r)) = d.divide_and_remainder(&v) else {
        assert!(v.is_zero());
        return;
    };
    assert_eq!(v.multiply(&q).add(&r), d);
    assert_eq!(r.compare_magnitude(&v), Ordering::Less);
    assert!(r.is_zero() || r.sign() == d.sign());
    if v.is_positive() {
        let m = d.modulo(&v).unwrap();
        assert!(!m.is_negative() && m < v);
    }
});
