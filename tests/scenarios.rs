#![allow(clippy::unwrap_used)]

use crypt_num::{BigInt, NumError, Sign};

fn int(v: i64) -> BigInt {
    BigInt::from_i64(v)
}

#[test]
fn zero_byte_is_canonical_zero() {
    let v = BigInt::from_bytes(&[0x00]).unwrap();
    assert_eq!(v, BigInt::zero());
    assert_eq!(v.sign(), Sign::Zero);
    assert!(v.magnitude().is_empty());
    assert_eq!(v.to_byte_array(), vec![0x00]);
}

#[test]
fn all_ones_byte_is_minus_one() {
    let v = BigInt::from_bytes(&[0xFF]).unwrap();
    assert_eq!(v, int(-1));
    assert_eq!(v.to_byte_array(), vec![0xFF]);
}

#[test]
fn mixed_sign_add() {
    assert_eq!(int(5).add(&int(-3)), int(2));
}

#[test]
fn truncating_division() {
    assert_eq!(int(7).divide_and_remainder(&int(2)).unwrap(), (int(3), int(1)));
    assert_eq!(int(-7).divide_and_remainder(&int(2)).unwrap(), (int(-3), int(-1)));
    assert_eq!(int(7).divide_and_remainder(&int(-2)).unwrap(), (int(-3), int(1)));
    assert_eq!(int(-7).modulo(&int(2)).unwrap(), int(1));
}

#[test]
fn small_power() {
    assert_eq!(int(2).pow(10).unwrap(), int(1024));
}

#[test]
fn shifts_by_ten() {
    assert_eq!(int(1).shift_left(10), int(1024));
    assert_eq!(int(1024).shift_right(10), int(1));
}

#[test]
fn error_taxonomy() {
    assert_eq!(BigInt::from_bytes(&[]), Err(NumError::ConstructionError));
    assert_eq!(int(1).divide(&int(0)), Err(NumError::DivisionByZero));
    assert_eq!(int(1).remainder(&int(0)), Err(NumError::DivisionByZero));
    assert_eq!(int(1).modulo(&int(0)), Err(NumError::NonPositiveModulus));
    assert_eq!(int(1).modulo(&int(-3)), Err(NumError::NonPositiveModulus));
    assert_eq!(int(2).pow(-2), Err(NumError::NegativeExponent { exponent: -2 }));
    assert_eq!(int(2).flip_bit(-9), Err(NumError::NegativeBitPosition { position: -9 }));
    assert_eq!(
        int(0x7FFF).to_zero_filled_byte_array(1),
        Err(NumError::FieldWidthOverflow { width: 1, needed: 2 })
    );
}

#[test]
fn errors_render_messages() {
    assert_eq!(NumError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        NumError::NegativeExponent { exponent: -4 }.to_string(),
        "negative exponent: -4"
    );
}

#[test]
fn reference_reuse_is_observable() {
    let a = BigInt::from_bytes(&hex::decode("0123456789abcdef0123456789").unwrap()).unwrap();
    assert!(a.add(&BigInt::zero()).shares_magnitude(&a));
    assert!(a.pow(1).unwrap().shares_magnitude(&a));
    assert!(a.negate().shares_magnitude(&a));
    assert!(a.clone().min(a.shift_left(1)).shares_magnitude(&a));
    let (q, r) = a.divide_and_remainder(&a.shift_left(3)).unwrap();
    assert!(q.is_zero());
    assert!(r.shares_magnitude(&a));
}

#[test]
fn constants_match_their_values() {
    assert_eq!(BigInt::zero(), int(0));
    assert_eq!(BigInt::one(), int(1));
    assert_eq!(BigInt::two(), int(2));
    assert_eq!(BigInt::minus_one(), int(-1));
}

#[test]
fn operators_read_naturally() {
    let a = int(40);
    let b = int(2);
    assert_eq!(&a + &b, int(42));
    assert_eq!(&a * &b - int(38), int(42));
    assert_eq!(-(&a << 1) >> 4, int(-5));
}

#[test]
fn values_cross_threads() {
    let shared = std::sync::Arc::new(BigInt::one().shift_left(300).subtract(&BigInt::one()));
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let v = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || v.multiply(&int(i)).divide(&v).unwrap())
        })
        .collect();
    for (i, h) in (0..4i64).zip(handles) {
        assert_eq!(h.join().unwrap(), int(i));
    }
}
