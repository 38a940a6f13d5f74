//! Operator overloads over the infallible operations. Division has no
//! operator since it can fail.

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Shl, Shr, Sub};

use crate::bigint::BigInt;

macro_rules! impl_binary_op {
    ($imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }
        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }
        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }
    };
}
impl_binary_op!(Add, add, BigInt::add);
impl_binary_op!(Sub, sub, BigInt::subtract);
impl_binary_op!(Mul, mul, BigInt::multiply);
impl_binary_op!(BitAnd, bitand, BigInt::and);
impl_binary_op!(BitOr, bitor, BigInt::or);
impl_binary_op!(BitXor, bitxor, BigInt::xor);

macro_rules! impl_unary_op {
    ($imp:ident, $method:ident, $func:path) => {
        impl $imp for &BigInt {
            type Output = BigInt;
            fn $method(self) -> BigInt {
                $func(self)
            }
        }
        impl $imp for BigInt {
            type Output = BigInt;
            fn $method(self) -> BigInt {
                $func(&self)
            }
        }
    };
}
impl_unary_op!(Neg, neg, BigInt::negate);
impl_unary_op!(Not, not, BigInt::not);

macro_rules! impl_shift_op {
    ($imp:ident, $method:ident, $func:path) => {
        impl $imp<i64> for &BigInt {
            type Output = BigInt;
            fn $method(self, n: i64) -> BigInt {
                $func(self, n)
            }
        }
        impl $imp<i64> for BigInt {
            type Output = BigInt;
            fn $method(self, n: i64) -> BigInt {
                $func(&self, n)
            }
        }
    };
}
impl_shift_op!(Shl, shl, BigInt::shift_left);
impl_shift_op!(Shr, shr, BigInt::shift_right);
