//! Checked integer arithmetic returning [`Maybe`].
//!
//! The primitive `checked_*` methods return `Option`; these traits restate
//! them in the vocabulary of this crate so generic code can bound on "adds
//! without silently wrapping" and get a [`Maybe`] back. [`OverflowInteger`]
//! layers a sticky overflow flag on top, for arithmetic chains that want to
//! defer the check to the end instead of propagating at every step.

use core::ops::{Add, Mul, Sub};

use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};

/// Addition that reports overflow as [`Nothing`].
pub trait CheckedAdd: Sized {
    /// Returns `self + rhs`, or `Nothing` on overflow.
    fn checked_add(self, rhs: Self) -> Maybe<Self>;
}

/// Subtraction that reports overflow as [`Nothing`].
pub trait CheckedSub: Sized {
    /// Returns `self - rhs`, or `Nothing` on overflow.
    fn checked_sub(self, rhs: Self) -> Maybe<Self>;
}

/// Multiplication that reports overflow as [`Nothing`].
pub trait CheckedMul: Sized {
    /// Returns `self * rhs`, or `Nothing` on overflow.
    fn checked_mul(self, rhs: Self) -> Maybe<Self>;
}

/// Division that reports a zero divisor or overflow as [`Nothing`].
pub trait CheckedDiv: Sized {
    /// Returns `self / rhs`, or `Nothing` if `rhs` is zero or the quotient
    /// overflows.
    fn checked_div(self, rhs: Self) -> Maybe<Self>;
}

/// Negation that reports overflow as [`Nothing`].
pub trait CheckedNeg: Sized {
    /// Returns `-self`, or `Nothing` on overflow.
    fn checked_neg(self) -> Maybe<Self>;
}

macro_rules! checked_impl {
    ($trait_name:ident, $method:ident, $t:ty) => {
        impl $trait_name for $t {
            #[inline]
            fn $method(self, rhs: $t) -> Maybe<$t> {
                Maybe::from(<$t>::$method(self, rhs))
            }
        }
    };
}

macro_rules! checked_impls {
    ($($t:ty)*) => {$(
        checked_impl!(CheckedAdd, checked_add, $t);
        checked_impl!(CheckedSub, checked_sub, $t);
        checked_impl!(CheckedMul, checked_mul, $t);
        checked_impl!(CheckedDiv, checked_div, $t);

        impl CheckedNeg for $t {
            #[inline]
            fn checked_neg(self) -> Maybe<$t> {
                Maybe::from(<$t>::checked_neg(self))
            }
        }
    )*};
}

checked_impls! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

/// An integer carrying a sticky overflow flag.
///
/// Arithmetic on an overflowed `OverflowInteger` stays overflowed; the flag
/// is observed once at the end of a chain via [`OverflowInteger::finish`].
///
/// # Example
///
/// ```
/// use keel_core::num::OverflowInteger;
/// use keel_core::{Just, Nothing};
///
/// let chained = (OverflowInteger::new(100u8) * 2 + 55).finish();
/// assert_eq!(chained, Just(255));
///
/// let overflowed = (OverflowInteger::new(100u8) * 3 + 1).finish();
/// assert_eq!(overflowed, Nothing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowInteger<T> {
    value: Maybe<T>,
}

impl<T> OverflowInteger<T> {
    /// Wraps a valid, non-overflowed integer.
    #[inline]
    pub const fn new(value: T) -> OverflowInteger<T> {
        OverflowInteger { value: Just(value) }
    }

    /// Returns `true` if any step of the chain overflowed.
    #[inline]
    pub const fn is_overflowed(&self) -> bool {
        self.value.is_nothing()
    }

    /// The final value, or [`Nothing`] if any step overflowed.
    #[inline]
    pub fn finish(self) -> Maybe<T> {
        self.value
    }
}

impl<T: CheckedAdd> Add<T> for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn add(self, rhs: T) -> OverflowInteger<T> {
        OverflowInteger {
            value: self.value.and_then(|v| v.checked_add(rhs)),
        }
    }
}

impl<T: CheckedAdd> Add for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn add(self, rhs: OverflowInteger<T>) -> OverflowInteger<T> {
        OverflowInteger {
            value: self
                .value
                .zip(rhs.value)
                .and_then(|(a, b)| a.checked_add(b)),
        }
    }
}

impl<T: CheckedSub> Sub<T> for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn sub(self, rhs: T) -> OverflowInteger<T> {
        OverflowInteger {
            value: self.value.and_then(|v| v.checked_sub(rhs)),
        }
    }
}

impl<T: CheckedSub> Sub for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn sub(self, rhs: OverflowInteger<T>) -> OverflowInteger<T> {
        OverflowInteger {
            value: self
                .value
                .zip(rhs.value)
                .and_then(|(a, b)| a.checked_sub(b)),
        }
    }
}

impl<T: CheckedMul> Mul<T> for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn mul(self, rhs: T) -> OverflowInteger<T> {
        OverflowInteger {
            value: self.value.and_then(|v| v.checked_mul(rhs)),
        }
    }
}

impl<T: CheckedMul> Mul for OverflowInteger<T> {
    type Output = OverflowInteger<T>;

    #[inline]
    fn mul(self, rhs: OverflowInteger<T>) -> OverflowInteger<T> {
        OverflowInteger {
            value: self
                .value
                .zip(rhs.value)
                .and_then(|(a, b)| a.checked_mul(b)),
        }
    }
}

impl<T> From<T> for OverflowInteger<T> {
    #[inline]
    fn from(value: T) -> OverflowInteger<T> {
        OverflowInteger::new(value)
    }
}
