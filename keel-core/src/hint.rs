//! Remaining-length knowledge for cursors.

use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};

/// Bounds on the number of items a cursor has left to produce.
///
/// The true remaining count `n` always satisfies `lower <= n`, and
/// `n <= upper` whenever `upper` is present. A cursor that cannot say
/// anything reports [`SizeHint::UNKNOWN`]; a cursor with trusted length
/// reports [`SizeHint::exact`] and keeps both bounds equal as it is
/// consumed.
///
/// # Example
///
/// ```
/// use keel_core::{Just, SizeHint};
///
/// let hint = SizeHint::exact(3);
/// assert_eq!(hint.lower, 3);
/// assert_eq!(hint.upper, Just(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeHint {
    /// The cursor will produce at least this many more items.
    pub lower: usize,
    /// If present, the cursor will produce at most this many more items.
    pub upper: Maybe<usize>,
}

impl SizeHint {
    /// The maximally conservative hint: zero or more items remain.
    pub const UNKNOWN: SizeHint = SizeHint {
        lower: 0,
        upper: Nothing,
    };

    /// A hint for a cursor whose remaining count is known exactly.
    #[inline]
    pub const fn exact(n: usize) -> SizeHint {
        SizeHint {
            lower: n,
            upper: Just(n),
        }
    }

    /// A hint with a lower bound only.
    #[inline]
    pub const fn at_least(n: usize) -> SizeHint {
        SizeHint {
            lower: n,
            upper: Nothing,
        }
    }

    /// The hint for two cursors consumed end to end.
    ///
    /// Lower bounds add with saturation; the upper bound survives only when
    /// both sides have one and the sum does not overflow.
    #[inline]
    pub fn chain(self, other: SizeHint) -> SizeHint {
        let upper = match (self.upper, other.upper) {
            (Just(a), Just(b)) => Maybe::from(a.checked_add(b)),
            _ => Nothing,
        };
        SizeHint {
            lower: self.lower.saturating_add(other.lower),
            upper,
        }
    }

    /// The hint for two cursors consumed in lockstep, stopping at the
    /// shorter.
    #[inline]
    pub fn zip(self, other: SizeHint) -> SizeHint {
        let upper = match (self.upper, other.upper) {
            (Just(a), Just(b)) => Just(a.min(b)),
            (Just(a), Nothing) => Just(a),
            (Nothing, Just(b)) => Just(b),
            (Nothing, Nothing) => Nothing,
        };
        SizeHint {
            lower: self.lower.min(other.lower),
            upper,
        }
    }

    /// Discards the lower bound, for adapters that may drop any item.
    #[inline]
    pub fn without_lower(self) -> SizeHint {
        SizeHint {
            lower: 0,
            upper: self.upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keeps_bounds_equal() {
        let hint = SizeHint::exact(5);
        assert_eq!(hint.lower, 5);
        assert_eq!(hint.upper, Just(5));
    }

    #[test]
    fn chain_adds_bounds() {
        let a = SizeHint::exact(2);
        let b = SizeHint::exact(3);
        assert_eq!(a.chain(b), SizeHint::exact(5));

        let unbounded = SizeHint::at_least(1);
        assert_eq!(a.chain(unbounded), SizeHint::at_least(3));
    }

    #[test]
    fn chain_saturates_on_overflow() {
        let a = SizeHint::exact(usize::MAX);
        let b = SizeHint::exact(2);
        let chained = a.chain(b);
        assert_eq!(chained.lower, usize::MAX);
        assert_eq!(chained.upper, Nothing);
    }

    #[test]
    fn zip_takes_minimum() {
        let a = SizeHint::exact(2);
        let b = SizeHint::exact(7);
        assert_eq!(a.zip(b), SizeHint::exact(2));

        let unknown = SizeHint::UNKNOWN;
        assert_eq!(a.zip(unknown).upper, Just(2));
        assert_eq!(a.zip(unknown).lower, 0);
    }

    #[test]
    fn without_lower_keeps_upper() {
        let hint = SizeHint::exact(4).without_lower();
        assert_eq!(hint.lower, 0);
        assert_eq!(hint.upper, Just(4));
    }
}
