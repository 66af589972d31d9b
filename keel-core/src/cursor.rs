//! The pull-based iteration protocol and its adapter library.
//!
//! A [`Cursor`] produces one item per [`next`](Cursor::next) call and reports
//! the end of the sequence as [`Nothing`]. Nothing happens until `next` is
//! called: adapters such as [`map`](Cursor::map) and
//! [`filter`](Cursor::filter) are lazy and only describe work.
//!
//! Capabilities beyond forward iteration are separate traits, so adapters
//! can forward exactly what their inner cursor supports:
//!
//! ```text
//! Cursor              - next, size_hint
//!     ├── DoubleEndedCursor  - next_back, rfold
//!     └── ExactSizeCursor    - exact_size (trusted length)
//! ```
//!
//! Exhaustion is terminal: once a cursor has returned `Nothing` from `next`
//! it must keep returning `Nothing`, and adapters are entitled to assume so.
//! A fresh cursor must be re-obtained from its source to iterate again.
//!
//! Adapters never catch panics: a panic in a user closure unwinds through
//! the consuming call.
//!
//! # Example
//!
//! ```
//! use keel_core::cursor::{self, Cursor};
//! use keel_core::{Just, Nothing};
//!
//! let evens: Vec<i32> = cursor::from_fn({
//!     let mut n = 0;
//!     move || {
//!         n += 1;
//!         if n <= 6 { Just(n) } else { Nothing }
//!     }
//! })
//! .filter(|n| n % 2 == 0)
//! .map(|n| n * 10)
//! .collect();
//!
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```

mod accum;
mod adapters;
mod boxed;
mod compat;
mod sources;

pub use accum::{Product, Sum};
pub use adapters::{Chain, Filter, Map, Zip};
pub use boxed::{Boxed, BoxedDoubleEnded};
pub use compat::{from_std_iter, IterCursor, StdIter};
pub use sources::{empty, from_fn, once, once_with, Empty, FromFn, Once, OnceWith};

use crate::hint::SizeHint;
use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};

/// A pull-based cursor over a sequence of items.
///
/// See the [module documentation](self) for the protocol contract.
pub trait Cursor {
    /// The type of item the cursor produces.
    type Item;

    /// Advances the cursor and returns the next item, or [`Nothing`] once
    /// the sequence is exhausted.
    fn next(&mut self) -> Maybe<Self::Item>;

    /// Bounds on the remaining number of items.
    ///
    /// Must never overstate the lower bound or understate the upper bound.
    /// The default is the maximally conservative [`SizeHint::UNKNOWN`].
    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::UNKNOWN
    }

    // =========================================================================
    // Lazy adapters
    // =========================================================================

    /// Transforms every item through `f`.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Skips items rejected by `predicate`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Pairs items with those of `other`, stopping at the shorter side.
    #[inline]
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoCursor>
    where
        Self: Sized,
        U: IntoCursor,
    {
        Zip::new(self, other.into_cursor())
    }

    /// Concatenates `other` after this cursor.
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoCursor>
    where
        Self: Sized,
        U: IntoCursor<Item = Self::Item>,
    {
        Chain::new(self, other.into_cursor())
    }

    /// Borrows the cursor, letting adapters consume it partially.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erases the concrete cursor type behind a heap allocation.
    #[inline]
    fn boxed<'a>(self) -> Boxed<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Boxed::new(self)
    }

    /// Bridges to a [`core::iter::Iterator`], e.g. for `for` loops.
    #[inline]
    fn into_std_iter(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter::new(self)
    }

    // =========================================================================
    // Consumers
    // =========================================================================

    /// Folds every item into an accumulator, front to back.
    #[inline]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Just(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Calls `f` on every item.
    #[inline]
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| f(item));
    }

    /// Consumes the cursor, counting the items.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Consumes the cursor, returning the final item.
    #[inline]
    fn last(self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Nothing, |_, item| Just(item))
    }

    /// Skips `n` items, then returns the next one.
    #[inline]
    fn nth(&mut self, n: usize) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        for _ in 0..n {
            if self.next().is_nothing() {
                return Nothing;
            }
        }
        self.next()
    }

    /// Returns the first item accepted by `predicate`.
    #[inline]
    fn find<P>(&mut self, mut predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Just(item) = self.next() {
            if predicate(&item) {
                return Just(item);
            }
        }
        Nothing
    }

    /// Returns `true` if `predicate` accepts every item.
    #[inline]
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Just(item) = self.next() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `predicate` accepts any item.
    #[inline]
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Just(item) = self.next() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Gathers the items into a collection.
    #[inline]
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromCursor<Self::Item>,
    {
        B::from_cursor(self)
    }

    /// Adds the items together.
    ///
    /// A cursor of [`Maybe`]/[`Outcome`](crate::Outcome) items
    /// short-circuits to the first absent or failed item.
    #[inline]
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: Sum<Self::Item>,
    {
        S::sum(self)
    }

    /// Multiplies the items together, with the same short-circuiting as
    /// [`Cursor::sum`].
    #[inline]
    fn product<P>(self) -> P
    where
        Self: Sized,
        P: Product<Self::Item>,
    {
        P::product(self)
    }
}

/// A cursor that can also be consumed from the back.
///
/// The front and back ends never cross: a cursor consumed from both ends
/// yields each item exactly once, with no duplicates and no gaps.
pub trait DoubleEndedCursor: Cursor {
    /// Removes and returns the item at the back of the remaining sequence.
    fn next_back(&mut self) -> Maybe<Self::Item>;

    /// Folds every item into an accumulator, back to front.
    #[inline]
    fn rfold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Just(item) = self.next_back() {
            acc = f(acc, item);
        }
        acc
    }

    /// Erases the concrete cursor type, keeping back-end consumption.
    #[inline]
    fn boxed_double_ended<'a>(self) -> BoxedDoubleEnded<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedDoubleEnded::new(self)
    }
}

/// A cursor whose remaining item count is known exactly.
///
/// Implementations must keep `size_hint()` equal to
/// `SizeHint::exact(exact_size())` at all times.
pub trait ExactSizeCursor: Cursor {
    /// The exact number of items left.
    #[inline]
    fn exact_size(&self) -> usize {
        let hint = self.size_hint();
        debug_assert_eq!(hint.upper, Just(hint.lower));
        hint.lower
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Maybe<C::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

impl<C: DoubleEndedCursor + ?Sized> DoubleEndedCursor for &mut C {
    #[inline]
    fn next_back(&mut self) -> Maybe<C::Item> {
        (**self).next_back()
    }
}

impl<C: ExactSizeCursor + ?Sized> ExactSizeCursor for &mut C {
    #[inline]
    fn exact_size(&self) -> usize {
        (**self).exact_size()
    }
}

/// Conversion into a [`Cursor`].
///
/// Every cursor trivially implements this; containers implement it for
/// themselves and their reference types so adapters like
/// [`Cursor::chain`] accept either.
pub trait IntoCursor {
    /// The item type of the produced cursor.
    type Item;
    /// The concrete cursor type.
    type IntoCursor: Cursor<Item = Self::Item>;

    /// Produces a cursor over `self`.
    fn into_cursor(self) -> Self::IntoCursor;
}

impl<C: Cursor> IntoCursor for C {
    type Item = C::Item;
    type IntoCursor = C;

    #[inline]
    fn into_cursor(self) -> C {
        self
    }
}

/// Conversion from a cursor, the collection side of [`Cursor::collect`].
pub trait FromCursor<A>: Sized {
    /// Builds a value of this type from the items of `cursor`.
    fn from_cursor<C: IntoCursor<Item = A>>(cursor: C) -> Self;
}

impl<A> FromCursor<A> for alloc::vec::Vec<A> {
    fn from_cursor<C: IntoCursor<Item = A>>(cursor: C) -> Self {
        let mut cursor = cursor.into_cursor();
        let mut out = alloc::vec::Vec::with_capacity(cursor.size_hint().lower);
        while let Just(item) = cursor.next() {
            out.push(item);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::Maybe;
    use crate::outcome::Outcome;
    use crate::outcome::Outcome::{Failure, Success};

    fn count_up(to: i32) -> impl Cursor<Item = i32> {
        from_fn({
            let mut n = 0;
            move || {
                if n < to {
                    n += 1;
                    Just(n)
                } else {
                    Nothing
                }
            }
        })
    }

    #[test]
    fn map_transforms_lazily() {
        let mut calls = 0;
        let mut mapped = count_up(3).map(|v| {
            calls += 1;
            v * 2
        });
        assert_eq!(mapped.next(), Just(2));
        assert_eq!(mapped.next(), Just(4));
        drop(mapped);
        assert_eq!(calls, 2);
    }

    #[test]
    fn filter_drops_size_hint_lower() {
        let odd = once(1).chain(once(2)).filter(|v| v % 2 == 1);
        assert_eq!(odd.size_hint(), SizeHint { lower: 0, upper: Just(2) });
        let collected: Vec<i32> = odd.collect();
        assert_eq!(collected, vec![1]);
    }

    #[test]
    fn zip_stops_at_shorter() {
        let pairs: Vec<(i32, i32)> = count_up(2).zip(count_up(5)).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn chain_concatenates() {
        let all: Vec<i32> = count_up(2).chain(once(9)).collect();
        assert_eq!(all, vec![1, 2, 9]);
    }

    #[test]
    fn chain_back_drains_second_first() {
        let mut chained = once(1).chain(once(2));
        assert_eq!(chained.next_back(), Just(2));
        assert_eq!(chained.next_back(), Just(1));
        assert_eq!(chained.next_back(), Nothing);
    }

    #[test]
    fn chain_interleaved_front_and_back() {
        let mut chained = once(1).chain(once(2).chain(once(3)));
        assert_eq!(chained.next(), Just(1));
        assert_eq!(chained.next_back(), Just(3));
        assert_eq!(chained.next(), Just(2));
        assert_eq!(chained.next(), Nothing);
        assert_eq!(chained.next_back(), Nothing);
    }

    #[test]
    fn consumers() {
        assert_eq!(count_up(4).count(), 4);
        assert_eq!(count_up(4).last(), Just(4));
        assert_eq!(count_up(4).nth(2), Just(3));
        assert_eq!(count_up(4).nth(9), Nothing);
        assert_eq!(count_up(4).find(|&v| v > 2), Just(3));
        assert!(count_up(4).all(|v| v > 0));
        assert!(!count_up(4).all(|v| v > 1));
        assert!(count_up(4).any(|v| v == 4));
        assert_eq!(count_up(4).fold(0, |acc, v| acc * 10 + v), 1234);
    }

    #[test]
    fn by_ref_consumes_partially() {
        let mut cursor = count_up(5);
        let head: Vec<i32> = cursor.by_ref().map(|v| v).nth(1).into_cursor().collect();
        assert_eq!(head, vec![2]);
        assert_eq!(cursor.next(), Just(3));
    }

    #[test]
    fn sum_and_product() {
        assert_eq!(count_up(4).sum::<i32>(), 10);
        assert_eq!(count_up(4).product::<i32>(), 24);
    }

    #[test]
    fn sum_short_circuits_on_nothing() {
        let all_present = once(Just(1)).chain(once(Just(2)));
        assert_eq!(all_present.sum::<Maybe<i32>>(), Just(3));

        let mut pulled = 0;
        let holed = from_fn(move || {
            pulled += 1;
            match pulled {
                1 => Just(Just(1)),
                2 => Just(Nothing),
                // Never reached: the shunt stops pulling after the hole.
                _ => Just(Just(100)),
            }
        });
        assert_eq!(holed.sum::<Maybe<i32>>(), Nothing);
    }

    #[test]
    fn product_short_circuits_on_failure() {
        let ok: Outcome<i32, &str> = once(Success(2)).chain(once(Success(3))).product();
        assert_eq!(ok, Success(6));

        let bad: Outcome<i32, &str> = once(Success(2)).chain(once(Failure("snag"))).product();
        assert_eq!(bad, Failure("snag"));
    }

    #[test]
    fn collect_short_circuits() {
        let all: Maybe<Vec<i32>> = once(Just(1)).chain(once(Just(2))).collect();
        assert_eq!(all, Just(vec![1, 2]));

        let holed: Maybe<Vec<i32>> = once(Just(1)).chain(once(Nothing)).collect();
        assert_eq!(holed, Nothing);

        let failed: Outcome<Vec<i32>, &str> = once(Success(1)).chain(once(Failure("snag"))).collect();
        assert_eq!(failed, Failure("snag"));
    }

    #[test]
    fn boxed_erases_type() {
        let mut cursor = count_up(3).map(|v| v + 1).boxed();
        assert_eq!(cursor.size_hint(), SizeHint::UNKNOWN);
        assert_eq!(cursor.next(), Just(2));
        let rest: Vec<i32> = cursor.collect();
        assert_eq!(rest, vec![3, 4]);
    }

    #[test]
    fn boxed_double_ended_keeps_back_end() {
        let mut cursor = once(1).chain(once(2)).boxed_double_ended();
        assert_eq!(cursor.next_back(), Just(2));
        assert_eq!(cursor.next(), Just(1));
        assert_eq!(cursor.next(), Nothing);
    }

    #[test]
    fn std_bridges() {
        let doubled: Vec<i32> = count_up(3).into_std_iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);

        let total: i32 = from_std_iter(1..=4).sum();
        assert_eq!(total, 10);
        assert_eq!(from_std_iter(1..=4).size_hint(), SizeHint::exact(4));

        let mut back = from_std_iter([1, 2, 3]);
        assert_eq!(back.next_back(), Just(3));
        assert_eq!(back.next(), Just(1));
    }

    #[test]
    fn sources() {
        assert_eq!(once("one").count(), 1);
        assert_eq!(once_with(|| 5).next(), Just(5));
        assert_eq!(empty::<i32>().next(), Nothing);
        assert_eq!(empty::<i32>().size_hint(), SizeHint::exact(0));

        let mut backwards = once(7);
        assert_eq!(backwards.next_back(), Just(7));
        assert_eq!(backwards.next(), Nothing);
    }

    #[test]
    fn exact_size_decrements_by_one() {
        let mut cursor = from_std_iter([10, 20, 30]);
        assert_eq!(cursor.size_hint(), SizeHint::exact(3));
        cursor.next();
        assert_eq!(cursor.size_hint(), SizeHint::exact(2));
        cursor.next_back();
        assert_eq!(cursor.size_hint(), SizeHint::exact(1));
    }
}
