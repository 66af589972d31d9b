//! Lazy adapters over one or two inner cursors.

use crate::cursor::{Cursor, DoubleEndedCursor, ExactSizeCursor};
use crate::hint::SizeHint;
use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};

// =============================================================================
// Map
// =============================================================================

/// A cursor that transforms every item of an inner cursor.
///
/// Created by [`Cursor::map`].
#[derive(Clone, Debug)]
pub struct Map<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> Map<C, F> {
    #[inline]
    pub(crate) fn new(cursor: C, f: F) -> Map<C, F> {
        Map { cursor, f }
    }
}

impl<B, C: Cursor, F: FnMut(C::Item) -> B> Cursor for Map<C, F> {
    type Item = B;

    #[inline]
    fn next(&mut self) -> Maybe<B> {
        self.cursor.next().map(|item| (self.f)(item))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.cursor.size_hint()
    }
}

impl<B, C: DoubleEndedCursor, F: FnMut(C::Item) -> B> DoubleEndedCursor for Map<C, F> {
    #[inline]
    fn next_back(&mut self) -> Maybe<B> {
        self.cursor.next_back().map(|item| (self.f)(item))
    }
}

impl<B, C: ExactSizeCursor, F: FnMut(C::Item) -> B> ExactSizeCursor for Map<C, F> {}

// =============================================================================
// Filter
// =============================================================================

/// A cursor that skips items rejected by a predicate.
///
/// Created by [`Cursor::filter`]. Filtering can discard anything, so the
/// size hint keeps only the inner upper bound.
#[derive(Clone, Debug)]
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    #[inline]
    pub(crate) fn new(cursor: C, predicate: P) -> Filter<C, P> {
        Filter { cursor, predicate }
    }
}

impl<C: Cursor, P: FnMut(&C::Item) -> bool> Cursor for Filter<C, P> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Maybe<C::Item> {
        while let Just(item) = self.cursor.next() {
            if (self.predicate)(&item) {
                return Just(item);
            }
        }
        Nothing
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.cursor.size_hint().without_lower()
    }
}

impl<C: DoubleEndedCursor, P: FnMut(&C::Item) -> bool> DoubleEndedCursor for Filter<C, P> {
    #[inline]
    fn next_back(&mut self) -> Maybe<C::Item> {
        while let Just(item) = self.cursor.next_back() {
            if (self.predicate)(&item) {
                return Just(item);
            }
        }
        Nothing
    }
}

// =============================================================================
// Zip
// =============================================================================

/// A cursor pairing the items of two inner cursors, stopping at the shorter.
///
/// Created by [`Cursor::zip`].
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) fn new(a: A, b: B) -> Zip<A, B> {
        Zip { a, b }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Maybe<(A::Item, B::Item)> {
        match self.a.next() {
            Just(x) => match self.b.next() {
                Just(y) => Just((x, y)),
                Nothing => Nothing,
            },
            Nothing => Nothing,
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.a.size_hint().zip(self.b.size_hint())
    }
}

impl<A: ExactSizeCursor, B: ExactSizeCursor> ExactSizeCursor for Zip<A, B> {}

// =============================================================================
// Chain
// =============================================================================

/// A cursor concatenating two inner cursors end to end.
///
/// Created by [`Cursor::chain`]. Each side is dropped to `Nothing` once it
/// reports exhaustion, so a misbehaving inner cursor cannot resurrect the
/// sequence.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    front: Maybe<A>,
    back: Maybe<B>,
}

impl<A, B> Chain<A, B> {
    #[inline]
    pub(crate) fn new(front: A, back: B) -> Chain<A, B> {
        Chain {
            front: Just(front),
            back: Just(back),
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Maybe<A::Item> {
        if let Just(front) = &mut self.front {
            if let Just(item) = front.next() {
                return Just(item);
            }
            self.front = Nothing;
        }
        if let Just(back) = &mut self.back {
            if let Just(item) = back.next() {
                return Just(item);
            }
            self.back = Nothing;
        }
        Nothing
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let front = match &self.front {
            Just(cursor) => cursor.size_hint(),
            Nothing => SizeHint::exact(0),
        };
        let back = match &self.back {
            Just(cursor) => cursor.size_hint(),
            Nothing => SizeHint::exact(0),
        };
        front.chain(back)
    }
}

impl<A, B> DoubleEndedCursor for Chain<A, B>
where
    A: DoubleEndedCursor,
    B: DoubleEndedCursor<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Maybe<A::Item> {
        if let Just(back) = &mut self.back {
            if let Just(item) = back.next_back() {
                return Just(item);
            }
            self.back = Nothing;
        }
        if let Just(front) = &mut self.front {
            if let Just(item) = front.next_back() {
                return Just(item);
            }
            self.front = Nothing;
        }
        Nothing
    }
}
