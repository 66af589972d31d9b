//! Bridges between the [`Cursor`] protocol and [`core::iter::Iterator`].
//!
//! The two protocols are mechanically interchangeable; the bridges exist so
//! cursors can feed `for` loops and std combinators, and std iterators can
//! feed cursor consumers, without either side re-implementing the other.

use crate::cursor::{Cursor, DoubleEndedCursor, ExactSizeCursor};
use crate::hint::SizeHint;
use crate::maybe::Maybe;

/// Produces a cursor pulling from anything std-iterable.
#[inline]
pub fn from_std_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor {
        iter: iter.into_iter(),
    }
}

/// A [`Cursor`] backed by a std iterator. See [`from_std_iter`].
#[derive(Clone, Debug)]
pub struct IterCursor<I> {
    iter: I,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.iter.next().into()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.iter.size_hint();
        SizeHint {
            lower,
            upper: upper.into(),
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedCursor for IterCursor<I> {
    #[inline]
    fn next_back(&mut self) -> Maybe<I::Item> {
        self.iter.next_back().into()
    }
}

impl<I: ExactSizeIterator> ExactSizeCursor for IterCursor<I> {
    #[inline]
    fn exact_size(&self) -> usize {
        self.iter.len()
    }
}

/// A std iterator backed by a [`Cursor`]. See [`Cursor::into_std_iter`].
#[derive(Clone, Debug)]
pub struct StdIter<C> {
    cursor: C,
}

impl<C> StdIter<C> {
    #[inline]
    pub(crate) fn new(cursor: C) -> StdIter<C> {
        StdIter { cursor }
    }
}

impl<C: Cursor> Iterator for StdIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.cursor.size_hint();
        (hint.lower, hint.upper.into())
    }
}

impl<C: DoubleEndedCursor> DoubleEndedIterator for StdIter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.cursor.next_back().into()
    }
}

impl<C: ExactSizeCursor> ExactSizeIterator for StdIter<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.exact_size()
    }
}
