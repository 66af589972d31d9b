//! Cursors built from plain values and closures.

use core::fmt;
use core::marker::PhantomData;

use crate::cursor::{Cursor, DoubleEndedCursor, ExactSizeCursor};
use crate::hint::SizeHint;
use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};

/// A cursor yielding exactly one item.
pub fn once<T>(value: T) -> Once<T> {
    Once { item: Just(value) }
}

/// A cursor yielding exactly one item, produced on demand.
pub fn once_with<T, F: FnOnce() -> T>(f: F) -> OnceWith<F> {
    OnceWith { f: Just(f) }
}

/// A cursor yielding no items.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// A cursor pulling items from a closure until it reports [`Nothing`].
///
/// The closure's exhaustion must be terminal, like any cursor's.
pub fn from_fn<T, F: FnMut() -> Maybe<T>>(f: F) -> FromFn<F> {
    FromFn { f }
}

/// See [`once`].
#[derive(Clone, Debug)]
pub struct Once<T> {
    item: Maybe<T>,
}

impl<T> Cursor for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.item.is_just() as usize)
    }
}

impl<T> DoubleEndedCursor for Once<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        self.item.take()
    }
}

impl<T> ExactSizeCursor for Once<T> {}

/// See [`once_with`].
#[derive(Clone, Debug)]
pub struct OnceWith<F> {
    f: Maybe<F>,
}

impl<T, F: FnOnce() -> T> Cursor for OnceWith<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.f.take().map(|f| f())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.f.is_just() as usize)
    }
}

impl<T, F: FnOnce() -> T> DoubleEndedCursor for OnceWith<F> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        self.f.take().map(|f| f())
    }
}

impl<T, F: FnOnce() -> T> ExactSizeCursor for OnceWith<F> {}

/// See [`empty`].
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Empty<T> {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        Nothing
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(0)
    }
}

impl<T> DoubleEndedCursor for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        Nothing
    }
}

impl<T> ExactSizeCursor for Empty<T> {}

/// See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<T, F: FnMut() -> Maybe<T>> Cursor for FromFn<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        (self.f)()
    }
}
