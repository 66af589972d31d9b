//! An optional value: either [`Just`] a payload or [`Nothing`].
//!
//! [`Maybe`] is the vocabulary for "zero or one". Absence is ordinary data,
//! not an error: the type orders `Nothing` before any `Just`, compares
//! payload-wise, and exposes itself as a zero-or-one item cursor so it
//! composes with the adapter library in [`crate::cursor`].
//!
//! Consuming operations take `self` by value, so a moved-from `Maybe` is a
//! compile error rather than a runtime state. In-place mutation goes through
//! [`Maybe::take`], [`Maybe::replace`], and [`Maybe::insert`], which always
//! leave the source in a well-defined state.
//!
//! Wrapping a type with a niche (references, `NonNull`, `NonZero*`) costs no
//! space: `Maybe<&T>` is pointer-sized.

use core::hint::unreachable_unchecked;

use crate::cursor::{Cursor, DoubleEndedCursor, ExactSizeCursor, IntoCursor};
use crate::hint::SizeHint;
use crate::outcome::Outcome;
use crate::outcome::Outcome::{Failure, Success};

use Maybe::{Just, Nothing};

/// A value that is either present or absent.
///
/// # Example
///
/// ```
/// use keel_core::{Just, Maybe, Nothing};
///
/// let mut slot: Maybe<&str> = Nothing;
/// assert_eq!(slot.replace("anchor"), Nothing);
/// assert_eq!(slot, Just("anchor"));
/// assert_eq!(slot.take(), Just("anchor"));
/// assert!(slot.is_nothing());
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value. Declared first so the derived ordering makes absence least.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(v) => Just(v),
            Nothing => Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Just(v) => Just(v),
            Nothing => Nothing,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Nothing`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Just(v) => v,
            Nothing => panic!("{}", message),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Nothing`. Prefer [`Maybe::unwrap_or`] or
    /// pattern matching when absence is expected.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Just(v) => v,
            Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Just(v) => v,
            Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Just(v) => v,
            Nothing => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Just(v) => v,
            Nothing => T::default(),
        }
    }

    /// Returns the contained value without checking for presence.
    ///
    /// # Safety
    ///
    /// The value must be `Just`. Calling this on `Nothing` is undefined
    /// behavior.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Just(v) => v,
            // SAFETY: the caller guarantees the value is `Just`.
            Nothing => unsafe { unreachable_unchecked() },
        }
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    /// Takes the value out, leaving `Nothing` behind.
    ///
    /// This is the canonical way to move a payload out of a field you intend
    /// to keep using afterward.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        core::mem::replace(self, Nothing)
    }

    /// Stores `value`, returning whatever was there before.
    #[inline]
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        core::mem::replace(self, Just(value))
    }

    /// Stores `value` unconditionally and returns a mutable reference to it.
    ///
    /// A previously present payload is dropped.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Just(value);
        match self {
            Just(v) => v,
            Nothing => unreachable!(),
        }
    }

    /// Returns a mutable reference to the payload, inserting `value` first
    /// if absent.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Returns a mutable reference to the payload, inserting `f()` first if
    /// absent.
    #[inline]
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.is_nothing() {
            *self = Just(f());
        }
        match self {
            Just(v) => v,
            Nothing => unreachable!(),
        }
    }

    /// Returns a mutable reference to the payload, inserting `T::default()`
    /// first if absent.
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Maps the payload through `f`, preserving `Nothing`.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Just(v) => Just(f(v)),
            Nothing => Nothing,
        }
    }

    /// Maps the payload through `f`, or returns `default` when absent.
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Just(v) => f(v),
            Nothing => default,
        }
    }

    /// Maps the payload through `f`, or computes a fallback from `default`.
    #[inline]
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Just(v) => f(v),
            Nothing => default(),
        }
    }

    /// Returns `other` if a value is present, `Nothing` otherwise.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Just(_) => other,
            Nothing => Nothing,
        }
    }

    /// Chains a fallible computation over the payload.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Just(v) => f(v),
            Nothing => Nothing,
        }
    }

    /// Keeps the payload only if `predicate` accepts it.
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Maybe<T> {
        match self {
            Just(v) if predicate(&v) => Just(v),
            _ => Nothing,
        }
    }

    /// Returns the value if present, `other` otherwise.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Just(v) => Just(v),
            Nothing => other,
        }
    }

    /// Returns the value if present, `f()` otherwise.
    #[inline]
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, f: F) -> Maybe<T> {
        match self {
            Just(v) => Just(v),
            Nothing => f(),
        }
    }

    /// Returns whichever of `self` and `other` is present, or `Nothing` if
    /// both or neither are.
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Just(v), Nothing) => Just(v),
            (Nothing, Just(v)) => Just(v),
            _ => Nothing,
        }
    }

    /// Pairs two present values, or returns `Nothing` if either is absent.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Just(a), Just(b)) => Just((a, b)),
            _ => Nothing,
        }
    }

    // =========================================================================
    // Outcome interplay
    // =========================================================================

    /// Converts to an [`Outcome`], mapping absence to `failure`.
    #[inline]
    pub fn ok_or<E>(self, failure: E) -> Outcome<T, E> {
        match self {
            Just(v) => Success(v),
            Nothing => Failure(failure),
        }
    }

    /// Converts to an [`Outcome`], mapping absence to `f()`.
    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Outcome<T, E> {
        match self {
            Just(v) => Success(v),
            Nothing => Failure(f()),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// A cursor over at most one shared reference to the payload.
    #[inline]
    pub fn iter(&self) -> MaybeCursor<&T> {
        MaybeCursor {
            item: self.as_ref(),
        }
    }

    /// A cursor over at most one mutable reference to the payload.
    #[inline]
    pub fn iter_mut(&mut self) -> MaybeCursor<&mut T> {
        MaybeCursor {
            item: self.as_mut(),
        }
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the referenced payload out.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|v| *v)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the referenced payload out.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(Clone::clone)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<A, B> Maybe<(A, B)> {
    /// Splits a pair payload into a pair of `Maybe`s, the inverse of
    /// [`Maybe::zip`].
    #[inline]
    pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
        match self {
            Just((a, b)) => (Just(a), Just(b)),
            Nothing => (Nothing, Nothing),
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps the `Maybe` and `Outcome` layers: an absent value becomes a
    /// successful absence, a failure stays a failure.
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Just(Success(v)) => Success(Just(v)),
            Just(Failure(e)) => Failure(e),
            Nothing => Success(Nothing),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Maybe<T> {
        match value {
            Some(v) => Just(v),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Option<T> {
        match value {
            Just(v) => Some(v),
            Nothing => None,
        }
    }
}

// =============================================================================
// MaybeCursor - a Maybe viewed as a zero-or-one item cursor
// =============================================================================

/// A cursor yielding the zero-or-one items of a [`Maybe`].
///
/// Created by [`Maybe::iter`], [`Maybe::iter_mut`], or consuming the `Maybe`
/// through [`IntoCursor`]. Double-ended and exactly sized.
#[derive(Clone, Debug)]
pub struct MaybeCursor<T> {
    item: Maybe<T>,
}

impl<T> Cursor for MaybeCursor<T> {
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

impl<T> DoubleEndedCursor for MaybeCursor<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        self.item.take()
    }
}

impl<T> ExactSizeCursor for MaybeCursor<T> {}

impl<T> IntoCursor for Maybe<T> {
    type Item = T;
    type IntoCursor = MaybeCursor<T>;

    #[inline]
    fn into_cursor(self) -> MaybeCursor<T> {
        MaybeCursor { item: self }
    }
}

impl<'a, T> IntoCursor for &'a Maybe<T> {
    type Item = &'a T;
    type IntoCursor = MaybeCursor<&'a T>;

    #[inline]
    fn into_cursor(self) -> MaybeCursor<&'a T> {
        self.iter()
    }
}

impl<'a, T> IntoCursor for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoCursor = MaybeCursor<&'a mut T>;

    #[inline]
    fn into_cursor(self) -> MaybeCursor<&'a mut T> {
        self.iter_mut()
    }
}
