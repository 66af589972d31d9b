//! A success-or-error value.
//!
//! [`Outcome`] is the recoverable-failure half of the vocabulary: where
//! [`Maybe`](crate::Maybe) says "zero or one", `Outcome` says "this or a
//! typed reason why not". It shares the same philosophy: extraction in the
//! wrong state panics, every panicking operation has a non-panicking
//! sibling, and the value exposes itself as a zero-or-one item cursor.

use core::fmt;

use crate::maybe::Maybe::{Just, Nothing};
use crate::maybe::{Maybe, MaybeCursor};
use crate::cursor::IntoCursor;

use Outcome::{Failure, Success};

/// A value that is either a success payload or a failure payload.
///
/// # Example
///
/// ```
/// use keel_core::{Failure, Outcome, Success};
///
/// fn checked_halve(n: u32) -> Outcome<u32, &'static str> {
///     if n % 2 == 0 { Success(n / 2) } else { Failure("odd") }
/// }
///
/// assert_eq!(checked_halve(8).map(|v| v + 1), Success(5));
/// assert_eq!(checked_halve(7).unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    /// The operation succeeded.
    Success(T),
    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// The success payload, discarding a failure.
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Success(v) => Just(v),
            Failure(_) => Nothing,
        }
    }

    /// The failure payload, discarding a success.
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Success(_) => Nothing,
            Failure(e) => Just(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(e),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` on a failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(v) => v,
            Failure(e) => panic!("{message}: {e:?}"),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(v) => v,
            Failure(e) => panic!("called `Outcome::unwrap()` on a `Failure` value: {e:?}"),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics on a success.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(v) => panic!("called `Outcome::unwrap_failure()` on a `Success` value: {v:?}"),
            Failure(e) => e,
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(v) => v,
            Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Success(v) => v,
            Failure(e) => f(e),
        }
    }

    /// Returns the success payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(v) => v,
            Failure(_) => T::default(),
        }
    }

    /// Maps the success payload through `f`.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(v) => Success(f(v)),
            Failure(e) => Failure(e),
        }
    }

    /// Maps the failure payload through `f`.
    #[inline]
    pub fn map_failure<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        match self {
            Success(v) => Success(v),
            Failure(e) => Failure(f(e)),
        }
    }

    /// Chains a fallible computation over the success payload.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(v) => f(v),
            Failure(e) => Failure(e),
        }
    }

    /// Recovers from a failure with `f`.
    #[inline]
    pub fn or_else<G, F: FnOnce(E) -> Outcome<T, G>>(self, f: F) -> Outcome<T, G> {
        match self {
            Success(v) => Success(v),
            Failure(e) => f(e),
        }
    }

    /// A cursor over at most one shared reference to the success payload.
    #[inline]
    pub fn iter(&self) -> MaybeCursor<&T> {
        self.as_ref().success().into_cursor()
    }

    /// A cursor over at most one mutable reference to the success payload.
    #[inline]
    pub fn iter_mut(&mut self) -> MaybeCursor<&mut T> {
        self.as_mut().success().into_cursor()
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps the `Outcome` and `Maybe` layers, the inverse of
    /// [`Maybe::transpose`].
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Success(Just(v)) => Just(Success(v)),
            Success(Nothing) => Nothing,
            Failure(e) => Just(Failure(e)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Outcome<T, E> {
        match value {
            Ok(v) => Success(v),
            Err(e) => Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Outcome<T, E>) -> Result<T, E> {
        match value {
            Success(v) => Ok(v),
            Failure(e) => Err(e),
        }
    }
}

impl<T, E> IntoCursor for Outcome<T, E> {
    type Item = T;
    type IntoCursor = MaybeCursor<T>;

    #[inline]
    fn into_cursor(self) -> MaybeCursor<T> {
        self.success().into_cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn extraction() {
        let good: Outcome<i32, &str> = Success(3);
        assert_eq!(good.unwrap(), 3);

        let bad: Outcome<i32, &str> = Failure("aground");
        assert_eq!(bad.unwrap_or(0), 0);
        assert_eq!(bad.unwrap_or_else(|e| e.len() as i32), 7);
        assert_eq!(bad.unwrap_or_default(), 0);
        assert_eq!(bad.unwrap_failure(), "aground");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
    fn unwrap_failure_panics() {
        let bad: Outcome<i32, &str> = Failure("aground");
        bad.unwrap();
    }

    #[test]
    fn combinators() {
        let good: Outcome<i32, &str> = Success(3);
        assert_eq!(good.map(|v| v * 2), Success(6));
        assert_eq!(good.and_then(|v| Success::<_, &str>(v + 1)), Success(4));

        let bad: Outcome<i32, &str> = Failure("aground");
        assert_eq!(bad.map(|v| v * 2), Failure("aground"));
        assert_eq!(bad.map_failure(|e| e.len()), Failure(7));
        assert_eq!(bad.or_else(|_| Success::<_, ()>(0)), Success(0));
    }

    #[test]
    fn maybe_interplay() {
        let good: Outcome<i32, &str> = Success(3);
        assert_eq!(good.success(), Just(3));
        assert_eq!(good.failure(), Nothing);

        let nested: Outcome<Maybe<i32>, &str> = Success(Just(3));
        assert_eq!(nested.transpose(), Just(Success(3)));
        let empty: Outcome<Maybe<i32>, &str> = Success(Nothing);
        assert_eq!(empty.transpose(), Nothing);
    }

    #[test]
    fn cursor_yields_success_only() {
        let good: Outcome<i32, &str> = Success(3);
        let mut cursor = good.into_cursor();
        assert_eq!(cursor.next(), Just(3));
        assert_eq!(cursor.next(), Nothing);

        let bad: Outcome<i32, &str> = Failure("aground");
        assert_eq!(bad.into_cursor().next(), Nothing);
    }

    #[test]
    fn result_interop() {
        assert_eq!(Outcome::from(Ok::<_, ()>(1)), Success(1));
        assert_eq!(Outcome::<(), _>::from(Err("x")), Failure("x"));
        assert_eq!(Result::from(Success::<_, ()>(1)), Ok(1));
    }
}
