//! Folding consumers: `sum`, `product`, and short-circuiting `collect`.
//!
//! [`Sum`] and [`Product`] are implemented directly for the numeric
//! primitives, and transitively for [`Maybe`] and [`Outcome`] of anything
//! summable: a cursor of wrapped items folds the payloads and
//! short-circuits to the first absent or failed item, pulling nothing
//! further from the source.

use crate::cursor::{Cursor, FromCursor, IntoCursor};
use crate::maybe::Maybe;
use crate::maybe::Maybe::{Just, Nothing};
use crate::outcome::Outcome;
use crate::outcome::Outcome::{Failure, Success};

/// A type that can be built by adding up the items of a cursor.
pub trait Sum<A = Self>: Sized {
    /// Folds `cursor` with the additive identity and `+`.
    fn sum<C: Cursor<Item = A>>(cursor: C) -> Self;
}

/// A type that can be built by multiplying the items of a cursor.
pub trait Product<A = Self>: Sized {
    /// Folds `cursor` with the multiplicative identity and `*`.
    fn product<C: Cursor<Item = A>>(cursor: C) -> Self;
}

macro_rules! primitive_sum_product {
    ($($t:ty => $zero:expr, $one:expr;)*) => {$(
        impl Sum for $t {
            #[inline]
            fn sum<C: Cursor<Item = $t>>(cursor: C) -> $t {
                cursor.fold($zero, |acc, item| acc + item)
            }
        }

        impl Product for $t {
            #[inline]
            fn product<C: Cursor<Item = $t>>(cursor: C) -> $t {
                cursor.fold($one, |acc, item| acc * item)
            }
        }
    )*};
}

primitive_sum_product! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

// =============================================================================
// Shunts - unwrap items while recording the first missing one
// =============================================================================

// Adapts a cursor of Maybe<U> into a cursor of U that ends at the first
// Nothing, remembering that it did.
struct MaybeShunt<'a, C> {
    cursor: &'a mut C,
    absent: bool,
}

impl<U, C: Cursor<Item = Maybe<U>>> Cursor for MaybeShunt<'_, C> {
    type Item = U;

    #[inline]
    fn next(&mut self) -> Maybe<U> {
        match self.cursor.next() {
            Just(Just(item)) => Just(item),
            Just(Nothing) => {
                self.absent = true;
                Nothing
            }
            Nothing => Nothing,
        }
    }
}

struct OutcomeShunt<'a, C, E> {
    cursor: &'a mut C,
    failure: Maybe<E>,
}

impl<U, E, C: Cursor<Item = Outcome<U, E>>> Cursor for OutcomeShunt<'_, C, E> {
    type Item = U;

    #[inline]
    fn next(&mut self) -> Maybe<U> {
        match self.cursor.next() {
            Just(Success(item)) => Just(item),
            Just(Failure(e)) => {
                self.failure = Just(e);
                Nothing
            }
            Nothing => Nothing,
        }
    }
}

impl<T, U> Sum<Maybe<U>> for Maybe<T>
where
    T: Sum<U>,
{
    fn sum<C: Cursor<Item = Maybe<U>>>(mut cursor: C) -> Maybe<T> {
        let mut shunt = MaybeShunt {
            cursor: &mut cursor,
            absent: false,
        };
        let total = T::sum(&mut shunt);
        if shunt.absent { Nothing } else { Just(total) }
    }
}

impl<T, U> Product<Maybe<U>> for Maybe<T>
where
    T: Product<U>,
{
    fn product<C: Cursor<Item = Maybe<U>>>(mut cursor: C) -> Maybe<T> {
        let mut shunt = MaybeShunt {
            cursor: &mut cursor,
            absent: false,
        };
        let total = T::product(&mut shunt);
        if shunt.absent { Nothing } else { Just(total) }
    }
}

impl<T, U, E> Sum<Outcome<U, E>> for Outcome<T, E>
where
    T: Sum<U>,
{
    fn sum<C: Cursor<Item = Outcome<U, E>>>(mut cursor: C) -> Outcome<T, E> {
        let mut shunt = OutcomeShunt {
            cursor: &mut cursor,
            failure: Nothing,
        };
        let total = T::sum(&mut shunt);
        match shunt.failure {
            Just(e) => Failure(e),
            Nothing => Success(total),
        }
    }
}

impl<T, U, E> Product<Outcome<U, E>> for Outcome<T, E>
where
    T: Product<U>,
{
    fn product<C: Cursor<Item = Outcome<U, E>>>(mut cursor: C) -> Outcome<T, E> {
        let mut shunt = OutcomeShunt {
            cursor: &mut cursor,
            failure: Nothing,
        };
        let total = T::product(&mut shunt);
        match shunt.failure {
            Just(e) => Failure(e),
            Nothing => Success(total),
        }
    }
}

impl<A, V> FromCursor<Maybe<A>> for Maybe<V>
where
    V: FromCursor<A>,
{
    fn from_cursor<C: IntoCursor<Item = Maybe<A>>>(cursor: C) -> Maybe<V> {
        let mut cursor = cursor.into_cursor();
        let mut shunt = MaybeShunt {
            cursor: &mut cursor,
            absent: false,
        };
        let collected = V::from_cursor(&mut shunt);
        if shunt.absent { Nothing } else { Just(collected) }
    }
}

impl<A, V, E> FromCursor<Outcome<A, E>> for Outcome<V, E>
where
    V: FromCursor<A>,
{
    fn from_cursor<C: IntoCursor<Item = Outcome<A, E>>>(cursor: C) -> Outcome<V, E> {
        let mut cursor = cursor.into_cursor();
        let mut shunt = OutcomeShunt {
            cursor: &mut cursor,
            failure: Nothing,
        };
        let collected = V::from_cursor(&mut shunt);
        match shunt.failure {
            Just(e) => Failure(e),
            Nothing => Success(collected),
        }
    }
}
