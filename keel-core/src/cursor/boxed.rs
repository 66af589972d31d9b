//! Type-erased cursors.
//!
//! A [`Boxed`] cursor hides the concrete adapter stack behind one heap
//! allocation and dynamic dispatch, so heterogeneous cursors can share a
//! type. Capabilities are erased with the type: use [`BoxedDoubleEnded`]
//! when back-end consumption must survive the erasure. The wrapper itself is
//! a single pointer and stays trivially relocatable regardless of what it
//! wraps.

use alloc::boxed::Box;

use crate::cursor::{Cursor, DoubleEndedCursor};
use crate::hint::SizeHint;
use crate::maybe::Maybe;
use crate::relocate::TriviallyRelocatable;

/// A heap-allocated cursor of unknown concrete type.
///
/// Created by [`Cursor::boxed`].
pub struct Boxed<'a, Item> {
    inner: Box<dyn Cursor<Item = Item> + 'a>,
}

impl<'a, Item> Boxed<'a, Item> {
    #[inline]
    pub(crate) fn new<C: Cursor<Item = Item> + 'a>(cursor: C) -> Boxed<'a, Item> {
        Boxed {
            inner: Box::new(cursor),
        }
    }
}

impl<Item> Cursor for Boxed<'_, Item> {
    type Item = Item;

    #[inline]
    fn next(&mut self) -> Maybe<Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

// SAFETY: a Boxed is a single owning pointer with no interior self-references.
unsafe impl<Item> TriviallyRelocatable for Boxed<'_, Item> {}

/// A heap-allocated double-ended cursor of unknown concrete type.
///
/// Created by [`DoubleEndedCursor::boxed_double_ended`].
pub struct BoxedDoubleEnded<'a, Item> {
    inner: Box<dyn DoubleEndedCursor<Item = Item> + 'a>,
}

impl<'a, Item> BoxedDoubleEnded<'a, Item> {
    #[inline]
    pub(crate) fn new<C: DoubleEndedCursor<Item = Item> + 'a>(
        cursor: C,
    ) -> BoxedDoubleEnded<'a, Item> {
        BoxedDoubleEnded {
            inner: Box::new(cursor),
        }
    }
}

impl<Item> Cursor for BoxedDoubleEnded<'_, Item> {
    type Item = Item;

    #[inline]
    fn next(&mut self) -> Maybe<Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<Item> DoubleEndedCursor for BoxedDoubleEnded<'_, Item> {
    #[inline]
    fn next_back(&mut self) -> Maybe<Item> {
        self.inner.next_back()
    }
}

// SAFETY: as for Boxed.
unsafe impl<Item> TriviallyRelocatable for BoxedDoubleEnded<'_, Item> {}
