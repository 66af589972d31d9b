//! Cursors over a [`Seq`]: borrowed, mutably borrowed, and consuming.

use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ptr;

use keel_core::{
    Cursor, DoubleEndedCursor, ExactSizeCursor, IntoCursor, Just, Maybe, Nothing, SizeHint,
};

use crate::raw::RawSeq;
use crate::seq::Seq;

// =============================================================================
// Items - borrowed cursor
// =============================================================================

/// A cursor over `&T` items of a [`Seq`].
pub struct Items<'a, T> {
    slice: &'a [T],
}

impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Items").field(&self.slice).finish()
    }
}

impl<T> Clone for Items<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Items { slice: self.slice }
    }
}

impl<'a, T> Cursor for Items<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Maybe<&'a T> {
        match self.slice.split_first() {
            Some((head, rest)) => {
                self.slice = rest;
                Just(head)
            }
            None => Nothing,
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.slice.len())
    }
}

impl<'a, T> DoubleEndedCursor for Items<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<&'a T> {
        match self.slice.split_last() {
            Some((tail, rest)) => {
                self.slice = rest;
                Just(tail)
            }
            None => Nothing,
        }
    }
}

impl<T> ExactSizeCursor for Items<'_, T> {}

// =============================================================================
// ItemsMut - mutably borrowed cursor
// =============================================================================

/// A cursor over `&mut T` items of a [`Seq`].
pub struct ItemsMut<'a, T> {
    slice: &'a mut [T],
}

impl<T: fmt::Debug> fmt::Debug for ItemsMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemsMut").field(&self.slice).finish()
    }
}

impl<'a, T> Cursor for ItemsMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Maybe<&'a mut T> {
        match mem::take(&mut self.slice).split_first_mut() {
            Some((head, rest)) => {
                self.slice = rest;
                Just(head)
            }
            None => Nothing,
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.slice.len())
    }
}

impl<'a, T> DoubleEndedCursor for ItemsMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<&'a mut T> {
        match mem::take(&mut self.slice).split_last_mut() {
            Some((tail, rest)) => {
                self.slice = rest;
                Just(tail)
            }
            None => Nothing,
        }
    }
}

impl<T> ExactSizeCursor for ItemsMut<'_, T> {}

// =============================================================================
// IntoItems - consuming cursor
// =============================================================================

/// A cursor that consumes a [`Seq`] and produces its elements by value.
pub struct IntoItems<T> {
    buf: RawSeq<T>,
    front: usize,
    back: usize,
}

impl<T> IntoItems<T> {
    /// The elements not yet produced, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [front, back) is initialized.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoItems").field(&self.as_slice()).finish()
    }
}

impl<T> Cursor for IntoItems<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        if self.front == self.back {
            return Nothing;
        }
        // SAFETY: front is inside the unyielded window; advancing it hands
        // ownership of the slot to the caller.
        let item = unsafe { ptr::read(self.buf.ptr().add(self.front)) };
        self.front += 1;
        Just(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.back - self.front)
    }
}

impl<T> DoubleEndedCursor for IntoItems<T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        if self.front == self.back {
            return Nothing;
        }
        self.back -= 1;
        // SAFETY: back now indexes the last unyielded slot.
        Just(unsafe { ptr::read(self.buf.ptr().add(self.back)) })
    }
}

impl<T> ExactSizeCursor for IntoItems<T> {}

impl<T> Drop for IntoItems<T> {
    fn drop(&mut self) {
        unsafe {
            let window = ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.front),
                self.back - self.front,
            );
            ptr::drop_in_place(window);
        }
        // RawSeq frees the allocation.
    }
}

// =============================================================================
// IntoCursor conversions
// =============================================================================

impl<T> IntoCursor for Seq<T> {
    type Item = T;
    type IntoCursor = IntoItems<T>;

    fn into_cursor(self) -> IntoItems<T> {
        let seq = ManuallyDrop::new(self);
        // SAFETY: self is forgotten, so the buffer's ownership moves into
        // the cursor without a double free.
        let buf = unsafe { ptr::read(&seq.buf) };
        IntoItems {
            buf,
            front: 0,
            back: seq.len,
        }
    }
}

impl<'a, T> IntoCursor for &'a Seq<T> {
    type Item = &'a T;
    type IntoCursor = Items<'a, T>;

    #[inline]
    fn into_cursor(self) -> Items<'a, T> {
        Items { slice: self }
    }
}

impl<'a, T> IntoCursor for &'a mut Seq<T> {
    type Item = &'a mut T;
    type IntoCursor = ItemsMut<'a, T>;

    #[inline]
    fn into_cursor(self) -> ItemsMut<'a, T> {
        ItemsMut { slice: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::FromCursor;

    #[test]
    fn borrowed_cursor_walks_both_ends() {
        let seq = Seq::from([1, 2, 3, 4]);
        let mut items = (&seq).into_cursor();
        assert_eq!(items.exact_size(), 4);
        assert_eq!(items.next(), Just(&1));
        assert_eq!(items.next_back(), Just(&4));
        assert_eq!(items.next(), Just(&2));
        assert_eq!(items.next_back(), Just(&3));
        assert_eq!(items.next(), Nothing);
        assert_eq!(items.next_back(), Nothing);
    }

    #[test]
    fn mutable_cursor_writes_through() {
        let mut seq = Seq::from([1, 2, 3]);
        let mut cursor = (&mut seq).into_cursor();
        while let Just(item) = cursor.next() {
            *item *= 10;
        }
        assert_eq!(seq, [10, 20, 30]);
    }

    #[test]
    fn consuming_cursor_moves_elements_out() {
        let seq = Seq::from([String::from("a"), String::from("b")]);
        let mut items = seq.into_cursor();
        assert_eq!(items.as_slice().len(), 2);
        assert_eq!(items.next(), Just(String::from("a")));
        assert_eq!(items.next_back(), Just(String::from("b")));
        assert_eq!(items.next(), Nothing);
    }

    #[test]
    fn dropping_a_consuming_cursor_drops_the_rest() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut seq = Seq::new();
        for _ in 0..5 {
            seq.push(Counted);
        }
        let mut items = seq.into_cursor();
        drop(items.next());
        drop(items.next());
        assert_eq!(DROPS.load(Ordering::SeqCst), 2);
        drop(items);
        assert_eq!(DROPS.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn collect_round_trips_through_adapters() {
        let seq = Seq::from([1, 2, 3, 4, 5]);
        let doubled_evens =
            Seq::from_cursor(seq.into_cursor().filter(|n| n % 2 == 0).map(|n| n * 10));
        assert_eq!(doubled_evens, [20, 40]);
    }
}
