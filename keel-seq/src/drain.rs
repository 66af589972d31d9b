//! The draining cursor over a removed range of a [`Seq`].

use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::slice;

use keel_core::{Cursor, DoubleEndedCursor, ExactSizeCursor, Just, Maybe, Nothing, SizeHint};

use crate::seq::Seq;

/// A cursor that removes a range of elements from a [`Seq`].
///
/// Produced by [`Seq::drain`]. While the cursor is live the sequence's
/// length covers only the retained head; the drained window and the tail
/// past it are owned by the cursor. On drop, unyielded elements are
/// dropped and the tail slides down to close the gap. The tail slides even
/// when an element's `Drop` panics, so the sequence stays valid.
pub struct Drain<'a, T> {
    pub(crate) seq: NonNull<Seq<T>>,
    /// First tail element's index in the original sequence.
    pub(crate) tail_start: usize,
    pub(crate) tail_len: usize,
    /// Unyielded window, as absolute indices into the buffer.
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) _marker: PhantomData<&'a mut Seq<T>>,
}

impl<T> Drain<'_, T> {
    /// The elements not yet produced, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [front, back) is initialized and owned by the cursor.
        unsafe {
            let seq = self.seq.as_ref();
            slice::from_raw_parts(seq.as_ptr().add(self.front), self.back - self.front)
        }
    }

    /// Stops draining and returns every unyielded element to the sequence.
    ///
    /// Elements already produced stay removed; the rest slide down next to
    /// the retained head, followed by the tail.
    pub fn keep_rest(mut self) {
        let kept = self.back - self.front;
        unsafe {
            let seq = self.seq.as_mut();
            if kept > 0 && self.front != seq.len {
                let base = seq.as_mut_ptr();
                ptr::copy(base.add(self.front), base.add(seq.len), kept);
            }
        }
        // SAFETY: the kept elements now sit at the head's end.
        unsafe { self.restore_tail(kept) };
        core::mem::forget(self);
    }

    /// Slides the tail down to `seq.len + kept` and fixes the length.
    ///
    /// # Safety
    ///
    /// `kept` elements must be initialized immediately after the retained
    /// head, and the cursor must not touch the buffer again.
    pub(crate) unsafe fn restore_tail(&mut self, kept: usize) {
        let seq = unsafe { self.seq.as_mut() };
        let start = seq.len + kept;
        if self.tail_len > 0 && start != self.tail_start {
            unsafe {
                let base = seq.as_mut_ptr();
                ptr::copy(base.add(self.tail_start), base.add(start), self.tail_len);
            }
        }
        // SAFETY: head, kept range, and tail are contiguous and initialized.
        unsafe { seq.set_len(start + self.tail_len) };
    }
}

impl<T> Cursor for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        if self.front == self.back {
            return Nothing;
        }
        // SAFETY: front is inside the unyielded window; advancing it hands
        // ownership of the slot to the caller.
        let item = unsafe { ptr::read(self.seq.as_ref().as_ptr().add(self.front)) };
        self.front += 1;
        Just(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.back - self.front)
    }
}

impl<T> DoubleEndedCursor for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Maybe<T> {
        if self.front == self.back {
            return Nothing;
        }
        self.back -= 1;
        // SAFETY: back now indexes the last unyielded slot.
        Just(unsafe { ptr::read(self.seq.as_ref().as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeCursor for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        // Restores the tail even when an element's Drop panics below.
        struct TailGuard<'a, 'b, T>(&'b mut Drain<'a, T>);
        impl<T> Drop for TailGuard<'_, '_, T> {
            fn drop(&mut self) {
                // SAFETY: no kept elements; the window is dead either way.
                unsafe { self.0.restore_tail(0) };
            }
        }

        let guard = TailGuard(self);
        let (front, back) = (guard.0.front, guard.0.back);
        if front < back {
            unsafe {
                let base = guard.0.seq.as_mut().as_mut_ptr();
                let window = ptr::slice_from_raw_parts_mut(base.add(front), back - front);
                ptr::drop_in_place(window);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

// Safety: Drain owns the drained elements and holds the Seq exclusively
// through the lifetime in _marker.
unsafe impl<T: Send> Send for Drain<'_, T> {}
unsafe impl<T: Sync> Sync for Drain<'_, T> {}
