//! The growable sequence.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Bound, Deref, DerefMut, RangeBounds};
use core::ptr::{self, NonNull};
use core::slice;

use keel_core::{Cursor, FromCursor, IntoCursor, Just, Maybe, Nothing};

use crate::drain::Drain;
use crate::raw::RawSeq;

/// A growable sequence of `T` in one contiguous allocation.
///
/// `Seq` stores its elements in order and amortizes growth, so pushing at
/// the back is O(1). It dereferences to `[T]`, so every slice operation
/// applies; its own methods speak [`Maybe`] where a slice method would
/// speak `Option`.
///
/// # Example
///
/// ```
/// use keel_core::Just;
/// use keel_seq::Seq;
///
/// let mut seq = Seq::new();
/// seq.push(1);
/// seq.push(2);
/// seq.push(3);
///
/// assert_eq!(seq.get(1), Just(&2));
/// assert_eq!(seq.pop(), Just(3));
/// assert_eq!(&seq[..], [1, 2]);
/// ```
pub struct Seq<T> {
    pub(crate) buf: RawSeq<T>,
    pub(crate) len: usize,
}

impl<T> Seq<T> {
    /// Creates an empty sequence without allocating.
    #[inline]
    pub const fn new() -> Seq<T> {
        Seq {
            buf: RawSeq::new(),
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `cap` elements.
    #[inline]
    pub fn with_capacity(cap: usize) -> Seq<T> {
        Seq {
            buf: RawSeq::with_capacity(cap),
            len: 0,
        }
    }

    /// The number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the sequence can hold without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Ensures room for `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(self.len, additional);
    }

    /// A raw pointer to the first element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// A mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Sets the length directly.
    ///
    /// # Safety
    ///
    /// `new_len` must not exceed the capacity, and the first `new_len`
    /// elements must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Appends an element at the back.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.buf.reserve(self.len, 1);
        // SAFETY: reserve guarantees a slot at index len.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element, or [`Nothing`] when empty.
    #[inline]
    pub fn pop(&mut self) -> Maybe<T> {
        if self.len == 0 {
            return Nothing;
        }
        self.len -= 1;
        // SAFETY: the slot at the new len was initialized and is now
        // outside the live range, so this read uniquely owns it.
        Just(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting everything after it right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index {index} is out of bounds for length {len}"
        );
        self.buf.reserve(len, 1);
        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
        }
        self.len = len + 1;
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index {index} is out of bounds for length {len}"
        );
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Removes and returns the element at `index`, filling the hole with
    /// the last element instead of shifting. O(1), order not preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index {index} is out of bounds for length {len}"
        );
        unsafe {
            let base = self.buf.ptr();
            let value = base.add(index).read();
            ptr::copy(base.add(len - 1), base.add(index), 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops every element past the first `len`.
    ///
    /// A no-op if `len >= self.len()`. The length is updated before the
    /// tail drops, so a panicking `Drop` leaks the rest of the tail
    /// instead of double-dropping it.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail_len = self.len - len;
        self.len = len;
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// A reference to the first element, or [`Nothing`] when empty.
    #[inline]
    pub fn first(&self) -> Maybe<&T> {
        self.get(0)
    }

    /// A reference to the last element, or [`Nothing`] when empty.
    #[inline]
    pub fn last(&self) -> Maybe<&T> {
        match self.len {
            0 => Nothing,
            n => self.get(n - 1),
        }
    }

    /// A reference to the element at `index`, or [`Nothing`] out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Maybe<&T> {
        if index < self.len {
            // SAFETY: in bounds of the initialized prefix.
            Just(unsafe { &*self.buf.ptr().add(index) })
        } else {
            Nothing
        }
    }

    /// A mutable reference to the element at `index`, or [`Nothing`] out
    /// of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Maybe<&mut T> {
        if index < self.len {
            // SAFETY: in bounds of the initialized prefix.
            Just(unsafe { &mut *self.buf.ptr().add(index) })
        } else {
            Nothing
        }
    }

    /// Appends every item the cursor produces.
    pub fn extend<I: IntoCursor<Item = T>>(&mut self, items: I) {
        let mut cursor = items.into_cursor();
        self.reserve(cursor.size_hint().lower);
        while let Just(item) = cursor.next() {
            self.push(item);
        }
    }

    /// Removes the elements in `range` and hands them out through a
    /// cursor.
    ///
    /// Dropping the cursor drops whatever it has not yielded and closes
    /// the gap; [`Drain::keep_rest`] keeps the unyielded elements in place
    /// instead. Leaking the cursor leaves the sequence valid but missing
    /// the head of the drained range and the tail.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or past the end.
    pub fn drain<R: RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T> {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        assert!(start <= end, "drain range starts at {start} but ends at {end}");
        assert!(
            end <= len,
            "drain range end {end} is out of bounds for length {len}"
        );

        // The retained head is all the sequence owns while the cursor is
        // live; the drained window and the tail belong to the cursor.
        unsafe { self.set_len(start) };
        Drain {
            seq: NonNull::from(&mut *self),
            tail_start: end,
            tail_len: len - end,
            front: start,
            back: end,
            _marker: PhantomData,
        }
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: the first len slots are initialized; for zero-sized T
        // the dangling pointer is aligned and never dereferenced.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }
}

impl<T> DerefMut for Seq<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as in Deref, with unique access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}

impl<T> Drop for Seq<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
        // RawSeq frees the allocation.
    }
}

impl<T> Default for Seq<T> {
    #[inline]
    fn default() -> Seq<T> {
        Seq::new()
    }
}

impl<T: Clone> Clone for Seq<T> {
    fn clone(&self) -> Seq<T> {
        let mut out = Seq::with_capacity(self.len);
        for item in self.iter() {
            out.push(item.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    #[inline]
    fn eq(&self, other: &Seq<T>) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Seq<T> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self[..] == other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Seq<T> {
    #[inline]
    fn partial_cmp(&self, other: &Seq<T>) -> Option<core::cmp::Ordering> {
        self[..].partial_cmp(&other[..])
    }
}

impl<T: Ord> Ord for Seq<T> {
    #[inline]
    fn cmp(&self, other: &Seq<T>) -> core::cmp::Ordering {
        self[..].cmp(&other[..])
    }
}

impl<T: Hash> Hash for Seq<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self[..].hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(values: [T; N]) -> Seq<T> {
        let mut seq = Seq::with_capacity(N);
        for value in values {
            seq.push(value);
        }
        seq
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Seq<T> {
        let iter = iter.into_iter();
        let mut seq = Seq::with_capacity(iter.size_hint().0);
        for item in iter {
            seq.push(item);
        }
        seq
    }
}

impl<T> FromCursor<T> for Seq<T> {
    fn from_cursor<C: IntoCursor<Item = T>>(cursor: C) -> Seq<T> {
        let mut seq = Seq::new();
        seq.extend(cursor.into_cursor());
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop() {
        let mut seq = Seq::new();
        assert!(seq.is_empty());
        seq.push(1);
        seq.push(2);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.pop(), Just(2));
        assert_eq!(seq.pop(), Just(1));
        assert_eq!(seq.pop(), Nothing);
    }

    #[test]
    fn get_is_bounds_checked() {
        let seq = Seq::from([10, 20]);
        assert_eq!(seq.get(0), Just(&10));
        assert_eq!(seq.get(2), Nothing);
    }

    #[test]
    fn first_and_last() {
        let seq = Seq::from([10, 20, 30]);
        assert_eq!(seq.first(), Just(&10));
        assert_eq!(seq.last(), Just(&30));

        let empty: Seq<i32> = Seq::new();
        assert_eq!(empty.first(), Nothing);
        assert_eq!(empty.last(), Nothing);
    }

    #[test]
    fn collects_from_std_iterators() {
        let seq: Seq<i32> = (1..=4).collect();
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut seq = Seq::from([10, 20]);
        if let Just(v) = seq.get_mut(1) {
            *v = 21;
        }
        assert_eq!(seq, [10, 21]);
    }

    #[test]
    fn insert_shifts_right() {
        let mut seq = Seq::from([1, 3]);
        seq.insert(1, 2);
        assert_eq!(seq, [1, 2, 3]);
        seq.insert(3, 4);
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "insertion index 3 is out of bounds for length 2")]
    fn insert_past_end_panics() {
        let mut seq = Seq::from([1, 2]);
        seq.insert(3, 9);
    }

    #[test]
    fn remove_shifts_left() {
        let mut seq = Seq::from([1, 2, 3]);
        assert_eq!(seq.remove(1), 2);
        assert_eq!(seq, [1, 3]);
    }

    #[test]
    #[should_panic(expected = "removal index 2 is out of bounds for length 2")]
    fn remove_past_end_panics() {
        let mut seq = Seq::from([1, 2]);
        seq.remove(2);
    }

    #[test]
    fn swap_remove_fills_from_the_back() {
        let mut seq = Seq::from([1, 2, 3, 4]);
        assert_eq!(seq.swap_remove(1), 2);
        assert_eq!(seq, [1, 4, 3]);
    }

    #[test]
    fn truncate_and_clear_drop_the_tail() {
        let mut seq = Seq::from([1, 2, 3, 4]);
        seq.truncate(2);
        assert_eq!(seq, [1, 2]);
        seq.truncate(9);
        assert_eq!(seq, [1, 2]);
        seq.clear();
        assert!(seq.is_empty());
    }

    #[test]
    fn growth_keeps_contents() {
        let mut seq = Seq::with_capacity(2);
        for i in 0..100 {
            seq.push(i);
        }
        assert_eq!(seq.len(), 100);
        assert!(seq.capacity() >= 100);
        assert_eq!(seq.get(99), Just(&99));
    }

    #[test]
    fn slice_operations_apply() {
        let mut seq = Seq::from([3, 1, 2]);
        seq.sort();
        assert_eq!(&seq[..], [1, 2, 3]);
        assert!(seq.contains(&2));
    }

    #[test]
    fn extend_reserves_from_the_hint() {
        let mut seq = Seq::from([1, 2]);
        seq.extend(Seq::from([3, 4]));
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn clone_is_deep() {
        let seq = Seq::from([String::from("a"), String::from("b")]);
        let copy = seq.clone();
        assert_eq!(seq, copy);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Seq::from([1, 2]) < Seq::from([1, 3]));
        assert!(Seq::from([1, 2]) < Seq::from([1, 2, 0]));
    }

    #[test]
    fn zero_sized_elements_never_allocate() {
        let mut seq = Seq::new();
        for _ in 0..1000 {
            seq.push(());
        }
        assert_eq!(seq.len(), 1000);
        assert_eq!(seq.capacity(), usize::MAX);
        assert_eq!(seq.pop(), Just(()));
    }

    #[test]
    fn drop_runs_per_element() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut seq = Seq::new();
            seq.push(Counted);
            seq.push(Counted);
            seq.push(Counted);
        }
        assert_eq!(DROPS.load(Ordering::SeqCst), 3);
    }
}
