//! The raw allocation behind [`Seq`](crate::Seq).

use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, handle_alloc_error, realloc};

/// An owned, uninitialized buffer of `cap` slots of `T`.
///
/// Tracks only the allocation; element initialization and dropping are the
/// owner's responsibility. Zero-sized element types never allocate and
/// report `usize::MAX` capacity.
pub(crate) struct RawSeq<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawSeq<T> {
    pub(crate) const fn new() -> RawSeq<T> {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };
        RawSeq {
            ptr: NonNull::dangling(),
            cap,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> RawSeq<T> {
        let mut raw = RawSeq::new();
        if mem::size_of::<T>() != 0 && cap > 0 {
            raw.grow_to(cap);
        }
        raw
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Ensures room for `len + additional` slots.
    ///
    /// Growth at least doubles the capacity, so repeated single-element
    /// reservations amortize to O(1) per element.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the resulting
    /// layout is invalid.
    pub(crate) fn reserve(&mut self, len: usize, additional: usize) {
        debug_assert!(len <= self.cap);
        if additional <= self.cap - len {
            return;
        }
        let required = len.checked_add(additional).expect("capacity overflow");
        let new_cap = required.max(self.cap.saturating_mul(2)).max(4);
        self.grow_to(new_cap);
    }

    fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(mem::size_of::<T>() != 0);
        debug_assert!(new_cap > self.cap);

        let new_layout = Layout::array::<T>(new_cap).expect("capacity overflow");
        let ptr = if self.cap == 0 {
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        let Some(ptr) = NonNull::new(ptr) else {
            handle_alloc_error(new_layout)
        };
        self.ptr = ptr.cast();
        self.cap = new_cap;
    }
}

impl<T> Drop for RawSeq<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() != 0 && self.cap != 0 {
            let layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

// Safety: RawSeq owns its allocation outright.
unsafe impl<T: Send> Send for RawSeq<T> {}
unsafe impl<T: Sync> Sync for RawSeq<T> {}
