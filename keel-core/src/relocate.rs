//! Ownership transfer by raw byte copy.
//!
//! In Rust every value can already be moved by copying its bytes, so the
//! containers in this workspace relocate buffers with `ptr::copy`
//! unconditionally. [`TriviallyRelocatable`] exists as the explicit,
//! self-declared form of that fact for code that must state it as a bound -
//! typically buffers handed across an FFI or type-erasure boundary, where
//! the declaration is an unchecked promise by the type's author rather than
//! something the compiler verifies.
//!
//! The marker has no runtime representation and querying it has no cost.

use core::marker::PhantomData;
use core::ptr::NonNull;

/// Types whose instances may be moved to a new address by copying
/// `size_of::<Self>()` bytes, after which the source must be treated as
/// logically destroyed and must not be dropped.
///
/// # Safety
///
/// The implementor asserts that a byte copy fully transfers ownership: the
/// type holds no address of itself and nothing observes its location. The
/// assertion is not checked by the compiler.
pub unsafe trait TriviallyRelocatable {}

/// Transfers `count` values from `src` to `dst` by byte copy.
///
/// The source values are logically moved from: they must not be read,
/// dropped, or otherwise used afterward. The ranges may overlap.
///
/// # Safety
///
/// `src` must be valid for reads of `count` values and `dst` for writes of
/// `count` values.
#[inline]
pub unsafe fn relocate<T: TriviallyRelocatable>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: forwarded to the caller.
    unsafe { core::ptr::copy(src, dst, count) }
}

macro_rules! trivially_relocatable {
    ($($t:ty),* $(,)?) => {$(
        // SAFETY: plain data with no location dependence.
        unsafe impl TriviallyRelocatable for $t {}
    )*};
}

trivially_relocatable! {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    crate::hint::SizeHint,
}

// SAFETY: pointers and references are addresses, not addressed.
unsafe impl<T: ?Sized> TriviallyRelocatable for *const T {}
unsafe impl<T: ?Sized> TriviallyRelocatable for *mut T {}
unsafe impl<T: ?Sized> TriviallyRelocatable for NonNull<T> {}
unsafe impl<'a, T: ?Sized> TriviallyRelocatable for &'a T {}
unsafe impl<'a, T: ?Sized> TriviallyRelocatable for &'a mut T {}
unsafe impl<T: ?Sized> TriviallyRelocatable for PhantomData<T> {}

// SAFETY: a Box is a single owning pointer.
unsafe impl<T> TriviallyRelocatable for alloc::boxed::Box<T> {}

// SAFETY: componentwise relocation is whole-value relocation.
unsafe impl<T: TriviallyRelocatable, const N: usize> TriviallyRelocatable for [T; N] {}
unsafe impl<T: TriviallyRelocatable> TriviallyRelocatable for crate::maybe::Maybe<T> {}
unsafe impl<A, B> TriviallyRelocatable for (A, B)
where
    A: TriviallyRelocatable,
    B: TriviallyRelocatable,
{
}
unsafe impl<A, B, C> TriviallyRelocatable for (A, B, C)
where
    A: TriviallyRelocatable,
    B: TriviallyRelocatable,
    C: TriviallyRelocatable,
{
}
unsafe impl<T, E> TriviallyRelocatable for crate::outcome::Outcome<T, E>
where
    T: TriviallyRelocatable,
    E: TriviallyRelocatable,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::MaybeUninit;

    // A non-trivial type opting in: it owns heap data, but holds no address
    // of itself.
    #[derive(Debug, PartialEq)]
    struct Buoy {
        label: String,
        depth: u32,
    }

    // SAFETY: String is an owning (pointer, cap, len) triple; nothing
    // observes the Buoy's own address.
    unsafe impl TriviallyRelocatable for Buoy {}

    #[test]
    fn bulk_relocation_preserves_value() {
        let original = Buoy {
            label: String::from("mid-channel"),
            depth: 12,
        };
        let witness = Buoy {
            label: String::from("mid-channel"),
            depth: 12,
        };

        let mut slots: [MaybeUninit<Buoy>; 2] = [MaybeUninit::new(original), MaybeUninit::uninit()];
        let (src, rest) = slots.split_at_mut(1);
        unsafe {
            relocate(src[0].as_ptr(), rest[0].as_mut_ptr(), 1);
            // src[0] is moved-from now and must not be dropped.
            let moved = rest[0].assume_init_read();
            assert_eq!(moved, witness);
        }
    }

    #[test]
    fn relocation_may_overlap() {
        let mut values = [1u64, 2, 3, 4];
        unsafe {
            relocate(values.as_ptr(), values.as_mut_ptr().add(1), 3);
        }
        assert_eq!(values[1..], [1, 2, 3]);
    }
}
