//! A growable, contiguous sequence built on the `keel-core` vocabulary.
//!
//! [`Seq<T>`] is the workspace's ordered container: one allocation,
//! amortized O(1) push, slice access through `Deref`, and fallible lookups
//! speaking [`Maybe`](keel_core::Maybe) instead of `Option`. It plugs into
//! the [`Cursor`](keel_core::Cursor) protocol on every side: borrowed,
//! mutably borrowed, and consuming cursors, a [`Drain`] cursor that removes
//! a range in place, and `FromCursor` so adapter chains collect back into a
//! `Seq`.
//!
//! # Quick Start
//!
//! ```
//! use keel_core::{Cursor, FromCursor, IntoCursor, Just};
//! use keel_seq::Seq;
//!
//! let mut seq = Seq::from([1, 2, 3, 4, 5]);
//!
//! // Remove the middle, keeping what the cursor does not consume.
//! let mut drain = seq.drain(1..4);
//! assert_eq!(drain.next(), Just(2));
//! drain.keep_rest();
//! assert_eq!(seq, [1, 3, 4, 5]);
//!
//! // Consume into an adapter chain and collect back.
//! let doubled = Seq::from_cursor(seq.into_cursor().map(|n| n * 2));
//! assert_eq!(doubled, [2, 6, 8, 10]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod cursor;
mod drain;
mod raw;
mod seq;

pub use cursor::{IntoItems, Items, ItemsMut};
pub use drain::Drain;
pub use seq::Seq;
