//! Vocabulary types for generic programming.
//!
//! This crate provides the small set of parameterized types the rest of the
//! workspace is built from: an optional value, a success-or-error value, a
//! tagged-union derive, and a pull-based iteration protocol that binds them
//! together.
//!
//! # Design Philosophy
//!
//! Recoverable failure is a value, never a panic:
//!
//! ```text
//! Maybe<T>       - zero or one values, absence is ordinary data
//! Outcome<T, E>  - success or a typed failure
//! Cursor         - "produce the next item or report the end" as Maybe
//! ```
//!
//! A panic is reserved for contract violations - reading a payload that is
//! not there, or an accessor used with the wrong tag. Every panicking
//! operation has a non-panicking sibling (`unwrap` vs `unwrap_or`, `as_x`
//! vs `get_x`), so callers choose where the boundary between "bug" and
//! "expected" sits.
//!
//! # Quick Start
//!
//! ```
//! use keel_core::{Cursor, IntoCursor, Just, Maybe, Nothing};
//!
//! let mut found: Maybe<i32> = Nothing;
//! assert!(found.is_nothing());
//!
//! found.insert(3);
//! assert_eq!(found.map(|v| v * 10), Just(30));
//!
//! // Maybe is a zero-or-one item cursor, so it composes with adapters.
//! let total: i32 = Just(4).into_cursor().chain(Just(5).into_cursor()).sum();
//! assert_eq!(total, 9);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`maybe`] | [`Maybe<T>`], the optional value |
//! | [`outcome`] | [`Outcome<T, E>`], the success-or-error value |
//! | [`choice`] | the [`Choice`] tagged-union trait and derive |
//! | [`cursor`] | the [`Cursor`] protocol, adapters, and sources |
//! | [`hint`] | [`SizeHint`], remaining-length knowledge |
//! | [`relocate`] | [`TriviallyRelocatable`], the bulk byte-move opt-in |
//! | [`num`] | checked arithmetic returning [`Maybe`] |
//!
//! # Feature Flags
//!
//! - `derive` (default) - re-export [`macro@Choice`] from `keel-derive`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod choice;
pub mod cursor;
pub mod hint;
pub mod maybe;
pub mod num;
pub mod outcome;
pub mod relocate;

pub use choice::Choice;
pub use cursor::{
    Boxed, BoxedDoubleEnded, Cursor, DoubleEndedCursor, ExactSizeCursor, FromCursor, IntoCursor,
    Product, Sum,
};
pub use hint::SizeHint;
pub use maybe::Maybe;
pub use maybe::Maybe::{Just, Nothing};
pub use outcome::Outcome;
pub use outcome::Outcome::{Failure, Success};
pub use relocate::TriviallyRelocatable;

#[cfg(feature = "derive")]
pub use keel_derive::Choice;
