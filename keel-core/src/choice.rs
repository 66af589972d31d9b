//! Tagged unions over native enums.
//!
//! A "choice" is a closed set of named alternatives, each carrying its own
//! payload shape. Rust enums already are that; what this module adds is the
//! uniform operation surface over one: a first-class tag type, tag queries,
//! and per-alternative accessors with both panicking and [`Maybe`]-returning
//! forms, generated by `#[derive(Choice)]`.
//!
//! Because the accessors are generated onto a real enum, the compiler's own
//! move checking replaces any runtime moved-from state: a consuming
//! `into_*` takes the enum by value and the source is simply gone.
//! Equality and ordering are the enum's own derives, which compare the tag
//! first and the payload second.
//!
//! # Example
//!
//! ```
//! use keel_core::{Choice, Just, Nothing};
//!
//! #[derive(Choice, Debug, PartialEq)]
//! enum Signal {
//!     Idle,
//!     Beacon(u32),
//!     Bearing(f64, f64),
//! }
//!
//! let mut signal = Signal::Beacon(7);
//! assert_eq!(signal.which(), SignalTag::Beacon);
//! assert_eq!(signal.get_beacon(), Just(&7));
//! assert_eq!(signal.get_bearing(), Nothing);
//!
//! // Switching the active alternative drops the old payload.
//! signal.set_bearing(1.0, 2.0);
//! assert_eq!(signal.which(), SignalTag::Bearing);
//! assert_eq!(*signal.as_bearing().0, 1.0);
//! ```
//!
//! [`Maybe`]: crate::Maybe

use core::fmt;

/// A type with a closed set of tagged alternatives.
///
/// Implemented by `#[derive(Choice)]`, which also generates the [`Tag`]
/// enum itself and the per-alternative accessors. See the
/// [module documentation](self).
///
/// [`Tag`]: Choice::Tag
pub trait Choice {
    /// The tag type: one unit value per alternative, in declaration order.
    type Tag: Copy + PartialEq + Ord + fmt::Debug;

    /// The currently active tag.
    fn which(&self) -> Self::Tag;
}
