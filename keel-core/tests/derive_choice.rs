//! Integration tests for `#[derive(Choice)]`.

#![cfg(feature = "derive")]

use std::sync::atomic::{AtomicUsize, Ordering};

use keel_core::{Choice, Just, Nothing};

#[derive(Choice, Debug, PartialEq, PartialOrd)]
enum Signal {
    Idle,
    Beacon(u32),
    Bearing(f64, f64),
}

#[test]
fn which_reports_the_active_tag() {
    assert_eq!(Signal::Idle.which(), SignalTag::Idle);
    assert_eq!(Signal::Beacon(1).which(), SignalTag::Beacon);
    assert_eq!(Signal::Bearing(0.0, 0.0).which(), SignalTag::Bearing);
}

#[test]
fn tags_order_by_declaration() {
    assert!(SignalTag::Idle < SignalTag::Beacon);
    assert!(SignalTag::Beacon < SignalTag::Bearing);
}

#[test]
fn is_queries_match_the_tag() {
    let signal = Signal::Beacon(9);
    assert!(signal.is_beacon());
    assert!(!signal.is_idle());
    assert!(!signal.is_bearing());
}

#[test]
fn get_returns_maybe_of_payload() {
    let mut signal = Signal::Beacon(9);
    assert_eq!(signal.get_beacon(), Just(&9));
    assert_eq!(signal.get_bearing(), Nothing);

    if let Just(v) = signal.get_beacon_mut() {
        *v += 1;
    }
    assert_eq!(signal, Signal::Beacon(10));
}

#[test]
fn as_returns_payload_references() {
    let mut signal = Signal::Bearing(1.5, -2.5);
    assert_eq!(signal.as_bearing(), (&1.5, &-2.5));

    let (lat, lon) = signal.as_bearing_mut();
    *lat = 0.0;
    *lon = 0.0;
    assert_eq!(signal, Signal::Bearing(0.0, 0.0));
}

#[test]
#[should_panic(expected = "choice is not `Signal::Beacon`")]
fn as_panics_on_tag_mismatch() {
    let signal = Signal::Idle;
    let _ = signal.as_beacon();
}

#[test]
fn into_moves_the_payload_out() {
    assert_eq!(Signal::Beacon(7).into_beacon(), 7);
    assert_eq!(Signal::Bearing(3.0, 4.0).into_bearing(), (3.0, 4.0));
}

#[test]
#[should_panic(expected = "choice is not `Signal::Bearing`")]
fn into_panics_on_tag_mismatch() {
    let _ = Signal::Beacon(7).into_bearing();
}

#[test]
fn set_switches_the_active_alternative() {
    let mut signal = Signal::Idle;
    signal.set_beacon(3);
    assert_eq!(signal, Signal::Beacon(3));
    signal.set_bearing(1.0, 2.0);
    assert_eq!(signal, Signal::Bearing(1.0, 2.0));
    signal.set_idle();
    assert_eq!(signal, Signal::Idle);
}

#[test]
fn unchecked_access_reads_the_payload() {
    let mut signal = Signal::Beacon(42);
    // SAFETY: the tag is Beacon.
    unsafe {
        assert_eq!(*signal.as_beacon_unchecked(), 42);
        *signal.as_beacon_unchecked_mut() = 43;
    }
    assert_eq!(signal, Signal::Beacon(43));
}

#[test]
fn set_drops_the_old_payload_exactly_once() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    struct Counted;
    impl Drop for Counted {
        fn drop(&mut self) {
            DROPS.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Choice)]
    enum Slot {
        Empty,
        Held(Counted),
    }

    let mut slot = Slot::Held(Counted);
    assert_eq!(DROPS.load(Ordering::SeqCst), 0);
    slot.set_empty();
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);
    drop(slot);
    assert_eq!(DROPS.load(Ordering::SeqCst), 1);
}

#[test]
fn multi_word_variants_get_snake_case_accessors() {
    #[derive(Choice, Debug, PartialEq)]
    enum Fix {
        NoFix,
        DeadReckoning(u8),
    }

    let mut fix = Fix::NoFix;
    assert!(fix.is_no_fix());
    fix.set_dead_reckoning(2);
    assert_eq!(fix.get_dead_reckoning(), Just(&2));
    assert_eq!(fix.which(), FixTag::DeadReckoning);
}
