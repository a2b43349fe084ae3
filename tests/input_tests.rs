// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn touch_events_are_recognised_by_type() {
    assert!(is_touch_event("touchstart"));
    assert!(is_touch_event("touchmove"));
    assert!(is_touch_event("touchend"));
}

#[test]
fn mouse_events_are_not_touch() {
    assert!(!is_touch_event("mousedown"));
    assert!(!is_touch_event("mousemove"));
    assert!(!is_touch_event(""));
}
