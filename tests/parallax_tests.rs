// Host-side tests for the scroll-ease loop logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
}

use logic::constants::*;
use logic::parallax::*;

fn always_visible() -> ViewportWindow {
    ViewportWindow {
        viewport_height: 800.0,
        region_start: f64::MIN,
        region_end: f64::MAX,
    }
}

#[test]
fn easing_converges_monotonically() {
    for &(current, target) in &[(0.0, 500.0), (1000.0, 0.0), (-250.0, 250.0), (3.0, 3.5)] {
        for &ease in &[0.001, 0.1, 0.5, 0.999] {
            let next = ease_toward(current, target, ease);
            let before = (target - current).abs();
            let after = (target - next).abs();
            assert!(
                after < before,
                "|gap| must shrink: {current} -> {next} toward {target} (ease {ease})"
            );
        }
    }
}

#[test]
fn easing_is_idempotent_at_the_target() {
    let v = ease_toward(123.456, 123.456, 0.001);
    assert_eq!(v, 123.456);

    let mut state = ScrollState::new(0.001);
    state.current = 42.0;
    state.target = 42.0;
    let _ = state.tick(&always_visible());
    assert_eq!(state.current, 42.0);
}

#[test]
fn visibility_gate_boundary() {
    let win = ViewportWindow {
        viewport_height: 800.0,
        region_start: 1000.0,
        region_end: 2000.0,
    };
    // 150 + 800 = 950 < 1000: region still below the viewport
    assert!(!region_in_view(150.0, &win));
    // 300 + 800 = 1100 >= 1000 and 300 <= 2000: overlapping
    assert!(region_in_view(300.0, &win));
    // Scrolled past the region entirely
    assert!(!region_in_view(2000.5, &win));
    // Exactly on each boundary counts as visible
    assert!(region_in_view(200.0, &win)); // 200 + 800 == start
    assert!(region_in_view(2000.0, &win));
}

#[test]
fn gated_tick_mutates_nothing() {
    let win = ViewportWindow {
        viewport_height: 800.0,
        region_start: 5000.0,
        region_end: 6000.0,
    };
    let mut state = ScrollState::default();
    state.current = 10.0;
    state.target = 100.0;
    assert_eq!(state.tick(&win), None);
    assert_eq!(state.current, 10.0);
    assert_eq!(state.target, 100.0);
}

#[test]
fn scale_derivation_matches_coefficients() {
    let mut state = ScrollState::default();
    state.current = 1000.0;
    state.target = 1000.0;
    let scales = state.tick(&always_visible()).unwrap();
    assert!((scales.text - 1.5).abs() < 1e-12, "text {}", scales.text);
    assert!(
        (scales.canvas - 1.25).abs() < 1e-12,
        "canvas {}",
        scales.canvas
    );
    assert!((scales.theta_step - 1000.0 * CAMERA_DRIFT_COEFF).abs() < 1e-15);
}

#[test]
fn n_ticks_follow_the_closed_form() {
    let mut state = ScrollState::new(0.001);
    state.target = 500.0;
    let win = always_visible();
    let n = 1000;
    for _ in 0..n {
        let _ = state.tick(&win);
    }
    let expected = 500.0 * (1.0 - 0.999_f64.powi(n));
    assert!(
        (state.current - expected).abs() < 1e-6,
        "current {} expected {}",
        state.current,
        expected
    );
}

#[test]
fn angle_tap_accumulates_applied_ticks() {
    let mut tap = AngleTap::default();
    assert_eq!(tap.radians(), 0.0);

    let mut state = ScrollState::default();
    state.current = 400.0;
    state.target = 400.0;
    let win = always_visible();
    let mut expected = 0.0;
    for _ in 0..3 {
        if let Some(scales) = state.tick(&win) {
            tap.advance(scales.theta_step);
            expected += 400.0 * CAMERA_DRIFT_COEFF;
        }
    }
    assert!((tap.radians() - expected).abs() < 1e-15);
}

#[test]
fn toggle_flips_text_against_controls() {
    let mut t = OverlayToggle::default();
    assert!(t.text_visible);
    assert!(!t.zoom_enabled);
    assert!(!t.pan_enabled);

    t.toggle();
    assert!(!t.text_visible);
    assert!(t.zoom_enabled);
    assert!(t.pan_enabled);
}

#[test]
fn double_toggle_restores_original_state() {
    let original = OverlayToggle::default();
    let mut t = original;
    t.toggle();
    t.toggle();
    assert_eq!(t, original);
}
