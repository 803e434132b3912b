// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use logic::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factor_stays_in_the_open_unit_interval() {
    assert!(SCROLL_EASE > 0.0 && SCROLL_EASE < 1.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_coefficients_order_text_over_canvas_over_camera() {
    // Text layers scale fastest, the canvas container slower, and the
    // camera coupling is orders of magnitude below both
    assert!(TEXT_SCALE_COEFF > CANVAS_SCALE_COEFF);
    assert!(CANVAS_SCALE_COEFF > CAMERA_DRIFT_COEFF);
    assert!(CAMERA_DRIFT_COEFF > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_cadence_approximates_sixty_hertz() {
    assert!((SCROLL_TICK_MS - 16.666_666).abs() < 0.001);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_distance_band_is_well_formed() {
    assert!(ORBIT_DISTANCE_MIN > 0.0);
    assert!(ORBIT_DISTANCE_MAX > ORBIT_DISTANCE_MIN);
    // Default camera distance (5.5) must sit inside the clamp band
    assert!(ORBIT_DISTANCE_MIN < 5.5 && 5.5 < ORBIT_DISTANCE_MAX);
}
