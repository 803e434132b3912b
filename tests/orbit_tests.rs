// Host-side tests for the orbit controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use logic::constants::*;
use logic::orbit::OrbitControls;

fn settled(c: &mut OrbitControls) {
    for _ in 0..200 {
        c.update();
    }
}

#[test]
fn disabled_controller_drops_all_input() {
    let mut c = OrbitControls::new(5.5);
    c.rotate(1.0, 1.0);
    c.zoom(2.0);
    c.pan(1.0, 1.0);
    settled(&mut c);
    assert_eq!(c.yaw, 0.0);
    assert_eq!(c.pitch, 0.0);
    assert!((c.distance - 5.5).abs() < 1e-4);
    assert_eq!(c.target, glam::Vec3::ZERO);
}

#[test]
fn zoom_and_pan_stay_gated_while_only_rotation_is_enabled() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.zoom(2.0);
    c.pan(1.0, 0.0);
    settled(&mut c);
    assert!((c.distance - 5.5).abs() < 1e-4);
    assert_eq!(c.target, glam::Vec3::ZERO);
}

#[test]
fn damping_converges_to_the_input_target() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.rotate(1.0, 0.5);
    settled(&mut c);
    assert!((c.yaw - 1.0).abs() < 1e-4, "yaw {}", c.yaw);
    assert!((c.pitch - 0.5).abs() < 1e-4, "pitch {}", c.pitch);
}

#[test]
fn single_update_closes_the_damping_fraction() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.rotate(1.0, 0.0);
    c.update();
    assert!((c.yaw - ORBIT_DAMPING as f32).abs() < 1e-6);
}

#[test]
fn zoom_clamps_to_the_distance_band() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.enable_zoom = true;
    c.zoom(1000.0);
    settled(&mut c);
    assert!((c.distance - ORBIT_DISTANCE_MAX as f32).abs() < 1e-3);
    c.zoom(-1000.0);
    settled(&mut c);
    assert!((c.distance - ORBIT_DISTANCE_MIN as f32).abs() < 1e-3);
}

#[test]
fn pitch_stops_short_of_the_poles() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.rotate(0.0, 10.0);
    settled(&mut c);
    assert!(c.pitch < std::f32::consts::FRAC_PI_2);
    c.rotate(0.0, -100.0);
    settled(&mut c);
    assert!(c.pitch > -std::f32::consts::FRAC_PI_2);
}

#[test]
fn eye_sits_at_the_orbit_distance() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.rotate(0.7, 0.3);
    settled(&mut c);
    let r = (c.eye() - c.target).length();
    assert!((r - c.distance).abs() < 1e-3, "radius {r}");
}

#[test]
fn pan_moves_the_look_target() {
    let mut c = OrbitControls::new(5.5);
    c.enabled = true;
    c.enable_pan = true;
    c.pan(0.5, -0.25);
    settled(&mut c);
    assert!((c.target.x - 0.5).abs() < 1e-4);
    assert!((c.target.y + 0.25).abs() < 1e-4);
}
