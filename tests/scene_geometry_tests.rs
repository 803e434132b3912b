// Host-side tests for the generated scene geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod logic {
    pub mod globe {
        include!("../src/core/globe.rs");
    }
    pub mod starfield {
        include!("../src/core/starfield.rs");
    }
}

use logic::globe;
use logic::starfield;

#[test]
fn globe_mesh_has_the_expected_grid_counts() {
    let m = globe::mesh(64, 64, 2.0);
    assert_eq!(m.vertices.len(), 65 * 65);
    // Pole rows contribute one triangle per sector, interior rows two
    assert_eq!(m.indices.len() as u32, 64 * (64 - 1) * 6);
}

#[test]
fn globe_indices_stay_in_range() {
    let m = globe::mesh(16, 12, 1.0);
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
    assert_eq!(m.indices.len() % 3, 0);
}

#[test]
fn globe_normals_are_unit_and_radial() {
    let m = globe::mesh(16, 12, 2.0);
    for v in &m.vertices {
        let n = glam::Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
        let p = glam::Vec3::from_array(v.position);
        assert!((p.length() - 2.0).abs() < 1e-4);
        // position is the normal pushed out to the radius
        assert!((p - n * 2.0).length() < 1e-4);
    }
}

#[test]
fn globe_uv_covers_the_unit_square() {
    let m = globe::mesh(8, 6, 1.0);
    for v in &m.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    // First row is the north pole, last row the south pole
    assert!(m.vertices[0].position[1] > 0.999);
    assert!(m.vertices.last().unwrap().position[1] < -0.999);
}

#[test]
fn starfield_is_deterministic_per_seed() {
    let a = starfield::generate(100, 7);
    let b = starfield::generate(100, 7);
    let c = starfield::generate(100, 8);
    assert_eq!(a.len(), 100);
    assert!(a
        .iter()
        .zip(&b)
        .all(|(x, y)| x.position == y.position && x.brightness == y.brightness));
    assert!(a.iter().zip(&c).any(|(x, y)| x.position != y.position));
}

#[test]
fn starfield_radii_and_brightness_stay_in_band() {
    for star in starfield::generate(500, 42) {
        let r = glam::Vec3::from_array(star.position).length();
        assert!(
            (starfield::STARFIELD_RADIUS_MIN - 1e-3..=starfield::STARFIELD_RADIUS_MAX + 1e-3)
                .contains(&r),
            "radius {r}"
        );
        assert!((0.3..=1.0).contains(&star.brightness));
    }
}
