// Seeded starfield generation.

use rand::prelude::*;

/// Inner and outer radius of the shell the stars are scattered across.
pub const STARFIELD_RADIUS_MIN: f32 = 25.0;
pub const STARFIELD_RADIUS_MAX: f32 = 50.0;

/// One point of the starfield: position plus a brightness in (0, 1].
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Star {
    pub position: [f32; 3],
    pub brightness: f32,
}

/// Scatter `count` stars uniformly over a spherical shell. Deterministic for
/// a given seed so the sky does not reshuffle across reloads.
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // Uniform direction: z in [-1, 1], azimuth in [0, tau)
            let z: f32 = rng.gen_range(-1.0..=1.0);
            let azimuth: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let r_xy = (1.0 - z * z).max(0.0).sqrt();
            let radius = rng.gen_range(STARFIELD_RADIUS_MIN..=STARFIELD_RADIUS_MAX);
            Star {
                position: [
                    r_xy * azimuth.cos() * radius,
                    r_xy * azimuth.sin() * radius,
                    z * radius,
                ],
                brightness: rng.gen_range(0.3..=1.0),
            }
        })
        .collect()
}
