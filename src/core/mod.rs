// Platform-free scene and parallax logic. These modules avoid inner doc
// comments so the host-side tests can include! them directly.

/// Parallax and camera tuning constants.
pub mod constants;
/// UV-sphere mesh generation for the globe surface.
pub mod globe;
/// Damped orbit camera with toggleable rotate/zoom/pan capabilities.
pub mod orbit;
/// Scroll-ease state and the per-tick parallax decision logic.
pub mod parallax;
/// Seeded starfield generation.
pub mod starfield;

pub use orbit::OrbitControls;
pub use parallax::{AngleTap, FrameScales, OverlayToggle, ScrollState, ViewportWindow};

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
