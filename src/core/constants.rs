// Parallax and camera tuning constants. These express intended behavior
// (scaling coefficients, easing decay, loop cadence) and keep magic numbers
// out of the code.

// Per-pixel scale coefficient for the three text overlay layers
pub const TEXT_SCALE_COEFF: f64 = 0.0005;

// Per-pixel scale coefficient for the canvas container (smaller -> depth)
pub const CANVAS_SCALE_COEFF: f64 = 0.00025;

// Coupling from smoothed scroll into the auxiliary camera angle (radians)
pub const CAMERA_DRIFT_COEFF: f64 = 0.000_000_1;

// Fraction of the remaining gap closed per tick; must stay in (0, 1)
pub const SCROLL_EASE: f64 = 0.001;

// Fixed re-arm delay for the scroll-ease loop (~60 Hz)
pub const SCROLL_TICK_MS: f64 = 1000.0 / 60.0;

// Orbit controller damping (fraction of remaining gap per update)
pub const ORBIT_DAMPING: f64 = 0.25;

// Orbit zoom distance clamp (world units)
pub const ORBIT_DISTANCE_MIN: f64 = 3.0;
pub const ORBIT_DISTANCE_MAX: f64 = 12.0;
