// Element ids and scene tuning shared across the web frontend.

// DOM targets
pub const TEXT_BEHIND_ID: &str = "text-behind";
pub const TEXT_FRONT_ID: &str = "text-front";
pub const TEXT_BEHIND_BLUR_ID: &str = "text-behind-blur";
pub const CANVAS_ID: &str = "canvas";
pub const TOGGLE_BUTTON_ID: &str = "toggle-button";

/// The three overlay layers that share the text scale multiplier.
pub const TEXT_LAYER_IDS: [&str; 3] = [TEXT_BEHIND_ID, TEXT_FRONT_ID, TEXT_BEHIND_BLUR_ID];

// Camera
pub const CAMERA_Z: f32 = 5.5;
pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Globe group tilt around Z, matching an axial-tilt look
pub const GLOBE_TILT_RAD: f32 = 10.4 * std::f32::consts::PI / 180.0;

// Rotation rates (radians per second at the nominal 60 Hz frame rate)
pub const SURFACE_ROT_PER_SEC: f32 = 0.0002 * 60.0;
pub const CLOUDS_ROT_PER_SEC: f32 = 0.0004 * 60.0;
pub const STARS_ROT_PER_SEC: f32 = 0.0006 * 60.0;

// Scene content
pub const GLOBE_SECTORS: u32 = 64;
pub const GLOBE_STACKS: u32 = 64;
pub const GLOBE_RADIUS: f32 = 2.0;
pub const STAR_COUNT: usize = 1000;
pub const STARFIELD_SEED: u64 = 7;

// Pointer-to-orbit input scaling
pub const ORBIT_ROTATE_PER_PX: f32 = 0.005;
pub const ORBIT_ZOOM_PER_WHEEL: f32 = 0.002;
pub const ORBIT_PAN_PER_PX: f32 = 0.005;
