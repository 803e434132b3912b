// Orbit-style camera controller.
//
// Damped rotate/pan/zoom around a target point with toggleable capability
// flags. Inputs that arrive while a capability is disabled are dropped on
// the floor; `update` applies exponential damping toward the input targets
// once per frame.

use super::constants::{ORBIT_DAMPING, ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct OrbitControls {
    // Damped state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    // Where the inputs want the state to be
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    pan_target: Vec3,
    // Capability flags
    pub enabled: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub damping: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(5.5)
    }
}

impl OrbitControls {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            target: Vec3::ZERO,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: distance,
            pan_target: Vec3::ZERO,
            enabled: false,
            enable_zoom: false,
            enable_pan: false,
            damping: ORBIT_DAMPING as f32,
        }
    }

    /// Feed a pointer-drag delta (radians). Ignored while disabled.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        if !self.enabled {
            return;
        }
        self.target_yaw += d_yaw;
        // Stop short of the poles so the look-at up vector stays valid
        let limit = std::f32::consts::FRAC_PI_2 - 0.01;
        self.target_pitch = (self.target_pitch + d_pitch).clamp(-limit, limit);
    }

    /// Feed a wheel delta; positive zooms out. Ignored unless zoom is on.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled || !self.enable_zoom {
            return;
        }
        self.target_distance = (self.target_distance + delta)
            .clamp(ORBIT_DISTANCE_MIN as f32, ORBIT_DISTANCE_MAX as f32);
    }

    /// Feed a pan delta in view-plane units. Ignored unless pan is on.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !self.enabled || !self.enable_pan {
            return;
        }
        self.pan_target += Vec3::new(dx, dy, 0.0);
    }

    /// Close a fixed fraction of the gap to each input target. Call once per
    /// rendered frame.
    pub fn update(&mut self) {
        let a = self.damping;
        self.yaw += (self.target_yaw - self.yaw) * a;
        self.pitch += (self.target_pitch - self.pitch) * a;
        self.distance += (self.target_distance - self.distance) * a;
        self.target += (self.pan_target - self.target) * a;
    }

    /// Camera eye position implied by the current (damped) state.
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    /// World-to-view matrix for the current state.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }
}
