// Scroll-ease state and the per-tick parallax decision logic.
//
// Everything here is platform-free on purpose: the web frontend feeds in a
// ViewportWindow snapshot each tick and applies the returned FrameScales to
// the DOM, so the easing math stays testable without a live browser. No
// inner doc comment here: the file is include!-d by the host-side tests.

use super::constants::*;

/// Smoothed scroll tracker. `target` is overwritten by the scroll handler;
/// `current` chases it by `ease` per tick and converges asymptotically.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    pub current: f64,
    pub target: f64,
    pub ease: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            ease: SCROLL_EASE,
        }
    }
}

/// Read-only per-tick snapshot of where the tracked region sits in the
/// document. `region_start`/`region_end` are document-absolute positions of
/// the reference element's top and bottom edges (`pageYOffset + rect.top`
/// and `pageYOffset + rect.bottom`).
#[derive(Clone, Copy, Debug)]
pub struct ViewportWindow {
    pub viewport_height: f64,
    pub region_start: f64,
    pub region_end: f64,
}

/// Scale multipliers derived from one easing step, plus the increment for
/// the auxiliary camera angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameScales {
    pub text: f64,
    pub canvas: f64,
    pub theta_step: f64,
}

/// One exponential smoothing step toward `target`. The remaining gap shrinks
/// by a factor of `1 - ease` per call; at the fixpoint the value is returned
/// unchanged.
#[inline]
pub fn ease_toward(current: f64, target: f64, ease: f64) -> f64 {
    current + (target - current) * ease
}

/// True when any part of the tracked region overlaps the viewport that would
/// be visible once the scroll settles at `target`.
#[inline]
pub fn region_in_view(target: f64, win: &ViewportWindow) -> bool {
    !(target + win.viewport_height < win.region_start || target > win.region_end)
}

impl ScrollState {
    pub fn new(ease: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            ease,
        }
    }

    /// Run one tick of the scroll-ease loop.
    ///
    /// Returns `None` without touching any state when the tracked region is
    /// fully outside the viewport; the caller still re-arms the timer.
    pub fn tick(&mut self, win: &ViewportWindow) -> Option<FrameScales> {
        if !region_in_view(self.target, win) {
            return None;
        }
        self.current = ease_toward(self.current, self.target, self.ease);
        Some(FrameScales {
            text: 1.0 + self.current * TEXT_SCALE_COEFF,
            canvas: 1.0 + self.current * CANVAS_SCALE_COEFF,
            theta_step: self.current * CAMERA_DRIFT_COEFF,
        })
    }
}

/// Output port bridging the 2-D scroll motion into a 3-D rotation angle.
///
/// The scroll-ease loop advances it every applied tick; the renderer may
/// subscribe but currently does not. Keeping it as an explicit value (rather
/// than an ambient global) lets a future consumer attach deliberately.
#[derive(Clone, Copy, Debug, Default)]
pub struct AngleTap {
    radians: f64,
}

impl AngleTap {
    pub fn advance(&mut self, step: f64) {
        self.radians += step;
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }
}

/// Pure model of the text/controls toggle: showing the text overlay disables
/// camera interaction, hiding it enables zoom and pan. Two toggles restore
/// the original state exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayToggle {
    pub text_visible: bool,
    pub zoom_enabled: bool,
    pub pan_enabled: bool,
}

impl Default for OverlayToggle {
    fn default() -> Self {
        Self {
            text_visible: true,
            zoom_enabled: false,
            pan_enabled: false,
        }
    }
}

impl OverlayToggle {
    pub fn toggle(&mut self) {
        self.text_visible = !self.text_visible;
        self.zoom_enabled = !self.text_visible;
        self.pan_enabled = !self.text_visible;
    }
}
