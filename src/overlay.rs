//! DOM application of the text-overlay toggle.

use crate::constants::TEXT_LAYER_IDS;
use crate::core::{OrbitControls, OverlayToggle};
use crate::dom;
use web_sys as web;

/// Push a toggle state out to the three text layers and the camera
/// controller. Showing the text disables interaction; hiding it hands the
/// globe over to the user.
pub fn apply(document: &web::Document, state: &OverlayToggle, controls: &mut OrbitControls) {
    for id in TEXT_LAYER_IDS {
        dom::set_displayed(document, id, state.text_visible);
    }
    controls.enabled = !state.text_visible;
    controls.enable_zoom = state.zoom_enabled;
    controls.enable_pan = state.pan_enabled;
}
