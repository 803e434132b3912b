use crate::constants::{ORBIT_PAN_PER_PX, ORBIT_ROTATE_PER_PX, ORBIT_ZOOM_PER_WHEEL};
use crate::core::{AngleTap, OrbitControls, OverlayToggle, ScrollState};
use crate::dom;
use crate::frame;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the window `scroll` listener: overwrite the easing target with the
/// live offset and run one eager tick so the overlay reacts immediately
/// instead of waiting for the next timer slot.
pub fn wire_scroll(
    state: Rc<RefCell<ScrollState>>,
    theta: Rc<RefCell<AngleTap>>,
    region: web::Element,
) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                state.borrow_mut().target = dom::page_y_offset(&w);
                frame::scroll_tick(&state, &theta, &region);
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire the toggle button: flip the overlay model, then push the new state
/// to the DOM and the camera controller in one step.
pub fn wire_toggle_button(
    document: &web::Document,
    button_id: &str,
    toggle: Rc<RefCell<OverlayToggle>>,
    controls: Rc<RefCell<OrbitControls>>,
) {
    dom::add_click_listener(document, button_id, move || {
        if let Some(doc) = dom::window_document() {
            let mut t = toggle.borrow_mut();
            t.toggle();
            overlay::apply(&doc, &t, &mut controls.borrow_mut());
        }
    });
}

/// Pointer and wheel handlers feeding the orbit controller. The controller
/// itself drops input while its capability flags are off, so the handlers
/// stay unconditional; the wheel handler only swallows the event when zoom
/// is live, otherwise the page keeps scrolling for the parallax effect.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, controls: Rc<RefCell<OrbitControls>>) {
    // pointermove: left drag rotates, right drag pans
    {
        let controls_m = controls.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let dx = ev.movement_x() as f32;
                let dy = ev.movement_y() as f32;
                let buttons = ev.buttons();
                let mut c = controls_m.borrow_mut();
                if buttons & 1 != 0 {
                    c.rotate(-dx * ORBIT_ROTATE_PER_PX, -dy * ORBIT_ROTATE_PER_PX);
                } else if buttons & 2 != 0 {
                    c.pan(-dx * ORBIT_PAN_PER_PX, dy * ORBIT_PAN_PER_PX);
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel: zoom
    {
        let controls_w = controls;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let mut c = controls_w.borrow_mut();
            if c.enabled && c.enable_zoom {
                c.zoom(ev.delta_y() as f32 * ORBIT_ZOOM_PER_WHEEL);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
