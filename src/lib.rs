#![cfg(target_arch = "wasm32")]
//! Scroll-driven parallax landing page: three text layers and the globe
//! canvas scale with a smoothed scroll value while a WebGPU globe spins
//! behind them. Two cooperative loops run side by side (a ~60 Hz setTimeout
//! scroll-ease loop and a requestAnimationFrame scene loop), sharing only
//! the [`crate::core::AngleTap`] output port.

use crate::constants::{CAMERA_Z, CANVAS_ID, TOGGLE_BUTTON_ID};
use crate::core::{AngleTap, OrbitControls, OverlayToggle, ScrollState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // ---------------- Shared state ----------------
    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    let theta = Rc::new(RefCell::new(AngleTap::default()));
    let toggle = Rc::new(RefCell::new(OverlayToggle::default()));
    let controls = Rc::new(RefCell::new(OrbitControls::new(CAMERA_Z)));

    // Text starts visible with camera interaction off; the toggle button
    // flips both together
    overlay::apply(&document, &toggle.borrow(), &mut controls.borrow_mut());

    // The canvas doubles as the reference region the visibility gate tracks
    let region: web::Element = canvas.clone().into();

    events::wire_scroll(scroll.clone(), theta.clone(), region.clone());
    events::wire_toggle_button(&document, TOGGLE_BUTTON_ID, toggle, controls.clone());
    events::wire_orbit_input(&canvas, controls.clone());

    // One eager tick so the layers are positioned before the first timer slot
    scroll.borrow_mut().target = dom::page_y_offset(&window);
    frame::scroll_tick(&scroll, &theta, &region);

    // Scroll-ease loop at a fixed ~60 Hz cadence. The handle's stop() exists
    // for teardown; during normal page lifetime the loop runs until unload.
    let _scroll_loop = frame::start_scroll_loop(scroll, theta, region);

    // Scene loop driven by requestAnimationFrame
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        controls,
        gpu,
        last_instant: Instant::now(),
        surface_angle: 0.0,
        clouds_angle: 0.0,
        stars_angle: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
