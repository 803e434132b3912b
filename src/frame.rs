use crate::constants::{
    CANVAS_ID, CLOUDS_ROT_PER_SEC, STARS_ROT_PER_SEC, SURFACE_ROT_PER_SEC, TEXT_LAYER_IDS,
};
use crate::core::constants::SCROLL_TICK_MS;
use crate::core::{AngleTap, OrbitControls, ScrollState};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run one tick of the scroll-ease loop against the live DOM: snapshot the
/// viewport, let the pure state decide, then write the transforms. A gated
/// tick writes nothing and advances nothing.
pub fn scroll_tick(
    state: &Rc<RefCell<ScrollState>>,
    theta: &Rc<RefCell<AngleTap>>,
    region: &web::Element,
) {
    let Some(window) = web::window() else {
        return;
    };
    let win = dom::viewport_window(&window, region);
    let Some(scales) = state.borrow_mut().tick(&win) else {
        return;
    };
    if let Some(document) = window.document() {
        for id in TEXT_LAYER_IDS {
            dom::set_scale(&document, id, scales.text);
        }
        dom::set_scale(&document, CANVAS_ID, scales.canvas);
    }
    theta.borrow_mut().advance(scales.theta_step);
}

/// Handle to the self-rescheduling scroll-ease timer. The original effect
/// ran open-ended; the handle exposes `stop` so tests and page teardown can
/// end the loop cleanly.
pub struct ScrollLoop {
    cancelled: Rc<Cell<bool>>,
}

impl ScrollLoop {
    pub fn stop(&self) {
        self.cancelled.set(true);
    }
}

/// Start the fixed-cadence (~60 Hz) scroll-ease loop. Each pass ticks once
/// and re-arms itself with `setTimeout`; there is no drift correction, so
/// under host starvation the update rate simply degrades.
pub fn start_scroll_loop(
    state: Rc<RefCell<ScrollState>>,
    theta: Rc<RefCell<AngleTap>>,
    region: web::Element,
) -> ScrollLoop {
    let cancelled = Rc::new(Cell::new(false));
    let cancelled_tick = cancelled.clone();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            // Stop re-arming; the leaked closure is never invoked again
            return;
        }
        scroll_tick(&state, &theta, &region);
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let f: &js_sys::Function = cb.as_ref().unchecked_ref();
                let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f,
                    SCROLL_TICK_MS.round() as i32,
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                SCROLL_TICK_MS.round() as i32,
            );
        }
    }
    // Keep the closure alive for as long as the chain keeps re-arming
    std::mem::forget(tick);
    ScrollLoop { cancelled }
}

/// Scene-loop state: rotation accumulators for the globe group plus the GPU
/// renderer, advanced once per display refresh.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub surface_angle: f32,
    pub clouds_angle: f32,
    pub stars_angle: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.surface_angle += SURFACE_ROT_PER_SEC * dt_sec;
        self.clouds_angle += CLOUDS_ROT_PER_SEC * dt_sec;
        self.stars_angle += STARS_ROT_PER_SEC * dt_sec;

        let view = {
            let mut c = self.controls.borrow_mut();
            c.update();
            c.view()
        };

        if let Some(g) = &mut self.gpu {
            g.set_view(view);
            g.set_rotations(self.surface_angle, self.clouds_angle, self.stars_angle);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
