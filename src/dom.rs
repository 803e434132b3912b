use crate::core::ViewportWindow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Current vertical document scroll offset, in CSS pixels.
#[inline]
pub fn page_y_offset(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

/// Snapshot the viewport geometry the gate needs: viewport height plus the
/// document-absolute top/bottom of the reference element.
pub fn viewport_window(window: &web::Window, region: &web::Element) -> ViewportWindow {
    let scroll_y = page_y_offset(window);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = region.get_bounding_client_rect();
    ViewportWindow {
        viewport_height,
        region_start: scroll_y + rect.top(),
        region_end: scroll_y + rect.bottom(),
    }
}

/// Write a uniform 2-D scale transform. Missing elements are a silent no-op;
/// the effect is decorative and must never interrupt page rendering.
pub fn set_scale(document: &web::Document, element_id: &str, scale: f64) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let _ = html
                .style()
                .set_property("transform", &format!("scale({scale})"));
        }
    }
}

/// Toggle an element's `display` without clobbering its other styles.
pub fn set_displayed(document: &web::Document, element_id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let _ = if shown {
                html.style().remove_property("display").map(|_| ())
            } else {
                html.style().set_property("display", "none")
            };
        }
    }
}
