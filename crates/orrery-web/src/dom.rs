use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

/// Document-space top of an element: viewport-relative rect plus the
/// current scroll offset.
#[inline]
pub fn document_top(el: &web::Element, scroll_y: f32) -> f32 {
    el.get_bounding_client_rect().top() as f32 + scroll_y
}

#[inline]
pub fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

/// Horizontal clip mask: keeps the span `[left, right]` (fractions of the
/// element width) visible. `(0, 0)` is fully hidden at the left edge,
/// `(0, 1)` fully revealed, `(1, 1)` hidden at the right edge.
pub fn set_clip_span(el: &web::Element, left: f32, right: f32) {
    let l = (left.clamp(0.0, 1.0) * 100.0).round();
    let r = (right.clamp(0.0, 1.0) * 100.0).round();
    let value = format!("polygon({l}% 0%, {r}% 0%, {r}% 100%, {l}% 100%)");
    set_style(el, "clip-path", &value);
}

#[inline]
pub fn set_translate_x_vw(el: &web::Element, vw: f32) {
    set_style(el, "transform", &format!("translateX({vw:.2}vw)"));
}

#[inline]
pub fn set_translate_x_percent(el: &web::Element, percent: f32) {
    set_style(el, "transform", &format!("translateX({percent:.2}%)"));
}

#[inline]
pub fn set_translate_y_percent(el: &web::Element, percent: f32) {
    set_style(el, "transform", &format!("translateY({percent:.2}%)"));
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    set_style(el, "visibility", if visible { "visible" } else { "hidden" });
}

#[inline]
pub fn set_height_px(el: &web::Element, px: f32) {
    set_style(el, "height", &format!("{px:.0}px"));
}

#[inline]
pub fn set_class_enabled(el: &web::Element, class: &str, enabled: bool) {
    let list = el.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
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
