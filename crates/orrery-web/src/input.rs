use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position normalized to \[-1, 1\] per axis, +y up. Fed to the
/// camera rig as the parallax signal.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub nx: f32,
    pub ny: f32,
}

#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (client_x / width) * 2.0 - 1.0;
    let ny = -((client_y / height) * 2.0 - 1.0);
    (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

pub fn wire_pointer(state: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let (nx, ny) = normalize_client(ev.client_x() as f32, ev.client_y() as f32, width, height);
        let mut s = state.borrow_mut();
        s.nx = nx;
        s.ny = ny;
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
