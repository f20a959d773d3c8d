#![cfg(target_arch = "wasm32")]
use instant::Instant;
use orrery_core::CameraRig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod input;
mod plan;
mod render;
mod scroll;

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
    log::info!("orrery-web starting");

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
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Flight plan: regions, segments and their DOM sub-effects.
    let (mut director, bindings) = plan::build(&document);
    let hard_cuts = director.seal()?;
    if hard_cuts > 0 {
        log::info!("flight plan sealed with {hard_cuts} authored hard cut(s)");
    }
    let director = Rc::new(RefCell::new(director));

    // Pointer parallax signal for the rig.
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    input::wire_pointer(pointer.clone());

    // Scroll driver: writes the target slot through the director.
    scroll::wire(&document, director.clone(), bindings);

    // Frame driver: reads the slot, smooths, renders.
    let gpu = frame::init_gpu(&canvas).await;
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        director,
        rig: CameraRig::new(),
        gpu,
        pointer,
        canvas,
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
