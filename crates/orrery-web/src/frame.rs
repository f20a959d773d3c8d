//! Per-frame loop: read the published target, smooth it, hand the pose to
//! the renderer. Decoupled from the scroll driver through the director's
//! target slot; this side only ever reads.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use orrery_core::{CameraRig, Director, FrameInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;
use crate::render;

pub struct FrameContext<'a> {
    pub director: Rc<RefCell<Director>>,
    pub rig: CameraRig,
    pub gpu: Option<render::GpuState<'a>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        let elapsed = (now - self.start_instant).as_secs_f32();
        self.last_instant = now;

        let Some(target) = self.director.borrow().target() else {
            return;
        };
        let pointer = *self.pointer.borrow();
        let pose = self.rig.step(
            target,
            FrameInput {
                elapsed,
                dt,
                pointer: Vec2::new(pointer.nx, pointer.ny),
            },
        );

        if let Some(gpu) = &mut self.gpu {
            gpu.set_camera(pose);
            let w = self.canvas.width();
            let h = self.canvas.height();
            gpu.resize_if_needed(w, h);
            if let Err(e) = gpu.render() {
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
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
