//! Window scroll binding: measures each region's document-space extent,
//! keeps the pinned sections' spacers sized, and turns scroll samples into
//! trigger events for the director.
//!
//! Pinning itself is the stylesheet's job (the pinned sections are
//! `position: sticky`); the engine's contribution is the spacer that
//! absorbs the virtual scroll distance and the extent math that maps it to
//! progress. Listeners stay registered for the page's lifetime — stale
//! callbacks are defused by the director's activation guard, not by
//! unregistering.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_core::{Director, RegionId, RegionTrigger, ScrollExtent};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::NAV_SCROLLED_AT;
use crate::dom;
use crate::plan::{ExtentRule, PageBinding};

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Compute a binding's document-space extent from the current layout.
fn measure(document: &web::Document, rule: ExtentRule, scroll: f32) -> Option<ScrollExtent> {
    let vh = viewport_height();
    match rule {
        ExtentRule::Pin { anchor, len } => {
            let el = dom::element_by_id(document, anchor)?;
            let top = dom::document_top(&el, scroll);
            Some(ScrollExtent::new(top, top + len))
        }
        ExtentRule::Span { from, to, to_frac } => {
            let from_el = dom::element_by_id(document, from)?;
            let to_el = dom::element_by_id(document, to)?;
            let start = dom::document_top(&from_el, scroll) - vh;
            let end = dom::document_top(&to_el, scroll) - vh * to_frac;
            Some(ScrollExtent::new(start, end))
        }
    }
}

/// Size each pinned section's spacer so the page gains the real scroll
/// distance the pin absorbs.
fn size_spacers(document: &web::Document, bindings: &[PageBinding]) {
    for binding in bindings {
        if let ExtentRule::Pin { anchor, len } = binding.rule {
            let spacer_id = format!("{anchor}-spacer");
            match dom::element_by_id(document, &spacer_id) {
                Some(spacer) => dom::set_height_px(&spacer, len),
                None => log::warn!("missing #{spacer_id}; pin distance comes from CSS alone"),
            }
        }
    }
}

fn remeasure(
    document: &web::Document,
    director: &mut Director,
    triggers: &mut [(RegionId, RegionTrigger, ExtentRule)],
) {
    let scroll = scroll_y();
    for (id, trigger, rule) in triggers.iter_mut() {
        if let Some(extent) = measure(document, *rule, scroll) {
            director.set_region_extent(*id, extent);
            trigger.set_extent(extent);
        }
    }
}

/// Wire the scroll and resize listeners and deliver an initial sample so a
/// page restored mid-scroll starts on the right region.
pub fn wire(
    document: &web::Document,
    director: Rc<RefCell<Director>>,
    bindings: Vec<PageBinding>,
) {
    size_spacers(document, &bindings);

    let scroll = scroll_y();
    let mut triggers: Vec<(RegionId, RegionTrigger, ExtentRule)> = Vec::new();
    for binding in &bindings {
        match measure(document, binding.rule, scroll) {
            Some(extent) => {
                director.borrow_mut().set_region_extent(binding.id, extent);
                triggers.push((binding.id, RegionTrigger::new(extent), binding.rule));
            }
            None => {
                if let Some(name) = director.borrow().region_name(binding.id) {
                    log::warn!("region '{name}' lost its anchors; it will not activate");
                }
            }
        }
    }
    let triggers = Rc::new(RefCell::new(triggers));

    // Scroll handler: one absolute sample fans out to every trigger; the
    // director's guard sorts out who may write.
    {
        let director = director.clone();
        let triggers = triggers.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let y = scroll_y();
            sample_all(&director, &triggers, y);
            update_navbar(y);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // Resize invalidates every measured extent.
    {
        let document = document.clone();
        let director = director.clone();
        let triggers = triggers.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            remeasure(
                &document,
                &mut director.borrow_mut(),
                &mut triggers.borrow_mut(),
            );
            sample_all(&director, &triggers, scroll_y());
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    let y = scroll_y();
    sample_all(&director, &triggers, y);
    update_navbar(y);
}

fn sample_all(
    director: &Rc<RefCell<Director>>,
    triggers: &Rc<RefCell<Vec<(RegionId, RegionTrigger, ExtentRule)>>>,
    scroll: f32,
) {
    let mut director = director.borrow_mut();
    for (id, trigger, _) in triggers.borrow_mut().iter_mut() {
        let events = trigger.sample(scroll);
        director.handle(*id, &events);
    }
}

fn update_navbar(scroll: f32) {
    if let Some(document) = dom::window_document() {
        if let Some(nav) = dom::element_by_id(&document, "navbar") {
            dom::set_class_enabled(&nav, "scrolled", scroll > NAV_SCROLLED_AT);
        }
    }
}
