use crate::core::{scroll_offset_for_index, scroll_progress};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn viewport_metrics(window: &web::Window) -> (f64, f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_h = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    (scroll_y, document_h, viewport_h)
}

fn recompute(window: &web::Window, progress: &Rc<Cell<f32>>) {
    let (scroll_y, document_h, viewport_h) = viewport_metrics(window);
    progress.set(scroll_progress(scroll_y, document_h, viewport_h));
}

/// Observe the viewport scroll offset with a passive listener and keep
/// `progress` normalized to [0, 1]. Also computes once up front so the
/// initial frame sees a valid value.
pub fn wire_scroll(progress: Rc<Cell<f32>>) {
    let Some(window) = web::window() else {
        return;
    };
    recompute(&window, &progress);

    let window_for_handler = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        recompute(&window_for_handler, &progress);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Request a smooth scroll to the offset that selects scene `index`. The
/// tracker picks the change up on subsequent scroll events, so the scene
/// index itself is never written here.
pub fn smooth_scroll_to_scene(index: usize, scene_count: usize) {
    let Some(window) = web::window() else {
        return;
    };
    let (_, document_h, viewport_h) = viewport_metrics(&window);
    let top = scroll_offset_for_index(index, scene_count, document_h - viewport_h);
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
