use crate::core::{nav_intent_for_key, step_index, SCENE_ORDER};
use crate::scroll;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, current_index: &Rc<Cell<usize>>) {
    let Some(intent) = nav_intent_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    let current = current_index.get();
    let next = step_index(current, SCENE_ORDER.len(), intent);
    // Clamped at either end of the sequence.
    if next != current {
        scroll::smooth_scroll_to_scene(next, SCENE_ORDER.len());
    }
}

/// Arrow-key navigation. Realized indirectly: the handler requests a scroll,
/// and the scroll tracker converts that back into a scene index, keeping a
/// single source of truth for the current scene.
pub fn wire_global_keydown(current_index: Rc<Cell<usize>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &current_index);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
