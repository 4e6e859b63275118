#![cfg(target_arch = "wasm32")]
use crate::core::{CameraEndpoint, CameraRig, SceneId, SCENE_ORDER};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
pub mod core;
mod dom;
mod events;
mod frame;
mod hud;
mod overlay;
mod render;
mod scenes;
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
    log::info!("folio-web starting");

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
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Scroll is the single source of truth for the current scene.
    let progress = Rc::new(Cell::new(0.0_f32));
    scroll::wire_scroll(progress.clone());

    // Deep link: '#vision' and friends scroll straight to the named scene.
    // Unknown names fall closed to the entry scene.
    if let Ok(hash) = window.location().hash() {
        if let Some(name) = hash.strip_prefix('#') {
            if !name.is_empty() {
                let scene = SceneId::from_name(name);
                scroll::smooth_scroll_to_scene(scene.index(), SCENE_ORDER.len());
            }
        }
    }

    let current_index = Rc::new(Cell::new(0_usize));
    events::wire_global_keydown(current_index.clone());

    hud::wire_dots(&document);
    hud::update(&document, SceneId::Intro);
    overlay::show_scene(&document, SceneId::Intro);

    contact::wire_contact_form(&document)?;

    let gpu = frame::init_gpu(&canvas).await;

    let entry = SceneId::Intro.config();
    let rig = CameraRig::at(CameraEndpoint {
        position: entry.camera_position,
        target: entry.camera_target,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        progress,
        current_index,
        active: SceneId::Intro,
        rig,
        gpu,
        canvas,
        document,
        started_at: Instant::now(),
    }));
    // The experience lives for the whole page; the handle would stop the
    // loop on teardown.
    let _loop_handle = frame::start_loop(frame_ctx);

    Ok(())
}
