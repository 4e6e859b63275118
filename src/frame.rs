use crate::core::{scene_index_for_progress, CameraEndpoint, CameraRig, SceneId, SCENE_ORDER};
use crate::hud;
use crate::overlay;
use crate::render;
use crate::scenes;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub progress: Rc<Cell<f32>>,
    pub current_index: Rc<Cell<usize>>,
    pub active: SceneId,
    pub rig: CameraRig,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub started_at: Instant,
}

impl FrameContext {
    /// One animation tick: derive the scene index from scroll progress, react
    /// to index changes, advance the camera, draw.
    pub fn frame(&mut self) {
        let now_ms = self.started_at.elapsed().as_secs_f64() * 1000.0;

        let index = scene_index_for_progress(self.progress.get(), SCENE_ORDER.len());
        if index != self.current_index.get() {
            self.current_index.set(index);
            let scene = SceneId::from_index(index);
            self.active = scene;
            let cfg = scene.config();
            // Retarget from the current (possibly mid-flight) pose.
            self.rig.retarget(
                CameraEndpoint {
                    position: cfg.camera_position,
                    target: cfg.camera_target,
                },
                now_ms,
            );
            overlay::show_scene(&self.document, scene);
            hud::update(&self.document, scene);
        }

        self.rig.tick(now_ms);

        if let Some(g) = &mut self.gpu {
            g.set_camera(self.rig.position, self.rig.target);
            g.set_clear_color(self.active.config().background);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let sprites = scenes::compose(self.active, (now_ms / 1000.0) as f32);
            if let Err(e) = g.render(&sprites) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Handle for the self-rescheduling animation loop. Cancelling stops the
/// next reschedule, so a torn-down experience never mutates state from a
/// dangling callback.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.running.set(false);
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

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
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
    LoopHandle { running }
}
