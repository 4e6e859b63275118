use crate::core::{SceneId, SCENE_ORDER};
use crate::dom;
use crate::scroll;
use web_sys as web;

// Read-only reflection of the active scene: status line, title, ordinal
// progress and a jump dot per scene. Dots request a smooth scroll; they never
// write the scene index themselves.

fn dot_id(scene: SceneId) -> String {
    format!("hud-dot-{}", scene.name())
}

/// Wire one click handler per jump dot.
pub fn wire_dots(document: &web::Document) {
    for scene in SCENE_ORDER {
        let index = scene.index();
        dom::add_click_listener(document, &dot_id(scene), move || {
            scroll::smooth_scroll_to_scene(index, SCENE_ORDER.len());
        });
    }
}

/// Refresh every HUD element for the newly active scene.
pub fn update(document: &web::Document, scene: SceneId) {
    let cfg = scene.config();
    let count = SCENE_ORDER.len();
    let ordinal = scene.index() + 1;

    dom::set_text(document, "hud-status", cfg.hud_text);
    dom::set_text(document, "hud-title", cfg.title);
    dom::set_text(document, "hud-ordinal", &format!("{ordinal} / {count}"));

    let percent = (ordinal as f32 / count as f32) * 100.0;
    dom::set_style(
        document,
        "hud-progress-bar",
        "width",
        &format!("{percent:.0}%"),
    );

    for id in SCENE_ORDER {
        if id == scene {
            dom::add_class(document, &dot_id(id), "active");
        } else {
            dom::remove_class(document, &dot_id(id), "active");
        }
    }
}
