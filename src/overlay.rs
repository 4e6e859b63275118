use crate::core::{SceneId, SCENE_ORDER};
use web_sys as web;

// Each scene owns one `overlay-<name>` element in the page. Visibility is a
// `hidden` class toggle; CSS owns the bounded cross-fade, during which the
// outgoing overlay is already pointer-inert.

fn overlay_element(document: &web::Document, scene: SceneId) -> Option<web::Element> {
    document.get_element_by_id(&format!("overlay-{}", scene.name()))
}

/// Mount exactly one overlay: the one matching `scene`. Every other overlay
/// gets the `hidden` class.
pub fn show_scene(document: &web::Document, scene: SceneId) {
    for id in SCENE_ORDER {
        if let Some(el) = overlay_element(document, id) {
            let cl = el.class_list();
            if id == scene {
                _ = cl.remove_1("hidden");
            } else {
                _ = cl.add_1("hidden");
            }
        }
    }
}
