// Scroll-to-scene mapping. Scroll state is the single source of truth for
// "current scene": keyboard and HUD jumps only ever request a scroll offset,
// which flows back through these functions on the next scroll event.

/// Normalized scroll progress in [0, 1].
///
/// Degenerate geometry (document no taller than the viewport) reads as 0
/// rather than an error; the computation is total.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

/// Map progress to a discrete scene index: `min(floor(p * n), n - 1)`.
///
/// The explicit clamp, not floor behavior at the boundary, guarantees that
/// progress exactly 1.0 resolves to the last valid index.
pub fn scene_index_for_progress(progress: f32, scene_count: usize) -> usize {
    debug_assert!(scene_count >= 1);
    let raw = (progress.clamp(0.0, 1.0) * scene_count as f32).floor() as usize;
    raw.min(scene_count - 1)
}

/// Scroll offset that lands inside scene `index`. Inverse of the selector,
/// used by keyboard navigation and HUD jump dots.
pub fn scroll_offset_for_index(index: usize, scene_count: usize, scrollable_height: f64) -> f64 {
    debug_assert!(scene_count >= 1);
    (index.min(scene_count - 1) as f64 / scene_count as f64) * scrollable_height.max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

/// Arrow keys (down/right advance, up/left retreat). Anything else is ignored.
pub fn nav_intent_for_key(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowDown" | "ArrowRight" => Some(NavIntent::Advance),
        "ArrowUp" | "ArrowLeft" => Some(NavIntent::Retreat),
        _ => None,
    }
}

/// Step the index by one in the requested direction, clamped so advancing
/// from the last scene and retreating from the first are no-ops.
pub fn step_index(current: usize, scene_count: usize, intent: NavIntent) -> usize {
    debug_assert!(scene_count >= 1);
    match intent {
        NavIntent::Advance => (current + 1).min(scene_count - 1),
        NavIntent::Retreat => current.saturating_sub(1),
    }
}
