// Host-side tests for scroll/navigation math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

#[test]
fn progress_is_clamped_at_both_extremes() {
    assert_eq!(scroll_progress(-50.0, 4000.0, 800.0), 0.0);
    assert_eq!(scroll_progress(0.0, 4000.0, 800.0), 0.0);
    assert_eq!(scroll_progress(3200.0, 4000.0, 800.0), 1.0);
    assert_eq!(scroll_progress(99999.0, 4000.0, 800.0), 1.0);
}

#[test]
fn progress_midpoint() {
    let p = scroll_progress(1600.0, 4000.0, 800.0);
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn degenerate_geometry_yields_zero_not_an_error() {
    // Document no taller than the viewport: nothing to scroll.
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.0);
}

#[test]
fn scene_index_stays_in_range_for_all_progress() {
    for count in 1..=8 {
        let mut p = 0.0_f32;
        while p <= 1.0 {
            let idx = scene_index_for_progress(p, count);
            assert!(idx < count, "index {idx} out of range for count {count}");
            p += 0.01;
        }
        assert_eq!(scene_index_for_progress(1.0, count), count - 1);
    }
}

#[test]
fn scene_index_known_values() {
    assert_eq!(scene_index_for_progress(0.0, 5), 0);
    assert_eq!(scene_index_for_progress(0.41, 5), 2);
    assert_eq!(scene_index_for_progress(1.0, 5), 4);
}

#[test]
fn scene_index_boundary_between_scenes() {
    // 0.2 * 5 = 1.0 exactly: second scene begins.
    assert_eq!(scene_index_for_progress(0.2, 5), 1);
    assert_eq!(scene_index_for_progress(0.199, 5), 0);
}

#[test]
fn offset_for_index_round_trips_through_selector() {
    let scrollable = 3200.0;
    for index in 0..5 {
        let offset = scroll_offset_for_index(index, 5, scrollable);
        let p = scroll_progress(offset, scrollable + 800.0, 800.0);
        assert_eq!(scene_index_for_progress(p, 5), index);
    }
}

#[test]
fn offset_for_entry_scene_is_zero() {
    assert_eq!(scroll_offset_for_index(0, 5, 3200.0), 0.0);
}

#[test]
fn arrow_keys_map_to_intents() {
    assert_eq!(nav_intent_for_key("ArrowDown"), Some(NavIntent::Advance));
    assert_eq!(nav_intent_for_key("ArrowRight"), Some(NavIntent::Advance));
    assert_eq!(nav_intent_for_key("ArrowUp"), Some(NavIntent::Retreat));
    assert_eq!(nav_intent_for_key("ArrowLeft"), Some(NavIntent::Retreat));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(nav_intent_for_key(" "), None);
    assert_eq!(nav_intent_for_key("Enter"), None);
    assert_eq!(nav_intent_for_key("a"), None);
    assert_eq!(nav_intent_for_key(""), None);
    assert_eq!(nav_intent_for_key("PageDown"), None);
}

#[test]
fn advance_from_last_scene_is_a_no_op() {
    assert_eq!(step_index(4, 5, NavIntent::Advance), 4);
}

#[test]
fn retreat_from_first_scene_is_a_no_op() {
    assert_eq!(step_index(0, 5, NavIntent::Retreat), 0);
}

#[test]
fn stepping_moves_one_scene_at_a_time() {
    assert_eq!(step_index(1, 5, NavIntent::Advance), 2);
    assert_eq!(step_index(3, 5, NavIntent::Retreat), 2);
}
