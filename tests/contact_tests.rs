// Host-side tests for the submission state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

#[test]
fn starts_idle() {
    let tracker = SubmissionTracker::default();
    assert_eq!(tracker.state(), SubmissionState::Idle);
    assert!(!tracker.in_flight());
}

#[test]
fn success_lifecycle_runs_to_idle() {
    let mut tracker = SubmissionTracker::default();
    assert!(tracker.begin());
    assert_eq!(tracker.state(), SubmissionState::Pending);
    tracker.resolve(true);
    assert_eq!(tracker.state(), SubmissionState::Succeeded);
    assert!(!tracker.in_flight());
    // Banner auto-dismiss after the fixed delay.
    tracker.dismiss();
    assert_eq!(tracker.state(), SubmissionState::Idle);
}

#[test]
fn failure_clears_the_in_flight_flag() {
    let mut tracker = SubmissionTracker::default();
    assert!(tracker.begin());
    tracker.resolve(false);
    assert_eq!(tracker.state(), SubmissionState::Failed);
    assert!(!tracker.in_flight());
}

#[test]
fn double_submit_is_blocked_while_pending() {
    let mut tracker = SubmissionTracker::default();
    assert!(tracker.begin());
    assert!(!tracker.begin());
    assert_eq!(tracker.state(), SubmissionState::Pending);
}

#[test]
fn failed_state_allows_resubmission() {
    let mut tracker = SubmissionTracker::default();
    assert!(tracker.begin());
    tracker.resolve(false);
    assert!(tracker.begin());
    assert_eq!(tracker.state(), SubmissionState::Pending);
}

#[test]
fn resubmit_before_dismiss_is_allowed_after_success() {
    let mut tracker = SubmissionTracker::default();
    assert!(tracker.begin());
    tracker.resolve(true);
    assert!(tracker.begin());
    assert_eq!(tracker.state(), SubmissionState::Pending);
}

#[test]
fn late_resolution_outside_pending_is_ignored() {
    let mut tracker = SubmissionTracker::default();
    tracker.resolve(true);
    assert_eq!(tracker.state(), SubmissionState::Idle);
    assert!(tracker.begin());
    tracker.resolve(true);
    tracker.resolve(false);
    assert_eq!(tracker.state(), SubmissionState::Succeeded);
}

#[test]
fn dismiss_only_applies_to_success() {
    let mut tracker = SubmissionTracker::default();
    tracker.dismiss();
    assert_eq!(tracker.state(), SubmissionState::Idle);
    assert!(tracker.begin());
    tracker.dismiss();
    assert_eq!(tracker.state(), SubmissionState::Pending);
    tracker.resolve(false);
    tracker.dismiss();
    assert_eq!(tracker.state(), SubmissionState::Failed);
}

#[test]
fn dismiss_delay_is_the_designed_five_seconds() {
    assert_eq!(SUCCESS_DISMISS_MS, 5000);
}
