//! Level 4: Momentum Tests
//!
//! Tests flick resolution through the momentum planner and the timer-driven
//! animation frames, using the mocked clock to step the frame timer.

mod common;

use common::harness::CarouselTestHarness;
use slint_carousel::CarouselConfig;

#[test]
fn test_flick_launches_momentum_animation() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0); // slide width 316, 9 slides
    harness.tracker.clear();

    // -120 px in 100 ms: average velocity -1.2 px/ms projects 480 px more
    // travel, so round(600 / 316) = 2 slides forward
    harness.drag(300.0, 180.0, 100.0);

    // Release itself emits nothing; the animation runs on the frame timer
    assert_eq!(harness.ctrl.current_slide(), 0);

    harness.run_frames(20);
    assert_eq!(harness.ctrl.current_slide(), 2);

    let update = harness.last().unwrap();
    assert_eq!(update.offset_x, -632.0);
    assert!(!update.animate);
    assert_eq!(update.announcement.as_str(), "Slide 3 of 9");
}

#[test]
fn test_momentum_frames_progress_monotonically() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.drag(300.0, 180.0, 100.0);
    harness.tracker.clear();
    harness.run_frames(20);

    let updates = harness.tracker.all();
    assert!(updates.len() > 5);
    for pair in updates.windows(2) {
        assert!(pair[1].offset_x <= pair[0].offset_x);
        assert!(!pair[0].animate); // the timer paces positions itself
    }
    // Lands exactly on the target boundary
    assert_eq!(updates.last().unwrap().offset_x, -632.0);
}

#[test]
fn test_momentum_first_frame_starts_near_release_position() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.drag(300.0, 180.0, 100.0); // released at offset -120
    harness.tracker.clear();
    harness.advance_time(16);

    // One eased frame in: still much closer to the release position than to
    // the target
    let first = harness.last().unwrap().offset_x;
    assert!(first < -120.0 && first > -300.0, "first frame at {first}");
}

#[test]
fn test_slow_release_skips_momentum() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.ctrl.go_to_slide(3, false);

    // 60 px over 400 ms: velocity -0.15 is under the noise floor, distance
    // under the threshold; snaps back without any timer frames
    harness.drag(300.0, 240.0, 400.0);
    assert_eq!(harness.ctrl.current_slide(), 3);

    harness.tracker.clear();
    harness.run_frames(5);
    assert_eq!(harness.tracker.count(), 0);
}

#[test]
fn test_momentum_target_clamped_at_last_slide() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.ctrl.go_to_slide(7, false);

    // Huge velocity projects far past the end
    harness.drag(400.0, 100.0, 60.0);
    harness.run_frames(60);

    assert_eq!(harness.ctrl.current_slide(), 8);
    assert_eq!(harness.last().unwrap().offset_x, -8.0 * 316.0);
}

#[test]
fn test_momentum_landing_on_current_slide_settles() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.tracker.clear();

    // Fast but tiny rightward drag on slide 0: the plan clamps to slide 0,
    // so the release settles directly instead of animating
    harness.drag(100.0, 160.0, 100.0);

    assert_eq!(harness.ctrl.current_slide(), 0);
    let update = harness.last().unwrap();
    assert!(update.animate);
    assert_eq!(update.offset_x, 0.0);

    harness.tracker.clear();
    harness.run_frames(5);
    assert_eq!(harness.tracker.count(), 0);
}

#[test]
fn test_new_press_cancels_momentum() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.drag(300.0, 180.0, 100.0);
    harness.run_frames(3); // animation in flight

    harness.press(200.0);
    harness.tracker.clear();
    harness.run_frames(10);

    // No momentum frames after the press; the gesture owns the position
    assert_eq!(harness.tracker.count(), 0);
    assert_eq!(harness.ctrl.current_slide(), 0);
}

#[test]
fn test_navigation_cancels_momentum() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.drag(300.0, 180.0, 100.0);
    harness.run_frames(3);

    harness.ctrl.go_to_slide(5, false);
    harness.run_frames(30);

    // The cancelled animation never commits its target
    assert_eq!(harness.ctrl.current_slide(), 5);
    assert_eq!(harness.last().unwrap().offset_x, -5.0 * 316.0);
}

#[test]
fn test_momentum_disabled_falls_back_to_threshold() {
    let harness = CarouselTestHarness::with_config(CarouselConfig {
        enable_momentum: false,
        ..CarouselConfig::new(9)
    });
    harness.report_layout(300.0, 400.0);

    // Fast flick over a full threshold distance: one slide, not two
    harness.drag(300.0, 180.0, 100.0);
    assert_eq!(harness.ctrl.current_slide(), 1);

    harness.tracker.clear();
    harness.run_frames(5);
    assert_eq!(harness.tracker.count(), 0);
}
