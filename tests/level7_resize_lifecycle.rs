//! Level 7: Resize and Lifecycle Tests
//!
//! Tests the debounced resize adapter, minimal indicator rebuilds, slide
//! reclamping across breakpoints, and teardown via `destroy()`.

mod common;

use common::harness::CarouselTestHarness;
use slint_carousel::CarouselConfig;

#[test]
fn test_resize_recompute_is_debounced() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.tracker.clear();

    harness.resize(1280.0);
    assert_eq!(harness.tracker.count(), 0);

    harness.advance_time(100);
    assert_eq!(harness.tracker.count(), 0);

    harness.advance_time(60);
    let update = harness.last().unwrap();
    assert_eq!(update.total_slides, 3);
    assert!(update.rebuild_indicators);
    assert!(!update.animate);
}

#[test]
fn test_rapid_resizes_coalesce_into_one_recompute() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.tracker.clear();

    harness.resize(500.0);
    harness.advance_time(100);
    harness.resize(1280.0); // restarts the debounce window
    harness.advance_time(100);
    assert_eq!(harness.tracker.count(), 0);

    harness.advance_time(60);
    assert_eq!(harness.tracker.count(), 1);
    assert_eq!(harness.last().unwrap().total_slides, 3);
}

#[test]
fn test_same_layout_resize_skips_rebuild() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 1280.0);
    harness.ctrl.go_to_slide(1, false);
    harness.tracker.clear();

    // Width wiggles but items-per-slide does not change
    harness.resize(1200.0);
    harness.advance_time(160);

    let update = harness.last().unwrap();
    assert!(!update.rebuild_indicators);
    assert_eq!(update.current_slide, 1);
    assert_eq!(update.offset_x, -972.0);
}

#[test]
fn test_breakpoint_crossing_reclamps_slide() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0); // 9 slides
    harness.ctrl.go_to_slide(7, false);

    harness.report_layout(300.0, 1280.0); // now 3 slides

    assert_eq!(harness.ctrl.current_slide(), 2);
    let update = harness.last().unwrap();
    assert!(update.rebuild_indicators);
    assert_eq!(update.offset_x, -2.0 * 972.0);
    assert!(!update.animate);
}

#[test]
fn test_item_width_change_reapplies_position() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.ctrl.go_to_slide(2, false); // offset -632
    harness.tracker.clear();

    // Narrower items, same breakpoint: position re-derives, no rebuild
    harness.ctrl.handle_item_width_report(200.0);
    assert_eq!(harness.tracker.count(), 0); // waits for the debounce
    harness.resize(400.0);
    harness.advance_time(160);

    let update = harness.last().unwrap();
    assert!(!update.rebuild_indicators);
    assert_eq!(update.offset_x, -432.0); // -2 * (200 + 16)
}

#[test]
fn test_destroy_cancels_pending_resize() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.tracker.clear();

    harness.resize(1280.0);
    harness.ctrl.destroy();
    harness.advance_time(200);

    assert_eq!(harness.tracker.count(), 0);
}

#[test]
fn test_destroy_cancels_momentum() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.drag(300.0, 180.0, 100.0); // 2-slide flick
    harness.run_frames(3);
    harness.ctrl.destroy();
    harness.tracker.clear();
    harness.run_frames(30);

    assert_eq!(harness.tracker.count(), 0);
    assert_eq!(harness.ctrl.current_slide(), 0);
}

#[test]
fn test_destroy_is_idempotent() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);

    harness.ctrl.destroy();
    harness.ctrl.destroy();
    assert!(harness.ctrl.is_destroyed());
}

#[test]
fn test_all_handlers_noop_after_destroy() {
    let harness = CarouselTestHarness::new();
    harness.report_layout(300.0, 400.0);
    harness.ctrl.go_to_slide(2, false);
    harness.ctrl.destroy();
    harness.tracker.clear();

    harness.drag(300.0, 100.0, 100.0);
    harness.ctrl.navigate(1);
    harness.ctrl.handle_indicator_click(0);
    harness.ctrl.handle_viewport_resize(1280.0);
    harness.ctrl.refresh();
    harness.advance_time(200);

    assert_eq!(harness.tracker.count(), 0);
    assert_eq!(harness.ctrl.current_slide(), 2);
}

#[test]
fn test_clone_shares_destroyed_state() {
    let harness = CarouselTestHarness::new();
    let clone = harness.ctrl.clone();
    harness.ctrl.destroy();
    assert!(clone.is_destroyed());
}

#[test]
fn test_desktop_disabled_pins_offset_after_resize() {
    let harness = CarouselTestHarness::with_config(CarouselConfig {
        disable_desktop_carousel: true,
        ..CarouselConfig::new(9)
    });
    harness.report_layout(300.0, 400.0);
    harness.ctrl.go_to_slide(4, false);

    // Crossing to desktop collapses to one slide at offset 0
    harness.report_layout(300.0, 1280.0);
    assert_eq!(harness.ctrl.current_slide(), 0);
    assert_eq!(harness.last().unwrap().offset_x, 0.0);

    // And back to mobile restores a full carousel (from slide 0)
    harness.report_layout(300.0, 400.0);
    assert_eq!(harness.last().unwrap().total_slides, 9);
}
