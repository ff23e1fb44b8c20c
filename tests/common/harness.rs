//! Test harness for driving a carousel controller headlessly.
//!
//! Wires a [`CarouselController`] to a [`ViewTracker`] sink and provides
//! helper methods for geometry reports, gestures with explicit timestamps,
//! and mock-clock time advancement for the timer-driven paths (momentum
//! frames and the resize debounce).

#![allow(dead_code)]

use super::ViewTracker;
use slint::platform::Key;
use slint::SharedString;
use slint_carousel::{CarouselConfig, CarouselController, ViewUpdate, RESIZE_DEBOUNCE_MS};
use std::cell::Cell;
use std::time::Duration;

/// Initialize the testing backend for this thread.
/// With init_no_event_loop(), each test thread can have its own backend instance.
/// Uses thread_local to ensure each thread only initializes once.
fn init_testing_backend() {
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }

    INITIALIZED.with(|init| {
        if !init.get() {
            i_slint_backend_testing::init_no_event_loop();
            init.set(true);
        }
    });
}

/// Test harness around one controller instance.
///
/// Gesture helpers stamp timestamps from an internal millisecond clock that
/// is independent of the mocked timer clock; the two only need to agree in
/// tests that interleave gestures with timer fires, and none do.
pub struct CarouselTestHarness {
    pub ctrl: CarouselController,
    pub tracker: ViewTracker,
    clock_ms: Cell<f32>,
}

impl CarouselTestHarness {
    /// Create a harness with the default 9-item configuration.
    pub fn new() -> Self {
        Self::with_config(CarouselConfig::new(9))
    }

    /// Create a harness with a custom configuration.
    pub fn with_config(config: CarouselConfig) -> Self {
        init_testing_backend();
        let ctrl = CarouselController::new(config);
        let tracker = ViewTracker::new();
        ctrl.on_view_changed({
            let updates = tracker.updates.clone();
            move |update| updates.borrow_mut().push(update.clone())
        });
        Self {
            ctrl,
            tracker,
            clock_ms: Cell::new(0.0),
        }
    }

    /// The most recent view update.
    pub fn last(&self) -> Option<ViewUpdate> {
        self.tracker.last()
    }

    // === Time helpers ===

    /// Advance the mocked timer clock.
    pub fn advance_time(&self, ms: u64) {
        i_slint_backend_testing::mock_elapsed_time(Duration::from_millis(ms));
    }

    /// Advance the mocked clock in 16 ms animation-frame steps.
    pub fn run_frames(&self, frames: usize) {
        for _ in 0..frames {
            self.advance_time(16);
        }
    }

    // === Geometry helpers ===

    /// Report item and viewport widths and flush the resize debounce so
    /// metrics are settled before the test continues.
    pub fn report_layout(&self, item_width: f32, viewport_width: f32) {
        self.ctrl.handle_item_width_report(item_width);
        self.ctrl.handle_viewport_resize(viewport_width);
        self.advance_time(RESIZE_DEBOUNCE_MS + 10);
    }

    /// Report a viewport width without flushing the debounce (for tests that
    /// observe the debounce itself).
    pub fn resize(&self, viewport_width: f32) {
        self.ctrl.handle_viewport_resize(viewport_width);
    }

    // === Gesture helpers (explicit timestamps from the internal clock) ===

    /// Press pointer 0 at `x` at the current clock time.
    pub fn press(&self, x: f32) {
        self.ctrl.handle_pointer_press(0, x, self.clock_ms.get());
    }

    /// Advance the clock by `dt_ms` and move pointer 0 to `x`.
    pub fn move_to(&self, x: f32, dt_ms: f32) {
        let now = self.clock_ms.get() + dt_ms;
        self.clock_ms.set(now);
        self.ctrl.handle_pointer_move(0, x, now);
    }

    /// Advance the clock by `dt_ms` and release pointer 0.
    pub fn release(&self, dt_ms: f32) {
        let now = self.clock_ms.get() + dt_ms;
        self.clock_ms.set(now);
        self.ctrl.handle_pointer_release(0, now);
    }

    /// Simulate a complete drag from `from_x` to `to_x` over `duration_ms`,
    /// in five evenly spaced move samples.
    pub fn drag(&self, from_x: f32, to_x: f32, duration_ms: f32) {
        const STEPS: usize = 5;
        self.press(from_x);
        let dx = (to_x - from_x) / STEPS as f32;
        let dt = duration_ms / STEPS as f32;
        let mut x = from_x;
        for _ in 0..STEPS {
            x += dx;
            self.move_to(x, dt);
        }
        self.release(0.0);
    }

    // === Keyboard helper ===

    /// Simulate a key press reaching the controller.
    pub fn key_tap(&self, key: Key) {
        self.ctrl.handle_key(&SharedString::from(key));
    }
}

impl Default for CarouselTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
