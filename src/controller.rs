//! High-level controller for carousel applications.
//!
//! The [`CarouselController`] fuses pointer, keyboard, and resize input into
//! one interaction state machine and reports everything the UI should render
//! through a single view-update sink.
//!
//! # Example
//!
//! ```ignore
//! use slint_carousel::{CarouselConfig, CarouselController};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = CarouselController::new(CarouselConfig::new(9));
//!     let w = window.as_weak();
//!
//!     // Geometry reports - the library never measures widgets itself
//!     window.on_item_width_changed(ctrl.item_width_callback());
//!     window.on_viewport_width_changed(ctrl.viewport_resized_callback());
//!
//!     // Input wiring
//!     window.on_carousel_pointer_pressed(ctrl.pointer_pressed_callback());
//!     window.on_carousel_pointer_moved(ctrl.pointer_moved_callback());
//!     window.on_carousel_pointer_released(ctrl.pointer_released_callback());
//!     window.on_carousel_key_pressed(ctrl.key_pressed_callback());
//!     window.on_indicator_clicked(ctrl.indicator_clicked_callback());
//!     window.on_prev_clicked(ctrl.prev_clicked_callback());
//!     window.on_next_clicked(ctrl.next_clicked_callback());
//!
//!     // Render side: one sink receives offset, controls, and announcement
//!     ctrl.on_view_changed({
//!         let w = w.clone();
//!         move |update| {
//!             if let Some(w) = w.upgrade() {
//!                 w.set_carousel_offset(update.offset_x);
//!                 w.set_carousel_animate(update.animate);
//!                 w.set_active_indicator(update.active_indicator);
//!                 w.set_arrows_enabled(update.arrows_enabled);
//!                 w.set_slide_announcement(update.announcement.clone());
//!             }
//!         }
//!     });
//!
//!     ctrl.refresh();
//!     window.run().unwrap();
//! }
//! ```

use crate::announcer::slide_announcement;
use crate::config::CarouselConfig;
use crate::controls::ControlSurface;
use crate::gesture::{resist_edges, GestureTracker};
use crate::metrics::{compute_metrics, LayoutCache, SlideMetrics};
use crate::momentum::{MomentumDriver, FRAME_INTERVAL_MS};
use crate::navigator::{ReleaseOutcome, SlideNavigator, ViewState};
use slint::platform::Key;
use slint::{SharedString, Timer, TimerMode, VecModel};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Debounce window for viewport resize recomputation, ms.
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

/// Everything the application should render after a change.
///
/// Emitted through the sink registered with
/// [`CarouselController::on_view_changed`]. One update describes the complete
/// visible state; the application copies the fields it binds.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewUpdate {
    /// Container offset in pixels (apply as a horizontal translation).
    pub offset_x: f32,
    /// Whether the offset change should animate. `false` during drags, on
    /// momentum frames (the controller paces those itself), and after
    /// resizes.
    pub animate: bool,
    /// Whether a drag is in progress (styling hook, e.g. cursor/transition
    /// suppression).
    pub dragging: bool,
    /// The authoritative current slide.
    pub current_slide: i32,
    /// Slide count for the current layout.
    pub total_slides: i32,
    /// Slide the indicator row should highlight (equals `current_slide`).
    pub active_indicator: i32,
    /// Whether the indicator row should be shown at all.
    pub indicators_visible: bool,
    /// `true` when the indicator row must be recreated (slide geometry
    /// changed), as opposed to merely restyling the active dot.
    pub rebuild_indicators: bool,
    /// Whether prev/next arrows can do anything.
    pub arrows_enabled: bool,
    /// Whether arrows should be rendered at all (`hide_arrows` config).
    pub arrows_visible: bool,
    /// Live-region text: "Slide N of M".
    pub announcement: SharedString,
}

type ViewSink = Rc<dyn Fn(&ViewUpdate)>;

/// Controller that owns all carousel state and provides callback
/// implementations.
///
/// This provides a high-level API that handles:
/// - Layout metrics derived from geometry reports (never cached)
/// - Pointer gesture tracking with velocity history and edge resistance
/// - Momentum, threshold, and free-scroll release resolution
/// - Keyboard navigation (arrows wrap, Home/End clamp)
/// - Debounced resize adaptation with minimal indicator rebuilds
/// - Idempotent teardown via [`destroy`](CarouselController::destroy)
///
/// All state is per-instance behind `Rc<RefCell<_>>`; clone the controller to
/// share it across callbacks. There is no cross-instance state.
#[derive(Clone)]
pub struct CarouselController {
    shared: Rc<Shared>,
}

struct Shared {
    config: CarouselConfig,
    layout: RefCell<LayoutCache>,
    navigator: RefCell<SlideNavigator>,
    gesture: RefCell<GestureTracker>,
    controls: RefCell<ControlSurface>,
    momentum: RefCell<Option<MomentumDriver>>,
    frame_timer: Timer,
    resize_timer: Timer,
    view_sink: RefCell<Option<ViewSink>>,
    destroyed: Cell<bool>,
    epoch: Instant,
}

impl CarouselController {
    /// Create a controller for the given configuration.
    ///
    /// The configuration is sanitized (see [`CarouselConfig::sanitized`]);
    /// construction never fails.
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                config: config.sanitized(),
                layout: RefCell::new(LayoutCache::new()),
                navigator: RefCell::new(SlideNavigator::new()),
                gesture: RefCell::new(GestureTracker::new()),
                controls: RefCell::new(ControlSurface::new()),
                momentum: RefCell::new(None),
                frame_timer: Timer::default(),
                resize_timer: Timer::default(),
                view_sink: RefCell::new(None),
                destroyed: Cell::new(false),
                epoch: Instant::now(),
            }),
        }
    }

    /// The sanitized configuration this controller runs with.
    pub fn config(&self) -> &CarouselConfig {
        &self.shared.config
    }

    /// Register the view-update sink. Replaces any previous sink.
    pub fn on_view_changed(&self, sink: impl Fn(&ViewUpdate) + 'static) {
        if self.shared.destroyed.get() {
            return;
        }
        *self.shared.view_sink.borrow_mut() = Some(Rc::new(sink));
    }

    /// Derive fresh layout metrics from the latest geometry reports.
    pub fn metrics(&self) -> SlideMetrics {
        self.shared.metrics()
    }

    /// The authoritative current slide.
    pub fn current_slide(&self) -> i32 {
        self.shared.navigator.borrow().current_slide() as i32
    }

    /// Exact pixel offset preserved between gestures in free-scroll mode.
    pub fn free_scroll_offset(&self) -> Option<f32> {
        self.shared.navigator.borrow().free_scroll_offset()
    }

    /// Whether [`destroy`](CarouselController::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.shared.destroyed.get()
    }

    // === Handle returned to callers ===

    /// Wrapping move by `direction` (-1 or +1). Cancels any in-flight
    /// momentum animation.
    pub fn navigate(&self, direction: i32) {
        let shared = &self.shared;
        if shared.destroyed.get() {
            return;
        }
        shared.cancel_momentum();
        let metrics = shared.metrics();
        let view = shared.navigator.borrow_mut().navigate(direction, &metrics);
        shared.apply(&view, false, false);
    }

    /// Clamping move to `index`. `immediate` applies the jump without
    /// animation (used after resize-driven slide-count changes). Cancels any
    /// in-flight momentum animation.
    pub fn go_to_slide(&self, index: i32, immediate: bool) {
        let shared = &self.shared;
        if shared.destroyed.get() {
            return;
        }
        shared.cancel_momentum();
        let metrics = shared.metrics();
        let view = shared
            .navigator
            .borrow_mut()
            .go_to_slide(index, immediate, &metrics);
        shared.apply(&view, false, false);
    }

    /// Tear down: stop timers, cancel any gesture and animation, drop the
    /// view sink. Idempotent; every handler no-ops afterwards.
    pub fn destroy(&self) {
        let shared = &self.shared;
        if shared.destroyed.replace(true) {
            return;
        }
        shared.frame_timer.stop();
        shared.resize_timer.stop();
        shared.momentum.borrow_mut().take();
        shared.gesture.borrow_mut().cancel();
        shared.view_sink.borrow_mut().take();
    }

    /// Emit the current view through the sink (initial paint, or after
    /// re-wiring). Establishes the indicator rebuild key.
    pub fn refresh(&self) {
        let shared = &self.shared;
        if shared.destroyed.get() {
            return;
        }
        let metrics = shared.metrics();
        let rebuilt = shared.controls.borrow_mut().rebuild(&metrics);
        if rebuilt {
            shared.navigator.borrow_mut().reclamp(&metrics);
        }
        let view = shared.navigator.borrow().view_state(&metrics, false);
        shared.apply(&view, false, rebuilt);
    }

    // === Direct handlers (explicit timestamps, used by tests and by the
    // callback factories below) ===

    /// Handle a pointer press at `x` with a caller-supplied timestamp.
    ///
    /// Cancels any in-flight momentum animation and arms the gesture
    /// tracker. A press from a second pointer while a gesture is in progress
    /// ends the tracked gesture instead of following the new finger. Ignored
    /// on desktop viewports unless `swipe_on_desktop` is set.
    pub fn handle_pointer_press(&self, pointer_id: i32, x: f32, time_ms: f32) {
        self.shared.pointer_press(pointer_id, x, time_ms);
    }

    /// Handle a pointer move. Applies edge resistance and renders the offset
    /// without animation. Samples from untracked pointers are ignored.
    pub fn handle_pointer_move(&self, pointer_id: i32, x: f32, time_ms: f32) {
        self.shared.pointer_move(pointer_id, x, time_ms);
    }

    /// Handle a pointer release (or cancel) and resolve the gesture.
    pub fn handle_pointer_release(&self, pointer_id: i32, time_ms: f32) {
        self.shared.pointer_release(pointer_id, time_ms);
    }

    /// Handle a key event: `ArrowLeft`/`ArrowRight` navigate (wrapping),
    /// `Home`/`End` jump to the first/last slide. Other keys are ignored.
    /// Keyboard input never touches the gesture state.
    pub fn handle_key(&self, text: &SharedString) {
        let shared = &self.shared;
        if shared.destroyed.get() {
            return;
        }
        if *text == SharedString::from(Key::LeftArrow) {
            self.navigate(-1);
        } else if *text == SharedString::from(Key::RightArrow) {
            self.navigate(1);
        } else if *text == SharedString::from(Key::Home) {
            self.go_to_slide(0, false);
        } else if *text == SharedString::from(Key::End) {
            let last = shared.metrics().total_slides.saturating_sub(1);
            self.go_to_slide(last as i32, false);
        }
    }

    /// Record a new rendered item width. Metrics pick it up on the next
    /// query; call [`refresh`](CarouselController::refresh) to re-render.
    pub fn handle_item_width_report(&self, width: f32) {
        if self.shared.destroyed.get() {
            return;
        }
        self.shared
            .layout
            .borrow_mut()
            .handle_item_width_report(width);
    }

    /// Record a viewport width change and schedule the debounced
    /// recomputation.
    pub fn handle_viewport_resize(&self, width: f32) {
        self.shared.viewport_resized(width);
    }

    /// Handle an indicator dot click.
    pub fn handle_indicator_click(&self, index: i32) {
        self.go_to_slide(index, false);
    }

    /// Sync the indicator dot model for the current state: one `bool` per
    /// slide, `true` for the active dot. Empty when indicators are hidden.
    pub fn sync_indicators(&self, model: &VecModel<bool>) {
        let shared = &self.shared;
        let metrics = shared.metrics();
        let current = shared.navigator.borrow().current_slide();
        shared
            .controls
            .borrow()
            .sync_to_model(model, shared.config.item_count, &metrics, current);
    }

    // === Callback factories ===
    //
    // These stamp timestamps from the controller's monotonic clock and track
    // a single pointer (Slint windows deliver one pointer stream).

    /// Returns a callback for pointer-press events, taking the x position.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |x| {
            let now = ctrl.shared.now_ms();
            ctrl.handle_pointer_press(0, x, now);
        }
    }

    /// Returns a callback for pointer-move events, taking the x position.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |x| {
            let now = ctrl.shared.now_ms();
            ctrl.handle_pointer_move(0, x, now);
        }
    }

    /// Returns a callback for pointer-release events.
    pub fn pointer_released_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || {
            let now = ctrl.shared.now_ms();
            ctrl.handle_pointer_release(0, now);
        }
    }

    /// Returns a callback for key-pressed events, taking the key text.
    pub fn key_pressed_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |text| ctrl.handle_key(&text)
    }

    /// Returns a callback for viewport width changes.
    pub fn viewport_resized_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |width| ctrl.handle_viewport_resize(width)
    }

    /// Returns a callback for item width reports.
    pub fn item_width_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |width| ctrl.handle_item_width_report(width)
    }

    /// Returns a callback for indicator dot clicks, taking the dot index.
    pub fn indicator_clicked_callback(&self) -> impl Fn(i32) {
        let ctrl = self.clone();
        move |index| ctrl.handle_indicator_click(index)
    }

    /// Returns a callback for the previous-arrow click.
    pub fn prev_clicked_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.navigate(-1)
    }

    /// Returns a callback for the next-arrow click.
    pub fn next_clicked_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.navigate(1)
    }
}

impl Shared {
    fn now_ms(&self) -> f32 {
        self.epoch.elapsed().as_secs_f64() as f32 * 1000.0
    }

    fn metrics(&self) -> SlideMetrics {
        compute_metrics(&self.config, &self.layout.borrow())
    }

    /// The single "apply visual offset + update controls + announce" step.
    /// Every settled position change converges here.
    fn apply(&self, view: &ViewState, dragging: bool, rebuild_indicators: bool) {
        let metrics = self.metrics();
        let update = {
            let controls = self.controls.borrow();
            ViewUpdate {
                offset_x: view.offset_x,
                animate: view.animate,
                dragging,
                current_slide: view.current_slide as i32,
                total_slides: view.total_slides as i32,
                active_indicator: view.current_slide as i32,
                indicators_visible: controls
                    .indicators_visible(self.config.item_count, &metrics),
                rebuild_indicators,
                arrows_enabled: controls.arrows_enabled(&metrics),
                arrows_visible: !self.config.hide_arrows,
                announcement: slide_announcement(view.current_slide, view.total_slides),
            }
        };
        self.emit(&update);
    }

    /// Offset-only update during drags and momentum frames: the position
    /// moves, the discrete state does not.
    fn emit_frame(&self, offset: f32, dragging: bool, metrics: &SlideMetrics) {
        let current = self.navigator.borrow().current_slide();
        let update = {
            let controls = self.controls.borrow();
            ViewUpdate {
                offset_x: offset,
                animate: false,
                dragging,
                current_slide: current as i32,
                total_slides: metrics.total_slides as i32,
                active_indicator: current as i32,
                indicators_visible: controls
                    .indicators_visible(self.config.item_count, metrics),
                rebuild_indicators: false,
                arrows_enabled: controls.arrows_enabled(metrics),
                arrows_visible: !self.config.hide_arrows,
                announcement: slide_announcement(current, metrics.total_slides),
            }
        };
        self.emit(&update);
    }

    fn emit(&self, update: &ViewUpdate) {
        // Borrow released before the sink runs so a sink may call back into
        // the controller
        let sink = self.view_sink.borrow().clone();
        if let Some(sink) = sink {
            sink(update);
        }
    }

    fn cancel_momentum(&self) {
        self.frame_timer.stop();
        self.momentum.borrow_mut().take();
    }

    // === Gesture protocol ===

    fn pointer_press(self: &Rc<Self>, pointer_id: i32, x: f32, time_ms: f32) {
        if self.destroyed.get() {
            return;
        }
        let metrics = self.metrics();
        if !metrics.is_mobile && !self.config.swipe_on_desktop {
            return;
        }
        let tracked = self.gesture.borrow().pointer_id();
        if let Some(existing) = tracked {
            if existing != pointer_id {
                // A second finger ends the interaction rather than being
                // tracked
                self.pointer_release(existing, time_ms);
                return;
            }
        }
        self.cancel_momentum();
        let base = self.navigator.borrow().base_offset(&metrics);
        self.gesture.borrow_mut().begin(pointer_id, x, time_ms, base);
        self.emit_frame(base, true, &metrics);
    }

    fn pointer_move(&self, pointer_id: i32, x: f32, time_ms: f32) {
        if self.destroyed.get() {
            return;
        }
        let candidate = self.gesture.borrow_mut().update(pointer_id, x, time_ms);
        let raw = match candidate {
            Some(raw) => raw,
            None => return,
        };
        let metrics = self.metrics();
        let offset = resist_edges(raw, metrics.min_offset());
        self.emit_frame(offset, true, &metrics);
    }

    fn pointer_release(self: &Rc<Self>, pointer_id: i32, time_ms: f32) {
        if self.destroyed.get() {
            return;
        }
        let summary = match self.gesture.borrow_mut().release(pointer_id, time_ms) {
            Some(summary) => summary,
            None => return,
        };
        let metrics = self.metrics();
        let outcome =
            self.navigator
                .borrow_mut()
                .resolve_release(&summary, &metrics, &self.config);
        match outcome {
            ReleaseOutcome::Settle(view) | ReleaseOutcome::Stay(view) => {
                self.apply(&view, false, false);
            }
            ReleaseOutcome::Animate(driver) => self.start_momentum(driver),
        }
    }

    // === Momentum animation driver ===

    fn start_momentum(self: &Rc<Self>, driver: MomentumDriver) {
        *self.momentum.borrow_mut() = Some(driver);
        let weak: Weak<Shared> = Rc::downgrade(self);
        self.frame_timer.start(
            TimerMode::Repeated,
            Duration::from_millis(FRAME_INTERVAL_MS as u64),
            move || {
                if let Some(shared) = weak.upgrade() {
                    shared.momentum_frame();
                }
            },
        );
    }

    fn momentum_frame(&self) {
        if self.destroyed.get() {
            self.frame_timer.stop();
            return;
        }
        let step = {
            let mut slot = self.momentum.borrow_mut();
            slot.as_mut().map(|driver| {
                let frame = driver.advance(FRAME_INTERVAL_MS);
                (frame, driver.target_slide())
            })
        };
        let (frame, target) = match step {
            Some(step) => step,
            None => {
                self.frame_timer.stop();
                return;
            }
        };
        let metrics = self.metrics();
        if frame.done {
            self.frame_timer.stop();
            self.momentum.borrow_mut().take();
            let view = self.navigator.borrow_mut().finish_momentum(target, &metrics);
            self.apply(&view, false, false);
        } else {
            self.emit_frame(frame.offset, false, &metrics);
        }
    }

    // === Resize adapter ===

    fn viewport_resized(self: &Rc<Self>, width: f32) {
        if self.destroyed.get() {
            return;
        }
        self.layout.borrow_mut().handle_viewport_report(width);
        let weak: Weak<Shared> = Rc::downgrade(self);
        // Restarting the single-shot timer is the debounce
        self.resize_timer.start(
            TimerMode::SingleShot,
            Duration::from_millis(RESIZE_DEBOUNCE_MS),
            move || {
                if let Some(shared) = weak.upgrade() {
                    shared.settle_resize();
                }
            },
        );
    }

    fn settle_resize(&self) {
        if self.destroyed.get() {
            return;
        }
        let metrics = self.metrics();
        let rebuilt = self.controls.borrow_mut().rebuild(&metrics);
        if rebuilt {
            self.navigator.borrow_mut().reclamp(&metrics);
        }
        // Item widths may have changed even when the slide count did not:
        // always re-apply the position, without animation
        let view = self.navigator.borrow().view_state(&metrics, false);
        self.apply(&view, false, rebuilt);
    }
}
