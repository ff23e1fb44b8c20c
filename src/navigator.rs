//! Slide navigation state machine.
//!
//! [`SlideNavigator`] is the sole mutator of the carousel's discrete position.
//! Arrow/keyboard navigation wraps, programmatic jumps clamp, and a released
//! gesture resolves through momentum, threshold, or free-scroll rules. Every
//! mutation produces a [`ViewState`] describing what the application should
//! render; the controller turns that into a full view update on the single
//! apply-path.

use crate::config::CarouselConfig;
use crate::gesture::{GestureSummary, TAP_MAX_DURATION_MS};
use crate::metrics::SlideMetrics;
use crate::momentum::{calculate_momentum, MomentumDriver, VELOCITY_FLOOR};

/// Drags faster than this count as flicks even below the snap threshold (ms).
pub const QUICK_FLICK_MAX_DURATION_MS: f32 = 200.0;

/// Mutable per-carousel position state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    /// The authoritative discrete position, `0 ≤ current_slide < total_slides`.
    pub current_slide: usize,
    /// Exact pixel offset preserved between gestures in free-scroll mode.
    /// `None` whenever the carousel sits on a slide boundary.
    pub free_scroll_offset: Option<f32>,
}

/// What the application should render after a position change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Container offset in pixels.
    pub offset_x: f32,
    /// Whether the move should animate. `false` after resizes and in
    /// free-scroll settles, where the new position must apply in one frame.
    pub animate: bool,
    /// Slide the indicators should highlight.
    pub current_slide: usize,
    /// Slide count at the time of the change.
    pub total_slides: usize,
}

/// How a released gesture resolved.
#[derive(Debug)]
pub enum ReleaseOutcome {
    /// Settle on a slide boundary (tap snap-back, threshold step, or a
    /// momentum plan that landed on the current slide).
    Settle(ViewState),
    /// Run a momentum animation; the driver's target becomes current on
    /// completion.
    Animate(MomentumDriver),
    /// Free-scroll mode: keep the exact release position.
    Stay(ViewState),
}

/// State machine over `current_slide ∈ [0, total_slides)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlideNavigator {
    state: CarouselState,
}

impl SlideNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_slide(&self) -> usize {
        self.state.current_slide
    }

    pub fn free_scroll_offset(&self) -> Option<f32> {
        self.state.free_scroll_offset
    }

    /// Container offset the carousel currently rests at.
    ///
    /// The stored free-scroll offset when one exists, otherwise the current
    /// slide boundary. Gestures start from this value.
    pub fn base_offset(&self, metrics: &SlideMetrics) -> f32 {
        match self.state.free_scroll_offset {
            Some(offset) => metrics.clamp_offset(offset),
            None => metrics.offset_for_slide(self.state.current_slide.min(
                metrics.total_slides.saturating_sub(1),
            )),
        }
    }

    /// Wrapping move by `direction` (used by arrows and keyboard).
    ///
    /// `navigate(+1)` from the last slide lands on slide 0. Clears any
    /// free-scroll offset.
    pub fn navigate(&mut self, direction: i32, metrics: &SlideMetrics) -> ViewState {
        let total = metrics.total_slides as i64;
        let next = (self.state.current_slide as i64 + direction as i64).rem_euclid(total);
        self.state.current_slide = next as usize;
        self.state.free_scroll_offset = None;
        self.view_state(metrics, true)
    }

    /// Clamping move to `index` (indicator clicks, Home/End, external callers).
    ///
    /// Out-of-range indices clamp to the nearest bound rather than wrapping.
    /// Clears any free-scroll offset. `immediate` suppresses animation for
    /// this one update.
    pub fn go_to_slide(&mut self, index: i32, immediate: bool, metrics: &SlideMetrics) -> ViewState {
        let last = metrics.total_slides.saturating_sub(1) as i64;
        self.state.current_slide = (index as i64).clamp(0, last) as usize;
        self.state.free_scroll_offset = None;
        self.view_state(metrics, !immediate)
    }

    /// Re-clamp `current_slide` after the slide count changed.
    ///
    /// Returns `true` if the position moved. Called by the resize path after
    /// an indicator rebuild.
    pub fn reclamp(&mut self, metrics: &SlideMetrics) -> bool {
        let last = metrics.total_slides.saturating_sub(1);
        if self.state.current_slide > last {
            self.state.current_slide = last;
            true
        } else {
            false
        }
    }

    /// Commit a finished momentum animation.
    pub fn finish_momentum(&mut self, target_slide: usize, metrics: &SlideMetrics) -> ViewState {
        let last = metrics.total_slides.saturating_sub(1);
        self.state.current_slide = target_slide.min(last);
        self.state.free_scroll_offset = None;
        // The driver already left the container on the boundary
        self.view_state(metrics, false)
    }

    /// Resolve a released gesture.
    ///
    /// Order of the rules:
    /// 1. free-scroll mode keeps the exact clamped release position;
    /// 2. short, small drags are taps and snap back;
    /// 3. with momentum enabled and an average velocity above the noise
    ///    floor, a momentum plan picks the target (animated unless it is the
    ///    current slide);
    /// 4. otherwise the snap threshold (or a quick flick) decides a one-step
    ///    move.
    pub fn resolve_release(
        &mut self,
        summary: &GestureSummary,
        metrics: &SlideMetrics,
        config: &CarouselConfig,
    ) -> ReleaseOutcome {
        if config.disable_snap {
            let raw = summary.base_offset + summary.drag_offset;
            let clamped = metrics.clamp_offset(raw);
            self.state.free_scroll_offset = Some(clamped);
            // Approximate slide index, for indicator highlighting only
            self.state.current_slide = metrics.slide_for_offset(clamped);
            return ReleaseOutcome::Stay(ViewState {
                offset_x: clamped,
                animate: false,
                current_slide: self.state.current_slide,
                total_slides: metrics.total_slides,
            });
        }

        let distance = summary.drag_offset.abs();
        if distance < config.min_swipe_distance && summary.duration_ms < TAP_MAX_DURATION_MS {
            // Tap: snap back to where we already are
            self.state.free_scroll_offset = None;
            return ReleaseOutcome::Settle(self.view_state(metrics, true));
        }

        if config.enable_momentum && summary.average_velocity.abs() > VELOCITY_FLOOR {
            let plan = calculate_momentum(
                summary.average_velocity,
                summary.drag_offset,
                metrics.slide_width,
                self.state.current_slide,
                metrics.total_slides,
                config.momentum_multiplier,
                config.max_momentum_duration,
            );
            if plan.target_slide == self.state.current_slide {
                self.state.free_scroll_offset = None;
                return ReleaseOutcome::Settle(self.view_state(metrics, true));
            }
            return ReleaseOutcome::Animate(MomentumDriver::new(
                self.state.current_slide,
                plan.target_slide,
                summary.base_offset + summary.drag_offset,
                metrics.slide_width,
                plan.duration_ms,
            ));
        }

        let past_threshold = distance > metrics.slide_width * config.snap_threshold;
        let quick_flick = distance > config.min_swipe_distance
            && summary.duration_ms < QUICK_FLICK_MAX_DURATION_MS;
        let step: i32 = if past_threshold || quick_flick {
            if summary.drag_offset < 0.0 {
                1
            } else {
                -1
            }
        } else {
            0
        };
        let target = self.state.current_slide as i32 + step;
        ReleaseOutcome::Settle(self.go_to_slide(target, false, metrics))
    }

    /// The view for the current position.
    pub fn view_state(&self, metrics: &SlideMetrics, animate: bool) -> ViewState {
        ViewState {
            offset_x: self.base_offset(metrics),
            animate,
            current_slide: self.state.current_slide,
            total_slides: metrics.total_slides,
        }
    }
}
