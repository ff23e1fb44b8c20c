//! Momentum physics.
//!
//! Converts a released gesture's velocity into a target slide and an eased
//! animation. [`calculate_momentum`] is a pure function of its inputs (same
//! velocity and drag always produce the same plan); [`MomentumDriver`] is the
//! cancellable per-frame interpolator the controller advances from its frame
//! timer.

/// Deceleration constant for projected travel, px/ms².
pub const DECELERATION: f32 = 0.0015;

/// Average release velocities below this are treated as noise, px/ms.
pub const VELOCITY_FLOOR: f32 = 0.3;

/// Lower bound on the momentum animation duration, ms.
pub const MIN_MOMENTUM_DURATION: f32 = 200.0;

/// Velocity-to-duration scale factor.
pub const DURATION_SCALE: f32 = 80.0;

/// Nominal frame interval for the animation timer, ms.
pub const FRAME_INTERVAL_MS: f32 = 16.0;

/// Resolved momentum: where to go and how long to take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumPlan {
    /// Slide to land on, already clamped into `[0, total_slides)`.
    pub target_slide: usize,
    /// Animation duration in ms, clamped to
    /// `[MIN_MOMENTUM_DURATION, max_duration]`.
    pub duration_ms: f32,
}

/// Project a release velocity into a momentum plan.
///
/// The projected additional travel follows the constant-deceleration model
/// `v² / (2 × deceleration)`, signed by the velocity direction. Added to the
/// drag offset it gives a final pixel position, which rounds to a slide delta;
/// the resulting target is clamped relative to `current_slide` (not globally
/// wrapped). Duration scales with speed and is clamped between the floor and
/// `max_duration` (the floor wins if `max_duration` is configured below it).
///
/// Pure function: deterministic for fixed inputs.
pub fn calculate_momentum(
    velocity: f32,
    drag_offset: f32,
    slide_width: f32,
    current_slide: usize,
    total_slides: usize,
    momentum_multiplier: f32,
    max_duration_ms: f32,
) -> MomentumPlan {
    let slide_delta = if slide_width > 0.0 {
        let projected = velocity * velocity.abs() / (2.0 * DECELERATION);
        let final_position = drag_offset + projected;
        (-final_position / slide_width).round() as i64
    } else {
        0
    };

    let last = total_slides.saturating_sub(1) as i64;
    let target_slide = (current_slide as i64 + slide_delta).clamp(0, last) as usize;

    let duration_ms = (velocity.abs() * momentum_multiplier * DURATION_SCALE)
        .clamp(MIN_MOMENTUM_DURATION, max_duration_ms.max(MIN_MOMENTUM_DURATION));

    MomentumPlan {
        target_slide,
        duration_ms,
    }
}

/// Quartic ease-out: `1 − (1 − t)⁴`.
pub fn ease_out_quart(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// One frame of a momentum animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumFrame {
    /// Container offset for this frame, in pixels.
    pub offset: f32,
    /// Whether the animation has reached its target.
    pub done: bool,
}

/// Cancellable interpolator from a release position to a slide boundary.
///
/// Blends the leftover drag displacement out as the eased slide progress
/// advances, so the first frame renders exactly where the finger released and
/// the last frame lands exactly on `-target_slide × slide_width`. Stored in
/// the controller as the in-flight animation handle; dropping it (new gesture,
/// navigation, destroy) cancels the animation.
#[derive(Clone, Copy, Debug)]
pub struct MomentumDriver {
    from_slide: f32,
    target_slide: usize,
    slide_width: f32,
    /// Release offset minus the from-slide boundary offset.
    start_residual: f32,
    duration_ms: f32,
    elapsed_ms: f32,
}

impl MomentumDriver {
    /// Create a driver starting at `release_offset` (absolute container
    /// offset at the moment of release).
    pub fn new(
        from_slide: usize,
        target_slide: usize,
        release_offset: f32,
        slide_width: f32,
        duration_ms: f32,
    ) -> Self {
        let from = from_slide as f32;
        Self {
            from_slide: from,
            target_slide,
            slide_width,
            start_residual: release_offset + from * slide_width,
            duration_ms: duration_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    /// Slide this animation will land on.
    pub fn target_slide(&self) -> usize {
        self.target_slide
    }

    /// Advance the animation by `dt_ms` and produce the frame to render.
    pub fn advance(&mut self, dt_ms: f32) -> MomentumFrame {
        self.elapsed_ms += dt_ms.max(0.0);
        let t = (self.elapsed_ms / self.duration_ms).min(1.0);
        let eased = ease_out_quart(t);
        let slide_progress =
            self.from_slide + (self.target_slide as f32 - self.from_slide) * eased;
        MomentumFrame {
            offset: -slide_progress * self.slide_width + self.start_residual * (1.0 - eased),
            done: t >= 1.0,
        }
    }
}
