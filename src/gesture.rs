//! Pointer gesture tracking.
//!
//! [`GestureTracker`] holds the state of one in-progress drag: origin,
//! current position, a bounded velocity history, and the signed drag offset.
//! It is fed raw pointer samples with caller-supplied timestamps (the
//! controller stamps them from a monotonic clock; tests pass explicit values)
//! and stays deliberately free of any Slint types so every resolution path is
//! a pure function of recorded samples.
//!
//! One tracker exists per controller and is re-armed on every gesture start;
//! values from a finished gesture are treated as invalid until the next
//! [`begin`](GestureTracker::begin).

/// Number of instantaneous velocity samples kept per gesture.
pub const VELOCITY_HISTORY_SIZE: usize = 10;

/// Number of most-recent samples averaged when resolving a release.
///
/// Averaging suppresses noise from the final, possibly-stalled frame of the
/// gesture.
pub const VELOCITY_AVERAGE_WINDOW: usize = 5;

/// Damping factor applied to drag travel beyond the first/last slide.
pub const EDGE_RESISTANCE: f32 = 0.3;

/// Releases shorter than this with sub-threshold travel count as taps (ms).
pub const TAP_MAX_DURATION_MS: f32 = 300.0;

/// Bounded ring buffer of instantaneous velocity samples (px/ms).
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityHistory {
    samples: [f32; VELOCITY_HISTORY_SIZE],
    next: usize,
    len: usize,
}

impl VelocityHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a velocity sample, evicting the oldest when full.
    pub fn push(&mut self, velocity: f32) {
        self.samples[self.next] = velocity;
        self.next = (self.next + 1) % VELOCITY_HISTORY_SIZE;
        self.len = (self.len + 1).min(VELOCITY_HISTORY_SIZE);
    }

    /// Number of recorded samples (at most [`VELOCITY_HISTORY_SIZE`]).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.next = 0;
        self.len = 0;
    }

    /// Average of the most recent `window` samples (fewer if fewer exist).
    ///
    /// Returns 0 when no samples were recorded.
    pub fn average_recent(&self, window: usize) -> f32 {
        let count = window.min(self.len);
        if count == 0 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..count {
            let idx = (self.next + VELOCITY_HISTORY_SIZE - 1 - i) % VELOCITY_HISTORY_SIZE;
            sum += self.samples[idx];
        }
        sum / count as f32
    }
}

/// Everything a release resolution needs to know about the finished gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSummary {
    /// Signed horizontal travel in pixels (`current_x − start_x`).
    pub drag_offset: f32,
    /// Gesture duration in ms.
    pub duration_ms: f32,
    /// Average of the last up-to-[`VELOCITY_AVERAGE_WINDOW`] velocity samples,
    /// px/ms.
    pub average_velocity: f32,
    /// Container offset at the moment the gesture started.
    pub base_offset: f32,
}

/// Tracks one in-progress pointer gesture.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    dragging: bool,
    pointer_id: Option<i32>,
    start_x: f32,
    current_x: f32,
    last_x: f32,
    start_time: f32,
    last_time: f32,
    velocity: f32,
    history: VelocityHistory,
    drag_offset: f32,
    base_offset: f32,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The pointer being tracked, if a gesture is in progress.
    pub fn pointer_id(&self) -> Option<i32> {
        if self.dragging {
            self.pointer_id
        } else {
            None
        }
    }

    /// Current signed drag travel in pixels.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Container offset captured at gesture start.
    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// Instantaneous velocity of the last move sample, px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Start tracking a gesture.
    ///
    /// `base_offset` is the container offset at this moment; subsequent move
    /// samples produce candidate offsets relative to it. Any previous gesture
    /// state is discarded.
    pub fn begin(&mut self, pointer_id: i32, x: f32, time_ms: f32, base_offset: f32) {
        self.dragging = true;
        self.pointer_id = Some(pointer_id);
        self.start_x = x;
        self.current_x = x;
        self.last_x = x;
        self.start_time = time_ms;
        self.last_time = time_ms;
        self.velocity = 0.0;
        self.history.clear();
        self.drag_offset = 0.0;
        self.base_offset = base_offset;
    }

    /// Feed a move sample.
    ///
    /// Returns the raw candidate container offset (`base_offset + drag_offset`,
    /// before edge resistance), or `None` if no gesture is in progress or the
    /// sample belongs to an untracked pointer.
    pub fn update(&mut self, pointer_id: i32, x: f32, time_ms: f32) -> Option<f32> {
        if !self.dragging || self.pointer_id != Some(pointer_id) {
            return None;
        }
        let dt = time_ms - self.last_time;
        if dt > 0.0 {
            self.velocity = (x - self.last_x) / dt;
            self.history.push(self.velocity);
            self.last_x = x;
            self.last_time = time_ms;
        }
        self.current_x = x;
        self.drag_offset = x - self.start_x;
        Some(self.base_offset + self.drag_offset)
    }

    /// End the gesture and summarize it for resolution.
    ///
    /// Returns `None` if no gesture is in progress or the pointer does not
    /// match. The tracker's fields remain readable but are invalid until the
    /// next [`begin`](GestureTracker::begin).
    pub fn release(&mut self, pointer_id: i32, time_ms: f32) -> Option<GestureSummary> {
        if !self.dragging || self.pointer_id != Some(pointer_id) {
            return None;
        }
        self.dragging = false;
        Some(GestureSummary {
            drag_offset: self.drag_offset,
            duration_ms: (time_ms - self.start_time).max(0.0),
            average_velocity: self.history.average_recent(VELOCITY_AVERAGE_WINDOW),
            base_offset: self.base_offset,
        })
    }

    /// Abandon the gesture without producing a summary.
    pub fn cancel(&mut self) {
        self.dragging = false;
    }
}

/// Apply rubber-band damping to an offset outside `[min_offset, 0]`.
///
/// Travel inside the range passes through unchanged; the excess beyond either
/// bound is scaled by [`EDGE_RESISTANCE`]. Re-applied on every move sample so
/// the resistance is felt continuously, not just at release.
pub fn resist_edges(offset: f32, min_offset: f32) -> f32 {
    if offset > 0.0 {
        offset * EDGE_RESISTANCE
    } else if offset < min_offset {
        min_offset + (offset - min_offset) * EDGE_RESISTANCE
    } else {
        offset
    }
}
