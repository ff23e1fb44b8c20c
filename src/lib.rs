//! # Slint Carousel Library
//!
//! A flexible, headless Slint component library for swipeable carousels.
//! Supports free scroll, momentum flicks, edge resistance, and multi-input
//! navigation (touch, optional desktop drag, keyboard, indicator dots,
//! arrows).
//!
//! ## Features
//!
//! - **Headless Core** - Gesture, physics, and navigation logic with no
//!   widget coupling; the application owns rendering and reports geometry
//! - **Callback-Based Wiring** - Controller hands out ready-to-use Slint
//!   callbacks; one sink receives every view change
//! - **Momentum Physics** - Deceleration-model flick resolution with a
//!   cancellable quartic-eased animation driver
//! - **Accessible** - Wrapping arrow/keyboard navigation, Home/End jumps,
//!   and "Slide N of M" announcements for a live region
//! - **Resource-Safe** - Debounced resize handling, minimal indicator
//!   rebuilds, and an idempotent `destroy()`
//!
//! ## Quick Start
//!
//! ```ignore
//! use slint_carousel::{CarouselConfig, CarouselController};
//!
//! let ctrl = CarouselController::new(CarouselConfig::new(9));
//! window.on_carousel_pointer_pressed(ctrl.pointer_pressed_callback());
//! window.on_carousel_key_pressed(ctrl.key_pressed_callback());
//! ctrl.on_view_changed(move |update| {
//!     // bind update.offset_x, update.active_indicator, ...
//! });
//! ctrl.refresh();
//! ```
//!
//! ## Core Components
//!
//! - [`CarouselController`] - Input fusion facade and lifecycle owner
//! - [`CarouselConfig`] - Construction-time configuration
//! - [`SlideNavigator`] - The authoritative slide state machine
//! - [`GestureTracker`] - Per-gesture interaction state
//! - [`MomentumDriver`] - Cancellable flick animation
//! - [`ControlSurface`] - Indicator/arrow state with minimal rebuilds
//!
//! ## Rust Helpers
//!
//! Lower-level pieces are public for applications with custom wiring:
//!
//! - [`compute_metrics`] - Derive slide geometry from reported widths
//! - [`calculate_momentum`] - Pure velocity-to-target projection
//! - [`resist_edges`] - Rubber-band damping beyond the first/last slide
//! - [`slide_announcement`] - Live-region text for a position change

pub mod announcer;
pub mod config;
pub mod controller;
pub mod controls;
pub mod gesture;
pub mod metrics;
pub mod momentum;
pub mod navigator;

// Re-export the main types and functions
pub use announcer::slide_announcement;
pub use config::{CarouselConfig, ConfigError};
pub use controller::{CarouselController, ViewUpdate, RESIZE_DEBOUNCE_MS};
pub use controls::ControlSurface;
pub use gesture::{
    resist_edges, GestureSummary, GestureTracker, VelocityHistory, EDGE_RESISTANCE,
    TAP_MAX_DURATION_MS, VELOCITY_AVERAGE_WINDOW, VELOCITY_HISTORY_SIZE,
};
pub use metrics::{compute_metrics, LayoutCache, SlideMetrics};
pub use momentum::{
    calculate_momentum, ease_out_quart, MomentumDriver, MomentumFrame, MomentumPlan,
    DECELERATION, FRAME_INTERVAL_MS, MIN_MOMENTUM_DURATION, VELOCITY_FLOOR,
};
pub use navigator::{
    CarouselState, ReleaseOutcome, SlideNavigator, ViewState, QUICK_FLICK_MAX_DURATION_MS,
};
