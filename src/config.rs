//! Carousel configuration.
//!
//! [`CarouselConfig`] is supplied once at construction and stays fixed for the
//! controller's lifetime. It carries layout parameters (items per slide, gaps,
//! breakpoint), behavior flags (momentum, snapping, desktop swipe) and gesture
//! tunables.
//!
//! Construction cannot fail: [`CarouselController`](crate::CarouselController)
//! consumes a [`sanitized`](CarouselConfig::sanitized) copy, clamping invalid
//! values into range. Applications that prefer loud failures can call
//! [`validate`](CarouselConfig::validate) first and inspect the [`ConfigError`].

use std::fmt;

/// Configuration for a carousel controller.
///
/// Create with [`CarouselConfig::new`] and adjust fields via struct update
/// syntax:
///
/// ```
/// use slint_carousel::CarouselConfig;
///
/// let config = CarouselConfig {
///     desktop_items_per_slide: 4,
///     enable_momentum: false,
///     ..CarouselConfig::new(12)
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of items present in the carousel.
    pub item_count: usize,
    /// Items shown per slide below the mobile breakpoint (default: 1).
    pub mobile_items_per_slide: usize,
    /// Items shown per slide at or above the mobile breakpoint (default: 3).
    pub desktop_items_per_slide: usize,
    /// Viewport width in pixels below which the mobile layout applies (default: 900).
    pub mobile_breakpoint: f32,
    /// Gap between adjacent items on mobile, in pixels (default: 16).
    pub mobile_gap: f32,
    /// Gap between adjacent items on desktop, in pixels (default: 24).
    pub desktop_gap: f32,
    /// Freeze the carousel at offset 0 on desktop viewports (default: false).
    pub disable_desktop_carousel: bool,
    /// Track pointer drags on desktop viewports too (default: false).
    pub swipe_on_desktop: bool,
    /// Suppress the prev/next arrow surface entirely (default: false).
    pub hide_arrows: bool,
    /// Resolve fast releases with a momentum animation (default: true).
    pub enable_momentum: bool,
    /// Scales the momentum animation duration (default: 2.0).
    pub momentum_multiplier: f32,
    /// Fraction of a slide width a drag must exceed to advance one slide
    /// when momentum does not apply, in `[0, 1]` (default: 0.3).
    pub snap_threshold: f32,
    /// Drags shorter than this many pixels count as taps (default: 50).
    pub min_swipe_distance: f32,
    /// Upper bound on the momentum animation duration in ms (default: 800).
    pub max_momentum_duration: f32,
    /// Free-scroll mode: preserve the exact release offset instead of
    /// snapping to a slide boundary (default: false).
    pub disable_snap: bool,
}

impl CarouselConfig {
    /// Create a configuration with the given item count and default settings.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            mobile_items_per_slide: 1,
            desktop_items_per_slide: 3,
            mobile_breakpoint: 900.0,
            mobile_gap: 16.0,
            desktop_gap: 24.0,
            disable_desktop_carousel: false,
            swipe_on_desktop: false,
            hide_arrows: false,
            enable_momentum: true,
            momentum_multiplier: 2.0,
            snap_threshold: 0.3,
            min_swipe_distance: 50.0,
            max_momentum_duration: 800.0,
            disable_snap: false,
        }
    }

    /// Check the configuration invariants.
    ///
    /// Returns the first violated invariant, if any. The controller does not
    /// require callers to do this; it sanitizes instead (see [`sanitized`]).
    ///
    /// [`sanitized`]: CarouselConfig::sanitized
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_items_per_slide == 0 {
            return Err(ConfigError::ZeroItemsPerSlide { mobile: true });
        }
        if self.desktop_items_per_slide == 0 {
            return Err(ConfigError::ZeroItemsPerSlide { mobile: false });
        }
        if !(self.mobile_breakpoint > 0.0) {
            return Err(ConfigError::NonPositiveBreakpoint(self.mobile_breakpoint));
        }
        if !(0.0..=1.0).contains(&self.snap_threshold) {
            return Err(ConfigError::SnapThresholdOutOfRange(self.snap_threshold));
        }
        Ok(())
    }

    /// Return a copy with all invariant violations clamped into range.
    ///
    /// Items-per-slide values of 0 become 1, a non-positive or NaN breakpoint
    /// becomes 1, and the snap threshold is clamped to `[0, 1]`. A carousel
    /// with a nonsensical configuration degrades rather than panics.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        config.mobile_items_per_slide = config.mobile_items_per_slide.max(1);
        config.desktop_items_per_slide = config.desktop_items_per_slide.max(1);
        if !(config.mobile_breakpoint > 0.0) {
            config.mobile_breakpoint = 1.0;
        }
        config.snap_threshold = if config.snap_threshold.is_nan() {
            0.3
        } else {
            config.snap_threshold.clamp(0.0, 1.0)
        };
        config
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Reasons why a configuration fails validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An items-per-slide value is zero
    ZeroItemsPerSlide {
        /// Whether the mobile or desktop value is at fault
        mobile: bool,
    },
    /// The mobile breakpoint is zero, negative, or NaN
    NonPositiveBreakpoint(f32),
    /// The snap threshold is outside `[0, 1]`
    SnapThresholdOutOfRange(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemsPerSlide { mobile: true } => {
                write!(f, "mobile items-per-slide must be at least 1")
            }
            Self::ZeroItemsPerSlide { mobile: false } => {
                write!(f, "desktop items-per-slide must be at least 1")
            }
            Self::NonPositiveBreakpoint(v) => {
                write!(f, "mobile breakpoint must be positive, got {}", v)
            }
            Self::SnapThresholdOutOfRange(v) => {
                write!(f, "snap threshold must be in [0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
