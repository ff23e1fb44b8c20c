//! Layout metrics derived from reported geometry.
//!
//! The library never measures widgets itself. The application reports the
//! rendered item width and the viewport width through the controller's
//! callbacks, and [`compute_metrics`] derives everything else fresh on every
//! query. [`SlideMetrics`] is a pure snapshot of config + reports at call
//! time; nothing in it is cached.

use crate::config::CarouselConfig;

/// Raw geometry reports from the application.
///
/// Holds the last reported item width and viewport width. Both start at 0,
/// which downstream math treats as "no items rendered yet": slide width
/// degrades to `gap × items_per_slide` and all offsets collapse to 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutCache {
    /// Rendered width of one item, in pixels.
    pub item_width: f32,
    /// Current viewport width, in pixels.
    pub viewport_width: f32,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard handler for item width reports from Slint.
    pub fn handle_item_width_report(&mut self, width: f32) {
        self.item_width = width.max(0.0);
    }

    /// Standard handler for viewport width reports from Slint.
    pub fn handle_viewport_report(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }
}

/// Derived layout facts for the current viewport.
///
/// Recomputed on every query via [`compute_metrics`]; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMetrics {
    /// Rendered width of one item, in pixels (0 if not yet reported).
    pub item_width: f32,
    /// Whether the viewport is below the mobile breakpoint.
    pub is_mobile: bool,
    /// Effective gap between items, in pixels.
    pub gap: f32,
    /// Effective number of items per slide.
    pub items_per_slide: usize,
    /// Pixel distance between adjacent slide positions:
    /// `(item_width + gap) × items_per_slide`.
    pub slide_width: f32,
    /// Number of discrete slide positions. Always at least 1, and exactly 1
    /// when the desktop carousel is disabled on a desktop viewport.
    pub total_slides: usize,
}

impl SlideMetrics {
    /// Container offset for a slide index: `-index × slide_width`.
    pub fn offset_for_slide(&self, slide: usize) -> f32 {
        -(slide as f32) * self.slide_width
    }

    /// Lower bound of the valid offset range: `-(total_slides − 1) × slide_width`.
    ///
    /// The valid range is `[min_offset, 0]`; dragging beyond it hits edge
    /// resistance.
    pub fn min_offset(&self) -> f32 {
        self.offset_for_slide(self.total_slides.saturating_sub(1))
    }

    /// Nearest slide index for a container offset, clamped into range.
    ///
    /// With a zero slide width (no items rendered yet) every offset maps to
    /// slide 0.
    pub fn slide_for_offset(&self, offset: f32) -> usize {
        if self.slide_width <= 0.0 {
            return 0;
        }
        let slide = (-offset / self.slide_width).round();
        if slide <= 0.0 {
            0
        } else {
            (slide as usize).min(self.total_slides.saturating_sub(1))
        }
    }

    /// Clamp a continuous offset into the valid `[min_offset, 0]` range.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), 0.0)
    }
}

/// Derive layout facts from the configuration and the latest geometry reports.
///
/// Pure function; mutates nothing. Zero-safe: a missing item width (0) never
/// produces a division by zero downstream, and an item count of 0 still yields
/// one (empty) slide so the `0 ≤ current_slide < total_slides` invariant holds.
pub fn compute_metrics(config: &CarouselConfig, layout: &LayoutCache) -> SlideMetrics {
    let is_mobile = layout.viewport_width < config.mobile_breakpoint;
    let gap = if is_mobile {
        config.mobile_gap
    } else {
        config.desktop_gap
    };
    let items_per_slide = if is_mobile {
        config.mobile_items_per_slide.max(1)
    } else {
        config.desktop_items_per_slide.max(1)
    };
    let item_width = layout.item_width.max(0.0);
    let slide_width = (item_width + gap) * items_per_slide as f32;

    let total_slides = if config.disable_desktop_carousel && !is_mobile {
        1
    } else {
        ((config.item_count + items_per_slide - 1) / items_per_slide).max(1)
    };

    SlideMetrics {
        item_width,
        is_mobile,
        gap,
        items_per_slide,
        slide_width,
        total_slides,
    }
}
