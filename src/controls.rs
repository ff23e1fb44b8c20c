//! Indicator and arrow surface state.
//!
//! [`ControlSurface`] decides when the indicator-dot row must be rebuilt and
//! what the arrows/dots should currently show. Rebuilds are keyed on the
//! effective items-per-slide value, so a stream of resize ticks that does not
//! change the layout leaves the dot widgets untouched (a declarative diff
//! rather than rebuild-every-tick). The dot states sync into a
//! `VecModel<bool>` the application binds to its dot row.

use crate::metrics::SlideMetrics;
use slint::{Model, VecModel};

/// Minimum item count before indicator dots are shown at all.
const MIN_ITEMS_FOR_INDICATORS: usize = 3;

/// Tracks the rebuild key and visibility rules for the injected controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSurface {
    last_items_per_slide: Option<usize>,
}

impl ControlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the indicator row must be rebuilt for these metrics.
    ///
    /// True only when the effective items-per-slide differs from the value
    /// recorded at the last rebuild.
    pub fn needs_rebuild(&self, metrics: &SlideMetrics) -> bool {
        self.last_items_per_slide != Some(metrics.items_per_slide)
    }

    /// Record a rebuild for these metrics.
    ///
    /// Returns `true` if the rebuild key actually changed (callers re-clamp
    /// the current slide and re-sync the dot model in that case).
    pub fn rebuild(&mut self, metrics: &SlideMetrics) -> bool {
        if !self.needs_rebuild(metrics) {
            return false;
        }
        self.last_items_per_slide = Some(metrics.items_per_slide);
        true
    }

    /// Indicator dots are only rendered for ≥3 items spanning >1 slide.
    pub fn indicators_visible(&self, item_count: usize, metrics: &SlideMetrics) -> bool {
        item_count >= MIN_ITEMS_FOR_INDICATORS && metrics.total_slides > 1
    }

    /// Arrows are disabled whenever there is nowhere to go.
    pub fn arrows_enabled(&self, metrics: &SlideMetrics) -> bool {
        metrics.total_slides > 1
    }

    /// Sync the dot model: one `bool` per slide, `true` for the active one.
    ///
    /// Clears the model when indicators are not visible.
    pub fn sync_to_model(
        &self,
        model: &VecModel<bool>,
        item_count: usize,
        metrics: &SlideMetrics,
        current_slide: usize,
    ) {
        while model.row_count() > 0 {
            model.remove(0);
        }
        if !self.indicators_visible(item_count, metrics) {
            return;
        }
        for slide in 0..metrics.total_slides {
            model.push(slide == current_slide);
        }
    }
}
