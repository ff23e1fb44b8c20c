//! Screen-reader announcements.
//!
//! Every position change produces a "Slide N of M" string the application
//! routes into a visually hidden `aria-live`-style text element (in Slint,
//! typically a zero-sized `Text` with `accessible-role: text` whose content
//! is bound to the latest announcement).

use slint::SharedString;

/// Format the announcement for a position change. Slides are 1-based for
/// human ears.
pub fn slide_announcement(current_slide: usize, total_slides: usize) -> SharedString {
    slint::format!("Slide {} of {}", current_slide + 1, total_slides)
}
