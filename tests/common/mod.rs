//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_carousel::ViewUpdate;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every [`ViewUpdate`] the controller emits through its sink.
#[derive(Default, Clone)]
pub struct ViewTracker {
    pub updates: Rc<RefCell<Vec<ViewUpdate>>>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of updates recorded so far.
    pub fn count(&self) -> usize {
        self.updates.borrow().len()
    }

    /// The most recent update, if any.
    pub fn last(&self) -> Option<ViewUpdate> {
        self.updates.borrow().last().cloned()
    }

    /// Snapshot of all recorded updates.
    pub fn all(&self) -> Vec<ViewUpdate> {
        self.updates.borrow().clone()
    }

    /// Clear all recorded updates.
    pub fn clear(&self) {
        self.updates.borrow_mut().clear();
    }
}
