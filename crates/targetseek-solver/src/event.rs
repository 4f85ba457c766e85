//! Event system for search progress monitoring.
//!
//! Listeners can be registered on a [`crate::SearchEngine`] to observe a
//! search as it runs: a front end can drive a progress bar from
//! `on_target_started` the way the engine's callers typically do. All
//! methods have no-op defaults and are called synchronously in registration
//! order.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use targetseek_solver::{SearchEventListener, SearchEventSupport};
//!
//! #[derive(Debug)]
//! struct PrintListener;
//!
//! impl SearchEventListener for PrintListener {
//!     fn on_target_started(&self, target_index: usize, target: f64) {
//!         println!("Searching for {target} ({})", target_index + 1);
//!     }
//! }
//!
//! let mut support = SearchEventSupport::new();
//! support.add_listener(Arc::new(PrintListener));
//! ```

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use targetseek_core::Solution;

/// Listener for search lifecycle events.
pub trait SearchEventListener: Send + Sync + Debug {
    /// Called once before any target is searched.
    ///
    /// # Arguments
    ///
    /// * `value_count` - Size of the value set
    /// * `target_count` - Number of targets in the request
    fn on_search_started(&self, _value_count: usize, _target_count: usize) {}

    /// Called when the search for one target begins.
    ///
    /// # Arguments
    ///
    /// * `target_index` - The index of the target (0-based)
    /// * `target` - The target value
    fn on_target_started(&self, _target_index: usize, _target: f64) {}

    /// Called when a target is matched.
    fn on_match_found(&self, _target: f64, _solution: &Solution) {}

    /// Called once after the last target, whether or not anything matched.
    fn on_search_ended(&self, _matches_found: usize, _duration: Duration) {}
}

/// Central event broadcaster for search events.
///
/// Manages listener registration and event distribution.
#[derive(Debug, Default)]
pub struct SearchEventSupport {
    listeners: Vec<Arc<dyn SearchEventListener>>,
}

impl SearchEventSupport {
    /// Creates an event support with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn add_listener(&mut self, listener: Arc<dyn SearchEventListener>) {
        self.listeners.push(listener);
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn fire_search_started(&self, value_count: usize, target_count: usize) {
        for listener in &self.listeners {
            listener.on_search_started(value_count, target_count);
        }
    }

    pub(crate) fn fire_target_started(&self, target_index: usize, target: f64) {
        for listener in &self.listeners {
            listener.on_target_started(target_index, target);
        }
    }

    pub(crate) fn fire_match_found(&self, target: f64, solution: &Solution) {
        for listener in &self.listeners {
            listener.on_match_found(target, solution);
        }
    }

    pub(crate) fn fire_search_ended(&self, matches_found: usize, duration: Duration) {
        for listener in &self.listeners {
            listener.on_search_ended(matches_found, duration);
        }
    }
}
