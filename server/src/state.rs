//! Application state for the iris inference server
//!
//! The classifier is loaded once before the listener starts and shared
//! read-only with every handler; no request mutates it, so no locking
//! is needed.

use std::sync::Arc;
use std::time::Instant;

use iris_infer::IrisClassifier;

/// Shared application state
pub struct AppState {
    /// The loaded classifier, immutable for the process lifetime
    pub classifier: IrisClassifier,
    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    pub fn new(classifier: IrisClassifier) -> Self {
        Self {
            classifier,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
