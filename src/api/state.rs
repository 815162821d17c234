//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::charts::PayloadRange;
use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::layout::Layout;

/// Shared application state for all handlers
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// The launch dataset
    pub dataset: Arc<Dataset>,
    /// Page layout, built once from the dataset
    pub layout: Arc<Layout>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state for a loaded dataset
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        let layout = Arc::new(Layout::build(&dataset));
        Self {
            dataset,
            layout,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Payload range used when a request does not specify one
    pub fn initial_range(&self) -> PayloadRange {
        self.layout.slider.value
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
