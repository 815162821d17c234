//! # Launch Dash
//!
//! SpaceX Launch Records Dashboard - a small web dashboard over a static CSV
//! of launch records. Pick a launch site and a payload mass range; a pie
//! chart and a scatter chart update accordingly.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading into an immutable, shared `Dataset`
//! - [`charts`]: Pure pie aggregation and scatter filtering
//! - [`layout`]: Static description of the page controls
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::{pie_chart, Dataset, SiteSelection};
//!
//! let dataset = Dataset::load("spacex_launch_dash.csv")?;
//! let pie = pie_chart(&dataset, &SiteSelection::All);
//!
//! for slice in &pie.slices {
//!     println!("{}: {}", slice.label, slice.count);
//! }
//! # Ok::<(), launch_dash::LoadError>(())
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;
pub mod logging;

pub use dataset::{Dataset, DatasetSummary, LaunchRecord, LaunchSite, LoadError, Outcome};

pub use charts::{
    filter_scatter, pie_chart, scatter_chart, PayloadRange, PieChart, PieSlice, ScatterChart,
    SelectionError, SiteSelection,
};

pub use layout::Layout;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
