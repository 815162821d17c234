//! Launch Dataset
//!
//! - **types**: `LaunchRecord`, `LaunchSite`, `Outcome`
//! - **loader**: CSV parsing into an immutable `Dataset`
//! - **error**: `LoadError`
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::dataset::Dataset;
//!
//! let dataset = Dataset::load("spacex_launch_dash.csv")?;
//! println!("{} launches, payload {}..{} kg",
//!     dataset.len(), dataset.payload_min(), dataset.payload_max());
//! # Ok::<(), launch_dash::dataset::LoadError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::{Dataset, DatasetSummary};
pub use types::{LaunchRecord, LaunchSite, Outcome};
