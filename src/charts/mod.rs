//! Chart Computations
//!
//! Pure functions from the dataset and the current control values to chart
//! descriptions. Nothing here performs I/O or holds state; identical inputs
//! always produce identical outputs.
//!
//! - **selection**: `SiteSelection` and `PayloadRange` control values
//! - **pie**: success counts per site, or success vs. failure for one site
//! - **scatter**: payload/outcome points filtered by site and payload range
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::charts::{pie_chart, scatter_chart, PayloadRange, SiteSelection};
//! use launch_dash::dataset::Dataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::load("spacex_launch_dash.csv")?;
//! let site: SiteSelection = "KSC LC-39A".parse()?;
//!
//! let pie = pie_chart(&dataset, &site);
//! let scatter = scatter_chart(&dataset, &site, PayloadRange::new(0.0, 5000.0)?);
//! println!("{} launches, {} points", pie.total(), scatter.point_count());
//! # Ok(())
//! # }
//! ```

pub mod pie;
pub mod scatter;
pub mod selection;

pub use pie::{pie_chart, PieChart, PieSlice};
pub use scatter::{filter_scatter, scatter_chart, ScatterChart, ScatterPoint, ScatterSeries};
pub use selection::{
    PayloadRange, SelectionError, SiteSelection, ALL_SITES, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP,
};
