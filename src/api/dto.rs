//! Data Transfer Objects
//!
//! Query parameters and response types for the API endpoints.
//! Chart responses reuse the serializable chart types directly.

use serde::{Deserialize, Serialize};

use crate::charts::{PayloadRange, SiteSelection};
use crate::api::error::ApiResult;

/// Query string for `GET /api/v1/charts/pie`
#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    /// Dropdown value: "ALL" or a site name (default "ALL")
    #[serde(default)]
    pub site: Option<String>,
}

impl PieParams {
    pub fn selection(&self) -> ApiResult<SiteSelection> {
        parse_site(self.site.as_deref())
    }
}

/// Query string for `GET /api/v1/charts/scatter`
#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    /// Dropdown value: "ALL" or a site name (default "ALL")
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: initial slider value)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: initial slider value)
    #[serde(default)]
    pub high: Option<f64>,
}

impl ScatterParams {
    pub fn selection(&self) -> ApiResult<SiteSelection> {
        parse_site(self.site.as_deref())
    }

    /// Requested range, with missing bounds taken from `initial`
    pub fn range(&self, initial: PayloadRange) -> ApiResult<PayloadRange> {
        let low = self.low.unwrap_or_else(|| initial.low());
        let high = self.high.unwrap_or_else(|| initial.high());
        Ok(PayloadRange::new(low, high)?)
    }
}

fn parse_site(site: Option<&str>) -> ApiResult<SiteSelection> {
    match site {
        None => Ok(SiteSelection::All),
        Some(value) => Ok(value.parse()?),
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, "healthy" while serving
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
