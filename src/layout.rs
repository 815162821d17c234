//! Dashboard Layout
//!
//! Static description of the page controls, built once at startup and
//! served to the browser, which renders it and wires the controls to the
//! chart endpoints.

use serde::Serialize;

use crate::charts::{PayloadRange, SiteSelection, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::dataset::{Dataset, LaunchSite};

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

const SLIDER_MARK_INTERVAL: f64 = 2_500.0;

/// Full page layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub dropdown: Dropdown,
    pub slider: RangeSlider,
    pub charts: Vec<ChartSlot>,
}

/// Launch site dropdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Payload mass range slider
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeSlider {
    pub id: &'static str,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Placeholder for one chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSlot {
    pub id: &'static str,
    pub kind: ChartKind,
    /// Endpoint the page calls to refresh this chart
    pub endpoint: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
}

impl Layout {
    /// Build the layout for a loaded dataset
    pub fn build(dataset: &Dataset) -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            dropdown: site_dropdown(),
            slider: payload_slider(PayloadRange::initial(dataset)),
            charts: vec![
                ChartSlot {
                    id: PIE_CHART_ID,
                    kind: ChartKind::Pie,
                    endpoint: "/api/v1/charts/pie",
                },
                ChartSlot {
                    id: SCATTER_CHART_ID,
                    kind: ChartKind::Scatter,
                    endpoint: "/api/v1/charts/scatter",
                },
            ],
        }
    }
}

fn site_dropdown() -> Dropdown {
    let all = DropdownOption {
        label: "All Sites".to_string(),
        value: SiteSelection::All.value().to_string(),
    };
    let sites = LaunchSite::ALL.iter().map(|site| DropdownOption {
        label: site.name().to_string(),
        value: SiteSelection::Site(*site).value().to_string(),
    });

    Dropdown {
        id: SITE_DROPDOWN_ID,
        options: std::iter::once(all).chain(sites).collect(),
        value: SiteSelection::default().value().to_string(),
        placeholder: "Select a Launch Site here".to_string(),
        searchable: true,
    }
}

fn payload_slider(initial: PayloadRange) -> RangeSlider {
    let mark_count = (SLIDER_MAX / SLIDER_MARK_INTERVAL) as usize;
    let marks = (0..=mark_count)
        .map(|i| {
            let value = SLIDER_MIN + i as f64 * SLIDER_MARK_INTERVAL;
            SliderMark {
                value,
                label: format!("{}", value),
            }
        })
        .collect();

    RangeSlider {
        id: PAYLOAD_SLIDER_ID,
        label: "Payload range (Kg):".to_string(),
        min: SLIDER_MIN,
        max: SLIDER_MAX,
        step: SLIDER_STEP,
        marks,
        value: initial,
    }
}
