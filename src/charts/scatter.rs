//! Scatter Chart Filtering
//!
//! Selects the launches inside a payload range (and optionally one site) and
//! arranges them as points: x = payload mass, y = outcome class, one colored
//! series per booster version category.

use serde::Serialize;

use super::selection::{PayloadRange, SiteSelection};
use crate::dataset::{Dataset, LaunchRecord};

/// Series colors, assigned to booster categories in dataset order
const SERIES_COLORS: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A single plotted launch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    /// Payload mass (kg)
    pub x: f64,
    /// Outcome class (0 or 1)
    pub y: u8,
    /// Hover label
    pub text: String,
}

/// Points sharing one booster version category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<ScatterPoint>,
}

/// Renderable scatter chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub range: PayloadRange,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total number of plotted points
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Records inside `range` (inclusive) and matching `selection`, in dataset order
pub fn filter_scatter<'a>(
    dataset: &'a Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.includes(r.site))
        .collect()
}

/// Build the scatter chart for the current control values
pub fn scatter_chart(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let categories = booster_categories(dataset);
    let mut series: Vec<ScatterSeries> = categories
        .iter()
        .enumerate()
        .map(|(idx, name)| ScatterSeries {
            name: name.to_string(),
            color: SERIES_COLORS[idx % SERIES_COLORS.len()],
            points: Vec::new(),
        })
        .collect();

    for record in filter_scatter(dataset, selection, range) {
        if let Some(idx) = categories.iter().position(|c| *c == record.booster_category) {
            series[idx].points.push(ScatterPoint {
                x: record.payload_mass_kg,
                y: record.outcome.class(),
                text: record.hover_text(),
            });
        }
    }
    series.retain(|s| !s.points.is_empty());

    let title = match selection {
        SiteSelection::All => "Success count on Payload mass for all sites".to_string(),
        SiteSelection::Site(site) => format!("Success count on Payload mass for site {}", site),
    };

    ScatterChart {
        title,
        x_label: "Payload Mass (kg)",
        y_label: "class",
        range,
        series,
    }
}

/// Distinct booster categories in order of first appearance
///
/// Computed from the whole dataset so a category keeps its color whatever
/// the current filter is.
fn booster_categories(dataset: &Dataset) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for record in dataset.records() {
        if !categories.contains(&record.booster_category.as_str()) {
            categories.push(&record.booster_category);
        }
    }
    categories
}
