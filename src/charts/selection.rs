//! Control values: which site is selected and which payload range is active.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::dataset::{Dataset, LaunchSite};

/// Lowest value the payload slider allows, in kg
pub const SLIDER_MIN: f64 = 0.0;
/// Highest value the payload slider allows, in kg
pub const SLIDER_MAX: f64 = 10_000.0;
/// Slider step, in kg
pub const SLIDER_STEP: f64 = 1_000.0;

/// Wire value of the "all sites" dropdown option
pub const ALL_SITES: &str = "ALL";

/// Errors from parsing or validating control values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Site name is not one of the known launch sites
    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    /// Range is reversed or outside the slider bounds
    #[error("Invalid payload range [{low}, {high}]: must satisfy 0 <= low <= high <= 10000")]
    InvalidRange { low: f64, high: f64 },
}

/// Dropdown value: every site, or one specific site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Wire value used by the dropdown
    pub fn value(&self) -> &'static str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site.name(),
        }
    }

    /// Whether a record from `site` passes this selection
    pub fn includes(&self, site: LaunchSite) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => *selected == site,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL_SITES {
            return Ok(SiteSelection::All);
        }
        LaunchSite::from_name(s)
            .map(SiteSelection::Site)
            .ok_or_else(|| SelectionError::UnknownSite(s.to_string()))
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl From<LaunchSite> for SiteSelection {
    fn from(site: LaunchSite) -> Self {
        SiteSelection::Site(site)
    }
}

/// Inclusive payload mass interval in kg, always within the slider bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Create a range, rejecting reversed or out-of-bounds values
    pub fn new(low: f64, high: f64) -> Result<Self, SelectionError> {
        // NaN fails every comparison, so it is rejected here too
        let valid = SLIDER_MIN <= low && low <= high && high <= SLIDER_MAX;
        if !valid {
            return Err(SelectionError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The whole slider span
    pub fn full() -> Self {
        Self {
            low: SLIDER_MIN,
            high: SLIDER_MAX,
        }
    }

    /// Starting slider value: the dataset's payload bounds, clamped to the slider
    pub fn initial(dataset: &Dataset) -> Self {
        let low = dataset.payload_min().clamp(SLIDER_MIN, SLIDER_MAX);
        let high = dataset.payload_max().clamp(low, SLIDER_MAX);
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Check if a payload mass falls within this range (both ends inclusive)
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.low && mass_kg <= self.high
    }
}

impl TryFrom<(f64, f64)> for PayloadRange {
    type Error = SelectionError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for (f64, f64) {
    fn from(range: PayloadRange) -> Self {
        (range.low, range.high)
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] kg", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    #[test]
    fn test_parse_selection() {
        assert_eq!("ALL".parse::<SiteSelection>(), Ok(SiteSelection::All));
        assert_eq!(
            "KSC LC-39A".parse::<SiteSelection>(),
            Ok(SiteSelection::Site(LaunchSite::KscLc39a))
        );
        assert_eq!(
            "Vandenberg".parse::<SiteSelection>(),
            Err(SelectionError::UnknownSite("Vandenberg".to_string()))
        );
        // The sentinel is case-sensitive, as the dropdown emits it
        assert!("all".parse::<SiteSelection>().is_err());
    }

    #[test]
    fn test_selection_value_round_trip() {
        let selections = std::iter::once(SiteSelection::All)
            .chain(LaunchSite::ALL.into_iter().map(SiteSelection::from));
        for selection in selections {
            assert_eq!(selection.value().parse::<SiteSelection>(), Ok(selection));
        }
    }

    #[test]
    fn test_selection_includes() {
        assert!(SiteSelection::All.includes(LaunchSite::VafbSlc4e));
        let ksc = SiteSelection::Site(LaunchSite::KscLc39a);
        assert!(ksc.includes(LaunchSite::KscLc39a));
        assert!(!ksc.includes(LaunchSite::CcafsLc40));
    }

    #[test]
    fn test_range_validation() {
        assert!(PayloadRange::new(0.0, 10_000.0).is_ok());
        assert!(PayloadRange::new(0.0, 0.0).is_ok());
        assert!(PayloadRange::new(5_000.0, 4_000.0).is_err());
        assert!(PayloadRange::new(-1.0, 100.0).is_err());
        assert!(PayloadRange::new(0.0, 10_001.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = PayloadRange::new(1_000.0, 2_000.0).unwrap();
        assert!(!range.contains(999.9));
        assert!(range.contains(1_000.0));
        assert!(range.contains(2_000.0));
        assert!(!range.contains(2_000.1));
    }

    #[test]
    fn test_initial_range_is_clamped() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new(LaunchSite::KscLc39a, 350.0, Outcome::Success, "FT"),
            LaunchRecord::new(LaunchSite::KscLc39a, 15_600.0, Outcome::Success, "B5"),
        ])
        .unwrap();

        let range = PayloadRange::initial(&dataset);
        assert_eq!(range.low(), 350.0);
        assert_eq!(range.high(), SLIDER_MAX);
    }

    #[test]
    fn test_range_deserialize_rejects_reversed() {
        let ok: PayloadRange = serde_json::from_str("[0.0, 500.0]").unwrap();
        assert_eq!(ok.high(), 500.0);
        assert!(serde_json::from_str::<PayloadRange>("[500.0, 0.0]").is_err());
    }
}
