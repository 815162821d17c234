//! Core data types for launch records
//!
//! - `LaunchSite`: the canonical, closed list of known launch pads
//! - `Outcome`: binary launch result (class 1 = success, 0 = failure)
//! - `LaunchRecord`: one row of the launch dataset

use serde::{Deserialize, Serialize};

/// One of the four known launch pads
///
/// `LaunchSite::ALL` is the single source of truth for site names. Dropdown
/// options and the pie color map are both derived from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaunchSite {
    #[serde(rename = "CCAFS LC-40")]
    CcafsLc40,
    #[serde(rename = "VAFB SLC-4E")]
    VafbSlc4e,
    #[serde(rename = "KSC LC-39A")]
    KscLc39a,
    #[serde(rename = "CCAFS SLC-40")]
    CcafsSlc40,
}

impl LaunchSite {
    /// All known sites in dropdown order
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4e,
        LaunchSite::KscLc39a,
        LaunchSite::CcafsSlc40,
    ];

    /// Site name as it appears in the dataset and the UI
    pub fn name(&self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }

    /// Fixed pie slice color for this site
    pub fn color(&self) -> &'static str {
        match self {
            LaunchSite::KscLc39a => "blue",
            LaunchSite::CcafsLc40 => "red",
            LaunchSite::VafbSlc4e => "green",
            LaunchSite::CcafsSlc40 => "purple",
        }
    }

    /// Look up a site by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|site| site.name() == name)
    }
}

impl std::fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Launch outcome, serialized as its class value (1 or 0)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Numeric class: 1 for success, 0 for failure
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Fixed pie slice color for this outcome
    pub fn color(&self) -> &'static str {
        match self {
            Outcome::Success => "blue",
            Outcome::Failure => "red",
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

/// A single launch, immutable once loaded
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch pad the rocket flew from
    pub site: LaunchSite,
    /// Payload mass in kilograms (non-negative)
    pub payload_mass_kg: f64,
    /// Success or failure of the landing/launch
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// Booster family label, used for scatter color grouping
    pub booster_category: String,
    /// Sequential flight number, when present in the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    /// Full booster version label, when present in the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    /// Create a record with the required fields
    pub fn new(
        site: LaunchSite,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site,
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    /// Builder: set flight number
    pub fn flight_number(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    /// Builder: set full booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    /// Short hover label, e.g. "Flight 12 (F9 v1.1 B1011)"
    pub fn hover_text(&self) -> String {
        match (self.flight_number, &self.booster_version) {
            (Some(n), Some(v)) => format!("Flight {} ({})", n, v),
            (Some(n), None) => format!("Flight {}", n),
            (None, Some(v)) => v.clone(),
            (None, None) => self.booster_category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_names_round_trip() {
        for site in LaunchSite::ALL {
            assert_eq!(LaunchSite::from_name(site.name()), Some(site));
        }
        assert_eq!(LaunchSite::from_name("Boca Chica"), None);
        assert_eq!(LaunchSite::from_name("ksc lc-39a"), None);
    }

    #[test]
    fn test_site_colors_are_distinct() {
        let mut colors: Vec<_> = LaunchSite::ALL.iter().map(|s| s.color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), LaunchSite::ALL.len());
    }

    #[test]
    fn test_site_serializes_as_name() {
        let json = serde_json::to_string(&LaunchSite::KscLc39a).unwrap();
        assert_eq!(json, "\"KSC LC-39A\"");
    }

    #[test]
    fn test_outcome_class() {
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
        assert_eq!(Outcome::try_from(1u8), Ok(Outcome::Success));
        assert!(Outcome::try_from(2u8).is_err());
        assert_eq!(serde_json::to_string(&Outcome::Failure).unwrap(), "0");
    }

    #[test]
    fn test_hover_text() {
        let record = LaunchRecord::new(LaunchSite::CcafsLc40, 500.0, Outcome::Success, "v1.1");
        assert_eq!(record.hover_text(), "v1.1");

        let record = record.flight_number(7).booster_version("F9 v1.1 B1003");
        assert_eq!(record.hover_text(), "Flight 7 (F9 v1.1 B1003)");
    }
}
