//! Pie Chart Aggregation
//!
//! - `All` selected: successful launches counted per site
//! - one site selected: that site's launches split into success and failure

use serde::Serialize;

use super::selection::SiteSelection;
use crate::dataset::{Dataset, LaunchSite, Outcome};

/// One labeled pie slice
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// Renderable pie chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice counts
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Find a slice by label
    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// Aggregate launch counts for the pie chart
pub fn pie_chart(dataset: &Dataset, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => success_by_site(dataset),
        SiteSelection::Site(site) => outcomes_for_site(dataset, *site),
    }
}

fn success_by_site(dataset: &Dataset) -> PieChart {
    let mut counts = [0usize; LaunchSite::ALL.len()];
    for record in dataset.records().iter().filter(|r| r.outcome.is_success()) {
        counts[site_index(record.site)] += 1;
    }

    let mut per_site: Vec<(LaunchSite, usize)> = LaunchSite::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect();
    // Largest slice first; stable sort keeps canonical order for ties
    per_site.sort_by(|a, b| b.1.cmp(&a.1));

    PieChart {
        title: "Total Success Launches by Site".to_string(),
        slices: per_site
            .into_iter()
            .map(|(site, count)| PieSlice {
                label: site.name().to_string(),
                count,
                color: site.color(),
            })
            .collect(),
    }
}

fn outcomes_for_site(dataset: &Dataset, site: LaunchSite) -> PieChart {
    let (successes, failures) = dataset
        .records()
        .iter()
        .filter(|r| r.site == site)
        .fold((0, 0), |(s, f), r| match r.outcome {
            Outcome::Success => (s + 1, f),
            Outcome::Failure => (s, f + 1),
        });

    let slice = |outcome: Outcome, count: usize| PieSlice {
        label: outcome.label().to_string(),
        count,
        color: outcome.color(),
    };

    PieChart {
        title: format!("Launch Outcomes for {}", site),
        slices: vec![
            slice(Outcome::Success, successes),
            slice(Outcome::Failure, failures),
        ],
    }
}

/// Position of `site` in `LaunchSite::ALL`
fn site_index(site: LaunchSite) -> usize {
    match site {
        LaunchSite::CcafsLc40 => 0,
        LaunchSite::VafbSlc4e => 1,
        LaunchSite::KscLc39a => 2,
        LaunchSite::CcafsSlc40 => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn record(site: LaunchSite, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord::new(site, payload, outcome, "FT")
    }

    /// CCAFS LC-40: 7 successes, 3 failures. KSC LC-39A: 10 successes, 3 failures.
    /// VAFB SLC-4E: 2 failures. CCAFS SLC-40: none.
    fn scenario() -> Dataset {
        let mut records = Vec::new();
        for i in 0..7 {
            records.push(record(LaunchSite::CcafsLc40, 500.0 * i as f64, Outcome::Success));
        }
        for _ in 0..3 {
            records.push(record(LaunchSite::CcafsLc40, 1_000.0, Outcome::Failure));
        }
        for i in 0..10 {
            records.push(record(LaunchSite::KscLc39a, 600.0 * i as f64, Outcome::Success));
        }
        for _ in 0..3 {
            records.push(record(LaunchSite::KscLc39a, 5_000.0, Outcome::Failure));
        }
        for _ in 0..2 {
            records.push(record(LaunchSite::VafbSlc4e, 9_600.0, Outcome::Failure));
        }
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let dataset = scenario();
        let chart = pie_chart(&dataset, &SiteSelection::All);

        assert_eq!(chart.title, "Total Success Launches by Site");
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].label, "KSC LC-39A");
        assert_eq!(chart.slices[0].count, 10);
        assert_eq!(chart.slices[0].color, "blue");
        assert_eq!(chart.slices[1].label, "CCAFS LC-40");
        assert_eq!(chart.slices[1].count, 7);
        assert_eq!(chart.slices[1].color, "red");
        assert!(chart.slice("VAFB SLC-4E").is_none());
    }

    #[test]
    fn test_all_sites_total_equals_success_count() {
        let dataset = scenario();
        let chart = pie_chart(&dataset, &SiteSelection::All);
        assert_eq!(chart.total(), dataset.success_count());
    }

    #[test]
    fn test_single_site_sums_to_site_rows() {
        let dataset = scenario();
        for site in LaunchSite::ALL {
            let chart = pie_chart(&dataset, &SiteSelection::Site(site));
            assert_eq!(chart.slices.len(), 2);
            assert_eq!(chart.total(), dataset.site_count(site), "site {}", site);
        }
    }

    #[test]
    fn test_single_site_slices() {
        let dataset = scenario();
        let chart = pie_chart(&dataset, &SiteSelection::Site(LaunchSite::KscLc39a));

        assert_eq!(chart.title, "Launch Outcomes for KSC LC-39A");
        let success = chart.slice("Success").unwrap();
        let failure = chart.slice("Failure").unwrap();
        assert_eq!((success.count, success.color), (10, "blue"));
        assert_eq!((failure.count, failure.color), (3, "red"));
    }

    #[test]
    fn test_site_without_launches_has_zero_slices() {
        let dataset = scenario();
        let chart = pie_chart(&dataset, &SiteSelection::Site(LaunchSite::CcafsSlc40));
        assert_eq!(chart.total(), 0);
        assert!(chart.slices.iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_site_index_matches_canonical_order() {
        for (i, site) in LaunchSite::ALL.into_iter().enumerate() {
            assert_eq!(site_index(site), i);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let dataset = scenario();
        let chart = pie_chart(&dataset, &SiteSelection::All);
        let mut labels: Vec<_> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), chart.slices.len());
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let dataset = Dataset::from_records(vec![
            record(LaunchSite::CcafsSlc40, 100.0, Outcome::Success),
            record(LaunchSite::VafbSlc4e, 100.0, Outcome::Success),
        ])
        .unwrap();
        let chart = pie_chart(&dataset, &SiteSelection::All);
        let labels: Vec<_> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["VAFB SLC-4E", "CCAFS SLC-40"]);
    }

    #[test]
    fn test_idempotent() {
        let dataset = scenario();
        let selection = SiteSelection::Site(LaunchSite::CcafsLc40);
        assert_eq!(pie_chart(&dataset, &selection), pie_chart(&dataset, &selection));
        assert_eq!(
            pie_chart(&dataset, &SiteSelection::All),
            pie_chart(&dataset, &SiteSelection::All)
        );
    }
}
