//! CSV Loader
//!
//! Reads the launch CSV into a `Dataset`. Columns are located by header
//! name, so column order and extra columns do not matter.

use super::error::{LoadError, LoadResult};
use super::types::{LaunchRecord, LaunchSite, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Header positions of the columns we read
struct ColumnMap {
    site: usize,
    payload: usize,
    class: usize,
    booster_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        Ok(Self {
            site: require(COL_LAUNCH_SITE)?,
            payload: require(COL_PAYLOAD_MASS)?,
            class: require(COL_CLASS)?,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            flight_number: find(COL_FLIGHT_NUMBER),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }
}

/// The full, read-only launch dataset
///
/// Loaded once at startup and shared behind an `Arc`. Payload bounds are
/// computed once at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    payload_min: f64,
    payload_max: f64,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            payload_min = dataset.payload_min,
            payload_max = dataset.payload_max,
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Parse the dataset from any CSV source (useful for testing)
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            // Header is line 1
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            records.push(parse_row(&row, &columns, line)?);
        }

        Self::from_records(records)
    }

    /// Build a dataset from already-parsed records
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            payload_min,
            payload_max,
        })
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the dataset
    pub fn payload_min(&self) -> f64 {
        self.payload_min
    }

    /// Largest payload mass in the dataset
    pub fn payload_max(&self) -> f64 {
        self.payload_max
    }

    /// Number of successful launches across all sites
    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    /// Number of records for one site
    pub fn site_count(&self, site: LaunchSite) -> usize {
        self.records.iter().filter(|r| r.site == site).count()
    }

    /// Summary statistics for display and health reporting
    pub fn summary(&self) -> DatasetSummary {
        let mut launches_by_site = BTreeMap::new();
        for site in LaunchSite::ALL {
            launches_by_site.insert(site.name().to_string(), self.site_count(site));
        }

        DatasetSummary {
            records: self.len(),
            successes: self.success_count(),
            payload_min: self.payload_min,
            payload_max: self.payload_max,
            launches_by_site,
        }
    }
}

/// Dataset statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub successes: usize,
    pub payload_min: f64,
    pub payload_max: f64,
    pub launches_by_site: BTreeMap<String, usize>,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "records={}, successes={}, payload=[{}, {}] kg",
            self.records, self.successes, self.payload_min, self.payload_max
        )
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap, line: u64) -> LoadResult<LaunchRecord> {
    let invalid = |reason: String| LoadError::InvalidRow { line, reason };
    let field = |idx: usize| row.get(idx).unwrap_or("");

    let site_name = field(columns.site);
    let site = LaunchSite::from_name(site_name)
        .ok_or_else(|| invalid(format!("unknown launch site '{}'", site_name)))?;

    let payload_str = field(columns.payload);
    let payload_mass_kg: f64 = payload_str
        .parse()
        .map_err(|_| invalid(format!("invalid payload mass '{}'", payload_str)))?;
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(invalid(format!(
            "payload mass must be a non-negative number, got {}",
            payload_str
        )));
    }

    let class_str = field(columns.class);
    let outcome = class_str
        .parse::<u8>()
        .map_err(|_| format!("invalid class '{}'", class_str))
        .and_then(Outcome::try_from)
        .map_err(invalid)?;

    let booster_category = field(columns.booster_category);
    if booster_category.is_empty() {
        return Err(invalid("empty booster version category".to_string()));
    }

    let mut record = LaunchRecord::new(site, payload_mass_kg, outcome, booster_category);

    if let Some(idx) = columns.flight_number {
        if let Ok(n) = field(idx).parse() {
            record = record.flight_number(n);
        }
    }
    if let Some(idx) = columns.booster_version {
        let version = field(idx);
        if !version.is_empty() {
            record = record.booster_version(version);
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
4,KSC LC-39A,1,2490,F9 FT B1031.1,FT
5,CCAFS SLC-40,1,9600,F9 B5 B1048.4,B5
";

    #[test]
    fn test_load_from_reader() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.payload_min(), 0.0);
        assert_eq!(dataset.payload_max(), 9600.0);
        assert_eq!(dataset.success_count(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.site, LaunchSite::CcafsLc40);
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category, "v1.0");
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category\nKSC LC-39A,100,FT\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("class")));
    }

    #[test]
    fn test_optional_columns_and_reordering() {
        let csv = "class,Booster Version Category,Payload Mass (kg),Launch Site\n1,FT,2500.5,KSC LC-39A\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.payload_mass_kg, 2500.5);
        assert_eq!(record.flight_number, None);
        assert_eq!(record.booster_version, None);
    }

    #[test]
    fn test_invalid_class() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,2,100,FT\n";
        match Dataset::from_reader(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("class"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_payload() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,-5,FT\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { .. }));
    }

    #[test]
    fn test_unknown_site() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nBoca Chica,1,100,FT\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Boca Chica"));
    }

    #[test]
    fn test_ragged_row() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,100\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_empty_booster_category() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,100,\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { line: 2, .. }));
    }

    #[test]
    fn test_empty_dataset() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_summary() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let summary = dataset.summary();

        assert_eq!(summary.records, 5);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.launches_by_site["CCAFS LC-40"], 2);
        assert_eq!(summary.launches_by_site["VAFB SLC-4E"], 1);
        assert_eq!(summary.launches_by_site.values().sum::<usize>(), 5);
    }
}
