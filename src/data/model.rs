use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – typed failures in the data layer
// ---------------------------------------------------------------------------

/// Structural problems with an input file or one of its cells.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },
    #[error("launch outcome class must be 0 or 1, got {0}")]
    InvalidOutcome(i64),
}

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the dataset's binary `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the `class` column value (0 or 1).
    pub fn from_class(class: i64) -> Result<Self, DataError> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DataError::InvalidOutcome(other)),
        }
    }

    /// Numeric weight used by the all-sites aggregation: success counts 1,
    /// failure counts 0.
    pub fn weight(self) -> u32 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Y coordinate on the payload/outcome scatter plot.
    pub fn as_f64(self) -> f64 {
        self.weight() as f64
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Categorical label used only for scatter-point coloring.
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed derived values.
///
/// Constructed once from the source file and treated as immutable afterwards;
/// every filter and aggregation is a pure read over it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in source order.
    pub records: Vec<LaunchRecord>,
    /// Launch sites in first-seen order.
    pub distinct_sites: Vec<String>,
    /// Booster version categories in first-seen order (color map domain).
    pub booster_categories: Vec<String>,
    /// Floor of the smallest payload mass, in kg (0 for an empty dataset).
    pub min_payload: i64,
    /// Ceiling of the largest payload mass, in kg (0 for an empty dataset).
    pub max_payload: i64,
}

impl LaunchDataset {
    /// Build the derived indices and scalars from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut distinct_sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_mass = f64::INFINITY;
        let mut max_mass = f64::NEG_INFINITY;

        for rec in &records {
            if !distinct_sites.contains(&rec.launch_site) {
                distinct_sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
            min_mass = min_mass.min(rec.payload_mass_kg);
            max_mass = max_mass.max(rec.payload_mass_kg);
        }

        let (min_payload, max_payload) = if records.is_empty() {
            (0, 0)
        } else {
            (min_mass.floor() as i64, max_mass.ceil() as i64)
        };

        LaunchDataset {
            records,
            distinct_sites,
            booster_categories,
            min_payload,
            max_payload,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the launch-site control value
// ---------------------------------------------------------------------------

/// Value of the launch-site selector: all sites, or one concrete site.
///
/// A `Site` name outside the dataset's `distinct_sites` is not an error; it
/// simply filters to an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Label shown in the selector widget.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – the payload-mass control value
// ---------------------------------------------------------------------------

/// Inclusive payload-mass range in kg, driven by the range sliders.
///
/// `low > high` is representable (the sliders move independently) and filters
/// to an empty result rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Slider domain lower bound, in kg.
    pub const MIN_KG: f64 = 0.0;
    /// Slider domain upper bound, in kg.
    pub const MAX_KG: f64 = 10_000.0;

    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive containment test on both bounds.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

impl Default for PayloadRange {
    /// Initial slider positions.
    fn default() -> Self {
        PayloadRange::new(2_500.0, 8_000.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            outcome: Outcome::from_class(class).unwrap(),
            booster_version_category: booster.to_string(),
        }
    }

    #[test]
    fn outcome_parses_binary_class() {
        assert_eq!(Outcome::from_class(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::from_class(0).unwrap(), Outcome::Failure);
        assert!(matches!(
            Outcome::from_class(2),
            Err(DataError::InvalidOutcome(2))
        ));
    }

    #[test]
    fn derived_payload_bounds_are_floor_and_ceil() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 525.5, 1, "v1.0"),
            record("KSC LC-39A", 9_600.2, 0, "FT"),
        ]);
        assert_eq!(ds.min_payload, 525);
        assert_eq!(ds.max_payload, 9_601);
    }

    #[test]
    fn distinct_sites_keep_first_seen_order() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 500.0, 1, "v1.1"),
            record("CCAFS LC-40", 600.0, 0, "v1.0"),
            record("VAFB SLC-4E", 700.0, 1, "v1.1"),
            record("KSC LC-39A", 800.0, 1, "FT"),
        ]);
        assert_eq!(
            ds.distinct_sites,
            vec!["VAFB SLC-4E", "CCAFS LC-40", "KSC LC-39A"]
        );
        assert_eq!(ds.booster_categories, vec!["v1.1", "v1.0", "FT"]);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.min_payload, 0);
        assert_eq!(ds.max_payload, 0);
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(2_500.0, 8_000.0);
        assert!(range.contains(2_500.0));
        assert!(range.contains(8_000.0));
        assert!(!range.contains(2_499.9));
        assert!(!range.contains(8_000.1));
    }
}
