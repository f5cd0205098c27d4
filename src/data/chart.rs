use super::filter::{filter_by_payload, filter_by_site};
use super::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// OutcomeSummary – aggregated pie-chart data
// ---------------------------------------------------------------------------

/// Aggregated launch outcomes for the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeSummary {
    /// All sites: site → successful-launch count (sum of the binary outcome
    /// values, which failures contribute 0 to), in first-seen site order.
    /// A site whose launches all failed still appears, with value 0.
    PerSite(Vec<(String, u32)>),
    /// One site: Success vs. Failure counts. Both entries always exist,
    /// zero counts included.
    BySuccess { success: u32, failure: u32 },
}

/// Aggregate the indexed records for the pie chart.
///
/// `indices` is expected to come from [`filter_by_site`] with the same
/// `selection`, so in the single-site branch every indexed record already
/// belongs to that site and only the outcome split remains to compute.
pub fn aggregate_outcomes(
    dataset: &LaunchDataset,
    indices: &[usize],
    selection: &SiteSelection,
) -> OutcomeSummary {
    match selection {
        SiteSelection::All => {
            let mut slices: Vec<(String, u32)> = Vec::new();
            for &i in indices {
                let rec = &dataset.records[i];
                match slices.iter_mut().find(|(site, _)| *site == rec.launch_site) {
                    Some((_, value)) => *value += rec.outcome.weight(),
                    None => slices.push((rec.launch_site.clone(), rec.outcome.weight())),
                }
            }
            OutcomeSummary::PerSite(slices)
        }
        SiteSelection::Site(_) => {
            let mut success = 0;
            let mut failure = 0;
            for &i in indices {
                match dataset.records[i].outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failure => failure += 1,
                }
            }
            OutcomeSummary::BySuccess { success, failure }
        }
    }
}

// ---------------------------------------------------------------------------
// Chart specs – everything the renderer needs, no widget state
// ---------------------------------------------------------------------------

/// Pie chart request: ordered labeled slices plus a title.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    /// (label, value) per slice, in presentation order.
    pub slices: Vec<(String, u32)>,
}

impl PieSpec {
    /// Sum of all slice values; 0 means there is nothing to draw.
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|(_, v)| v).sum()
    }
}

/// One scatter point: a launch that survived both filters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Scatter chart request: filtered points plus a title.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Chart request builder
// ---------------------------------------------------------------------------

/// Map the two control values to both chart requests.
///
/// This is the whole reactive pipeline: the pie chart sees the site filter
/// only, the scatter chart sees the site filter and then the payload filter
/// (the site filter being the identity for `All`). Pure; the presentation
/// shell calls it once per control change.
pub fn build_chart_specs(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> (PieSpec, ScatterSpec) {
    let site_indices = filter_by_site(dataset, selection);

    let summary = aggregate_outcomes(dataset, &site_indices, selection);
    let pie = PieSpec {
        title: match selection {
            SiteSelection::All => "Total successful launches per site".to_string(),
            SiteSelection::Site(name) => {
                format!("Success vs. failure for site: {name}")
            }
        },
        slices: match summary {
            OutcomeSummary::PerSite(slices) => slices,
            OutcomeSummary::BySuccess { success, failure } => vec![
                ("Success".to_string(), success),
                ("Failure".to_string(), failure),
            ],
        },
    };

    let scatter_indices = filter_by_payload(dataset, &site_indices, range);
    let scatter = ScatterSpec {
        title: match selection {
            SiteSelection::All => "Payload vs. outcome for all launch sites".to_string(),
            SiteSelection::Site(name) => format!("Payload vs. outcome for site: {name}"),
        },
        points: scatter_indices
            .iter()
            .map(|&i| {
                let rec = &dataset.records[i];
                ScatterPoint {
                    payload_mass_kg: rec.payload_mass_kg,
                    outcome: rec.outcome,
                    booster_version_category: rec.booster_version_category.clone(),
                }
            })
            .collect(),
    };

    (pie, scatter)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
