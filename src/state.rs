use crate::color::ColorMap;
use crate::data::chart::{build_chart_specs, PieSpec, ScatterSpec};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is constructed before the window opens and never mutated;
/// the two control values plus the chart specs derived from them are the
/// only things that change between frames.
pub struct AppState {
    /// Loaded dataset (immutable; replaced wholesale by File → Open).
    pub dataset: LaunchDataset,

    /// Launch-site selector value.
    pub site: SiteSelection,

    /// Payload-mass range slider values.
    pub payload_range: PayloadRange,

    /// Pie chart spec for the current controls (cached).
    pub pie: PieSpec,

    /// Scatter chart spec for the current controls (cached).
    pub scatter: ScatterSpec,

    /// Booster category → colour, fixed per dataset.
    pub color_map: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state around a freshly loaded dataset.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::default();
        let payload_range = PayloadRange::default();
        let (pie, scatter) = build_chart_specs(&dataset, &site, &payload_range);
        let color_map = ColorMap::new(&dataset.booster_categories);

        Self {
            dataset,
            site,
            payload_range,
            pie,
            scatter,
            color_map,
            status_message: None,
        }
    }

    /// Replace the dataset wholesale (File → Open), resetting the controls.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.color_map = ColorMap::new(&dataset.booster_categories);
        self.dataset = dataset;
        self.site = SiteSelection::default();
        self.payload_range = PayloadRange::default();
        self.status_message = None;
        self.recompute();
    }

    /// Recompute both chart specs from the current control values.
    pub fn recompute(&mut self) {
        let (pie, scatter) = build_chart_specs(&self.dataset, &self.site, &self.payload_range);
        self.pie = pie;
        self.scatter = scatter;
    }

    /// Change the site selection and refresh the charts.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.site != site {
            self.site = site;
            self.recompute();
        }
    }

    /// Restore the default selection and payload range.
    pub fn reset_controls(&mut self) {
        self.site = SiteSelection::All;
        self.payload_range = PayloadRange::default();
        self.recompute();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        let record = |site: &str, mass: f64, class: i64| LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            outcome: Outcome::from_class(class).unwrap(),
            booster_version_category: "FT".to_string(),
        };
        LaunchDataset::from_records(vec![
            record("SiteA", 3_000.0, 1),
            record("SiteB", 7_000.0, 0),
        ])
    }

    #[test]
    fn initial_state_uses_default_controls() {
        let state = AppState::new(dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::default());
        assert_eq!(state.pie.title, "Total successful launches per site");
        // Default range [2500, 8000] keeps both launches.
        assert_eq!(state.scatter.points.len(), 2);
    }

    #[test]
    fn changing_the_site_recomputes_both_charts() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("SiteA".to_string()));
        assert_eq!(state.pie.title, "Success vs. failure for site: SiteA");
        assert_eq!(state.scatter.points.len(), 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("SiteB".to_string()));
        state.payload_range = PayloadRange::new(0.0, 100.0);
        state.reset_controls();
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::default());
        assert_eq!(state.scatter.points.len(), 2);
    }

    #[test]
    fn replacing_the_dataset_resets_controls_and_colors() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("SiteA".to_string()));

        let record = LaunchRecord {
            launch_site: "SiteC".to_string(),
            payload_mass_kg: 4_000.0,
            outcome: Outcome::Success,
            booster_version_category: "B5".to_string(),
        };
        state.set_dataset(LaunchDataset::from_records(vec![record]));

        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.dataset.distinct_sites, vec!["SiteC"]);
        assert_eq!(state.scatter.points.len(), 1);
    }
}
