use super::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Filter pipeline: control values → indices of matching records
// ---------------------------------------------------------------------------
//
// Filters hand back indices into `dataset.records` rather than cloned rows,
// so a chart recomputation never copies the dataset. Both filters preserve
// the original row order.

/// Return indices of records launched from the selected site.
///
/// * `All` is the identity: every index, in order.
/// * A concrete site keeps only matching rows; a site name that never occurs
///   in the dataset yields an empty result, not an error.
pub fn filter_by_site(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    match selection {
        SiteSelection::All => (0..dataset.len()).collect(),
        SiteSelection::Site(name) => dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| rec.launch_site == *name)
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Narrow `indices` (typically already site-filtered) to records whose
/// payload mass lies within the inclusive range.
///
/// An inverted range (`low > high`) yields an empty result rather than
/// erroring; the sliders normally prevent it but nothing guarantees that.
pub fn filter_by_payload(
    dataset: &LaunchDataset,
    indices: &[usize],
    range: &PayloadRange,
) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .filter(|&i| range.contains(dataset.records[i].payload_mass_kg))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
