use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site selector and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Launch-site selector ----
    ui.strong("Launch site");
    let sites = state.dataset.distinct_sites.clone();
    let current = state.site.clone();
    egui::ComboBox::from_id_salt("site_selector")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, SiteSelection::All.label())
                .clicked()
            {
                state.set_site(SiteSelection::All);
            }
            for site in &sites {
                let selection = SiteSelection::Site(site.clone());
                if ui.selectable_label(current == selection, site).clicked() {
                    state.set_site(selection);
                }
            }
        });

    ui.separator();

    // ---- Payload range sliders ----
    ui.strong("Payload range (kg)");
    let mut changed = false;
    changed |= ui
        .add(
            Slider::new(
                &mut state.payload_range.low,
                PayloadRange::MIN_KG..=PayloadRange::MAX_KG,
            )
            .step_by(250.0)
            .text("min"),
        )
        .changed();
    changed |= ui
        .add(
            Slider::new(
                &mut state.payload_range.high,
                PayloadRange::MIN_KG..=PayloadRange::MAX_KG,
            )
            .step_by(250.0)
            .text("max"),
        )
        .changed();
    if changed {
        state.recompute();
    }

    if state.payload_range.low > state.payload_range.high {
        ui.label(
            RichText::new("Min exceeds max – no launches match").color(Color32::YELLOW),
        );
    }

    ui.add_space(4.0);
    ui.label(format!(
        "Dataset payload span: {}–{} kg",
        state.dataset.min_payload, state.dataset.max_payload
    ));

    ui.add_space(8.0);
    if ui.small_button("Reset").clicked() {
        state.reset_controls();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.scatter.points.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in a different launch-records file. Unlike the startup
/// load, a failure here is not fatal: the previous dataset stays in place and
/// the error surfaces in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {} sites",
                    dataset.len(),
                    dataset.distinct_sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
