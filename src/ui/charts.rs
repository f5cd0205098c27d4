use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::color::{generate_palette, ColorMap};
use crate::data::chart::{PieSpec, ScatterSpec};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the two dashboard charts
// ---------------------------------------------------------------------------

/// Render the pie chart above the scatter chart, splitting the panel height.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let spacing = 56.0; // titles + separator
    let half = ((ui.available_height() - spacing) / 2.0).max(120.0);

    ui.strong(&state.pie.title);
    pie_chart(ui, &state.pie, half);

    ui.separator();

    ui.strong(&state.scatter.title);
    scatter_chart(ui, &state.scatter, &state.color_map, half);
}

// ---------------------------------------------------------------------------
// Pie chart (success counts)
// ---------------------------------------------------------------------------

/// Draw the outcome pie as one plot polygon per slice.
fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    let total = spec.total();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let colors = generate_palette(spec.slices.len());

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes([false, false])
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0_f64;
            for ((label, value), color) in spec.slices.iter().zip(colors) {
                if *value == 0 {
                    // no area to draw
                    continue;
                }
                let fraction = *value as f64 / total as f64;
                let sector = Polygon::new(sector_points(start, start + fraction))
                    .name(format!("{label} ({value})"))
                    .stroke(Stroke::new(1.0, color))
                    .fill_color(color.gamma_multiply(0.6));
                plot_ui.polygon(sector);
                start += fraction;
            }
        });
}

/// Unit-circle sector from `start` to `end` (fractions of a full turn),
/// starting at 12 o'clock and running clockwise.
fn sector_points(start: f64, end: f64) -> PlotPoints<'static> {
    const STEPS_PER_TURN: f64 = 96.0;
    let n = (((end - start) * STEPS_PER_TURN).ceil() as usize).max(2);

    let mut points = Vec::with_capacity(n + 2);
    points.push([0.0, 0.0]);
    for i in 0..=n {
        let t = start + (end - start) * (i as f64 / n as f64);
        let angle = std::f64::consts::FRAC_PI_2 - t * std::f64::consts::TAU;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Scatter chart (payload vs. outcome)
// ---------------------------------------------------------------------------

/// Draw the payload/outcome scatter, one point series per booster version
/// category so the legend lists the categories.
fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, color_map: &ColorMap, height: f32) {
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
    for p in &spec.points {
        let xy = [p.payload_mass_kg, p.outcome.as_f64()];
        match series
            .iter_mut()
            .find(|(cat, _)| *cat == p.booster_version_category)
        {
            Some((_, pts)) => pts.push(xy),
            None => series.push((p.booster_version_category.clone(), vec![xy])),
        }
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch outcome (0 = failure, 1 = success)")
        .include_x(0.0)
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for (category, pts) in &series {
                let points = Points::new(PlotPoints::from(pts.clone()))
                    .name(category)
                    .color(color_map.color_for(category))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}
