use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::data::model::{Column, Species};
use crate::data::stats;
use crate::state::{AppState, ChartKind};

/// Bin count of the sepal-width histogram.
const HISTOGRAM_BINS: usize = 15;

// ---------------------------------------------------------------------------
// Chart panel (central panel)
// ---------------------------------------------------------------------------

/// Render the currently selected chart.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    if state.table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records in the dataset");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.chart.title());
    });

    match state.chart {
        ChartKind::Line => line_chart(ui, state),
        ChartKind::Bar => bar_chart(ui, state),
        ChartKind::Histogram => histogram_chart(ui, state),
        ChartKind::Scatter => scatter_chart(ui, state),
    }
}

// ---- (a) sepal length against row index ----

fn line_chart(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = state
        .table
        .column(Column::SepalLength)
        .into_iter()
        .enumerate()
        .map(|(i, v)| [i as f64, v])
        .collect();

    Plot::new(state.chart.short_name())
        .legend(Legend::default())
        .x_axis_label(state.chart.x_label())
        .y_axis_label(state.chart.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Sepal Length")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
        });
}

// ---- (b) mean petal length per species ----

fn bar_chart(ui: &mut Ui, state: &AppState) {
    Plot::new(state.chart.short_name())
        .legend(Legend::default())
        .x_axis_label(state.chart.x_label())
        .y_axis_label(state.chart.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, species) in Species::ALL.into_iter().enumerate() {
                let mean = stats::species_mean(&state.table, Column::PetalLength, species);
                let bar = Bar::new(i as f64, mean).width(0.6);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(species.name())
                        .color(state.colors.color_for(species)),
                );
            }
        });
}

// ---- (c) sepal width histogram ----

fn histogram_chart(ui: &mut Ui, state: &AppState) {
    let values = state.table.column(Column::SepalWidth);
    let bars: Vec<Bar> = stats::histogram(&values, HISTOGRAM_BINS)
        .into_iter()
        .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
        .collect();

    Plot::new(state.chart.short_name())
        .legend(Legend::default())
        .x_axis_label(state.chart.x_label())
        .y_axis_label(state.chart.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Sepal Width")
                    .color(Color32::LIGHT_GREEN),
            );
        });
}

// ---- (d) sepal length vs petal length, coloured by species ----

fn scatter_chart(ui: &mut Ui, state: &AppState) {
    Plot::new(state.chart.short_name())
        .legend(Legend::default())
        .x_axis_label(state.chart.x_label())
        .y_axis_label(state.chart.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in Species::ALL {
                let points: PlotPoints = state
                    .table
                    .records()
                    .iter()
                    .filter(|r| r.species == species)
                    .map(|r| [r.sepal_length, r.petal_length])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(species.name())
                        .color(state.colors.color_for(species))
                        .radius(2.5),
                );
            }
        });
}
