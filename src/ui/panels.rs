use eframe::egui::{RichText, Ui};

use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Top bar – chart selector and dataset summary
// ---------------------------------------------------------------------------

/// Render the top bar: the four charts in fixed order, prev/next
/// navigation, record count, and the species legend.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("◀").clicked() {
            state.prev_chart();
        }
        for chart in ChartKind::ALL {
            if ui
                .selectable_label(state.chart == chart, chart.short_name())
                .clicked()
            {
                state.select_chart(chart);
            }
        }
        if ui.small_button("▶").clicked() {
            state.next_chart();
        }

        ui.separator();

        ui.label(format!("{} records", state.table.len()));

        ui.separator();

        for (name, color) in state.colors.legend_entries() {
            ui.label(RichText::new(name).color(color));
        }
    });
}
