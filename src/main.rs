mod app;
mod color;
mod data;
mod report;
mod state;
mod ui;

use std::io::Write;

use anyhow::Context;
use app::IrisExplorerApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = data::source::load_builtin().context("loading built-in iris dataset")?;
    log::info!(
        "Loaded {} records, species counts {:?}",
        table.len(),
        table.species_counts()
    );

    let stdout = std::io::stdout();
    {
        let mut out = stdout.lock();
        report::write_summary(&mut out, &table).context("writing summary report")?;
        out.flush().context("flushing summary report")?;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the chart window is closed, then the findings print.
    eframe::run_native(
        "Iris Explorer – Dataset Charts",
        options,
        Box::new(move |_cc| Ok(Box::new(IrisExplorerApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("chart viewer failed: {e}"))?;

    let mut out = stdout.lock();
    report::write_findings(&mut out).context("writing findings")?;
    Ok(())
}
