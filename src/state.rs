use crate::color::SpeciesColors;
use crate::data::model::{Column, Table};

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

/// The four charts, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Histogram,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Histogram,
        ChartKind::Scatter,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart of Sepal Length",
            ChartKind::Bar => "Average Petal Length per Species",
            ChartKind::Histogram => "Histogram of Sepal Width",
            ChartKind::Scatter => "Scatter Plot: Sepal Length vs Petal Length",
        }
    }

    /// Short name for the chart selector in the top bar.
    pub fn short_name(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Histogram => "Histogram",
            ChartKind::Scatter => "Scatter",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Index (like time)",
            ChartKind::Bar => "Species",
            ChartKind::Histogram => Column::SepalWidth.label(),
            ChartKind::Scatter => Column::SepalLength.label(),
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartKind::Line => Column::SepalLength.label(),
            ChartKind::Bar => Column::PetalLength.label(),
            ChartKind::Histogram => "Frequency",
            ChartKind::Scatter => Column::PetalLength.label(),
        }
    }

    /// The next chart in display order, stopping at the last.
    pub fn next(&self) -> ChartKind {
        match self {
            ChartKind::Line => ChartKind::Bar,
            ChartKind::Bar => ChartKind::Histogram,
            ChartKind::Histogram => ChartKind::Scatter,
            ChartKind::Scatter => ChartKind::Scatter,
        }
    }

    /// The previous chart in display order, stopping at the first.
    pub fn prev(&self) -> ChartKind {
        match self {
            ChartKind::Line => ChartKind::Line,
            ChartKind::Bar => ChartKind::Line,
            ChartKind::Histogram => ChartKind::Bar,
            ChartKind::Scatter => ChartKind::Histogram,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded dataset, read-only for the process lifetime.
    pub table: Table,

    /// Which chart is currently displayed.
    pub chart: ChartKind,

    /// Species → colour mapping shared by all charts.
    pub colors: SpeciesColors,
}

impl AppState {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            chart: ChartKind::Line,
            colors: SpeciesColors::default(),
        }
    }

    pub fn select_chart(&mut self, chart: ChartKind) {
        self.chart = chart;
    }

    pub fn next_chart(&mut self) {
        self.chart = self.chart.next();
    }

    pub fn prev_chart(&mut self) {
        self.chart = self.chart.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_order_is_line_bar_histogram_scatter() {
        let mut state = AppState::new(Table::from_records(Vec::new()));
        assert_eq!(state.chart, ChartKind::Line);
        state.next_chart();
        assert_eq!(state.chart, ChartKind::Bar);
        state.next_chart();
        assert_eq!(state.chart, ChartKind::Histogram);
        state.next_chart();
        assert_eq!(state.chart, ChartKind::Scatter);
        state.next_chart();
        assert_eq!(state.chart, ChartKind::Scatter);
        state.prev_chart();
        assert_eq!(state.chart, ChartKind::Histogram);
    }

    #[test]
    fn every_chart_has_title_and_axis_labels() {
        for chart in ChartKind::ALL {
            assert!(!chart.title().is_empty());
            assert!(!chart.x_label().is_empty());
            assert!(!chart.y_label().is_empty());
        }
    }
}
