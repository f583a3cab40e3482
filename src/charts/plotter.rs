//! Chart Plotter Module
//! Draws the histogram and summary table using egui_plot.

use crate::data::TrainTestSplit;
use crate::stats::{ColumnSummary, Histogram};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Bar fill for the histogram, first colour of the seaborn "deep" palette
pub const BAR_COLOR: Color32 = Color32::from_rgb(76, 114, 176);

/// Draws charts for the loaded table.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Dark window theme; plots draw their grid over it.
    pub fn visuals() -> egui::Visuals {
        egui::Visuals::dark()
    }

    /// Build one bar per bin, centred on the bin and as wide as it.
    pub fn histogram_bars(histogram: &Histogram) -> Vec<Bar> {
        histogram
            .bars()
            .map(|(center, width, count)| {
                Bar::new(center, count as f64)
                    .width(width)
                    .fill(BAR_COLOR.gamma_multiply(0.8))
                    .stroke(egui::Stroke::new(1.0, BAR_COLOR))
            })
            .collect()
    }

    /// Draw the histogram filling the available space.
    pub fn draw_histogram(ui: &mut egui::Ui, histogram: &Histogram, column: &str) {
        let chart = BarChart::new(Self::histogram_bars(histogram))
            .color(BAR_COLOR)
            .name(column);

        Plot::new(format!("histogram_{}", column))
            .legend(Legend::default())
            .x_axis_label(column)
            .y_axis_label("Count")
            .include_y(0.0)
            .show_grid(true)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    /// Draw descriptive statistics and train/test row counts.
    pub fn draw_summary_table(ui: &mut egui::Ui, summary: &ColumnSummary, split: &TrainTestSplit) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("summary_{}", summary.column)))
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        let rows = [
                            ("Count", summary.count.to_string()),
                            ("Mean", format!("{:.2}", summary.mean)),
                            ("Std", format!("{:.2}", summary.std)),
                            ("Min", format!("{:.2}", summary.min)),
                            ("Median", format!("{:.2}", summary.median)),
                            ("Max", format!("{:.2}", summary.max)),
                            ("Train rows", split.train_rows().to_string()),
                            ("Test rows", split.test_rows().to_string()),
                            ("Train share", format!("{:.1}%", split.train_share() * 100.0)),
                        ];

                        for (label, value) in rows {
                            ui.label(RichText::new(label).strong().size(12.0));
                            ui.label(RichText::new(value).size(12.0));
                            ui.end_row();
                        }
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_per_bin() {
        let hist = Histogram::compute(&[100.0, 200.0, 150.0, 400.0, 100.0], 10).unwrap();
        let bars = ChartPlotter::histogram_bars(&hist);

        assert_eq!(bars.len(), 10);
        let heights: f64 = bars.iter().map(|b| b.value).sum();
        assert_eq!(heights, 5.0);
        assert_eq!(bars[0].argument, 115.0);
        assert_eq!(bars[0].bar_width, 30.0);
        assert_eq!(bars[0].fill, BAR_COLOR.gamma_multiply(0.8));
    }

    #[test]
    fn window_uses_dark_theme() {
        assert!(ChartPlotter::visuals().dark_mode);
    }
}
