//! Histogram Viewer Application
//! Single window with a summary side panel and the histogram.

use crate::charts::ChartPlotter;
use crate::data::TrainTestSplit;
use crate::stats::{ColumnSummary, Histogram};
use egui::{RichText, SidePanel};

/// Everything the window displays. Built once before the window opens.
pub struct HistogramView {
    pub column: String,
    pub source: String,
    pub histogram: Histogram,
    pub summary: ColumnSummary,
    pub split: TrainTestSplit,
}

/// Main application window.
pub struct HistogramApp {
    view: HistogramView,
}

impl HistogramApp {
    pub fn new(cc: &eframe::CreationContext<'_>, view: HistogramView) -> Self {
        cc.egui_ctx.set_visuals(ChartPlotter::visuals());
        Self { view }
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::right("summary_panel")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(&self.view.source).size(14.0).strong());
                ui.add_space(8.0);
                ChartPlotter::draw_summary_table(ui, &self.view.summary, &self.view.split);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                RichText::new(format!("Distribution of {}", self.view.column))
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ChartPlotter::draw_histogram(ui, &self.view.histogram, &self.view.column);
        });
    }
}
