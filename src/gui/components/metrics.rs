// src/gui/components/metrics.rs
//
// Three headline figures for the current selection.

use eframe::egui::{self, RichText};
use crate::selection::Summary;

pub fn draw(ui: &mut egui::Ui, summary: &Summary) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Reviews", summary.count.to_string());
        metric(&mut cols[1], "Average rating", summary.average_text());
        metric(&mut cols[2], "Positive reviews (%)", summary.positive_text());
    });
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(26.0).strong());
    });
}
