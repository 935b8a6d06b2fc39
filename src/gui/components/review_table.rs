// src/gui/components/review_table.rs
use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use super::charts::sentiment_color;
use crate::data::CleanReview;

/// First rows of the current view: rating, sentiment and cleaned text.
pub fn draw(ui: &mut egui::Ui, rows: &[&CleanReview]) {
    ui.label(RichText::new(format!("Reviews (first {})", rows.len())).strong());
    if rows.is_empty() {
        ui.weak("No review matches the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("review_table")
        .striped(true)
        .vscroll(false)
        .column(Column::exact(56.0))
        .column(Column::exact(84.0))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Note"); });
            header.col(|ui| { ui.strong("Sentiment"); });
            header.col(|ui| { ui.strong("Review"); });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                row.col(|ui| {
                    let note = r.user_note.filter(|v| !v.is_nan()).map(|v| format!("{v:.1}")).unwrap_or_default();
                    ui.centered_and_justified(|ui| { ui.label(note); });
                });
                row.col(|ui| {
                    ui.label(RichText::new(r.sentiment.label()).color(sentiment_color(r.sentiment)));
                });
                row.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(&r.clean_review).on_hover_text(&r.review);
                    });
                });
            });
        });
}
