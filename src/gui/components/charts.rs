// src/gui/components/charts.rs
//
// Painter-drawn charts for the dashboard: rating histogram and sentiment donut.
// Colors follow the review table (see `sentiment_color`).

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Vec2};

use crate::{
    config::consts::DONUT_HOLE,
    data::Sentiment,
    selection::Histogram,
};

const CHART_H: f32 = 220.0;
const BAR_FILL: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF);

pub fn sentiment_color(s: Sentiment) -> Color32 {
    match s {
        Sentiment::Negatif => Color32::from_rgb(0xDC, 0x61, 0x49),
        Sentiment::Neutre => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        Sentiment::Positif => Color32::from_rgb(0x5A, 0xB4, 0x5A),
        Sentiment::Inconnu => Color32::from_rgb(0x64, 0xB4, 0xFF),
    }
}

/// Counts per rating bin; the view's unrated rows are not part of it.
pub fn histogram(ui: &mut egui::Ui, hist: &Histogram) {
    ui.label(RichText::new("Rating distribution").strong());

    let width = ui.available_width();
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, CHART_H), Sense::hover());
    let rect = resp.rect;
    let text_color = ui.visuals().text_color();

    if hist.total() == 0 {
        painter.text(rect.center(), Align2::CENTER_CENTER, "No ratings", FontId::proportional(14.0), ui.visuals().weak_text_color());
        return;
    }

    // room for the count above a bar and the range under it
    let top = rect.top() + 18.0;
    let base = rect.bottom() - 18.0;
    let n = hist.bins.len() as f32;
    let slot = rect.width() / n;
    let max = hist.max_count().max(1) as f32;

    for (i, bin) in hist.bins.iter().enumerate() {
        let x0 = rect.left() + slot * i as f32 + 3.0;
        let x1 = x0 + slot - 6.0;
        let h = (base - top) * bin.count as f32 / max;
        let bar = egui::Rect::from_min_max(Pos2::new(x0, base - h), Pos2::new(x1, base));
        painter.rect_filled(bar, 2.0, BAR_FILL);

        let mid = (x0 + x1) * 0.5;
        if bin.count > 0 {
            painter.text(Pos2::new(mid, bar.top() - 2.0), Align2::CENTER_BOTTOM, bin.count.to_string(), FontId::proportional(12.0), text_color);
        }
        painter.text(
            Pos2::new(mid, base + 2.0),
            Align2::CENTER_TOP,
            format!("{:.1}–{:.1}", bin.lo, bin.hi),
            FontId::proportional(11.0),
            text_color,
        );
    }
    painter.line_segment([Pos2::new(rect.left(), base), Pos2::new(rect.right(), base)], Stroke::new(1.0, text_color));
}

/// Share of each sentiment present in the view, as a ring with a legend.
pub fn donut(ui: &mut egui::Ui, shares: &[(Sentiment, usize, f64)]) {
    ui.label(RichText::new("Sentiment split").strong());

    let width = ui.available_width();
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, CHART_H), Sense::hover());
    let rect = resp.rect;

    if shares.is_empty() {
        painter.text(rect.center(), Align2::CENTER_CENTER, "No reviews", FontId::proportional(14.0), ui.visuals().weak_text_color());
        return;
    }

    let radius = (rect.height() * 0.5 - 6.0).min(rect.width() * 0.3);
    let center = Pos2::new(rect.left() + radius + 6.0, rect.center().y);
    let ring = radius * (1.0 - DONUT_HOLE);
    let mid_r = radius - ring * 0.5;

    // arcs start at twelve o'clock, clockwise
    let mut start = -TAU / 4.0;
    for &(s, _, frac) in shares {
        let sweep = TAU * frac as f32;
        let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        let pts: Vec<Pos2> = (0..=steps)
            .map(|k| {
                let a = start + sweep * k as f32 / steps as f32;
                center + Vec2::angled(a) * mid_r
            })
            .collect();
        painter.add(Shape::line(pts, Stroke::new(ring, sentiment_color(s))));
        start += sweep;
    }

    let text_color = ui.visuals().text_color();
    let mut y = rect.top() + 12.0;
    let x = center.x + radius + 24.0;
    for &(s, count, frac) in shares {
        painter.rect_filled(egui::Rect::from_min_size(Pos2::new(x, y - 6.0), Vec2::splat(12.0)), 2.0, sentiment_color(s));
        painter.text(
            Pos2::new(x + 18.0, y),
            Align2::LEFT_CENTER,
            format!("{} {} ({:.1}%)", s.label(), count, frac * 100.0),
            FontId::proportional(13.0),
            text_color,
        );
        y += 20.0;
    }
}
