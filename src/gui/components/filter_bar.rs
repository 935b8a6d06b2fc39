// src/gui/components/filter_bar.rs
//
// Film + sentiment selectors, and the reload control.
// Writes straight into app.state.gui; the central panel rebuilds its view
// from that on the next frame.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before_film = app.state.gui.selected_film.clone();
    let before_sent = app.state.gui.sentiment;
    let mut reload = false;

    ui.horizontal(|ui| {
        ui.label("Film:");
        let shown = app.state.gui.selected_film.clone().unwrap_or_default();
        egui::ComboBox::from_id_salt("film_select")
            .selected_text(shown)
            .width(320.0)
            .show_ui(ui, |ui| {
                for film in &app.films {
                    ui.selectable_value(
                        &mut app.state.gui.selected_film,
                        Some(film.clone()),
                        film.as_str(),
                    );
                }
            });

        ui.add_space(16.0);

        ui.label("Sentiment:");
        egui::ComboBox::from_id_salt("sentiment_select")
            .selected_text(app.state.gui.sentiment.label())
            .show_ui(ui, |ui| {
                for opt in &app.sentiments {
                    ui.selectable_value(&mut app.state.gui.sentiment, *opt, opt.label());
                }
            });

        ui.add_space(16.0);
        if ui.button("Reload").on_hover_text("Fetch the dataset again").clicked() {
            reload = true;
        }
    });

    if app.state.gui.selected_film != before_film {
        logf!("UI: Film {:?} → {:?}", before_film, app.state.gui.selected_film);
    }
    if app.state.gui.sentiment != before_sent {
        logf!("UI: Sentiment {:?} → {:?}", before_sent, app.state.gui.sentiment);
    }
    if reload {
        logf!("UI: Reload {}", app.state.options.source);
        app.load(true);
    }
}
