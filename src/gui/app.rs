// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    cache::{Dataset, DatasetCache, LoadError},
    config::{
        options::DashboardOptions,
        state::AppState,
    },
    selection::{
        film_titles, sentiment_options, sentiment_shares,
        Histogram, Selection, SelectionView, SentimentFilter, Summary,
    },
};

use super::components;

pub fn run(native: eframe::NativeOptions, options: DashboardOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Allociné Reviews",
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::new(options))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // memoized full dataset per source
    pub cache: DatasetCache,
    pub data: Option<Dataset>,
    pub load_error: Option<LoadError>,

    // selector choices, rebuilt whenever the dataset changes
    pub films: Vec<String>,
    pub sentiments: Vec<SentimentFilter>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self::with_cache(state, DatasetCache::default())
    }

    pub fn with_cache(state: AppState, cache: DatasetCache) -> Self {
        let mut app = Self {
            state,
            cache,
            data: None,
            load_error: None,
            films: Vec::new(),
            sentiments: vec![SentimentFilter::All],
        };
        app.load(false);
        app
    }

    /// Pull the dataset through the cache. `force` drops the cached copy first.
    pub fn load(&mut self, force: bool) {
        let source = self.state.options.source.clone();
        let res = if force { self.cache.reload(&source) } else { self.cache.get(&source) };

        match res {
            Ok(ds) => {
                self.films = film_titles(&ds);
                self.sentiments = sentiment_options(&ds);

                let gui = &mut self.state.gui;
                let keep_film = gui.selected_film.as_ref().is_some_and(|f| self.films.contains(f));
                if !keep_film {
                    gui.selected_film = self.films.first().cloned();
                }
                if !self.sentiments.contains(&gui.sentiment) {
                    gui.sentiment = SentimentFilter::All;
                }

                logf!("Init: films={}, rows={}", self.films.len(), ds.len());
                self.data = Some(ds);
                self.load_error = None;
            }
            Err(e) => {
                self.data = None;
                self.load_error = Some(e);
            }
        }
    }

    #[inline]
    pub fn selection(&self) -> Option<Selection<'_>> {
        self.state.gui.selected_film.as_deref().map(|film| Selection {
            film,
            sentiment: self.state.gui.sentiment,
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = &self.load_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("Allociné reviews");
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), err.to_string());
            });
            return;
        }

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Allociné reviews");
            components::filter_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        let Some(data) = self.data.clone() else { return };

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(sel) = self.selection() else {
                ui.label("No film in the dataset.");
                return;
            };

            // Recomputed every frame from the cached rows.
            let view = SelectionView::from_rows(&data, sel);
            let summary = Summary::of(&view);
            let hist = Histogram::of(&view, self.state.options.histogram_bins);
            let shares = sentiment_shares(&view);
            let detail = view.head(self.state.options.detail_rows);

            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    ui.strong(format!("Film: {}", sel.film));
                    ui.add_space(4.0);
                    components::metrics::draw(ui, &summary);

                    ui.separator();
                    ui.columns(2, |cols| {
                        components::charts::histogram(&mut cols[0], &hist);
                        components::charts::donut(&mut cols[1], &shares);
                    });

                    ui.separator();
                    components::review_table::draw(ui, &detail);
                });
        });
    }
}
