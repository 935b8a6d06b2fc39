// src/config/state.rs
use super::options::DashboardOptions;
use crate::selection::SentimentFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Film picked in the first selector; None until the dataset is loaded
    pub selected_film: Option<String>,

    /// Second selector
    pub sentiment: SentimentFilter,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_film: None,
            sentiment: SentimentFilter::All,
            window_w: 1200,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: DashboardOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: DashboardOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardOptions::default())
    }
}
