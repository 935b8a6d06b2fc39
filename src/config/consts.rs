// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/115.0 Safari/537.36"
);
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Films to scrape, in output order
pub const FILM_URLS: &[&str] = &[
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=2954.html",  // Le Prête-nom
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=20297.html", // Séduite et abandonnée
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=61282.html", // Avatar
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=11010.html", // Box of Moonlight
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=23170.html", // Le Combat de Kyoshiro Nemuri
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=14637.html", // Marie et le curé
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=32745.html", // Youngblood
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=8292.html",  // L'Avocat du diable
    "https://www.allocine.fr/film/fichefilm_gen_cfilm=32741.html", // Fanfan
];

// Scrape
pub const MAX_BLOCKS_PER_PAGE: usize = 200;
pub const UNKNOWN_TITLE: &str = "Titre inconnu";
pub const SPECTATOR_MARKER: &str = "spectateur";

// Datasets
pub const DATA_DIR: &str = "data";
pub const RAW_FILE: &str = "avis_films_bruts.csv";
pub const CLEAN_FILE: &str = "films_clean.csv";
pub const CLEAN_DATASET_URL: &str =
    "https://raw.githubusercontent.com/hadil123-web/pipeline_films/main/scripts/data/films_clean.csv";
pub const PREVIEW_ROWS: usize = 3;

// Dashboard
pub const DETAIL_ROWS: usize = 15;
pub const HISTOGRAM_BINS: usize = 5;
pub const DONUT_HOLE: f32 = 0.4;

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
