// tests/extract_offline.rs
//
// Extraction against pages served from memory.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use scraper::Html;

use allocine_reviews::config::options::ExtractOptions;
use allocine_reviews::core::Fetcher;
use allocine_reviews::progress::{NullProgress, Progress};
use allocine_reviews::scrape::{collect_reviews, run_with};
use allocine_reviews::specs::film_page::{extract_title, find_spectator_link};
use allocine_reviews::specs::rating::{AttributeResolver, SiblingNoteResolver};
use allocine_reviews::specs::reviews::extract_reviews;
use allocine_reviews::store;

const AVATAR: &str = "https://www.allocine.fr/film/fichefilm_gen_cfilm=61282.html";
const AVATAR_REVIEWS: &str = "https://www.allocine.fr/film/fichefilm-61282/critiques/spectateurs/";
const DUNE: &str = "https://www.allocine.fr/film/fichefilm_gen_cfilm=1.html";
const BROKEN: &str = "https://www.allocine.fr/film/fichefilm_gen_cfilm=404.html";

#[derive(Default)]
struct MapFetcher {
    pages: HashMap<String, String>,
}

impl MapFetcher {
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetcher for MapFetcher {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("HTTP error: 404 Not Found {}", url).into())
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    lines: Vec<String>,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_done(&mut self, _url: &str, title: &str, count: usize) { self.done.push((title.to_string(), count)); }
    fn item_failed(&mut self, url: &str, _err: &str) { self.failed.push(url.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn avatar_home() -> String {
    r#"<html><body>
        <h1> <span>Ava</span><span>tar</span> </h1>
        <nav><a href="/film/fichefilm-61282/casting/">Casting</a>
        <a href="/film/fichefilm-61282/critiques/spectateurs/">Critiques Spectateurs</a></nav>
    </body></html>"#.to_string()
}

fn avatar_listing() -> String {
    r#"<html><body>
        <div class="review-card">
          <div class="review-card-meta"><span class="stareval-note">4,5</span></div>
          <div class="review-card-content">Magnifique, <b>vraiment</b>.</div>
        </div>
        <div class="review-card">
          <div class="review-card-meta" data-note="2"></div>
          <div class="review-card-content">Trop long.</div>
        </div>
        <div class="review-card">
          <div class="review-card-content">Pas de note ici.</div>
        </div>
        <div class="review-card">
          <div class="review-card-meta"><span class="stareval-note">1</span></div>
          <div class="review-card-content">   </div>
        </div>
    </body></html>"#.to_string()
}

fn dune_home() -> String {
    r#"<html><body>
        <h1>Dune</h1>
        <div><span class="rating-mdl">3</span></div>
        <p class="content-txt">Visuellement fou.</p>
    </body></html>"#.to_string()
}

fn urls(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn spectator_link_is_followed_and_ratings_resolved() {
    let f = MapFetcher::default()
        .page(AVATAR, &avatar_home())
        .page(AVATAR_REVIEWS, &avatar_listing());

    let rows = collect_reviews(&urls(&[AVATAR]), &f, &SiblingNoteResolver, 200, None);

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.film_title == "Avatar" && r.film_url == AVATAR));
    assert_eq!(rows[0].review, "Magnifique, vraiment .");
    assert_eq!(rows[0].user_note, Some(4.5));
    assert_eq!(rows[1].user_note, Some(2.0));
    assert_eq!(rows[2].user_note, None);
}

#[test]
fn home_page_is_read_when_no_spectator_link() {
    let f = MapFetcher::default().page(DUNE, &dune_home());
    let rows = collect_reviews(&urls(&[DUNE]), &f, &SiblingNoteResolver, 200, None);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].film_title, "Dune");
    assert_eq!(rows[0].review, "Visuellement fou.");
    assert_eq!(rows[0].user_note, Some(3.0));
}

#[test]
fn one_failing_film_does_not_stop_the_others() {
    let f = MapFetcher::default()
        .page(AVATAR, &avatar_home())
        .page(AVATAR_REVIEWS, &avatar_listing())
        .page(DUNE, &dune_home());

    let mut rec = Recorder::default();
    let rows = collect_reviews(&urls(&[AVATAR, BROKEN, DUNE]), &f, &SiblingNoteResolver, 200, Some(&mut rec));

    assert_eq!(rows.len(), 4);
    assert_eq!(rec.total, 3);
    assert_eq!(rec.lines, vec![format!("Scraping {AVATAR}"), format!("Scraping {BROKEN}"), format!("Scraping {DUNE}")]);
    assert_eq!(rec.done, vec![("Avatar".to_string(), 3), ("Dune".to_string(), 1)]);
    assert_eq!(rec.failed, vec![BROKEN.to_string()]);
    assert!(rec.finished);
    // input order kept
    assert_eq!(rows.last().map(|r| r.film_title.as_str()), Some("Dune"));
}

#[test]
fn missing_listing_page_fails_the_film() {
    let f = MapFetcher::default().page(AVATAR, &avatar_home());
    let mut rec = Recorder::default();
    let rows = collect_reviews(&urls(&[AVATAR]), &f, &SiblingNoteResolver, 200, Some(&mut rec));
    assert!(rows.is_empty());
    assert_eq!(rec.failed.len(), 1);
}

#[test]
fn title_placeholder_when_no_h1() {
    let doc = Html::parse_document("<html><body><p>rien</p><h1>  </h1></body></html>");
    assert_eq!(extract_title(&doc), "Titre inconnu");
}

#[test]
fn spectator_link_matches_href_or_text() {
    let by_text = Html::parse_document(r#"<a href="/x/">Avis des SPECTATEURS</a>"#);
    assert_eq!(
        find_spectator_link(&by_text, "https://www.allocine.fr/film/a.html").as_deref(),
        Some("https://www.allocine.fr/x/"),
    );

    let by_href = Html::parse_document(r#"<a href="https://other.test/critiques/spectateurs">Avis</a>"#);
    assert_eq!(
        find_spectator_link(&by_href, "https://www.allocine.fr/").as_deref(),
        Some("https://other.test/critiques/spectateurs"),
    );

    let none = Html::parse_document(r#"<a href="/presse/">Critiques presse</a><a>spectateurs</a>"#);
    assert_eq!(find_spectator_link(&none, "https://www.allocine.fr/"), None);
}

#[test]
fn blocks_are_capped_per_page() {
    let mut body = String::from("<html><body>");
    for i in 0..250 {
        body.push_str(&format!("<p class=\"content-txt\">avis {i}</p>"));
    }
    body.push_str("</body></html>");
    let doc = Html::parse_document(&body);

    let blocks = extract_reviews(&doc, &SiblingNoteResolver, 200);
    assert_eq!(blocks.len(), 200);
    assert_eq!(blocks[0].review, "avis 0");
    assert_eq!(blocks[199].review, "avis 199");
}

#[test]
fn resolver_is_swappable() {
    let doc = Html::parse_document(
        r#"<div data-note="1"><span class="stareval-note">5</span></div>
           <div class="review-card-content">texte</div>"#,
    );
    assert_eq!(extract_reviews(&doc, &SiblingNoteResolver, 200)[0].user_note, Some(5.0));
    assert_eq!(extract_reviews(&doc, &AttributeResolver, 200)[0].user_note, Some(1.0));
}

#[test]
fn run_with_writes_raw_dataset() {
    let dir: PathBuf = std::env::temp_dir().join("allocine_extract_offline");
    let _ = fs::remove_dir_all(&dir);
    let out_path = dir.join("raw.csv");

    let f = MapFetcher::default()
        .page(AVATAR, &avatar_home())
        .page(AVATAR_REVIEWS, &avatar_listing());
    let opts = ExtractOptions {
        urls: urls(&[AVATAR, BROKEN]),
        out_path: out_path.clone(),
        ..ExtractOptions::default()
    };

    let summary = run_with(&opts, &f, &SiblingNoteResolver, None).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.films_ok, 1);
    assert_eq!(summary.films_failed, 1);

    let back = store::load_raw(&out_path).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[0].user_note, Some(4.5));
    assert_eq!(back[2].user_note, None);
}

#[test]
fn nothing_fetched_still_writes_header() {
    let dir: PathBuf = std::env::temp_dir().join("allocine_extract_empty");
    let _ = fs::remove_dir_all(&dir);
    let out_path = dir.join("raw.csv");

    let opts = ExtractOptions {
        urls: urls(&[BROKEN]),
        out_path: out_path.clone(),
        ..ExtractOptions::default()
    };
    let summary = run_with(&opts, &MapFetcher::default(), &SiblingNoteResolver, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.rows, 0);

    let text = fs::read_to_string(&out_path).unwrap();
    assert!(text.starts_with('\u{feff}'));
    assert_eq!(text.trim_start_matches('\u{feff}').trim_end(), "film_title,film_url,user_note,review");
    assert!(store::load_raw(&out_path).unwrap().is_empty());
}
