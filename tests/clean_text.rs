// tests/clean_text.rs
use allocine_reviews::normalize::clean_text;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Un FILM génial !!!",
    "<b>Superbe</b> mise en scène, vraiment.",
    "Voir https://www.allocine.fr/film/x.html pour plus",
    "www.example.com/abc et http://t.co/xyz",
    "http alone, www alone",
    "awwwards... http.",
    "a <3\nb> c",
    "Émotion\t\tet   DÉCEPTION\n\n(mélangées)",
    "L'acteur \"principal\" est -- parfait ;)",
    "<<x>> <br/> fin",
    "ÇA VA ? İstanbul",
    "déjà vu: 10/10 — à revoir",
    "Super http! film",
    "ht.tpx w.ww. <a>http</a>:",
];

#[test]
fn absent_text_is_empty() {
    assert_eq!(clean_text(None), "");
    assert_eq!(clean_text(""), "");
}

#[test]
fn lowercases_and_strips_punctuation() {
    assert_eq!(clean_text("Un FILM génial !!!"), "un film génial");
    assert_eq!(clean_text("L'acteur \"principal\" est -- parfait ;)"), "lacteur principal est parfait");
}

#[test]
fn removes_tags_and_links() {
    assert_eq!(clean_text("<b>Superbe</b> mise en scène."), "superbe mise en scène");
    assert_eq!(clean_text("Voir https://www.allocine.fr/film/x.html pour plus"), "voir pour plus");
    assert_eq!(clean_text("www.example.com et rien"), "et rien");
}

#[test]
fn links_ending_in_punctuation_are_removed() {
    assert_eq!(clean_text("Super http! film"), "super film");
    assert_eq!(clean_text("voir http:// ici"), "voir ici");
    assert_eq!(clean_text("allez sur www. demain"), "allez sur demain");
    // assembled once punctuation is gone
    assert_eq!(clean_text("a ht.tpx b"), "a b");
}

#[test]
fn collapses_whitespace() {
    assert_eq!(clean_text("  a \t\n b  "), "a b");
    assert_eq!(clean_text("Émotion\t\tet   DÉCEPTION"), "émotion et déception");
}

#[test]
fn non_ascii_punctuation_is_kept() {
    assert_eq!(clean_text("déjà vu — à revoir"), "déjà vu — à revoir");
}

#[test]
fn cleaning_is_a_fixed_point() {
    for s in SAMPLES {
        let once = clean_text(*s);
        let twice = clean_text(once.as_str());
        assert_eq!(once, twice, "not stable for {:?}", s);
        assert_eq!(once.trim(), once);
        assert!(!once.contains("  "));
    }
}
