// tests/text_properties.rs
use proptest::prelude::*;

use allocine_reviews::normalize::clean_text;
use allocine_reviews::specs::rating::parse_note;

/// Review-like text: letters near `http`/`www`, punctuation, tags, spacing.
fn review_like() -> impl Strategy<Value = String> {
    "[a-zA-ZéÉ htpw.:/!,<>'\"\t\n-]{0,60}"
}

proptest! {
    #[test]
    fn clean_text_is_a_fixed_point(s in any::<String>()) {
        let once = clean_text(s.as_str());
        prop_assert_eq!(clean_text(once.as_str()), once);
    }

    #[test]
    fn clean_text_is_a_fixed_point_on_review_like_text(s in review_like()) {
        let once = clean_text(s.as_str());
        prop_assert_eq!(clean_text(once.as_str()), once);
    }

    #[test]
    fn clean_text_output_is_trimmed_and_single_spaced(s in review_like()) {
        let out = clean_text(s.as_str());
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| c.is_ascii_punctuation()));
        // a surviving prefix is never followed by more of its word
        for w in out.split(' ') {
            if let Some(i) = w.find("http") { prop_assert_eq!(i + 4, w.len()); }
            if let Some(i) = w.find("www") { prop_assert_eq!(i + 3, w.len()); }
        }
    }

    #[test]
    fn clean_text_never_panics(s in any::<String>()) {
        let out = clean_text(s.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn parse_note_is_finite_or_absent(s in any::<String>()) {
        if let Some(n) = parse_note(&s) {
            prop_assert!(n.is_finite());
        }
    }

    #[test]
    fn parse_note_reads_french_decimals(whole in 0u32..10, frac in 0u32..10) {
        let text = format!("{whole},{frac} étoiles");
        let expected: f64 = format!("{whole}.{frac}").parse().unwrap();
        prop_assert_eq!(parse_note(&text), Some(expected));
    }
}
