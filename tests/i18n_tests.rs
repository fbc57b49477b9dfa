// Host-side tests for the pure translation table.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod i18n {
    include!("../src/core/i18n.rs");
}

use i18n::*;

#[test]
fn language_tag_round_trip() {
    assert_eq!(Language::from_tag("en"), Some(Language::En));
    assert_eq!(Language::from_tag("fr"), Some(Language::Fr));
    assert_eq!(Language::from_tag("fr-FR"), Some(Language::Fr));
    assert_eq!(Language::from_tag("de"), None);
    assert_eq!(Language::En.tag(), "en");
    assert_eq!(Language::Fr.tag(), "fr");
}

#[test]
fn toggle_flips_between_the_two_languages() {
    assert_eq!(Language::En.toggled(), Language::Fr);
    assert_eq!(Language::Fr.toggled(), Language::En);
    assert_eq!(Language::En.toggled().toggled(), Language::En);
}

#[test]
fn lookup_is_exact_per_language() {
    let t = Translations::new();
    assert_eq!(t.lookup(Language::En, "nav-home"), Some("Home"));
    assert_eq!(t.lookup(Language::Fr, "nav-home"), Some("Accueil"));
    assert_eq!(t.lookup(Language::En, "hero-cta"), Some("Get in Touch"));
    assert_eq!(t.lookup(Language::Fr, "hero-cta"), Some("Me Contacter"));
}

#[test]
fn missing_key_yields_none() {
    let t = Translations::new();
    assert_eq!(t.lookup(Language::En, "no-such-key"), None);
    assert_eq!(t.lookup(Language::Fr, ""), None);
}

#[test]
fn every_key_exists_in_both_languages() {
    let t = Translations::new();
    for &(key, english, french) in ENTRIES {
        assert_eq!(t.lookup(Language::En, key), Some(english), "en: {key}");
        assert_eq!(t.lookup(Language::Fr, key), Some(french), "fr: {key}");
    }
}

#[test]
fn table_covers_the_project_pages() {
    let t = Translations::new();
    // A sample from each page section, including the long-form paragraphs.
    for key in [
        "about-intro-1",
        "about-core-unity",
        "project-sonification-title",
        "contact-seeking",
        "vr-context-p1",
        "vr-bells-replica-p1",
        "vr-back-button",
        "hrtf-selection-p2",
        "hrtf-back-button",
    ] {
        assert!(t.lookup(Language::En, key).is_some(), "en missing {key}");
        assert!(t.lookup(Language::Fr, key).is_some(), "fr missing {key}");
    }
}

#[test]
fn decorative_subtitles_stay_blank() {
    // Some headings carry an intentionally empty subtitle slot; substitution
    // must still resolve them rather than fall through to the markup text.
    let t = Translations::new();
    for key in ["about-subtitle", "portfolio-subtitle", "vr-subtitle", "hrtf-subtitle"] {
        assert_eq!(t.lookup(Language::En, key), Some(""), "{key}");
        assert_eq!(t.lookup(Language::Fr, key), Some(""), "{key}");
    }
    assert_eq!(t.lookup(Language::Fr, "contact-subtitle"), Some(""));
    assert_eq!(
        t.lookup(Language::En, "contact-subtitle"),
        Some("Let's discuss your next project")
    );
}
