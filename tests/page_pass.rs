//! End-to-end checks over the pure page pipeline: theme resolution and
//! persistence, the section visibility pass, TOC derivation, and search
//! filtering. The wasm adapter is a thin binding over exactly these calls.

use gv_enhance::prefs::{MemoryStore, Preferences};
use gv_enhance::search;
use gv_enhance::sections::SectionSnapshot;
use gv_enhance::theme::{initial_theme, next_theme, Theme};
use gv_enhance::toc::build_toc;

fn section(id: Option<&str>, heading: Option<&str>, body: &str) -> SectionSnapshot {
    SectionSnapshot {
        id: id.map(Into::into),
        heading: heading.map(Into::into),
        body_text: body.into(),
        has_block: !body.trim().is_empty(),
        ..SectionSnapshot::default()
    }
}

#[test]
fn first_visit_follows_system_preference() {
    let prefs = Preferences::new(MemoryStore::default());
    assert_eq!(initial_theme(prefs.theme(), true), Theme::Light);
    assert_eq!(initial_theme(prefs.theme(), false), Theme::Dark);
}

#[test]
fn stored_preference_beats_system_preference() {
    let prefs = Preferences::new(MemoryStore::default());
    prefs.set_theme(Theme::Dark).unwrap();
    assert_eq!(initial_theme(prefs.theme(), true), Theme::Dark);
}

#[test]
fn toggling_twice_returns_to_start_and_persists_each_step() {
    for start in [Theme::Light, Theme::Dark] {
        let prefs = Preferences::new(MemoryStore::default());
        let mut applied = start;
        for _ in 0..2 {
            applied = next_theme(Some(applied.as_str()));
            prefs.set_theme(applied).unwrap();
            assert_eq!(prefs.theme(), Some(applied));
        }
        assert_eq!(applied, start);
    }
}

#[test]
fn visibility_pass_then_toc_matches_exactly_the_visible_identified_sections() {
    let mut flagged = section(Some("bozza"), Some("Bozza"), "testo presente");
    flagged.force_hide = true;

    let page = [
        section(Some("storia"), Some("Storia"), "Fondata nel 1100."),
        section(Some("vuota"), Some("Vuota"), "   \n  "),
        flagged,
        section(None, Some("Anonima"), "testo senza ancora"),
        section(Some("cucina"), None, "Trattorie e mercati."),
    ];

    let hidden: Vec<bool> = page.iter().map(SectionSnapshot::should_hide).collect();
    assert_eq!(hidden, [false, true, true, false, false]);

    let toc = build_toc(&page);
    let targets: Vec<&str> = toc.iter().map(|e| e.target.as_str()).collect();
    assert_eq!(targets, ["storia", "cucina"]);
    // Headless section links by its identifier.
    assert_eq!(toc[1].label, "cucina");
    assert_eq!(toc[1].href(), "#cucina");
    // No entry references a hidden section.
    for entry in &toc {
        let idx = page
            .iter()
            .position(|s| s.id.as_deref() == Some(entry.target.as_str()))
            .unwrap();
        assert!(!page[idx].should_hide());
    }
}

#[test]
fn all_sections_hidden_leaves_an_empty_toc() {
    let page = [
        section(Some("a"), Some("A"), ""),
        section(Some("b"), Some("B"), "  \t "),
    ];
    assert!(page.iter().all(SectionSnapshot::should_hide));
    assert!(build_toc(&page).is_empty());
}

#[test]
fn rebuilding_the_toc_is_idempotent() {
    let page = [
        section(Some("storia"), Some("Storia"), "Fondata nel 1100."),
        section(Some("vuota"), None, ""),
    ];
    assert_eq!(build_toc(&page), build_toc(&page));
}

#[test]
fn card_filtering_covers_the_search_properties() {
    let cards = ["Café Centrale", "Mercato Rionale", "Gelateria Künstler"];

    // Empty query shows everything.
    assert!(cards.iter().all(|c| search::matches(c, "")));

    // Accented content matches an unaccented query and vice versa.
    assert!(search::matches("Café Centrale", "cafe"));
    assert!(search::matches("Gelateria Künstler", "kunstler"));
    assert!(search::matches("cafe centrale", "café"));

    // A non-matching query hides every card.
    assert!(cards.iter().all(|c| !search::matches(c, "zzz")));
}
