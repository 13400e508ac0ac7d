//! Query engine behavior against the shared fixture site.

use crate::common;
use lupa::indexer::index_page;
use lupa::search::{search, MAX_CURRENT_PAGE_MATCHES};

#[test]
fn sobre_matches_only_the_second_section() {
    let mut page = common::index_page_es();
    let items = index_page(&mut page);
    let results = search(
        "sobre",
        &items,
        Some(&common::site_index()),
        &common::translations_es(),
        "index.html",
    );
    assert_eq!(results.current_page.len(), 1);
    assert_eq!(results.current_page[0].text, "Sobre mí");
    assert_eq!(results.current_page[0].id, "sobre");
}

#[test]
fn contacto_finds_the_faq_on_the_help_page() {
    let results = search(
        "contacto",
        &[],
        Some(&common::site_index()),
        &common::translations_es(),
        "index.html",
    );
    let help = results
        .other_pages
        .iter()
        .find(|p| p.page == "ayuda.html")
        .expect("help page in results");
    assert_eq!(help.title, "Ayuda");
    assert_eq!(help.matches[0].id, "faq");
    assert_eq!(help.matches[0].context, "Preguntas frecuentes");
    assert!(help.matches[0].text.contains("contacto"));
}

#[test]
fn the_current_page_is_never_scanned_cross_page() {
    let translations = common::translations_es();
    // "bienvenido" appears in home.intro.text, which belongs to index.html.
    let from_index = search(
        "bienvenido",
        &[],
        Some(&common::site_index()),
        &translations,
        "index.html",
    );
    assert!(from_index.other_pages.is_empty());

    let from_help = search(
        "bienvenido",
        &[],
        Some(&common::site_index()),
        &translations,
        "ayuda.html",
    );
    assert_eq!(from_help.other_pages.len(), 1);
    assert_eq!(from_help.other_pages[0].page, "index.html");
}

#[test]
fn accent_insensitive_both_directions() {
    let mut page = common::index_page_es();
    let items = index_page(&mut page);
    let translations = common::translations_es();
    let site = common::site_index();

    // ASCII query against accented text.
    let results = search("fotografia", &items, Some(&site), &translations, "index.html");
    assert_eq!(results.current_page.len(), 1);

    // Accented query against the same text.
    let results = search("FOTOGRAFÍA", &items, Some(&site), &translations, "index.html");
    assert_eq!(results.current_page.len(), 1);
}

#[test]
fn degraded_mode_yields_in_page_results_only() {
    let mut page = common::index_page_es();
    let items = index_page(&mut page);
    // "contacto" would match ayuda.html, but the index never loaded.
    let results = search("contacto", &items, None, &common::translations_es(), "index.html");
    assert!(results.other_pages.is_empty());
    assert!(results.current_page.is_empty());
    assert!(results.is_empty());
}

#[test]
fn locale_change_rewrites_titles_and_snippets_for_the_same_query() {
    let site = common::site_index();
    let es = search("contact", &[], Some(&site), &common::translations_es(), "index.html");
    let en = search("contact", &[], Some(&site), &common::translations_en(), "index.html");

    let es_help = es.other_pages.iter().find(|p| p.page == "ayuda.html").unwrap();
    let en_help = en.other_pages.iter().find(|p| p.page == "ayuda.html").unwrap();
    assert_eq!(es_help.title, "Ayuda");
    assert_eq!(en_help.title, "Help");
    assert!(en_help.matches.iter().any(|m| m.text.contains("contact")));
}

#[test]
fn in_page_cap_holds_on_a_repetitive_page() {
    use lupa::dom::Node;
    let paragraphs: Vec<Node> = (0..10)
        .map(|i| Node::text_node("p", &format!("palabra repetida {}", i)))
        .collect();
    let mut page = Node::element("main", paragraphs);
    let items = index_page(&mut page);
    let results = search("repetida", &items, None, &common::translations_es(), "index.html");
    assert_eq!(results.current_page.len(), MAX_CURRENT_PAGE_MATCHES);
}

#[test]
fn queries_matching_nothing_return_an_empty_set() {
    let mut page = common::index_page_es();
    let items = index_page(&mut page);
    let results = search(
        "xyzzy",
        &items,
        Some(&common::site_index()),
        &common::translations_es(),
        "index.html",
    );
    assert!(results.is_empty());
}
