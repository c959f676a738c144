//! End-to-end: bundled sample content through catalog, pages and export.

#![allow(clippy::panic)]

use std::path::PathBuf;

use hidol_content::catalog::ContentCatalog;
use hidol_content::domain::Dataset;
use hidol_content::export::{self, BIRTHDAY_FILE, FANSIGN_FILE};
use hidol_content::page::LightstickState;

fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content")
}

fn catalog() -> ContentCatalog {
    match ContentCatalog::load_dir(content_dir()) {
        Ok(catalog) => catalog,
        Err(err) => panic!("sample content failed to load: {err}"),
    }
}

#[test]
fn sample_content_loads_cleanly() {
    let catalog = catalog();
    let report = catalog.report();
    assert_eq!(report.diagnostic_count(), 0);
    assert_eq!(report.datasets.len(), Dataset::ALL.len());

    assert_eq!(catalog.albums.len(), 4);
    assert_eq!(catalog.photocards.len(), 3);
    assert_eq!(catalog.locations.len(), 3);
    assert_eq!(catalog.idols.len(), 3);
    assert_eq!(catalog.members.len(), 4);
    assert_eq!(catalog.events.len(), 4);
}

#[test]
fn quoted_cells_keep_commas_and_newlines() {
    let catalog = catalog();
    let Some(album) = catalog.albums.get(1) else {
        panic!("second album expected");
    };
    assert_eq!(album.title, "Night Drive, Vol. 1");
    assert_eq!(album.desc, "First mini album.\nFive tracks.");
    assert_eq!(album.share_link(), None);
    assert_eq!(album.moments_count(), Some(3400));
}

#[test]
fn timeline_groups_years_in_order() {
    let page = catalog().albums_page();
    let years: Vec<(&str, usize)> = page
        .timeline()
        .iter()
        .map(|y| (y.year, y.albums.len()))
        .collect();
    assert_eq!(years, vec![("2022", 2), ("2023", 1), ("2024", 1)]);
}

#[test]
fn photocard_modal_opens_known_ids_only() {
    let mut page = catalog().photocards_page();
    assert!(page.open(2));
    assert_eq!(page.selected().map(|c| c.member.as_str()), Some("Yuri"));
    assert!(!page.open(42));
    page.close();
    assert!(page.selected().is_none());
}

#[test]
fn shared_venue_becomes_one_marker() {
    let mut page = catalog().fansign_page();
    assert_eq!(page.markers().len(), 2);

    let Some(marker) = page.marker_mut(0) else {
        panic!("first marker expected");
    };
    assert_eq!(marker.key().to_string(), "37.5665,126.978");
    assert!(marker.is_navigable());
    marker.retreat();
    assert_eq!(marker.label(), "2 / 2");
    assert_eq!(marker.current().map(|l| l.id), Some(2));
}

#[test]
fn lightstick_carousel_wraps_and_falls_back() {
    let mut page = catalog().lightsticks_page();
    assert_eq!(page.retreat(), Some(2));
    let LightstickState::Ready { idol, star } = page.state() else {
        panic!("profile expected");
    };
    assert_eq!((idol.name.as_str(), star), ("Mina", 3));

    page.advance();
    page.advance();
    assert_eq!(page.wiki_text(), Some("No wiki content available."));
}

#[test]
fn birthday_filter_round_trip() {
    let mut page = catalog().birthday_page();
    let ids = |page: &hidol_content::page::BirthdayPage| -> Vec<i64> {
        page.visible_events().iter().map(|e| e.id).collect()
    };

    assert_eq!(ids(&page), vec![1, 2, 3, 4]);
    page.select_member("hana");
    assert_eq!(ids(&page), vec![1, 3]);
    page.select_member("nobody");
    assert!(ids(&page).is_empty());
    page.select_member("all");
    assert_eq!(ids(&page), vec![1, 2, 3, 4]);
}

#[test]
fn export_writes_page_views() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let written = match export::write_page_views(&catalog(), dir.path()) {
        Ok(written) => written,
        Err(err) => panic!("export failed: {err}"),
    };
    assert_eq!(written.len(), 6);

    let Ok(text) = std::fs::read_to_string(dir.path().join(BIRTHDAY_FILE)) else {
        panic!("birthday view missing");
    };
    let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) else {
        panic!("birthday view is not json");
    };
    assert_eq!(json.pointer("/filter").and_then(|v| v.as_str()), Some("all"));
    assert_eq!(
        json.pointer("/members/1/event_ids")
            .and_then(|v| v.as_array())
            .map(Vec::len),
        Some(2)
    );

    let Ok(text) = std::fs::read_to_string(dir.path().join(FANSIGN_FILE)) else {
        panic!("fansign view missing");
    };
    assert!(text.contains("https://www.google.com/maps/search/?api=1&query=25.0515,121.5497"));
}
