mod common;
use common::*;

use actix_web::http::StatusCode;
use mahallu_connect::source::{DataSource, MemoryStore, Table};

fn upcoming_panel(body: &str) -> &str {
    let from = body.find(r#"<ul class="upcoming-list">"#).expect("upcoming panel");
    let rest = &body[from..];
    &rest[..rest.find("</ul>").expect("panel end")]
}

fn card_titles(body: &str) -> Vec<&str> {
    body.split(r#"<div class="card-head">"#)
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("<h3>")? + 4;
            let end = chunk.find("</h3>")?;
            Some(&chunk[start..end])
        })
        .collect()
}

#[actix_web::test]
async fn test_all_announcements_newest_first() {
    let (status, body) = get_page(seeded_source(), "/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        card_titles(&body),
        vec!["Milad Meet", "Medical Camp", "Subscription Reminder", "Janaza Prayer", "Old Iftar"]
    );
    assert!(body.contains(r#"href="/events" class="chip chip-active chip-teal""#));
}

#[actix_web::test]
async fn test_upcoming_panel_lists_future_events_only() {
    let (_, body) = get_page(seeded_source(), "/events").await;
    let panel = upcoming_panel(&body);
    assert!(panel.contains("Milad Meet"));
    assert!(panel.contains("Medical Camp"));
    assert!(panel.contains("1/6/2099"));
    assert!(!panel.contains("Old Iftar"));
    assert!(!panel.contains("Subscription Reminder"));
}

#[actix_web::test]
async fn test_filter_narrows_cards_but_not_upcoming() {
    let (_, body) = get_page(seeded_source(), "/events?filter=notice").await;
    assert_eq!(card_titles(&body), vec!["Subscription Reminder"]);
    assert!(body.contains(r#"href="/events?filter=notice" class="chip chip-active chip-yellow""#));
    assert!(upcoming_panel(&body).contains("Milad Meet"));
}

#[actix_web::test]
async fn test_unknown_filter_shows_everything() {
    let (_, body) = get_page(seeded_source(), "/events?filter=party").await;
    assert_eq!(card_titles(&body).len(), 5);
    assert!(body.contains(r#"href="/events" class="chip chip-active"#));
}

#[actix_web::test]
async fn test_card_details() {
    let (_, body) = get_page(seeded_source(), "/events?filter=obituary").await;
    assert!(body.contains(r#"<span class="badge badge-gray">Obituary</span>"#));
    assert!(body.contains("icon-heart"));
    assert!(body.contains("Juma Masjid"));
    assert!(body.contains("20/11/2023"));
}

#[actix_web::test]
async fn test_empty_and_failed_lists() {
    let (_, empty) = get_page(DataSource::Memory(MemoryStore::new()), "/events").await;
    assert!(empty.contains("No announcements found"));
    assert!(!empty.contains("upcoming-list"));

    let source = DataSource::Memory(MemoryStore::new().failing_on(Table::Announcements));
    let (status, failed) = get_page(source, "/events?filter=event").await;
    assert_eq!(status, StatusCode::OK);
    assert!(failed.contains("Could not load data"));
    assert!(failed.contains("No announcements found"));
}

#[actix_web::test]
async fn test_announcement_without_description_still_listed() {
    let mut rows = announcement_rows();
    rows.push(serde_json::json!({"id": 6, "title": "Hall Closed", "type": "notice", "description": null, "date": "2024-03-05"}));
    let source = DataSource::Memory(MemoryStore::new().with_rows(Table::Announcements, rows));

    let (status, body) = get_page(source, "/events?filter=notice").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Could not load data"));
    assert_eq!(card_titles(&body), vec!["Hall Closed", "Subscription Reminder"]);
}
