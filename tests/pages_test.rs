mod common;
use common::*;

use actix_web::http::StatusCode;
use mahallu_connect::source::{DataSource, MemoryStore, Table};

fn section<'a>(body: &'a str, start: &str, end: &str) -> &'a str {
    let from = body.find(start).expect("start marker present");
    let rest = &body[from..];
    let to = rest.find(end).expect("end marker present");
    &rest[..to]
}

// --- Frame ---

#[actix_web::test]
async fn test_dashboard_shows_shortcut_cards() {
    let (status, body) = get_page(DataSource::Memory(MemoryStore::new()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to Mahallu Connect"));
    for title in ["Financial Reports", "Survey Insights", "Jobs &#38; Opportunities", "Announcements &#38; Events"] {
        assert!(body.contains(title), "missing card {title}");
    }
    assert!(body.contains(r#"href="/reports" class="shortcut-card"#));
    assert!(body.contains(r#"href="/events" class="shortcut-card"#));
}

#[actix_web::test]
async fn test_only_current_tab_is_active() {
    let (_, body) = get_page(seeded_source(), "/jobs").await;
    assert_eq!(occurrences(&body, r#"class="tab active""#), 1);
    assert!(body.contains(r#"href="/jobs" class="tab active""#));
    assert!(body.contains(r#"href="/" class="tab""#));
    for label in ["Home", "Reports", "Survey", "Jobs", "Events"] {
        assert!(body.contains(&format!(r#"<span class="tab-label">{label}</span>"#)));
    }
}

#[actix_web::test]
async fn test_unknown_path_renders_not_found_in_frame() {
    let (status, body) = get_page(seeded_source(), "/members").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains("There is nothing at /members."));
    assert!(body.contains(r#"class="bottom-nav""#));
    assert_eq!(occurrences(&body, r#"class="tab active""#), 0);
}

// --- Reports ---

#[actix_web::test]
async fn test_reports_group_years_newest_first() {
    let (status, body) = get_page(seeded_source(), "/reports").await;
    assert_eq!(status, StatusCode::OK);

    let y2024 = body.find(r#"<div class="year-label">2024</div>"#).expect("2024 block");
    let y2023 = body.find(r#"<div class="year-label">2023</div>"#).expect("2023 block");
    assert!(y2024 < y2023);

    // The 2023 donation is the largest value and fills its bar.
    assert!(body.contains("₹2,50,000"));
    assert!(body.contains(r#"class="bar-fill bg-blue" style="width: 100%""#));
    assert!(!body.contains("Could not load data"));
}

#[actix_web::test]
async fn test_reports_recent_entries_in_date_order() {
    let (_, body) = get_page(seeded_source(), "/reports").await;
    let ledger = section(&body, "<tbody>", "</tbody>");

    let first = ledger.find("Friday collection").expect("latest entry");
    let last = ledger.find("Annual subscription").expect("oldest entry");
    assert!(first < last);
    assert!(ledger.contains("<td>10/3/2024</td>"));
    assert!(ledger.contains(r#"<span class="amount text-red">₹600</span>"#));
    assert!(ledger.contains(r#"<span class="amount text-green">₹1,500</span>"#));
}

#[actix_web::test]
async fn test_reports_failure_still_renders_page() {
    let source = DataSource::Memory(MemoryStore::new().failing_on(Table::FinancialReports));
    let (status, body) = get_page(source, "/reports").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Could not load data"));
    assert!(body.contains("failed to fetch financial_reports: table unavailable"));
    assert!(body.contains("No financial entries recorded yet"));
    assert!(body.contains("Download PDF Report"));
}

// --- Jobs ---

#[actix_web::test]
async fn test_jobs_lists_active_newest_first() {
    let (status, body) = get_page(seeded_source(), "/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2 active jobs"));
    assert!(!body.contains("Driver"));

    let nurse = body.find("Nurse").expect("nurse job");
    let accountant = body.find("Accountant").expect("accountant job");
    assert!(nurse < accountant);

    assert!(body.contains("Kochi, India"));
    assert!(body.contains("Posted 1/3/2024"));
    assert!(body.contains("Two years of experience"));
}

#[actix_web::test]
async fn test_jobs_contact_opens_whatsapp_with_clean_number() {
    let (_, body) = get_page(seeded_source(), "/jobs").await;
    assert!(body.contains("+919876543210"));
    assert!(body.contains("+971501112222"));
    assert!(!body.contains("+91 98765 43210"));
    assert_eq!(occurrences(&body, r#"target="_blank""#), 2);
}

#[actix_web::test]
async fn test_jobs_empty_and_failed() {
    let (_, empty) = get_page(DataSource::Memory(MemoryStore::new()), "/jobs").await;
    assert!(empty.contains("0 active jobs"));
    assert!(empty.contains("No job opportunities available at the moment"));
    assert!(!empty.contains("Could not load data"));

    let source = DataSource::Memory(MemoryStore::new().failing_on(Table::Jobs));
    let (status, failed) = get_page(source, "/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(failed.contains("Could not load data"));
    assert!(failed.contains("0 active jobs"));
}

#[actix_web::test]
async fn test_reports_accept_entry_without_description() {
    let mut rows = financial_rows();
    rows.push(serde_json::json!({"id": 5, "date": "2024-04-01", "description": null, "amount": 700, "category": "income"}));
    let source = DataSource::Memory(MemoryStore::new().with_rows(Table::FinancialReports, rows));

    let (status, body) = get_page(source, "/reports").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Could not load data"));
    assert!(body.contains("<td>1/4/2024</td>"));
    assert!(body.contains("₹2,200"));
}
