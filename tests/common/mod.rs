//! Shared test infrastructure for page-level tests.
//!
//! Pages are served from an in-memory `DataSource`, so no database is needed.
//!
//! # Fixtures
//! - `seeded_store()` - one small set of rows per table
//! - `get_page()` - run a GET through the full routing stack

#![allow(dead_code)]

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use mahallu_connect::handlers;
use mahallu_connect::source::{DataSource, MemoryStore, Table};

// ============================================================================
// ROWS
// ============================================================================

pub fn financial_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "date": "2024-03-10", "description": "Friday collection", "amount": 1500, "category": "income"}),
        json!({"id": 2, "date": "2024-02-01", "description": "Madrasa repairs", "amount": 600, "category": "expense"}),
        json!({"id": 3, "date": "2023-12-25", "description": "Relief fund", "amount": 250000, "category": "donation"}),
        json!({"id": 4, "date": "2023-05-05", "description": "Annual subscription", "amount": 4000, "category": "income"}),
    ]
}

pub fn survey_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "zone": "All Zones", "total_households": 500,
            "unemployed_percentage": 12.5, "poverty_percentage": 20, "average_income": 18000,
            "education_distribution": {"Primary": 100, "Secondary": 200, "Graduate": 150, "Post Graduate": 50}
        }),
        json!({
            "id": 2, "zone": "North", "total_households": 120,
            "unemployed_percentage": 8, "poverty_percentage": 11, "average_income": 24000,
            "education_distribution": {"Primary": 30, "Secondary": 10}
        }),
        json!({
            "id": 3, "zone": "South", "total_households": 95,
            "unemployed_percentage": 15, "poverty_percentage": 25, "average_income": 15000,
            "education_distribution": null
        }),
    ]
}

pub fn job_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "title": "Accountant", "location": "Dubai", "country": "UAE", "salary": "AED 6000",
            "contact": "+971 50 111 2222", "description": "Two years of experience",
            "posted_date": "2024-01-05", "status": "active"
        }),
        json!({
            "id": 2, "title": "Nurse", "location": "Kochi", "country": "India", "salary": "INR 25000",
            "contact": "+91 98765 43210", "description": null,
            "posted_date": "2024-03-01", "status": "active"
        }),
        json!({
            "id": 3, "title": "Driver", "location": "Riyadh", "country": "Saudi Arabia", "salary": "SAR 2500",
            "contact": "+966 55 000 0000", "description": "Filled",
            "posted_date": "2024-04-01", "status": "closed"
        }),
    ]
}

pub fn announcement_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Milad Meet", "type": "event", "description": "Annual celebration", "date": "2099-06-01", "location": "Mahallu Hall"}),
        json!({"id": 2, "title": "Medical Camp", "type": "event", "description": "Free check-up", "date": "2099-01-15", "location": null}),
        json!({"id": 3, "title": "Subscription Reminder", "type": "notice", "description": "Dues before the 10th", "date": "2024-02-01"}),
        json!({"id": 4, "title": "Janaza Prayer", "type": "obituary", "description": "After Asr", "date": "2023-11-20", "location": "Juma Masjid"}),
        json!({"id": 5, "title": "Old Iftar", "type": "event", "description": "Last year", "date": "2001-04-01"}),
    ]
}

// ============================================================================
// STORES
// ============================================================================

pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_rows(Table::FinancialReports, financial_rows())
        .with_rows(Table::SurveyData, survey_rows())
        .with_rows(Table::Jobs, job_rows())
        .with_rows(Table::Announcements, announcement_rows())
}

pub fn seeded_source() -> DataSource {
    DataSource::Memory(seeded_store())
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Serve `uri` through the app's routes and return status plus body text.
pub async fn get_page(source: DataSource, uri: &str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(source))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found)),
    )
    .await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).expect("body is utf-8"))
}

/// Count non-overlapping occurrences of `needle`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
