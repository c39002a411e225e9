use askama::Template;

use super::PageContext;
use crate::models::financial::{bar_width, Category, FinancialEntry, YearlyAggregate};
use crate::models::format::{display_date, rupees};

#[derive(Template)]
#[template(path = "reports.html")]
pub struct ReportsTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub years: Vec<YearRow>,
    pub recent: Vec<EntryRow>,
}

pub struct YearRow {
    pub year: i32,
    pub bars: Vec<CategoryBar>,
}

pub struct CategoryBar {
    pub label: &'static str,
    pub amount: String,
    pub width: f64,
    pub tone: &'static str,
}

pub struct EntryRow {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub tone: &'static str,
}

impl YearRow {
    /// One bar per category, sized against `max` across all years.
    pub fn new(aggregate: &YearlyAggregate, max: f64) -> Self {
        let bars = Category::ALL
            .iter()
            .map(|category| {
                let value = aggregate.get(*category);
                CategoryBar {
                    label: category.label(),
                    amount: rupees(value),
                    width: bar_width(value, max),
                    tone: category.tone(),
                }
            })
            .collect();
        Self { year: aggregate.year, bars }
    }
}

impl From<&FinancialEntry> for EntryRow {
    fn from(entry: &FinancialEntry) -> Self {
        // Anything that is not income or a donation reads as money out.
        let tone = match entry.category() {
            Some(Category::Income) => "green",
            Some(Category::Donation) => "blue",
            _ => "red",
        };
        Self {
            date: display_date(&entry.date),
            description: entry.description.clone().unwrap_or_default(),
            amount: rupees(entry.amount),
            tone,
        }
    }
}
