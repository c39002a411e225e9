use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::RecordId;
use crate::models::format::parse_timestamp;

/// Ledger row from `financial_reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: RecordId,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    pub category: String,
}

impl FinancialEntry {
    pub fn year(&self) -> Option<i32> {
        parse_timestamp(&self.date).map(|ts| ts.year())
    }

    /// `None` for categories outside income/expense/donation.
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Income,
    Expense,
    Donation,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Income, Category::Expense, Category::Donation];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(Category::Income),
            "expense" => Some(Category::Expense),
            "donation" => Some(Category::Donation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Donation => "Donation",
        }
    }

    /// Colour tone used for bars and amounts.
    pub fn tone(&self) -> &'static str {
        match self {
            Category::Income => "green",
            Category::Expense => "red",
            Category::Donation => "blue",
        }
    }
}
