use std::collections::BTreeMap;

use super::types::{Category, FinancialEntry};

/// Per-year sums of the three known categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearlyAggregate {
    pub year: i32,
    pub income: f64,
    pub expense: f64,
    pub donation: f64,
}

impl YearlyAggregate {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Income => self.income,
            Category::Expense => self.expense,
            Category::Donation => self.donation,
        }
    }

    fn add(&mut self, category: Category, amount: f64) {
        match category {
            Category::Income => self.income += amount,
            Category::Expense => self.expense += amount,
            Category::Donation => self.donation += amount,
        }
    }
}

/// Group entries by calendar year, newest year first. Amounts are added
/// signed into the bucket named by the category; entries with any other
/// category still open their year but add nothing. Entries whose date cannot
/// be read are skipped.
pub fn derive_yearly_aggregates(entries: &[FinancialEntry]) -> Vec<YearlyAggregate> {
    let mut by_year: BTreeMap<i32, YearlyAggregate> = BTreeMap::new();

    for entry in entries {
        let Some(year) = entry.year() else {
            log::warn!("Skipping financial entry {} with unreadable date '{}'", entry.id, entry.date);
            continue;
        };
        let bucket = by_year
            .entry(year)
            .or_insert_with(|| YearlyAggregate { year, ..Default::default() });
        if let Some(category) = entry.category() {
            bucket.add(category, entry.amount);
        }
    }

    by_year.into_values().rev().collect()
}

/// Largest value across all years and categories; 0 when there are none.
pub fn max_value(years: &[YearlyAggregate]) -> f64 {
    years
        .iter()
        .flat_map(|y| Category::ALL.map(|c| y.get(c)))
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Bar width in percent, clamped to 0..=100. A non-positive or non-finite
/// maximum gives 0.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0) || !value.is_finite() {
        return 0.0;
    }
    (value * 100.0 / max).clamp(0.0, 100.0)
}
