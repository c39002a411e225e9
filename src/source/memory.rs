use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::time::Duration;

use serde_json::Value;

use super::{Direction, FetchError, Table, TableQuery};

/// In-process tables holding JSON rows. Serves the demo mode and tests;
/// tables can be marked as failing and reads can be slowed down. Clones
/// share the tables and the completed-read counter.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<HashMap<Table, Vec<Value>>>,
    failing: Arc<HashSet<Table>>,
    latency: Option<Duration>,
    completed: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a seed document of the form `{"<table>": [row, ...], ...}`.
    pub fn from_seed_json(json: &str) -> Result<Self, serde_json::Error> {
        let seed: HashMap<String, Vec<Value>> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for (name, rows) in seed {
            match Table::from_name(&name) {
                Some(table) => store = store.with_rows(table, rows),
                None => log::warn!("Seed: ignoring unknown table '{name}'"),
            }
        }
        Ok(store)
    }

    pub fn with_rows(mut self, table: Table, rows: Vec<Value>) -> Self {
        Arc::make_mut(&mut self.tables).insert(table, rows);
        self
    }

    pub fn failing_on(mut self, table: Table) -> Self {
        Arc::make_mut(&mut self.failing).insert(table);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn row_count(&self, table: Table) -> usize {
        self.tables.get(&table).map_or(0, Vec::len)
    }

    /// Reads that ran to the end (rows or error). A read dropped while
    /// waiting out the latency is not counted.
    pub fn completed_reads(&self) -> usize {
        self.completed.load(AtomicOrdering::SeqCst)
    }

    pub async fn fetch(&self, query: &TableQuery) -> Result<Vec<Value>, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.completed.fetch_add(1, AtomicOrdering::SeqCst);
        if self.failing.contains(&query.table) {
            return Err(FetchError::new(query.table, "table unavailable"));
        }

        let mut rows: Vec<Value> = self
            .tables
            .get(&query.table)
            .map(|rows| rows.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|row| match &query.filter {
                Some(filter) => row
                    .get(filter.column)
                    .and_then(text_form)
                    .is_some_and(|text| text == filter.value),
                None => true,
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare(a.get(order.column), b.get(order.column));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }
}

/// Text form of a scalar, as `column::text` would give it. NULL matches nothing.
fn text_form(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// NULLs sort last ascending (and so first descending), like Postgres.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
