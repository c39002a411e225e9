// Read-only table access over the community database.
//
// Three backends answer the same three query shapes (select all ordered,
// select filtered ordered, select single by equality). Rows travel as JSON
// objects and are decoded into the typed records in `crate::models`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;

pub mod memory;
pub mod postgres;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestClient;

/// The four tables the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    FinancialReports,
    SurveyData,
    Jobs,
    Announcements,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::FinancialReports,
        Table::SurveyData,
        Table::Jobs,
        Table::Announcements,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::FinancialReports => "financial_reports",
            Table::SurveyData => "survey_data",
            Table::Jobs => "jobs",
            Table::Announcements => "announcements",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self { column, direction: Direction::Asc }
    }

    pub fn desc(column: &'static str) -> Self {
        Self { column, direction: Direction::Desc }
    }
}

/// Equality predicate. Values are compared in their text form, so the same
/// filter works against text, uuid and numeric columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self { column, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: Table,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn new(table: Table) -> Self {
        Self { table, filter: None, order: None, limit: None }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The single failure kind of a read: network, access, decode and
/// multiplicity problems all end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub table: Table,
    pub reason: String,
}

impl FetchError {
    pub fn new(table: Table, reason: impl Into<String>) -> Self {
        Self { table, reason: reason.into() }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to fetch {}: {}", self.table, self.reason)
    }
}

impl std::error::Error for FetchError {}

#[derive(Clone)]
pub enum DataSource {
    Postgres(PgPool),
    Rest(RestClient),
    Memory(MemoryStore),
}

impl DataSource {
    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Postgres(_) => "postgres",
            DataSource::Rest(_) => "supabase",
            DataSource::Memory(_) => "demo",
        }
    }

    /// Run a query and return the raw JSON rows.
    pub async fn fetch(&self, query: &TableQuery) -> Result<Vec<Value>, FetchError> {
        match self {
            DataSource::Postgres(pool) => postgres::fetch(pool, query).await,
            DataSource::Rest(client) => client.fetch(query).await,
            DataSource::Memory(store) => store.fetch(query).await,
        }
    }

    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: Table,
        order: Order,
    ) -> Result<Vec<T>, FetchError> {
        let rows = self.fetch(&TableQuery::new(table).order(order)).await?;
        decode_rows(table, rows)
    }

    pub async fn select_where<T: DeserializeOwned>(
        &self,
        table: Table,
        filter: Filter,
        order: Order,
    ) -> Result<Vec<T>, FetchError> {
        let rows = self
            .fetch(&TableQuery::new(table).filter(filter).order(order))
            .await?;
        decode_rows(table, rows)
    }

    /// At most one matching row; more than one is a failure.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: Table,
        filter: Filter,
    ) -> Result<Option<T>, FetchError> {
        let mut rows = self
            .fetch(&TableQuery::new(table).filter(filter).limit(2))
            .await?;
        match rows.len() {
            0 => Ok(None),
            1 => decode_row(table, rows.remove(0)).map(Some),
            n => Err(FetchError::new(table, format!("expected at most one row, got {n}"))),
        }
    }
}

fn decode_row<T: DeserializeOwned>(table: Table, row: Value) -> Result<T, FetchError> {
    serde_json::from_value(row).map_err(|e| FetchError::new(table, format!("malformed row: {e}")))
}

fn decode_rows<T: DeserializeOwned>(table: Table, rows: Vec<Value>) -> Result<Vec<T>, FetchError> {
    rows.into_iter().map(|row| decode_row(table, row)).collect()
}
