use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::SourceConfig;
use crate::errors::AppError;
use crate::source::{DataSource, MemoryStore, RestClient};

pub const DEMO_SEED: &str = include_str!("../data/seed/demo.json");

/// Lazy pool: connections open on first query, so an unreachable database
/// shows up as failed page loads rather than a refused start.
pub fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)?;
    Ok(pool)
}

pub fn demo_store() -> Result<MemoryStore, AppError> {
    Ok(MemoryStore::from_seed_json(DEMO_SEED)?)
}

pub fn connect_source(config: &SourceConfig) -> Result<DataSource, AppError> {
    let source = match config {
        SourceConfig::Postgres { database_url, max_connections } => {
            DataSource::Postgres(init_pool(database_url, *max_connections)?)
        }
        SourceConfig::Supabase { url, anon_key } => DataSource::Rest(RestClient::new(url, anon_key)),
        SourceConfig::Demo => DataSource::Memory(demo_store()?),
    };
    log::info!("Using {} data source", source.kind());
    Ok(source)
}
