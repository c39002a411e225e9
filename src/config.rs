use std::fmt;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Where page data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Postgres { database_url: String, max_connections: u32 },
    Supabase { url: String, anon_key: String },
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub source: SourceConfig,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing required setting {key}"),
            ConfigError::Invalid { key, value } => write!(f, "Invalid value for {key}: '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset. Without `DATA_SOURCE` the backend is
    /// inferred: `DATABASE_URL` → postgres, `SUPABASE_URL` → supabase,
    /// otherwise the bundled demo data.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let static_dir = get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let kind = match get("DATA_SOURCE") {
            Some(kind) => kind.to_lowercase(),
            None if get("DATABASE_URL").is_some() => "postgres".to_string(),
            None if get("SUPABASE_URL").is_some() => "supabase".to_string(),
            None => "demo".to_string(),
        };

        let source = match kind.as_str() {
            "postgres" => {
                let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
                let max_connections = match get("DB_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: raw })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                SourceConfig::Postgres { database_url, max_connections }
            }
            "supabase" => SourceConfig::Supabase {
                url: get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                anon_key: get("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            },
            "demo" => SourceConfig::Demo,
            _ => return Err(ConfigError::Invalid { key: "DATA_SOURCE", value: kind.clone() }),
        };

        Ok(Self { bind_addr, static_dir, source })
    }
}
