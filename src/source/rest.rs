use serde_json::Value;

use super::{FetchError, TableQuery};

/// Client for the hosted database's REST interface (`/rest/v1/{table}`).
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestClient {
    /// `base_url` is the project URL, e.g. `https://abc.supabase.co`.
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn table_url(&self, query: &TableQuery) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.table.name())
    }

    pub async fn fetch(&self, query: &TableQuery) -> Result<Vec<Value>, FetchError> {
        let url = self.table_url(query);
        log::debug!("GET {url} {:?}", query_params(query));

        let resp = self
            .client
            .get(&url)
            .query(&query_params(query))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await
            .map_err(|e| FetchError::new(query.table, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::new(
                query.table,
                format!("server returned {}: {}", status.as_u16(), body),
            ));
        }

        resp.json::<Vec<Value>>()
            .await
            .map_err(|e| FetchError::new(query.table, format!("malformed response: {e}")))
    }
}

/// Query string in the REST dialect: `select=*`, `col=eq.value`,
/// `order=col.desc`, `limit=n`.
pub(crate) fn query_params(query: &TableQuery) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    if let Some(filter) = &query.filter {
        params.push((filter.column.to_string(), format!("eq.{}", filter.value)));
    }
    if let Some(order) = &query.order {
        params.push((
            "order".to_string(),
            format!("{}.{}", order.column, order.direction.as_str()),
        ));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}
