//! Thin PostgREST client for the hosted store.
//!
//! Covers exactly the row operations the site needs: select over a whole
//! table, insert-returning, and update-by-id-returning. Any timeout
//! behavior comes from the client's request timeout; there is no retry
//! logic anywhere.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::RemoteError;

/// Connection settings for the hosted store.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
  /// Project base URL, e.g. `https://xyz.supabase.co`.
  pub url: String,
  /// The anon key, sent as both `apikey` and bearer token.
  pub key: String,
}

/// Async client for the store's PostgREST surface.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct PostgrestClient {
  http: Client,
  base: String,
  key:  String,
}

impl PostgrestClient {
  pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
    let http = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self {
      http,
      base: config.url.trim_end_matches('/').to_owned(),
      key: config.key,
    })
  }

  fn table_url(&self, table: &str) -> String {
    format!("{}/rest/v1/{table}", self.base)
  }

  fn authed(&self, req: RequestBuilder) -> RequestBuilder {
    req.header("apikey", &self.key).bearer_auth(&self.key)
  }

  /// `GET /rest/v1/{table}?select=*[&order=...]`
  pub async fn select<R>(
    &self,
    table: &'static str,
    order: Option<&str>,
  ) -> Result<Vec<R>, RemoteError>
  where
    R: DeserializeOwned,
  {
    let mut query = vec![("select", "*")];
    if let Some(order) = order {
      query.push(("order", order));
    }

    let resp = self
      .authed(self.http.get(self.table_url(table)))
      .query(&query)
      .send()
      .await?;
    let resp = check_status(resp, "select").await?;
    Ok(resp.json().await?)
  }

  /// `POST /rest/v1/{table}` with `Prefer: return=representation`.
  /// Returns the single inserted row.
  pub async fn insert_one<T, R>(
    &self,
    table: &'static str,
    row: &T,
  ) -> Result<R, RemoteError>
  where
    T: Serialize,
    R: DeserializeOwned,
  {
    let resp = self
      .authed(self.http.post(self.table_url(table)))
      .header("Prefer", "return=representation")
      .json(&[row])
      .send()
      .await?;
    let resp = check_status(resp, "insert").await?;
    let rows: Vec<R> = resp.json().await?;
    single_row(rows, table)
  }

  /// `PATCH /rest/v1/{table}?id=eq.{id}` with `Prefer:
  /// return=representation`. Returns the single updated row, or
  /// [`RemoteError::RowNotFound`] when the filter matched nothing.
  pub async fn update_by_id<R>(
    &self,
    table: &'static str,
    id: &str,
    patch: &serde_json::Value,
  ) -> Result<R, RemoteError>
  where
    R: DeserializeOwned,
  {
    let resp = self
      .authed(self.http.patch(self.table_url(table)))
      .query(&[("id", format!("eq.{id}"))])
      .header("Prefer", "return=representation")
      .json(patch)
      .send()
      .await?;
    let resp = check_status(resp, "update").await?;
    let rows: Vec<R> = resp.json().await?;
    if rows.is_empty() {
      return Err(RemoteError::RowNotFound { table, id: id.to_owned() });
    }
    single_row(rows, table)
  }
}

/// Turn a non-success response into [`RemoteError::Api`], keeping the body
/// so the caller sees the service's own message.
async fn check_status(
  resp: Response,
  operation: &'static str,
) -> Result<Response, RemoteError> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let body = resp.text().await.unwrap_or_default();
  tracing::debug!(%status, operation, "remote store rejected request");
  Err(RemoteError::Api { operation, status, body })
}

fn single_row<R>(mut rows: Vec<R>, table: &'static str) -> Result<R, RemoteError> {
  if rows.len() == 1 {
    if let Some(row) = rows.pop() {
      return Ok(row);
    }
  }
  Err(RemoteError::UnexpectedRowCount { table, count: rows.len() })
}
