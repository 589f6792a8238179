//! HTTP client for the hosted backend service.
//!
//! The service fronts an RLS-backed Postgres database and exposes one REST
//! endpoint per table under `/rest/v1/`. Authorization, uniqueness and
//! referential integrity all live on the service side; this client only
//! shapes requests and deserializes rows.
//!
//! Every request carries the anonymous key twice, as the `apikey` header and
//! as a bearer token, which is what the service's generated clients send.
//! Failures are never retried; there is no transient/permanent distinction.

use crate::filter::Filter;
use crate::store::ItemStore;
use async_trait::async_trait;
use log::debug;
use projdesk_core::{Artifact, Config, DeskError, Item, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Table holding project items.
pub const ITEMS_TABLE: &str = "items";

/// Join table linking items to their source artifacts.
pub const ITEM_ARTIFACTS_TABLE: &str = "item_artifacts";

/// Table holding extracted document artifacts.
pub const ARTIFACTS_TABLE: &str = "artifacts";

/// Client for the hosted backend's table endpoints.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: Config,
}

impl RestClient {
    /// Create a client from the startup configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint URL for a table.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.api_url)
    }

    /// Select rows matching the filters, deserialized into `T`.
    ///
    /// # Errors
    /// Returns `HttpError` for transport failures, `BackendError` for
    /// non-success responses, `JsonError` when rows do not deserialize.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>> {
        let mut query: Vec<(String, String)> =
            filters.iter().map(Filter::to_query_pair).collect();
        query.push(("select".to_string(), "*".to_string()));

        debug!("GET {table} with {} filter(s)", filters.len());
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(&query)
            .send()
            .await?;
        let body = Self::success_body(table, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Insert one row, returning the stored representation.
    ///
    /// # Errors
    /// Same failure modes as [`Self::select`]; also `BackendError` when the
    /// service returns an empty representation.
    pub async fn insert<T: Serialize + Sync, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<R> {
        debug!("POST {table}");
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let body = Self::success_body(table, response).await?;
        let mut rows: Vec<R> = serde_json::from_str(&body)?;
        rows.pop().ok_or_else(|| {
            DeskError::BackendError(format!("insert into {table} returned no representation"))
        })
    }

    /// Delete rows matching the filters, returning how many were removed.
    ///
    /// # Errors
    /// Returns `HttpError` for transport failures and `BackendError` for
    /// non-success responses.
    pub async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64> {
        let query: Vec<(String, String)> = filters.iter().map(Filter::to_query_pair).collect();

        debug!("DELETE {table} with {} filter(s)", filters.len());
        let response = self
            .http
            .delete(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=representation")
            .query(&query)
            .send()
            .await?;
        let body = Self::success_body(table, response).await?;
        if body.trim().is_empty() {
            // Some deployments answer 204 with no representation.
            return Ok(0);
        }
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(rows.len() as u64)
    }

    /// List the items belonging to a project.
    ///
    /// # Errors
    /// Same failure modes as [`Self::select`].
    pub async fn project_items(&self, project_id: &str) -> Result<Vec<Item>> {
        self.select(ITEMS_TABLE, &[Filter::eq("project_id", project_id)])
            .await
    }

    /// Persist an item (e.g. an accepted suggestion).
    ///
    /// # Errors
    /// Same failure modes as [`Self::insert`].
    pub async fn insert_item(&self, item: &Item) -> Result<Item> {
        self.insert(ITEMS_TABLE, item).await
    }

    /// Persist an extracted-document artifact.
    ///
    /// # Errors
    /// Same failure modes as [`Self::insert`].
    pub async fn insert_artifact(&self, artifact: &Artifact) -> Result<Artifact> {
        self.insert(ARTIFACTS_TABLE, artifact).await
    }

    /// Check the response status and read the body, mapping non-success
    /// statuses to `BackendError` with the service's message attached.
    async fn success_body(table: &str, response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(DeskError::BackendError(format!(
                "{table} request failed with {status}: {body}"
            )))
        }
    }
}

#[async_trait]
impl ItemStore for RestClient {
    async fn find_items_by_title(&self, pattern: &str) -> Result<Vec<Item>> {
        self.select(ITEMS_TABLE, &[Filter::ilike("title", pattern)])
            .await
    }

    async fn delete_item_artifacts(&self, item_id: &str) -> Result<u64> {
        self.delete(ITEM_ARTIFACTS_TABLE, &[Filter::eq("item_id", item_id)])
            .await
    }

    async fn delete_item(&self, item_id: &str) -> Result<u64> {
        self.delete(ITEMS_TABLE, &[Filter::eq("id", item_id)]).await
    }
}
