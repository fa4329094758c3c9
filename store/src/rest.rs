//! REST client for the hosted message table.
//!
//! Speaks the table-over-HTTP dialect of the hosted database: rows live under
//! `{url}/rest/v1/{table}`, the access key travels both as `apikey` and as a
//! bearer token, and inserts ask for the stored row back with
//! `Prefer: return=representation`.

use std::time::Duration;

use records::{MessageRecord, NewMessage};
use reqwest::RequestBuilder;

use crate::MessageStore;
use crate::config::StoreConfig;
use crate::error::StoreError;

const REST_PATH: &str = "/rest/v1/";
const RETURN_REPRESENTATION: &str = "return=representation";

pub struct RestStore {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RestStore {
    /// Build a client for the configured table.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: table_endpoint(&config.url, &config.table), api_key: config.api_key.clone() })
    }

    /// Whether requests carry an access key.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl MessageStore for RestStore {
    async fn insert(&self, message: &NewMessage) -> Result<MessageRecord, StoreError> {
        let request = self
            .http
            .post(&self.endpoint)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(std::slice::from_ref(message));
        let text = self.send(request).await?;
        first_inserted(parse_rows(&text)?)
    }

    async fn fetch_all(&self) -> Result<Vec<MessageRecord>, StoreError> {
        let request = self
            .http
            .get(&self.endpoint)
            .query(&[("select", "*")]);
        let text = self.send(request).await?;
        parse_rows(&text)
    }
}

pub(crate) fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}{REST_PATH}{table}", base_url.trim_end_matches('/'))
}

pub(crate) fn parse_rows(text: &str) -> Result<Vec<MessageRecord>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))
}

pub(crate) fn first_inserted(rows: Vec<MessageRecord>) -> Result<MessageRecord, StoreError> {
    rows.into_iter()
        .next()
        .ok_or(StoreError::EmptyInsert)
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
