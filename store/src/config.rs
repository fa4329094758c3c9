//! Store configuration parsed from environment variables.

use crate::error::StoreError;

pub const DEFAULT_TABLE: &str = "messages";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const URL_VAR: &str = "MESSAGE_STORE_URL";
const KEY_VAR: &str = "MESSAGE_STORE_KEY";
const TABLE_VAR: &str = "MESSAGE_STORE_TABLE";
const REQUEST_TIMEOUT_VAR: &str = "MESSAGE_STORE_REQUEST_TIMEOUT_SECS";
const CONNECT_TIMEOUT_VAR: &str = "MESSAGE_STORE_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, without trailing slash.
    pub url: String,
    /// Access key. `None` sends unauthenticated requests.
    pub api_key: Option<String>,
    pub table: String,
    pub timeouts: StoreTimeouts,
}

impl StoreConfig {
    /// Build typed store config from environment variables.
    ///
    /// Required:
    /// - `MESSAGE_STORE_URL`
    ///
    /// Optional:
    /// - `MESSAGE_STORE_KEY`: access key, unauthenticated when absent
    /// - `MESSAGE_STORE_TABLE`: default `messages`
    /// - `MESSAGE_STORE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MESSAGE_STORE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is missing or malformed, or the table name
    /// is not a bare identifier.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let url = non_empty(URL_VAR).ok_or_else(|| StoreError::MissingConfig { var: URL_VAR.into() })?;
        let url = parse_url(&url)?;
        let api_key = non_empty(KEY_VAR);
        let table = parse_table(non_empty(TABLE_VAR).as_deref())?;
        let timeouts = StoreTimeouts {
            request_secs: parse_u64(non_empty(REQUEST_TIMEOUT_VAR).as_deref(), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(non_empty(CONNECT_TIMEOUT_VAR).as_deref(), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { url, api_key, table, timeouts })
    }
}

fn parse_url(raw: &str) -> Result<String, StoreError> {
    let parsed = reqwest::Url::parse(raw).map_err(|e| StoreError::ConfigParse(format!("invalid {URL_VAR}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(StoreError::ConfigParse(format!(
            "invalid {URL_VAR}: unsupported scheme '{}'",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_table(raw: Option<&str>) -> Result<String, StoreError> {
    let table = raw.unwrap_or(DEFAULT_TABLE);
    if table
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(table.to_owned())
    } else {
        Err(StoreError::ConfigParse(format!("invalid {TABLE_VAR}: '{table}'")))
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
