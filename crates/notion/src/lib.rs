//! A small Notion REST client covering the two calls the reminder job
//! needs: reading the rows of one database and setting properties on one
//! page.

mod error;
pub mod model;

use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{
    error::{Error, Result},
    model::{Page, Property, PropertyValue},
};
use self::model::QueryResponse;

pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Internal integration secret.
    pub api_token: String,

    pub database_id: String,

    #[serde(default = "Config::default_api_base_url")]
    pub api_base_url: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "Config::default_notion_version")]
    pub notion_version: String,

    #[serde(default = "Config::default_timeout")]
    pub timeout: Duration,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn default_api_base_url() -> String { DEFAULT_API_BASE_URL.to_string() }

    #[inline]
    #[must_use]
    pub fn default_notion_version() -> String { DEFAULT_NOTION_VERSION.to_string() }

    #[inline]
    #[must_use]
    pub const fn default_timeout() -> Duration { Duration::from_secs(30) }
}

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    api_base_url: String,
    api_token: String,
    notion_version: String,
    database_id: String,
}

impl Client {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let Config { api_token, database_id, api_base_url, notion_version, timeout } = config;

        let http =
            reqwest::Client::builder().timeout(timeout).build().context(error::BuildHttpClientSnafu)?;

        Ok(Self {
            http,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_token,
            notion_version,
            database_id,
        })
    }

    #[inline]
    #[must_use]
    pub fn database_id(&self) -> &str { &self.database_id }

    /// Returns the first page of results of an unfiltered query on the
    /// configured database.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non
    /// success status or the body cannot be decoded.
    pub async fn query_database(&self) -> Result<Vec<Page>> {
        let endpoint = format!("{}/databases/{}/query", self.api_base_url, self.database_id);
        tracing::debug!(%endpoint, "Querying Notion database");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_token)
            .header("Notion-Version", &self.notion_version)
            .json(&serde_json::json!({}))
            .send()
            .await
            .with_context(|_| error::QueryDatabaseSnafu { database_id: self.database_id.clone() })?;

        let response = check_status(&endpoint, response).await?;
        let QueryResponse { results, has_more } =
            response.json().await.with_context(|_| error::DecodeResponseSnafu { endpoint })?;

        if has_more {
            tracing::warn!(
                database_id = %self.database_id,
                fetched = results.len(),
                "Notion database has more rows than one query returns, the rest are ignored"
            );
        }

        Ok(results)
    }

    /// Sets `properties` on the page `page_id`, leaving other properties
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a non
    /// success status.
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: &HashMap<String, PropertyValue>,
    ) -> Result<()> {
        let endpoint = format!("{}/pages/{page_id}", self.api_base_url);
        tracing::debug!(%endpoint, "Updating Notion page");

        let response = self
            .http
            .patch(&endpoint)
            .bearer_auth(&self.api_token)
            .header("Notion-Version", &self.notion_version)
            .json(&serde_json::json!({ "properties": properties }))
            .send()
            .await
            .with_context(|_| error::UpdatePageSnafu { page_id: page_id.to_string() })?;

        let _response = check_status(&endpoint, response).await?;
        Ok(())
    }
}

async fn check_status(endpoint: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::UnexpectedStatus { endpoint: endpoint.to_string(), status: status.as_u16(), body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "api_token": "secret_x", "database_id": "db" }"#).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.notion_version, DEFAULT_NOTION_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = Client::new(Config {
            api_token: "secret_x".to_string(),
            database_id: "db".to_string(),
            api_base_url: "http://localhost:9000/v1/".to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(client.api_base_url, "http://localhost:9000/v1");
        assert_eq!(client.database_id(), "db");
    }
}
