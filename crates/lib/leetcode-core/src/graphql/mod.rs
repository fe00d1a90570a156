//! Minimal GraphQL client for the LeetCode endpoint.
//!
//! Every call is a single `POST` of `{query, variables, operationName}` with a
//! bounded timeout. Failures come back as [`ClientError`]; callers decide how
//! to log and surface them.

pub mod models;
pub mod queries;

use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.cn/graphql/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A named query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

#[derive(Debug)]
pub enum ClientError {
    InvalidEndpoint(String),
    Http(reqwest::Error),
    Status(u16),
    MissingData(&'static str),
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint(value) => write!(f, "invalid GraphQL endpoint: {value}"),
            Self::Http(err) => write!(f, "HTTP error: {err}"),
            Self::Status(status) => write!(f, "unexpected HTTP status: {status}"),
            Self::MissingData(operation) => write!(f, "{operation} returned no data"),
            Self::Decode(err) => write!(f, "malformed GraphQL response: {err}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InvalidEndpoint(_) | Self::Status(_) | Self::MissingData(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Connection settings for [`GraphqlClient`].
#[derive(Debug, Clone)]
pub struct GraphqlClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl GraphqlClientConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GraphqlClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
    operation_name: &'a str,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
}

/// Shared HTTP client bound to a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: Client,
    endpoint: Url,
}

impl GraphqlClient {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    /// Returns `ClientError` if the endpoint is not a valid URL or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &GraphqlClientConfig) -> ClientResult<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| ClientError::InvalidEndpoint(config.endpoint.clone()))?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes `operation` and decodes the `data` object into `T`.
    ///
    /// # Errors
    /// Returns `ClientError` on transport failure, a non-success status, a
    /// response without `data`, or a `data` object that does not match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: &Value,
    ) -> ClientResult<T> {
        debug!(operation = operation.name, endpoint = %self.endpoint, "GraphQL request");
        let body = GraphqlRequest {
            query: operation.document,
            variables,
            operation_name: operation.name,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let envelope: GraphqlResponse<T> = serde_json::from_slice(&bytes)?;
        envelope
            .data
            .ok_or(ClientError::MissingData(operation.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_graphql_field_names() {
        let variables = serde_json::json!({ "titleSlug": "two-sum" });
        let body = GraphqlRequest {
            query: queries::QUESTION_CONTENT.document,
            variables: &variables,
            operation_name: queries::QUESTION_CONTENT.name,
        };
        let value = serde_json::to_value(&body).expect("request serializes");

        assert_eq!(value["operationName"], "questionContent");
        assert_eq!(value["variables"]["titleSlug"], "two-sum");
        assert!(
            value["query"]
                .as_str()
                .is_some_and(|query| query.starts_with("query questionContent"))
        );
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = GraphqlClientConfig::new("not a url");
        let err = GraphqlClient::new(&config).expect_err("endpoint should be rejected");
        assert!(matches!(err, ClientError::InvalidEndpoint(_)));
    }
}
