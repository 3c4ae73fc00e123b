//! HTTP client for the backend query-parsing endpoint.
//!
//! Wraps `reqwest` with typed error handling and the bounded
//! retry-on-truncation policy. The backend wraps its JSON responses in a
//! `"status"` envelope: `"ok"` responses carry the intent fields inline,
//! `"error"` responses carry `{"error": {"code", "message"}}`, where code
//! `"truncated"` means the model's output was cut off and the request is
//! worth one more attempt.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use skysearch_core::ParsedIntent;

use crate::error::ParseError;
use crate::retry::{is_retriable, retry_on};

#[derive(Debug, Serialize)]
struct ParseQueryRequest<'a> {
    query: &'a str,
}

/// Client for the query-parser REST endpoint.
///
/// Use [`QueryParserClient::new`] with the deployment's base URL; tests point
/// it at a wiremock server.
pub struct QueryParserClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    max_attempts: u32,
}

impl QueryParserClient {
    /// Creates a client for the parser service at `base_url`.
    ///
    /// `max_attempts` is the total attempt budget for one
    /// [`parse_query`](Self::parse_query) call; only truncated responses
    /// consume more than one attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ParseError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        api_key: Option<&str>,
        max_attempts: u32,
    ) -> Result<Self, ParseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ParseError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.map(ToOwned::to_owned),
            max_attempts,
        })
    }

    /// Parses a free-text flight query into a [`ParsedIntent`].
    ///
    /// Issues `POST {base}/v1/ai/parse-query` with body `{"query": ...}`.
    /// A truncated response is retried, strictly sequentially, up to the
    /// configured attempt budget; any other failure aborts immediately.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Truncated`] if every attempt came back truncated.
    /// - [`ParseError::Api`] if the backend rejected the query.
    /// - [`ParseError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ParseError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn parse_query(&self, query: &str) -> Result<ParsedIntent, ParseError> {
        retry_on(self.max_attempts, is_retriable, || {
            self.parse_query_once(query)
        })
        .await
    }

    async fn parse_query_once(&self, query: &str) -> Result<ParsedIntent, ParseError> {
        let url = self.endpoint_url();
        let mut request = self
            .client
            .post(url.clone())
            .json(&ParseQueryRequest { query });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ParseError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| ParseError::Deserialize {
            context: "parse-query".to_owned(),
            source: e,
        })
    }

    fn endpoint_url(&self) -> Url {
        // base_url always ends in '/', so join cannot fail on a relative path.
        self.base_url
            .join("v1/ai/parse-query")
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Checks the top-level `"status"` field and classifies failures, with
    /// `"truncated"` mapped to the one retriable variant.
    fn check_api_error(body: &serde_json::Value) -> Result<(), ParseError> {
        if body.get("status").and_then(serde_json::Value::as_str) != Some("error") {
            return Ok(());
        }
        let code = body
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(serde_json::Value::as_str);
        if code == Some("truncated") {
            return Err(ParseError::Truncated);
        }
        let message = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        Err(ParseError::Api(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> QueryParserClient {
        QueryParserClient::new(base_url, 30, "skysearch-tests/0.1", None, 3)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_url_appends_path() {
        let client = test_client("https://api.skysearch.test");
        assert_eq!(
            client.endpoint_url().as_str(),
            "https://api.skysearch.test/v1/ai/parse-query"
        );
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let client = test_client("https://api.skysearch.test/");
        assert_eq!(
            client.endpoint_url().as_str(),
            "https://api.skysearch.test/v1/ai/parse-query"
        );
    }

    #[test]
    fn check_api_error_passes_ok_envelope() {
        let body = serde_json::json!({"status": "ok", "has_destination": true});
        assert!(QueryParserClient::check_api_error(&body).is_ok());
    }

    #[test]
    fn check_api_error_maps_truncation() {
        let body = serde_json::json!({
            "status": "error",
            "error": {"code": "truncated", "message": "output cut off"}
        });
        assert!(matches!(
            QueryParserClient::check_api_error(&body),
            Err(ParseError::Truncated)
        ));
    }

    #[test]
    fn check_api_error_maps_other_codes_to_api_error() {
        let body = serde_json::json!({
            "status": "error",
            "error": {"code": "unparseable", "message": "could not read query"}
        });
        match QueryParserClient::check_api_error(&body) {
            Err(ParseError::Api(msg)) => assert_eq!(msg, "could not read query"),
            other => panic!("expected Api error, got: {other:?}"),
        }
    }
}
