//! End-to-end search resolution: parse, resolve, encode.
//!
//! The pipeline is the error boundary. Whatever fails inside (the parser
//! call, geolocation, resolution), the caller always receives a
//! [`SearchOutcome`] whose `error` is a complete, actionable sentence; no
//! error type crosses this boundary.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use skysearch_ai::{ParseError, QueryParserClient};
use skysearch_core::{AppConfig, Coordinates, ResolvedParams};

use crate::geolocate::LocationProvider;
use crate::resolve::resolve;
use crate::summary::confirmation_summary;
use crate::urlencode::results_query_string;

/// Path of the results view the encoded query string is appended to.
const RESULTS_PATH: &str = "/flights/results";

/// Per-request identity, passed explicitly into the pipeline. Nothing in the
/// pipeline reads ambient session state.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub request_id: String,
    pub authenticated: bool,
}

impl SessionContext {
    #[must_use]
    pub fn new(request_id: impl Into<String>, authenticated: bool) -> Self {
        Self {
            request_id: request_id.into(),
            authenticated,
        }
    }
}

/// Uniform result shape for one search submission.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchOutcome {
    fn resolved(url: String, summary: String, params: ResolvedParams) -> Self {
        Self {
            success: true,
            url: Some(url),
            summary: Some(summary),
            resolved: Some(params),
            error: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            summary: None,
            resolved: None,
            error: Some(message.into()),
        }
    }
}

/// Owns the collaborators of one deployment's search resolution.
///
/// Stateless across submissions: each [`run`](Self::run) is an independent
/// invocation, and a caller that fires a new submission simply drops the
/// previous outcome.
pub struct SearchPipeline {
    parser: QueryParserClient,
    locator: Option<Arc<dyn LocationProvider>>,
    geo_timeout: Duration,
    airport_radius_km: f64,
}

impl SearchPipeline {
    #[must_use]
    pub fn new(parser: QueryParserClient, geo_timeout: Duration, airport_radius_km: f64) -> Self {
        Self {
            parser,
            locator: None,
            geo_timeout,
            airport_radius_km,
        }
    }

    /// Builds the pipeline from application configuration. No live location
    /// provider is attached; submissions carry their own coordinates unless
    /// [`with_locator`](Self::with_locator) adds one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the parser client cannot be constructed
    /// (invalid base URL or TLS setup).
    pub fn from_config(config: &AppConfig) -> Result<Self, ParseError> {
        let parser = QueryParserClient::new(
            &config.ai_base_url,
            config.ai_timeout_secs,
            &config.user_agent,
            config.ai_api_key.as_deref(),
            config.ai_max_attempts,
        )?;
        Ok(Self::new(
            parser,
            Duration::from_secs(config.geo_timeout_secs),
            config.airport_radius_km,
        ))
    }

    /// Attaches a live position source for departure fallback.
    #[must_use]
    pub fn with_locator(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.locator = Some(provider);
        self
    }

    /// Runs one submission through parse → resolve → encode.
    pub async fn run(
        &self,
        query: &str,
        coords: Option<Coordinates>,
        session: &SessionContext,
    ) -> SearchOutcome {
        tracing::info!(
            request_id = %session.request_id,
            authenticated = session.authenticated,
            has_coords = coords.is_some(),
            "resolving search query"
        );

        let intent = match self.parser.parse_query(query).await {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(
                    request_id = %session.request_id,
                    error = %err,
                    "query parse failed"
                );
                return SearchOutcome::failed(parse_failure_message(&err));
            }
        };

        let params = match resolve(
            intent,
            coords,
            self.locator.as_deref(),
            self.geo_timeout,
            self.airport_radius_km,
        )
        .await
        {
            Ok(params) => params,
            Err(err) => {
                tracing::info!(
                    request_id = %session.request_id,
                    error = %err,
                    "resolution failed"
                );
                return SearchOutcome::failed(err.user_message());
            }
        };

        let url = format!("{RESULTS_PATH}?{}", results_query_string(&params, Some(query)));
        let summary = confirmation_summary(&params);
        tracing::info!(
            request_id = %session.request_id,
            origin = %params.origin,
            destination = %params.destination,
            "search resolved"
        );
        SearchOutcome::resolved(url, summary, params)
    }
}

/// User-facing sentence for a parser failure. Always actionable; never a
/// bare error code.
fn parse_failure_message(err: &ParseError) -> String {
    match err {
        ParseError::Truncated => "The search assistant couldn't finish reading that query. \
                                  Try a shorter phrasing, like \"HKG to Tokyo on Friday\"."
            .to_owned(),
        ParseError::Http(_) => "The search assistant is unreachable right now. \
                                Please try again in a moment."
            .to_owned(),
        ParseError::Api(_) | ParseError::Deserialize { .. } => {
            "We couldn't understand that search. \
             Try something like \"from Hong Kong to Tokyo tomorrow morning\"."
                .to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serialization_skips_absent_fields() {
        let outcome = SearchOutcome::failed("Please specify a destination.");
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Please specify a destination.");
        assert!(json.get("url").is_none());
        assert!(json.get("summary").is_none());
        assert!(json.get("resolved").is_none());
    }

    #[test]
    fn parse_failure_messages_suggest_a_next_step() {
        // The Http variant needs a live reqwest::Error and is covered by the
        // integration suite; the pure variants are checked here.
        let truncated = parse_failure_message(&ParseError::Truncated);
        assert!(truncated.contains("Try"), "got: {truncated}");

        let api = parse_failure_message(&ParseError::Api("nope".to_owned()));
        assert!(api.contains("Try"), "got: {api}");
    }
}
