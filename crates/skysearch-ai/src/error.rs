use thiserror::Error;

/// Errors returned by the query-parser API client.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend reported that the model's output was cut off before the
    /// intent was complete. The only retriable failure.
    #[error("query parser output was truncated")]
    Truncated,

    /// The backend returned `"status": "error"` with a non-truncation code.
    #[error("query parser error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
