//! Bounded retry for the query-parser client.
//!
//! [`retry_on`] wraps a fallible async operation with a fixed attempt budget
//! and a caller-supplied retriability predicate. There is no back-off: a
//! truncated parse is a fresh sample from the model, not a congested
//! upstream, so the next attempt goes out immediately. Attempts are strictly
//! sequential: attempt N+1 starts only after attempt N has failed and been
//! classified.

use std::future::Future;

use crate::error::ParseError;

/// Returns `true` only for [`ParseError::Truncated`].
///
/// Every other failure is terminal:
/// - [`ParseError::Http`]: network fault or non-2xx status; surfaced
///   immediately so the caller can tell the user the service is down.
/// - [`ParseError::Api`]: application-level rejection; retrying won't fix it.
/// - [`ParseError::Deserialize`]: malformed response; retrying won't fix it.
pub(crate) fn is_retriable(err: &ParseError) -> bool {
    match err {
        ParseError::Truncated => true,
        ParseError::Http(_) | ParseError::Api(_) | ParseError::Deserialize { .. } => false,
    }
}

/// Runs `operation` up to `max_attempts` times total, continuing past a
/// failure only when `retriable` classifies it as worth another attempt.
pub(crate) async fn retry_on<T, F, Fut, P>(
    max_attempts: u32,
    retriable: P,
    mut operation: F,
) -> Result<T, ParseError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ParseError>>,
    P: Fn(&ParseError) -> bool,
{
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %err,
                    "query parse attempt failed, retrying"
                );
                attempt += 1;
            }
        }
    }
}
