use crate::error::ClashError;
use serde_json::Value;
use std::time::Duration;

use super::endpoints::BASE_ENDPOINT;
use super::params::QueryParams;
use super::transport::Transport;

/// Performs one GET against `BASE_ENDPOINT` + `path` and decodes the body as JSON.
///
/// `path` must already be encoded. An empty `query` adds no query string.
/// The HTTP status is never looked at: a JSON error object from the service
/// comes back as `Ok`.
pub fn execute<T: Transport + ?Sized>(
    transport: &T,
    headers: &[(&str, &str)],
    timeout: Duration,
    path: &str,
    query: &QueryParams,
) -> Result<Value, ClashError> {
    let url = format!("{}{}", BASE_ENDPOINT, path);

    tracing::debug!(
        path,
        params = query.len(),
        timeout_secs = timeout.as_secs(),
        "sending request"
    );

    let body = transport.get(&url, headers, query.pairs(), timeout)?;

    tracing::debug!(path, bytes = body.len(), "received response");

    Ok(serde_json::from_slice(&body)?)
}
