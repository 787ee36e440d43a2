//! Blocking HTTP execution through `ureq`.

use std::time::Duration;

use ureq::Agent;

use crate::error::SearchError;
use crate::http::{HttpRequest, HttpResponse};

/// An agent that returns 4xx/5xx as data and gives up after `timeout`.
fn agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

/// Execute `request` and return whatever status the server answered with.
///
/// Only transport failures are errors here; status interpretation is left to
/// `SearchClient::parse_find_users`.
pub fn execute(request: &HttpRequest, timeout: Duration) -> Result<HttpResponse, SearchError> {
    let classify = |err: ureq::Error| match err {
        ureq::Error::Timeout(_) => {
            tracing::warn!(url = %request.url, ?timeout, "search request timed out");
            SearchError::Timeout {
                timeout,
                url: request.url.clone(),
            }
        }
        other => {
            tracing::warn!(url = %request.url, error = %other, "search transport failure");
            SearchError::Transport(other)
        }
    };

    let mut builder = agent(timeout).get(&request.url).query_pairs(
        request
            .query
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call().map_err(&classify)?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().map_err(&classify)?;
    tracing::debug!(url = %request.url, status, bytes = body.len(), "search response received");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
