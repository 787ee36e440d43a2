//! Search client: request building, response classification and the blocking
//! round-trip that joins them.
//!
//! # Design
//! `build_find_users` validates and encodes a `SearchRequest` as plain data,
//! `parse_find_users` maps an `HttpResponse` onto exactly one outcome, and
//! `find_users` runs both around a `ureq` call. The two halves stay usable on
//! their own for callers that bring their own HTTP stack.

use std::time::Duration;

use crate::error::SearchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{SearchErrorResponse, SearchRequest, SearchResponse, User, MAX_LIMIT};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

const ERROR_BAD_OFFSET: &str = "offset must be > 0";
const ERROR_BAD_LIMIT: &str = "limit must be > 0";
/// Message sent by servers that do not name the offending field.
const ERROR_BAD_ORDER_FIELD: &str = "OrderField invalid";

#[derive(Debug, Clone)]
pub struct SearchClient {
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(access_token: &str, base_url: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate `req` and describe the HTTP request for it.
    ///
    /// Negative offsets and limits are rejected here and never sent; limits
    /// above `MAX_LIMIT` are capped.
    pub fn build_find_users(&self, req: &SearchRequest) -> Result<HttpRequest, SearchError> {
        if req.offset < 0 {
            return Err(SearchError::Validation(ERROR_BAD_OFFSET.to_string()));
        }
        if req.limit < 0 {
            return Err(SearchError::Validation(ERROR_BAD_LIMIT.to_string()));
        }

        Ok(HttpRequest {
            url: format!("{}/search", self.base_url),
            headers: vec![("AccessToken".to_string(), self.access_token.clone())],
            query: vec![
                ("limit".to_string(), effective_limit(req).to_string()),
                ("offset".to_string(), req.offset.to_string()),
                ("query".to_string(), req.query.clone()),
                ("order_field".to_string(), req.order_field.clone()),
                ("order_by".to_string(), req.order_by.wire_value().to_string()),
            ],
        })
    }

    /// Classify `response` to the request it answers.
    pub fn parse_find_users(
        &self,
        req: &SearchRequest,
        response: HttpResponse,
    ) -> Result<SearchResponse, SearchError> {
        match response.status {
            200 => {
                let users: Vec<User> =
                    serde_json::from_str(&response.body).map_err(SearchError::UnpackResultJson)?;
                let limit = effective_limit(req);
                let next_page = limit > 0 && usize::try_from(limit) == Ok(users.len());
                Ok(SearchResponse { users, next_page })
            }
            400 => {
                let envelope: SearchErrorResponse =
                    serde_json::from_str(&response.body).map_err(SearchError::UnpackErrorJson)?;
                Err(classify_bad_request(req, envelope.error))
            }
            401 => Err(SearchError::BadAccessToken),
            500 => Err(SearchError::ServerFatal(response.body.trim_end().to_string())),
            status => Err(SearchError::UnknownStatus(status)),
        }
    }

    /// Run a search against the server, waiting at most `timeout()`.
    pub fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let request = self.build_find_users(req)?;
        tracing::debug!(url = %request.url, query = ?request.query, "searching users");
        let response = transport::execute(&request, self.timeout)?;
        self.parse_find_users(req, response)
    }
}

fn effective_limit(req: &SearchRequest) -> i64 {
    req.limit.min(MAX_LIMIT)
}

fn classify_bad_request(req: &SearchRequest, message: String) -> SearchError {
    if message == ERROR_BAD_OFFSET || message == ERROR_BAD_LIMIT {
        return SearchError::Validation(message);
    }
    if message == ERROR_BAD_ORDER_FIELD {
        return SearchError::Validation(format!("OrderFeld {} invalid", req.order_field));
    }
    if message.starts_with("OrderFeld ") && message.ends_with(" invalid") {
        return SearchError::Validation(message);
    }
    SearchError::UnknownBadRequest(message)
}
