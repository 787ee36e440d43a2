//! The search endpoint: auth check, load, parse, filter, sort, paginate, encode.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query as QueryParams, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::error::ServerError;
use crate::query::Query;
use crate::store::RecordSource;
use crate::{encode, pipeline};

/// Header carrying the shared secret.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Everything a request needs, injected once when the router is built.
#[derive(Clone)]
pub struct AppState {
    access_token: Arc<str>,
    source: Arc<dyn RecordSource>,
}

impl AppState {
    pub fn new(access_token: impl Into<Arc<str>>, source: impl RecordSource) -> Self {
        Self {
            access_token: access_token.into(),
            source: Arc::new(source),
        }
    }
}

pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<HashMap<String, String>>,
) -> Response {
    match handle(&state, &headers, &params) {
        Ok(response) => response,
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                tracing::error!(%status, error = %err, "search failed");
            } else {
                tracing::warn!(%status, error = %err, "search rejected");
            }
            err.into_response()
        }
    }
}

fn handle(
    state: &AppState,
    headers: &HeaderMap,
    params: &HashMap<String, String>,
) -> Result<Response, ServerError> {
    authorize(state, headers)?;
    let records = state.source.records()?;

    let (query, parse_error) = Query::parse(params);
    if let Some(err) = parse_error {
        return Err(err.into());
    }

    let users = pipeline::filter(&records, &query.query);
    let users = pipeline::sort(users, &query.order_field, query.direction)?;
    let users = pipeline::paginate(users, query.offset, query.capped_limit());
    tracing::debug!(
        query = %query.query,
        order_field = %query.order_field,
        direction = ?query.direction,
        offset = query.offset,
        limit = query.limit,
        returned = users.len(),
        "search served"
    );
    encode::json_response(&users)
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ServerError> {
    let presented = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if presented == &*state.access_token {
        Ok(())
    } else {
        Err(ServerError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::store::{Record, RecordStore};

    fn state() -> AppState {
        let store = RecordStore::new(vec![Record {
            id: 0,
            first_name: "Boyd".to_string(),
            last_name: "Wolf".to_string(),
            age: 22,
            about: "Nulla cillum".to_string(),
            gender: "male".to_string(),
        }]);
        AppState::new("secret", store)
    }

    #[test]
    fn matching_token_is_authorized() {
        let mut headers = HeaderMap::new();
        headers.insert("accesstoken", HeaderValue::from_static("secret"));
        assert!(authorize(&state(), &headers).is_ok());
    }

    #[test]
    fn missing_or_wrong_token_is_rejected() {
        assert!(matches!(
            authorize(&state(), &HeaderMap::new()),
            Err(ServerError::Unauthorized)
        ));

        let mut headers = HeaderMap::new();
        headers.insert("accesstoken", HeaderValue::from_static("secretx"));
        assert!(matches!(
            authorize(&state(), &headers),
            Err(ServerError::Unauthorized)
        ));
    }

    #[test]
    fn parse_errors_stop_the_request() {
        let mut headers = HeaderMap::new();
        headers.insert("accesstoken", HeaderValue::from_static("secret"));
        let params = HashMap::from([("limit".to_string(), "ten".to_string())]);
        let err = handle(&state(), &headers, &params).unwrap_err();
        assert!(matches!(err, ServerError::ParamParse(_)));
    }
}
