//! Server-side error taxonomy and its mapping onto HTTP responses.
//!
//! # Design
//! Every stage of the handler returns `ServerError`, and `IntoResponse` picks
//! the status and body shape in one place. Only sort failures use the JSON
//! `{"Error": ...}` envelope; everything else is plain text.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::PipelineError;
use crate::query::QueryError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid AccessToken")]
    Unauthorized,

    #[error("{0}")]
    SourceUnavailable(#[from] StoreError),

    #[error("{0}")]
    ParamParse(#[from] QueryError),

    #[error("{0}")]
    InvalidSortField(#[from] PipelineError),

    #[error("cant marshal json")]
    Encode(#[source] serde_json::Error),

    #[error("cant write json")]
    Write(#[source] axum::http::Error),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::InvalidSortField(_) => StatusCode::BAD_REQUEST,
            ServerError::SourceUnavailable(_)
            | ServerError::ParamParse(_)
            | ServerError::Encode(_)
            | ServerError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error envelope used for 400 responses.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(rename = "Error")]
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ServerError::InvalidSortField(_) => {
                let body = ErrorEnvelope {
                    error: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            _ => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("{self}\n"),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ServerError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServerError::from(PipelineError::InvalidSortField("x".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(QueryError::NotAnInteger {
                name: "limit",
                value: "ten".to_string(),
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::from(StoreError::Unavailable("gone".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn source_errors_keep_the_underlying_message() {
        let err = ServerError::from(StoreError::Unavailable("dataset missing".to_string()));
        assert_eq!(err.to_string(), "dataset missing");
    }

    #[test]
    fn envelope_uses_capitalised_key() {
        let json = serde_json::to_value(ErrorEnvelope {
            error: "OrderFeld x invalid".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"Error": "OrderFeld x invalid"}));
    }

    #[test]
    fn sort_errors_render_as_json() {
        let resp = ServerError::from(PipelineError::InvalidSortField("x".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn other_errors_render_as_text() {
        let resp = ServerError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[tokio::test]
    async fn response_assembly_failure_is_500_cant_write_json() {
        use axum::body::Body;
        use http_body_util::BodyExt;

        let cause = Response::builder()
            .header("bad\nname", "x")
            .body(Body::empty())
            .unwrap_err();
        let resp = ServerError::Write(cause).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"cant write json\n");
    }
}
