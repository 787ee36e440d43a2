//! Serializes successful results into `200 application/json` responses.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

use crate::error::ServerError;

/// Serialize `value` and wrap it in a JSON response.
///
/// The body is fully rendered before any header is set, so a serialization
/// failure never leaves a half-written success response behind.
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, ServerError> {
    let body = serde_json::to_vec(value).map_err(ServerError::Encode)?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .map_err(ServerError::Write)
}
