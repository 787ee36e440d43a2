//! User search service: a read-only dataset queried by substring filter,
//! single-field sort and offset/limit pagination.
//!
//! # Design
//! - The dataset is loaded once and shared through `AppState` as an
//!   `Arc<dyn RecordSource>`; requests never write to it.
//! - `handler::search` runs the request as a linear sequence of fallible
//!   stages; the first failure becomes the response via `ServerError`.
//! - `User` is the wire shape and is defined independently from the client
//!   crate's copy; the client integration tests catch schema drift.

pub mod config;
pub mod encode;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod query;
pub mod store;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ErrorEnvelope, ServerError};
pub use handler::{AppState, ACCESS_TOKEN_HEADER};
pub use query::{Direction, Query, MAX_PAGE_SIZE};
pub use store::{Record, RecordSource, RecordStore, StoreError};

/// A search hit as returned to clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::search))
        .route("/search", get(handler::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_wire_field_names() {
        let user = User {
            id: 3,
            name: "Owen Lynn".to_string(),
            age: 30,
            about: "Dolore".to_string(),
            gender: "male".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Owen Lynn",
                "age": 30,
                "about": "Dolore",
                "gender": "male"
            })
        );
    }

    #[test]
    fn user_rejects_missing_fields() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id":1,"name":"x"}"#);
        assert!(result.is_err());
    }
}
