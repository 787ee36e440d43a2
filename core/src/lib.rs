//! Blocking client for the user search service.
//!
//! # Overview
//! `SearchClient::find_users` sends a `SearchRequest`, classifies the answer
//! into a `SearchResponse` or exactly one `SearchError`, and reports whether a
//! further page is available.
//!
//! # Design
//! - Request building and response parsing are pure (`build_find_users`,
//!   `parse_find_users`); only `transport` does I/O.
//! - `SearchError` keeps timeouts, transport failures, validation errors and
//!   server-reported failures apart. Nothing is retried automatically.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{SearchClient, DEFAULT_TIMEOUT};
pub use error::SearchError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{OrderBy, SearchErrorResponse, SearchRequest, SearchResponse, User, MAX_LIMIT};
