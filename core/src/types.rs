//! Request and response DTOs for the search API.
//!
//! # Design
//! These mirror the server's wire shapes but are defined independently, so
//! the client never links against axum. Integration tests run the real server
//! and catch any drift between the two.

use serde::{Deserialize, Serialize};

/// Largest page the server will return; larger requests are capped before
/// they are sent.
pub const MAX_LIMIT: i64 = 25;

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

/// Sort direction, sent as `order_by`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    Asc,
    /// Keep the server's natural order.
    #[default]
    AsIs,
    Desc,
}

impl OrderBy {
    pub fn wire_value(self) -> i32 {
        match self {
            OrderBy::Asc => -1,
            OrderBy::AsIs => 0,
            OrderBy::Desc => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    /// Substring looked up in names and biographies.
    pub query: String,
    /// `id`, `age`, `name` or empty for `name`.
    pub order_field: String,
    pub order_by: OrderBy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// The page came back full, so another one may follow.
    pub next_page: bool,
}

/// Body of a 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_wire_values() {
        assert_eq!(OrderBy::Asc.wire_value(), -1);
        assert_eq!(OrderBy::AsIs.wire_value(), 0);
        assert_eq!(OrderBy::Desc.wire_value(), 1);
        assert_eq!(OrderBy::default(), OrderBy::AsIs);
    }

    #[test]
    fn error_response_reads_capitalised_key() {
        let parsed: SearchErrorResponse =
            serde_json::from_str(r#"{ "Error": "OrderFeld random invalid" }"#).unwrap();
        assert_eq!(parsed.error, "OrderFeld random invalid");
    }

    #[test]
    fn error_response_requires_the_key() {
        let result: Result<SearchErrorResponse, _> = serde_json::from_str(r#"{"error":"x"}"#);
        assert!(result.is_err());
    }
}
