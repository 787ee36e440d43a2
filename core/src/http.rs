//! HTTP exchanges described as plain data.
//!
//! # Design
//! `SearchClient::build_find_users` produces an `HttpRequest` and
//! `SearchClient::parse_find_users` consumes an `HttpResponse`; neither touches
//! the network. `transport` is the only module that performs I/O, so status
//! classification can be tested with hand-made responses.

/// A GET request: target URL, headers and unencoded query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
