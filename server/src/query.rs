//! Request parameters parsed into a typed `Query`.

use std::collections::HashMap;

use thiserror::Error;

/// Hard ceiling on the number of records a single page may carry.
pub const MAX_PAGE_SIZE: i64 = 25;

/// Sort direction as sent on the wire in `order_by`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// `-1`
    Ascending,
    /// `0`: keep store order, never sort.
    #[default]
    AsIs,
    /// `1`, and any other non-zero value.
    Descending,
}

impl From<i64> for Direction {
    fn from(value: i64) -> Self {
        match value {
            -1 => Direction::Ascending,
            0 => Direction::AsIs,
            _ => Direction::Descending,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub query: String,
    /// Raw `order_field`; validated by the sort stage, not here.
    pub order_field: String,
    pub direction: Direction,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("{name}: parsing {value:?}: invalid syntax")]
    NotAnInteger { name: &'static str, value: String },
}

impl Query {
    /// Build a `Query` from raw parameters.
    ///
    /// Numeric fields that fail to parse fall back to `0` and parsing goes on;
    /// the first failure encountered is returned next to the query. A missing
    /// or empty numeric parameter reads as `0` and is not a failure.
    pub fn parse(params: &HashMap<String, String>) -> (Self, Option<QueryError>) {
        let mut first_error = None;
        let mut record = |result: Result<i64, QueryError>| match result {
            Ok(value) => value,
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
                0
            }
        };

        let direction = Direction::from(record(int_param(params, "order_by")));
        let offset = record(int_param(params, "offset"));
        let limit = record(int_param(params, "limit"));

        let query = Self {
            query: params.get("query").cloned().unwrap_or_default(),
            order_field: params.get("order_field").cloned().unwrap_or_default(),
            direction,
            offset,
            limit,
        };
        (query, first_error)
    }

    /// The limit handed to pagination, never above `MAX_PAGE_SIZE`.
    pub fn capped_limit(&self) -> i64 {
        self.limit.min(MAX_PAGE_SIZE)
    }
}

/// Missing or empty parameters read as `0`.
fn int_param(params: &HashMap<String, String>, name: &'static str) -> Result<i64, QueryError> {
    match params.get(name).map(String::as_str) {
        None | Some("") => Ok(0),
        Some(raw) => raw.parse().map_err(|_| QueryError::NotAnInteger {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_every_field() {
        let (query, err) = Query::parse(&params(&[
            ("query", "test"),
            ("order_field", "name"),
            ("order_by", "1"),
            ("offset", "5"),
            ("limit", "10"),
        ]));
        assert!(err.is_none());
        assert_eq!(
            query,
            Query {
                query: "test".to_string(),
                order_field: "name".to_string(),
                direction: Direction::Descending,
                offset: 5,
                limit: 10,
            }
        );
    }

    #[test]
    fn missing_parameters_default_to_empty_and_zero() {
        let (query, err) = Query::parse(&HashMap::new());
        assert!(err.is_none());
        assert_eq!(query, Query::default());
    }

    #[test]
    fn invalid_integers_reset_to_zero_and_report_the_first() {
        let (query, err) = Query::parse(&params(&[
            ("query", "test"),
            ("order_field", "name"),
            ("order_by", "invalid"),
            ("offset", "nope"),
            ("limit", "bad"),
        ]));
        assert_eq!(
            err,
            Some(QueryError::NotAnInteger {
                name: "order_by",
                value: "invalid".to_string(),
            })
        );
        assert_eq!(query.direction, Direction::AsIs);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 0);
        assert_eq!(query.query, "test");
    }

    #[test]
    fn later_fields_still_parse_after_a_failure() {
        let (query, err) = Query::parse(&params(&[("offset", "x"), ("limit", "7")]));
        assert!(err.unwrap().to_string().contains("\"x\""));
        assert_eq!(query.limit, 7);
    }

    #[test]
    fn order_field_is_not_validated() {
        let (query, err) = Query::parse(&params(&[("order_field", "random")]));
        assert!(err.is_none());
        assert_eq!(query.order_field, "random");
    }

    #[test]
    fn out_of_range_direction_sorts_descending() {
        let (query, err) = Query::parse(&params(&[("order_by", "5")]));
        assert!(err.is_none());
        assert_eq!(query.direction, Direction::Descending);
    }

    #[test]
    fn direction_wire_values() {
        assert_eq!(Direction::from(-1), Direction::Ascending);
        assert_eq!(Direction::from(0), Direction::AsIs);
        assert_eq!(Direction::from(1), Direction::Descending);
        assert_eq!(Direction::from(2), Direction::Descending);
        assert_eq!(Direction::from(-7), Direction::Descending);
    }

    #[test]
    fn limit_is_capped_at_page_size() {
        let (query, _) = Query::parse(&params(&[("limit", "100")]));
        assert_eq!(query.capped_limit(), MAX_PAGE_SIZE);
        let (query, _) = Query::parse(&params(&[("limit", "3")]));
        assert_eq!(query.capped_limit(), 3);
    }
}
