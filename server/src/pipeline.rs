//! Filter, sort and paginate stages.
//!
//! Each stage is a pure function that takes ownership of a request-local
//! sequence and returns a new one; the shared record snapshot is only ever
//! read.

use std::cmp::Ordering;

use thiserror::Error;

use crate::query::Direction;
use crate::store::Record;
use crate::User;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    // Wording is matched by clients, keep it byte-for-byte.
    #[error("OrderFeld {0} invalid")]
    InvalidSortField(String),
}

/// The closed set of sortable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Age,
    Name,
}

impl SortField {
    /// An empty field sorts by name.
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        match raw {
            "" | "name" => Ok(SortField::Name),
            "id" => Ok(SortField::Id),
            "age" => Ok(SortField::Age),
            other => Err(PipelineError::InvalidSortField(other.to_string())),
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Name => a.name.cmp(&b.name),
        }
    }
}

fn matches(record: &Record, name: &str, needle: &str) -> bool {
    needle.is_empty() || name.contains(needle) || record.about.contains(needle)
}

/// Keep records whose full name or biography contains `needle`, in store order.
pub fn filter(records: &[Record], needle: &str) -> Vec<User> {
    records
        .iter()
        .filter_map(|record| {
            let name = record.full_name();
            matches(record, &name, needle).then(|| User {
                id: record.id,
                name,
                age: record.age,
                about: record.about.clone(),
                gender: record.gender.clone(),
            })
        })
        .collect()
}

/// Stable sort by `order_field`. `Direction::AsIs` returns the input untouched.
pub fn sort(
    mut users: Vec<User>,
    order_field: &str,
    direction: Direction,
) -> Result<Vec<User>, PipelineError> {
    if direction == Direction::AsIs {
        return Ok(users);
    }
    let field = SortField::parse(order_field)?;
    match direction {
        Direction::Ascending => users.sort_by(|a, b| field.compare(a, b)),
        Direction::Descending => users.sort_by(|a, b| field.compare(b, a)),
        Direction::AsIs => {}
    }
    Ok(users)
}

/// Drop `offset` records, then keep at most `limit`. Non-positive values are
/// ignored.
pub fn paginate(mut users: Vec<User>, offset: i64, limit: i64) -> Vec<User> {
    if offset > 0 {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        if offset < users.len() {
            users.drain(..offset);
        } else {
            users.clear();
        }
    }
    if limit > 0 {
        users.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    users
}
