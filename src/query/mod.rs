mod decode;
mod wmic;
pub mod wql;

#[cfg(test)]
pub(crate) mod mock;

pub use decode::decode_rows;
pub use wmic::{Credentials, WmicChannel};

use indexmap::IndexMap;

use crate::error::Result;

/// One result row of a WQL query: column name to raw string value, in the
/// column order the remote side reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: IndexMap<String, String>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: &str) {
        self.columns.insert(column.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Row {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Trait for running WQL queries against a remote host.
pub trait QueryChannel {
    /// Run a query and return every row it produced.
    ///
    /// # Errors
    /// Returns a protocol error if the host cannot be reached, the credentials
    /// are rejected or the query is malformed.
    fn query(&self, wql: &str) -> Result<Vec<Row>>;
}

impl<T: QueryChannel + ?Sized> QueryChannel for &T {
    fn query(&self, wql: &str) -> Result<Vec<Row>> {
        (**self).query(wql)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
