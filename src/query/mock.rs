use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{CheckWmiError, Result};

use super::{QueryChannel, Row};

enum Reply {
    Rows(Vec<Row>),
    Fail(String),
}

/// Scripted query channel for tests.
///
/// Exact WQL matches win over fragment matches; fragment matches are tried in
/// the order they were registered. Unscripted queries return no rows.
pub struct MockChannel {
    exact: HashMap<String, Reply>,
    fragments: Vec<(String, Reply)>,
    seen: Mutex<Vec<String>>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self {
            exact: HashMap::new(),
            fragments: Vec::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, wql: &str, rows: Vec<Row>) -> Self {
        self.exact.insert(wql.to_string(), Reply::Rows(rows));
        self
    }

    pub fn respond_matching(mut self, fragment: &str, rows: Vec<Row>) -> Self {
        self.fragments
            .push((fragment.to_string(), Reply::Rows(rows)));
        self
    }

    pub fn fail_matching(mut self, fragment: &str, message: &str) -> Self {
        self.fragments
            .push((fragment.to_string(), Reply::Fail(message.to_string())));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count_matching(&self, fragment: &str) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.contains(fragment))
            .count()
    }
}

impl QueryChannel for MockChannel {
    fn query(&self, wql: &str) -> Result<Vec<Row>> {
        self.seen.lock().unwrap().push(wql.to_string());

        let reply = self.exact.get(wql).or_else(|| {
            self.fragments
                .iter()
                .find(|(fragment, _)| wql.contains(fragment.as_str()))
                .map(|(_, reply)| reply)
        });

        match reply {
            Some(Reply::Rows(rows)) => Ok(rows.clone()),
            Some(Reply::Fail(message)) => Err(CheckWmiError::protocol(wql, message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn name_row(name: &str) -> Row {
    Row::new().with("Name", name)
}

pub fn file_row(name: &str, last_modified: &str) -> Row {
    Row::new()
        .with("LastModified", last_modified)
        .with("Name", name)
}
