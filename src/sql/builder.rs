//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the students table.

use super::params::BindValue;
use crate::model::StudentPatch;

pub const STUDENTS_TABLE: &str = "students";

/// Columns returned by every SELECT, in `Student` field order.
const SELECT_COLUMNS: &[&str] = &["id", "nisn", "name", "address"];

/// Quote identifier for PostgreSQL (safe: only from the constants above).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    SELECT_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<BindValue>) -> u32 {
        self.params.push(v.into());
        self.params.len() as u32
    }
}

/// INSERT of (nisn, name, address). The id comes from the sequence.
pub fn insert(nisn: &str, name: &str, address: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut placeholders = Vec::with_capacity(3);
    for v in [nisn, name, address] {
        placeholders.push(format!("${}", q.push_param(v)));
    }
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES ({})",
        quoted(STUDENTS_TABLE),
        quoted("nisn"),
        quoted("name"),
        quoted("address"),
        placeholders.join(", ")
    );
    q
}

/// Unfiltered SELECT. No ORDER BY: rows come back in whatever order the database yields.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", select_column_list(), quoted(STUDENTS_TABLE));
    q
}

pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        quoted(STUDENTS_TABLE),
        quoted("id"),
        n
    );
    q
}

/// UPDATE by id: SET only the allow-listed columns with a non-empty value in `patch`.
/// Returns None when there is nothing to set.
pub fn update(id: i64, patch: &StudentPatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (col, value) in [("name", patch.name()), ("address", patch.address())] {
        let Some(v) = value else { continue };
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(STUDENTS_TABLE),
        sets.join(", "),
        quoted("id"),
        id_param
    );
    Some(q)
}

pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(STUDENTS_TABLE), quoted("id"), n);
    q
}
