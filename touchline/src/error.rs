//! Load-time errors. Once a [Season](crate::season::Season) is built, queries over it are total.

use std::io;

use strum_macros::Display;
use thiserror::Error;

/// A raw record that could not be parsed into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record '{record}': {reason}")]
pub struct MalformedRecord {
    pub record: String,
    pub reason: Malformation,
}
impl MalformedRecord {
    pub fn new(record: impl Into<String>, reason: Malformation) -> Self {
        Self {
            record: record.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: &'static str, actual: usize },

    #[error("invalid date '{value}'")]
    Date { value: String },

    #[error("invalid date/time '{value}'")]
    DateTime { value: String },

    #[error("invalid {field} '{value}'")]
    Number { field: &'static str, value: String },

    #[error("invalid goal '{value}', expected <scorer>@<minute>")]
    Goal { value: String },
}

/// A goal scorer that has no counterpart in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no player with last name '{0}'")]
pub struct UnknownPlayer(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Players,
    Matches,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{kind} line {line}: {source}")]
    Malformed {
        kind: RecordKind,
        line: usize,
        source: MalformedRecord,
    },

    #[error("matches line {line}: {source}")]
    UnknownPlayer { line: usize, source: UnknownPlayer },

    #[error("{0}")]
    Io(#[from] io::Error),
}
