//! Hop-network ingestion from tab-separated record files
//!
//! Each line holds `source<TAB>destination<TAB>hop time`. Records build a
//! [`HopNetwork`]: one vertex per distinct name, one edge per distinct
//! (source, destination) pair. When a pair repeats, the smallest hop time
//! wins.
//!
//! A hop time of 0 equals the graph's absence sentinel, so such a record
//! registers both names but no edge. The loader logs a warning for it.

mod loader;
mod record;

pub use loader::NetworkLoader;
pub use record::HopRecord;

use crate::graph::{Graph, GraphError};
use std::path::PathBuf;
use thiserror::Error;

/// Graph of named stops connected by hop times
pub type HopNetwork = Graph<String, u32>;

/// Default longest accepted name, in characters
pub const MAX_NAME_LEN: usize = 16;

/// Default reserved word; it ends an interactive session so it cannot be a name
pub const RESERVED_WORD: &str = "exit";

/// Rules applied to every ingested record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Longest accepted name, in characters
    pub max_name_len: usize,
    /// Name rejected in any letter case
    pub reserved_word: String,
    /// Field separator
    pub delimiter: char,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_name_len: MAX_NAME_LEN,
            reserved_word: RESERVED_WORD.to_string(),
            delimiter: '\t',
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    pub fn reserved_word(mut self, word: impl Into<String>) -> Self {
        self.reserved_word = word.into();
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Why a single line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("hop time is not a non-negative integer: '{0}'")]
    InvalidHopTime(String),

    #[error("empty {0} name")]
    EmptyName(&'static str),

    #[error("name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("name '{0}' is reserved")]
    ReservedName(String),

    #[error("name '{0}' contains a space")]
    NameContainsSpace(String),
}

/// Errors that stop ingestion
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Could not read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line_no} in file {file}: {line} ({reason})")]
    Malformed {
        file: String,
        line_no: usize,
        line: String,
        #[source]
        reason: RecordError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError<String>),
}

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;
