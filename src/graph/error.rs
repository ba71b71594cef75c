//! Error taxonomy for graph operations

use std::fmt;
use thiserror::Error;

/// The vertex or vertices an error refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Culprit<V> {
    /// No context was recorded
    Unspecified,
    /// A single offending vertex
    Vertex(V),
    /// An offending (source, destination) pair
    Pair { from: V, to: V },
}

impl<V> Culprit<V> {
    /// Build a pair culprit
    pub fn pair(from: V, to: V) -> Self {
        Culprit::Pair { from, to }
    }

    /// All vertices named by this culprit, source first
    pub fn vertices(&self) -> Vec<&V> {
        match self {
            Culprit::Unspecified => Vec::new(),
            Culprit::Vertex(v) => vec![v],
            Culprit::Pair { from, to } => vec![from, to],
        }
    }
}

impl<V: fmt::Display> fmt::Display for Culprit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Culprit::Unspecified => Ok(()),
            Culprit::Vertex(v) => write!(f, ": {}", v),
            Culprit::Pair { from, to } => write!(f, ": {} -> {}", from, to),
        }
    }
}

/// Errors that can occur in graph operations
///
/// All three are recoverable by the caller. The graph never retries or
/// corrects an operation internally; the first failed check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V> {
    /// A referenced vertex (or one of a pair) is not registered
    #[error("Vertex not found{0}")]
    VertexNotFound(Culprit<V>),

    /// A (from, to) pair has no edge where one was required
    #[error("No such edge{0}")]
    EdgeNotFound(Culprit<V>),

    /// An edge insertion hit a cell that already holds a weight
    #[error("Edge already exists{0}")]
    EdgeAlreadyExists(Culprit<V>),
}

impl<V> GraphError<V> {
    /// `VertexNotFound` naming a single vertex
    pub fn vertex_not_found(vertex: V) -> Self {
        GraphError::VertexNotFound(Culprit::Vertex(vertex))
    }

    /// `EdgeNotFound` naming the (from, to) pair
    pub fn edge_not_found(from: V, to: V) -> Self {
        GraphError::EdgeNotFound(Culprit::pair(from, to))
    }

    /// `EdgeAlreadyExists` naming the (from, to) pair
    pub fn edge_already_exists(from: V, to: V) -> Self {
        GraphError::EdgeAlreadyExists(Culprit::pair(from, to))
    }

    /// The vertex context carried by this error
    pub fn culprit(&self) -> &Culprit<V> {
        match self {
            GraphError::VertexNotFound(c)
            | GraphError::EdgeNotFound(c)
            | GraphError::EdgeAlreadyExists(c) => c,
        }
    }

    pub fn is_vertex_not_found(&self) -> bool {
        matches!(self, GraphError::VertexNotFound(_))
    }

    pub fn is_edge_not_found(&self) -> bool {
        matches!(self, GraphError::EdgeNotFound(_))
    }

    pub fn is_edge_already_exists(&self) -> bool {
        matches!(self, GraphError::EdgeAlreadyExists(_))
    }
}

/// Result type for graph operations
pub type GraphResult<T, V> = Result<T, GraphError<V>>;
