//! Query types and result structures

use serde::Serialize;
use std::fmt;

/// Order in which a traversal visits reachable vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Level by level, nearest vertices first
    #[default]
    BreadthFirst,
    /// Follow each branch to its end before backtracking
    DepthFirst,
}

impl Strategy {
    /// `BreadthFirst` when `true`, `DepthFirst` otherwise
    pub fn from_breadth_first(breadth_first: bool) -> Self {
        if breadth_first {
            Strategy::BreadthFirst
        } else {
            Strategy::DepthFirst
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
        }
    }
}

/// Result of a traversal query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult<V> {
    /// Starting vertex
    pub origin: V,
    /// Order used for the traversal
    pub strategy: Strategy,
    /// Every reachable vertex in visit order, origin first
    pub visited: Vec<V>,
}

impl<V> TraversalResult<V> {
    pub fn new(origin: V, strategy: Strategy) -> Self {
        Self {
            origin,
            strategy,
            visited: Vec::new(),
        }
    }

    /// Reachable vertices excluding the origin
    pub fn connections(&self) -> &[V] {
        self.visited.get(1..).unwrap_or(&[])
    }

    /// Consume the result, keeping only the vertices after the origin
    pub fn into_connections(mut self) -> Vec<V> {
        if !self.visited.is_empty() {
            self.visited.remove(0);
        }
        self.visited
    }

    /// Size of the reachable set, origin included
    pub fn reachable_count(&self) -> usize {
        self.visited.len()
    }

    /// Borrowed view naming the origin and its connections
    pub fn summary(&self) -> ConnectionSummary<'_, V> {
        ConnectionSummary {
            origin: &self.origin,
            strategy: self.strategy,
            connections: self.connections(),
        }
    }
}

/// Answer to a connectivity query, as written in JSON output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionSummary<'a, V> {
    pub origin: &'a V,
    pub strategy: Strategy,
    /// Reachable vertices in visit order, origin excluded
    pub connections: &'a [V],
}
