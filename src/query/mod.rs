//! Query system for graphs
//!
//! Provides breadth-first and depth-first reachability traversals over the
//! directed-neighbor relation.

mod queue;
mod traverse;
mod types;

pub use queue::TraversalQueue;
pub use traverse::TraverseQuery;
pub use types::{ConnectionSummary, Strategy, TraversalResult};
