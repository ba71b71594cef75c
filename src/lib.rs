//! hopgraph: Directed Graphs over a Dense Adjacency Matrix
//!
//! A generic directed graph whose vertices are any comparable, displayable
//! value and whose edges carry a weight of any value type with a default.
//! Weights live in a square adjacency matrix indexed by each vertex's dense
//! position in insertion order.
//!
//! # Core Concepts
//!
//! - **Vertices**: distinct by equality, kept in insertion order; removal
//!   shifts later vertices down one index
//! - **Edges**: a matrix cell holding anything other than `W::default()`;
//!   the default value means "no edge"
//! - **Traversal**: breadth-first or depth-first reachability, ties broken by
//!   insertion order
//! - **Hop networks**: `Graph<String, u32>` built from tab-separated
//!   `source, destination, hop time` records
//!
//! # Example
//!
//! ```
//! use hopgraph::{Graph, Strategy};
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! graph.add_vertex("Oslo");
//! graph.add_vertex("Bergen");
//! graph.add_edge(&"Oslo", &"Bergen", 7).unwrap();
//!
//! let reached = graph.connections(&"Oslo", Strategy::BreadthFirst).unwrap();
//! assert_eq!(reached, vec!["Bergen"]);
//! ```

mod graph;
pub mod ingest;
pub mod query;
pub mod session;

pub use graph::{
    AdjacencyMatrix, AdjacencyView, Culprit, EdgeWeight, Graph, GraphError, GraphResult,
    MatrixView, Vertex, VertexRegistry,
};
pub use ingest::{HopNetwork, HopRecord, IngestConfig, IngestError, NetworkLoader, RecordError};
pub use query::{ConnectionSummary, Strategy, TraversalQueue, TraversalResult, TraverseQuery};
pub use session::{OutputFormat, QuerySession, SessionConfig, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
