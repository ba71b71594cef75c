//! Core graph data structures

mod directed;
mod error;
mod matrix;
mod registry;
mod render;


pub use directed::Graph;
pub use error::{Culprit, GraphError, GraphResult};
pub use matrix::{AdjacencyMatrix, EdgeWeight};
pub use registry::{Vertex, VertexRegistry};
pub use render::{AdjacencyView, MatrixView};
