//! Read-only textual dumps of a graph

use super::directed::Graph;
use super::matrix::EdgeWeight;
use super::registry::Vertex;
use std::fmt;

/// Narrowest column in the matrix dump
const MIN_COLUMN_WIDTH: usize = 10;

/// Full adjacency matrix, one row and one column per vertex
///
/// Absent edges print as the sentinel weight.
pub struct MatrixView<'a, V, W> {
    graph: &'a Graph<V, W>,
}

/// Adjacency-list style listing: `vertex: neighbor neighbor ...`
pub struct AdjacencyView<'a, V, W> {
    graph: &'a Graph<V, W>,
}

impl<V: Vertex, W: EdgeWeight> Graph<V, W> {
    /// Display adapter rendering the adjacency matrix
    pub fn matrix_view(&self) -> MatrixView<'_, V, W> {
        MatrixView { graph: self }
    }

    /// Display adapter rendering each vertex with its direct neighbors
    pub fn adjacency_view(&self) -> AdjacencyView<'_, V, W> {
        AdjacencyView { graph: self }
    }
}

impl<V: Vertex, W: EdgeWeight + fmt::Display> fmt::Display for MatrixView<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.graph.vertices().map(ToString::to_string).collect();
        let width = names
            .iter()
            .map(|name| name.chars().count() + 2)
            .fold(MIN_COLUMN_WIDTH, usize::max);

        writeln!(f, "Graph Representation:")?;
        writeln!(f, "Adjacency Matrix:")?;

        write!(f, "{:width$}", "")?;
        for name in &names {
            write!(f, "{:>width$}", name)?;
        }
        writeln!(f)?;
        writeln!(f, "{:width$}{}", "", "-".repeat(names.len() * width))?;

        let matrix = self.graph.matrix();
        for (i, name) in names.iter().enumerate() {
            write!(f, "{:<width$}|", name)?;
            for weight in matrix.row(i) {
                write!(f, "{:>width$}", weight.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: Vertex, W: EdgeWeight> fmt::Display for AdjacencyView<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.graph.matrix();
        for (i, vertex) in self.graph.vertices().enumerate() {
            write!(f, "{}:", vertex)?;
            for j in matrix.row_targets(i) {
                write!(f, " {}", self.graph.vertex_at(j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
