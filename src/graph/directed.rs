//! Graph: a directed, weighted graph over a dense adjacency matrix

use super::error::{Culprit, GraphError, GraphResult};
use super::matrix::{AdjacencyMatrix, EdgeWeight};
use super::registry::{Vertex, VertexRegistry};
use crate::query::{Strategy, TraversalResult, TraverseQuery};
use tracing::trace;

/// A directed graph with weighted edges
///
/// Vertices live in a [`VertexRegistry`] and edge weights in an
/// [`AdjacencyMatrix`] kept square with the registry. A cell equal to
/// `W::default()` means "no edge"; see [`EdgeWeight`] for the consequences.
///
/// Cloning deep-copies both the registry and the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V, W> {
    registry: VertexRegistry<V>,
    matrix: AdjacencyMatrix<W>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            registry: VertexRegistry::default(),
            matrix: AdjacencyMatrix::default(),
        }
    }
}

impl<V: Vertex, W: EdgeWeight> Graph<V, W> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // === Mutation ===

    /// Add a vertex
    ///
    /// Adding a vertex that is already present is a no-op. Returns `true`
    /// when the vertex was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let Some(index) = self.registry.add(vertex) else {
            return false;
        };
        self.matrix.push_vertex();
        trace!(index, side = self.matrix.side(), "vertex added");
        true
    }

    /// Remove a vertex together with all of its incoming and outgoing edges
    ///
    /// Every vertex registered after it moves down one dense index.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<(), V> {
        let index = self.registry.remove(vertex)?;
        self.matrix.remove_vertex_at(index);
        trace!(%vertex, index, side = self.matrix.side(), "vertex removed");
        Ok(())
    }

    /// Add a directed edge `from -> to`
    ///
    /// Self-loops are allowed. Fails with `EdgeAlreadyExists` if the cell
    /// already holds a weight.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: W) -> GraphResult<(), V> {
        let (i, j) = self.endpoints(from, to)?;
        if self.matrix.has_edge(i, j) {
            return Err(GraphError::edge_already_exists(from.clone(), to.clone()));
        }
        self.matrix.set(i, j, weight);
        Ok(())
    }

    /// Remove the edge `from -> to`
    pub fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<(), V> {
        let (i, j) = self.edge_cell(from, to)?;
        self.matrix.clear(i, j);
        Ok(())
    }

    /// Overwrite the weight of an existing edge
    ///
    /// Writing the absence sentinel is not rejected; the edge then reads as
    /// absent to every later query.
    pub fn update_weight(&mut self, from: &V, to: &V, weight: W) -> GraphResult<(), V> {
        let (i, j) = self.edge_cell(from, to)?;
        self.matrix.set(i, j, weight);
        Ok(())
    }

    // === Queries ===

    /// Weight of the edge `from -> to`
    pub fn get_weight(&self, from: &V, to: &V) -> GraphResult<&W, V> {
        let (i, j) = self.edge_cell(from, to)?;
        Ok(self.matrix.get(i, j))
    }

    /// Whether an edge `from -> to` exists
    ///
    /// Both endpoints must be registered.
    pub fn has_edge(&self, from: &V, to: &V) -> GraphResult<bool, V> {
        let (i, j) = self.endpoints(from, to)?;
        Ok(self.matrix.has_edge(i, j))
    }

    /// Vertices reachable from `vertex` over exactly one edge, in registry order
    pub fn direct_neighbors(&self, vertex: &V) -> GraphResult<Vec<V>, V> {
        let index = self.registry.index_of(vertex)?;
        Ok(self
            .matrix
            .row_targets(index)
            .map(|j| self.vertex_at(j).clone())
            .collect())
    }

    /// Vertices with an edge into `vertex`, in registry order
    pub fn direct_sources(&self, vertex: &V) -> GraphResult<Vec<V>, V> {
        let index = self.registry.index_of(vertex)?;
        Ok(self
            .matrix
            .column_sources(index)
            .map(|i| self.vertex_at(i).clone())
            .collect())
    }

    /// Every vertex reachable from `vertex`, excluding `vertex` itself, in visit order
    pub fn connections(&self, vertex: &V, strategy: Strategy) -> GraphResult<Vec<V>, V> {
        TraverseQuery::from(vertex.clone())
            .strategy(strategy)
            .execute(self)
            .map(TraversalResult::into_connections)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.registry.contains(vertex)
    }

    /// Current dense index of a vertex
    ///
    /// Invalidated by any later vertex insertion or removal.
    pub fn index_of(&self, vertex: &V) -> GraphResult<usize, V> {
        self.registry.index_of(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Vertices in registry order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.registry.iter()
    }

    /// Every edge as `(from, to, weight)`, row-major in registry order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        self.registry.iter().enumerate().flat_map(move |(i, from)| {
            self.matrix
                .row_targets(i)
                .map(move |j| (from, self.vertex_at(j), self.matrix.get(i, j)))
        })
    }

    // === Crate internals ===

    /// Dense indices of the direct neighbors of the vertex at `index`
    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix.row_targets(index)
    }

    /// Dense indices `>= start` of the direct neighbors of the vertex at `index`
    pub(crate) fn neighbor_indices_from(
        &self,
        index: usize,
        start: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        self.matrix.row_targets_from(index, start)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> &V {
        &self.registry[index]
    }

    pub(crate) fn matrix(&self) -> &AdjacencyMatrix<W> {
        &self.matrix
    }

    /// Resolve both endpoints to dense indices
    ///
    /// Names the single missing vertex, or the pair when both are missing.
    fn endpoints(&self, from: &V, to: &V) -> GraphResult<(usize, usize), V> {
        match (self.registry.position(from), self.registry.position(to)) {
            (Some(i), Some(j)) => Ok((i, j)),
            (None, Some(_)) => Err(GraphError::vertex_not_found(from.clone())),
            (Some(_), None) => Err(GraphError::vertex_not_found(to.clone())),
            (None, None) => Err(GraphError::VertexNotFound(Culprit::pair(
                from.clone(),
                to.clone(),
            ))),
        }
    }

    /// Resolve both endpoints and require an edge between them
    fn edge_cell(&self, from: &V, to: &V) -> GraphResult<(usize, usize), V> {
        let (i, j) = self.endpoints(from, to)?;
        if !self.matrix.has_edge(i, j) {
            return Err(GraphError::edge_not_found(from.clone(), to.clone()));
        }
        Ok((i, j))
    }
}
