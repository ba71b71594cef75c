//! Vertex registry: ordered vertex values and their dense indices

use super::error::{GraphError, GraphResult};
use std::fmt::{Debug, Display};
use std::ops::Index;

/// Requirements on a vertex value
///
/// Identity is structural equality. Vertices are neither hashed nor ordered,
/// so every lookup is a linear scan over the registry.
pub trait Vertex: Clone + PartialEq + Debug + Display {}

impl<T> Vertex for T where T: Clone + PartialEq + Debug + Display {}

/// Ordered collection of distinct vertices
///
/// A vertex's dense index is its position in insertion order among the
/// surviving vertices. Indices are always `0..len()`; removing a vertex
/// shifts every later vertex down by one.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRegistry<V> {
    vertices: Vec<V>,
}

impl<V> Default for VertexRegistry<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<V: Vertex> VertexRegistry<V> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex at the next index
    ///
    /// Returns the new index, or `None` if an equal vertex is already present.
    pub fn add(&mut self, vertex: V) -> Option<usize> {
        if self.contains(&vertex) {
            return None;
        }
        self.vertices.push(vertex);
        Some(self.vertices.len() - 1)
    }

    /// Unregister a vertex, returning the index it occupied
    pub fn remove(&mut self, vertex: &V) -> GraphResult<usize, V> {
        let index = self.index_of(vertex)?;
        self.vertices.remove(index);
        Ok(index)
    }

    /// Current dense index of a vertex
    pub fn index_of(&self, vertex: &V) -> GraphResult<usize, V> {
        self.position(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex.clone()))
    }

    /// Current dense index of a vertex, if registered
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.position(vertex).is_some()
    }

    /// Vertex at a dense index
    pub fn get(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl<V> Index<usize> for VertexRegistry<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.vertices[index]
    }
}
