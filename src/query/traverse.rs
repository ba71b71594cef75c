//! Graph traversal operations

use super::queue::TraversalQueue;
use super::types::{Strategy, TraversalResult};
use crate::graph::{EdgeWeight, Graph, GraphResult, Vertex};
use tracing::debug;

/// Query for traversing the graph from a starting vertex
///
/// Both strategies follow outgoing edges and break ties by registry order:
/// among a vertex's direct neighbors, the one added to the graph first is
/// visited first. The graph is borrowed for the whole traversal, so it
/// cannot change underneath it.
#[derive(Debug, Clone)]
pub struct TraverseQuery<V> {
    /// Starting vertex
    pub origin: V,
    /// Visit order
    pub strategy: Strategy,
}

impl<V: Vertex> TraverseQuery<V> {
    /// Create a new breadth-first traversal query from a starting vertex
    pub fn from(origin: V) -> Self {
        Self {
            origin,
            strategy: Strategy::BreadthFirst,
        }
    }

    /// Set the traversal strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Execute the traversal against a graph
    ///
    /// Fails with `VertexNotFound` if the origin is not registered.
    pub fn execute<W: EdgeWeight>(
        &self,
        graph: &Graph<V, W>,
    ) -> GraphResult<TraversalResult<V>, V> {
        let start = graph.index_of(&self.origin)?;

        let order = match self.strategy {
            Strategy::BreadthFirst => breadth_first(graph, start),
            Strategy::DepthFirst => depth_first(graph, start),
        };
        debug!(
            origin = %self.origin,
            strategy = %self.strategy,
            reachable = order.len(),
            "traversal complete"
        );

        let mut result = TraversalResult::new(self.origin.clone(), self.strategy);
        result.visited = order
            .into_iter()
            .map(|index| graph.vertex_at(index).clone())
            .collect();
        Ok(result)
    }
}

/// Dense indices in breadth-first visit order, `start` first
fn breadth_first<V: Vertex, W: EdgeWeight>(graph: &Graph<V, W>, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = TraversalQueue::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.enqueue(start);
    order.push(start);

    while let Some(current) = queue.dequeue() {
        for neighbor in graph.neighbor_indices(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.enqueue(neighbor);
                order.push(neighbor);
            }
        }
    }

    order
}

/// Dense indices in depth-first pre-order, `start` first
///
/// Uses an explicit stack of `(vertex, next neighbor to try)` frames, which
/// visits vertices in the same order as the recursive formulation. Each
/// frame resumes its row scan at the cursor, so a row is walked once in
/// total per vertex.
fn depth_first<V: Vertex, W: EdgeWeight>(graph: &Graph<V, W>, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    let mut order = Vec::new();

    visited[start] = true;
    order.push(start);

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let next = graph
            .neighbor_indices_from(current, cursor)
            .find(|&neighbor| !visited[neighbor]);

        match next {
            Some(neighbor) => {
                frame.1 = neighbor + 1;
                visited[neighbor] = true;
                order.push(neighbor);
                stack.push((neighbor, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}
