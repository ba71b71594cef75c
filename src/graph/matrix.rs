//! Square adjacency matrix of edge weights

/// Requirements on an edge weight
///
/// The default value is the absence sentinel: a cell equal to it means
/// "no edge". An edge whose real weight equals the default (for example a
/// `u32` of 0) cannot be represented and reads back as absent.
pub trait EdgeWeight: Clone + PartialEq + Default {
    /// The sentinel stored in cells with no edge
    fn absent() -> Self {
        Self::default()
    }

    /// Whether this value is the absence sentinel
    fn is_absent(&self) -> bool {
        *self == Self::absent()
    }
}

impl<T> EdgeWeight for T where T: Clone + PartialEq + Default {}

/// N×N table of weight cells addressed by dense vertex indices
///
/// `cells[i][j]` holds the weight of the edge from vertex `i` to vertex `j`.
/// Indices must be in range; callers resolve them through the registry first.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    cells: Vec<Vec<W>>,
}

impl<W> Default for AdjacencyMatrix<W> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<W: EdgeWeight> AdjacencyMatrix<W> {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (and columns)
    pub fn side(&self) -> usize {
        self.cells.len()
    }

    /// Grow by one row and one column, all new cells absent
    pub fn push_vertex(&mut self) {
        let side = self.cells.len() + 1;
        for row in self.cells.iter_mut() {
            row.resize(side, W::absent());
        }
        self.cells.push(vec![W::absent(); side]);
    }

    /// Drop row and column `index`, keeping every other cell's relative position
    pub fn remove_vertex_at(&mut self, index: usize) {
        self.cells.remove(index);
        for row in self.cells.iter_mut() {
            row.remove(index);
        }
    }

    pub fn get(&self, from: usize, to: usize) -> &W {
        &self.cells[from][to]
    }

    pub fn set(&mut self, from: usize, to: usize, weight: W) {
        self.cells[from][to] = weight;
    }

    /// Reset a cell to the absence sentinel
    pub fn clear(&mut self, from: usize, to: usize) {
        self.cells[from][to] = W::absent();
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        !self.cells[from][to].is_absent()
    }

    /// Indices `j` with an edge `from -> j`, ascending
    pub fn row_targets(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        self.row_targets_from(from, 0)
    }

    /// Indices `j >= start` with an edge `from -> j`, ascending
    ///
    /// Cells before `start` are not visited. `start` may equal `side()`.
    pub fn row_targets_from(
        &self,
        from: usize,
        start: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        self.cells[from][start..]
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_absent())
            .map(move |(offset, _)| start + offset)
    }

    /// Indices `i` with an edge `i -> to`, ascending
    pub fn column_sources(&self, to: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, row)| !row[to].is_absent())
            .map(|(i, _)| i)
    }

    /// Number of non-absent cells
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|w| !w.is_absent()).count())
            .sum()
    }

    /// Row `from` as a slice of cells
    pub fn row(&self, from: usize) -> &[W] {
        &self.cells[from]
    }
}
