//! A module for working with graphs.

use std::collections::HashSet;

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use crate::{components, edge::Edge, error::Result, matrix};

/// An undirected graph over 0-based node indices, made up of edges.
///
/// Matrices derived from the graph are square with a dimension of the
/// largest node index plus one; indices that appear in no edge show up as
/// isolated rows. The matrices are cached between computations and
/// invalidated whenever the edge set changes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The edges in the graph.
    edges: HashSet<Edge>,
    /// Cache the adjacency matrix when possible.
    adjacency_matrix: Option<DMatrix<f64>>,
    /// Cache the degree matrix when possible.
    degree_matrix: Option<DMatrix<f64>>,
    /// Cache the laplacian matrix when possible.
    laplacian_matrix: Option<DMatrix<f64>>,
}

impl Graph {
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::graph::Graph;
    ///
    /// let graph = Graph::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from 0-based node-index pairs, such as those
    /// returned by [`parse_edge_list`](crate::load::parse_edge_list).
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::graph::Graph;
    ///
    /// let graph = Graph::from_edges([(0, 1), (1, 2)]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(edges: I) -> Self {
        let mut graph = Self::new();

        for (a, b) in edges {
            graph.insert(Edge::new(a, b));
        }

        graph
    }

    /// Inserts an edge into the graph and returns whether it was newly
    /// added. Self-loops are rejected, the matrices keep a zero diagonal.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if edge.is_loop() {
            return false;
        }

        let is_inserted = self.edges.insert(edge);

        // Delete the cached matrices if the edge was successfully inserted
        // because they can't reliably be updated from the new edge alone.
        if is_inserted {
            self.clear_cache();
        }

        is_inserted
    }

    /// Removes an edge from the graph and returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::edge::Edge;
    /// use lattice::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(Edge::new(0, 1));
    ///
    /// assert_eq!(graph.remove(&Edge::new(0, 1)), true);
    /// assert_eq!(graph.remove(&Edge::new(0, 2)), false);
    /// ```
    pub fn remove(&mut self, edge: &Edge) -> bool {
        let is_removed = self.edges.remove(edge);

        if is_removed {
            self.clear_cache();
        }

        is_removed
    }

    /// Checks if the graph contains an edge.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the number of distinct nodes appearing in edges.
    ///
    /// This can be smaller than [`dimension`](Self::dimension) when the
    /// node indices are sparse.
    pub fn node_count(&self) -> usize {
        let mut nodes = HashSet::new();

        for edge in &self.edges {
            nodes.insert(edge.source());
            nodes.insert(edge.target());
        }

        nodes.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the dimension of the matrices representing this graph: the
    /// largest node index plus one, zero for an empty graph.
    pub fn dimension(&self) -> usize {
        self.edges
            .iter()
            .map(|edge| edge.source().max(edge.target()) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Constructs the adjacency matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::edge::Edge;
    /// use lattice::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(Edge::new(0, 1));
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              1.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.adjacency_matrix.clone() {
            return matrix;
        }

        let dim = self.dimension();
        let mut matrix = DMatrix::<f64>::zeros(dim, dim);

        // Edges are unique and undirected, so both triangles get written
        // once per edge.
        for edge in &self.edges {
            matrix[(edge.source(), edge.target())] = 1.0;
            matrix[(edge.target(), edge.source())] = 1.0;
        }

        // Cache the matrix.
        self.adjacency_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the degree matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::edge::Edge;
    /// use lattice::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(Edge::new(0, 1));
    /// assert_eq!(
    ///     graph.degree_matrix(),
    ///     dmatrix![1.0, 0.0;
    ///              0.0, 1.0]
    /// );
    /// ```
    pub fn degree_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.degree_matrix.clone() {
            return matrix;
        }

        let adjacency_matrix = self.adjacency_matrix();

        // Safety: the adjacency matrix built above is always square.
        let matrix = matrix::degree_matrix(&adjacency_matrix).unwrap();

        // Cache the matrix.
        self.degree_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the laplacian matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::edge::Edge;
    /// use lattice::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(Edge::new(0, 1));
    /// assert_eq!(
    ///     graph.laplacian_matrix(),
    ///     dmatrix![1.0, -1.0;
    ///              -1.0, 1.0]
    /// );
    /// ```
    pub fn laplacian_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.laplacian_matrix.clone() {
            return matrix;
        }

        let adjacency_matrix = self.adjacency_matrix();

        // Safety: the adjacency matrix built above is always square.
        let matrix = matrix::laplacian_matrix(&adjacency_matrix).unwrap();

        // Cache the matrix.
        self.laplacian_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the modularity matrix for this graph, computed fresh on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEdges`](crate::Error::NoEdges) for an edgeless
    /// graph.
    pub fn modularity_matrix(&mut self) -> Result<DMatrix<f64>> {
        matrix::modularity_matrix(&self.adjacency_matrix())
    }

    /// Returns the unnormalized modularity score of a community partition
    /// of this graph; see [`matrix::modularity`] for the exact definition.
    pub fn modularity(&mut self, communities: &[Vec<usize>]) -> Result<f64> {
        let mod_matrix = self.modularity_matrix()?;

        matrix::modularity(&mod_matrix, communities)
    }

    /// Partitions the graph's full node range into connected components,
    /// each in breadth-first visitation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice::graph::Graph;
    ///
    /// let mut graph = Graph::from_edges([(0, 1), (2, 3)]);
    ///
    /// assert_eq!(graph.components(), vec![vec![0, 1], vec![2, 3]]);
    /// ```
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        // Safety: the adjacency matrix built here is always square.
        components::find_components(&self.adjacency_matrix(), None).unwrap()
    }

    /// Returns the algebraic connectivity (Fiedler eigenvalue) of the
    /// graph along with the associated eigenvector.
    ///
    /// The value is zero exactly when the graph is disconnected; the
    /// vector's sign pattern gives a two-way spectral split of the nodes.
    pub fn algebraic_connectivity(&mut self) -> (f64, DVector<f64>) {
        let laplacian_matrix = self.laplacian_matrix();

        // The Fiedler value is the second-smallest eigenvalue, which
        // requires at least a 2x2 matrix.
        let dim = laplacian_matrix.nrows();
        if dim < 2 {
            return (0.0, DVector::zeros(dim));
        }

        let pairs = ascending_eigenpairs(laplacian_matrix);
        let (algebraic_connectivity, fiedler_vector) = &pairs[1];

        (*algebraic_connectivity, fiedler_vector.clone())
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This is called every time the set of edges is mutated since the
    /// cached matrices won't correspond to the new graph.
    fn clear_cache(&mut self) {
        self.adjacency_matrix = None;
        self.degree_matrix = None;
        self.laplacian_matrix = None;
    }
}

//
// Helpers
//

/// Computes the eigenpairs of a symmetric matrix, sorted by ascending
/// eigenvalue.
fn ascending_eigenpairs(matrix: DMatrix<f64>) -> Vec<(f64, DVector<f64>)> {
    if matrix.is_empty() {
        return vec![];
    }

    let eigen = SymmetricEigen::new(matrix);

    // Map eigenvalues to their eigenvectors.
    let mut pairs: Vec<(f64, DVector<f64>)> = eigen
        .eigenvalues
        .iter()
        .zip(eigen.eigenvectors.column_iter())
        .map(|(value, vector)| (*value, vector.clone_owned()))
        .collect();

    // The eigenvalues of a real symmetric matrix are real, the comparison
    // can't fail.
    pairs.sort_unstable_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());

    pairs
}
