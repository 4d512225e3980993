//! Structural matrix builders over dense adjacency matrices.
//!
//! All functions here are pure: they take an adjacency matrix (square,
//! symmetric, zero diagonal) by reference and return a freshly allocated
//! result. Shape preconditions are checked on entry rather than surfacing
//! as index panics deep inside a computation.

use itertools::Itertools;
use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Checks a matrix is square before it enters a computation.
pub(crate) fn ensure_square(matrix: &DMatrix<f64>) -> Result<()> {
    if matrix.is_square() {
        Ok(())
    } else {
        Err(Error::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        })
    }
}

/// Checks every node referenced by a partition exists in the matrix.
fn ensure_in_range(communities: &[Vec<usize>], dim: usize) -> Result<()> {
    for community in communities {
        for &node in community {
            if node >= dim {
                return Err(Error::NodeOutOfRange { node, dim });
            }
        }
    }

    Ok(())
}

/// Constructs the degree matrix for an adjacency matrix.
///
/// The degree matrix is diagonal, with each entry holding the sum of the
/// corresponding adjacency row.
///
/// # Examples
///
/// ```
/// use lattice::matrix::degree_matrix;
/// use nalgebra::dmatrix;
///
/// let adjacency = dmatrix![0.0, 1.0, 1.0;
///                          1.0, 0.0, 0.0;
///                          1.0, 0.0, 0.0];
///
/// assert_eq!(
///     degree_matrix(&adjacency).unwrap(),
///     dmatrix![2.0, 0.0, 0.0;
///              0.0, 1.0, 0.0;
///              0.0, 0.0, 1.0]
/// );
/// ```
pub fn degree_matrix(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    ensure_square(adjacency)?;

    let n = adjacency.nrows();
    let mut matrix = DMatrix::<f64>::zeros(n, n);

    for (i, row) in adjacency.row_iter().enumerate() {
        // Set the diagonal to be the sum of edge weights in that row.
        matrix[(i, i)] = row.sum();
    }

    Ok(matrix)
}

/// Constructs the Laplacian matrix `L = D - A`, `D` being the degree
/// matrix.
///
/// Every row of the Laplacian sums to zero, a property worth checking when
/// debugging hand-built adjacency matrices.
///
/// # Examples
///
/// ```
/// use lattice::matrix::laplacian_matrix;
/// use nalgebra::dmatrix;
///
/// let adjacency = dmatrix![0.0, 1.0, 1.0;
///                          1.0, 0.0, 0.0;
///                          1.0, 0.0, 0.0];
///
/// assert_eq!(
///     laplacian_matrix(&adjacency).unwrap(),
///     dmatrix![2.0, -1.0, -1.0;
///              -1.0, 1.0, 0.0;
///              -1.0, 0.0, 1.0]
/// );
/// ```
pub fn laplacian_matrix(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    Ok(degree_matrix(adjacency)? - adjacency)
}

/// Constructs the modularity matrix `B = A - k kᵀ / 2m`, where `k` is the
/// degree vector and `2m` the total degree sum.
///
/// The subtracted term is the expected edge weight between each pair of
/// nodes under the configuration null model, so entries may be negative.
///
/// # Errors
///
/// Returns [`Error::NoEdges`] when the total degree sum is zero, the null
/// model is undefined for an edgeless graph.
pub fn modularity_matrix(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    ensure_square(adjacency)?;

    let n = adjacency.nrows();
    let degrees = DVector::from_iterator(n, adjacency.row_iter().map(|row| row.sum()));

    let total = degrees.sum();
    if total == 0.0 {
        return Err(Error::NoEdges);
    }

    let null_model = &degrees * degrees.transpose() / total;

    Ok(adjacency - null_model)
}

/// Sums the modularity-matrix entries over all unordered pairs of nodes
/// sharing a community.
///
/// Only the lower triangle is read so each pair contributes once;
/// singleton communities contribute nothing and pairs spanning different
/// communities are ignored.
///
/// Note this score is left unnormalized: the textbook definition divides
/// by the total degree sum `2m`, this one deliberately doesn't, so values
/// scale with the size of the graph.
///
/// # Examples
///
/// ```
/// use lattice::matrix::{modularity, modularity_matrix};
/// use nalgebra::dmatrix;
///
/// // A 4-cycle, split down the middle.
/// let adjacency = dmatrix![0.0, 1.0, 0.0, 1.0;
///                          1.0, 0.0, 1.0, 0.0;
///                          0.0, 1.0, 0.0, 1.0;
///                          1.0, 0.0, 1.0, 0.0];
///
/// let b = modularity_matrix(&adjacency).unwrap();
/// let score = modularity(&b, &[vec![0, 1], vec![2, 3]]).unwrap();
///
/// assert_eq!(score, b[(1, 0)] + b[(3, 2)]);
/// ```
pub fn modularity(mod_matrix: &DMatrix<f64>, communities: &[Vec<usize>]) -> Result<f64> {
    ensure_square(mod_matrix)?;
    ensure_in_range(communities, mod_matrix.nrows())?;

    let mut score = 0.0;

    for community in communities {
        for (a, b) in community.iter().copied().tuple_combinations::<(_, _)>() {
            // Index the lower triangle so (a, b) and (b, a) count once.
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            score += mod_matrix[(hi, lo)];
        }
    }

    Ok(score)
}

/// Collapses a node-level adjacency matrix into a community-level one,
/// summing the edge weights between each pair of communities.
///
/// Entry `(i, j)` of the result aggregates `adjacency[(u, v)]` over all
/// node pairs `u ∈ communities[i]`, `v ∈ communities[j]`; the result is
/// symmetric. A community's diagonal entry therefore counts its internal
/// weights in both directions.
///
/// # Examples
///
/// ```
/// use lattice::matrix::intercommunity_matrix;
/// use nalgebra::dmatrix;
///
/// let adjacency = dmatrix![0.0, 1.0, 0.0, 1.0;
///                          1.0, 0.0, 1.0, 0.0;
///                          0.0, 1.0, 0.0, 1.0;
///                          1.0, 0.0, 1.0, 0.0];
///
/// assert_eq!(
///     intercommunity_matrix(&adjacency, &[vec![0, 1], vec![2, 3]]).unwrap(),
///     dmatrix![2.0, 2.0;
///              2.0, 2.0]
/// );
/// ```
pub fn intercommunity_matrix(
    adjacency: &DMatrix<f64>,
    communities: &[Vec<usize>],
) -> Result<DMatrix<f64>> {
    intercommunity_matrix_with(adjacency, communities, |weights| weights.iter().sum())
}

/// Like [`intercommunity_matrix`], with a caller-supplied aggregation over
/// the gathered weights of each community pair.
pub fn intercommunity_matrix_with<F>(
    adjacency: &DMatrix<f64>,
    communities: &[Vec<usize>],
    mut aggregate: F,
) -> Result<DMatrix<f64>>
where
    F: FnMut(&[f64]) -> f64,
{
    ensure_square(adjacency)?;
    ensure_in_range(communities, adjacency.nrows())?;

    let k = communities.len();
    let mut collapsed = DMatrix::<f64>::zeros(k, k);

    for (i, source) in communities.iter().enumerate() {
        // Only the lower triangle is computed, the result is symmetric.
        for (j, target) in communities.iter().enumerate().take(i + 1) {
            let weights: Vec<f64> = source
                .iter()
                .cartesian_product(target.iter())
                .map(|(&u, &v)| adjacency[(u, v)])
                .collect();

            let weight = aggregate(&weights);
            collapsed[(i, j)] = weight;
            collapsed[(j, i)] = weight;
        }
    }

    Ok(collapsed)
}
