//! Synthetic graph generation.

use nalgebra::DMatrix;
use rand::Rng;

/// The probability of any given edge being present in a generated graph.
const EDGE_PROBABILITY: f64 = 0.4;

/// Generates a `k × k` adjacency matrix for a random undirected graph.
///
/// Each of the `k * (k - 1) / 2` possible edges is present independently
/// with probability 0.4, written symmetrically into both triangles. The
/// diagonal is zero, there are no self-loops.
///
/// The random source is supplied by the caller, so reproducibility is a
/// matter of seeding the generator.
///
/// # Examples
///
/// ```
/// use lattice::random::random_graph;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(4);
/// let matrix = random_graph(5, &mut rng);
///
/// assert_eq!(matrix, matrix.transpose());
/// ```
pub fn random_graph<R: Rng + ?Sized>(k: usize, rng: &mut R) -> DMatrix<f64> {
    let mut matrix = DMatrix::<f64>::zeros(k, k);

    // Draw the lower triangle and mirror it, the diagonal is left zeroed.
    for i in 0..k {
        for j in 0..i {
            if rng.gen_bool(EDGE_PROBABILITY) {
                matrix[(i, j)] = 1.0;
                matrix[(j, i)] = 1.0;
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn symmetric_with_zero_diagonal() {
        let mut rng = StdRng::seed_from_u64(4);
        let matrix = random_graph(10, &mut rng);

        assert_eq!(matrix, matrix.transpose());

        for i in 0..10 {
            assert_eq!(matrix[(i, i)], 0.0);
        }
    }

    #[test]
    fn deterministic_for_equal_seeds() {
        let a = random_graph(8, &mut StdRng::seed_from_u64(7));
        let b = random_graph(8, &mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn empty_graph() {
        let mut rng = StdRng::seed_from_u64(0);
        let matrix = random_graph(0, &mut rng);

        assert!(matrix.is_empty());
    }
}
