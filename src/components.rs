//! Connected-component discovery over adjacency matrices.

use std::collections::VecDeque;

use nalgebra::DMatrix;

use crate::{error::Result, matrix::ensure_square};

/// Partitions the node range `[0, limit)` into connected components.
///
/// Starting from each unvisited node in ascending order, an iterative
/// breadth-first search follows every edge with a non-zero weight and
/// collects the nodes it reaches into one component. Nodes appear within
/// their component in visitation order, not numeric order, and every node
/// in range appears in exactly one component.
///
/// `None`, or a limit exceeding the matrix dimension, traverses the whole
/// matrix. Nodes at or beyond the limit are invisible to the traversal,
/// even when in-range nodes have edges to them.
///
/// # Examples
///
/// ```
/// use lattice::components::find_components;
/// use nalgebra::dmatrix;
///
/// // Two nodes joined by an edge, plus an isolated third.
/// let adjacency = dmatrix![0.0, 1.0, 0.0;
///                          1.0, 0.0, 0.0;
///                          0.0, 0.0, 0.0];
///
/// let components = find_components(&adjacency, None).unwrap();
/// assert_eq!(components, vec![vec![0, 1], vec![2]]);
/// ```
pub fn find_components(adjacency: &DMatrix<f64>, limit: Option<usize>) -> Result<Vec<Vec<usize>>> {
    ensure_square(adjacency)?;

    let dim = adjacency.nrows();
    let limit = limit.map_or(dim, |limit| limit.min(dim));

    let mut visited = vec![false; limit];
    let mut components = Vec::new();

    for start in 0..limit {
        if visited[start] {
            continue;
        }

        // Breadth-first search from the lowest unvisited node; everything
        // reachable from it forms one component.
        let mut component = Vec::new();
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            component.push(node);

            for (neighbour, &weight) in adjacency.row(node).iter().enumerate() {
                if weight != 0.0 && neighbour < limit && !visited[neighbour] {
                    visited[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }

        components.push(component);
    }

    Ok(components)
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use crate::error::Error;

    use super::*;

    #[test]
    fn no_edges_yield_singletons() {
        let adjacency = DMatrix::<f64>::zeros(4, 4);
        let components = find_components(&adjacency, None).unwrap();

        assert_eq!(components, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn complete_graph_yields_one_component() {
        let mut adjacency = DMatrix::<f64>::from_element(5, 5, 1.0);
        adjacency.fill_diagonal(0.0);

        let components = find_components(&adjacency, None).unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 5);
    }

    #[test]
    fn nodes_appear_in_visitation_order() {
        // A path 0 - 2 - 1: the BFS from 0 reaches 2 before 1.
        let adjacency = dmatrix![0.0, 0.0, 1.0;
                                 0.0, 0.0, 1.0;
                                 1.0, 1.0, 0.0];

        let components = find_components(&adjacency, None).unwrap();

        assert_eq!(components, vec![vec![0, 2, 1]]);
    }

    #[test]
    fn limit_restricts_traversal() {
        // A 4-cycle 0 - 1 - 2 - 3 - 0 truncated to the first two nodes
        // leaves only the (0, 1) edge visible.
        let adjacency = dmatrix![0.0, 1.0, 0.0, 1.0;
                                 1.0, 0.0, 1.0, 0.0;
                                 0.0, 1.0, 0.0, 1.0;
                                 1.0, 0.0, 1.0, 0.0];

        let components = find_components(&adjacency, Some(2)).unwrap();

        assert_eq!(components, vec![vec![0, 1]]);
    }

    #[test]
    fn zero_limit_yields_no_components() {
        let adjacency = dmatrix![0.0, 1.0;
                                 1.0, 0.0];

        let components = find_components(&adjacency, Some(0)).unwrap();

        assert!(components.is_empty());
    }

    #[test]
    fn limit_beyond_dimension_is_clamped() {
        let adjacency = dmatrix![0.0, 1.0;
                                 1.0, 0.0];

        let components = find_components(&adjacency, Some(100)).unwrap();

        assert_eq!(components, vec![vec![0, 1]]);
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        // Two triangles with no edges between them.
        let adjacency = dmatrix![0.0, 1.0, 1.0, 0.0, 0.0, 0.0;
                                 1.0, 0.0, 1.0, 0.0, 0.0, 0.0;
                                 1.0, 1.0, 0.0, 0.0, 0.0, 0.0;
                                 0.0, 0.0, 0.0, 0.0, 1.0, 1.0;
                                 0.0, 0.0, 0.0, 1.0, 0.0, 1.0;
                                 0.0, 0.0, 0.0, 1.0, 1.0, 0.0];

        let components = find_components(&adjacency, None).unwrap();

        let mut all: Vec<usize> = components.into_iter().flatten().collect();
        all.sort_unstable();

        assert_eq!(all, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn rejects_non_square_input() {
        let matrix = DMatrix::<f64>::zeros(3, 2);

        assert!(matches!(
            find_components(&matrix, None),
            Err(Error::NotSquare { rows: 3, cols: 2 })
        ));
    }
}
