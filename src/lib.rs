//! Lattice is a small toolkit for exploratory analysis of dense networks:
//! structural matrices (adjacency, degree, laplacian, modularity),
//! connected components and community-level aggregates, all over
//! [`nalgebra`] dense matrices.
//!
//! # Basic usage
//!
//! The core operations are free functions over adjacency matrices, which
//! can come from an edge-list file ([`load`]), a random generator
//! ([`random`]) or a [`Graph`](graph::Graph) built edge by edge. The
//! `Graph` type caches the matrices it derives until its edge set
//! changes.
//!
//! ```rust
//! use lattice::edge::Edge;
//! use lattice::graph::Graph;
//!
//! // Construct the graph instance.
//! let mut graph = Graph::new();
//!
//! // Insert some edges over 0-based node indices.
//! graph.insert(Edge::new(0, 1));
//! graph.insert(Edge::new(0, 2));
//!
//! // Everything is reachable from node 0.
//! assert_eq!(graph.components().len(), 1);
//!
//! // Matrices can be pretty printed...
//! println!("{}", graph.laplacian_matrix());
//! // ...outputs:
//! //  ┌          ┐
//! //  │  2 -1 -1 │
//! //  │ -1  1  0 │
//! //  │ -1  0  1 │
//! //  └          ┘
//! ```
//!
//! Community-aware measures take an explicit partition:
//!
//! ```rust
//! use lattice::graph::Graph;
//! use lattice::matrix::intercommunity_matrix;
//!
//! let mut graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//!
//! let score = graph.modularity(&[vec![0, 1], vec![2, 3]]).unwrap();
//! assert_eq!(score, 1.0);
//!
//! let adjacency = graph.adjacency_matrix();
//! let collapsed = intercommunity_matrix(&adjacency, &[vec![0, 1], vec![2, 3]]).unwrap();
//! assert_eq!(collapsed.nrows(), 2);
//! ```

pub mod components;
pub mod edge;
pub mod error;
pub mod graph;
pub mod load;
pub mod matrix;
pub mod random;

pub use error::{Error, Result};
