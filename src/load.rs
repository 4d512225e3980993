//! Edge-list parsing and adjacency-matrix construction.
//!
//! Loading is split into two explicit steps: [`parse_edge_list`] turns the
//! raw text into node-index pairs and the loaders build a matrix from
//! them. The optional [`write_edge_list`] export is a third, separate step
//! and is never performed implicitly.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Parses an edge list: one edge per line, two whitespace-separated
/// 1-based node ids.
///
/// Blank lines are skipped. The returned pairs are translated to 0-based
/// indices, ready to index a matrix.
///
/// # Errors
///
/// A line holding anything other than exactly two positive integers is
/// reported as [`Error::ParseEdge`] with its 1-based line number.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use lattice::load::parse_edge_list;
///
/// let edges = parse_edge_list(Cursor::new("1 2\n2 3\n")).unwrap();
/// assert_eq!(edges, vec![(0, 1), (1, 2)]);
/// ```
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Vec<(usize, usize)>> {
    let mut edges = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (a, b) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(Error::ParseEdge { line: number + 1 }),
        };

        let a: usize = a.parse().map_err(|_| Error::ParseEdge { line: number + 1 })?;
        let b: usize = b.parse().map_err(|_| Error::ParseEdge { line: number + 1 })?;

        // Ids are 1-based on disk, zero is as malformed as a stray token.
        if a == 0 || b == 0 {
            return Err(Error::ParseEdge { line: number + 1 });
        }

        edges.push((a - 1, b - 1));
    }

    Ok(edges)
}

/// Loads an edge-list file into a 0/1 adjacency matrix.
///
/// The initial dimension is the largest node id in the file, capped by
/// `max_nodes`. The cap bounds the load twice over: at most `max_nodes`
/// edges are accepted, and edges referencing an id greater than
/// `max_nodes` are dropped without counting toward the edge budget.
/// Should an accepted edge still land beyond the current bound, the
/// matrix grows with zero padding to fit it.
///
/// # Errors
///
/// An unreadable file surfaces as [`Error::Io`], a malformed line as
/// [`Error::ParseEdge`].
pub fn load_adjacency<P: AsRef<Path>>(path: P, max_nodes: usize) -> Result<DMatrix<f64>> {
    let edges = parse_edge_list(BufReader::new(File::open(path)?))?;

    let largest = edges.iter().map(|&(a, b)| a.max(b) + 1).max().unwrap_or(0);
    let dim = largest.min(max_nodes);
    let mut matrix = DMatrix::<f64>::zeros(dim, dim);

    let mut accepted = 0;
    for (a, b) in edges {
        if accepted >= max_nodes {
            break;
        }

        // 0-based here, so an index at or past the cap means a 1-based id
        // greater than it.
        if a >= max_nodes || b >= max_nodes {
            continue;
        }

        accepted += 1;
        grow_to_fit(&mut matrix, a.max(b) + 1);
        matrix[(a, b)] = 1.0;
        matrix[(b, a)] = 1.0;
    }

    Ok(matrix)
}

/// Loads an edge-list file into a weighted multigraph adjacency matrix.
///
/// Behaves like [`load_adjacency`] except repeated edges accumulate their
/// weight instead of overwriting it, and node ids are not capped: the
/// matrix grows to fit the largest id seen.
pub fn load_multigraph_adjacency<P: AsRef<Path>>(path: P) -> Result<DMatrix<f64>> {
    let edges = parse_edge_list(BufReader::new(File::open(path)?))?;

    let mut matrix = DMatrix::<f64>::zeros(0, 0);

    for (a, b) in edges {
        grow_to_fit(&mut matrix, a.max(b) + 1);
        matrix[(a, b)] += 1.0;
        matrix[(b, a)] += 1.0;
    }

    Ok(matrix)
}

/// Writes a parsed edge list as comma-separated 1-based id pairs, one
/// edge per line.
pub fn write_edge_list<W: Write>(mut writer: W, edges: &[(usize, usize)]) -> Result<()> {
    for &(a, b) in edges {
        writeln!(writer, "{},{}", a + 1, b + 1)?;
    }

    Ok(())
}

/// Grows a square matrix with zero padding to hold at least `dim` nodes.
fn grow_to_fit(matrix: &mut DMatrix<f64>, dim: usize) {
    if dim > matrix.nrows() {
        *matrix = matrix.clone().resize(dim, dim, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use nalgebra::dmatrix;

    use crate::components::find_components;

    use super::*;

    /// Writes the contents to a file in a fresh temporary directory.
    fn edge_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("edges.txt");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parse_translates_to_zero_based() {
        let edges = parse_edge_list(Cursor::new("1 2\n2 3\n3 4\n")).unwrap();

        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let edges = parse_edge_list(Cursor::new("1 2\n\n2 3\n")).unwrap();

        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn parse_rejects_wrong_token_count() {
        let result = parse_edge_list(Cursor::new("1 2\n1 2 3\n"));

        assert!(matches!(result, Err(Error::ParseEdge { line: 2 })));
    }

    #[test]
    fn parse_rejects_non_integer_tokens() {
        let result = parse_edge_list(Cursor::new("a b\n"));

        assert!(matches!(result, Err(Error::ParseEdge { line: 1 })));
    }

    #[test]
    fn parse_rejects_zero_ids() {
        let result = parse_edge_list(Cursor::new("0 1\n"));

        assert!(matches!(result, Err(Error::ParseEdge { line: 1 })));
    }

    #[test]
    fn load_four_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = edge_file(&dir, "1 2\n2 3\n3 4\n4 1\n");

        let matrix = load_adjacency(path, 10).unwrap();

        assert_eq!(
            matrix,
            dmatrix![0.0, 1.0, 0.0, 1.0;
                     1.0, 0.0, 1.0, 0.0;
                     0.0, 1.0, 0.0, 1.0;
                     1.0, 0.0, 1.0, 0.0]
        );

        // Every node has degree two and the cycle is a single component.
        for row in matrix.row_iter() {
            assert_eq!(row.sum(), 2.0);
        }

        let components = find_components(&matrix, None).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 4);
    }

    #[test]
    fn load_caps_node_ids_and_edge_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = edge_file(&dir, "1 2\n2 3\n3 4\n4 1\n");

        // With the cap at two only the (1, 2) edge survives; the others
        // all reference node 3 or 4 and are dropped.
        let matrix = load_adjacency(path, 2).unwrap();

        assert_eq!(
            matrix,
            dmatrix![0.0, 1.0;
                     1.0, 0.0]
        );

        let components = find_components(&matrix, None).unwrap();
        assert_eq!(components, vec![vec![0, 1]]);
    }

    #[test]
    fn load_dropped_edges_spare_the_budget() {
        let dir = tempfile::tempdir().unwrap();
        // Two droppable edges before two acceptable ones.
        let path = edge_file(&dir, "1 9\n9 2\n1 2\n2 3\n");

        let matrix = load_adjacency(path, 3).unwrap();

        assert_eq!(
            matrix,
            dmatrix![0.0, 1.0, 0.0;
                     1.0, 0.0, 1.0;
                     0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn load_multigraph_accumulates_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = edge_file(&dir, "1 2\n1 2\n2 3\n");

        let matrix = load_multigraph_adjacency(path).unwrap();

        assert_eq!(
            matrix,
            dmatrix![0.0, 2.0, 0.0;
                     2.0, 0.0, 1.0;
                     0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn load_multigraph_grows_to_largest_id() {
        let dir = tempfile::tempdir().unwrap();
        // The ids are sparse: the matrix must cover up to node 5 even
        // though only three distinct nodes appear.
        let path = edge_file(&dir, "1 2\n2 6\n");

        let matrix = load_multigraph_adjacency(path).unwrap();

        assert_eq!(matrix.nrows(), 6);
        assert_eq!(matrix[(0, 1)], 1.0);
        assert_eq!(matrix[(1, 5)], 1.0);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        assert!(matches!(load_adjacency(path, 10), Err(Error::Io(_))));
    }

    #[test]
    fn export_writes_one_based_pairs() {
        let mut out = Vec::new();
        write_edge_list(&mut out, &[(0, 1), (1, 2)]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1,2\n2,3\n");
    }
}
