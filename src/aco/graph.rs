//! Static weighted graph with precomputed heuristic values.

use crate::error::{AcoError, Result};

/// Absolute tolerance for the symmetry check.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// An immutable, symmetric, weighted graph.
///
/// Nodes are identified by position in `[0, node_count)`. Off-diagonal
/// distances are strictly positive; `f64::INFINITY` marks a missing edge,
/// whose heuristic is zero so no ant ever traverses it.
///
/// # Examples
///
/// ```
/// use u_aco::aco::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0.0, 2.0, 4.0],
///     vec![2.0, 0.0, 1.0],
///     vec![4.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert!((graph.heuristic(0, 1) - 0.5).abs() < 1e-12);
/// assert_eq!(graph.heuristic(1, 1), 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    distances: Vec<Vec<f64>>,
    heuristics: Vec<Vec<f64>>,
}

impl Graph {
    /// Builds a graph from a full distance matrix.
    ///
    /// Fails if the matrix is empty, not square, not symmetric, has a
    /// non-zero diagonal, or has a non-positive off-diagonal entry.
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self> {
        validate_matrix(&distances)?;

        let n = distances.len();
        let heuristics = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { 0.0 } else { 1.0 / distances[i][j] })
                    .collect()
            })
            .collect();

        Ok(Self {
            distances,
            heuristics,
        })
    }

    /// Builds a sparse graph from undirected edges `(u, v, distance)`.
    ///
    /// Node pairs without an edge get an infinite distance. Listing the
    /// same pair twice keeps the last distance.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut distances = vec![vec![f64::INFINITY; node_count]; node_count];
        for (i, row) in distances.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for &(u, v, d) in edges {
            for node in [u, v] {
                if node >= node_count {
                    return Err(AcoError::NodeOutOfRange { node, node_count });
                }
            }
            distances[u][v] = d;
            distances[v][u] = d;
        }
        Self::new(distances)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance between `i` and `j`. Infinite if there is no edge.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i][j]
    }

    /// Heuristic desirability `1 / distance(i, j)`, zero on the diagonal
    /// and for missing edges.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    #[inline]
    pub fn heuristic(&self, i: usize, j: usize) -> f64 {
        self.heuristics[i][j]
    }

    /// Whether `i` and `j` are distinct and joined by an edge.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i != j && self.distances[i][j].is_finite()
    }

    /// Checks that `node` exists in this graph.
    pub fn check_node(&self, node: usize) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(AcoError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Sum of edge distances along consecutive nodes of `path`.
    ///
    /// Paths with fewer than two nodes have length zero.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.distances[w[0]][w[1]]).sum()
    }
}

fn validate_matrix(distances: &[Vec<f64>]) -> Result<()> {
    let n = distances.len();
    if n == 0 {
        return Err(AcoError::EmptyGraph);
    }

    for (row, entries) in distances.iter().enumerate() {
        if entries.len() != n {
            return Err(AcoError::NotSquare {
                row,
                len: entries.len(),
                expected: n,
            });
        }
    }

    for i in 0..n {
        let diag = distances[i][i];
        if diag != 0.0 {
            return Err(AcoError::NonZeroDiagonal {
                node: i,
                value: diag,
            });
        }

        for j in (i + 1)..n {
            let forward = distances[i][j];
            let backward = distances[j][i];

            // `!(x > 0)` also catches NaN.
            for (a, b, value) in [(i, j, forward), (j, i, backward)] {
                if !(value > 0.0) {
                    return Err(AcoError::NonPositiveDistance { i: a, j: b, value });
                }
            }

            let symmetric = if forward.is_infinite() || backward.is_infinite() {
                forward == backward
            } else {
                (forward - backward).abs() <= SYMMETRY_TOLERANCE
            };
            if !symmetric {
                return Err(AcoError::Asymmetric {
                    i,
                    j,
                    forward,
                    backward,
                });
            }
        }
    }

    Ok(())
}
