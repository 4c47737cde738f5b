//! Pheromone trail matrix.

/// Symmetric matrix of pheromone levels, one per node pair.
///
/// Levels start at a uniform constant and only change through
/// [`evaporate`](Self::evaporate) and [`deposit`](Self::deposit), which
/// keep every entry non-negative and the matrix symmetric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneTrail {
    levels: Vec<Vec<f64>>,
}

impl PheromoneTrail {
    /// Creates a `node_count x node_count` trail with every level set to
    /// `initial`.
    pub fn new(node_count: usize, initial: f64) -> Self {
        Self {
            levels: vec![vec![initial; node_count]; node_count],
        }
    }

    /// Number of nodes covered by the trail.
    pub fn node_count(&self) -> usize {
        self.levels.len()
    }

    /// Pheromone level on edge `(i, j)`.
    #[inline]
    pub fn level(&self, i: usize, j: usize) -> f64 {
        self.levels[i][j]
    }

    /// Multiplies every level by `1 - rate`.
    ///
    /// # Panics
    /// Panics if `rate` is outside `[0, 1)`.
    pub fn evaporate(&mut self, rate: f64) {
        assert!(
            (0.0..1.0).contains(&rate),
            "evaporation rate must be in [0, 1), got {rate}"
        );
        let keep = 1.0 - rate;
        for row in &mut self.levels {
            for level in row.iter_mut() {
                *level *= keep;
            }
        }
    }

    /// Adds `amount` to both `(u, v)` and `(v, u)`.
    ///
    /// Levels saturate at `f64::MAX` and never become infinite.
    ///
    /// # Panics
    /// Panics if `amount` is not strictly positive and finite.
    pub fn deposit(&mut self, u: usize, v: usize, amount: f64) {
        assert!(
            amount > 0.0 && amount.is_finite(),
            "deposit amount must be positive and finite, got {amount}"
        );
        self.levels[u][v] = (self.levels[u][v] + amount).min(f64::MAX);
        if u != v {
            self.levels[v][u] = (self.levels[v][u] + amount).min(f64::MAX);
        }
    }

    /// Deposits `amount` on every edge between consecutive nodes of `path`.
    pub(crate) fn reinforce(&mut self, path: &[usize], amount: f64) {
        for w in path.windows(2) {
            self.deposit(w[0], w[1], amount);
        }
    }

    /// Whether `level(i, j) == level(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.node_count();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.levels[i][j] == self.levels[j][i]))
    }

    /// Smallest level in the matrix, or `None` for an empty trail.
    pub fn min_level(&self) -> Option<f64> {
        self.levels
            .iter()
            .flatten()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}
