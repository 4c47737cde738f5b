//! Probabilistic path construction for a single ant.
//!
//! An ant repeatedly moves from its current node to an unvisited neighbor
//! chosen by roulette-wheel selection over
//! `level(i, j)^alpha * heuristic(i, j)^beta`, until it reaches its goal
//! or runs out of eligible neighbors.

use super::graph::Graph;
use super::trail::PheromoneTrail;
use super::types::{AntOutcome, Goal};
use rand::Rng;

/// Builds one route per call against a fixed graph and trail snapshot.
///
/// The constructor only reads the trail, so any number of ants may share
/// one constructor within a round.
#[derive(Debug, Clone, Copy)]
pub struct PathConstructor<'a> {
    graph: &'a Graph,
    trail: &'a PheromoneTrail,
    alpha: f64,
    beta: f64,
}

impl<'a> PathConstructor<'a> {
    /// Creates a constructor.
    ///
    /// # Panics
    /// Panics if the trail and graph disagree on the node count.
    pub fn new(graph: &'a Graph, trail: &'a PheromoneTrail, alpha: f64, beta: f64) -> Self {
        assert_eq!(
            graph.node_count(),
            trail.node_count(),
            "trail and graph must cover the same nodes"
        );
        Self {
            graph,
            trail,
            alpha,
            beta,
        }
    }

    /// Desirability of moving from `from` to `to`.
    pub fn desirability(&self, from: usize, to: usize) -> f64 {
        self.trail.level(from, to).powf(self.alpha) * self.graph.heuristic(from, to).powf(self.beta)
    }

    /// Builds one route for `goal`.
    ///
    /// The goal's nodes must exist in the graph; see [`Goal::validate`].
    pub fn construct<R: Rng>(&self, goal: Goal, rng: &mut R) -> AntOutcome {
        match goal {
            Goal::Path { start, end } => self.construct_path(start, end, rng),
            Goal::Tour { start } => {
                let start = start.unwrap_or_else(|| rng.random_range(0..self.graph.node_count()));
                self.construct_tour(start, rng)
            }
        }
    }

    fn construct_path<R: Rng>(&self, start: usize, end: usize, rng: &mut R) -> AntOutcome {
        let mut visited = vec![false; self.graph.node_count()];
        visited[start] = true;
        let mut path = vec![start];
        let mut current = start;
        let mut candidates = Vec::with_capacity(self.graph.node_count());

        while current != end {
            match self.next_node(current, &visited, &mut candidates, rng) {
                Some(next) => {
                    visited[next] = true;
                    path.push(next);
                    current = next;
                }
                None => return AntOutcome::Failed { partial: path },
            }
        }

        // Recomputed from the matrix rather than accumulated per step.
        let length = self.graph.path_length(&path);
        AntOutcome::Completed { path, length }
    }

    fn construct_tour<R: Rng>(&self, start: usize, rng: &mut R) -> AntOutcome {
        let n = self.graph.node_count();
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n + 1);
        path.push(start);
        let mut current = start;
        let mut candidates = Vec::with_capacity(n);

        while path.len() < n {
            match self.next_node(current, &visited, &mut candidates, rng) {
                Some(next) => {
                    visited[next] = true;
                    path.push(next);
                    current = next;
                }
                None => return AntOutcome::Failed { partial: path },
            }
        }

        if n > 1 {
            if !self.graph.has_edge(current, start) {
                return AntOutcome::Failed { partial: path };
            }
            path.push(start);
        }

        let length = self.graph.path_length(&path);
        AntOutcome::Completed { path, length }
    }

    /// Picks the next node, or `None` at a dead end.
    fn next_node<R: Rng>(
        &self,
        current: usize,
        visited: &[bool],
        candidates: &mut Vec<(usize, f64)>,
        rng: &mut R,
    ) -> Option<usize> {
        candidates.clear();
        candidates.extend(
            (0..self.graph.node_count())
                .filter(|&j| !visited[j] && self.graph.has_edge(current, j))
                .map(|j| (j, self.desirability(current, j))),
        );
        roulette_select(candidates, rng)
    }
}

/// Roulette-wheel selection over `(item, weight)` pairs.
///
/// Draws `r` uniformly from `[0, total)` and subtracts weights in slice
/// order until `r <= 0`. Zero-weight items are never chosen. Returns
/// `None` if no item has positive weight.
pub fn roulette_select<R: Rng>(candidates: &[(usize, f64)], rng: &mut R) -> Option<usize> {
    let total: f64 = candidates
        .iter()
        .map(|&(_, w)| w)
        .filter(|&w| w > 0.0)
        .sum();

    if !(total > 0.0) {
        return None;
    }

    if total.is_finite() {
        return spin(candidates, total, 1.0, rng);
    }

    let dominant: Vec<usize> = candidates
        .iter()
        .filter(|&&(_, w)| w.is_infinite())
        .map(|&(j, _)| j)
        .collect();
    if !dominant.is_empty() {
        // Infinite weights dominate equally.
        return Some(dominant[rng.random_range(0..dominant.len())]);
    }

    // Finite weights whose sum overflowed: rescale by the largest one.
    let scale = candidates
        .iter()
        .map(|&(_, w)| w)
        .filter(|&w| w > 0.0)
        .fold(0.0, f64::max);
    let total: f64 = candidates
        .iter()
        .map(|&(_, w)| w)
        .filter(|&w| w > 0.0)
        .map(|w| w / scale)
        .sum();
    spin(candidates, total, scale, rng)
}

/// One turn of the wheel over weights divided by `scale`, summing to `total`.
fn spin<R: Rng>(candidates: &[(usize, f64)], total: f64, scale: f64, rng: &mut R) -> Option<usize> {
    let mut remainder = rng.random_range(0.0..total);
    let mut last_positive = None;
    for &(item, weight) in candidates {
        if weight <= 0.0 {
            continue;
        }
        remainder -= weight / scale;
        if remainder <= 0.0 {
            return Some(item);
        }
        last_positive = Some(item);
    }

    // Rounding can leave a tiny positive remainder.
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn five_node() -> Graph {
        Graph::new(vec![
            vec![0.0, 10.0, 20.0, 30.0, 15.0],
            vec![10.0, 0.0, 12.0, 5.0, 25.0],
            vec![20.0, 12.0, 0.0, 18.0, 8.0],
            vec![30.0, 5.0, 18.0, 0.0, 22.0],
            vec![15.0, 25.0, 8.0, 22.0, 0.0],
        ])
        .unwrap()
    }

    fn is_distinct(path: &[usize]) -> bool {
        let mut seen = path.to_vec();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == path.len()
    }

    #[test]
    fn test_start_equals_end() {
        let g = five_node();
        let trail = PheromoneTrail::new(5, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 2.0);

        let mut rng = create_rng(1);
        let before: u64 = create_rng(1).random();
        let outcome = ctor.construct(Goal::path(3, 3), &mut rng);
        assert_eq!(
            outcome,
            AntOutcome::Completed {
                path: vec![3],
                length: 0.0
            }
        );
        // No sampling happened.
        assert_eq!(rng.random::<u64>(), before);
    }

    #[test]
    fn test_path_reaches_end() {
        let g = five_node();
        let trail = PheromoneTrail::new(5, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 2.0);
        let mut rng = create_rng(42);

        for _ in 0..200 {
            match ctor.construct(Goal::path(0, 4), &mut rng) {
                AntOutcome::Completed { path, length } => {
                    assert_eq!(path[0], 0);
                    assert_eq!(*path.last().unwrap(), 4);
                    assert!(path.len() <= 5);
                    assert!(is_distinct(&path));
                    assert!((length - g.path_length(&path)).abs() < 1e-9);
                }
                AntOutcome::Failed { .. } => panic!("complete graph has no dead ends"),
            }
        }
    }

    #[test]
    fn test_dead_end_on_disconnected_graph() {
        // 0-1-2 chain, 3-4 separate.
        let g = Graph::from_edges(5, &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]).unwrap();
        let trail = PheromoneTrail::new(5, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 2.0);
        let mut rng = create_rng(7);

        let outcome = ctor.construct(Goal::path(0, 4), &mut rng);
        assert_eq!(outcome, AntOutcome::Failed { partial: vec![0, 1, 2] });
        assert_eq!(outcome.length(), None);
    }

    #[test]
    fn test_dead_end_by_visited_exhaustion() {
        // Node 3 hangs off node 1. Taking 0 -> 1 -> 2 strands the ant at 2.
        let g = Graph::from_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0), (1, 3, 1.0)]).unwrap();
        let trail = PheromoneTrail::new(4, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 1.0);
        let mut rng = create_rng(3);

        let mut completed = 0;
        let mut failed = 0;
        for _ in 0..500 {
            match ctor.construct(Goal::path(0, 3), &mut rng) {
                AntOutcome::Completed { path, .. } => {
                    assert!(path == vec![0, 1, 3] || path == vec![0, 2, 1, 3]);
                    completed += 1;
                }
                AntOutcome::Failed { partial } => {
                    assert_eq!(partial, vec![0, 1, 2]);
                    failed += 1;
                }
            }
        }
        assert!(completed > 0);
        assert!(failed > 0);
    }

    #[test]
    fn test_zero_beta_never_uses_missing_edge() {
        let g = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let trail = PheromoneTrail::new(3, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 0.0);
        let mut rng = create_rng(11);
        for _ in 0..50 {
            let outcome = ctor.construct(Goal::path(0, 2), &mut rng);
            assert_eq!(outcome.nodes(), &[0, 1, 2]);
        }
    }

    #[test]
    fn test_tour_visits_every_node() {
        let g = five_node();
        let trail = PheromoneTrail::new(5, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 5.0);
        let mut rng = create_rng(5);

        for _ in 0..100 {
            let AntOutcome::Completed { path, length } =
                ctor.construct(Goal::Tour { start: None }, &mut rng)
            else {
                panic!("complete graph tour cannot fail");
            };
            assert_eq!(path.len(), 6);
            assert_eq!(path[0], path[5]);
            assert!(is_distinct(&path[..5]));
            assert!((length - g.path_length(&path)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tour_fails_without_closing_edge() {
        let g = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let trail = PheromoneTrail::new(3, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 1.0);
        let mut rng = create_rng(2);
        let outcome = ctor.construct(Goal::Tour { start: Some(0) }, &mut rng);
        assert_eq!(outcome, AntOutcome::Failed { partial: vec![0, 1, 2] });
    }

    #[test]
    fn test_single_node_tour() {
        let g = Graph::new(vec![vec![0.0]]).unwrap();
        let trail = PheromoneTrail::new(1, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 1.0);
        let mut rng = create_rng(0);
        assert_eq!(
            ctor.construct(Goal::Tour { start: None }, &mut rng),
            AntOutcome::Completed {
                path: vec![0],
                length: 0.0
            }
        );
    }

    #[test]
    fn test_desirability_uses_exponents() {
        let g = five_node();
        let mut trail = PheromoneTrail::new(5, 1.0);
        trail.deposit(0, 1, 3.0);
        let ctor = PathConstructor::new(&g, &trail, 2.0, 1.0);
        assert!((ctor.desirability(0, 1) - 16.0 * 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_roulette_empty_and_zero() {
        let mut rng = create_rng(0);
        assert_eq!(roulette_select(&[], &mut rng), None);
        assert_eq!(roulette_select(&[(0, 0.0), (1, 0.0)], &mut rng), None);
    }

    #[test]
    fn test_roulette_skips_zero_weight() {
        let mut rng = create_rng(0);
        for _ in 0..200 {
            let pick = roulette_select(&[(0, 0.0), (1, 2.0), (2, 0.0)], &mut rng);
            assert_eq!(pick, Some(1));
        }
    }

    #[test]
    fn test_roulette_infinite_weights() {
        let mut rng = create_rng(0);
        for _ in 0..50 {
            let pick = roulette_select(&[(0, 1.0), (1, f64::INFINITY), (2, 3.0)], &mut rng);
            assert_eq!(pick, Some(1));
        }
    }

    #[test]
    fn test_roulette_finite_weights_with_overflowing_sum() {
        let mut rng = create_rng(0);
        let mut counts = [0usize; 2];
        for _ in 0..2_000 {
            let pick = roulette_select(&[(0, 1e308), (1, 1e308)], &mut rng).unwrap();
            counts[pick] += 1;
        }
        assert!(counts[0] > 0 && counts[1] > 0, "got {counts:?}");
    }

    #[test]
    fn test_tiny_distances_do_not_overflow_selection() {
        let g = Graph::new(vec![
            vec![0.0, 1e-308, 1e-308],
            vec![1e-308, 0.0, 1.0],
            vec![1e-308, 1.0, 0.0],
        ])
        .unwrap();
        let trail = PheromoneTrail::new(3, 1.0);
        let ctor = PathConstructor::new(&g, &trail, 1.0, 1.0);
        let mut rng = create_rng(9);
        for _ in 0..50 {
            let outcome = ctor.construct(Goal::path(0, 2), &mut rng);
            assert!(outcome.is_completed());
        }
    }

    #[test]
    fn test_roulette_proportional() {
        let mut rng = create_rng(123);
        let mut counts = [0usize; 2];
        let trials = 20_000;
        for _ in 0..trials {
            let pick = roulette_select(&[(0, 1.0), (1, 3.0)], &mut rng).unwrap();
            counts[pick] += 1;
        }
        let share = counts[1] as f64 / trials as f64;
        assert!((share - 0.75).abs() < 0.02, "expected ~0.75, got {share}");
    }

    proptest! {
        #[test]
        fn prop_paths_are_simple_and_lengths_exact(
            seed in any::<u64>(),
            start in 0usize..5,
            end in 0usize..5,
            deposits in proptest::collection::vec((0usize..5, 0usize..5, 0.01f64..20.0), 0..10),
        ) {
            let g = five_node();
            let mut trail = PheromoneTrail::new(5, 1.0);
            for (u, v, amount) in deposits {
                trail.deposit(u, v, amount);
            }
            let ctor = PathConstructor::new(&g, &trail, 1.0, 2.0);
            let mut rng = create_rng(seed);

            let outcome = ctor.construct(Goal::path(start, end), &mut rng);
            let nodes = outcome.nodes();
            prop_assert_eq!(nodes[0], start);
            prop_assert!(nodes.len() <= 5);
            prop_assert!(is_distinct(nodes));
            if let AntOutcome::Completed { path, length } = &outcome {
                prop_assert_eq!(*path.last().unwrap(), end);
                prop_assert!((length - g.path_length(path)).abs() < 1e-9);
            }
        }
    }
}
