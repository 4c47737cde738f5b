//! ACO execution loop.
//!
//! [`Colony`] owns the mutable state of one run (trail, RNG, best route)
//! and advances it one round at a time. [`AcoRunner`] drives a colony
//! until its round budget is spent.

use super::config::AcoConfig;
use super::construct::PathConstructor;
use super::graph::Graph;
use super::trail::PheromoneTrail;
use super::types::{AntOutcome, BestPath, Goal};
use super::update::TrailUpdater;
use crate::error::Result;
use crate::random::{rng_from_option, split_streams};
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Whether a colony has rounds left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Rounds remain.
    Running,
    /// The round budget is exhausted.
    Done,
}

/// What happened in one round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: usize,
    /// One outcome per ant, in ant order.
    pub outcomes: Vec<AntOutcome>,
    /// Ants that reached the goal.
    pub completed: usize,
    /// Ants that dead-ended.
    pub failed: usize,
    /// Best length over the whole run after this round.
    pub best_length: Option<f64>,
    /// Whether this round produced a new best route.
    pub improved: bool,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_length {
            Some(length) => write!(f, "Round {}: best length = {length:.2}", self.round),
            None => write!(f, "Round {}: no path yet", self.round),
        }
    }
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest complete route found, or `None` if every ant failed.
    pub best: Option<BestPath>,

    /// Number of rounds executed.
    pub rounds: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best length after each round (`None` until a route is found).
    pub length_history: Vec<Option<f64>>,

    /// Total completed constructions across all rounds.
    pub completed_ants: usize,

    /// Total dead-ended constructions across all rounds.
    pub failed_ants: usize,
}

impl AcoResult {
    /// Length of the best route, if any.
    pub fn best_length(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.length)
    }

    /// Nodes of the best route, if any.
    pub fn best_path(&self) -> Option<&[usize]> {
        self.best.as_ref().map(|b| b.path.as_slice())
    }
}

impl fmt::Display for AcoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.best {
            None => write!(f, "no path found"),
            Some(best) => {
                let nodes: Vec<String> = best.path.iter().map(|n| n.to_string()).collect();
                write!(f, "{} (length {:.2})", nodes.join(" -> "), best.length)
            }
        }
    }
}

/// State of one optimization run over a borrowed graph.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, Colony, Goal, Graph, RunState};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]).unwrap();
/// let config = AcoConfig::default().with_max_rounds(5).with_seed(1);
/// let mut colony = Colony::new(&graph, Goal::path(0, 2), &config).unwrap();
///
/// while let Some(report) = colony.step() {
///     assert_eq!(report.completed + report.failed, config.num_ants);
/// }
/// assert_eq!(colony.state(), RunState::Done);
/// assert_eq!(colony.best().unwrap().length, 2.0);
/// ```
#[derive(Debug)]
pub struct Colony<'a> {
    graph: &'a Graph,
    goal: Goal,
    config: AcoConfig,
    trail: PheromoneTrail,
    updater: TrailUpdater,
    rng: StdRng,
    best: Option<BestPath>,
    round: usize,
    length_history: Vec<Option<f64>>,
    completed_ants: usize,
    failed_ants: usize,
}

impl<'a> Colony<'a> {
    /// Validates the inputs and sets up a fresh trail.
    pub fn new(graph: &'a Graph, goal: Goal, config: &AcoConfig) -> Result<Self> {
        config.validate()?;
        goal.validate(graph)?;

        Ok(Self {
            graph,
            goal,
            config: config.clone(),
            trail: PheromoneTrail::new(graph.node_count(), config.initial_pheromone),
            updater: TrailUpdater::new(config.evaporation_rate, config.deposit_constant),
            rng: rng_from_option(config.seed),
            best: None,
            round: 0,
            length_history: Vec::with_capacity(config.max_rounds),
            completed_ants: 0,
            failed_ants: 0,
        })
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        if self.round < self.config.max_rounds {
            RunState::Running
        } else {
            RunState::Done
        }
    }

    /// Rounds executed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Current trail.
    pub fn trail(&self) -> &PheromoneTrail {
        &self.trail
    }

    /// Best route so far.
    pub fn best(&self) -> Option<&BestPath> {
        self.best.as_ref()
    }

    /// Runs one round: construct, update the trail, track the best.
    ///
    /// Returns `None` once the colony is [`RunState::Done`].
    pub fn step(&mut self) -> Option<RoundReport> {
        if self.state() == RunState::Done {
            return None;
        }
        self.round += 1;

        let outcomes = self.construct_round();
        // Every ant has finished before the trail changes.
        self.updater.apply(&mut self.trail, &outcomes);

        let completed = outcomes.iter().filter(|o| o.is_completed()).count();
        let failed = outcomes.len() - completed;
        self.completed_ants += completed;
        self.failed_ants += failed;

        let improved = self.track_best(&outcomes);
        let best_length = self.best.as_ref().map(|b| b.length);
        self.length_history.push(best_length);

        debug!(
            round = self.round,
            completed,
            failed,
            best_length = ?best_length,
            "round finished"
        );
        if completed == 0 {
            warn!(round = self.round, "every ant dead-ended this round");
        }
        if self.config.log_interval > 0 && self.round % self.config.log_interval == 0 {
            info!(round = self.round, best_length = ?best_length, "progress");
        }

        Some(RoundReport {
            round: self.round,
            outcomes,
            completed,
            failed,
            best_length,
            improved,
        })
    }

    /// Consumes the colony into its final result.
    pub fn into_result(self, cancelled: bool) -> AcoResult {
        AcoResult {
            best: self.best,
            rounds: self.round,
            cancelled,
            length_history: self.length_history,
            completed_ants: self.completed_ants,
            failed_ants: self.failed_ants,
        }
    }

    fn construct_round(&mut self) -> Vec<AntOutcome> {
        let streams = split_streams(&mut self.rng, self.config.num_ants);
        let ctor = PathConstructor::new(
            self.graph,
            &self.trail,
            self.config.alpha,
            self.config.beta,
        );
        let goal = self.goal;

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return streams
                .into_par_iter()
                .map(|mut rng| ctor.construct(goal, &mut rng))
                .collect();
        }

        streams
            .into_iter()
            .map(|mut rng| ctor.construct(goal, &mut rng))
            .collect()
    }

    /// Replaces the best route only with a strictly shorter one.
    fn track_best(&mut self, outcomes: &[AntOutcome]) -> bool {
        let mut improved = false;
        for outcome in outcomes {
            if let AntOutcome::Completed { path, length } = outcome {
                if self.best.as_ref().is_none_or(|b| *length < b.length) {
                    info!(round = self.round, length, path = ?path, "new best route");
                    self.best = Some(BestPath {
                        path: path.clone(),
                        length: *length,
                        round: self.round,
                    });
                    improved = true;
                }
            }
        }
        improved
    }
}

/// Executes the ACO loop.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner, Goal, Graph};
///
/// let graph = Graph::new(vec![
///     vec![0.0, 10.0, 20.0, 30.0, 15.0],
///     vec![10.0, 0.0, 12.0, 5.0, 25.0],
///     vec![20.0, 12.0, 0.0, 18.0, 8.0],
///     vec![30.0, 5.0, 18.0, 0.0, 22.0],
///     vec![15.0, 25.0, 8.0, 22.0, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&graph, Goal::path(0, 4), &config).unwrap();
/// assert!(result.best_length().unwrap() <= 15.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO for the configured number of rounds.
    pub fn run(graph: &Graph, goal: Goal, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_with_cancel(graph, goal, config, None)
    }

    /// Runs ACO with an optional cancellation token, checked before each round.
    pub fn run_with_cancel(
        graph: &Graph,
        goal: Goal,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        let mut colony = Colony::new(graph, goal, config)?;
        let mut cancelled = false;

        while colony.state() == RunState::Running {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            colony.step();
        }

        let result = colony.into_result(cancelled);
        match result.best_length() {
            Some(length) => info!(rounds = result.rounds, length, "run finished"),
            None => info!(rounds = result.rounds, "run finished without a path"),
        }
        Ok(result)
    }
}
