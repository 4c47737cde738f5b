//! Ant Colony Optimization (ACO).
//!
//! A colony of ants repeatedly builds candidate routes on a weighted
//! symmetric graph, guided by a learned pheromone trail and the
//! distance-based heuristic `1 / distance`. After each round the trail
//! evaporates and every successful ant reinforces its route in inverse
//! proportion to the route's length, so shorter routes grow more
//! attractive over time.
//!
//! # Key Types
//!
//! - [`Graph`]: Validated distance matrix with precomputed heuristics
//! - [`PheromoneTrail`]: Symmetric, non-negative trail matrix
//! - [`PathConstructor`]: Builds one route per ant via roulette-wheel selection
//! - [`TrailUpdater`]: Evaporation followed by deposition
//! - [`Colony`] / [`AcoRunner`]: Round loop and best-route tracking
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod construct;
mod graph;
mod runner;
mod trail;
mod types;
mod update;

pub use config::AcoConfig;
pub use construct::{roulette_select, PathConstructor};
pub use graph::Graph;
pub use runner::{AcoResult, AcoRunner, Colony, RoundReport, RunState};
pub use trail::PheromoneTrail;
pub use types::{AntOutcome, BestPath, Goal};
pub use update::TrailUpdater;
