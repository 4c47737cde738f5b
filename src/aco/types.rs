//! Goals and per-ant outcomes.

use super::graph::Graph;
use crate::error::Result;

/// What each ant tries to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// A simple path from `start` to `end`.
    Path {
        /// Node every ant starts from.
        start: usize,
        /// Node that completes the path.
        end: usize,
    },

    /// A closed tour visiting every node once and returning to its start.
    ///
    /// With `start: None` each ant picks its start node uniformly at random.
    Tour {
        /// Fixed start node, or `None` for a random start per ant.
        start: Option<usize>,
    },
}

impl Goal {
    /// Shortcut for [`Goal::Path`].
    pub fn path(start: usize, end: usize) -> Self {
        Goal::Path { start, end }
    }

    /// Checks that every node named by the goal exists in `graph`.
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        match *self {
            Goal::Path { start, end } => {
                graph.check_node(start)?;
                graph.check_node(end)
            }
            Goal::Tour { start: Some(start) } => graph.check_node(start),
            Goal::Tour { start: None } => Ok(()),
        }
    }
}

/// The result of one ant's construction in one round.
#[derive(Debug, Clone, PartialEq)]
pub enum AntOutcome {
    /// The ant reached its goal.
    Completed {
        /// Visited nodes in order, from start to goal.
        path: Vec<usize>,
        /// Sum of edge distances along `path`.
        length: f64,
    },

    /// The ant hit a dead end before reaching its goal.
    Failed {
        /// Nodes visited before getting stuck.
        partial: Vec<usize>,
    },
}

impl AntOutcome {
    /// Length of a completed route, `None` for a dead end.
    pub fn length(&self) -> Option<f64> {
        match self {
            AntOutcome::Completed { length, .. } => Some(*length),
            AntOutcome::Failed { .. } => None,
        }
    }

    /// Nodes visited, complete or not.
    pub fn nodes(&self) -> &[usize] {
        match self {
            AntOutcome::Completed { path, .. } => path,
            AntOutcome::Failed { partial } => partial,
        }
    }

    /// Whether the ant reached its goal.
    pub fn is_completed(&self) -> bool {
        matches!(self, AntOutcome::Completed { .. })
    }
}

/// Shortest complete route seen during a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestPath {
    /// Visited nodes in order.
    pub path: Vec<usize>,
    /// Total length.
    pub length: f64,
    /// Round (1-based) in which it was found.
    pub round: usize,
}
