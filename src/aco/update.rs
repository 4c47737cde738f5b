//! Per-round pheromone update.

use super::trail::PheromoneTrail;
use super::types::AntOutcome;

/// Applies evaporation and then deposition to a trail once per round.
#[derive(Debug, Clone, Copy)]
pub struct TrailUpdater {
    evaporation_rate: f64,
    deposit_constant: f64,
}

impl TrailUpdater {
    /// Creates an updater. `evaporation_rate` must be in `[0, 1)` and
    /// `deposit_constant` positive.
    pub fn new(evaporation_rate: f64, deposit_constant: f64) -> Self {
        Self {
            evaporation_rate,
            deposit_constant,
        }
    }

    /// Pheromone each edge of a route of `length` receives.
    ///
    /// Capped at `f64::MAX` for routes short enough to overflow `Q / length`.
    pub fn deposit_amount(&self, length: f64) -> f64 {
        (self.deposit_constant / length).min(f64::MAX)
    }

    /// Evaporates every edge, then deposits `Q / length` along every
    /// completed route. Failed ants contribute nothing.
    ///
    /// Returns the number of routes that deposited.
    pub fn apply(&self, trail: &mut PheromoneTrail, outcomes: &[AntOutcome]) -> usize {
        trail.evaporate(self.evaporation_rate);

        let mut reinforced = 0;
        for outcome in outcomes {
            if let AntOutcome::Completed { path, length } = outcome {
                // Zero-length routes (start == end) have no edges to mark.
                if path.len() < 2 {
                    continue;
                }
                trail.reinforce(path, self.deposit_amount(*length));
                reinforced += 1;
            }
        }
        reinforced
    }
}
