//! Static scoring of a pursuer/evader/goal configuration.

use crate::grid::Position;

/// Score is from the evader's point of view: higher is better for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    /// Weight on pursuer-evader distance.
    pub distance_weight: i32,
    /// Weight on evader-goal distance.
    pub goal_weight: i32,
    /// Returned when the pursuer stands on the evader.
    pub caught_score: i32,
    /// Returned when the evader stands on the goal.
    pub goal_score: i32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            distance_weight: 50,
            goal_weight: 10,
            caught_score: -10_000,
            goal_score: 10_000,
        }
    }
}

impl Evaluator {
    pub fn evaluate(&self, pursuer: Position, evader: Position, goal: Position) -> i32 {
        // Capture is checked first, so capture on the goal still loses.
        if pursuer == evader {
            return self.caught_score;
        }
        if evader == goal {
            return self.goal_score;
        }

        let threat = pursuer.manhattan(&evader) as i32;
        let remaining = evader.manhattan(&goal) as i32;
        threat
            .saturating_mul(self.distance_weight)
            .saturating_sub(remaining.saturating_mul(self.goal_weight))
    }
}
