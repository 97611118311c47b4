use costgrid_core::{CostGrid, Position};

/// Reported cost of an unreachable goal, as printed by drivers.
pub const UNREACHABLE: i64 = -1;

/// Result of one A* query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells from start to goal, both included. Empty when the goal is
    /// unreachable.
    pub path: Vec<Position>,
    /// Sum of entry costs along `path`, excluding the start cell. `None`
    /// when the goal is unreachable.
    pub cost: Option<u64>,
    /// Passable in-bounds neighbors generated during the run, whether or not
    /// they entered the frontier.
    pub nodes_created: usize,
}

impl SearchOutcome {
    pub(crate) fn unreachable(nodes_created: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: None,
            nodes_created,
        }
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// The total cost, or [`UNREACHABLE`].
    pub fn cost_or_unreachable(&self) -> i64 {
        self.cost
            .and_then(|c| i64::try_from(c).ok())
            .unwrap_or(UNREACHABLE)
    }

    /// Recompute the cost of `path` on `grid` by summing the entry cost of
    /// every cell after the first. Returns `None` for an empty path or a path
    /// that leaves the grid.
    pub fn path_cost(&self, grid: &CostGrid) -> Option<u64> {
        let (_, rest) = self.path.split_first()?;
        rest.iter()
            .map(|&p| grid.get(p).map(u64::from))
            .sum()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let out = SearchOutcome {
            path: vec![Position::new(0, 0), Position::new(0, 1)],
            cost: Some(1),
            nodes_created: 3,
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}
