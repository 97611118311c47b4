use costgrid_core::Position;

/// Invalid search input.
///
/// An unreachable goal is not an error; it yields an empty
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("start {pos} is outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        pos: Position,
        rows: usize,
        cols: usize,
    },

    #[error("goal {pos} is outside the {rows}x{cols} grid")]
    GoalOutOfBounds {
        pos: Position,
        rows: usize,
        cols: usize,
    },
}

/// Error returned when a string names no known heuristic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic {input:?}, expected manhattan, zero, noisy, power, obstacle or 1-5")]
pub struct ParseHeuristicError {
    pub input: String,
}
