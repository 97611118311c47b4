//! Running a single query and presenting its result.

use std::fmt;
use std::time::{Duration, Instant};

use costgrid_core::{CostGrid, Position};
use costgrid_paths::{
    HeuristicKind, HeuristicParams, SearchError, SearchOptions, SearchOutcome, find_path_with,
};

/// One finished query with its wall-clock runtime.
#[derive(Debug, Clone)]
pub struct Report {
    pub start: Position,
    pub goal: Position,
    pub heuristic: HeuristicKind,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

/// Build the heuristic named by `kind`, search, and time the search.
pub fn run_query(
    grid: &CostGrid,
    start: Position,
    goal: Position,
    kind: HeuristicKind,
    params: &HeuristicParams,
    options: &SearchOptions,
) -> Result<Report, SearchError> {
    let heuristic = kind.build(params);
    log::info!("starting A* from {start} to {goal} with {kind} heuristic");

    let began = Instant::now();
    let outcome = find_path_with(grid, start, goal, heuristic.as_ref(), options)?;
    let elapsed = began.elapsed();

    log::debug!(
        "{kind}: {} nodes created in {:.3} ms",
        outcome.nodes_created,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(Report {
        start,
        goal,
        heuristic: kind,
        outcome,
        elapsed,
    })
}

/// Render a path as `[(r, c), (r, c), ...]`, or `NULL` when empty.
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "NULL".to_string();
    }
    let cells: Vec<String> = path.iter().map(Position::to_string).collect();
    format!("[{}]", cells.join(", "))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start: {}  Goal: {}  Heuristic: {}", self.start, self.goal, self.heuristic)?;
        if !self.outcome.is_reachable() {
            writeln!(f, "No path found.")?;
        }
        writeln!(f, "Total cost: {}", self.outcome.cost_or_unreachable())?;
        writeln!(f, "Path: {}", format_path(&self.outcome.path))?;
        writeln!(f, "Nodes created: {}", self.outcome.nodes_created)?;
        write!(f, "Runtime: {:.2} ms", self.elapsed.as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_found_path() {
        let grid = CostGrid::from_rows(&[[1, 1], [0, 1]]).unwrap();
        let mut report = run_query(
            &grid,
            Position::new(0, 0),
            Position::new(1, 1),
            HeuristicKind::Manhattan,
            &HeuristicParams::default(),
            &SearchOptions::default(),
        )
        .unwrap();
        report.elapsed = Duration::from_micros(1500);
        assert_eq!(
            report.to_string(),
            "Start: (0, 0)  Goal: (1, 1)  Heuristic: manhattan\n\
             Total cost: 2\n\
             Path: [(0, 0), (0, 1), (1, 1)]\n\
             Nodes created: 3\n\
             Runtime: 1.50 ms"
        );
    }

    #[test]
    fn report_for_unreachable_goal() {
        let grid = CostGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        let report = run_query(
            &grid,
            Position::new(0, 0),
            Position::new(1, 1),
            HeuristicKind::Zero,
            &HeuristicParams::default(),
            &SearchOptions::default(),
        )
        .unwrap();
        let text = report.to_string();
        assert!(text.contains("No path found."));
        assert!(text.contains("Total cost: -1"));
        assert!(text.contains("Path: NULL"));
        assert!(text.contains("Nodes created: 0"));
    }

    #[test]
    fn out_of_bounds_goal_is_reported() {
        let grid = CostGrid::filled(2, 2, 1).unwrap();
        let err = run_query(
            &grid,
            Position::new(0, 0),
            Position::new(2, 2),
            HeuristicKind::Zero,
            &HeuristicParams::default(),
            &SearchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::GoalOutOfBounds { .. }));
    }
}
