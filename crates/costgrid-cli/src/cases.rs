//! Built-in test grids.

use anyhow::{Context, bail};
use costgrid_core::{CostGrid, Position};

/// Number of built-in cases.
pub const CASE_COUNT: u8 = 6;

/// A grid with a start and goal.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub number: u8,
    pub grid: CostGrid,
    pub start: Position,
    pub goal: Position,
}

const CASE_1: [[u32; 7]; 5] = [
    [2, 4, 2, 1, 4, 5, 2],
    [0, 1, 2, 3, 5, 3, 1],
    [2, 0, 4, 4, 1, 2, 4],
    [2, 5, 5, 3, 2, 0, 1],
    [4, 3, 3, 2, 1, 0, 1],
];

// The goal's region is sealed off from the start.
const CASE_2: [[u32; 7]; 7] = [
    [1, 3, 2, 5, 1, 4, 3],
    [2, 1, 3, 1, 3, 2, 5],
    [3, 0, 5, 0, 1, 2, 2],
    [5, 3, 2, 1, 5, 0, 3],
    [2, 4, 1, 0, 0, 2, 0],
    [4, 0, 2, 1, 5, 3, 4],
    [1, 5, 1, 0, 2, 4, 1],
];

const CASE_3: [[u32; 10]; 10] = [
    [2, 0, 2, 0, 2, 0, 0, 2, 2, 0],
    [1, 2, 3, 5, 2, 1, 2, 5, 1, 2],
    [2, 0, 2, 2, 1, 2, 1, 2, 4, 2],
    [2, 0, 1, 0, 1, 1, 1, 0, 0, 1],
    [1, 1, 0, 0, 5, 0, 3, 2, 2, 2],
    [2, 2, 2, 2, 1, 0, 1, 2, 1, 0],
    [1, 0, 2, 1, 3, 1, 4, 3, 0, 1],
    [2, 0, 5, 1, 5, 2, 1, 2, 4, 1],
    [1, 2, 2, 2, 0, 2, 0, 1, 1, 0],
    [5, 1, 2, 1, 1, 1, 2, 0, 1, 2],
];

const CASE_4: [[u32; 5]; 5] = [
    [1, 3, 2, 1, 4],
    [2, 0, 3, 5, 1],
    [3, 2, 1, 0, 2],
    [4, 1, 2, 3, 4],
    [1, 5, 3, 2, 1],
];

// The start is boxed in by walls.
const CASE_5: [[u32; 5]; 5] = [
    [1, 0, 2, 1, 4],
    [0, 0, 3, 5, 1],
    [3, 2, 1, 0, 2],
    [4, 1, 2, 3, 4],
    [1, 5, 3, 2, 1],
];

// A single winding corridor.
const CASE_6: [[u32; 5]; 5] = [
    [1, 1, 1, 0, 4],
    [0, 0, 1, 0, 1],
    [3, 2, 1, 0, 2],
    [4, 0, 0, 3, 4],
    [1, 5, 3, 2, 1],
];

fn case<R: AsRef<[u32]>>(
    number: u8,
    rows: &[R],
    start: (i32, i32),
    goal: (i32, i32),
) -> anyhow::Result<TestCase> {
    let grid = CostGrid::from_rows(rows).with_context(|| format!("built-in case {number}"))?;
    Ok(TestCase {
        number,
        grid,
        start: start.into(),
        goal: goal.into(),
    })
}

/// Load built-in case `number` (1-based).
pub fn builtin(number: u8) -> anyhow::Result<TestCase> {
    match number {
        1 => case(1, &CASE_1, (1, 2), (4, 3)),
        2 => case(2, &CASE_2, (3, 6), (5, 1)),
        3 => case(3, &CASE_3, (1, 2), (8, 8)),
        4 => case(4, &CASE_4, (0, 0), (4, 4)),
        5 => case(5, &CASE_5, (0, 0), (4, 4)),
        6 => case(6, &CASE_6, (0, 0), (4, 4)),
        n => bail!("no built-in case {n}, expected 1-{CASE_COUNT}"),
    }
}

/// Every built-in case, in order.
pub fn all() -> anyhow::Result<Vec<TestCase>> {
    (1..=CASE_COUNT).map(builtin).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use costgrid_paths::{Manhattan, ObstacleAware, PowerManhattan, Zero, find_path};

    fn path(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn all_cases_load() {
        let cases = all().unwrap();
        assert_eq!(cases.len(), CASE_COUNT as usize);
        for (i, c) in cases.iter().enumerate() {
            assert_eq!(c.number as usize, i + 1);
            assert!(c.grid.contains(c.start));
            assert!(c.grid.contains(c.goal));
        }
        assert!(builtin(0).is_err());
        assert!(builtin(7).is_err());
    }

    #[test]
    fn case_1_manhattan() {
        let c = builtin(1).unwrap();
        let out = find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap();
        assert_eq!(out.path, path(&[(1, 2), (1, 3), (2, 3), (3, 3), (4, 3)]));
        assert_eq!(out.cost, Some(12));
        assert_eq!(out.nodes_created, 48);

        let out = find_path(&c.grid, c.start, c.goal, &Zero).unwrap();
        assert_eq!(out.cost, Some(12));
        assert_eq!(out.nodes_created, 64);
    }

    #[test]
    fn case_2_is_unreachable_for_every_heuristic() {
        let c = builtin(2).unwrap();
        for out in [
            find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap(),
            find_path(&c.grid, c.start, c.goal, &Zero).unwrap(),
            find_path(&c.grid, c.start, c.goal, &ObstacleAware::default()).unwrap(),
        ] {
            assert!(out.path.is_empty());
            assert_eq!(out.cost, None);
            assert_eq!(out.nodes_created, 110);
        }
    }

    #[test]
    fn case_3_heuristics_differ() {
        let c = builtin(3).unwrap();
        let optimal = path(&[
            (1, 2),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 6),
            (5, 6),
            (5, 7),
            (6, 7),
            (7, 7),
            (8, 7),
            (8, 8),
        ]);

        let out = find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap();
        assert_eq!(out.path, optimal);
        assert_eq!(out.cost, Some(21));
        assert_eq!(out.nodes_created, 122);

        let out = find_path(&c.grid, c.start, c.goal, &Zero).unwrap();
        assert_eq!(out.path, optimal);
        assert_eq!(out.nodes_created, 203);

        let out = find_path(&c.grid, c.start, c.goal, &PowerManhattan::default()).unwrap();
        assert_eq!(out.cost, Some(21));

        // The obstacle penalty steers around the walls in row 3 and pays
        // one more than optimal.
        let out = find_path(&c.grid, c.start, c.goal, &ObstacleAware::default()).unwrap();
        assert_eq!(out.cost, Some(22));
        assert_eq!(out.nodes_created, 55);
        assert_eq!(out.path[4], Position::new(2, 5));
    }

    #[test]
    fn case_4_obstacle_aware_takes_other_route() {
        let c = builtin(4).unwrap();
        let out = find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap();
        assert_eq!(
            out.path,
            path(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3), (4, 4)])
        );
        assert_eq!(out.cost, Some(16));
        assert_eq!(out.nodes_created, 59);

        let out = find_path(&c.grid, c.start, c.goal, &ObstacleAware::default()).unwrap();
        assert_eq!(
            out.path,
            path(&[(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (3, 2), (3, 3), (4, 3), (4, 4)])
        );
        assert_eq!(out.cost, Some(16));
        assert_eq!(out.nodes_created, 56);
    }

    #[test]
    fn case_5_boxed_in_start() {
        let c = builtin(5).unwrap();
        let out = find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap();
        assert!(!out.is_reachable());
        assert_eq!(out.nodes_created, 0);
    }

    #[test]
    fn case_6_corridor() {
        let c = builtin(6).unwrap();
        let want = path(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 4),
        ]);
        for out in [
            find_path(&c.grid, c.start, c.goal, &Manhattan).unwrap(),
            find_path(&c.grid, c.start, c.goal, &Zero).unwrap(),
        ] {
            assert_eq!(out.path, want);
            assert_eq!(out.cost, Some(25));
            assert_eq!(out.nodes_created, 24);
        }
    }
}
