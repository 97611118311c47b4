//! Slow reference searches used to check the A* engine in tests.

use costgrid_core::{CostGrid, Position};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::heuristic::Heuristic;
use crate::outcome::SearchOutcome;

/// A seeded `rows` × `cols` grid with costs in `1..=5` and roughly
/// `wall_prob` of the cells impassable.
pub(crate) fn random_grid(seed: u64, rows: usize, cols: usize, wall_prob: f64) -> CostGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<u32>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(wall_prob) {
                        0
                    } else {
                        rng.random_range(1..=5)
                    }
                })
                .collect()
        })
        .collect();
    CostGrid::from_rows(&rows).unwrap()
}

/// Cheapest cost over every simple path from `start` to `goal`, by
/// exhaustive depth-first enumeration. Only usable on tiny grids.
pub(crate) fn brute_force_cost(grid: &CostGrid, start: Position, goal: Position) -> Option<u64> {
    fn dfs(
        grid: &CostGrid,
        at: Position,
        goal: Position,
        cost: u64,
        seen: &mut Vec<bool>,
        best: &mut Option<u64>,
    ) {
        if at == goal {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for n in at.neighbors_4() {
            if !grid.is_passable(n) {
                continue;
            }
            let Some(i) = grid.index(n) else {
                continue;
            };
            if seen[i] {
                continue;
            }
            seen[i] = true;
            let step = u64::from(grid.get(n).unwrap_or(0));
            dfs(grid, n, goal, cost + step, seen, best);
            seen[i] = false;
        }
    }

    let mut seen = vec![false; grid.len()];
    seen[grid.index(start)?] = true;
    let mut best = None;
    dfs(grid, start, goal, 0, &mut seen, &mut best);
    best
}

struct ListNode {
    pos: Position,
    parent: Option<usize>,
    g: u64,
    h: f64,
    f: f64,
}

/// A* with an insertion-ordered list as frontier, selecting the first
/// minimum of a linear scan, and a list of expanded nodes as closed set.
pub(crate) fn linear_scan_astar<H: Heuristic + ?Sized>(
    grid: &CostGrid,
    start: Position,
    goal: Position,
    heuristic: &H,
) -> SearchOutcome {
    let mut pool = vec![ListNode {
        pos: start,
        parent: None,
        g: 0,
        h: heuristic.estimate(start, goal, grid),
        f: 0.0,
    }];
    pool[0].f = pool[0].h;
    let mut open: Vec<usize> = vec![0];
    let mut closed: Vec<Position> = Vec::new();
    let mut created = 0;

    while !open.is_empty() {
        let mut best = 0;
        for (i, &id) in open.iter().enumerate() {
            if pool[id].f < pool[open[best]].f {
                best = i;
            }
        }
        let current = open.remove(best);
        closed.push(pool[current].pos);

        if pool[current].pos == goal {
            let mut path = Vec::new();
            let mut cur = Some(current);
            while let Some(id) = cur {
                path.push(pool[id].pos);
                cur = pool[id].parent;
            }
            path.reverse();
            return SearchOutcome {
                path,
                cost: Some(pool[current].g),
                nodes_created: created,
            };
        }

        for n in pool[current].pos.neighbors_4() {
            let Some(cost) = grid.get(n) else {
                continue;
            };
            if cost == 0 {
                continue;
            }
            created += 1;
            if closed.contains(&n) {
                continue;
            }
            let g = pool[current].g + u64::from(cost);
            let h = heuristic.estimate(n, goal, grid);
            match open.iter().copied().find(|&id| pool[id].pos == n) {
                Some(id) => {
                    if g < pool[id].g {
                        pool[id].g = g;
                        pool[id].f = g as f64 + pool[id].h;
                        pool[id].parent = Some(current);
                    }
                }
                None => {
                    pool.push(ListNode {
                        pos: n,
                        parent: Some(current),
                        g,
                        h,
                        f: g as f64 + h,
                    });
                    open.push(pool.len() - 1);
                }
            }
        }
    }

    SearchOutcome {
        path: Vec::new(),
        cost: None,
        nodes_created: created,
    }
}
