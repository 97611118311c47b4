use std::collections::BinaryHeap;

use costgrid_core::{CostGrid, Position};

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::node::{NodeId, NodeRef, SearchNode};
use crate::outcome::SearchOutcome;

/// Per-query switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Log every expansion and child evaluation at `debug` level.
    pub trace: bool,
}

/// Compute the cheapest path from `start` to `goal` on `grid` using A*.
///
/// Equivalent to [`find_path_with`] with default options.
pub fn find_path<H: Heuristic + ?Sized>(
    grid: &CostGrid,
    start: Position,
    goal: Position,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    find_path_with(grid, start, goal, heuristic, &SearchOptions::default())
}

/// Compute the cheapest path from `start` to `goal` on `grid` using A*.
///
/// Entering a cell costs its grid value; cells with value 0 are never
/// entered. `start` itself is always expanded, even when impassable.
///
/// Expanded positions are closed for the rest of the run: a cheaper route
/// found later to a closed cell is ignored. The returned path is therefore
/// optimal only when `heuristic` is admissible and consistent.
///
/// Returns an error if `start` or `goal` lies outside the grid. An
/// unreachable goal is reported as an outcome with an empty path.
pub fn find_path_with<H: Heuristic + ?Sized>(
    grid: &CostGrid,
    start: Position,
    goal: Position,
    heuristic: &H,
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    if !grid.contains(start) {
        return Err(SearchError::StartOutOfBounds {
            pos: start,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if !grid.contains(goal) {
        return Err(SearchError::GoalOutOfBounds {
            pos: goal,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let run = SearchRun::new(grid, goal, heuristic, options.trace);
    Ok(run.execute(start))
}

/// A negative or NaN estimate would let `f` drop along a path.
#[inline]
fn sanitize(h: f64) -> f64 {
    if h >= 0.0 { h } else { 0.0 }
}

/// State owned by a single query. Dropped when the query returns.
struct SearchRun<'a, H: Heuristic + ?Sized> {
    grid: &'a CostGrid,
    goal: Position,
    heuristic: &'a H,
    trace: bool,
    nodes: Vec<SearchNode>,
    // Frontier membership by flat grid index.
    open_slot: Vec<Option<NodeId>>,
    closed: Vec<bool>,
    open: BinaryHeap<NodeRef>,
    nodes_created: usize,
}

impl<'a, H: Heuristic + ?Sized> SearchRun<'a, H> {
    fn new(grid: &'a CostGrid, goal: Position, heuristic: &'a H, trace: bool) -> Self {
        Self {
            grid,
            goal,
            heuristic,
            trace,
            nodes: Vec::new(),
            open_slot: vec![None; grid.len()],
            closed: vec![false; grid.len()],
            open: BinaryHeap::new(),
            nodes_created: 0,
        }
    }

    fn estimate(&self, p: Position) -> f64 {
        sanitize(self.heuristic.estimate(p, self.goal, self.grid))
    }

    /// Allocate a node and put it on the frontier.
    fn push_open(&mut self, idx: usize, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        let f = node.f;
        self.nodes.push(node);
        self.open_slot[idx] = Some(id);
        self.open.push(NodeRef { id, f });
        id
    }

    fn execute(mut self, start: Position) -> SearchOutcome {
        // Both endpoints were bounds-checked by the caller.
        let (Some(start_idx), Some(goal_idx)) = (self.grid.index(start), self.grid.index(self.goal))
        else {
            return SearchOutcome::unreachable(0);
        };

        let h = self.estimate(start);
        self.push_open(start_idx, SearchNode::new(start, None, 0, h));

        let mut nbuf = Neighbors::new();

        while let Some(entry) = self.open.pop() {
            let current = entry.id;
            let cp = self.nodes[current].pos;
            let Some(ci) = self.grid.index(cp) else {
                continue;
            };

            // A relaxed node leaves its older, costlier entry behind; it pops
            // after the node has been closed.
            if self.open_slot[ci] != Some(current) {
                continue;
            }
            self.open_slot[ci] = None;
            self.closed[ci] = true;

            let current_g = self.nodes[current].g;
            if self.trace {
                let n = &self.nodes[current];
                log::debug!("expanding node {}, f={}, g={}, h={}", n.pos, n.f, n.g, n.h);
            }

            if ci == goal_idx {
                return self.reconstruct(current);
            }

            let grid = self.grid;
            for &np in nbuf.cardinal(cp, |n| grid.is_passable(n)) {
                self.nodes_created += 1;

                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.closed[ni] {
                    continue;
                }

                let step = grid.get(np).map_or(0, u64::from);
                let tentative_g = current_g + step;
                let h = self.estimate(np);

                if self.trace {
                    log::debug!(
                        "child node {}, g={}, h={}, f={}",
                        np,
                        tentative_g,
                        h,
                        tentative_g as f64 + h
                    );
                }

                match self.open_slot[ni] {
                    Some(existing) => {
                        let node = &mut self.nodes[existing];
                        if tentative_g < node.g {
                            node.relax(current, tentative_g);
                            let f = node.f;
                            self.open.push(NodeRef { id: existing, f });
                        }
                    }
                    None => {
                        self.push_open(ni, SearchNode::new(np, Some(current), tentative_g, h));
                    }
                }
            }
        }

        if self.trace {
            log::debug!(
                "no path from {} to {}, {} nodes created",
                start,
                self.goal,
                self.nodes_created
            );
        }
        SearchOutcome::unreachable(self.nodes_created)
    }

    fn reconstruct(&self, goal_node: NodeId) -> SearchOutcome {
        let mut path = Vec::new();
        let mut cur = Some(goal_node);
        while let Some(id) = cur {
            let node = &self.nodes[id];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        SearchOutcome {
            path,
            cost: Some(self.nodes[goal_node].g),
            nodes_created: self.nodes_created,
        }
    }
}
