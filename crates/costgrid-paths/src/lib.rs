//! A* shortest paths over weighted cost grids.
//!
//! The single query operation is [`find_path`] (or [`find_path_with`] to
//! enable the debug trace). It searches a [`CostGrid`](costgrid_core::CostGrid)
//! where entering a cell costs its value and cells of value 0 are walls,
//! moving in the four cardinal directions only.
//!
//! Every query owns its frontier, closed set and node pool; nothing is kept
//! between calls, so one grid can serve any number of sequential queries.
//!
//! # Heuristics
//!
//! | Type | Estimate | Admissible |
//! |---|---|---|
//! | [`Manhattan`] | `\|dr\| + \|dc\|` | yes |
//! | [`Zero`] | `0` | yes |
//! | [`NoisyManhattan`] | Manhattan ± 1..=3, clamped at 0 | no |
//! | [`PowerManhattan`] | `\|dr\|^p + \|dc\|^p` | no |
//! | [`ObstacleAware`] | Manhattan + penalty × walls in bounding box | no |
//!
//! Any `Fn(Position, Position, &CostGrid) -> f64` closure also works.

mod astar;
mod distance;
mod error;
mod heuristic;
mod neighbors;
mod node;
mod outcome;
#[cfg(test)]
mod reference;

pub use astar::{SearchOptions, find_path, find_path_with};
pub use distance::{manhattan, power_manhattan};
pub use error::{ParseHeuristicError, SearchError};
pub use heuristic::{
    DEFAULT_EXPONENT, DEFAULT_PENALTY, Heuristic, HeuristicKind, HeuristicParams, Manhattan, NOISE,
    NoisyManhattan, ObstacleAware, PowerManhattan, Zero,
};
pub use neighbors::Neighbors;
pub use outcome::{SearchOutcome, UNREACHABLE};
