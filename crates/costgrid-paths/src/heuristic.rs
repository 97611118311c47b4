//! Remaining-cost estimates used to guide A*.
//!
//! A [`Heuristic`] maps `(from, to, grid)` to a non-negative estimate. Any
//! closure with that signature is a heuristic; the named variants below
//! cover the estimates the `costgrid` driver offers.
//!
//! Only [`Zero`] is admissible on every grid. [`Manhattan`] is admissible
//! when every passable cell costs at least 1, which holds for all valid
//! grids. The remaining variants overestimate on purpose and trade
//! optimality for a different expansion order.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use costgrid_core::{CostGrid, Position, Rect};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::distance::{manhattan, power_manhattan};
use crate::error::ParseHeuristicError;

/// Estimate of the cost still to pay from `from` to `to`.
pub trait Heuristic {
    /// Heuristic estimate of the cost from `from` to `to` on `grid`.
    /// Should never be negative.
    fn estimate(&self, from: Position, to: Position, grid: &CostGrid) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Position, Position, &CostGrid) -> f64,
{
    fn estimate(&self, from: Position, to: Position, grid: &CostGrid) -> f64 {
        self(from, to, grid)
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// `|dr| + |dc|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Position, to: Position, _grid: &CostGrid) -> f64 {
        f64::from(manhattan(from, to))
    }
}

/// Always 0; A* degrades to uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Position, _to: Position, _grid: &CostGrid) -> f64 {
        0.0
    }
}

/// Perturbations added by [`NoisyManhattan`]. Zero is never drawn.
pub const NOISE: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// Manhattan distance plus a random non-zero error from [`NOISE`], clamped
/// to 0.
///
/// Every call draws from the owned random source, so results are only
/// reproducible when the source is seeded.
pub struct NoisyManhattan<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> NoisyManhattan<R> {
    /// Create a noisy heuristic drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl NoisyManhattan<StdRng> {
    /// Create a noisy heuristic with a deterministic seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Heuristic for NoisyManhattan<R> {
    fn estimate(&self, from: Position, to: Position, _grid: &CostGrid) -> f64 {
        let idx = self.rng.borrow_mut().random_range(0..NOISE.len());
        f64::from((manhattan(from, to) + NOISE[idx]).max(0))
    }
}

impl<R: Rng> fmt::Debug for NoisyManhattan<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoisyManhattan").finish_non_exhaustive()
    }
}

/// Default exponent of [`PowerManhattan`].
pub const DEFAULT_EXPONENT: f64 = 1.2;

/// `|dr|^p + |dc|^p`.
#[derive(Debug, Clone, Copy)]
pub struct PowerManhattan {
    pub exponent: f64,
}

impl Default for PowerManhattan {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl Heuristic for PowerManhattan {
    fn estimate(&self, from: Position, to: Position, _grid: &CostGrid) -> f64 {
        power_manhattan(from, to, self.exponent)
    }
}

/// Default per-obstacle penalty of [`ObstacleAware`].
pub const DEFAULT_PENALTY: f64 = 1.5;

/// Manhattan distance plus `penalty` for every impassable cell inside the
/// bounding rectangle of `from` and `to` (both corners included).
///
/// Each call scans the whole rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleAware {
    pub penalty: f64,
}

impl Default for ObstacleAware {
    fn default() -> Self {
        Self {
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl Heuristic for ObstacleAware {
    fn estimate(&self, from: Position, to: Position, grid: &CostGrid) -> f64 {
        let obstacles = grid.count_impassable_in(Rect::spanning(from, to));
        f64::from(manhattan(from, to)) + obstacles as f64 * self.penalty
    }
}

// ---------------------------------------------------------------------------
// Selection by identifier
// ---------------------------------------------------------------------------

/// Parameters for building a heuristic from a [`HeuristicKind`].
#[derive(Debug, Clone, Copy)]
pub struct HeuristicParams {
    /// Seed for [`NoisyManhattan`]; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Exponent for [`PowerManhattan`].
    pub exponent: f64,
    /// Per-obstacle penalty for [`ObstacleAware`].
    pub penalty: f64,
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            seed: None,
            exponent: DEFAULT_EXPONENT,
            penalty: DEFAULT_PENALTY,
        }
    }
}

/// Identifier of a built-in heuristic.
///
/// Parses from its name or from its menu number (`1` to `5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Manhattan,
    Zero,
    Noisy,
    Power,
    Obstacle,
}

impl HeuristicKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Manhattan,
        Self::Zero,
        Self::Noisy,
        Self::Power,
        Self::Obstacle,
    ];

    /// Menu number of this kind.
    pub fn number(self) -> u8 {
        match self {
            Self::Manhattan => 1,
            Self::Zero => 2,
            Self::Noisy => 3,
            Self::Power => 4,
            Self::Obstacle => 5,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Zero => "zero",
            Self::Noisy => "noisy",
            Self::Power => "power",
            Self::Obstacle => "obstacle",
        }
    }

    /// Whether results for this kind are reproducible without a seed.
    pub fn is_deterministic(self) -> bool {
        self != Self::Noisy
    }

    /// Build the heuristic this kind names.
    pub fn build(self, params: &HeuristicParams) -> Box<dyn Heuristic> {
        match self {
            Self::Manhattan => Box::new(Manhattan),
            Self::Zero => Box::new(Zero),
            Self::Noisy => match params.seed {
                Some(seed) => Box::new(NoisyManhattan::from_seed(seed)),
                None => Box::new(NoisyManhattan::new(rand::rng())),
            },
            Self::Power => Box::new(PowerManhattan {
                exponent: params.exponent,
            }),
            Self::Obstacle => Box::new(ObstacleAware {
                penalty: params.penalty,
            }),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == key || k.number().to_string() == key)
            .ok_or_else(|| ParseHeuristicError { input: s.to_string() })
    }
}
