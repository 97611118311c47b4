//! Geometry primitives: [`Position`], [`Offset`] and [`Rect`].
//!
//! Coordinates are `(row, col)`: rows grow downward, columns grow to the
//! right. Values are signed so that stepping off the grid edge yields a
//! position that simply fails a bounds check.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParsePositionError;

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A signed single-step displacement between two positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub drow: i32,
    pub dcol: i32,
}

impl Offset {
    /// One column to the left.
    pub const WEST: Self = Self::new(0, -1);
    /// One column to the right.
    pub const EAST: Self = Self::new(0, 1);
    /// One row up.
    pub const NORTH: Self = Self::new(-1, 0);
    /// One row down.
    pub const SOUTH: Self = Self::new(1, 0);

    /// The four cardinal steps in expansion order: west, east, north, south.
    ///
    /// Search results depend on this order when frontier entries tie.
    pub const CARDINALS: [Self; 4] = [Self::WEST, Self::EAST, Self::NORTH, Self::SOUTH];

    /// Create a new offset.
    #[inline]
    pub const fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }

    /// Whether this offset is one of the four cardinal unit steps.
    #[inline]
    pub fn is_cardinal(self) -> bool {
        self.drow.abs() + self.dcol.abs() == 1
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Top-left cell (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in expansion order (west, east, north,
    /// south). Some of them may lie outside any given grid.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Offset::CARDINALS.map(|o| self + o)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse `"row,col"`. Surrounding parentheses and whitespace are allowed,
    /// so the [`Display`](fmt::Display) form parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (r, c) = inner.split_once(',').ok_or_else(err)?;
        let row = r.trim().parse().map_err(|_| err())?;
        let col = c.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add<Offset> for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Offset) -> Self {
        self.shift(rhs.drow, rhs.dcol)
    }
}

impl Sub for Position {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Self) -> Offset {
        Offset::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub min: Position,
    pub max: Position,
}

impl Rect {
    /// Create a new rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Position::new(row0.min(row1), col0.min(col1)),
            max: Position::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The smallest rectangle containing both `a` and `b` (both corners
    /// included).
    #[inline]
    pub fn spanning(a: Position, b: Position) -> Self {
        Self {
            min: Position::new(a.row.min(b.row), a.col.min(b.col)),
            max: Position::new(a.row.max(b.row) + 1, a.col.max(b.col) + 1),
        }
    }

    /// Number of rows covered.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns covered.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the rectangle.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.row >= self.min.row
            && p.row < self.max.row
            && p.col >= self.min.col
            && p.col < self.max.col
    }

    /// Intersection of two rectangles. Non-overlapping rectangles yield the
    /// zero (empty) rectangle.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Position::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Position::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every position in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Position;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RectIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Position,
}

impl Iterator for RectIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.cur.row >= self.rect.max.row || self.rect.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.rect.max.col {
            self.cur.col = self.rect.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.row >= self.rect.max.row {
            return (0, Some(0));
        }
        let w = self.rect.cols() as usize;
        let remaining_in_row = (self.rect.max.col - self.cur.col) as usize;
        let remaining_rows = (self.rect.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}
