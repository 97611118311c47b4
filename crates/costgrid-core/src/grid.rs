//! The [`CostGrid`] type: an immutable rectangular map of cell entry costs.
//!
//! A cell value of `0` marks an impassable cell; any positive value is the
//! cost paid to *enter* that cell. A grid is validated once on construction
//! and offers no mutation afterwards, so a single grid can back any number
//! of sequential searches.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Position, Rect};

/// Cell value for an impassable cell.
pub const IMPASSABLE: u32 = 0;

/// A rectangular 2D grid of cell entry costs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct CostGrid {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl CostGrid {
    /// Build a grid from row-major nested rows.
    ///
    /// Fails if there are no rows, no columns, or rows of unequal length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        Self::check_size(rows.len(), cols)?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Create a `rows` × `cols` grid with every cell set to `cost`.
    pub fn filled(rows: usize, cols: usize, cost: u32) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        Self::check_size(rows, cols)?;
        Ok(Self {
            cells: vec![cost; rows * cols],
            rows,
            cols,
        })
    }

    fn check_size(rows: usize, cols: usize) -> Result<(), GridError> {
        let fits = i32::try_from(rows).is_ok()
            && i32::try_from(cols).is_ok()
            && rows.checked_mul(cols).is_some();
        if fits {
            Ok(())
        } else {
            Err(GridError::TooLarge { rows, cols })
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The rectangle `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.rows as i32, self.cols as i32)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a position to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Cost of entering `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Position) -> Option<u32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not impassable.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.get(p).is_some_and(|c| c != IMPASSABLE)
    }

    /// Count the impassable cells inside `rect`, clipped to the grid.
    pub fn count_impassable_in(&self, rect: Rect) -> usize {
        rect.intersect(self.bounds())
            .iter()
            .filter(|&p| self.get(p) == Some(IMPASSABLE))
            .count()
    }

    /// The cells of row `r`, or `None` if `r` is out of range.
    pub fn row(&self, r: usize) -> Option<&[u32]> {
        if r >= self.rows {
            return None;
        }
        Some(&self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, u32> {
        self.cells.chunks(self.cols)
    }

    /// Row-major iterator over `(Position, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.position(i), c))
    }
}

impl TryFrom<Vec<Vec<u32>>> for CostGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<CostGrid> for Vec<Vec<u32>> {
    fn from(grid: CostGrid) -> Self {
        grid.iter_rows().map(<[u32]>::to_vec).collect()
    }
}

impl fmt::Display for CostGrid {
    /// One row per line, cells separated by a space, impassable cells as `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &cost) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if cost == IMPASSABLE {
                    write!(f, "{:>width$}", "#")?;
                } else {
                    write!(f, "{cost:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
