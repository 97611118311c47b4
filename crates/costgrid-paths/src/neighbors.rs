use costgrid_core::{Offset, Position};

/// Reusable neighbor enumeration buffer.
///
/// Yields the cardinal (4-way) neighbors of a position in the fixed
/// expansion order west, east, north, south, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        for d in Offset::CARDINALS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
