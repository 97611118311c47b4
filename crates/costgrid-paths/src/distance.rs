use costgrid_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Manhattan distance with each axis raised to `exponent`:
/// `|dr|^p + |dc|^p`.
#[inline]
pub fn power_manhattan(a: Position, b: Position, exponent: f64) -> f64 {
    let dr = f64::from((a.row - b.row).abs());
    let dc = f64::from((a.col - b.col).abs());
    dr.powf(exponent) + dc.powf(exponent)
}
