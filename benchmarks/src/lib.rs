//! Shared helpers for wayfarer benchmark suites.
//!
//! Open rectangular grids give the traversals a uniform branching factor
//! and a known shortest path (the Manhattan distance), so regressions in
//! frontier or explored-set handling show up as wall-clock drift rather
//! than behavioral change.

/// A grid cell `(row, col)`.
pub type Cell = (u32, u32);

/// Successor closure for an open `rows x cols` grid: the four in-bounds
/// neighbors of a cell.
pub fn grid_successors(rows: u32, cols: u32) -> impl Fn(&Cell) -> Vec<Cell> {
    move |&(row, col)| {
        let mut out = Vec::with_capacity(4);
        if row + 1 < rows {
            out.push((row + 1, col));
        }
        if row > 0 {
            out.push((row - 1, col));
        }
        if col + 1 < cols {
            out.push((row, col + 1));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        out
    }
}

/// Manhattan distance to `goal`, an admissible and consistent estimate on
/// a 4-connected grid.
pub fn manhattan(goal: Cell) -> impl Fn(&Cell) -> u64 {
    move |&(row, col)| {
        let dr = u64::from(row.abs_diff(goal.0));
        let dc = u64::from(col.abs_diff(goal.1));
        dr + dc
    }
}
