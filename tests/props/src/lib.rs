//! Grid fixtures for the property tests.
//!
//! A `GridWorld` is a rectangular 4-connected grid with a set of blocked
//! cells. It supplies the three caller-side ingredients a traversal needs:
//! a successor function, a goal predicate, and an admissible heuristic
//! (Manhattan distance).

use std::collections::HashSet;

/// A grid cell `(row, col)`.
pub type Cell = (u32, u32);

/// Rectangular grid with blocked cells, a start, and a goal.
pub struct GridWorld {
    pub rows: u32,
    pub cols: u32,
    pub start: Cell,
    pub goal: Cell,
    blocked: HashSet<Cell>,
}

impl GridWorld {
    /// An open grid: start at the top-left corner, goal at the bottom-right.
    #[must_use]
    pub fn open(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            start: (0, 0),
            goal: (rows - 1, cols - 1),
            blocked: HashSet::new(),
        }
    }

    /// An open grid with the given cells removed.
    #[must_use]
    pub fn with_blocked(rows: u32, cols: u32, blocked: &[Cell]) -> Self {
        let mut world = Self::open(rows, cols);
        world.blocked = blocked.iter().copied().collect();
        world
    }

    /// In-bounds, unblocked neighbors of `at` (down, up, right, left).
    #[must_use]
    pub fn successors(&self, at: &Cell) -> Vec<Cell> {
        let (row, col) = *at;
        let mut out = Vec::with_capacity(4);
        if row + 1 < self.rows {
            out.push((row + 1, col));
        }
        if row > 0 {
            out.push((row - 1, col));
        }
        if col + 1 < self.cols {
            out.push((row, col + 1));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        out.retain(|cell| !self.blocked.contains(cell));
        out
    }

    /// Whether `at` is the goal cell.
    #[must_use]
    pub fn is_goal(&self, at: &Cell) -> bool {
        *at == self.goal
    }

    /// Manhattan distance to the goal: admissible and consistent on a
    /// 4-connected grid with unit steps.
    #[must_use]
    pub fn manhattan(&self, at: &Cell) -> u64 {
        let dr = u64::from(at.0.abs_diff(self.goal.0));
        let dc = u64::from(at.1.abs_diff(self.goal.1));
        dr + dc
    }

    /// Every step of `path` follows a grid edge from start to goal.
    #[must_use]
    pub fn is_valid_path(&self, path: &[Cell]) -> bool {
        if path.first() != Some(&self.start) || path.last() != Some(&self.goal) {
            return false;
        }
        path.windows(2)
            .all(|window| self.successors(&window[0]).contains(&window[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_cells_are_not_successors() {
        let world = GridWorld::with_blocked(3, 3, &[(1, 0)]);
        assert!(!world.successors(&(0, 0)).contains(&(1, 0)));
        assert!(world.successors(&(0, 0)).contains(&(0, 1)));
    }

    #[test]
    fn single_cell_grid_starts_at_goal() {
        let world = GridWorld::open(1, 1);
        assert!(world.is_goal(&world.start));
        assert!(world.successors(&world.start).is_empty());
    }
}
