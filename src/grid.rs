use crate::robot::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper and right edge of a world. The lower-left corner is always `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Bounds for a world whose top-right corner is `(max_x, max_y)`.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// True iff `0 <= x <= max_x` and `0 <= y <= max_y`.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }
}

/// The surface of Mars for one world.
///
/// Holds the rectangle robots move on and the scent set: every on-grid point
/// from which a robot has already fallen off. The scent set only ever grows.
#[derive(Clone, Debug)]
pub struct Grid {
    /// The inclusive rectangle `[0, max_x] x [0, max_y]`.
    pub bounds: Bounds,

    /// Points a previous robot was standing on when it fell off.
    scents: HashSet<Position>,
}

impl Grid {
    /// A grid with no scent yet.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            scents: HashSet::new(),
        }
    }

    /// True iff `position` lies inside the bounds, edges included.
    pub fn is_on_grid(&self, position: Position) -> bool {
        self.bounds.contains(position)
    }

    /// Whether a robot has already fallen off from `position`.
    pub fn is_scented(&self, position: Position) -> bool {
        self.scents.contains(&position)
    }

    /// Marks `position` so later robots will not fall off from it.
    ///
    /// Returns `false` if the point was already scented.
    pub fn leave_scent(&mut self, position: Position) -> bool {
        self.scents.insert(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn on_grid_is_inclusive() {
        let grid = Grid::new(Bounds::new(5, 3));
        assert!(grid.is_on_grid(IVec2::new(0, 0)));
        assert!(grid.is_on_grid(IVec2::new(5, 3)));
        assert!(!grid.is_on_grid(IVec2::new(6, 3)));
        assert!(!grid.is_on_grid(IVec2::new(5, 4)));
        assert!(!grid.is_on_grid(IVec2::new(-1, 0)));
        assert!(!grid.is_on_grid(IVec2::new(0, -1)));
    }

    #[test]
    fn single_point_world() {
        let grid = Grid::new(Bounds::new(0, 0));
        assert!(grid.is_on_grid(IVec2::ZERO));
        assert!(!grid.is_on_grid(IVec2::X));
    }

    #[test]
    fn scents_are_append_only() {
        let mut grid = Grid::new(Bounds::new(2, 2));
        assert!(grid.leave_scent(IVec2::new(2, 1)));
        assert!(!grid.leave_scent(IVec2::new(2, 1)));
        assert!(grid.is_scented(IVec2::new(2, 1)));
        assert!(!grid.is_scented(IVec2::new(2, 2)));
    }
}
