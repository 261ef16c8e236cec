// Occupancy checker
//
// Pure queries over one turn's bodies. Board edges are not treated as blocked
// here; callers check `Dimensions::contains` separately before committing.

use crate::snapshot::Dimensions;
use crate::types::{Battlesnake, Coord};

/// Read-only view of the cells occupied this turn
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    body: &'a [Coord],
    critical: &'a [Battlesnake],
    dimensions: Dimensions,
}

impl<'a> Occupancy<'a> {
    /// `critical` must already exclude the self snake
    pub fn new(body: &'a [Coord], critical: &'a [Battlesnake], dimensions: Dimensions) -> Self {
        Occupancy {
            body,
            critical,
            dimensions,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// True if `cell` lies on the self body or on any critical opponent
    pub fn is_blocked(&self, cell: &Coord) -> bool {
        self.body.contains(cell) || self.critical.iter().any(|s| s.body.contains(cell))
    }

    /// True iff all four orthogonal neighbours of `cell` are blocked
    pub fn is_dead_end(&self, cell: &Coord) -> bool {
        cell.neighbors().iter().all(|n| self.is_blocked(n))
    }

    pub fn in_bounds(&self, cell: &Coord) -> bool {
        self.dimensions.contains(cell)
    }

    /// On the board, unoccupied and not enclosed
    pub fn is_safe(&self, cell: &Coord) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell) && !self.is_dead_end(cell)
    }
}
