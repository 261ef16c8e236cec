// Right-of-way arbiter
//
// A destination is contested when a critical opponent at least as long as us
// has its head one step away from it: that snake could move into the same cell
// next tick and win the collision.

use crate::occupancy::Occupancy;
use crate::types::{Battlesnake, Coord, Direction};

/// Inputs that stay fixed while arbitrating a single turn
#[derive(Debug, Clone, Copy)]
pub struct Arbiter<'a> {
    pub occupancy: &'a Occupancy<'a>,
    pub critical: &'a [Battlesnake],
    pub self_length: usize,
    /// Preference order for substitute moves
    pub order: &'a [Direction],
    /// Returned when every direction fails; carries no survival guarantee
    pub boxed_in_default: Direction,
}

impl<'a> Arbiter<'a> {
    /// True if a longer-or-equal critical opponent's head is adjacent to `cell`
    pub fn is_contested(&self, cell: &Coord) -> bool {
        self.critical.iter().any(|snake| {
            snake.len() >= self.self_length
                && snake
                    .head()
                    .map_or(false, |h| h.manhattan_distance(cell) == 1)
        })
    }

    /// Returns `proposed` if it is safe and uncontested, else the first safe
    /// alternative in preference order, else the boxed-in default
    pub fn arbitrate(&self, proposed: Direction, head: Coord) -> Direction {
        let destination = proposed.apply(&head);

        if self.occupancy.is_safe(&destination) && !self.is_contested(&destination) {
            return proposed;
        }

        let alternatives: Vec<Direction> = self
            .order
            .iter()
            .copied()
            .filter(|&d| d != proposed)
            .collect();

        first_safe(self.occupancy, head, &alternatives).unwrap_or(self.boxed_in_default)
    }
}

/// First direction from `candidates` whose destination is on the board,
/// unoccupied and not a dead end
pub fn first_safe(occupancy: &Occupancy, head: Coord, candidates: &[Direction]) -> Option<Direction> {
    candidates
        .iter()
        .copied()
        .find(|dir| occupancy.is_safe(&dir.apply(&head)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Dimensions;

    const ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
        cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
        Battlesnake {
            id: id.to_string(),
            body: coords(body),
            ..Default::default()
        }
    }

    fn dims() -> Dimensions {
        Dimensions::new(11, 11).unwrap()
    }

    #[test]
    fn test_uncontested_move_passes_through() {
        let body = coords(&[(5, 5), (4, 5), (3, 5)]);
        let occ = Occupancy::new(&body, &[], dims());
        let arbiter = Arbiter {
            occupancy: &occ,
            critical: &[],
            self_length: body.len(),
            order: &ORDER,
            boxed_in_default: Direction::Up,
        };
        assert_eq!(arbiter.arbitrate(Direction::Right, Coord::new(5, 5)), Direction::Right);
    }

    #[test]
    fn test_longer_opponent_adjacent_to_destination_forces_substitute() {
        // Our head (5,5) wants (6,5); opponent head at (7,5) is one step from it
        let body = coords(&[(5, 5), (5, 6), (5, 7)]);
        let critical = vec![snake("a", &[(7, 5), (8, 5), (9, 5), (10, 5)])];
        let occ = Occupancy::new(&body, &critical, dims());
        let arbiter = Arbiter {
            occupancy: &occ,
            critical: &critical,
            self_length: body.len(),
            order: &ORDER,
            boxed_in_default: Direction::Up,
        };
        assert!(arbiter.is_contested(&Coord::new(6, 5)));
        let chosen = arbiter.arbitrate(Direction::Right, Coord::new(5, 5));
        assert_eq!(chosen, Direction::Left);
    }

    #[test]
    fn test_shorter_opponent_does_not_contest() {
        let body = coords(&[(5, 5), (5, 6), (5, 7), (5, 8)]);
        let critical = vec![snake("a", &[(7, 5), (8, 5)])];
        let occ = Occupancy::new(&body, &critical, dims());
        let arbiter = Arbiter {
            occupancy: &occ,
            critical: &critical,
            self_length: body.len(),
            order: &ORDER,
            boxed_in_default: Direction::Up,
        };
        assert_eq!(arbiter.arbitrate(Direction::Right, Coord::new(5, 5)), Direction::Right);
    }

    #[test]
    fn test_never_returns_move_into_own_body() {
        // Head wrapped on three sides by its own coil; only left is open
        let body = coords(&[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (5, 6)]);
        let critical = vec![snake("a", &[(2, 5), (1, 5), (0, 5), (0, 4), (0, 3), (0, 2)])];
        let occ = Occupancy::new(&body, &critical, dims());
        let arbiter = Arbiter {
            occupancy: &occ,
            critical: &critical,
            self_length: body.len(),
            order: &ORDER,
            boxed_in_default: Direction::Up,
        };
        for proposed in Direction::all().iter() {
            let chosen = arbiter.arbitrate(*proposed, Coord::new(5, 5));
            let dest = chosen.apply(&Coord::new(5, 5));
            assert!(!body.contains(&dest), "{:?} led into own body", chosen);
        }
    }

    #[test]
    fn test_boxed_in_returns_default() {
        // Head at the top-left corner with both in-bounds neighbours occupied
        let body = coords(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let occ = Occupancy::new(&body, &[], dims());
        let arbiter = Arbiter {
            occupancy: &occ,
            critical: &[],
            self_length: body.len(),
            order: &ORDER,
            boxed_in_default: Direction::Up,
        };
        assert_eq!(arbiter.arbitrate(Direction::Right, Coord::new(0, 0)), Direction::Up);
    }

    #[test]
    fn test_first_safe_skips_out_of_bounds() {
        let body = coords(&[(10, 5)]);
        let occ = Occupancy::new(&body, &[], dims());
        assert_eq!(
            first_safe(&occ, Coord::new(10, 5), &ORDER),
            Some(Direction::Left)
        );
    }
}
