// Path mapper
//
// Turns the displacement between the head and a target into a fixed move
// queue: every horizontal step first, then every vertical step. The queue is
// committed once and followed turn by turn until it is exhausted or invalidated.

use crate::types::{Coord, Direction};

/// Signed displacement `head - target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub fn between(head: Coord, target: Coord) -> Self {
        Displacement {
            dx: head.x.saturating_sub(target.x),
            dy: head.y.saturating_sub(target.y),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    pub fn manhattan(&self) -> usize {
        (self.dx.unsigned_abs() as usize).saturating_add(self.dy.unsigned_abs() as usize)
    }

    /// Displacement after the head takes one step in `dir`
    pub fn after(&self, dir: Direction) -> Self {
        let (mx, my) = dir.delta();
        Displacement {
            dx: self.dx.saturating_add(mx),
            dy: self.dy.saturating_add(my),
        }
    }
}

/// A committed move queue with a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    target: Coord,
    moves: Vec<Direction>,
    cursor: usize,
}

impl Plan {
    pub fn target(&self) -> Coord {
        self.target
    }

    /// All moves, including ones already taken
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The next move to take, if any remain
    pub fn peek(&self) -> Option<Direction> {
        self.moves.get(self.cursor).copied()
    }

    /// Marks the current move as taken
    pub fn advance(&mut self) {
        if self.cursor < self.moves.len() {
            self.cursor += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Builds the horizontal-then-vertical move queue from `head` to `target`
///
/// The queue length always equals the Manhattan distance between the two.
pub fn plan_path(head: Coord, target: Coord) -> Plan {
    let d = Displacement::between(head, target);

    let x_move = if d.dx < 0 {
        Direction::Right
    } else {
        Direction::Left
    };
    let y_move = if d.dy < 0 {
        Direction::Down
    } else {
        Direction::Up
    };

    let mut moves = Vec::with_capacity(d.manhattan());
    moves.extend(std::iter::repeat(x_move).take(d.dx.unsigned_abs() as usize));
    moves.extend(std::iter::repeat(y_move).take(d.dy.unsigned_abs() as usize));

    Plan {
        target,
        moves,
        cursor: 0,
    }
}
