// Critical-snake filter
//
// Narrows the opponent list to snakes close enough to interact with us in the
// next few moves. Everything downstream (occupancy, right-of-way, target
// stealing) only looks at this subset.

use crate::types::{Battlesnake, Coord};

/// Default Manhattan radius for the critical set
pub const DEFAULT_CRITICAL_RADIUS: i32 = 4;

/// Selects opponents whose head or tail is within `radius` of `self_head`
///
/// Snakes whose identifier equals `self_id` are never included, and snakes
/// with an empty body are skipped.
pub fn filter_critical(
    snakes: &[Battlesnake],
    self_id: &str,
    self_head: Coord,
    radius: i32,
) -> Vec<Battlesnake> {
    snakes
        .iter()
        .filter(|snake| snake.id != self_id)
        .filter(|snake| {
            let near = |c: Option<Coord>| {
                c.map_or(false, |c| self_head.manhattan_distance(&c) <= radius)
            };
            near(snake.head()) || near(snake.tail())
        })
        .cloned()
        .collect()
}
