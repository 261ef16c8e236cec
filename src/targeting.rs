// Food targeting

use crate::error::EngineError;
use crate::types::Coord;

/// Returns the food item nearest to `head` by Manhattan distance
///
/// Ties resolve to the first minimum in snapshot order. That only makes the
/// choice deterministic; nothing relies on which of two equidistant items wins.
pub fn nearest_food(head: Coord, food: &[Coord]) -> Result<Coord, EngineError> {
    let mut best: Option<(i32, Coord)> = None;

    for &item in food {
        let distance = head.manhattan_distance(&item);
        match best {
            Some((d, _)) if d <= distance => {}
            _ => best = Some((distance, item)),
        }
    }

    best.map(|(_, item)| item).ok_or(EngineError::NoFood)
}
