use crate::scoring::{budget, BlockScore};
use crate::types::catalog::Vaporizer;
use crate::types::preferences::{PriorityKey, PriorityWeights, UserPreferences};

/// Per-key scaling constant for the priority-weighted block.
pub const PRIORITY_SCALE: f32 = 0.6;

/// Weighted fit across the eight priority keys. Each key contributes
/// `(effective_rating / 5) * weight * PRIORITY_SCALE` against a maximum of
/// `(10 / 5) * weight * PRIORITY_SCALE`, so the block maximum depends only on
/// the user's weights, never on the item.
pub fn priority_fit(prefs: &UserPreferences, item: &Vaporizer) -> BlockScore {
    let mut points = 0.0f32;
    for (key, weight) in prefs.priorities.iter() {
        let rating = effective_rating(key, item, prefs.budget);
        points += (f32::from(rating) / 5.0) * f32::from(weight) * PRIORITY_SCALE;
    }
    BlockScore {
        points,
        max: block_max(&prefs.priorities),
    }
}

/// The rating that should count for a key: maintenance is inverted (less
/// upkeep is better) and value is derived from the budget tiers rather than
/// taken from the catalog.
pub fn effective_rating(key: PriorityKey, item: &Vaporizer, user_budget: f64) -> u8 {
    match key {
        PriorityKey::Maintenance => 11 - item.ratings.maintenance,
        PriorityKey::Value => budget::value_rating(user_budget, item.price),
        _ => item.ratings.rating(key),
    }
}

pub fn block_max(weights: &PriorityWeights) -> f32 {
    weights
        .iter()
        .map(|(_, weight)| 2.0 * f32::from(weight) * PRIORITY_SCALE)
        .sum()
}
