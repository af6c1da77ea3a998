use crate::scoring::BlockScore;

/// Prices up to 20% over budget still earn partial credit.
pub const STRETCH_FACTOR: f64 = 1.2;

pub fn budget_fit(budget: f64, price: f64) -> BlockScore {
    let points = if price <= budget {
        15.0
    } else if price <= budget * STRETCH_FACTOR {
        8.0
    } else {
        0.0
    };
    BlockScore { points, max: 15.0 }
}

/// Derived 1-10 value rating from the same budget tiers, used when the user
/// weights "value" as a priority.
pub fn value_rating(budget: f64, price: f64) -> u8 {
    if price <= budget {
        10
    } else if price <= budget * STRETCH_FACTOR {
        6
    } else {
        2
    }
}
