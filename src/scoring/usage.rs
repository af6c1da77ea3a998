use crate::scoring::BlockScore;
use crate::types::catalog::Vaporizer;
use crate::types::preferences::{PrimaryUse, UsagePattern};

/// Primary-use and usage-pattern fit, 10 points each.
///
/// Medical users want precise temperature control, recreational users want
/// flavor, and "both" takes half credit from either. The pattern half checks
/// the attribute that matters for that cadence.
pub fn usage_fit(primary_use: PrimaryUse, pattern: UsagePattern, item: &Vaporizer) -> BlockScore {
    let precise = item.has_feature("precise temperature");
    let flavor = item.has_feature("flavor");

    let mut points = match primary_use {
        PrimaryUse::Medical if precise => 10.0,
        PrimaryUse::Recreational if flavor => 10.0,
        PrimaryUse::Both if precise || flavor => 5.0,
        _ => 0.0,
    };

    let pattern_hit = match pattern {
        UsagePattern::Casual => item.ratings.ease_of_use >= 7,
        UsagePattern::Daily => item.ratings.battery_life >= 7,
        UsagePattern::Heavy => item.ratings.build_quality >= 8,
        UsagePattern::Microdose => item.has_feature("microdos"),
    };
    if pattern_hit {
        points += 10.0;
    }

    BlockScore { points, max: 20.0 }
}
