use crate::scoring::BlockScore;
use crate::types::catalog::Vaporizer;
use crate::types::preferences::ExperienceLevel;

/// Experience fit: full credit when the experience level matches the item's
/// audience flag, partial credit for the middle of the road.
pub fn experience_fit(experience: ExperienceLevel, item: &Vaporizer) -> BlockScore {
    let points = match experience {
        ExperienceLevel::Novice if item.beginner_friendly => 20.0,
        ExperienceLevel::SomeExperience => 15.0,
        ExperienceLevel::Experienced if item.advanced_features => 20.0,
        _ => 0.0,
    };
    BlockScore { points, max: 20.0 }
}
