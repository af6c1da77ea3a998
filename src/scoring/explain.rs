use crate::scoring::priorities;
use crate::types::catalog::{Vaporizer, VaporizerKind};
use crate::types::preferences::{ExperienceLevel, PortabilityPreference, UserPreferences};

/// Build the one-sentence explanation for the top-ranked item.
///
/// Reasons are probed in a fixed order (experience, portability, budget,
/// top-weighted priority) and at most three are kept; when none apply the
/// sentence falls back to a generic endorsement.
pub fn explain(prefs: &UserPreferences, item: &Vaporizer) -> String {
    let mut reasons: Vec<String> = Vec::new();

    match prefs.experience {
        ExperienceLevel::Novice if item.beginner_friendly => {
            reasons.push("it is beginner-friendly and easy to pick up".to_string());
        }
        ExperienceLevel::Experienced if item.advanced_features => {
            reasons.push("it has the advanced features experienced users look for".to_string());
        }
        _ => {}
    }

    match (prefs.portability, item.kind) {
        (
            PortabilityPreference::PocketSize | PortabilityPreference::Portable,
            VaporizerKind::Portable,
        ) => {
            reasons.push("it travels as well as you need it to".to_string());
        }
        (PortabilityPreference::Desktop, VaporizerKind::Desktop) => {
            reasons.push("it delivers the power of a dedicated desktop unit".to_string());
        }
        _ => {}
    }

    if item.price <= prefs.budget {
        reasons.push("it fits comfortably inside your budget".to_string());
    }

    if reasons.len() < 3 {
        let top = prefs.priorities.top();
        if priorities::effective_rating(top, item, prefs.budget) >= 8 {
            reasons.push(format!(
                "it scores highly on {}, your top priority",
                top.label()
            ));
        }
    }

    reasons.truncate(3);
    match reasons.len() {
        0 => format!(
            "The {} is a versatile and well-regarded choice for your preferences.",
            item.name
        ),
        1 => format!("The {} stands out because {}.", item.name, reasons[0]),
        2 => format!(
            "The {} stands out because {} and {}.",
            item.name, reasons[0], reasons[1]
        ),
        _ => format!(
            "The {} stands out because {}, {}, and {}.",
            item.name, reasons[0], reasons[1], reasons[2]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::types::preferences::{PrimaryUse, PriorityWeights, UsagePattern};

    fn prefs() -> UserPreferences {
        UserPreferences {
            experience: ExperienceLevel::Novice,
            primary_use: PrimaryUse::Both,
            usage_pattern: UsagePattern::Casual,
            portability: PortabilityPreference::PocketSize,
            budget: 120.0,
            priorities: PriorityWeights::uniform(5),
        }
    }

    fn item(id: &str) -> Vaporizer {
        builtin_catalog()
            .into_iter()
            .find(|item| item.id == id)
            .expect("builtin item should exist")
    }

    #[test]
    fn explanation_collects_reasons_in_fixed_order() {
        let sentence = explain(&prefs(), &item("aurora-go"));
        assert!(sentence.contains("beginner-friendly"));
        assert!(sentence.contains("travels"));
        assert!(sentence.contains("budget"));
        assert!(sentence.starts_with("The Aurora Go stands out because"));
    }

    #[test]
    fn explanation_caps_at_three_reasons() {
        let sentence = explain(&prefs(), &item("aurora-go"));
        // Three reasons already apply, so the priority probe must not add more.
        assert_eq!(sentence.matches(", and ").count(), 1);
    }

    #[test]
    fn explanation_falls_back_when_nothing_applies() {
        let mut prefs = prefs();
        prefs.experience = ExperienceLevel::Experienced;
        prefs.portability = PortabilityPreference::Desktop;
        prefs.budget = 10.0;
        // halo-lite: no advanced features, portable, above a $10 budget, and a
        // top priority (vapor potency at uniform weights) rated below 8.
        let sentence = explain(&prefs, &item("halo-lite"));
        assert!(sentence.contains("versatile and well-regarded"));
    }

    #[test]
    fn top_priority_reason_names_the_priority() {
        let mut prefs = prefs();
        prefs.experience = ExperienceLevel::Experienced;
        prefs.portability = PortabilityPreference::NoPreference;
        prefs.budget = 10.0;
        prefs.priorities = PriorityWeights::uniform(3);
        prefs.priorities.battery_life = 10;
        let sentence = explain(&prefs, &item("ember-torch"));
        assert!(sentence.contains("battery life"));
    }
}
