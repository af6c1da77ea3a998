use crate::scoring::BlockScore;
use crate::types::catalog::{Vaporizer, VaporizerKind};
use crate::types::preferences::PortabilityPreference;

/// Portability fit. A direct conflict between the stated preference and the
/// item class (desktop wanted, handheld offered, or the reverse) costs points
/// rather than merely earning none.
pub fn portability_fit(preference: PortabilityPreference, item: &Vaporizer) -> BlockScore {
    use PortabilityPreference as Pref;
    use VaporizerKind as Kind;

    let points = match (preference, item.kind) {
        (Pref::Desktop, Kind::Desktop) => 15.0,
        (Pref::Desktop, Kind::Portable | Kind::Butane) => -5.0,
        (Pref::PocketSize, Kind::Portable) if item.has_feature("compact") => 15.0,
        (Pref::PocketSize | Pref::Portable, Kind::Portable) => 10.0,
        (Pref::PocketSize | Pref::Portable, Kind::Desktop) => -5.0,
        (Pref::PocketSize | Pref::Portable, Kind::Butane) => 0.0,
        (Pref::NoPreference, _) => 8.0,
    };

    BlockScore { points, max: 15.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn item(id: &str) -> Vaporizer {
        builtin_catalog()
            .into_iter()
            .find(|item| item.id == id)
            .expect("builtin item should exist")
    }

    #[test]
    fn pocket_size_with_compact_portable_takes_full_credit() {
        let score = portability_fit(PortabilityPreference::PocketSize, &item("aurora-go"));
        assert_eq!(score.points, 15.0);
    }

    #[test]
    fn pocket_size_without_compact_feature_takes_partial_credit() {
        // terra-sage is portable but not marketed as compact.
        let score = portability_fit(PortabilityPreference::PocketSize, &item("terra-sage"));
        assert_eq!(score.points, 10.0);
    }

    #[test]
    fn desktop_preference_penalizes_handheld_items() {
        let score = portability_fit(PortabilityPreference::Desktop, &item("aurora-go"));
        assert_eq!(score.points, -5.0);
        let score = portability_fit(PortabilityPreference::Desktop, &item("ember-torch"));
        assert_eq!(score.points, -5.0);
    }

    #[test]
    fn portable_preference_penalizes_desktop_items() {
        let score = portability_fit(PortabilityPreference::Portable, &item("atlas-desk"));
        assert_eq!(score.points, -5.0);
    }

    #[test]
    fn no_preference_takes_flat_partial_credit() {
        for id in ["aurora-go", "atlas-desk", "ember-torch"] {
            let score = portability_fit(PortabilityPreference::NoPreference, &item(id));
            assert_eq!(score.points, 8.0);
        }
    }
}
