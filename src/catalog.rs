use crate::error::{MatchError, Result};
use crate::types::catalog::{Ratings, Vaporizer, VaporizerKind};
use crate::types::config::MatchConfig;
use std::path::Path;

/// Built-in catalog seeds. Ratings follow the priority-key order:
/// potency, comfort, portability, battery, build, ease, maintenance, value.
/// The maintenance figure is upkeep required, so lower is better there.
struct Seed {
    id: &'static str,
    name: &'static str,
    manufacturer: &'static str,
    price: f64,
    kind: VaporizerKind,
    ratings: [u8; 8],
    beginner_friendly: bool,
    advanced_features: bool,
    features: &'static [&'static str],
    pros: &'static [&'static str],
    cons: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "aurora-go",
        name: "Aurora Go",
        manufacturer: "Northbound Labs",
        price: 89.0,
        kind: VaporizerKind::Portable,
        ratings: [6, 7, 9, 6, 6, 9, 2, 8],
        beginner_friendly: true,
        advanced_features: false,
        features: &["compact design", "one-button operation", "session auto-off"],
        pros: &["Fits in any pocket", "Nothing to configure"],
        cons: &["Single fixed temperature"],
    },
    Seed {
        id: "halo-lite",
        name: "Halo Lite",
        manufacturer: "Halo Vapor Co.",
        price: 59.0,
        kind: VaporizerKind::Portable,
        ratings: [5, 6, 8, 5, 5, 9, 2, 9],
        beginner_friendly: true,
        advanced_features: false,
        features: &["compact design", "draw activation"],
        pros: &["Lowest cost of entry", "Very easy cleaning"],
        cons: &["Modest vapor output", "Short battery life"],
    },
    Seed {
        id: "peak-mini",
        name: "Peak Mini",
        manufacturer: "Summit Devices",
        price: 139.0,
        kind: VaporizerKind::Portable,
        ratings: [7, 8, 9, 7, 7, 7, 4, 8],
        beginner_friendly: true,
        advanced_features: false,
        features: &["compact design", "precise temperature control", "haptic feedback"],
        pros: &["Pocketable with real temperature control", "Quick heat-up"],
        cons: &["Small oven needs frequent refills"],
    },
    Seed {
        id: "strato",
        name: "Strato",
        manufacturer: "Summit Devices",
        price: 249.0,
        kind: VaporizerKind::Portable,
        ratings: [9, 8, 7, 8, 9, 6, 6, 7],
        beginner_friendly: false,
        advanced_features: true,
        features: &[
            "precise temperature control",
            "microdosing mode",
            "session presets",
            "app control",
        ],
        pros: &["Dense vapor for a portable", "Fine-grained dosing control"],
        cons: &["Learning curve", "Premium price"],
    },
    Seed {
        id: "terra-sage",
        name: "Terra Sage",
        manufacturer: "Terraflor",
        price: 180.0,
        kind: VaporizerKind::Portable,
        ratings: [7, 9, 7, 7, 8, 8, 5, 8],
        beginner_friendly: true,
        advanced_features: false,
        features: &["full flavor convection", "replaceable battery", "glass vapor path"],
        pros: &["Outstanding flavor", "Swappable batteries"],
        cons: &["Bulkier than pocket units"],
    },
    Seed {
        id: "ember-torch",
        name: "Ember Torch",
        manufacturer: "Craftwood",
        price: 75.0,
        kind: VaporizerKind::Butane,
        ratings: [8, 6, 7, 10, 7, 4, 6, 8],
        beginner_friendly: false,
        advanced_features: false,
        features: &["butane powered", "no battery to charge", "full flavor convection"],
        pros: &["Never needs charging", "Strong draws on demand"],
        cons: &["Manual technique required", "Open flame"],
    },
    Seed {
        id: "atlas-desk",
        name: "Atlas Desk",
        manufacturer: "Atlas Instruments",
        price: 420.0,
        kind: VaporizerKind::Desktop,
        ratings: [9, 9, 2, 10, 9, 7, 4, 7],
        beginner_friendly: false,
        advanced_features: true,
        features: &[
            "precise temperature control",
            "full flavor convection",
            "balloon and whip delivery",
        ],
        pros: &["Best-in-class vapor quality", "Built to last a decade"],
        cons: &["Mains power only", "Takes desk space"],
    },
    Seed {
        id: "nimbus-max",
        name: "Nimbus Max",
        manufacturer: "Atlas Instruments",
        price: 650.0,
        kind: VaporizerKind::Desktop,
        ratings: [10, 9, 1, 10, 10, 6, 4, 6],
        beginner_friendly: false,
        advanced_features: true,
        features: &[
            "precise temperature control",
            "dual delivery",
            "programmable sessions",
        ],
        pros: &["Unmatched potency and comfort", "Group-session capacity"],
        cons: &["Significant investment", "Not remotely portable"],
    },
];

fn build(seed: &Seed) -> Vaporizer {
    let [vapor_potency, vapor_comfort, portability, battery_life, build_quality, ease_of_use, maintenance, value] =
        seed.ratings;
    Vaporizer {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        manufacturer: seed.manufacturer.to_string(),
        price: seed.price,
        kind: seed.kind,
        ratings: Ratings {
            vapor_potency,
            vapor_comfort,
            portability,
            battery_life,
            build_quality,
            ease_of_use,
            maintenance,
            value,
        },
        beginner_friendly: seed.beginner_friendly,
        advanced_features: seed.advanced_features,
        features: seed.features.iter().map(|s| s.to_string()).collect(),
        pros: seed.pros.iter().map(|s| s.to_string()).collect(),
        cons: seed.cons.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_catalog() -> Vec<Vaporizer> {
    SEEDS.iter().map(build).collect()
}

/// Built-in catalog, or the external JSON file named in config.
pub fn load_catalog(config: Option<&MatchConfig>) -> Result<Vec<Vaporizer>> {
    match config.and_then(MatchConfig::catalog_file) {
        Some(path) => load_catalog_file(&path),
        None => Ok(builtin_catalog()),
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<Vaporizer>> {
    if !path.exists() {
        return Err(MatchError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let catalog: Vec<Vaporizer> = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &[Vaporizer]) -> Result<()> {
    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }
    for item in catalog {
        if item.id.trim().is_empty() {
            return Err(MatchError::InvalidCatalog(
                "catalog item has an empty id".to_string(),
            ));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(MatchError::InvalidCatalog(format!(
                "{}: price must be non-negative (found {})",
                item.id, item.price
            )));
        }
        for key in crate::types::preferences::PriorityKey::ALL {
            let rating = item.ratings.rating(key);
            if !(1..=10).contains(&rating) {
                return Err(MatchError::InvalidCatalog(format!(
                    "{}: rating for {} must be between 1 and 10 (found {})",
                    item.id,
                    key.label(),
                    rating
                )));
            }
        }
    }
    Ok(())
}
