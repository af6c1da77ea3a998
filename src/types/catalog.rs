use crate::types::preferences::PriorityKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaporizerKind {
    Portable,
    Desktop,
    Butane,
}

impl VaporizerKind {
    pub fn label(&self) -> &'static str {
        match self {
            VaporizerKind::Portable => "portable",
            VaporizerKind::Desktop => "desktop",
            VaporizerKind::Butane => "butane",
        }
    }
}

/// Per-item 1-10 ratings, one per priority key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    pub vapor_potency: u8,
    pub vapor_comfort: u8,
    pub portability: u8,
    pub battery_life: u8,
    pub build_quality: u8,
    pub ease_of_use: u8,
    pub maintenance: u8,
    pub value: u8,
}

impl Ratings {
    pub fn rating(&self, key: PriorityKey) -> u8 {
        match key {
            PriorityKey::VaporPotency => self.vapor_potency,
            PriorityKey::VaporComfort => self.vapor_comfort,
            PriorityKey::Portability => self.portability,
            PriorityKey::BatteryLife => self.battery_life,
            PriorityKey::BuildQuality => self.build_quality,
            PriorityKey::EaseOfUse => self.ease_of_use,
            PriorityKey::Maintenance => self.maintenance,
            PriorityKey::Value => self.value,
        }
    }
}

/// A static, read-only catalog record scored against user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaporizer {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub price: f64,
    pub kind: VaporizerKind,
    pub ratings: Ratings,
    #[serde(default)]
    pub beginner_friendly: bool,
    #[serde(default)]
    pub advanced_features: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Vaporizer {
    /// Case-insensitive substring probe over the feature list.
    pub fn has_feature(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.features
            .iter()
            .any(|feature| feature.to_lowercase().contains(&needle))
    }
}
