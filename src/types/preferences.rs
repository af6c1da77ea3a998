use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Novice,
    SomeExperience,
    Experienced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryUse {
    Medical,
    Recreational,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsagePattern {
    Casual,
    Daily,
    Heavy,
    Microdose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortabilityPreference {
    PocketSize,
    Portable,
    Desktop,
    NoPreference,
}

/// The eight product attributes a user can weight, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    VaporPotency,
    VaporComfort,
    Portability,
    BatteryLife,
    BuildQuality,
    EaseOfUse,
    Maintenance,
    Value,
}

impl PriorityKey {
    pub const ALL: [PriorityKey; 8] = [
        PriorityKey::VaporPotency,
        PriorityKey::VaporComfort,
        PriorityKey::Portability,
        PriorityKey::BatteryLife,
        PriorityKey::BuildQuality,
        PriorityKey::EaseOfUse,
        PriorityKey::Maintenance,
        PriorityKey::Value,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityKey::VaporPotency => "vapor potency",
            PriorityKey::VaporComfort => "vapor comfort",
            PriorityKey::Portability => "portability",
            PriorityKey::BatteryLife => "battery life",
            PriorityKey::BuildQuality => "build quality",
            PriorityKey::EaseOfUse => "ease of use",
            PriorityKey::Maintenance => "low maintenance",
            PriorityKey::Value => "value for money",
        }
    }
}

/// User-supplied 1-10 importance weights, one per [`PriorityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub vapor_potency: u8,
    pub vapor_comfort: u8,
    pub portability: u8,
    pub battery_life: u8,
    pub build_quality: u8,
    pub ease_of_use: u8,
    pub maintenance: u8,
    pub value: u8,
}

impl PriorityWeights {
    pub fn uniform(weight: u8) -> Self {
        Self {
            vapor_potency: weight,
            vapor_comfort: weight,
            portability: weight,
            battery_life: weight,
            build_quality: weight,
            ease_of_use: weight,
            maintenance: weight,
            value: weight,
        }
    }

    pub fn weight(&self, key: PriorityKey) -> u8 {
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

    pub fn iter(&self) -> impl Iterator<Item = (PriorityKey, u8)> + '_ {
        PriorityKey::ALL.into_iter().map(|key| (key, self.weight(key)))
    }

    /// The highest-weighted key; earlier keys win ties.
    pub fn top(&self) -> PriorityKey {
        let mut best = PriorityKey::VaporPotency;
        let mut best_weight = 0u8;
        for (key, weight) in self.iter() {
            if weight > best_weight {
                best = key;
                best_weight = weight;
            }
        }
        best
    }

    pub fn validate(&self) -> Result<()> {
        for (key, weight) in self.iter() {
            if !(1..=10).contains(&weight) {
                return Err(MatchError::InvalidPreferences(format!(
                    "priority weight for {} must be between 1 and 10 (found {})",
                    key.label(),
                    weight
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub experience: ExperienceLevel,
    pub primary_use: PrimaryUse,
    pub usage_pattern: UsagePattern,
    pub portability: PortabilityPreference,
    pub budget: f64,
    pub priorities: PriorityWeights,
}

impl UserPreferences {
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(MatchError::InvalidPreferences(format!(
                "budget must be a non-negative amount (found {})",
                self.budget
            )));
        }
        self.priorities.validate()
    }
}
