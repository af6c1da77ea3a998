pub mod budget;
pub mod experience;
pub mod explain;
pub mod portability;
pub mod priorities;
pub mod usage;

use crate::error::{MatchError, Result};
use crate::types::catalog::Vaporizer;
use crate::types::preferences::UserPreferences;
use crate::types::result::{QuizResult, ScoredVaporizer};
use tracing::debug;

/// Points earned by one scoring block against that block's maximum.
#[derive(Debug, Clone, Copy)]
pub struct BlockScore {
    pub points: f32,
    pub max: f32,
}

const ALTERNATE_COUNT: usize = 3;

/// Score one item. The denominator is identical for every item because only
/// the preferences decide each block's maximum.
pub fn score_item(prefs: &UserPreferences, item: &Vaporizer) -> ScoredVaporizer {
    let blocks = [
        experience::experience_fit(prefs.experience, item),
        usage::usage_fit(prefs.primary_use, prefs.usage_pattern, item),
        portability::portability_fit(prefs.portability, item),
        budget::budget_fit(prefs.budget, item.price),
        priorities::priority_fit(prefs, item),
    ];

    let points: f32 = blocks.iter().map(|block| block.points).sum();
    let max: f32 = blocks.iter().map(|block| block.max).sum();
    // The portability penalty can push the raw total below zero.
    let match_percent = ((points / max) * 100.0).round().clamp(0.0, 100.0) as u8;

    debug!(item = %item.id, points, max, match_percent, "scored catalog item");

    ScoredVaporizer {
        item: item.clone(),
        score: points,
        match_percent,
    }
}

/// Score the whole catalog, sorted descending by match percentage.
/// The sort is stable, so ties keep catalog order. An empty catalog is an
/// error rather than a silent fallback.
pub fn score_catalog(
    prefs: &UserPreferences,
    catalog: &[Vaporizer],
) -> Result<Vec<ScoredVaporizer>> {
    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }
    prefs.validate()?;

    let mut scored: Vec<ScoredVaporizer> = catalog
        .iter()
        .map(|item| score_item(prefs, item))
        .collect();
    scored.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    Ok(scored)
}

/// Top pick, up to three alternates, and the explanation sentence.
pub fn recommend(prefs: &UserPreferences, catalog: &[Vaporizer]) -> Result<QuizResult> {
    let mut scored = score_catalog(prefs, catalog)?;
    let top_pick = scored.remove(0);
    scored.truncate(ALTERNATE_COUNT);
    let explanation = explain::explain(prefs, &top_pick.item);
    Ok(QuizResult {
        top_pick,
        alternates: scored,
        explanation,
    })
}
