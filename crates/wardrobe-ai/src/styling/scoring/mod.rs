mod colour;
mod formality;
mod outerwear;
mod silhouette;

pub use colour::score_colour_harmony;
pub use formality::{has_formality_clash, score_formality_match};
pub use outerwear::score_outerwear_compatibility;
pub use silhouette::{score_fit_balance, score_length_proportion};

use super::domain::ClothingItem;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weight table combining the dimension scores into one outfit score. Owned
/// immutably by the engine; safe for concurrent read-only use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub colour: f32,
    pub formality: f32,
    pub fit: f32,
    pub length: f32,
    /// Fit and length are inapplicable on the full-body path, so colour and
    /// formality split the whole weight between them.
    pub full_body_colour: f32,
    pub full_body_formality: f32,
    /// Multiplier on `(outerwear score − 5)`, applied as an additive
    /// adjustment rather than a weighted term.
    pub outerwear_adjustment: f32,
    /// Upper bound of the uniform random tie-breaker.
    pub jitter_span: f32,
    /// Bonus per slot item carrying an image reference.
    pub image_bonus: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            colour: 0.30,
            formality: 0.25,
            fit: 0.25,
            length: 0.20,
            full_body_colour: 0.50,
            full_body_formality: 0.50,
            outerwear_adjustment: 0.3,
            jitter_span: 0.5,
            image_bonus: 0.2,
        }
    }
}

fn finishing_terms<R: Rng>(
    items: &[&ClothingItem],
    weights: &ScoreWeights,
    rng: &mut R,
) -> f32 {
    let jitter = rng.gen::<f32>() * weights.jitter_span;
    let image_count = items.iter().filter(|item| item.image_ref.is_some()).count();
    jitter + image_count as f32 * weights.image_bonus
}

/// Composite score for a top + bottom combination, floored at 0.
pub fn score_separates_outfit<R: Rng>(
    top: &ClothingItem,
    bottom: &ClothingItem,
    shoes: &ClothingItem,
    outerwear: Option<&ClothingItem>,
    weights: &ScoreWeights,
    rng: &mut R,
) -> f32 {
    let mut items: Vec<&ClothingItem> = vec![top, bottom, shoes];
    if let Some(outer) = outerwear {
        items.push(outer);
    }

    let mut composite = score_colour_harmony(&items) * weights.colour
        + score_formality_match(&items) * weights.formality
        + score_fit_balance(top, bottom) * weights.fit
        + score_length_proportion(top, bottom) * weights.length;

    if let Some(outer) = outerwear {
        composite +=
            (score_outerwear_compatibility(outer, top) - 5.0) * weights.outerwear_adjustment;
    }

    composite += finishing_terms(&items, weights, rng);
    composite.max(0.0)
}

/// Composite score for a full-body combination; fit and length do not apply.
pub fn score_full_body_outfit<R: Rng>(
    full_body: &ClothingItem,
    shoes: &ClothingItem,
    outerwear: Option<&ClothingItem>,
    weights: &ScoreWeights,
    rng: &mut R,
) -> f32 {
    let mut items: Vec<&ClothingItem> = vec![full_body, shoes];
    if let Some(outer) = outerwear {
        items.push(outer);
    }

    let mut composite = score_colour_harmony(&items) * weights.full_body_colour
        + score_formality_match(&items) * weights.full_body_formality;

    if let Some(outer) = outerwear {
        composite +=
            (score_outerwear_compatibility(outer, full_body) - 5.0) * weights.outerwear_adjustment;
    }

    composite += finishing_terms(&items, weights, rng);
    composite.max(0.0)
}
