use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use super::activity::filter_by_activity;
use super::alternatives::swap_alternatives;
use super::domain::{
    Category, ClothingItem, GenerationRequest, ItemId, OutfitSelection, WardrobeShortfall,
};
use super::generator::{full_body_candidates, separates_candidates, WardrobeBuckets};
use super::scoring::ScoreWeights;
use super::selector::select_top;
use super::weather::outerwear_mode;

/// Stateless outfit generator applying the weight table to a wardrobe
/// snapshot. Holds no mutable state, never touches its inputs, and is safe to
/// share across callers; the only non-determinism is the injected random
/// source feeding the score jitter.
pub struct OutfitEngine {
    weights: ScoreWeights,
}

impl Default for OutfitEngine {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

impl OutfitEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Generate ranked outfits using the thread-local entropy source.
    pub fn generate(&self, wardrobe: &[ClothingItem], request: &GenerationRequest) -> OutfitSelection {
        let mut rng: ThreadRng = rand::thread_rng();
        self.generate_with_rng(wardrobe, request, &mut rng)
    }

    /// Generate ranked outfits with a caller-provided random source, letting
    /// tests seed the jitter term.
    pub fn generate_with_rng<R: Rng>(
        &self,
        wardrobe: &[ClothingItem],
        request: &GenerationRequest,
        rng: &mut R,
    ) -> OutfitSelection {
        let active = filter_by_activity(wardrobe, request.activity.as_deref());
        let buckets = WardrobeBuckets::partition(&active);

        if buckets.shoes.is_empty() {
            return OutfitSelection::shortfall(WardrobeShortfall::MissingShoes);
        }

        let has_separates_path = !buckets.tops.is_empty() && !buckets.bottoms.is_empty();
        let has_full_body_path = !buckets.full_body.is_empty();
        if !has_separates_path && !has_full_body_path {
            return OutfitSelection::shortfall(WardrobeShortfall::MissingGarments);
        }

        let filtered = buckets.filtered_for(request.temperature);
        let mode = outerwear_mode(request.temperature);

        let mut candidates = Vec::new();
        if has_separates_path {
            candidates.extend(separates_candidates(&filtered, mode, &self.weights, true, rng));
        }
        if has_full_body_path {
            candidates.extend(full_body_candidates(&filtered, mode, &self.weights, rng));
        }

        // The clash pre-filter can be over-aggressive for wardrobes whose
        // formality tags all collide; regenerate the separates path without
        // it rather than returning nothing.
        if candidates.is_empty() && has_separates_path {
            candidates = separates_candidates(&filtered, mode, &self.weights, false, rng);
        }

        debug!(
            candidates = candidates.len(),
            separates = has_separates_path,
            full_body = has_full_body_path,
            "scored outfit candidates"
        );

        OutfitSelection {
            outfits: select_top(candidates, request.count),
            error: None,
        }
    }

    /// Substitute items for one slot; see [`swap_alternatives`].
    pub fn alternatives(
        &self,
        wardrobe: &[ClothingItem],
        category: Category,
        current_item_id: &ItemId,
        temperature: Option<f32>,
        activity: Option<&str>,
    ) -> Vec<ClothingItem> {
        swap_alternatives(wardrobe, category, current_item_id, temperature, activity)
    }
}
