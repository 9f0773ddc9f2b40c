use chrono::Utc;
use rand::Rng;

use super::domain::{Category, ClothingItem, OutfitBase, OutfitCandidate};
use super::scoring::{
    has_formality_clash, score_full_body_outfit, score_separates_outfit, ScoreWeights,
};
use super::weather::{filter_by_weather, OuterwearMode};

/// Wardrobe items partitioned by slot. An item lands in exactly one bucket
/// because its category is fixed at intake.
#[derive(Debug, Default)]
pub(crate) struct WardrobeBuckets<'a> {
    pub(crate) tops: Vec<&'a ClothingItem>,
    pub(crate) bottoms: Vec<&'a ClothingItem>,
    pub(crate) shoes: Vec<&'a ClothingItem>,
    pub(crate) outerwear: Vec<&'a ClothingItem>,
    pub(crate) full_body: Vec<&'a ClothingItem>,
}

impl<'a> WardrobeBuckets<'a> {
    pub(crate) fn partition(items: &[&'a ClothingItem]) -> Self {
        let mut buckets = Self::default();
        for item in items {
            match item.category {
                Category::Top => buckets.tops.push(item),
                Category::Bottom => buckets.bottoms.push(item),
                Category::Shoes => buckets.shoes.push(item),
                Category::Outerwear => buckets.outerwear.push(item),
                Category::FullBody => buckets.full_body.push(item),
            }
        }
        buckets
    }

    /// Weather-narrow every bucket. Each call keeps the original bucket when
    /// exclusion would empty it.
    pub(crate) fn filtered_for(&self, temperature: Option<f32>) -> Self {
        Self {
            tops: filter_by_weather(&self.tops, temperature),
            bottoms: filter_by_weather(&self.bottoms, temperature),
            shoes: filter_by_weather(&self.shoes, temperature),
            outerwear: filter_by_weather(&self.outerwear, temperature),
            full_body: filter_by_weather(&self.full_body, temperature),
        }
    }
}

/// Branch a clash-free base combination on the outerwear policy, emitting a
/// bare candidate, one per outerwear item, or both.
fn branch_outerwear<'a>(
    base_items: &[&ClothingItem],
    outerwear: &[&'a ClothingItem],
    mode: OuterwearMode,
    enforce_clash: bool,
    mut emit: impl FnMut(Option<&'a ClothingItem>),
) {
    let layered = |emit: &mut dyn FnMut(Option<&'a ClothingItem>)| {
        for &outer in outerwear {
            if enforce_clash {
                let mut with_outer = base_items.to_vec();
                with_outer.push(outer);
                if has_formality_clash(&with_outer) {
                    continue;
                }
            }
            emit(Some(outer));
        }
    };

    match mode {
        _ if outerwear.is_empty() => emit(None),
        OuterwearMode::Excluded => emit(None),
        OuterwearMode::Required => layered(&mut emit),
        OuterwearMode::Optional => {
            emit(None);
            layered(&mut emit);
        }
    }
}

/// Enumerate and score the top + bottom composition path over the Cartesian
/// product of the filtered buckets. `enforce_clash` is dropped on the
/// fallback regeneration pass.
pub(crate) fn separates_candidates<R: Rng>(
    buckets: &WardrobeBuckets<'_>,
    mode: OuterwearMode,
    weights: &ScoreWeights,
    enforce_clash: bool,
    rng: &mut R,
) -> Vec<OutfitCandidate> {
    let mut candidates = Vec::new();

    for top in &buckets.tops {
        for bottom in &buckets.bottoms {
            for shoes in &buckets.shoes {
                let base = [*top, *bottom, *shoes];
                if enforce_clash && has_formality_clash(&base) {
                    continue;
                }

                branch_outerwear(&base, &buckets.outerwear, mode, enforce_clash, |outer| {
                    let score = score_separates_outfit(top, bottom, shoes, outer, weights, rng);
                    candidates.push(OutfitCandidate {
                        base: OutfitBase::Separates {
                            top: (*top).clone(),
                            bottom: (*bottom).clone(),
                        },
                        shoes: (*shoes).clone(),
                        outerwear: outer.cloned(),
                        score,
                        generated_at: Utc::now(),
                    });
                });
            }
        }
    }

    candidates
}

/// Enumerate and score the full-body composition path.
pub(crate) fn full_body_candidates<R: Rng>(
    buckets: &WardrobeBuckets<'_>,
    mode: OuterwearMode,
    weights: &ScoreWeights,
    rng: &mut R,
) -> Vec<OutfitCandidate> {
    let mut candidates = Vec::new();

    for full_body in &buckets.full_body {
        for shoes in &buckets.shoes {
            let base = [*full_body, *shoes];
            if has_formality_clash(&base) {
                continue;
            }

            branch_outerwear(&base, &buckets.outerwear, mode, true, |outer| {
                let score = score_full_body_outfit(full_body, shoes, outer, weights, rng);
                candidates.push(OutfitCandidate {
                    base: OutfitBase::FullBody((*full_body).clone()),
                    shoes: (*shoes).clone(),
                    outerwear: outer.cloned(),
                    score,
                    generated_at: Utc::now(),
                });
            });
        }
    }

    candidates
}
