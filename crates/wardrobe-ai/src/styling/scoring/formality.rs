use crate::styling::domain::ClothingItem;

fn tagged_ranks(items: &[&ClothingItem]) -> Vec<u8> {
    items
        .iter()
        .filter_map(|item| item.formality)
        .map(|formality| formality.rank())
        .collect()
}

/// Score formality consistency across the outfit, in [0, 10].
///
/// Same level everywhere is a perfect 10, adjacent levels an acceptable 7.
/// Athletic mixed with any tailored level is a hard clash (0); non-adjacent
/// tailored levels score 2. Untagged outfits get a neutral 5.
pub fn score_formality_match(items: &[&ClothingItem]) -> f32 {
    let ranks = tagged_ranks(items);

    let (Some(&max), Some(&min)) = (ranks.iter().max(), ranks.iter().min()) else {
        return 5.0;
    };

    let range = max - min;
    if range == 0 {
        return 10.0;
    }
    if range == 1 {
        return 7.0;
    }
    if max == 99 {
        return 0.0;
    }
    2.0
}

/// Pre-filter: reject a combination before scoring when two or more tagged
/// items span more than one adjacency step.
pub fn has_formality_clash(items: &[&ClothingItem]) -> bool {
    let ranks = tagged_ranks(items);
    if ranks.len() < 2 {
        return false;
    }

    let (Some(&max), Some(&min)) = (ranks.iter().max(), ranks.iter().min()) else {
        return false;
    };
    max - min > 1
}
