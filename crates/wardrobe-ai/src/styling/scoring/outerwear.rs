use crate::styling::domain::{ClothingItem, Fit};

/// Score how well an outerwear layer sits over the anchor garment (the top on
/// the separates path, the full-body piece otherwise), in [0, 10].
///
/// Oversized over oversized is penalised as bulk; oversized over a tight or
/// regular anchor is rewarded as layering contrast; regular-fit outerwear is
/// versatile and gets a small flat bonus. A formality gap of 0/1 between the
/// layer and the anchor adds +2/+1, anything wider costs 2.
pub fn score_outerwear_compatibility(outerwear: &ClothingItem, anchor: &ClothingItem) -> f32 {
    let mut score = 5.0_f32;

    let outer_fit = outerwear.fit_or_default();
    let anchor_fit = anchor.fit_or_default();
    if outer_fit == Fit::Oversized && anchor_fit == Fit::Oversized {
        score -= 3.0;
    } else if outer_fit == Fit::Oversized {
        score += 2.0;
    } else if outer_fit == Fit::Regular {
        score += 1.0;
    }

    if let (Some(outer), Some(anchor)) = (outerwear.formality, anchor.formality) {
        let gap = outer.rank().abs_diff(anchor.rank());
        score += match gap {
            0 => 2.0,
            1 => 1.0,
            _ => -2.0,
        };
    }

    score.clamp(0.0, 10.0)
}
