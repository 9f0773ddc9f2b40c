use crate::styling::domain::{ClothingItem, Fit, GarmentLength};

/// Score how top and bottom volumes interact, in [0, 10]. Contrasting
/// proportions balance the silhouette; doubled bulk reads shapeless. Missing
/// fits default to Regular.
pub fn score_fit_balance(top: &ClothingItem, bottom: &ClothingItem) -> f32 {
    use Fit::*;

    match (top.fit_or_default(), bottom.fit_or_default()) {
        (Tight, Tight) => 5.0,
        (Tight, Regular) => 7.0,
        (Tight, Oversized) => 6.0,
        (Regular, Tight) => 7.0,
        (Regular, Regular) => 8.0,
        (Regular, Oversized) => 9.0,
        (Oversized, Tight) => 9.0,
        (Oversized, Regular) => 8.0,
        (Oversized, Oversized) => 3.0,
    }
}

/// Score how top and bottom lengths interact visually, in [0, 10]. Cropped
/// top over a full-length bottom is a strong pairing; two long pieces obscure
/// proportions. Missing lengths default to Regular.
pub fn score_length_proportion(top: &ClothingItem, bottom: &ClothingItem) -> f32 {
    use GarmentLength::*;

    match (top.length_or_default(), bottom.length_or_default()) {
        (Cropped, Regular) => 8.0,
        (Cropped, Long) => 9.0,
        // Both cropped: very exposed, niche.
        (Cropped, Cropped) => 4.0,
        (Regular, Regular) => 7.0,
        (Regular, Long) => 6.0,
        (Regular, Cropped) => 5.0,
        // Longline top with shorts: intentional look.
        (Long, Cropped) => 7.0,
        (Long, Regular) => 5.0,
        (Long, Long) => 3.0,
    }
}
