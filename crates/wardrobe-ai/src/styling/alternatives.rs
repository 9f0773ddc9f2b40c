use super::activity::allowed_formalities;
use super::domain::{Category, ClothingItem, ItemId};
use super::weather::filter_by_weather;

/// Same-category substitutes for a single outfit slot, excluding the current
/// occupant and respecting the activity and weather filters. Stateless and
/// idempotent: cycling through repeated swaps is the caller's concern.
pub fn swap_alternatives(
    wardrobe: &[ClothingItem],
    category: Category,
    current_item_id: &ItemId,
    temperature: Option<f32>,
    activity: Option<&str>,
) -> Vec<ClothingItem> {
    let mut items: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| item.category == category && item.id != *current_item_id)
        .collect();

    if let Some(allowed) = activity.and_then(allowed_formalities) {
        items.retain(|item| {
            item.formality
                .map(|formality| allowed.contains(&formality))
                .unwrap_or(true)
        });
    }

    filter_by_weather(&items, temperature)
        .into_iter()
        .cloned()
        .collect()
}
