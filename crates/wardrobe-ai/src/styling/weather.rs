use super::domain::{ClothingItem, Warmth};

/// Name fragments marking an item as cold-weather only. Checked before the
/// warm list so "wool crop cardigan" resolves cold.
const COLD_KEYWORDS: [&str; 11] = [
    "jumper", "hoodie", "sweater", "coat", "jacket", "fleece", "cardigan", "puffer", "parka",
    "thermal", "wool",
];

/// Name fragments marking an item as warm-weather only.
const WARM_KEYWORDS: [&str; 7] = ["shorts", "vest", "tank", "sandals", "flip", "linen", "crop"];

/// Resolve an item's warmth band, preferring the structured field and falling
/// back to keyword analysis of the name for legacy items. Callers cannot
/// observe which path fired.
pub fn resolve_warmth(item: &ClothingItem) -> Warmth {
    if let Some(warmth) = item.warmth {
        return warmth;
    }

    let name = item.name.to_lowercase();
    if COLD_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Warmth::Cold;
    }
    if WARM_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Warmth::Warm;
    }
    Warmth::Transitional
}

/// Policy governing whether outerwear must, may, or may not appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterwearMode {
    Required,
    Optional,
    Excluded,
}

/// Derive the outerwear policy from temperature. The optional band's upper
/// bound (18°C) is deliberately independent of the item-exclusion threshold
/// (20°C); do not collapse the two.
pub fn outerwear_mode(temperature: Option<f32>) -> OuterwearMode {
    let Some(t) = temperature else {
        return OuterwearMode::Optional;
    };
    if t < 10.0 {
        OuterwearMode::Required
    } else if t <= 18.0 {
        OuterwearMode::Optional
    } else {
        OuterwearMode::Excluded
    }
}

/// Drop items unsuited to the temperature: warm-only items below 10°C,
/// cold-only items above 20°C. If exclusion would empty the bucket the
/// original bucket is returned unchanged so over-filtering never starves a
/// category.
pub fn filter_by_weather<'a>(
    items: &[&'a ClothingItem],
    temperature: Option<f32>,
) -> Vec<&'a ClothingItem> {
    let Some(t) = temperature else {
        return items.to_vec();
    };

    let filtered: Vec<&ClothingItem> = if t < 10.0 {
        items
            .iter()
            .copied()
            .filter(|item| resolve_warmth(item) != Warmth::Warm)
            .collect()
    } else if t > 20.0 {
        items
            .iter()
            .copied()
            .filter(|item| resolve_warmth(item) != Warmth::Cold)
            .collect()
    } else {
        return items.to_vec();
    };

    if filtered.is_empty() {
        items.to_vec()
    } else {
        filtered
    }
}
