use super::domain::{ClothingItem, Formality};

/// Formality registers permitted for a known activity label. Unknown labels
/// return `None`, which disables activity filtering entirely.
pub fn allowed_formalities(activity: &str) -> Option<&'static [Formality]> {
    match activity {
        "Casual" => Some(&[Formality::Casual]),
        "Uni / Work" => Some(&[Formality::Everyday, Formality::Casual]),
        "Night Out / Date" => Some(&[Formality::Smart, Formality::Everyday]),
        "Formal Event" => Some(&[Formality::Smart]),
        "Gym / Sport" => Some(&[Formality::Athletic]),
        _ => None,
    }
}

/// Narrow the wardrobe to items whose formality suits the activity. Items
/// with no formality tag are universally eligible and always retained.
pub fn filter_by_activity<'a>(
    items: &'a [ClothingItem],
    activity: Option<&str>,
) -> Vec<&'a ClothingItem> {
    let allowed = activity.and_then(allowed_formalities);

    match allowed {
        Some(allowed) => items
            .iter()
            .filter(|item| {
                item.formality
                    .map(|formality| allowed.contains(&formality))
                    .unwrap_or(true)
            })
            .collect(),
        None => items.iter().collect(),
    }
}
