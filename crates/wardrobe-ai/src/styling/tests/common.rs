use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::styling::domain::{
    Category, ClothingItem, Fit, Formality, GarmentLength, GenerationRequest, ItemId, Warmth,
};
use crate::styling::engine::OutfitEngine;

/// Bare item carrying only the mandatory attributes, mimicking a legacy
/// wardrobe entry. Tests set the optional fields they care about.
pub(super) fn item(id: &str, name: &str, category: Category) -> ClothingItem {
    ClothingItem {
        id: ItemId(id.to_string()),
        name: name.to_string(),
        category,
        fit: None,
        colour: None,
        formality: None,
        warmth: None,
        length: None,
        image_ref: None,
    }
}

pub(super) fn engine() -> OutfitEngine {
    OutfitEngine::default()
}

pub(super) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub(super) fn request(temperature: Option<f32>, activity: Option<&str>) -> GenerationRequest {
    GenerationRequest {
        temperature,
        activity: activity.map(str::to_string),
        count: 3,
    }
}

/// Condensed wardrobe with every slot populated: two tops, two bottoms, two
/// pairs of shoes, one outerwear layer, and one full-body piece.
pub(super) fn sample_wardrobe() -> Vec<ClothingItem> {
    let mut wardrobe = Vec::new();

    let mut top = item("t1", "White Satin Blouse", Category::Top);
    top.fit = Some(Fit::Regular);
    top.colour = Some("White".to_string());
    top.formality = Some(Formality::Smart);
    top.warmth = Some(Warmth::Transitional);
    top.length = Some(GarmentLength::Regular);
    wardrobe.push(top);

    let mut top = item("t2", "Navy Breton Stripe Top", Category::Top);
    top.fit = Some(Fit::Regular);
    top.colour = Some("Navy".to_string());
    top.formality = Some(Formality::Everyday);
    top.warmth = Some(Warmth::Transitional);
    top.length = Some(GarmentLength::Regular);
    wardrobe.push(top);

    let mut bottom = item("b1", "Grey Pleated Midi Skirt", Category::Bottom);
    bottom.fit = Some(Fit::Regular);
    bottom.colour = Some("Grey".to_string());
    bottom.formality = Some(Formality::Smart);
    bottom.warmth = Some(Warmth::Transitional);
    bottom.length = Some(GarmentLength::Regular);
    wardrobe.push(bottom);

    let mut bottom = item("b2", "Blue High Waist Jeans", Category::Bottom);
    bottom.fit = Some(Fit::Regular);
    bottom.colour = Some("Blue".to_string());
    bottom.formality = Some(Formality::Everyday);
    bottom.warmth = Some(Warmth::Transitional);
    bottom.length = Some(GarmentLength::Long);
    wardrobe.push(bottom);

    let mut shoes = item("s1", "White Chunky Trainers", Category::Shoes);
    shoes.fit = Some(Fit::Regular);
    shoes.colour = Some("White".to_string());
    shoes.formality = Some(Formality::Everyday);
    shoes.warmth = Some(Warmth::Transitional);
    wardrobe.push(shoes);

    let mut shoes = item("s2", "Black Heeled Ankle Boots", Category::Shoes);
    shoes.fit = Some(Fit::Regular);
    shoes.colour = Some("Black".to_string());
    shoes.formality = Some(Formality::Smart);
    shoes.warmth = Some(Warmth::Cold);
    wardrobe.push(shoes);

    let mut outer = item("o1", "Camel Wool Coat", Category::Outerwear);
    outer.fit = Some(Fit::Regular);
    outer.colour = Some("Beige".to_string());
    outer.formality = Some(Formality::Smart);
    outer.warmth = Some(Warmth::Cold);
    outer.length = Some(GarmentLength::Long);
    wardrobe.push(outer);

    let mut dress = item("fb1", "Black Midi Wrap Dress", Category::FullBody);
    dress.fit = Some(Fit::Regular);
    dress.colour = Some("Black".to_string());
    dress.formality = Some(Formality::Smart);
    dress.warmth = Some(Warmth::Transitional);
    wardrobe.push(dress);

    wardrobe
}
