use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use wardrobe_ai::styling::{
    Category, ClothingItem, Fit, Formality, GarmentLength, ItemId, OutfitEngine, ScoreWeights,
    Warmth,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_engine() -> OutfitEngine {
    OutfitEngine::new(ScoreWeights::default())
}

#[allow(clippy::too_many_arguments)]
fn garment(
    id: &str,
    name: &str,
    category: Category,
    fit: Fit,
    colour: &str,
    formality: Formality,
    warmth: Warmth,
    length: GarmentLength,
) -> ClothingItem {
    ClothingItem {
        id: ItemId(id.to_string()),
        name: name.to_string(),
        category,
        fit: Some(fit),
        colour: Some(colour.to_string()),
        formality: Some(formality),
        warmth: Some(warmth),
        length: Some(length),
        image_ref: None,
    }
}

/// Built-in sample wardrobe used by the `demo` command and as the default
/// input for `generate` when no wardrobe file is given.
pub(crate) fn sample_wardrobe() -> Vec<ClothingItem> {
    use Category::*;
    use Fit::*;
    use Formality::*;
    use GarmentLength::*;
    use Warmth::*;

    vec![
        garment("sample_t1", "White Ribbed Crop Top", Top, Tight, "White", Casual, Warm, Cropped),
        garment("sample_t2", "Black Oversized T-Shirt", Top, Oversized, "Black", Casual, Warm, GarmentLength::Regular),
        garment("sample_t3", "White Satin Blouse", Top, Fit::Regular, "White", Smart, Transitional, GarmentLength::Regular),
        garment("sample_t4", "Beige Knit Cardigan", Top, Oversized, "Beige", Everyday, Cold, Long),
        garment("sample_t5", "Navy Breton Stripe Top", Top, Fit::Regular, "Navy", Everyday, Transitional, GarmentLength::Regular),
        garment("sample_t6", "Pink Fitted Bodysuit", Top, Tight, "Pink", Everyday, Warm, GarmentLength::Regular),
        garment("sample_t7", "Burgundy Roll Neck Jumper", Top, Fit::Regular, "Burgundy", Everyday, Cold, GarmentLength::Regular),
        garment("sample_b1", "Blue High Waist Mom Jeans", Bottom, Fit::Regular, "Blue", Everyday, Transitional, Long),
        garment("sample_b2", "Black Faux Leather Mini Skirt", Bottom, Tight, "Black", Smart, Warm, Cropped),
        garment("sample_b3", "Beige Wide Leg Trousers", Bottom, Oversized, "Beige", Everyday, Transitional, Long),
        garment("sample_b4", "Black Cycling Shorts", Bottom, Tight, "Black", Casual, Warm, Cropped),
        garment("sample_b5", "Grey Pleated Midi Skirt", Bottom, Fit::Regular, "Grey", Smart, Transitional, GarmentLength::Regular),
        garment("sample_fb1", "Black Midi Wrap Dress", FullBody, Fit::Regular, "Black", Smart, Transitional, GarmentLength::Regular),
        garment("sample_fb2", "Floral Summer Dress", FullBody, Fit::Regular, "Green", Everyday, Warm, GarmentLength::Regular),
        garment("sample_fb3", "Beige Linen Jumpsuit", FullBody, Fit::Regular, "Beige", Everyday, Warm, Long),
        garment("sample_s1", "White Chunky Trainers", Shoes, Fit::Regular, "White", Everyday, Transitional, GarmentLength::Regular),
        garment("sample_s2", "Black Heeled Ankle Boots", Shoes, Fit::Regular, "Black", Smart, Cold, GarmentLength::Regular),
        garment("sample_s3", "Tan Strappy Sandals", Shoes, Fit::Regular, "Brown", Everyday, Warm, GarmentLength::Regular),
        garment("sample_s4", "Black Ballet Flats", Shoes, Fit::Regular, "Black", Smart, Transitional, GarmentLength::Regular),
        garment("sample_o1", "Camel Wool Coat", Outerwear, Fit::Regular, "Beige", Smart, Cold, Long),
        garment("sample_o2", "Black Cropped Puffer Jacket", Outerwear, Oversized, "Black", Casual, Cold, Cropped),
        garment("sample_o3", "Khaki Oversized Blazer", Outerwear, Oversized, "Green", Everyday, Transitional, GarmentLength::Regular),
        garment("sample_a1", "Black Sports Bra", Top, Tight, "Black", Athletic, Warm, Cropped),
        garment("sample_a2", "Grey High Waist Leggings", Bottom, Tight, "Grey", Athletic, Transitional, Long),
        garment("sample_a3", "White Running Trainers", Shoes, Fit::Regular, "White", Athletic, Transitional, GarmentLength::Regular),
    ]
}
