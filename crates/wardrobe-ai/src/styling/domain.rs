use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for wardrobe items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Garment slot an item can occupy within an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    #[serde(rename = "Full Body")]
    FullBody,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Shoes => "Shoes",
            Category::Outerwear => "Outerwear",
            Category::FullBody => "Full Body",
        }
    }
}

/// How closely a garment sits to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fit {
    Tight,
    Regular,
    Oversized,
}

/// Three-level formality scale plus an isolated athletic register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formality {
    Casual,
    Everyday,
    Smart,
    Athletic,
}

impl Formality {
    /// Numeric rank used for range checks. Athletic sits off the 1–3 scale so
    /// any mix with a tailored level reads as a hard clash.
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Formality::Casual => 1,
            Formality::Everyday => 2,
            Formality::Smart => 3,
            Formality::Athletic => 99,
        }
    }
}

/// Weather band a garment is suited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warmth {
    Warm,
    Transitional,
    Cold,
}

/// Vertical cut of a top or bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarmentLength {
    Cropped,
    Regular,
    Long,
}

/// A single wardrobe item as declared by the inventory collaborator. The
/// engine treats every field as read-only; legacy items may carry nothing but
/// an id, a name, and a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub fit: Option<Fit>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub formality: Option<Formality>,
    #[serde(default)]
    pub warmth: Option<Warmth>,
    #[serde(default)]
    pub length: Option<GarmentLength>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl ClothingItem {
    pub(crate) fn fit_or_default(&self) -> Fit {
        self.fit.unwrap_or(Fit::Regular)
    }

    pub(crate) fn length_or_default(&self) -> GarmentLength {
        self.length.unwrap_or(GarmentLength::Regular)
    }
}

/// The garments filling the body slots of a candidate. Exactly one of the two
/// composition paths is ever populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutfitBase {
    Separates {
        top: ClothingItem,
        bottom: ClothingItem,
    },
    FullBody(ClothingItem),
}

/// A scored outfit produced by the generator. Ephemeral: candidates are value
/// objects handed to the caller, never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitCandidate {
    pub base: OutfitBase,
    pub shoes: ClothingItem,
    pub outerwear: Option<ClothingItem>,
    pub score: f32,
    pub generated_at: DateTime<Utc>,
}

impl OutfitCandidate {
    pub fn top(&self) -> Option<&ClothingItem> {
        match &self.base {
            OutfitBase::Separates { top, .. } => Some(top),
            OutfitBase::FullBody(_) => None,
        }
    }

    pub fn bottom(&self) -> Option<&ClothingItem> {
        match &self.base {
            OutfitBase::Separates { bottom, .. } => Some(bottom),
            OutfitBase::FullBody(_) => None,
        }
    }

    pub fn full_body(&self) -> Option<&ClothingItem> {
        match &self.base {
            OutfitBase::Separates { .. } => None,
            OutfitBase::FullBody(item) => Some(item),
        }
    }

    /// Slot-identity key used to deduplicate near-identical candidates during
    /// selection: full-body id + shoes id, or top id + bottom id.
    pub fn combo_key(&self) -> (ItemId, ItemId) {
        match &self.base {
            OutfitBase::Separates { top, bottom } => (top.id.clone(), bottom.id.clone()),
            OutfitBase::FullBody(item) => (item.id.clone(), self.shoes.id.clone()),
        }
    }
}

/// Caller-supplied context for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Current temperature in °C; `None` disables weather filtering.
    pub temperature: Option<f32>,
    /// Activity label keyed into the activity-formality map; unknown labels
    /// disable activity filtering.
    pub activity: Option<String>,
    /// Number of outfits to return.
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            temperature: None,
            activity: None,
            count: 3,
        }
    }
}

/// Wardrobe gaps that make generation impossible. Reported as values, never
/// raised: the caller decides presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WardrobeShortfall {
    #[error("You need at least 1 pair of Shoes to generate an outfit.")]
    MissingShoes,
    #[error("You need either a Top and Bottom, or a Full Body item, and Shoes to generate an outfit.")]
    MissingGarments,
}

/// Outcome of a generation run: a ranked outfit list, or an empty list with
/// the shortfall that prevented enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitSelection {
    pub outfits: Vec<OutfitCandidate>,
    pub error: Option<WardrobeShortfall>,
}

impl OutfitSelection {
    pub(crate) fn shortfall(error: WardrobeShortfall) -> Self {
        Self {
            outfits: Vec::new(),
            error: Some(error),
        }
    }
}
