//! Outfit generation: classification, filtering, scoring, enumeration, and
//! selection over an immutable wardrobe snapshot.

pub mod activity;
pub mod alternatives;
pub mod domain;
mod engine;
mod generator;
pub mod router;
pub mod scoring;
mod selector;
pub mod weather;

#[cfg(test)]
mod tests;

pub use alternatives::swap_alternatives;
pub use domain::{
    Category, ClothingItem, Fit, Formality, GarmentLength, GenerationRequest, ItemId, OutfitBase,
    OutfitCandidate, OutfitSelection, WardrobeShortfall, Warmth,
};
pub use engine::OutfitEngine;
pub use router::styling_router;
pub use scoring::ScoreWeights;
pub use weather::OuterwearMode;
