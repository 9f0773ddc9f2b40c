use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Category, ClothingItem, GenerationRequest, ItemId, OutfitCandidate};
use super::engine::OutfitEngine;

/// Router builder exposing the generation and swap endpoints. Wardrobe
/// shortfalls travel in the response body rather than as HTTP errors, so both
/// endpoints always answer 200 for well-formed requests.
pub fn styling_router(engine: Arc<OutfitEngine>) -> Router {
    Router::new()
        .route("/api/v1/outfits", post(generate_handler))
        .route("/api/v1/outfits/alternatives", post(alternatives_handler))
        .with_state(engine)
}

fn default_count() -> usize {
    3
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateOutfitsRequest {
    pub(crate) items: Vec<ClothingItem>,
    #[serde(default)]
    pub(crate) temperature: Option<f32>,
    #[serde(default = "default_count")]
    pub(crate) count: usize,
    #[serde(default)]
    pub(crate) activity: Option<String>,
}

/// Flattened candidate view: the composition path is visible as nullable
/// slots, matching the interface contract.
#[derive(Debug, Serialize)]
pub(crate) struct OutfitView {
    pub(crate) top: Option<ClothingItem>,
    pub(crate) bottom: Option<ClothingItem>,
    pub(crate) full_body: Option<ClothingItem>,
    pub(crate) shoes: ClothingItem,
    pub(crate) outerwear: Option<ClothingItem>,
    pub(crate) score: f32,
    pub(crate) generated_at: DateTime<Utc>,
}

impl From<OutfitCandidate> for OutfitView {
    fn from(candidate: OutfitCandidate) -> Self {
        Self {
            top: candidate.top().cloned(),
            bottom: candidate.bottom().cloned(),
            full_body: candidate.full_body().cloned(),
            shoes: candidate.shoes.clone(),
            outerwear: candidate.outerwear.clone(),
            score: candidate.score,
            generated_at: candidate.generated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateOutfitsResponse {
    pub(crate) outfits: Vec<OutfitView>,
    pub(crate) error: Option<String>,
}

pub(crate) async fn generate_handler(
    State(engine): State<Arc<OutfitEngine>>,
    Json(payload): Json<GenerateOutfitsRequest>,
) -> Json<GenerateOutfitsResponse> {
    let request = GenerationRequest {
        temperature: payload.temperature,
        activity: payload.activity,
        count: payload.count,
    };

    let selection = engine.generate(&payload.items, &request);

    Json(GenerateOutfitsResponse {
        outfits: selection.outfits.into_iter().map(OutfitView::from).collect(),
        error: selection.error.map(|shortfall| shortfall.to_string()),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlternativesRequest {
    pub(crate) items: Vec<ClothingItem>,
    pub(crate) category: Category,
    pub(crate) current_item_id: ItemId,
    #[serde(default)]
    pub(crate) temperature: Option<f32>,
    #[serde(default)]
    pub(crate) activity: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AlternativesResponse {
    pub(crate) alternatives: Vec<ClothingItem>,
}

pub(crate) async fn alternatives_handler(
    State(engine): State<Arc<OutfitEngine>>,
    Json(payload): Json<AlternativesRequest>,
) -> Json<AlternativesResponse> {
    let alternatives = engine.alternatives(
        &payload.items,
        payload.category,
        &payload.current_item_id,
        payload.temperature,
        payload.activity.as_deref(),
    );

    Json(AlternativesResponse { alternatives })
}
