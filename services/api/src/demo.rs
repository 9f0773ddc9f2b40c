use std::fs;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wardrobe_ai::error::AppError;
use wardrobe_ai::styling::{ClothingItem, GenerationRequest, OutfitCandidate, OutfitEngine};

use crate::infra::{default_engine, sample_wardrobe};

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// JSON file holding the wardrobe (array of items). Defaults to the
    /// built-in sample wardrobe.
    #[arg(long)]
    pub(crate) wardrobe: Option<PathBuf>,
    /// Current temperature in °C
    #[arg(long)]
    pub(crate) temperature: Option<f32>,
    /// Activity label (e.g. "Uni / Work", "Gym / Sport")
    #[arg(long)]
    pub(crate) activity: Option<String>,
    /// Number of outfits to generate
    #[arg(long, default_value_t = 3)]
    pub(crate) count: usize,
    /// Seed the score jitter for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the score jitter for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

fn load_wardrobe(path: Option<PathBuf>) -> Result<Vec<ClothingItem>, AppError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(sample_wardrobe()),
    }
}

fn generate(
    engine: &OutfitEngine,
    wardrobe: &[ClothingItem],
    request: &GenerationRequest,
    seed: Option<u64>,
) -> wardrobe_ai::styling::OutfitSelection {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.generate_with_rng(wardrobe, request, &mut rng)
        }
        None => engine.generate(wardrobe, request),
    }
}

fn render_outfit(index: usize, outfit: &OutfitCandidate) {
    println!("Outfit {} (score {:.2})", index + 1, outfit.score);
    if let Some(full_body) = outfit.full_body() {
        println!("  Full Body: {}", full_body.name);
    }
    if let Some(top) = outfit.top() {
        println!("  Top:       {}", top.name);
    }
    if let Some(bottom) = outfit.bottom() {
        println!("  Bottom:    {}", bottom.name);
    }
    println!("  Shoes:     {}", outfit.shoes.name);
    if let Some(outerwear) = &outfit.outerwear {
        println!("  Outerwear: {}", outerwear.name);
    }
}

fn render_selection(wardrobe: &[ClothingItem], request: &GenerationRequest, seed: Option<u64>) {
    let engine = default_engine();
    let selection = generate(&engine, wardrobe, request, seed);

    if let Some(shortfall) = selection.error {
        println!("  {shortfall}");
        return;
    }

    for (index, outfit) in selection.outfits.iter().enumerate() {
        render_outfit(index, outfit);
    }
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        wardrobe,
        temperature,
        activity,
        count,
        seed,
    } = args;

    let wardrobe = load_wardrobe(wardrobe)?;
    let request = GenerationRequest {
        temperature,
        activity,
        count,
    };

    render_selection(&wardrobe, &request, seed);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let wardrobe = sample_wardrobe();

    let scenarios: [(&str, GenerationRequest); 3] = [
        (
            "Cold commute (4°C, Uni / Work)",
            GenerationRequest {
                temperature: Some(4.0),
                activity: Some("Uni / Work".to_string()),
                count: 3,
            },
        ),
        (
            "Warm evening out (22°C, Night Out / Date)",
            GenerationRequest {
                temperature: Some(22.0),
                activity: Some("Night Out / Date".to_string()),
                count: 3,
            },
        ),
        (
            "Gym session (temperature unknown)",
            GenerationRequest {
                temperature: None,
                activity: Some("Gym / Sport".to_string()),
                count: 2,
            },
        ),
    ];

    for (label, request) in scenarios {
        println!("=== {label} ===");
        render_selection(&wardrobe, &request, args.seed);
        println!();
    }

    Ok(())
}
