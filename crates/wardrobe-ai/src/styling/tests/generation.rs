use std::collections::HashSet;

use super::common::*;
use crate::styling::domain::{
    Category, ClothingItem, Formality, GenerationRequest, Warmth, WardrobeShortfall,
};

#[test]
fn empty_wardrobe_reports_missing_shoes() {
    let selection = engine().generate_with_rng(&[], &request(None, None), &mut seeded_rng());

    assert!(selection.outfits.is_empty());
    assert_eq!(selection.error, Some(WardrobeShortfall::MissingShoes));
    assert_eq!(
        selection.error.map(|e| e.to_string()).as_deref(),
        Some("You need at least 1 pair of Shoes to generate an outfit.")
    );
}

#[test]
fn shoes_alone_report_missing_garments() {
    let wardrobe = vec![item("s1", "Trainers", Category::Shoes)];
    let selection =
        engine().generate_with_rng(&wardrobe, &request(None, None), &mut seeded_rng());

    assert!(selection.outfits.is_empty());
    assert_eq!(selection.error, Some(WardrobeShortfall::MissingGarments));
    assert_eq!(
        selection.error.map(|e| e.to_string()).as_deref(),
        Some("You need either a Top and Bottom, or a Full Body item, and Shoes to generate an outfit.")
    );
}

#[test]
fn a_top_without_a_bottom_is_not_enough() {
    let wardrobe = vec![
        item("t1", "Tee", Category::Top),
        item("s1", "Trainers", Category::Shoes),
    ];
    let selection =
        engine().generate_with_rng(&wardrobe, &request(None, None), &mut seeded_rng());
    assert_eq!(selection.error, Some(WardrobeShortfall::MissingGarments));
}

fn small_separates_wardrobe() -> Vec<ClothingItem> {
    vec![
        item("t1", "Plain Tee", Category::Top),
        item("t2", "Striped Tee", Category::Top),
        item("b1", "Chinos", Category::Bottom),
        item("b2", "Denim Skirt", Category::Bottom),
        item("s1", "Trainers", Category::Shoes),
    ]
}

#[test]
fn hot_weather_outfits_never_carry_outerwear() {
    let mut wardrobe = small_separates_wardrobe();
    let mut coat = item("o1", "Camel Wool Coat", Category::Outerwear);
    coat.warmth = Some(Warmth::Cold);
    wardrobe.push(coat);

    let selection =
        engine().generate_with_rng(&wardrobe, &request(Some(25.0), None), &mut seeded_rng());

    assert!(selection.error.is_none());
    assert_eq!(selection.outfits.len(), 3);
    assert!(selection.outfits.iter().all(|o| o.outerwear.is_none()));

    // Four pairings exist, so the top three carry distinct combo keys.
    let keys: HashSet<_> = selection.outfits.iter().map(|o| o.combo_key()).collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn cold_weather_requires_an_outerwear_layer_when_available() {
    let mut wardrobe = small_separates_wardrobe();
    wardrobe.push(item("o1", "Parka", Category::Outerwear));

    let selection =
        engine().generate_with_rng(&wardrobe, &request(Some(5.0), None), &mut seeded_rng());

    assert!(selection.error.is_none());
    assert!(!selection.outfits.is_empty());
    assert!(selection.outfits.iter().all(|o| o.outerwear.is_some()));
}

#[test]
fn full_body_path_fills_in_when_separates_are_missing() {
    let wardrobe = vec![
        item("fb1", "Wrap Dress", Category::FullBody),
        item("fb2", "Jumpsuit", Category::FullBody),
        item("s1", "Flats", Category::Shoes),
    ];

    let selection =
        engine().generate_with_rng(&wardrobe, &request(None, None), &mut seeded_rng());

    assert!(selection.error.is_none());
    assert!(!selection.outfits.is_empty());
    for outfit in &selection.outfits {
        assert!(outfit.top().is_none());
        assert!(outfit.bottom().is_none());
        assert!(outfit.full_body().is_some());
    }
}

#[test]
fn duplicate_backfill_fills_the_requested_count() {
    let wardrobe = vec![
        item("t1", "Tee", Category::Top),
        item("b1", "Jeans", Category::Bottom),
        item("s1", "Trainers", Category::Shoes),
        item("s2", "Boots", Category::Shoes),
        item("s3", "Loafers", Category::Shoes),
    ];

    // Three candidates all share the single top+bottom combo key; after the
    // unique pick the other two backfill the requested count.
    let selection =
        engine().generate_with_rng(&wardrobe, &request(None, None), &mut seeded_rng());

    assert!(selection.error.is_none());
    assert_eq!(selection.outfits.len(), 3);
    let keys: HashSet<_> = selection.outfits.iter().map(|o| o.combo_key()).collect();
    assert_eq!(keys.len(), 1);
}

#[test]
fn backfill_over_many_duplicates_keeps_count_and_order() {
    // One top+bottom pairing worn with six different shoes: six candidates,
    // one combo key. After the single unique pick the rest backfill, and the
    // result must stay sorted by descending score.
    let mut wardrobe = vec![
        item("t1", "Tee", Category::Top),
        item("b1", "Jeans", Category::Bottom),
    ];
    for index in 1..=6 {
        wardrobe.push(item(&format!("s{index}"), "Shoes", Category::Shoes));
    }

    let selection = engine().generate_with_rng(
        &wardrobe,
        &GenerationRequest {
            temperature: None,
            activity: None,
            count: 5,
        },
        &mut seeded_rng(),
    );

    assert!(selection.error.is_none());
    assert_eq!(selection.outfits.len(), 5);
    let keys: HashSet<_> = selection.outfits.iter().map(|o| o.combo_key()).collect();
    assert_eq!(keys.len(), 1);
    let scores: Vec<f32> = selection.outfits.iter().map(|o| o.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn formality_clash_falls_back_to_unfiltered_separates() {
    let mut smart_top = item("t1", "Satin Blouse", Category::Top);
    smart_top.formality = Some(Formality::Smart);
    let mut casual_bottom = item("b1", "Joggers", Category::Bottom);
    casual_bottom.formality = Some(Formality::Casual);
    let wardrobe = vec![
        smart_top,
        casual_bottom,
        item("s1", "Trainers", Category::Shoes),
    ];

    // Every combination spans Smart..Casual, so the pre-filter rejects all of
    // them and the fallback pass must still produce outfits.
    let selection =
        engine().generate_with_rng(&wardrobe, &request(None, None), &mut seeded_rng());

    assert!(selection.error.is_none());
    assert!(!selection.outfits.is_empty());
}

#[test]
fn activity_filter_narrows_to_allowed_formalities() {
    let mut sports_top = item("t1", "Sports Bra", Category::Top);
    sports_top.formality = Some(Formality::Athletic);
    let mut smart_top = item("t2", "Satin Blouse", Category::Top);
    smart_top.formality = Some(Formality::Smart);
    let mut leggings = item("b1", "Leggings", Category::Bottom);
    leggings.formality = Some(Formality::Athletic);
    let mut runners = item("s1", "Running Trainers", Category::Shoes);
    runners.formality = Some(Formality::Athletic);
    let wardrobe = vec![sports_top, smart_top, leggings, runners];

    let selection = engine().generate_with_rng(
        &wardrobe,
        &request(None, Some("Gym / Sport")),
        &mut seeded_rng(),
    );

    assert!(selection.error.is_none());
    for outfit in &selection.outfits {
        let top = outfit.top().expect("separates path");
        assert_eq!(top.formality, Some(Formality::Athletic));
    }
}

#[test]
fn unknown_activity_labels_disable_filtering() {
    let wardrobe = small_separates_wardrobe();
    let selection = engine().generate_with_rng(
        &wardrobe,
        &request(None, Some("Skydiving")),
        &mut seeded_rng(),
    );
    assert!(selection.error.is_none());
    assert_eq!(selection.outfits.len(), 3);
}

#[test]
fn every_returned_score_is_non_negative() {
    let wardrobe = sample_wardrobe();
    let selection = engine().generate_with_rng(
        &wardrobe,
        &GenerationRequest {
            temperature: Some(12.0),
            activity: None,
            count: 10,
        },
        &mut seeded_rng(),
    );

    assert!(selection.error.is_none());
    assert!(!selection.outfits.is_empty());
    assert!(selection.outfits.iter().all(|o| o.score >= 0.0));
}

#[test]
fn results_are_sorted_by_descending_score() {
    let wardrobe = sample_wardrobe();
    let selection = engine().generate_with_rng(
        &wardrobe,
        &GenerationRequest {
            temperature: Some(12.0),
            activity: None,
            count: 5,
        },
        &mut seeded_rng(),
    );

    let scores: Vec<f32> = selection.outfits.iter().map(|o| o.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}
