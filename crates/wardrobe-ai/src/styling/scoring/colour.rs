use crate::styling::domain::ClothingItem;

/// Colours that pair with everything. Untagged items count as neutral too, so
/// legacy wardrobes are never penalised.
const NEUTRAL_COLOURS: [&str; 6] = ["Black", "White", "Grey", "Navy", "Beige", "Cream"];

fn is_neutral(colour: &str) -> bool {
    NEUTRAL_COLOURS.contains(&colour)
}

/// Position of a colour on a simplified 12-segment wheel. Off-wheel colours
/// (and anything unrecognised) take no part in pairwise harmony.
fn wheel_position(colour: &str) -> Option<i32> {
    match colour {
        "Red" => Some(0),
        "Orange" => Some(1),
        "Yellow" => Some(2),
        "Green" => Some(4),
        "Blue" => Some(7),
        "Purple" => Some(10),
        "Pink" => Some(11),
        // Brown sits near orange on the warm spectrum.
        "Brown" => Some(1),
        "Burgundy" => Some(0),
        "Olive" => Some(3),
        "Teal" => Some(6),
        "Maroon" => Some(0),
        _ => None,
    }
}

/// Shortest angular distance between two wheel positions.
fn wheel_distance(a: i32, b: i32) -> i32 {
    let diff = (a - b).abs();
    diff.min(12 - diff)
}

/// Score the colour harmony of an outfit's items, in [0, 10].
///
/// All-neutral outfits get a safe 8. Otherwise the score starts at 6, the
/// three-colour rule penalises each distinct non-neutral beyond the third,
/// and pairs of wheel-known colours contribute the mean of their pairwise
/// harmony: monochromatic +3, analogous (≤2 segments) +2, complementary
/// (5–7 segments) +1, anything else −1.
pub fn score_colour_harmony(items: &[&ClothingItem]) -> f32 {
    let colours: Vec<&str> = items
        .iter()
        .filter_map(|item| item.colour.as_deref())
        .collect();

    // Nothing tagged: neutral score rather than punishing legacy items.
    if colours.is_empty() {
        return 5.0;
    }

    let mut unique_non_neutrals: Vec<&str> = Vec::new();
    for colour in &colours {
        if !is_neutral(colour) && !unique_non_neutrals.contains(colour) {
            unique_non_neutrals.push(colour);
        }
    }

    if unique_non_neutrals.is_empty() {
        return 8.0;
    }

    let mut score = 6.0_f32;

    if unique_non_neutrals.len() > 3 {
        score -= (unique_non_neutrals.len() - 3) as f32 * 2.0;
    }

    if unique_non_neutrals.len() >= 2 {
        let positions: Vec<i32> = unique_non_neutrals
            .iter()
            .filter_map(|colour| wheel_position(colour))
            .collect();

        if positions.len() >= 2 {
            let mut total_harmony = 0.0_f32;
            let mut pair_count = 0u32;

            for (i, &first) in positions.iter().enumerate() {
                for &second in &positions[i + 1..] {
                    let dist = wheel_distance(first, second);
                    pair_count += 1;

                    total_harmony += match dist {
                        0 => 3.0,
                        1 | 2 => 2.0,
                        5..=7 => 1.0,
                        _ => -1.0,
                    };
                }
            }

            if pair_count > 0 {
                score += total_harmony / pair_count as f32;
            }
        }
    } else {
        // Single non-neutral with neutrals: clean, easy combination.
        score += 2.0;
    }

    score.clamp(0.0, 10.0)
}
