use std::collections::HashSet;

use super::domain::OutfitCandidate;

/// Rank candidates by score and pick the top `count`, preferring slot variety.
///
/// The sorted list is walked keeping the first candidate seen for each combo
/// key. If fewer than `count` unique keys exist the remainder is backfilled
/// with the next-highest-scoring candidates regardless of key, so the caller
/// receives exactly `count` outfits whenever at least one combination exists.
pub(crate) fn select_top(mut candidates: Vec<OutfitCandidate>, count: usize) -> Vec<OutfitCandidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut picked: Vec<usize> = Vec::new();
    let mut picked_indices: HashSet<usize> = HashSet::new();
    let mut used_keys = HashSet::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if used_keys.insert(candidate.combo_key()) {
            picked.push(index);
            picked_indices.insert(index);
        }
        if picked.len() >= count {
            break;
        }
    }

    if picked.len() < count {
        for index in 0..candidates.len() {
            if picked.len() >= count {
                break;
            }
            if picked_indices.insert(index) {
                picked.push(index);
            }
        }
    }

    let mut slots: Vec<Option<OutfitCandidate>> = candidates.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
