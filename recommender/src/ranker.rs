use indexmap::IndexMap;

use crate::{
    data::{ItemId, UserId},
    similarity::Neighbor,
    store::InteractionStore,
    utils::nan_safe_f64_cmp_desc,
};

/// An item which is not yet rated by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) item: ItemId,
    pub(crate) score: f64,
}

/// Ranks the items rated by the neighbors which the user hasn't rated yet.
///
/// Every rating of a neighbor which reaches the relevance threshold adds the similarity weighted
/// rating to the score of the item. The candidates are sorted by descending score, equal scores
/// keep the order in which the items were first scored.
pub(crate) fn rank_candidates(
    store: &InteractionStore,
    user: UserId,
    neighbors: &[Neighbor],
    relevance_threshold: f32,
) -> Vec<Candidate> {
    let rated = store.ratings_of(user);
    let is_rated = |item: &ItemId| rated.map_or(false, |rated| rated.contains_key(item));

    let mut scores = IndexMap::<ItemId, f64>::new();
    for neighbor in neighbors {
        let ratings = store.ratings_of(neighbor.user).into_iter().flatten();
        for (item, &rating) in ratings {
            if !is_rated(item) && rating >= relevance_threshold {
                *scores.entry(*item).or_default() += neighbor.similarity * f64::from(rating);
            }
        }
    }

    let mut candidates = scores
        .into_iter()
        .map(|(item, score)| Candidate { item, score })
        .collect::<Vec<_>>();
    candidates.sort_by(|a, b| nan_safe_f64_cmp_desc(&a.score, &b.score));

    candidates
}
