use std::{
    collections::{btree_map, BTreeMap},
    iter::FromIterator,
};

use log::trace;
#[cfg(test)]
use mockall::automock;
#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::{
    data::UserId,
    store::{InteractionStore, RatingVector},
    utils::{cosine_similarity, nan_safe_f64_cmp_desc},
};

/// The similarities of a source user to other users, ordered by the other users.
pub type SimilarityRow = BTreeMap<UserId, f64>;

/// A similar user and the similarity to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Neighbor {
    pub user: UserId,
    pub similarity: f64,
}

/// The positive similarities between users, stored per source user.
///
/// Both directions of a pair of users are stored independently of each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimilarityMap(BTreeMap<UserId, SimilarityRow>);

impl SimilarityMap {
    /// Gets the similarities of the source user to all other similar users.
    pub fn row(&self, user: UserId) -> Option<&SimilarityRow> {
        self.0.get(&user)
    }

    /// Gets the similarity of the source user to the other user.
    pub fn get(&self, user: UserId, other: UserId) -> Option<f64> {
        self.row(user).and_then(|row| row.get(&other)).copied()
    }

    /// Selects the `k` most similar users of the source user in descending similarity.
    ///
    /// Equally similar users keep their order within the row.
    pub fn neighbors(&self, user: UserId, k: usize) -> Vec<Neighbor> {
        let mut neighbors = self
            .row(user)
            .into_iter()
            .flatten()
            .map(|(&user, &similarity)| Neighbor { user, similarity })
            .collect::<Vec<_>>();
        // stable sort to keep the row order for ties
        neighbors.sort_by(|a, b| nan_safe_f64_cmp_desc(&a.similarity, &b.similarity));
        neighbors.truncate(k);

        neighbors
    }

    /// Iterates over the source users and their rows.
    pub fn iter(&self) -> btree_map::Iter<'_, UserId, SimilarityRow> {
        self.0.iter()
    }

    /// The number of source users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no source users.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(UserId, SimilarityRow)> for SimilarityMap {
    fn from_iter<T: IntoIterator<Item = (UserId, SimilarityRow)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg_attr(test, automock)]
pub trait SimilaritySystem {
    /// Computes the similarities between all known users.
    fn compute_similarities(&self, store: &InteractionStore) -> SimilarityMap;
}

/// Cosine similarity of the dense rating vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosineSimilarity;

impl SimilaritySystem for CosineSimilarity {
    fn compute_similarities(&self, store: &InteractionStore) -> SimilarityMap {
        let vectors = store
            .users()
            .map(|user| (user, store.dense_vector(user)))
            .collect::<Vec<_>>();
        let compute_row =
            |(user, vector): &(UserId, RatingVector)| (*user, similarity_row(*user, vector, &vectors));

        #[cfg(not(feature = "multithreaded"))]
        let rows = vectors.iter().map(compute_row).collect::<Vec<_>>();
        #[cfg(feature = "multithreaded")]
        let rows = vectors.par_iter().map(compute_row).collect::<Vec<_>>();

        rows.into_iter().collect()
    }
}

/// Computes the positive similarities of the user to every other user.
fn similarity_row(
    user: UserId,
    vector: &RatingVector,
    vectors: &[(UserId, RatingVector)],
) -> SimilarityRow {
    let row = vectors
        .iter()
        .filter(|(other, _)| *other != user)
        .filter_map(|(other, other_vector)| {
            let similarity = cosine_similarity(vector, other_vector);
            (similarity > 0.).then(|| (*other, similarity))
        })
        .collect::<SimilarityRow>();
    trace!("user {} is similar to {} users", user, row.len());

    row
}
