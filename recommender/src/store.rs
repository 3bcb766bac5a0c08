use std::collections::{BTreeMap, BTreeSet};

use derive_more::{Deref, From};
use indexmap::IndexMap;
use log::debug;
use ndarray::Array1;

use crate::data::{Interaction, ItemId, Rating, UserId};

/// The ratings of a single user, in the order in which the items were first rated.
pub type ItemRatings = IndexMap<ItemId, Rating>;

/// The ratings of a user over all known items, with `0` for unrated items.
///
/// The ratings are widened to double precision for the similarity computations.
#[derive(Clone, Debug, PartialEq, Deref, From)]
pub struct RatingVector(pub Array1<f64>);

/// Holds the known users and items and the ratings between them.
///
/// Users and items are enumerated in ascending order of their ids. A user or an item exists as
/// soon as it appears in an interaction.
#[derive(Clone, Debug, Default)]
pub struct InteractionStore {
    items: BTreeSet<ItemId>,
    ratings: BTreeMap<UserId, ItemRatings>,
}

impl InteractionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a batch of interactions.
    ///
    /// If a user rated the same item more than once the last rating wins.
    pub fn from_interactions<I>(interactions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Interaction>,
    {
        let mut store = Self::new();
        let mut count = 0;
        for interaction in interactions {
            store.insert(interaction.into());
            count += 1;
        }
        debug!(
            "stored {} interactions of {} users on {} items",
            count,
            store.ratings.len(),
            store.items.len(),
        );

        store
    }

    fn insert(&mut self, interaction: Interaction) {
        let Interaction { user, item, rating } = interaction;
        self.items.insert(item);
        // an existing entry keeps its position but takes the new rating
        self.ratings.entry(user).or_default().insert(item, rating);
    }

    /// Iterates over all known users in ascending order.
    pub fn users(&self) -> impl ExactSizeIterator<Item = UserId> + '_ {
        self.ratings.keys().copied()
    }

    /// Iterates over all known items in ascending order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Checks if the user is known.
    pub fn contains_user(&self, user: UserId) -> bool {
        self.ratings.contains_key(&user)
    }

    /// Gets the ratings of the user, if the user is known.
    pub fn ratings_of(&self, user: UserId) -> Option<&ItemRatings> {
        self.ratings.get(&user)
    }

    /// Gets the rating of the item by the user, if there is one.
    pub fn rating(&self, user: UserId, item: ItemId) -> Option<Rating> {
        self.ratings_of(user)
            .and_then(|ratings| ratings.get(&item))
            .copied()
    }

    /// Builds the dense rating vector of the user over all known items.
    ///
    /// The vector is all zeros for unknown users.
    pub fn dense_vector(&self, user: UserId) -> RatingVector {
        let ratings = self.ratings_of(user);
        self.items()
            .map(|item| {
                ratings
                    .and_then(|ratings| ratings.get(&item))
                    .copied()
                    .map(f64::from)
                    .unwrap_or_default()
            })
            .collect::<Array1<_>>()
            .into()
    }

    /// Checks if there are no interactions.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
