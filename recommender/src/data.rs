use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier of a user.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct UserId(pub u32);

/// Unique identifier of an item.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// The score a user gave to an item, usually on a scale from 1 to 5.
pub type Rating = f32;

/// A single observed rating of an item by a user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user: UserId,
    pub item: ItemId,
    pub rating: Rating,
}

impl From<(UserId, ItemId, Rating)> for Interaction {
    fn from((user, item, rating): (UserId, ItemId, Rating)) -> Self {
        Self { user, item, rating }
    }
}

impl From<(u32, u32, Rating)> for Interaction {
    fn from((user, item, rating): (u32, u32, Rating)) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
            rating,
        }
    }
}

/// A recommended item together with the reasons for recommending it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    /// The recommended item.
    pub item: ItemId,

    /// The sum of the similarity weighted ratings of the contributing similar users.
    pub score: f64,

    /// Human readable explanations, never empty.
    pub explanation: Vec<String>,
}
