//! User-based collaborative filtering with explained recommendations.
//!
//! A [`Recommender`] is fitted on a batch of `(user, item, rating)` [`Interaction`]s. It derives
//! the cosine similarities between the users and recommends the items rated by the most similar
//! users, each together with a textual explanation. The explanations can be scored with
//! [`Recommender::evaluate`].

mod config;
mod data;
mod error;
mod evaluation;
mod explanation;
mod ranker;
mod recommender;
mod similarity;
mod store;
mod utils;

pub use crate::{
    config::{Config, Error as ConfigError},
    data::{Interaction, ItemId, Rating, Recommendation, UserId},
    error::Error,
    evaluation::{evaluate, Evaluation, ExplanationQuality, Feedback},
    explanation::{ExplanationSystem, RatingExplainer},
    recommender::{Builder, Recommender},
    similarity::{CosineSimilarity, Neighbor, SimilarityMap, SimilarityRow, SimilaritySystem},
    store::{InteractionStore, ItemRatings, RatingVector},
};
