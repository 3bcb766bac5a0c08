use displaydoc::Display;
use thiserror::Error;

/// The configuration of the recommender.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    neighbors: usize,
    relevance_threshold: f32,
    high_rating_threshold: f32,
    rating_scale: f32,
    top_n: usize,
}

/// Potential errors of the recommender configuration.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq)]
pub enum Error {
    /// Invalid number of neighbors, expected positive value
    Neighbors,
    /// Invalid relevance threshold, expected finite value
    RelevanceThreshold,
    /// Invalid high rating threshold, expected finite value
    HighRatingThreshold,
    /// Invalid rating scale, expected positive finite value
    RatingScale,
}

impl Config {
    /// The number of most similar users which are taken into account.
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Sets the number of neighbors.
    ///
    /// # Errors
    /// Fails if the number of neighbors is zero.
    pub fn with_neighbors(self, neighbors: usize) -> Result<Self, Error> {
        if neighbors > 0 {
            Ok(Self { neighbors, ..self })
        } else {
            Err(Error::Neighbors)
        }
    }

    /// The minimum rating of a similar user for an item to become a candidate.
    pub fn relevance_threshold(&self) -> f32 {
        self.relevance_threshold
    }

    /// Sets the relevance threshold.
    ///
    /// # Errors
    /// Fails if the threshold is not finite.
    pub fn with_relevance_threshold(self, relevance_threshold: f32) -> Result<Self, Error> {
        if relevance_threshold.is_finite() {
            Ok(Self {
                relevance_threshold,
                ..self
            })
        } else {
            Err(Error::RelevanceThreshold)
        }
    }

    /// The minimum rating of a similar user for an item to be named in an explanation.
    pub fn high_rating_threshold(&self) -> f32 {
        self.high_rating_threshold
    }

    /// Sets the high rating threshold.
    ///
    /// # Errors
    /// Fails if the threshold is not finite.
    pub fn with_high_rating_threshold(self, high_rating_threshold: f32) -> Result<Self, Error> {
        if high_rating_threshold.is_finite() {
            Ok(Self {
                high_rating_threshold,
                ..self
            })
        } else {
            Err(Error::HighRatingThreshold)
        }
    }

    /// The maximum rating, as shown in the explanations.
    pub fn rating_scale(&self) -> f32 {
        self.rating_scale
    }

    /// Sets the rating scale.
    ///
    /// # Errors
    /// Fails if the scale is not positive or not finite.
    pub fn with_rating_scale(self, rating_scale: f32) -> Result<Self, Error> {
        if rating_scale.is_finite() && rating_scale > 0. {
            Ok(Self {
                rating_scale,
                ..self
            })
        } else {
            Err(Error::RatingScale)
        }
    }

    /// The default number of recommendations per user.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Sets the default number of recommendations.
    ///
    /// Zero is valid and yields no recommendations, just like [`Recommender::recommend()`] does.
    ///
    /// [`Recommender::recommend()`]: crate::Recommender::recommend
    pub fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neighbors: 5,
            relevance_threshold: 3.,
            high_rating_threshold: 4.,
            rating_scale: 5.,
            top_n: 5,
        }
    }
}
