use log::debug;

use crate::{
    config::Config,
    data::{Interaction, ItemId, Recommendation, UserId},
    error::Error,
    evaluation::{evaluate, Evaluation},
    explanation::{ExplanationSystem, RatingExplainer},
    ranker::{rank_candidates, Candidate},
    similarity::{CosineSimilarity, Neighbor, SimilarityMap, SimilaritySystem},
    store::InteractionStore,
};

/// User-based collaborative filtering recommender with explanations.
///
/// The recommender is empty until it is fitted. Fitting replaces the whole state, all other
/// operations only read the fitted state.
pub struct Recommender {
    config: Config,
    similarity: Box<dyn SimilaritySystem + Send + Sync>,
    explanation: Box<dyn ExplanationSystem + Send + Sync>,
    store: InteractionStore,
    similarities: SimilarityMap,
}

impl Recommender {
    /// Creates an empty recommender with the default systems.
    pub fn new(config: Config) -> Self {
        Builder::default().with_config(config).build()
    }

    /// Fits the recommender on a batch of interactions.
    ///
    /// Any previously fitted state is discarded.
    pub fn fit<I>(&mut self, interactions: I)
    where
        I: IntoIterator,
        I::Item: Into<Interaction>,
    {
        self.store = InteractionStore::from_interactions(interactions);
        self.similarities = self.similarity.compute_similarities(&self.store);
        debug!(
            "fitted the similarities of {} users",
            self.similarities.len(),
        );
    }

    /// Recommends at most `top_n` items for the user, sorted by descending score.
    ///
    /// The recommendations exclude the items which the user already rated and may be empty.
    ///
    /// # Errors
    /// Fails if the user is unknown.
    pub fn recommend(&self, user: UserId, top_n: usize) -> Result<Vec<Recommendation>, Error> {
        if !self.store.contains_user(user) {
            debug!("no recommendations for unknown user {}", user);
            return Err(Error::UserNotFound(user));
        }

        let neighbors = self.similar_users(user);
        let recommendations = rank_candidates(
            &self.store,
            user,
            &neighbors,
            self.config.relevance_threshold(),
        )
        .into_iter()
        .take(top_n)
        .map(|Candidate { item, score }| Recommendation {
            item,
            score,
            explanation: self.explain(item, &neighbors),
        })
        .collect::<Vec<_>>();
        debug!(
            "recommended {} items for user {} from {} similar users",
            recommendations.len(),
            user,
            neighbors.len(),
        );

        Ok(recommendations)
    }

    /// Recommends the configured number of items for the user.
    ///
    /// # Errors
    /// Fails if the user is unknown.
    pub fn recommend_default(&self, user: UserId) -> Result<Vec<Recommendation>, Error> {
        self.recommend(user, self.config.top_n())
    }

    /// Selects the most similar users of the user in descending similarity.
    pub fn similar_users(&self, user: UserId) -> Vec<Neighbor> {
        self.similarities.neighbors(user, self.config.neighbors())
    }

    /// Gets the similarity of the user to the other user, if it is positive.
    pub fn similarity(&self, user: UserId, other: UserId) -> Option<f64> {
        self.similarities.get(user, other)
    }

    /// Explains why the item is recommended based on the similar users.
    pub fn explain(&self, item: ItemId, neighbors: &[Neighbor]) -> Vec<String> {
        self.explanation.explain(&self.store, item, neighbors)
    }

    /// Evaluates the quality of the explanations.
    pub fn evaluate<S>(&self, explanations: &[S]) -> Evaluation
    where
        S: AsRef<str>,
    {
        evaluate(explanations)
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The fitted interactions.
    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    /// The fitted similarities.
    pub fn similarities(&self) -> &SimilarityMap {
        &self.similarities
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Builder for a [`Recommender`] with custom systems.
#[derive(Default)]
pub struct Builder {
    config: Config,
    similarity: Option<Box<dyn SimilaritySystem + Send + Sync>>,
    explanation: Option<Box<dyn ExplanationSystem + Send + Sync>>,
}

impl Builder {
    /// Sets the [`Config`] to use.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the system to compute the user similarities with.
    pub fn with_similarity_system(
        mut self,
        system: impl SimilaritySystem + Send + Sync + 'static,
    ) -> Self {
        self.similarity = Some(Box::new(system));
        self
    }

    /// Sets the system to explain the recommendations with.
    pub fn with_explanation_system(
        mut self,
        system: impl ExplanationSystem + Send + Sync + 'static,
    ) -> Self {
        self.explanation = Some(Box::new(system));
        self
    }

    /// Creates an empty [`Recommender`].
    ///
    /// Systems which are not set explicitly default to [`CosineSimilarity`] and a
    /// [`RatingExplainer`] with the thresholds of the configuration.
    pub fn build(self) -> Recommender {
        let Builder {
            config,
            similarity,
            explanation,
        } = self;
        let similarity = similarity.unwrap_or_else(|| Box::new(CosineSimilarity));
        let explanation =
            explanation.unwrap_or_else(|| Box::new(RatingExplainer::new(&config)));

        Recommender {
            config,
            similarity,
            explanation,
            store: InteractionStore::default(),
            similarities: SimilarityMap::default(),
        }
    }
}
