#[cfg(test)]
use mockall::automock;

use crate::{config::Config, data::ItemId, similarity::Neighbor, store::InteractionStore};

/// The explanation if none of the neighbors rated the item highly.
pub(crate) const POPULAR_EXPLANATION: &str =
    "This item is popular among users with similar preferences";

#[cfg_attr(test, automock)]
pub trait ExplanationSystem {
    /// Explains why the item is recommended based on the neighbors it was recommended from.
    ///
    /// The explanations are never empty.
    fn explain(
        &self,
        store: &InteractionStore,
        item: ItemId,
        neighbors: &[Neighbor],
    ) -> Vec<String>;
}

/// Explains recommendations by the neighbors which rated the item highly.
#[derive(Clone, Copy, Debug)]
pub struct RatingExplainer {
    high_rating_threshold: f32,
    rating_scale: f32,
}

impl RatingExplainer {
    /// Creates an explainer with the thresholds of the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            high_rating_threshold: config.high_rating_threshold(),
            rating_scale: config.rating_scale(),
        }
    }
}

impl Default for RatingExplainer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ExplanationSystem for RatingExplainer {
    fn explain(
        &self,
        store: &InteractionStore,
        item: ItemId,
        neighbors: &[Neighbor],
    ) -> Vec<String> {
        let explanations = neighbors
            .iter()
            .filter_map(|neighbor| {
                let rating = store.rating(neighbor.user, item).unwrap_or_default();
                (rating >= self.high_rating_threshold).then(|| {
                    format!(
                        "Similar user {} rated this item {}/{} (similarity: {:.2})",
                        neighbor.user, rating, self.rating_scale, neighbor.similarity,
                    )
                })
            })
            .collect::<Vec<_>>();

        if explanations.is_empty() {
            vec![POPULAR_EXPLANATION.to_string()]
        } else {
            explanations
        }
    }
}
