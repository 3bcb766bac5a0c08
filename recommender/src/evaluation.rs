//! Heuristic quality scores of explanations.

use displaydoc::Display;
use serde::Serialize;

/// The quality class of a single explanation.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationQuality {
    /// specific and data-driven
    Specific,
    /// general
    General,
    /// generic
    Generic,
}

impl ExplanationQuality {
    /// Classifies an explanation by the markers it contains.
    pub fn classify(explanation: &str) -> Self {
        if explanation.contains("rated this item") && explanation.contains("similarity") {
            Self::Specific
        } else if explanation.contains("popular among users") {
            Self::General
        } else {
            Self::Generic
        }
    }

    /// The score of the quality class from the unit interval.
    pub fn score(self) -> f64 {
        f64::from(self.tenths()) / 10.
    }

    /// The score in tenths, which keeps sums of scores exact.
    fn tenths(self) -> u32 {
        match self {
            Self::Specific => 8,
            Self::General => 5,
            Self::Generic => 3,
        }
    }
}

/// The feedback tier of an average explanation score.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Excellent explanations - clear and specific
    Excellent,
    /// Good explanations - generally understandable
    Good,
    /// Fair explanations - somewhat vague
    Fair,
    /// Poor explanations - not very helpful
    Poor,
    /// No explanations available
    Unavailable,
}

impl Feedback {
    /// Maps an average explanation score to its tier.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::Excellent
        } else if score >= 0.5 {
            Self::Good
        } else if score >= 0.3 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// The aggregated quality of a set of explanations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub average_score: f64,
    pub feedback: Feedback,
}

/// Scores each explanation and aggregates the scores by their arithmetic mean.
///
/// An empty set of explanations has a score of zero.
pub fn evaluate<S>(explanations: &[S]) -> Evaluation
where
    S: AsRef<str>,
{
    if explanations.is_empty() {
        return Evaluation {
            average_score: 0.,
            feedback: Feedback::Unavailable,
        };
    }

    // exact integer sum, rounded once by the division
    let total = explanations
        .iter()
        .map(|explanation| ExplanationQuality::classify(explanation.as_ref()).tenths())
        .sum::<u32>();
    let average_score = f64::from(total) / (10 * explanations.len()) as f64;

    Evaluation {
        average_score,
        feedback: Feedback::from_score(average_score),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use test_utils::assert_approx_eq;

    #[rstest(
        explanation,
        expected,
        case(
            "Similar user 3 rated this item 5/5 (similarity: 0.91)",
            ExplanationQuality::Specific
        ),
        case(
            "This item is popular among users with similar preferences",
            ExplanationQuality::General
        ),
        case("Similar user 3 rated this item 5/5", ExplanationQuality::Generic),
        case("Because you liked similar items", ExplanationQuality::Generic),
        case("", ExplanationQuality::Generic)
    )]
    fn test_classify(explanation: &str, expected: ExplanationQuality) {
        assert_eq!(ExplanationQuality::classify(explanation), expected);
    }

    #[rstest(
        quality,
        expected,
        case(ExplanationQuality::Specific, 0.8),
        case(ExplanationQuality::General, 0.5),
        case(ExplanationQuality::Generic, 0.3)
    )]
    fn test_quality_score(quality: ExplanationQuality, expected: f64) {
        assert_approx_eq!(f64, quality.score(), expected, ulps = 0);
    }

    #[rstest(
        score,
        expected,
        case(1., Feedback::Excellent),
        case(0.7, Feedback::Excellent),
        case(0.69, Feedback::Good),
        case(0.5, Feedback::Good),
        case(0.49, Feedback::Fair),
        case(0.3, Feedback::Fair),
        case(0.29, Feedback::Poor),
        case(0., Feedback::Poor)
    )]
    fn test_feedback_from_score(score: f64, expected: Feedback) {
        assert_eq!(Feedback::from_score(score), expected);
    }

    #[test]
    fn test_evaluate_nothing() {
        let evaluation = evaluate::<&str>(&[]);

        assert_approx_eq!(f64, evaluation.average_score, 0., ulps = 0);
        assert_eq!(evaluation.feedback, Feedback::Unavailable);
        assert_eq!(evaluation.feedback.to_string(), "No explanations available");
    }

    #[test]
    fn test_evaluate_specific_explanation() {
        let evaluation = evaluate(&["Similar user 3 rated this item 5/5 (similarity: 0.91)"]);

        assert_approx_eq!(f64, evaluation.average_score, 0.8);
        assert_eq!(evaluation.feedback, Feedback::Excellent);
        assert_eq!(
            evaluation.feedback.to_string(),
            "Excellent explanations - clear and specific",
        );
    }

    #[test]
    fn test_evaluate_averages_the_scores() {
        let evaluation = evaluate(&[
            "This item is popular among users with similar preferences".to_string(),
            "Trust me".to_string(),
        ]);

        assert_approx_eq!(f64, evaluation.average_score, 0.4);
        assert_eq!(evaluation.feedback, Feedback::Fair);
    }

    #[rstest(
        count,
        case(1),
        case(2),
        case(3),
        case(4),
        case(5),
        case(6),
        case(7),
        case(8),
        case(9),
        case(10)
    )]
    fn test_evaluate_generic_explanations_stay_fair(count: usize) {
        let evaluation = evaluate(&vec!["Trust me"; count]);

        assert_approx_eq!(f64, evaluation.average_score, 0.3, ulps = 0);
        assert_eq!(evaluation.feedback, Feedback::Fair);
    }

    #[rstest(
        specific,
        general,
        generic,
        expected_score,
        expected,
        case(2, 0, 3, 0.5, Feedback::Good),
        case(0, 4, 0, 0.5, Feedback::Good),
        case(4, 0, 1, 0.7, Feedback::Excellent),
        case(6, 0, 9, 0.5, Feedback::Good),
        case(1, 0, 4, 0.4, Feedback::Fair)
    )]
    fn test_evaluate_mixed_explanations_at_the_boundaries(
        specific: usize,
        general: usize,
        generic: usize,
        expected_score: f64,
        expected: Feedback,
    ) {
        let explanations = vec!["Similar user 1 rated this item 5/5 (similarity: 0.90)"; specific]
            .into_iter()
            .chain(vec!["This item is popular among users with similar preferences"; general])
            .chain(vec!["Trust me"; generic])
            .collect::<Vec<_>>();
        let evaluation = evaluate(&explanations);

        assert_approx_eq!(f64, evaluation.average_score, expected_score, ulps = 0);
        assert_eq!(evaluation.feedback, expected);
    }

    #[test]
    fn test_evaluate_never_scores_zero() {
        let evaluation = evaluate(&["", "?"]);

        assert_approx_eq!(f64, evaluation.average_score, 0.3);
        assert_eq!(evaluation.feedback, Feedback::Fair);
    }
}
