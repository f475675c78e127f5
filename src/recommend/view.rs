use crate::api::RecommendationResult;
use crate::models::{fallback_recommendations, QuestionnaireData, Recommendation};
use crate::questionnaire::RecommendationSource;

/// Where the displayed list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Live,
    /// The service answered with no dishes; examples are shown.
    Empty,
    /// The request failed; examples are shown.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecommendations {
    pub items: Vec<Recommendation>,
    pub origin: Origin,
}

impl LoadedRecommendations {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Empty | Origin::Failed { .. })
    }

    pub fn find(&self, id: i64) -> Option<&Recommendation> {
        self.items.iter().find(|r| r.id == id)
    }
}

/// Resolve a request outcome into what the screen shows.
///
/// Empty and failed results both fall back to the example list.
pub fn resolve(result: RecommendationResult) -> LoadedRecommendations {
    match result {
        RecommendationResult::Ok(items) if !items.is_empty() => LoadedRecommendations {
            items,
            origin: Origin::Live,
        },
        RecommendationResult::Ok(_) => LoadedRecommendations {
            items: fallback_recommendations(),
            origin: Origin::Empty,
        },
        RecommendationResult::Failed(reason) => LoadedRecommendations {
            items: fallback_recommendations(),
            origin: Origin::Failed { reason },
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackIntent {
    pub recommendation_id: i64,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent {
    pub recommendation_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// The results screen: loads once, then records feedback and shares.
#[derive(Debug)]
pub struct RecommendationView {
    state: LoadState,
    loaded: Option<LoadedRecommendations>,
    intents: Vec<FeedbackIntent>,
}

impl Default for RecommendationView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            loaded: None,
            intents: Vec::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn loaded(&self) -> Option<&LoadedRecommendations> {
        self.loaded.as_ref()
    }

    /// Fetch for `data` and settle on live or example items.
    pub fn load<S: RecommendationSource + ?Sized>(
        &mut self,
        data: &QuestionnaireData,
        source: &S,
    ) -> &LoadedRecommendations {
        self.state = LoadState::Loading;
        let loaded = resolve(source.fetch_recommendations(data));
        self.show(loaded)
    }

    /// Display an outcome that was already fetched (e.g. by the questionnaire).
    pub fn show(&mut self, loaded: LoadedRecommendations) -> &LoadedRecommendations {
        match &loaded.origin {
            Origin::Live => {}
            Origin::Empty => tracing::info!("No matching dishes, showing example recommendations"),
            Origin::Failed { reason } => {
                tracing::info!(reason = %reason, "Showing example recommendations")
            }
        }
        self.state = LoadState::Ready;
        self.loaded.insert(loaded)
    }

    /// Record a thumbs up/down. Kept locally; nothing is sent.
    pub fn feedback(&mut self, recommendation_id: i64, positive: bool) -> FeedbackIntent {
        let intent = FeedbackIntent {
            recommendation_id,
            positive,
        };
        tracing::info!(recommendation_id, positive, "Feedback recorded");
        self.intents.push(intent.clone());
        intent
    }

    pub fn feedback_given(&self) -> &[FeedbackIntent] {
        &self.intents
    }

    /// Build share text for a dish. Nothing is sent.
    pub fn share(&self, recommendation: &Recommendation) -> ShareIntent {
        let text = format!(
            "Food2Mood советует: {} ({}), совпадение {}%",
            recommendation.name, recommendation.category, recommendation.match_score
        );
        tracing::info!(recommendation_id = recommendation.id, "Share requested");
        ShareIntent {
            recommendation_id: recommendation.id,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recommendation;

    struct FixedSource(RecommendationResult);

    impl RecommendationSource for FixedSource {
        fn fetch_recommendations(&self, _data: &QuestionnaireData) -> RecommendationResult {
            self.0.clone()
        }
    }

    fn live_item() -> Recommendation {
        Recommendation {
            id: 40,
            name: "Салат с тунцом".to_string(),
            category: "Салат".to_string(),
            description: None,
            price: 410,
            rating: None,
            match_score: 73,
            reasons: vec![],
            icon: Some("🥗".to_string()),
        }
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = RecommendationView::new();
        assert_eq!(view.state(), LoadState::Loading);
        assert!(view.loaded().is_none());
    }

    #[test]
    fn test_failure_falls_back_to_three_examples() {
        let mut view = RecommendationView::new();
        let source = FixedSource(RecommendationResult::Failed("connection refused".to_string()));
        let loaded = view.load(&QuestionnaireData::default(), &source);

        assert_eq!(loaded.items.len(), 3);
        assert_eq!(
            loaded.origin,
            Origin::Failed {
                reason: "connection refused".to_string()
            }
        );
        let woks = loaded.items.iter().filter(|r| r.category == "Вок").count();
        let korean = loaded.items.iter().filter(|r| r.category == "Корейский стритфуд").count();
        assert_eq!((woks, korean), (2, 1));
        assert_eq!(view.state(), LoadState::Ready);
    }

    #[test]
    fn test_empty_result_falls_back() {
        let loaded = resolve(RecommendationResult::Ok(vec![]));
        assert_eq!(loaded.origin, Origin::Empty);
        assert!(loaded.is_fallback());
        assert_eq!(loaded.items.len(), 3);
    }

    #[test]
    fn test_live_items_shown_as_is() {
        let loaded = resolve(RecommendationResult::Ok(vec![live_item()]));
        assert_eq!(loaded.origin, Origin::Live);
        assert_eq!(loaded.items.len(), 1);
        assert!(loaded.find(40).is_some());
    }

    #[test]
    fn test_feedback_and_share_stay_local() {
        let mut view = RecommendationView::new();
        view.show(resolve(RecommendationResult::Ok(vec![live_item()])));

        let intent = view.feedback(40, true);
        assert!(intent.positive);
        view.feedback(40, false);
        assert_eq!(view.feedback_given().len(), 2);

        let share = view.share(&live_item());
        assert_eq!(share.recommendation_id, 40);
        assert!(share.text.contains("Салат с тунцом"));
        assert!(share.text.contains("73%"));
    }
}
