use crate::api::{ApiClient, RecommendationResult, Transport};
use crate::error::{AppError, Result};
use crate::models::{Field, FieldValue, QuestionnaireData};

/// Anything that can turn questionnaire answers into recommendations.
pub trait RecommendationSource {
    fn fetch_recommendations(&self, data: &QuestionnaireData) -> RecommendationResult;
}

impl<T: Transport> RecommendationSource for ApiClient<T> {
    fn fetch_recommendations(&self, data: &QuestionnaireData) -> RecommendationResult {
        self.recommendations(data)
    }
}

/// The three questionnaire screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Mood and hunger.
    One,
    /// Sex, age bracket and food style.
    Two,
    /// Likes, dislikes and calories.
    Three,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::One => 1,
            Step::Two => 2,
            Step::Three => 3,
        }
    }

    pub const COUNT: u8 = 3;

    pub fn title(self) -> &'static str {
        match self {
            Step::One => "Как ты себя чувствуешь?",
            Step::Two => "Расскажи о своих предпочтениях",
            Step::Three => "Твои вкусовые предпочтения",
        }
    }

    /// Fields collected on this screen.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::One => &[Field::Mood, Field::Hungry],
            Step::Two => &[Field::Sex, Field::Age, Field::FoodStyle],
            Step::Three => &[Field::DontLikeToEat, Field::LikeToEat, Field::Ccal, Field::Prefers],
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::One => Some(Step::Two),
            Step::Two => Some(Step::Three),
            Step::Three => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::One => None,
            Step::Two => Some(Step::One),
            Step::Three => Some(Step::Two),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Result of `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(Step),
    SubmitRequested,
}

/// What a finished submission hands to the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub data: QuestionnaireData,
    pub result: RecommendationResult,
}

/// Linear three-step questionnaire with a submission guard.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    step: Step,
    state: SubmitState,
    data: QuestionnaireData,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::with_data(QuestionnaireData::default())
    }

    /// Start from pre-filled answers, still at step one.
    pub fn with_data(data: QuestionnaireData) -> Self {
        Self {
            step: Step::One,
            state: SubmitState::Idle,
            data,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn data(&self) -> &QuestionnaireData {
        &self.data
    }

    /// Move forward. From the last step this asks for submission instead.
    ///
    /// Empty answers never block moving on.
    pub fn advance(&mut self) -> Transition {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                tracing::debug!(step = next.number(), "Questionnaire advanced");
                Transition::Moved(next)
            }
            None => Transition::SubmitRequested,
        }
    }

    /// Move back one step; no-op on the first.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            tracing::debug!(step = prev.number(), "Questionnaire went back");
        }
        self.step
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<()> {
        self.data.set(field, value.into())
    }

    /// Enter `Submitting`. Fails if not on the last step or already submitting.
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.state == SubmitState::Submitting {
            return Err(AppError::SubmissionInProgress);
        }
        if self.step != Step::Three {
            return Err(AppError::InvalidInput(format!(
                "cannot submit from step {} of {}",
                self.step.number(),
                Step::COUNT
            )));
        }
        self.state = SubmitState::Submitting;
        Ok(())
    }

    pub fn finish_submit(&mut self) {
        self.state = SubmitState::Idle;
    }

    /// Send the current answers once and return to `Idle`.
    ///
    /// A failed request is logged and still yields an outcome; the results
    /// screen decides how to present it.
    pub fn submit<S: RecommendationSource + ?Sized>(&mut self, source: &S) -> Result<SubmitOutcome> {
        self.begin_submit()?;
        tracing::info!(mood = %self.data.mood, hungry = self.data.hungry, "Submitting questionnaire");

        let result = source.fetch_recommendations(&self.data);
        self.finish_submit();

        if let RecommendationResult::Failed(reason) = &result {
            tracing::warn!(reason = %reason, "Questionnaire submission failed");
        }

        Ok(SubmitOutcome {
            data: self.data.clone(),
            result,
        })
    }
}
