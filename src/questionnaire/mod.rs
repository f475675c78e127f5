mod machine;

pub use machine::{
    Questionnaire, RecommendationSource, Step, SubmitOutcome, SubmitState, Transition,
};
