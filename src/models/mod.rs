mod menu;
mod order;
mod questionnaire;
mod recommendation;
mod user;

pub use menu::{MenuFilter, MenuItem};
pub use order::{HealthStatus, Order, OrderCreate, OrderCreated, OrderStats};
pub use questionnaire::{
    parse_assignment, Field, FieldValue, QuestionnaireData, AGE_BRACKETS, DEFAULT_HUNGER,
    FOOD_STYLES, MAX_HUNGER, MIN_HUNGER, MOODS, SEXES,
};
pub use recommendation::{
    fallback_recommendations, MatchLevel, Recommendation, RecommendationRequest,
    PLACEHOLDER_USER_ID,
};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};
