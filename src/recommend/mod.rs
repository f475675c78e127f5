mod view;

pub use view::{
    resolve, FeedbackIntent, LoadState, LoadedRecommendations, Origin, RecommendationView,
    ShareIntent,
};
