pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod questionnaire;
pub mod recommend;

pub use error::{AppError, Result};
pub use models::{QuestionnaireData, Recommendation};
