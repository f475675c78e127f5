use serde::{Deserialize, Deserializer, Serialize};

use crate::models::QuestionnaireData;

/// User id sent with every recommendation request until real accounts are
/// wired into the questionnaire.
pub const PLACEHOLDER_USER_ID: i64 = 1;

/// A scored dish suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,

    pub name: String,

    pub category: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: i64,

    #[serde(default)]
    pub rating: Option<f32>,

    /// Suitability percentage, 0..=100.
    #[serde(default, deserialize_with = "deserialize_match_score")]
    pub match_score: u8,

    #[serde(default, deserialize_with = "deserialize_reasons")]
    pub reasons: Vec<String>,

    #[serde(default)]
    pub icon: Option<String>,
}

fn deserialize_match_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<i64> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or(0).clamp(0, 100) as u8)
}

fn deserialize_reasons<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Coarse bucket used when rendering a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl Recommendation {
    pub fn match_level(&self) -> MatchLevel {
        match self.match_score {
            90..=100 => MatchLevel::High,
            85..=89 => MatchLevel::Medium,
            _ => MatchLevel::Low,
        }
    }
}

/// Body of `POST /api/v1/recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: i64,
    pub mood: String,
    pub style: String,
    pub like_to_eat: String,
    pub dont_like_to_eat: String,
    pub category: String,
}

impl From<&QuestionnaireData> for RecommendationRequest {
    fn from(data: &QuestionnaireData) -> Self {
        Self {
            user_id: PLACEHOLDER_USER_ID,
            mood: data.mood.clone(),
            style: data.food_style.clone(),
            like_to_eat: data.like_to_eat.clone(),
            dont_like_to_eat: data.dont_like_to_eat.clone(),
            category: data.prefers.clone(),
        }
    }
}

/// Example recommendations shown when the service fails or has nothing.
pub fn fallback_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: 1,
            name: "Вок гречневый с креветками в устричном соусе".to_string(),
            category: "Вок".to_string(),
            description: Some(
                "Богатое белком блюдо с тигровыми креветками и гречневой лапшой. \
                 Идеально подходит для поднятия настроения и восстановления энергии."
                    .to_string(),
            ),
            price: 527,
            rating: Some(4.8),
            match_score: 95,
            reasons: vec![
                "Высокое содержание белка поднимет настроение".to_string(),
                "Гречневая лапша даст энергию на весь день".to_string(),
                "Устричный соус добавит пикантности".to_string(),
            ],
            icon: Some("🍜".to_string()),
        },
        Recommendation {
            id: 2,
            name: "Вок с беконом и грибами в сливочном соусе".to_string(),
            category: "Вок".to_string(),
            description: Some(
                "Сытное блюдо с беконом и грибами в нежном сливочном соусе. \
                 Отлично подходит для комфортного ужина."
                    .to_string(),
            ),
            price: 477,
            rating: Some(4.6),
            match_score: 88,
            reasons: vec![
                "Бекон поднимет настроение".to_string(),
                "Сливочный соус создаст ощущение комфорта".to_string(),
                "Грибы добавят глубины вкуса".to_string(),
            ],
            icon: Some("🍜".to_string()),
        },
        Recommendation {
            id: 3,
            name: "Корейский стритфуд с курицей".to_string(),
            category: "Корейский стритфуд".to_string(),
            description: Some(
                "Острое и пикантное блюдо с курицей в корейском стиле. \
                 Идеально для тех, кто любит яркие вкусы."
                    .to_string(),
            ),
            price: 350,
            rating: Some(4.7),
            match_score: 82,
            reasons: vec![
                "Острота поможет справиться со стрессом".to_string(),
                "Курица - отличный источник белка".to_string(),
                "Корейские специи поднимут настроение".to_string(),
            ],
            icon: Some("🌶️".to_string()),
        },
    ]
}
