use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const MIN_HUNGER: i64 = 1;
pub const MAX_HUNGER: i64 = 10;
pub const DEFAULT_HUNGER: u8 = 5;

pub const MOODS: [&str; 5] = ["Спокойствие", "Радость", "Печаль", "Гнев", "Волнение"];

pub const SEXES: [&str; 2] = ["Мужской", "Женский"];

pub const AGE_BRACKETS: [&str; 5] = ["До 18", "18-25", "26-35", "36-45", "45+"];

pub const FOOD_STYLES: [&str; 5] = ["Стандартное", "Вегетарианское", "Веганское", "Кето", "Палео"];

/// Answers accumulated across the three questionnaire steps.
///
/// Every field has a usable default from construction on; nothing is ever
/// missing when the record is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireData {
    #[serde(default)]
    pub mood: String,

    #[serde(default = "default_hunger")]
    pub hungry: u8,

    /// Preferred dish category.
    #[serde(default)]
    pub prefers: String,

    #[serde(default)]
    pub sex: String,

    #[serde(default)]
    pub age: String,

    #[serde(default)]
    pub food_style: String,

    /// Caloric range, free-form (e.g. "300-500 ккал").
    #[serde(default)]
    pub ccal: String,

    #[serde(default)]
    pub dont_like_to_eat: String,

    #[serde(default)]
    pub like_to_eat: String,
}

fn default_hunger() -> u8 {
    DEFAULT_HUNGER
}

impl Default for QuestionnaireData {
    fn default() -> Self {
        Self {
            mood: String::new(),
            hungry: DEFAULT_HUNGER,
            prefers: String::new(),
            sex: String::new(),
            age: String::new(),
            food_style: String::new(),
            ccal: String::new(),
            dont_like_to_eat: String::new(),
            like_to_eat: String::new(),
        }
    }
}

impl QuestionnaireData {
    /// The example answers the results screen used before it was wired to
    /// the questionnaire.
    pub fn sample() -> Self {
        Self {
            mood: "Радость".to_string(),
            hungry: 5,
            prefers: "Вок".to_string(),
            sex: "Мужской".to_string(),
            age: "25-35".to_string(),
            food_style: "Обычный".to_string(),
            ccal: "2000-2500".to_string(),
            dont_like_to_eat: "грибы".to_string(),
            like_to_eat: "мясо, рыба".to_string(),
        }
    }

    /// Assign one field. No other field is touched.
    ///
    /// `hungry` takes a level and is clamped to 1..=10; all other fields
    /// take text.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::Hungry, FieldValue::Level(level)) => {
                self.hungry = level.clamp(MIN_HUNGER, MAX_HUNGER) as u8;
            }
            (Field::Hungry, FieldValue::Text(text)) => {
                let level: i64 = text.trim().parse().map_err(|_| {
                    AppError::InvalidInput(format!("hunger level must be a number, got '{}'", text))
                })?;
                self.hungry = level.clamp(MIN_HUNGER, MAX_HUNGER) as u8;
            }
            (field, FieldValue::Text(text)) => match self.text_slot(field) {
                Some(slot) => *slot = text,
                None => {
                    return Err(AppError::InvalidInput(format!(
                        "field '{}' does not take text",
                        field
                    )));
                }
            },
            (field, FieldValue::Level(level)) => {
                return Err(AppError::InvalidInput(format!(
                    "field '{}' expects text, got number {}",
                    field, level
                )));
            }
        }
        Ok(())
    }

    /// Read one field back as a display string.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Mood => self.mood.clone(),
            Field::Hungry => self.hungry.to_string(),
            Field::Prefers => self.prefers.clone(),
            Field::Sex => self.sex.clone(),
            Field::Age => self.age.clone(),
            Field::FoodStyle => self.food_style.clone(),
            Field::Ccal => self.ccal.clone(),
            Field::DontLikeToEat => self.dont_like_to_eat.clone(),
            Field::LikeToEat => self.like_to_eat.clone(),
        }
    }

    /// Storage for a text answer; `None` for the numeric hunger level.
    fn text_slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Mood => Some(&mut self.mood),
            Field::Prefers => Some(&mut self.prefers),
            Field::Sex => Some(&mut self.sex),
            Field::Age => Some(&mut self.age),
            Field::FoodStyle => Some(&mut self.food_style),
            Field::Ccal => Some(&mut self.ccal),
            Field::DontLikeToEat => Some(&mut self.dont_like_to_eat),
            Field::LikeToEat => Some(&mut self.like_to_eat),
            Field::Hungry => None,
        }
    }
}

/// The nine questionnaire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Mood,
    Hungry,
    Prefers,
    Sex,
    Age,
    FoodStyle,
    Ccal,
    DontLikeToEat,
    LikeToEat,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Mood,
        Field::Hungry,
        Field::Prefers,
        Field::Sex,
        Field::Age,
        Field::FoodStyle,
        Field::Ccal,
        Field::DontLikeToEat,
        Field::LikeToEat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Mood => "mood",
            Field::Hungry => "hungry",
            Field::Prefers => "prefers",
            Field::Sex => "sex",
            Field::Age => "age",
            Field::FoodStyle => "food_style",
            Field::Ccal => "ccal",
            Field::DontLikeToEat => "dont_like_to_eat",
            Field::LikeToEat => "like_to_eat",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s.trim())
            .ok_or_else(|| AppError::InvalidInput(format!("unknown questionnaire field '{}'", s)))
    }
}

/// A value headed for one questionnaire field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Level(i64),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(level: i64) -> Self {
        FieldValue::Level(level)
    }
}

/// Parse a `field=value` assignment as given on the command line.
pub fn parse_assignment(raw: &str) -> Result<(Field, FieldValue)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidInput(format!("expected field=value, got '{}'", raw)))?;
    let field: Field = name.parse()?;
    Ok((field, FieldValue::Text(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let data = QuestionnaireData::default();
        assert_eq!(data.hungry, 5);
        assert!(data.mood.is_empty());
        assert!(data.like_to_eat.is_empty());
    }

    #[test]
    fn test_set_touches_only_one_field() {
        for field in Field::ALL {
            let mut data = QuestionnaireData::sample();
            let before = data.clone();
            let value = if field == Field::Hungry {
                FieldValue::Level(9)
            } else {
                FieldValue::Text("x".to_string())
            };
            data.set(field, value).unwrap();

            for other in Field::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(data.get(other), before.get(other), "{} changed when setting {}", other, field);
            }
        }
    }

    #[test]
    fn test_hunger_is_clamped() {
        let mut data = QuestionnaireData::default();
        for level in [-5, 0, 1, 7, 10, 11, 1000] {
            data.set(Field::Hungry, FieldValue::Level(level)).unwrap();
            assert!((1..=10).contains(&data.hungry));
        }
        data.set(Field::Hungry, FieldValue::Level(42)).unwrap();
        assert_eq!(data.hungry, 10);
        data.set(Field::Hungry, "3".into()).unwrap();
        assert_eq!(data.hungry, 3);
    }

    #[test]
    fn test_level_rejected_for_text_field() {
        let mut data = QuestionnaireData::default();
        assert!(data.set(Field::Mood, FieldValue::Level(2)).is_err());
        assert!(data.set(Field::Hungry, "lots".into()).is_err());
        assert_eq!(data, QuestionnaireData::default());
    }

    #[test]
    fn test_only_hunger_lacks_text_storage() {
        let mut data = QuestionnaireData::default();
        for field in Field::ALL {
            assert_eq!(data.text_slot(field).is_none(), field == Field::Hungry, "{}", field);
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!("calories".parse::<Field>().is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let (field, value) = parse_assignment("like_to_eat=мясо, рыба").unwrap();
        assert_eq!(field, Field::LikeToEat);
        assert_eq!(value, FieldValue::Text("мясо, рыба".to_string()));
        assert!(parse_assignment("mood").is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let data: QuestionnaireData = serde_json::from_str(r#"{"mood": "Гнев"}"#).unwrap();
        assert_eq!(data.mood, "Гнев");
        assert_eq!(data.hungry, 5);
    }
}
