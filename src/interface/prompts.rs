use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{AppError, Result};
use crate::models::{Field, AGE_BRACKETS, FOOD_STYLES, MAX_HUNGER, MIN_HUNGER, MOODS, SEXES};
use crate::questionnaire::{Questionnaire, Step};
use crate::recommend::LoadedRecommendations;

const SKIP: &str = "Пропустить";

/// Minimum similarity for a typed category to count as a match.
const CATEGORY_MATCH_THRESHOLD: f64 = 0.7;

/// Navigation choice at the bottom of a questionnaire screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChoice {
    Next,
    Back,
    Quit,
}

/// Action picked on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Like(i64),
    Dislike(i64),
    Share(i64),
    Restart,
    Done,
}

/// Outcome of matching a typed category against the known ones.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryMatch {
    Exact(String),
    Candidates(Vec<String>),
    NoMatch,
}

/// Match typed text against known categories, exact first, then fuzzy.
pub fn match_category(input: &str, categories: &[String]) -> CategoryMatch {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return CategoryMatch::NoMatch;
    }

    if let Some(exact) = categories.iter().find(|c| c.to_lowercase() == needle) {
        return CategoryMatch::Exact(exact.clone());
    }

    let mut candidates: Vec<(&String, f64)> = categories
        .iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > CATEGORY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        CategoryMatch::NoMatch
    } else {
        CategoryMatch::Candidates(candidates.into_iter().take(5).map(|(c, _)| c.clone()).collect())
    }
}

/// Pick one option or skip. Returns `None` on skip.
fn prompt_choice(prompt: &str, options: &[&str], current: &str) -> Result<Option<String>> {
    let mut items: Vec<&str> = options.to_vec();
    items.push(SKIP);

    let default = options.iter().position(|o| *o == current).unwrap_or(options.len());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(options.get(selection).map(|s| s.to_string()))
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for hunger on the 1..=10 scale.
pub fn prompt_hunger(current: u8) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(format!("Уровень голода ({}-{})", MIN_HUNGER, MAX_HUNGER))
        .default(current.to_string())
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.trim().parse::<i64>() {
                Ok(n) if (MIN_HUNGER..=MAX_HUNGER).contains(&n) => Ok(()),
                _ => Err(format!("Введите число от {} до {}", MIN_HUNGER, MAX_HUNGER)),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput("Invalid number".to_string()))
}

/// Ask for the preferred category, matching against the menu when known.
pub fn prompt_category(current: &str, categories: &[String]) -> Result<String> {
    loop {
        let input = prompt_text("Любимая категория блюд (Enter, чтобы пропустить)", current)?;
        if input.is_empty() || categories.is_empty() {
            return Ok(input);
        }

        match match_category(&input, categories) {
            CategoryMatch::Exact(category) => return Ok(category),
            CategoryMatch::Candidates(options) if options.len() == 1 => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Вы имели в виду '{}'?", options[0]))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(options[0].clone());
                }
            }
            CategoryMatch::Candidates(options) => {
                let mut selection_options = options.clone();
                selection_options.push("Ничего из этого".to_string());

                let selection = Select::new()
                    .with_prompt("Какую категорию вы имели в виду?")
                    .items(&selection_options)
                    .default(0)
                    .interact()?;

                if selection < options.len() {
                    return Ok(options[selection].clone());
                }
            }
            CategoryMatch::NoMatch => {
                println!("Категория '{}' не найдена в меню", input);
                let keep = prompt_yes_no("Оставить как есть?", false)?;
                if keep {
                    return Ok(input);
                }
            }
        }
    }
}

/// Fill in the fields of the current step.
pub fn prompt_step(questionnaire: &mut Questionnaire, categories: &[String]) -> Result<()> {
    for field in questionnaire.step().fields() {
        let current = questionnaire.data().get(*field);
        match field {
            Field::Mood => {
                if let Some(mood) = prompt_choice("Твое настроение", &MOODS, &current)? {
                    questionnaire.set_field(Field::Mood, mood)?;
                }
            }
            Field::Hungry => {
                let level = prompt_hunger(questionnaire.data().hungry)?;
                questionnaire.set_field(Field::Hungry, level)?;
            }
            Field::Sex => {
                if let Some(sex) = prompt_choice("Пол", &SEXES, &current)? {
                    questionnaire.set_field(Field::Sex, sex)?;
                }
            }
            Field::Age => {
                if let Some(age) = prompt_choice("Возраст", &AGE_BRACKETS, &current)? {
                    questionnaire.set_field(Field::Age, age)?;
                }
            }
            Field::FoodStyle => {
                if let Some(style) = prompt_choice("Стиль питания", &FOOD_STYLES, &current)? {
                    questionnaire.set_field(Field::FoodStyle, style)?;
                }
            }
            Field::DontLikeToEat => {
                let text = prompt_text("Что ты НЕ ешь? (например: грибы, морепродукты)", &current)?;
                questionnaire.set_field(Field::DontLikeToEat, text)?;
            }
            Field::LikeToEat => {
                let text = prompt_text("Что ты ЛЮБИШЬ? (например: паста, суши)", &current)?;
                questionnaire.set_field(Field::LikeToEat, text)?;
            }
            Field::Ccal => {
                let text = prompt_text("Калории на блюдо, опционально (например: 300-500)", &current)?;
                questionnaire.set_field(Field::Ccal, text)?;
            }
            Field::Prefers => {
                let category = prompt_category(&current, categories)?;
                questionnaire.set_field(Field::Prefers, category)?;
            }
        }
    }
    Ok(())
}

/// Ask where to go from the current step.
pub fn prompt_navigation(step: Step) -> Result<NavChoice> {
    let forward = if step == Step::Three {
        "Получить рекомендации"
    } else {
        "Далее"
    };

    let mut choices = vec![(forward, NavChoice::Next)];
    if step != Step::One {
        choices.push(("Назад", NavChoice::Back));
    }
    choices.push(("Выйти", NavChoice::Quit));

    let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
    let selection = Select::new().items(&labels).default(0).interact()?;

    Ok(choices[selection].1)
}

/// Offer feedback, share and restart actions for the shown dishes.
pub fn prompt_result_action(loaded: &LoadedRecommendations) -> Result<ResultAction> {
    let mut choices: Vec<(String, ResultAction)> = Vec::new();
    for rec in &loaded.items {
        choices.push((format!("👍 {}", rec.name), ResultAction::Like(rec.id)));
        choices.push((format!("👎 {}", rec.name), ResultAction::Dislike(rec.id)));
        choices.push((format!("Поделиться: {}", rec.name), ResultAction::Share(rec.id)));
    }
    choices.push(("Пройти анкету заново".to_string(), ResultAction::Restart));
    choices.push(("Готово".to_string(), ResultAction::Done));

    let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Что дальше?")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    Ok(choices[selection].1)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
