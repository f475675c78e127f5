use crate::models::{HealthStatus, MatchLevel, MenuItem, Order, OrderStats, Recommendation, User};
use crate::questionnaire::Step;
use crate::recommend::{LoadedRecommendations, Origin};

/// Static landing screen.
pub fn display_landing() {
    println!();
    println!("=== Food2Mood ===");
    println!();
    println!("Еда под настроение: ответь на три коротких шага анкеты,");
    println!("и мы подберем блюда, которые подойдут тебе прямо сейчас.");
    println!();
    println!("  1. Настроение и уровень голода");
    println!("  2. Немного о тебе и стиле питания");
    println!("  3. Что ты любишь и чего не ешь");
    println!();
}

pub fn display_step_header(step: Step) {
    let filled = "#".repeat(step.number() as usize * 10);
    let empty = "-".repeat((Step::COUNT - step.number()) as usize * 10);

    println!();
    println!("Шаг {} из {}  [{}{}]", step.number(), Step::COUNT, filled, empty);
    println!("=== {} ===", step.title());
    println!();
}

pub fn display_loading() {
    println!();
    println!("Подбираем блюда...");
}

fn match_label(rec: &Recommendation) -> &'static str {
    match rec.match_level() {
        MatchLevel::High => "отличное совпадение",
        MatchLevel::Medium => "хорошее совпадение",
        MatchLevel::Low => "может понравиться",
    }
}

/// One recommendation card as text.
pub fn format_recommendation_card(index: usize, rec: &Recommendation) -> String {
    let mut lines = Vec::new();

    let icon = rec.icon.as_deref().unwrap_or("🍽️");
    lines.push(format!("{:>2}. {} {}", index, icon, rec.name));

    let rating = rec
        .rating
        .map(|r| format!(" | ★ {:.1}", r))
        .unwrap_or_default();
    lines.push(format!(
        "    {} | {} ₽{} | {}% ({})",
        rec.category,
        rec.price,
        rating,
        rec.match_score,
        match_label(rec)
    ));

    if let Some(description) = &rec.description {
        lines.push(format!("    {}", description));
    }

    for reason in &rec.reasons {
        lines.push(format!("    • {}", reason));
    }

    lines.join("\n")
}

/// Line explaining why example dishes are shown, if they are.
pub fn fallback_notice(origin: &Origin) -> Option<&'static str> {
    match origin {
        Origin::Live => None,
        Origin::Empty => Some("(Подходящих блюд не нашлось, показываем примеры)"),
        Origin::Failed { .. } => Some("(Сервис рекомендаций недоступен, показываем примеры)"),
    }
}

pub fn display_recommendations(loaded: &LoadedRecommendations) {
    println!();
    println!("=== Твои рекомендации ===");

    if let Some(notice) = fallback_notice(&loaded.origin) {
        println!("{}", notice);
    }
    println!();

    for (i, rec) in loaded.items.iter().enumerate() {
        println!("{}", format_recommendation_card(i + 1, rec));
        println!();
    }
}

/// Display menu items in a table.
pub fn display_menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("Меню пусто.");
        return;
    }

    let max_name_len = items
        .iter()
        .map(|i| i.dish_name.chars().count())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Меню ({} позиций) ===", items.len());
    println!();

    for item in items {
        let category = item.dish_category.as_deref().unwrap_or("-");
        let weight = item.dish_g.as_deref().map(|g| format!(", {} г", g)).unwrap_or_default();
        println!(
            "{:>5}. {:<width$}  {:>5} ₽  [{}]{}",
            item.id,
            item.dish_name,
            item.dish_price,
            category,
            weight,
            width = max_name_len
        );
    }

    println!();
}

/// Full card for one dish.
pub fn display_dish(item: &MenuItem) {
    println!();
    println!("=== {} ===", item.dish_name);
    println!("Категория: {}", item.dish_category.as_deref().unwrap_or("-"));
    println!("Цена: {} ₽", item.dish_price);

    let optional = [
        ("Вес", &item.dish_g),
        ("Размер", &item.size),
        ("Состав", &item.simple_ingridients),
        ("С этим берут", &item.additional_dishes),
        ("Совет нутрициолога", &item.dish_rec_nutritionist),
        ("Рейтинг", &item.stat_rating),
        ("Отзывы", &item.stat_reviews),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            println!("{}: {}", label, v);
        }
    }
    println!();
}

/// Display a simple titled list.
pub fn display_list(title: &str, entries: &[String]) {
    if entries.is_empty() {
        println!("{}: (нет)", title);
        return;
    }

    println!();
    println!("=== {} ({}) ===", title, entries.len());
    for entry in entries {
        println!("  {}", entry);
    }
    println!();
}

pub fn display_user(user: &User) {
    println!();
    println!("Пользователь: {} (id {})", user.display_name(), user.user_id);
    if let Some(phone) = &user.phone {
        println!("Телефон: {}", phone);
    }
    println!("Зарегистрирован: {}", user.user_reg_time);
    println!("FoodToMood монеты: {}", user.coins);
    if user.ban {
        println!("Аккаунт заблокирован");
    }
    println!();
}

pub fn display_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("Заказов нет.");
        return;
    }

    println!();
    println!("=== Заказы ({}) ===", orders.len());
    for order in orders {
        let table = order
            .table_number
            .map(|t| format!("стол {}", t))
            .unwrap_or_else(|| "без стола".to_string());
        println!(
            "  #{} | {} | {} ₽ | {}",
            order.id,
            table,
            order.order_amount,
            order.time.as_deref().unwrap_or("-")
        );
    }
    println!();
}

pub fn display_order_stats(stats: &OrderStats) {
    println!();
    println!("--- Статистика заказов ---");
    println!("Всего заказов: {}", stats.total_orders);
    println!("Выручка: {:.0} ₽", stats.total_revenue);
    println!("Средний чек: {:.2} ₽", stats.average_order_value);
    println!();
}

pub fn display_health(health: &HealthStatus) {
    let verdict = if health.is_healthy() { "работает" } else { "есть проблемы" };
    println!(
        "Сервис {}: {} (база данных: {})",
        verdict,
        health.status,
        health.database.as_deref().unwrap_or("unknown")
    );
    if let Some(error) = &health.error {
        println!("Ошибка: {}", error);
    }
}
