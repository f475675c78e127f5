pub mod prompts;
pub mod render;

pub use prompts::{
    match_category, prompt_category, prompt_hunger, prompt_navigation, prompt_result_action,
    prompt_step, prompt_yes_no, CategoryMatch, NavChoice, ResultAction,
};
pub use render::{
    display_dish, display_health, display_landing, display_list, display_loading, display_menu,
    display_order_stats, display_orders, display_recommendations, display_step_header,
    display_user, fallback_notice, format_recommendation_card,
};
