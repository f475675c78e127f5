use clap::{Args, Parser, Subcommand};

use crate::models::MenuFilter;

/// Food2Mood: food recommendations that match how you feel.
#[derive(Parser, Debug)]
#[command(name = "food2mood")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the Food2Mood service (overrides FOOD2MOOD_API_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// File holding the auth token (defaults to the user config directory).
    #[arg(long, global = true)]
    pub token_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the landing page and walk through the questionnaire.
    Start,

    /// Fetch recommendations without the interactive questionnaire.
    Recommend {
        /// Start from the built-in example answers.
        #[arg(long)]
        sample: bool,

        /// Set an answer, e.g. --set mood=Радость (repeatable).
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        answers: Vec<String>,
    },

    /// Register a new user by phone number.
    Register {
        #[arg(long)]
        phone: String,

        #[arg(long)]
        user_id: Option<i64>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Log in and store the session token.
    Login {
        user_id: i64,
    },

    /// Forget the stored session token.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Browse the menu.
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Work with orders.
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Check that the service is up.
    Health,
}

impl Default for Command {
    fn default() -> Self {
        Command::Start
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct MenuFilterArgs {
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub restaurant: Option<String>,

    #[arg(long)]
    pub min_price: Option<i64>,

    #[arg(long)]
    pub max_price: Option<i64>,
}

impl From<MenuFilterArgs> for MenuFilter {
    fn from(args: MenuFilterArgs) -> Self {
        MenuFilter {
            category: args.category,
            restaurant: args.restaurant,
            min_price: args.min_price,
            max_price: args.max_price,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    /// List menu items.
    List {
        #[command(flatten)]
        filter: MenuFilterArgs,
    },

    /// Search the menu by text.
    Search {
        query: String,

        #[command(flatten)]
        filter: MenuFilterArgs,
    },

    /// List dish categories.
    Categories,

    /// List restaurants.
    Restaurants,

    /// Show one dish.
    Dish {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderAction {
    /// List orders, optionally for one user.
    List {
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Create an order.
    Create {
        #[arg(long)]
        user_id: i64,

        #[arg(long)]
        table: Option<i64>,

        /// Order total in rubles.
        #[arg(long)]
        amount: i64,

        /// Basket as JSON, e.g. '{"12": 2}'.
        #[arg(long, default_value = "{}")]
        basket: String,
    },

    /// Show order statistics.
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_start() {
        let cli = Cli::try_parse_from(["food2mood"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Start));
    }

    #[test]
    fn test_recommend_collects_answers() {
        let cli = Cli::try_parse_from([
            "food2mood",
            "recommend",
            "--set",
            "mood=Радость",
            "--set",
            "prefers=Вок",
            "--base-url",
            "http://example.test",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://example.test"));
        match cli.command {
            Some(Command::Recommend { sample, answers }) => {
                assert!(!sample);
                assert_eq!(answers, vec!["mood=Радость", "prefers=Вок"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_menu_filters() {
        let cli = Cli::try_parse_from(["food2mood", "menu", "list", "--category", "Суп", "--max-price", "400"])
            .unwrap();
        match cli.command {
            Some(Command::Menu {
                action: MenuAction::List { filter },
            }) => {
                assert_eq!(filter.category.as_deref(), Some("Суп"));
                assert_eq!(filter.max_price, Some(400));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
