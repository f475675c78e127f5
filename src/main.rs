use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use food2mood::api::{ApiClient, ClientContext, FileTokenStore, TokenStore};
use food2mood::app::{View, ViewRouter};
use food2mood::cli::{Cli, Command, MenuAction, OrderAction};
use food2mood::config::ClientConfig;
use food2mood::error::Result;
use food2mood::interface::{
    display_dish, display_health, display_landing, display_list, display_loading, display_menu,
    display_order_stats, display_orders, display_recommendations, display_step_header,
    display_user, prompt_navigation, prompt_result_action, prompt_step, prompt_yes_no, NavChoice,
    ResultAction,
};
use food2mood::models::{parse_assignment, OrderCreate, QuestionnaireData, RegisterRequest};
use food2mood::questionnaire::{Questionnaire, SubmitOutcome, Transition};
use food2mood::recommend::{resolve, RecommendationView};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::from_env().with_overrides(cli.base_url.clone(), cli.timeout)?;
    let tokens: Rc<dyn TokenStore> = match &cli.token_file {
        Some(path) => Rc::new(FileTokenStore::new(path)),
        None => Rc::new(FileTokenStore::in_config_dir(&config.token_key)?),
    };
    let router = Rc::new(ViewRouter::new());

    tracing::debug!(base_url = %config.base_url, "Using service");
    let context = ClientContext::new(config, tokens, router.clone());
    let client = ApiClient::connect(context)?;

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Start => cmd_start(&client, &router),
        Command::Recommend { sample, answers } => cmd_recommend(&client, sample, &answers),
        Command::Register {
            phone,
            user_id,
            name,
            first_name,
            last_name,
        } => {
            let request = RegisterRequest {
                phone,
                user_id,
                user_name: name,
                user_first_name: first_name,
                user_last_name: last_name,
            };
            let reply = client.register_user(&request)?;
            println!("{} (id {})", reply.message, reply.user_id);
            Ok(())
        }
        Command::Login { user_id } => {
            let reply = client.login(user_id)?;
            if reply.access_token.is_some() {
                println!("Вход выполнен.");
            } else {
                println!("Сервис не выдал токен, запросы пойдут без авторизации.");
            }
            Ok(())
        }
        Command::Logout => {
            client.logout()?;
            println!("Сессия завершена.");
            Ok(())
        }
        Command::Whoami => {
            display_user(&client.current_user()?);
            Ok(())
        }
        Command::Menu { action } => cmd_menu(&client, action),
        Command::Orders { action } => cmd_orders(&client, action),
        Command::Health => {
            display_health(&client.health()?);
            Ok(())
        }
    }
}

/// Landing page, questionnaire and results, until the user leaves.
fn cmd_start(client: &ApiClient, router: &ViewRouter) -> Result<()> {
    let categories = match client.categories() {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load menu categories");
            Vec::new()
        }
    };

    let mut outcome: Option<SubmitOutcome> = None;

    loop {
        if router.take_forced() {
            println!("Сессия истекла, войдите снова.");
            outcome = None;
        }

        match router.current() {
            View::Landing => {
                display_landing();
                if !prompt_yes_no("Пройти анкету?", true)? {
                    return Ok(());
                }
                router.go(View::Questionnaire);
            }
            View::Questionnaire => match run_questionnaire(client, &categories)? {
                Some(submitted) => {
                    // A rejected session already sent us home.
                    if router.current() == View::Questionnaire {
                        outcome = Some(submitted);
                        router.go(View::Recommendations);
                    }
                }
                None => return Ok(()),
            },
            View::Recommendations => {
                let restart = match outcome.take() {
                    Some(submitted) => run_results(submitted)?,
                    None => false,
                };
                if !restart {
                    return Ok(());
                }
                router.go(View::Questionnaire);
            }
        }
    }
}

/// Walk the three steps. `None` means the user quit.
fn run_questionnaire(client: &ApiClient, categories: &[String]) -> Result<Option<SubmitOutcome>> {
    let mut questionnaire = Questionnaire::new();

    loop {
        display_step_header(questionnaire.step());
        prompt_step(&mut questionnaire, categories)?;

        match prompt_navigation(questionnaire.step())? {
            NavChoice::Back => {
                questionnaire.retreat();
            }
            NavChoice::Quit => return Ok(None),
            NavChoice::Next => {
                if let Transition::SubmitRequested = questionnaire.advance() {
                    display_loading();
                    let outcome = questionnaire.submit(client)?;
                    return Ok(Some(outcome));
                }
            }
        }
    }
}

/// Show results and handle feedback. Returns true to take the questionnaire again.
fn run_results(outcome: SubmitOutcome) -> Result<bool> {
    let mut view = RecommendationView::new();
    let loaded = view.show(resolve(outcome.result)).clone();
    display_recommendations(&loaded);

    loop {
        match prompt_result_action(&loaded)? {
            ResultAction::Like(id) => {
                view.feedback(id, true);
                println!("Спасибо за отзыв!");
            }
            ResultAction::Dislike(id) => {
                view.feedback(id, false);
                println!("Спасибо, учтем в следующий раз.");
            }
            ResultAction::Share(id) => {
                if let Some(rec) = loaded.find(id) {
                    println!("{}", view.share(rec).text);
                }
            }
            ResultAction::Restart => return Ok(true),
            ResultAction::Done => return Ok(false),
        }
    }
}

/// Non-interactive recommendations from `--set` answers.
fn cmd_recommend(client: &ApiClient, sample: bool, answers: &[String]) -> Result<()> {
    let mut data = if sample {
        QuestionnaireData::sample()
    } else {
        QuestionnaireData::default()
    };

    for raw in answers {
        let (field, value) = parse_assignment(raw)?;
        data.set(field, value)?;
    }

    let mut view = RecommendationView::new();
    display_loading();
    let loaded = view.load(&data, client);
    display_recommendations(loaded);

    Ok(())
}

fn cmd_menu(client: &ApiClient, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::List { filter } => display_menu(&client.menu_items(&filter.into())?),
        MenuAction::Search { query, filter } => {
            display_menu(&client.search_menu(&query, &filter.into())?)
        }
        MenuAction::Categories => display_list("Категории", &client.categories()?),
        MenuAction::Restaurants => display_list("Рестораны", &client.restaurants()?),
        MenuAction::Dish { id } => display_dish(&client.dish(id)?),
    }
    Ok(())
}

fn cmd_orders(client: &ApiClient, action: OrderAction) -> Result<()> {
    match action {
        OrderAction::List { user_id } => display_orders(&client.user_orders(user_id)?),
        OrderAction::Create {
            user_id,
            table,
            amount,
            basket,
        } => {
            let order = OrderCreate {
                user_id,
                table_number: table,
                time: None,
                order_amount: amount,
                basket: serde_json::from_str(&basket)?,
            };
            let created = client.create_order(&order)?;
            println!("{} (сумма {} ₽)", created.message, created.amount);
        }
        OrderAction::Stats => display_order_stats(&client.order_stats()?),
    }
    Ok(())
}
