use std::rc::Rc;

use food2mood::api::{ApiClient, ClientContext, MemoryTokenStore, MockReply, MockTransport};
use food2mood::app::ViewRouter;
use food2mood::config::ClientConfig;
use food2mood::models::{Field, FieldValue};
use food2mood::questionnaire::{Questionnaire, Step, SubmitState, Transition};
use food2mood::recommend::{resolve, Origin, RecommendationView};

fn client_with(replies: Vec<MockReply>) -> ApiClient<MockTransport> {
    let context = ClientContext::new(
        ClientConfig::default(),
        Rc::new(MemoryTokenStore::new()),
        Rc::new(ViewRouter::new()),
    );
    ApiClient::new(MockTransport::with_replies(replies), context)
}

fn fill_and_reach_last_step(q: &mut Questionnaire) {
    q.set_field(Field::Mood, "Радость").unwrap();
    q.set_field(Field::Hungry, 7_i64).unwrap();
    assert_eq!(q.advance(), Transition::Moved(Step::Two));
    q.set_field(Field::FoodStyle, "Кето").unwrap();
    assert_eq!(q.advance(), Transition::Moved(Step::Three));
    q.set_field(Field::LikeToEat, "курица").unwrap();
    q.set_field(Field::DontLikeToEat, "грибы").unwrap();
    q.set_field(Field::Prefers, "Вок").unwrap();
}

#[test]
fn test_full_flow_sends_collected_answers() {
    let client = client_with(vec![MockReply::json(
        200,
        serde_json::json!([{"id": 1, "name": "Вок с курицей", "category": "Вок", "price": 450, "match_score": 91}]),
    )]);

    let mut q = Questionnaire::new();
    fill_and_reach_last_step(&mut q);
    assert_eq!(q.advance(), Transition::SubmitRequested);

    let outcome = q.submit(&client).unwrap();
    assert_eq!(client.transport().sent().len(), 1);

    let body = client.transport().last_sent().unwrap().body.unwrap();
    assert_eq!(body["mood"], "Радость");
    assert_eq!(body["style"], "Кето");
    assert_eq!(body["like_to_eat"], "курица");
    assert_eq!(body["category"], "Вок");

    let loaded = resolve(outcome.result);
    assert_eq!(loaded.origin, Origin::Live);
    assert_eq!(loaded.items[0].match_score, 91);
}

#[test]
fn test_network_failure_shows_examples() {
    let client = client_with(vec![MockReply::Fail("connection refused".to_string())]);

    let mut q = Questionnaire::new();
    fill_and_reach_last_step(&mut q);
    let outcome = q.submit(&client).unwrap();
    assert_eq!(q.state(), SubmitState::Idle);

    let mut view = RecommendationView::new();
    let loaded = view.show(resolve(outcome.result));
    assert!(loaded.is_fallback());

    let mut categories: Vec<&str> = loaded.items.iter().map(|r| r.category.as_str()).collect();
    categories.sort();
    assert_eq!(categories, vec!["Вок", "Вок", "Корейский стритфуд"]);
}

#[test]
fn test_view_loads_given_answers() {
    let client = client_with(vec![MockReply::json(500, serde_json::json!({"detail": "db down"}))]);

    let mut q = Questionnaire::new();
    fill_and_reach_last_step(&mut q);

    let mut view = RecommendationView::new();
    let loaded = view.load(q.data(), &client);
    assert_eq!(loaded.items.len(), 3);

    let body = client.transport().last_sent().unwrap().body.unwrap();
    assert_eq!(body["dont_like_to_eat"], "грибы");
}

#[test]
fn test_hunger_stays_in_range_for_any_slider_sequence() {
    let mut q = Questionnaire::new();
    let sequence: [i64; 8] = [5, 1, 10, 0, -3, 11, 250, 6];
    for level in sequence {
        q.set_field(Field::Hungry, FieldValue::Level(level)).unwrap();
        assert!((1..=10).contains(&q.data().hungry));
    }
    assert_eq!(q.data().hungry, 6);
}
