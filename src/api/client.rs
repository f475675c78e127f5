use serde::de::DeserializeOwned;

use crate::api::session::ClientContext;
use crate::api::transport::{ApiRequest, HttpTransport, Transport};
use crate::error::{AppError, Result};
use crate::models::{
    HealthStatus, LoginRequest, LoginResponse, MenuFilter, MenuItem, Order, OrderCreate,
    OrderCreated, OrderStats, QuestionnaireData, Recommendation, RecommendationRequest,
    RegisterRequest, RegisterResponse, User,
};

/// Path the user is sent to when the service rejects their session.
pub const HOME_PATH: &str = "/";

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResult {
    Ok(Vec<Recommendation>),
    Failed(String),
}

impl RecommendationResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, RecommendationResult::Failed(_))
    }

    /// Collapse a failure into an empty list.
    pub fn into_items_or_empty(self) -> Vec<Recommendation> {
        match self {
            RecommendationResult::Ok(items) => items,
            RecommendationResult::Failed(_) => Vec::new(),
        }
    }
}

/// Typed client for the Food2Mood service.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    context: ClientContext,
}

impl ApiClient<HttpTransport> {
    /// Client over the real network using the context's config.
    pub fn connect(context: ClientContext) -> Result<Self> {
        let transport = HttpTransport::new(context.config.clone())?;
        Ok(Self::new(transport, context))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, context: ClientContext) -> Self {
        Self { transport, context }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request with auth attached and return the raw success body.
    ///
    /// A 401 clears the stored token and navigates home before the error is
    /// returned, whichever call triggered it.
    fn execute(&self, mut request: ApiRequest) -> Result<String> {
        if let Some(token) = self.context.tokens.load() {
            request = request.with_header("Authorization", format!("Bearer {}", token));
        }

        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            authorized = request.header("Authorization").is_some(),
            "Sending request"
        );

        let response = self.transport.send(&request)?;

        if response.status == 401 {
            self.handle_unauthorized();
            return Err(AppError::Unauthorized);
        }

        if !response.is_success() {
            tracing::debug!(status = response.status, path = %request.path, "Request rejected");
            return Err(AppError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    fn execute_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let body = self.execute(request)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn handle_unauthorized(&self) {
        tracing::warn!("Session rejected by the service, signing out");
        if let Err(e) = self.context.tokens.clear() {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
        self.context.navigator.navigate(HOME_PATH);
    }

    // Users

    pub fn register_user(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let req = ApiRequest::post_empty("/api/v1/users/register").with_query(request.query_pairs());
        self.execute_json(req)
    }

    /// Log in by user id. A token in the reply is kept in the token store.
    pub fn login(&self, user_id: i64) -> Result<LoginResponse> {
        let body = serde_json::to_value(LoginRequest { user_id })?;
        let reply: LoginResponse = self.execute_json(ApiRequest::post("/api/v1/users/login", body))?;

        if let Some(token) = &reply.access_token {
            self.context.tokens.store(token)?;
            tracing::info!(user_id, "Logged in");
        } else {
            tracing::warn!(user_id, "Login reply carried no token");
        }

        Ok(reply)
    }

    pub fn logout(&self) -> Result<()> {
        self.context.tokens.clear()
    }

    pub fn current_user(&self) -> Result<User> {
        self.execute_json(ApiRequest::get("/api/v1/users/me"))
    }

    // Menu

    pub fn menu_items(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>> {
        self.execute_json(ApiRequest::get("/api/v1/menu/").with_query(filter.query_pairs()))
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        self.execute_json(ApiRequest::get("/api/v1/menu/categories"))
    }

    pub fn restaurants(&self) -> Result<Vec<String>> {
        self.execute_json(ApiRequest::get("/api/v1/menu/restaurants"))
    }

    pub fn search_menu(&self, query: &str, filter: &MenuFilter) -> Result<Vec<MenuItem>> {
        let mut pairs = vec![("query".to_string(), query.to_string())];
        pairs.extend(filter.query_pairs());
        self.execute_json(ApiRequest::get("/api/v1/menu/search").with_query(pairs))
    }

    pub fn dish(&self, dish_id: i64) -> Result<MenuItem> {
        self.execute_json(ApiRequest::get(format!("/api/v1/menu/{}", dish_id)))
    }

    // Recommendations

    /// Ask for recommendations matching the questionnaire answers.
    ///
    /// Never returns an error: every failure becomes
    /// `RecommendationResult::Failed` so the caller picks the policy.
    pub fn recommendations(&self, data: &QuestionnaireData) -> RecommendationResult {
        let request = RecommendationRequest::from(data);
        let outcome = serde_json::to_value(&request).map_err(AppError::from).and_then(|body| {
            self.execute_json::<Vec<Recommendation>>(ApiRequest::post("/api/v1/recommendations", body))
        });

        match outcome {
            Ok(items) => {
                tracing::info!(count = items.len(), mood = %data.mood, "Received recommendations");
                RecommendationResult::Ok(items)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                RecommendationResult::Failed(e.to_string())
            }
        }
    }

    // Orders

    pub fn create_order(&self, order: &OrderCreate) -> Result<OrderCreated> {
        let body = serde_json::to_value(order)?;
        self.execute_json(ApiRequest::post("/api/v1/orders/", body))
    }

    pub fn user_orders(&self, user_id: Option<i64>) -> Result<Vec<Order>> {
        let pairs = user_id
            .map(|id| vec![("user_id".to_string(), id.to_string())])
            .unwrap_or_default();
        self.execute_json(ApiRequest::get("/api/v1/orders/").with_query(pairs))
    }

    pub fn order_stats(&self) -> Result<OrderStats> {
        self.execute_json(ApiRequest::get("/api/v1/orders/stats/overview"))
    }

    pub fn health(&self) -> Result<HealthStatus> {
        self.execute_json(ApiRequest::get("/health"))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::api::session::{MemoryTokenStore, RecordingNavigator, TokenStore};
    use crate::api::transport::{Method, MockReply, MockTransport};
    use crate::config::ClientConfig;

    fn client_with(
        replies: Vec<MockReply>,
        token: Option<&str>,
    ) -> (ApiClient<MockTransport>, Rc<MemoryTokenStore>, Rc<RecordingNavigator>) {
        let tokens = Rc::new(match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        });
        let navigator = Rc::new(RecordingNavigator::new());
        let context = ClientContext::new(ClientConfig::default(), tokens.clone(), navigator.clone());
        (ApiClient::new(MockTransport::with_replies(replies), context), tokens, navigator)
    }

    #[test]
    fn test_bearer_header_attached_when_token_present() {
        let (client, _, _) = client_with(vec![], Some("T"));
        client.categories().unwrap();
        client.menu_items(&MenuFilter::default()).unwrap();

        for req in client.transport().sent() {
            assert_eq!(req.header("Authorization"), Some("Bearer T"));
        }
    }

    #[test]
    fn test_no_auth_header_without_token() {
        let (client, _, _) = client_with(vec![], None);
        client.restaurants().unwrap();
        assert!(client.transport().last_sent().unwrap().header("Authorization").is_none());
    }

    #[test]
    fn test_unauthorized_clears_token_and_navigates_home_once() {
        let (client, tokens, navigator) = client_with(
            vec![MockReply::json(401, serde_json::json!({"detail": "expired"}))],
            Some("T"),
        );

        let err = client.current_user().unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
        assert!(tokens.load().is_none());
        assert_eq!(navigator.visits(), vec!["/"]);

        // Next call goes out without a token and does not navigate again.
        client.categories().unwrap();
        assert!(client.transport().last_sent().unwrap().header("Authorization").is_none());
        assert_eq!(navigator.visits().len(), 1);
    }

    #[test]
    fn test_non_2xx_is_status_error_without_logout() {
        let (client, tokens, navigator) =
            client_with(vec![MockReply::json(404, serde_json::json!({"detail": "Блюдо не найдено"}))], Some("T"));

        match client.dish(99) {
            Err(AppError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {:?}", other),
        }
        assert_eq!(tokens.load().as_deref(), Some("T"));
        assert!(navigator.visits().is_empty());
    }

    #[test]
    fn test_recommendation_body_shape() {
        let (client, _, _) = client_with(vec![], None);
        let data = QuestionnaireData {
            mood: "Радость".to_string(),
            food_style: "Обычный".to_string(),
            like_to_eat: "мясо, рыба".to_string(),
            dont_like_to_eat: "грибы".to_string(),
            prefers: "Вок".to_string(),
            ..Default::default()
        };

        assert_eq!(client.recommendations(&data), RecommendationResult::Ok(vec![]));

        let sent = client.transport().last_sent().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/api/v1/recommendations");
        let body = sent.body.unwrap();
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["mood"], "Радость");
        assert_eq!(body["style"], "Обычный");
        assert_eq!(body["like_to_eat"], "мясо, рыба");
        assert_eq!(body["dont_like_to_eat"], "грибы");
        assert_eq!(body["category"], "Вок");
    }

    #[test]
    fn test_recommendation_failures_are_reported_not_raised() {
        let (client, _, _) = client_with(
            vec![
                MockReply::Fail("timed out".to_string()),
                MockReply::json(500, serde_json::json!({"detail": "boom"})),
                MockReply::Respond {
                    status: 200,
                    body: "<html>".to_string(),
                },
            ],
            None,
        );
        let data = QuestionnaireData::default();

        for _ in 0..3 {
            let result = client.recommendations(&data);
            assert!(result.is_failed());
            assert!(result.into_items_or_empty().is_empty());
        }
        assert_eq!(client.transport().sent().len(), 3);
    }

    #[test]
    fn test_login_stores_token() {
        let (client, tokens, _) = client_with(
            vec![MockReply::json(200, serde_json::json!({"access_token": "jwt", "user_id": 7}))],
            None,
        );
        let reply = client.login(7).unwrap();
        assert_eq!(reply.user_id, Some(7));
        assert_eq!(tokens.load().as_deref(), Some("jwt"));
        assert_eq!(client.transport().last_sent().unwrap().body.unwrap()["user_id"], 7);

        client.logout().unwrap();
        assert!(tokens.load().is_none());
    }

    #[test]
    fn test_search_and_orders_query_params() {
        let (client, _, _) = client_with(vec![], None);
        let filter = MenuFilter {
            min_price: Some(200),
            ..Default::default()
        };
        client.search_menu("курица", &filter).unwrap();
        let sent = client.transport().last_sent().unwrap();
        assert_eq!(sent.path, "/api/v1/menu/search");
        assert_eq!(
            sent.query,
            vec![
                ("query".to_string(), "курица".to_string()),
                ("min_price".to_string(), "200".to_string()),
            ]
        );

        client.user_orders(Some(12)).unwrap();
        let sent = client.transport().last_sent().unwrap();
        assert_eq!(sent.path, "/api/v1/orders/");
        assert_eq!(sent.query, vec![("user_id".to_string(), "12".to_string())]);
    }

    #[test]
    fn test_register_sends_query_params() {
        let (client, _, _) = client_with(
            vec![MockReply::json(200, serde_json::json!({"message": "ok", "user_id": 55, "phone": "+7"}))],
            None,
        );
        let reply = client
            .register_user(&RegisterRequest {
                phone: "+7".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(reply.user_id, 55);
        let sent = client.transport().last_sent().unwrap();
        assert_eq!(sent.path, "/api/v1/users/register");
        assert_eq!(sent.query[0], ("phone".to_string(), "+7".to_string()));
    }
}
