use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1/orders/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    pub order_amount: i64,

    /// Dish id to quantity, passed through as JSON.
    pub basket: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    pub user_id: i64,

    #[serde(default)]
    pub table_number: Option<i64>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub order_amount: i64,

    #[serde(default)]
    pub basket: Value,
}

/// Reply to a successful order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    #[serde(default)]
    pub message: String,
    pub user_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub average_order_value: f64,
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
