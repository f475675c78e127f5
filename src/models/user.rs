use serde::{Deserialize, Serialize};

/// A registered Food2Mood user as the service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_first_name: Option<String>,

    #[serde(default)]
    pub user_last_name: Option<String>,

    #[serde(default)]
    pub user_link: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub user_reg_time: String,

    #[serde(default)]
    pub ban: bool,

    #[serde(rename = "foodToMoodCoin", default)]
    pub coins: i64,
}

impl User {
    /// Best human-readable name available.
    pub fn display_name(&self) -> String {
        match (&self.user_first_name, &self.user_last_name, &self.user_name) {
            (Some(first), Some(last), _) => format!("{} {}", first, last),
            (Some(first), None, _) => first.clone(),
            (None, _, Some(name)) => name.clone(),
            _ => format!("user #{}", self.user_id),
        }
    }
}

/// Registration parameters. The service takes them as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_last_name: Option<String>,
}

impl RegisterRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("phone".to_string(), self.phone.clone())];
        if let Some(id) = self.user_id {
            pairs.push(("user_id".to_string(), id.to_string()));
        }
        let optional = [
            ("user_name", &self.user_name),
            ("user_first_name", &self.user_first_name),
            ("user_last_name", &self.user_last_name),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                pairs.push((key.to_string(), v.clone()));
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user_id: i64,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user_id: i64,
}

/// Login reply. The token may come back under either name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "token")]
    pub access_token: Option<String>,

    #[serde(default)]
    pub user_id: Option<i64>,
}
