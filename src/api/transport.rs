use std::cell::RefCell;
use std::collections::VecDeque;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// POST without a JSON body; parameters travel in the query string.
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns one response.
///
/// Implementations report only transport-level failures as errors; any
/// HTTP status, including 4xx/5xx, comes back as an `ApiResponse`.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking `reqwest` transport bound to one base URL.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.config.url_for(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(ApiResponse { status, body })
    }
}

/// Canned reply for `MockTransport`.
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond { status: u16, body: String },
    Fail(String),
}

impl MockReply {
    pub fn json(status: u16, body: Value) -> Self {
        MockReply::Respond {
            status,
            body: body.to_string(),
        }
    }
}

/// In-memory transport that records requests and replays canned replies.
///
/// Once the queue is drained every request gets `200 []`.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<MockReply>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn push(&self, reply: MockReply) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Every request sent so far, oldest first.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn last_sent(&self) -> Option<ApiRequest> {
        self.sent.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.sent.borrow_mut().push(request.clone());

        match self.replies.borrow_mut().pop_front() {
            Some(MockReply::Respond { status, body }) => Ok(ApiResponse { status, body }),
            Some(MockReply::Fail(reason)) => Err(AppError::Transport(reason)),
            None => Ok(ApiResponse {
                status: 200,
                body: "[]".to_string(),
            }),
        }
    }
}
