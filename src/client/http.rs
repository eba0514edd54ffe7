//! User API client implementation.

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error returned when a request fails or a response body cannot be read.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body not received.
    Transport(reqwest::Error),
    /// The response body was not the expected JSON shape.
    InvalidBody(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::InvalidBody(e) => write!(f, "unexpected response body: {e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::InvalidBody(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

/// A raw response plus how long the round trip took.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
    pub latency: Duration,
}

impl ApiResponse {
    /// Parse the body as the user data shape the API returns on success.
    pub fn user_data(&self) -> Result<UserData, ClientError> {
        serde_json::from_str(&self.body).map_err(ClientError::InvalidBody)
    }
}

/// User record returned by a successful get.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub auth_token: String,
    pub user_hash: String,
    pub user_name: String,
    pub user_rsl: bool,
    pub user_analytics: bool,
}

/// Client for the user API.
///
/// Holds a connection-pooling [`reqwest::Client`]; construct once and
/// reuse. Requests are never retried, and failures surface immediately.
///
/// # Example
///
/// ```rust,ignore
/// use tokenforge::{current_timestamp, derive_auth_token, UserApiClient};
///
/// let client = UserApiClient::new("http://127.0.0.1:8000".to_string());
/// let auth = derive_auth_token(user_hash, current_timestamp(), secret)?;
/// let response = client.get_user(user_hash, &auth).await?;
/// println!("{} in {:?}: {}", response.status, response.latency, response.body);
/// ```
#[derive(Clone)]
pub struct UserApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl UserApiClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn finish(
        &self,
        started: Instant,
        response: reqwest::Response,
    ) -> Result<ApiResponse, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        let latency = started.elapsed();
        tracing::debug!(%status, ?latency, "user api response");
        Ok(ApiResponse {
            status,
            body,
            latency,
        })
    }

    /// `GET /user/get/{user_hash}/{auth_token}` - path-embedded convention.
    pub async fn get_user(
        &self,
        user_hash: &str,
        auth_token: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(&format!("/user/get/{user_hash}/{auth_token}"));
        let started = Instant::now();
        let response = self.http.get(url).send().await?;
        self.finish(started, response).await
    }

    /// `POST /user/update/{credential}` - path-embedded convention.
    ///
    /// `credential` is a transport credential bundling the user hash and
    /// both tokens; the new name travels in the JSON body.
    pub async fn update_user(
        &self,
        credential: &str,
        user_name: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(&format!("/user/update/{credential}"));
        let started = Instant::now();
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "user_name": user_name }))
            .send()
            .await?;
        self.finish(started, response).await
    }

    /// `GET /user/{user_hash}` - header-based convention.
    ///
    /// The auth token travels in the `Access-Token` header.
    pub async fn get_user_with_header(
        &self,
        user_hash: &str,
        auth_token: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(&format!("/user/{user_hash}"));
        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .header("Access-Token", auth_token)
            .send()
            .await?;
        self.finish(started, response).await
    }

    /// `POST /user/{user_hash}` - header-based convention.
    ///
    /// The bearer token travels as `Authorization: Bearer {token}`; the new
    /// name travels in the JSON body.
    pub async fn update_user_with_bearer(
        &self,
        user_hash: &str,
        bearer_token: &str,
        user_name: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(&format!("/user/{user_hash}"));
        let started = Instant::now();
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {bearer_token}"))
            .json(&serde_json::json!({ "user_name": user_name }))
            .send()
            .await?;
        self.finish(started, response).await
    }
}
