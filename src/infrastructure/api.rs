//! HTTP access to the fleet backend
//!
//! [`DriverSource`] is the seam the command executor talks to; [`ApiClient`]
//! is the reqwest implementation. Tests substitute their own sources.

use std::{fmt, time::Duration};

use color_eyre::eyre::Result;
use futures::future::BoxFuture;
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::domain::{
    driver::{Driver, DriversResponse},
    profile::ProfileDraft,
};
use crate::infrastructure::config::{ApiConfig, ApiToken};

/// Failure of an API call, kept distinguishable so callers can react to
/// an expired session.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Status { status: u16, body: String },
    Transport(reqwest::Error),
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => f.write_str("401 Unauthorized"),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with status {status}")
            }
            ApiError::Status { status, body } => {
                write!(f, "server responded with status {status}: {body}")
            }
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
            ApiError::Decode(e) => write!(f, "unexpected response body: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Remote store of driver profiles
pub trait DriverSource: Send + Sync {
    fn fetch_drivers(&self) -> BoxFuture<'_, Result<Vec<Driver>>>;

    fn create_driver(&self, draft: ProfileDraft) -> BoxFuture<'_, Result<()>>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    drivers_path: String,
    create_path: String,
    token: Option<ApiToken>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            drivers_path: config.drivers_path.clone(),
            create_path: config.create_path.clone(),
            token: config.token.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        }
    }

    async fn get_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        let url = self.url(&self.drivers_path);
        log::debug!("GET {url}");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(ApiError::Transport)?;

        serde_json::from_str::<DriversResponse>(&body)
            .map(DriversResponse::into_drivers)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_draft(&self, draft: &ProfileDraft) -> Result<(), ApiError> {
        let url = self.url(&self.create_path);
        log::debug!("POST {url}");

        let response = self
            .authorize(self.http.post(&url).json(draft))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

impl DriverSource for ApiClient {
    fn fetch_drivers(&self) -> BoxFuture<'_, Result<Vec<Driver>>> {
        Box::pin(async move { Ok(self.get_drivers().await?) })
    }

    fn create_driver(&self, draft: ProfileDraft) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { Ok(self.post_draft(&draft).await?) })
    }
}
