//! # Activity backend access
//!
//! [`ActivityBackend`] is the seam between the board UI and whatever serves the
//! activity collection. [`HttpBackend`] talks to the real REST endpoints with
//! `reqwest` (native, or the browser's fetch API on wasm32);
//! [`MemoryBackend`](crate::MemoryBackend) keeps everything in memory for tests.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`fetch_activities`](ActivityBackend::fetch_activities) | `GET /activities` |
//! | [`signup`](ActivityBackend::signup) | `POST /activities/{activity}/signup?email={email}` |
//! | [`unregister`](ActivityBackend::unregister) | `DELETE /activities/{activity}/participants?email={email}` |
//!
//! The 2xx-ness of the status is the only success discriminator. Reply bodies are
//! decoded before the status is inspected, so a body that is not JSON fails with
//! [`ApiError::Decode`] whatever the status was.

use std::future::Future;

use reqwest::{Client, Method, Response};

use crate::error::ApiError;
use crate::models::{Activities, ServerReply, SignupRequest};
use crate::settings::Settings;

pub trait ActivityBackend {
    /// Fetch the full activity collection.
    fn fetch_activities(&self) -> impl Future<Output = Result<Activities, ApiError>>;

    /// Sign `request.email` up for `request.activity`. Returns the server's message.
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = Result<String, ApiError>>;

    /// Remove `request.email` from `request.activity`. Returns the server's message.
    fn unregister(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<String, ApiError>>;
}

/// [`ActivityBackend`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base: String,
}

impl HttpBackend {
    /// Create a backend rooted at `base` (e.g. `"http://localhost:8000"`).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_base.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, request: &SignupRequest) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            urlencoding::encode(&request.activity),
            urlencoding::encode(&request.email)
        )
    }

    pub fn unregister_url(&self, request: &SignupRequest) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base,
            urlencoding::encode(&request.activity),
            urlencoding::encode(&request.email)
        )
    }

    async fn send_command(&self, method: Method, url: String) -> Result<String, ApiError> {
        tracing::debug!("{} {}", method, url);
        let response = self.client.request(method, &url).send().await?;
        let status = response.status();
        let reply: ServerReply = decode(response).await?;

        if status.is_success() {
            Ok(reply.message.unwrap_or_default())
        } else {
            tracing::warn!("{} answered {}: {:?}", url, status, reply.detail);
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: reply.detail,
            })
        }
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

impl ActivityBackend for HttpBackend {
    async fn fetch_activities(&self) -> Result<Activities, ApiError> {
        let url = self.activities_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let reply: ServerReply = decode(response).await.unwrap_or_default();
            tracing::warn!("{} answered {}", url, status);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: reply.detail,
            });
        }
        decode(response).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.send_command(Method::POST, self.signup_url(request))
            .await
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.send_command(Method::DELETE, self.unregister_url(request))
            .await
    }
}
