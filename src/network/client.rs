//! HTTP client for making requests to the search provider

use super::user_agent::{accept_html, generate_user_agent};
use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse, RequestBody};
use anyhow::{Context, Result};
use reqwest::{redirect, Client, Response};
use std::time::Duration;

/// HTTP client wrapper with provider-facing defaults
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .with_context(|| format!("invalid request timeout {}", settings.request_timeout))?;

        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .gzip(true)
            .brotli(true)
            .build()?;

        let user_agent = if settings.random_user_agent {
            generate_user_agent()
        } else {
            settings.user_agent.clone()
        };

        Ok(Self { client, user_agent })
    }

    /// Execute an engine request.
    ///
    /// Only transport failures are errors here; the caller decides what a
    /// non-success status means.
    pub async fn execute(&self, request: EngineRequest) -> Result<EngineResponse> {
        let mut req_builder = self
            .client
            .post(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html());

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(RequestBody::Form(data)) = request.data {
            req_builder = req_builder.form(&data);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(EngineResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
