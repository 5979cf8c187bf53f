// src/api/client.rs
//! Pure HTTP transport for the Notion API.
//!
//! A thin wrapper around reqwest: authentication, versioning and the base
//! URL are applied here, with no parsing or business logic.

use crate::config::ClientConfig;
use crate::error::AppError;
use crate::types::{ApiKey, BaseUrl};
use reqwest::{header, Client, Method, Response};
use serde_json::Value;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: BaseUrl,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(
                &config.api_key,
                &config.notion_version,
            )?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey, version: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion-Version '{}': {}", version, e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl super::Transport for NotionHttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>, AppError> {
        let url = self.base_url.endpoint(path);
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            log::debug!("   body: {}", body);
            request = request.json(body);
        }

        let response = request.send().await?;
        log::debug!("{} {} -> {}", method, url, response.status());

        extract_response_text(response).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
