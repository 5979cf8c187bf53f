// src/api/parser.rs
//! Turns raw API responses into typed entities or typed errors.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;
use serde::Deserialize;

/// Error envelope returned by the Notion API.
#[derive(Debug, Clone, Deserialize)]
struct NotionApiErrorResponse {
    code: String,
    message: String,
}

/// Decode a response: the entity on success, a typed error otherwise.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::Decode {
            source: e,
            body: preview(body),
        }
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    match serde_json::from_str::<NotionApiErrorResponse>(body) {
        Ok(error) => AppError::NotionService {
            code: NotionErrorCode::from_api_response(&error.code),
            message: error.message,
            status,
        },
        Err(_) => {
            log::warn!("Unparseable error body from {} (status {})", url, status);
            AppError::NotionService {
                code: NotionErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}", status, url),
                status,
            }
        }
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
