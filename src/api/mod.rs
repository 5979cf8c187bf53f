// src/api/mod.rs
//! Notion API interaction.
//!
//! The database service only ever talks to a [`Transport`]: one method that
//! performs a single request/response exchange. HTTP details, auth headers
//! and the API version live behind it.

pub mod client;
pub mod database;
pub mod pagination;
pub mod parser;

use crate::error::AppError;
use client::ApiResponse;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// The ability to perform one exchange with the Notion API.
///
/// Implementations must be safe to share between tasks; the database client
/// adds no locking of its own. Dropping the returned future abandons the
/// request.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>, AppError>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>, AppError> {
        (**self).request(method, path, query, body).await
    }
}

pub use client::NotionHttpClient;
pub use database::{DatabaseClient, DatabaseService};
pub use pagination::{collect_all, paginate, paginate_from, paginate_items, PaginationResult};
