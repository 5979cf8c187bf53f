// src/api/database.rs
//! The database service: get, list and query, over any [`Transport`].

use super::pagination::{collect_all, paginate_from, PaginationResult};
use super::parser::parse_api_response;
use super::Transport;
use crate::config::AbsentFilter;
use crate::error::{AppError, Operation};
use crate::model::{DatabaseObject, DatabaseRecord, PageObject};
use crate::query::{
    DatabaseListResponse, DatabaseQueryRequest, DatabaseQueryResponse, PaginatedResponse,
};
use crate::types::{Cursor, DatabaseId};
use futures::Stream;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The ability to read databases from a Notion workspace.
#[async_trait::async_trait]
pub trait DatabaseService: Send + Sync {
    /// `GET databases/{id}`
    async fn get(&self, id: &DatabaseId) -> Result<DatabaseObject, AppError>;

    /// `GET databases`, one page. A `page_size` of zero uses the service default.
    async fn list(
        &self,
        start_cursor: Option<&Cursor>,
        page_size: u32,
    ) -> Result<DatabaseListResponse, AppError>;

    /// `POST databases/{id}/query`, one page.
    async fn query(
        &self,
        id: &DatabaseId,
        request: &DatabaseQueryRequest,
    ) -> Result<DatabaseQueryResponse, AppError>;
}

/// Database client over a transport.
///
/// Holds no mutable state: clones and concurrent calls are fine as long as
/// the transport allows them.
#[derive(Debug, Clone)]
pub struct DatabaseClient<T> {
    transport: T,
    absent_filter: AbsentFilter,
}

impl<T: Transport> DatabaseClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            absent_filter: AbsentFilter::default(),
        }
    }

    /// Sets how a query without a filter is encoded.
    pub fn with_absent_filter(mut self, absent_filter: AbsentFilter) -> Self {
        self.absent_filter = absent_filter;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<R, AppError> {
        let response = self.transport.request(method, path, query, body).await?;
        parse_api_response(response)
    }

    fn query_body(&self, request: &DatabaseQueryRequest) -> Result<Value, AppError> {
        let mut body = serde_json::to_value(request)?;
        if request.filter.is_none() && self.absent_filter == AbsentFilter::Null {
            if let Value::Object(fields) = &mut body {
                fields.insert("filter".to_string(), Value::Null);
            }
        }
        Ok(body)
    }

    /// Every page of a query, fetched one round trip at a time as the
    /// stream is polled. Starts at `request.start_cursor`.
    pub fn query_pages<'a>(
        &'a self,
        id: &'a DatabaseId,
        request: &'a DatabaseQueryRequest,
    ) -> impl Stream<Item = Result<DatabaseQueryResponse, AppError>> + 'a {
        paginate_from(request.start_cursor.clone(), move |cursor| {
            let page_request = request.continued_from(cursor);
            async move { self.query(id, &page_request).await }
        })
    }

    /// Runs a query to completion, or until `max_pages` pages were read.
    pub async fn query_all(
        &self,
        id: &DatabaseId,
        request: &DatabaseQueryRequest,
        max_pages: Option<u32>,
    ) -> Result<PaginationResult<PageObject>, AppError> {
        collect_all(self.query_pages(id, request), max_pages).await
    }

    /// Every page of the database listing, starting at `start_cursor`.
    pub fn list_pages(
        &self,
        start_cursor: Option<Cursor>,
        page_size: u32,
    ) -> impl Stream<Item = Result<DatabaseListResponse, AppError>> + '_ {
        paginate_from(start_cursor, move |cursor| async move {
            self.list(cursor.as_ref(), page_size).await
        })
    }
}

#[async_trait::async_trait]
impl<T: Transport> DatabaseService for DatabaseClient<T> {
    async fn get(&self, id: &DatabaseId) -> Result<DatabaseObject, AppError> {
        let path = format!("databases/{}", id);
        self.fetch::<DatabaseRecord>(Method::GET, &path, &[], None)
            .await
            .and_then(|record| Ok(record.into_database()?))
            .map_err(|e| e.during(Operation::GetDatabase, id.as_str()))
    }

    async fn list(
        &self,
        start_cursor: Option<&Cursor>,
        page_size: u32,
    ) -> Result<DatabaseListResponse, AppError> {
        let mut params = Vec::new();
        let start_cursor = start_cursor.filter(|cursor| !cursor.is_empty());
        if let Some(cursor) = start_cursor {
            params.push(("start_cursor", cursor.to_string()));
        }
        if page_size > 0 {
            params.push(("page_size", page_size.to_string()));
        }

        self.fetch::<PaginatedResponse<DatabaseRecord>>(Method::GET, "databases", &params, None)
            .await
            .and_then(|page| Ok(page.try_map(DatabaseRecord::into_database)?))
            .map_err(|e| {
                let target = match start_cursor {
                    Some(cursor) => format!("from cursor {}", cursor),
                    None => "from the start".to_string(),
                };
                e.during(Operation::ListDatabases, target)
            })
    }

    async fn query(
        &self,
        id: &DatabaseId,
        request: &DatabaseQueryRequest,
    ) -> Result<DatabaseQueryResponse, AppError> {
        let path = format!("databases/{}/query", id);
        let result = match self.query_body(request) {
            Ok(body) => self.fetch(Method::POST, &path, &[], Some(body)).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| e.during(Operation::QueryDatabase, id.as_str()))
    }
}
