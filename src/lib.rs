// src/lib.rs
//! notion-query — a typed client for Notion databases.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `MalformedPropertyError`, `ValidationError`
//! - **Configuration** — `ClientConfig`, `AbsentFilter`
//! - **Identifiers and enums** — `DatabaseId`, `ObjectId`, `PropertyName`, `Cursor`,
//!   `ObjectType`, `Color`, `FormatType`, `FunctionType`
//! - **Entity model** — `DatabaseObject`, `PageObject`, `PropertySchema`, `PropertyValue`
//! - **Query building** — `DatabaseQueryRequest`, `FilterObject`, `SortObject`
//! - **API client** — `Transport`, `NotionHttpClient`, `DatabaseClient`, pagination streams

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod query;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, MalformedPropertyError, NotionErrorCode, Operation};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{AbsentFilter, ClientConfig};

// --- Domain Types ---
pub use crate::types::{
    concat_plain_text, Annotations, ApiKey, BaseUrl, Color, Cursor, DatabaseId, FormatType,
    FunctionType, Link, ObjectId, ObjectType, PropertyName, RichTextObject, TextObject,
};

// --- Domain Model ---
pub use crate::model::{
    DatabaseObject, DatabaseRecord, FormulaObject, MultiSelectObject, NumberObject, PageObject, PageProperty,
    PropertySchema, PropertyValue, RelationObject, RollupObject, SelectObject, SelectOption,
    Toggle,
};

// --- Query Building ---
pub use crate::query::{
    DatabaseListResponse, DatabaseQueryRequest, DatabaseQueryRequestBuilder,
    DatabaseQueryResponse, FilterObject, PaginatedResponse, SortDirection, SortObject,
    TimestampKind,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse, collect_all, paginate, paginate_from, paginate_items, DatabaseClient,
    DatabaseService, NotionHttpClient, PaginationResult, Transport,
};
