//! Query construction and paginated response shapes.

mod filter;
mod request;
mod response;
mod sort;

pub use filter::FilterObject;
pub use request::{DatabaseQueryRequest, DatabaseQueryRequestBuilder};
pub use response::{DatabaseListResponse, DatabaseQueryResponse, PaginatedResponse};
pub use sort::{SortDirection, SortObject, TimestampKind};
