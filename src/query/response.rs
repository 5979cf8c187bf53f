use crate::model::{DatabaseObject, PageObject};
use crate::types::{Cursor, ObjectType};
use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// `next_cursor` is only meaningful while `has_more` is true; use
/// [`PaginatedResponse::continuation`] rather than reading it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
    #[serde(default)]
    pub has_more: bool,
}

/// Result of `POST databases/{id}/query`.
pub type DatabaseQueryResponse = PaginatedResponse<PageObject>;

/// Result of `GET databases`.
pub type DatabaseListResponse = PaginatedResponse<DatabaseObject>;

impl<T> PaginatedResponse<T> {
    /// The cursor for the next page, or `None` when this page is the last.
    pub fn continuation(&self) -> Option<&Cursor> {
        if !self.has_more {
            return None;
        }
        self.next_cursor.as_ref().filter(|cursor| !cursor.is_empty())
    }

    pub fn is_last(&self) -> bool {
        self.continuation().is_none()
    }

    /// Converts every result, keeping the paging fields. Stops at the first error.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<PaginatedResponse<U>, E> {
        Ok(PaginatedResponse {
            object: self.object,
            results: self.results.into_iter().map(f).collect::<Result<_, _>>()?,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}
