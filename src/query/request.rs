use super::{FilterObject, SortObject};
use crate::types::Cursor;
use serde::{Deserialize, Serialize};

/// A query against one database.
///
/// An absent filter matches every row. Sort clauses apply in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatabaseQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterObject>,
    #[serde(default)]
    pub sorts: Vec<SortObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl DatabaseQueryRequest {
    pub fn builder() -> DatabaseQueryRequestBuilder {
        DatabaseQueryRequestBuilder::default()
    }

    /// The same query, continued from `cursor`.
    pub fn continued_from(&self, cursor: Option<Cursor>) -> Self {
        Self {
            start_cursor: cursor.filter(|c| !c.is_empty()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatabaseQueryRequestBuilder {
    request: DatabaseQueryRequest,
}

impl DatabaseQueryRequestBuilder {
    pub fn filter(mut self, filter: FilterObject) -> Self {
        self.request.filter = Some(filter);
        self
    }

    /// Appends a sort clause after any already added.
    pub fn sort(mut self, sort: SortObject) -> Self {
        self.request.sorts.push(sort);
        self
    }

    pub fn sorts(mut self, sorts: impl IntoIterator<Item = SortObject>) -> Self {
        self.request.sorts.extend(sorts);
        self
    }

    /// An empty cursor means "start from the beginning".
    pub fn start_cursor(mut self, cursor: Cursor) -> Self {
        self.request.start_cursor = Some(cursor).filter(|c| !c.is_empty());
        self
    }

    /// Zero leaves the page size to the service default.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.request.page_size = (page_size > 0).then_some(page_size);
        self
    }

    pub fn build(self) -> DatabaseQueryRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_minimal_request_wire_shape() {
        let request = DatabaseQueryRequest::builder()
            .start_cursor(Cursor::new(""))
            .page_size(2)
            .build();

        assert_eq!(request.start_cursor, None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"sorts": [], "page_size": 2})
        );
    }

    #[test]
    fn test_zero_page_size_uses_service_default() {
        let request = DatabaseQueryRequest::builder().page_size(0).build();
        assert_eq!(request.page_size, None);
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"sorts": []}));
    }

    #[test]
    fn test_full_request_keeps_sort_order() {
        let request = DatabaseQueryRequest::builder()
            .filter(FilterObject::property("Done", "checkbox", json!({"equals": false})))
            .sort(SortObject::descending("Priority"))
            .sorts([SortObject::ascending("Name")])
            .start_cursor(Cursor::new("c1"))
            .page_size(50)
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filter": {"property": "Done", "checkbox": {"equals": false}},
                "sorts": [
                    {"property": "Priority", "direction": "descending"},
                    {"property": "Name", "direction": "ascending"}
                ],
                "start_cursor": "c1",
                "page_size": 50
            })
        );
    }

    #[test]
    fn test_continued_from_only_moves_the_cursor() {
        let first = DatabaseQueryRequest::builder()
            .sort(SortObject::ascending("Name"))
            .page_size(10)
            .build();

        let next = first.continued_from(Some(Cursor::new("abc")));
        assert_eq!(next.start_cursor, Some(Cursor::new("abc")));
        assert_eq!(next.sorts, first.sorts);
        assert_eq!(next.page_size, Some(10));

        assert_eq!(first.continued_from(Some(Cursor::new(""))).start_cursor, None);
    }
}
