use crate::types::{ObjectId, ObjectType, PropertyName};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A database row as returned by a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObject {
    pub object: ObjectType,
    pub id: ObjectId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PageProperty>,
}

impl PageObject {
    pub fn property(&self, name: &str) -> Option<&PageProperty> {
        self.properties.get(&PropertyName::new(name))
    }
}

/// A row value. Kept as raw JSON under its discriminant: row values are
/// shaped differently from the column schema and only read by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperty {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: ObjectType,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PageProperty {
    /// The value stored under this property's discriminant.
    pub fn value(&self) -> Option<&Value> {
        self.payload.get(self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_property_value_lookup() {
        let page: PageObject = serde_json::from_value(json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T20:25:00.000Z",
            "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5",
            "properties": {
                "In stock": {"id": "%7BX", "type": "checkbox", "checkbox": true},
                "Price": {"id": "evWq", "type": "number", "number": 2.5}
            }
        }))
        .unwrap();

        assert!(!page.archived);
        assert_eq!(page.property("In stock").unwrap().value(), Some(&json!(true)));
        assert_eq!(page.property("Price").unwrap().kind, ObjectType::Number);
        assert_eq!(page.property("Price").unwrap().value(), Some(&json!(2.5)));
        assert!(page.property("Missing").is_none());
    }
}
