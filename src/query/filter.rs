use super::TimestampKind;
use crate::types::PropertyName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A filter expression for a database query.
///
/// Conditions are passed through as written; the service decides whether
/// they make sense for the property they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterObject {
    And {
        and: Vec<FilterObject>,
    },
    Or {
        or: Vec<FilterObject>,
    },
    Property {
        property: PropertyName,
        #[serde(flatten)]
        condition: Map<String, Value>,
    },
    Timestamp {
        timestamp: TimestampKind,
        #[serde(flatten)]
        condition: Map<String, Value>,
    },
    /// Any other filter object, sent as written.
    Raw(Map<String, Value>),
}

impl FilterObject {
    /// `{"property": name, "<kind>": condition}`, e.g.
    /// `FilterObject::property("Done", "checkbox", json!({"equals": true}))`.
    pub fn property(name: &str, kind: &str, condition: Value) -> Self {
        let mut map = Map::new();
        map.insert(kind.to_string(), condition);
        FilterObject::Property {
            property: PropertyName::new(name),
            condition: map,
        }
    }

    /// `{"timestamp": kind, "<kind>": condition}`, e.g. pages created in the past week.
    pub fn timestamp(kind: TimestampKind, condition: Value) -> Self {
        let mut map = Map::new();
        map.insert(kind.as_str().to_string(), condition);
        FilterObject::Timestamp {
            timestamp: kind,
            condition: map,
        }
    }

    pub fn and(filters: Vec<FilterObject>) -> Self {
        FilterObject::And { and: filters }
    }

    pub fn or(filters: Vec<FilterObject>) -> Self {
        FilterObject::Or { or: filters }
    }
}
