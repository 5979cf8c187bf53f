use crate::types::{PropertyName, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Page timestamps that can be sorted on without naming a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    CreatedTime,
    LastEditedTime,
}

impl TimestampKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampKind::CreatedTime => "created_time",
            TimestampKind::LastEditedTime => "last_edited_time",
        }
    }
}

/// One sort clause. Clauses apply in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortObject {
    Property {
        property: PropertyName,
        direction: SortDirection,
    },
    Timestamp {
        timestamp: TimestampKind,
        direction: SortDirection,
    },
}

impl SortObject {
    pub fn ascending(property: &str) -> Self {
        SortObject::Property {
            property: PropertyName::new(property),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(property: &str) -> Self {
        SortObject::Property {
            property: PropertyName::new(property),
            direction: SortDirection::Descending,
        }
    }

    pub fn by_timestamp(timestamp: TimestampKind, direction: SortDirection) -> Self {
        SortObject::Timestamp {
            timestamp,
            direction,
        }
    }
}

/// Parses `Name`, `Name:asc` or `Name:desc` as given on the command line.
/// Any other colon is part of the property name.
impl FromStr for SortObject {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, direction) = if let Some(name) = input.strip_suffix(":desc") {
            (name, SortDirection::Descending)
        } else if let Some(name) = input.strip_suffix(":asc") {
            (name, SortDirection::Ascending)
        } else {
            (input, SortDirection::Ascending)
        };

        if name.is_empty() {
            return Err(ValidationError::InvalidSort {
                input: input.to_string(),
                reason: "property name is empty".to_string(),
            });
        }

        Ok(SortObject::Property {
            property: PropertyName::new(name),
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_wire_shapes() {
        assert_eq!(
            serde_json::to_value(SortObject::descending("Price")).unwrap(),
            json!({"property": "Price", "direction": "descending"})
        );
        assert_eq!(
            serde_json::to_value(SortObject::by_timestamp(
                TimestampKind::LastEditedTime,
                SortDirection::Ascending
            ))
            .unwrap(),
            json!({"timestamp": "last_edited_time", "direction": "ascending"})
        );
    }

    #[test]
    fn test_sort_from_cli_argument() {
        assert_eq!("Price:desc".parse::<SortObject>().unwrap(), SortObject::descending("Price"));
        assert_eq!("Name".parse::<SortObject>().unwrap(), SortObject::ascending("Name"));
        assert_eq!(
            "Due: date:asc".parse::<SortObject>().unwrap(),
            SortObject::ascending("Due: date")
        );
        assert_eq!(
            "Status: open".parse::<SortObject>().unwrap(),
            SortObject::ascending("Status: open")
        );
        assert_eq!(
            "Ratio 1:2:desc".parse::<SortObject>().unwrap(),
            SortObject::descending("Ratio 1:2")
        );
        assert!(":desc".parse::<SortObject>().is_err());
    }
}
