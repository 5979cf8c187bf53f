use super::PropertySchema;
use crate::error::MalformedPropertyError;
use crate::types::{concat_plain_text, DatabaseId, ObjectType, PropertyName, RichTextObject};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A database's schema and metadata.
///
/// `properties` describes the columns, not row data. Keys are unique and keep
/// the order the service returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseObject {
    pub object: ObjectType,
    pub id: DatabaseId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub title: Vec<RichTextObject>,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PropertySchema>,
}

impl DatabaseObject {
    /// The database title as unstyled text.
    pub fn title_text(&self) -> String {
        concat_plain_text(&self.title)
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(&PropertyName::new(name))
    }
}

/// A database as it comes off the wire, before its property schemas are typed.
///
/// The service decodes responses into this first so that a bad property
/// surfaces as [`MalformedPropertyError`] rather than a generic decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseRecord {
    pub object: ObjectType,
    pub id: DatabaseId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub title: Vec<RichTextObject>,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, Value>,
}

impl DatabaseRecord {
    /// Types every property schema, failing on the first malformed one.
    pub fn into_database(self) -> Result<DatabaseObject, MalformedPropertyError> {
        let mut properties = IndexMap::with_capacity(self.properties.len());
        for (name, raw) in self.properties {
            match PropertySchema::from_wire(raw) {
                Ok(schema) => {
                    properties.insert(name, schema);
                }
                Err(e) => {
                    log::warn!("Property '{}' of database {} is malformed: {}", name, self.id, e);
                    return Err(e);
                }
            }
        }

        Ok(DatabaseObject {
            object: self.object,
            id: self.id,
            created_time: self.created_time,
            last_edited_time: self.last_edited_time,
            title: self.title,
            properties,
        })
    }
}
