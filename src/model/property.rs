// src/model/property.rs
//! The property schema model: one discriminant, exactly one payload.
//!
//! On the wire a property is `{"type": "<kind>", "<kind>": <payload>}`.
//! Here it is a closed sum type, so a value can never carry two payloads
//! or a payload that disagrees with its discriminant.

use crate::error::MalformedPropertyError;
use crate::types::{
    Color, DatabaseId, FormatType, FunctionType, ObjectId, ObjectType, RichTextObject, TextObject,
};
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A column definition on a database: identity plus its typed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub value: PropertyValue,
}

impl PropertySchema {
    pub fn new(id: &str, value: PropertyValue) -> Self {
        Self {
            id: Some(ObjectId::new(id)),
            name: None,
            value,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Decodes one entry of a database's `properties` map, keeping the typed
    /// error when the payload disagrees with its discriminant.
    pub fn from_wire(value: Value) -> Result<Self, MalformedPropertyError> {
        let Value::Object(fields) = &value else {
            return Err(MalformedPropertyError::NotAnObject);
        };
        let id = fields.get("id").and_then(Value::as_str).map(ObjectId::new);
        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            name,
            value: PropertyValue::from_wire(value)?,
        })
    }

    /// Returns the discriminant of the schema's value.
    pub fn kind(&self) -> ObjectType {
        self.value.kind()
    }
}

/// The polymorphic payload of a database property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(TextObject),
    Text(TextObject),
    RichText(RichTextObject),
    Checkbox,
    Select(SelectObject),
    Number(NumberObject),
    Formula(FormulaObject),
    Date,
    Relation(RelationObject),
    Rollup(RollupObject),
    MultiSelect(MultiSelectObject),
    People,
    Files,
    Paragraph(Vec<RichTextObject>),
    Toggle(Toggle),
    /// A discriminant this client has no variant for. The raw payload is
    /// kept so the value re-encodes unchanged.
    Unsupported {
        kind: String,
        payload: Option<Value>,
    },
}

impl PropertyValue {
    /// Returns the wire discriminant for this value.
    pub fn kind(&self) -> ObjectType {
        match self {
            PropertyValue::Title(_) => ObjectType::Title,
            PropertyValue::Text(_) => ObjectType::Text,
            PropertyValue::RichText(_) => ObjectType::RichText,
            PropertyValue::Checkbox => ObjectType::Checkbox,
            PropertyValue::Select(_) => ObjectType::Select,
            PropertyValue::Number(_) => ObjectType::Number,
            PropertyValue::Formula(_) => ObjectType::Formula,
            PropertyValue::Date => ObjectType::Date,
            PropertyValue::Relation(_) => ObjectType::Relation,
            PropertyValue::Rollup(_) => ObjectType::Rollup,
            PropertyValue::MultiSelect(_) => ObjectType::MultiSelect,
            PropertyValue::People => ObjectType::People,
            PropertyValue::Files => ObjectType::Files,
            PropertyValue::Paragraph(_) => ObjectType::Paragraph,
            PropertyValue::Toggle(_) => ObjectType::Toggle,
            PropertyValue::Unsupported { kind, .. } => ObjectType::from(kind.as_str()),
        }
    }

    /// Decodes `{"type": ..., "<type>": payload}`.
    ///
    /// Unknown discriminants become [`PropertyValue::Unsupported`]; a known
    /// discriminant without its payload is an error.
    pub fn from_wire(value: Value) -> Result<Self, MalformedPropertyError> {
        let Value::Object(mut fields) = value else {
            return Err(MalformedPropertyError::NotAnObject);
        };

        let kind = match fields.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            _ => return Err(MalformedPropertyError::MissingType),
        };
        let payload = fields.remove(&kind);

        match ObjectType::from(kind.as_str()) {
            ObjectType::Title => Ok(PropertyValue::Title(decode_payload(&kind, payload)?)),
            ObjectType::Text => Ok(PropertyValue::Text(decode_payload(&kind, payload)?)),
            ObjectType::RichText => Ok(PropertyValue::RichText(decode_payload(&kind, payload)?)),
            ObjectType::Select => Ok(PropertyValue::Select(decode_payload(&kind, payload)?)),
            ObjectType::Number => Ok(PropertyValue::Number(decode_payload(&kind, payload)?)),
            ObjectType::Formula => Ok(PropertyValue::Formula(decode_payload(&kind, payload)?)),
            ObjectType::Relation => Ok(PropertyValue::Relation(decode_payload(&kind, payload)?)),
            ObjectType::Rollup => Ok(PropertyValue::Rollup(decode_payload(&kind, payload)?)),
            ObjectType::MultiSelect => {
                Ok(PropertyValue::MultiSelect(decode_payload(&kind, payload)?))
            }
            ObjectType::Paragraph => Ok(PropertyValue::Paragraph(decode_payload(&kind, payload)?)),
            ObjectType::Toggle => Ok(PropertyValue::Toggle(decode_payload(&kind, payload)?)),
            // Presence-only: the service sends `{}`, which carries nothing.
            ObjectType::Checkbox => Ok(PropertyValue::Checkbox),
            ObjectType::Date => Ok(PropertyValue::Date),
            ObjectType::People => Ok(PropertyValue::People),
            ObjectType::Files => Ok(PropertyValue::Files),
            _ => {
                log::warn!("Keeping property of unsupported type '{}' verbatim", kind);
                Ok(PropertyValue::Unsupported { kind, payload })
            }
        }
    }

    /// Encodes to the wire shape. Presence-only variants carry no payload key.
    pub fn to_wire(&self) -> Value {
        // Serializing these types into a Value cannot fail: all keys are strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn as_title(&self) -> Option<&TextObject> {
        match self {
            PropertyValue::Title(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextObject> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_rich_text(&self) -> Option<&RichTextObject> {
        match self {
            PropertyValue::RichText(run) => Some(run),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectObject> {
        match self {
            PropertyValue::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn as_multi_select(&self) -> Option<&MultiSelectObject> {
        match self {
            PropertyValue::MultiSelect(select) => Some(select),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&NumberObject> {
        match self {
            PropertyValue::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_formula(&self) -> Option<&FormulaObject> {
        match self {
            PropertyValue::Formula(formula) => Some(formula),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&RelationObject> {
        match self {
            PropertyValue::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn as_rollup(&self) -> Option<&RollupObject> {
        match self {
            PropertyValue::Rollup(rollup) => Some(rollup),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&[RichTextObject]> {
        match self {
            PropertyValue::Paragraph(runs) => Some(runs),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            PropertyValue::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }
}

fn decode_payload<T: DeserializeOwned>(
    kind: &str,
    payload: Option<Value>,
) -> Result<T, MalformedPropertyError> {
    let payload = match payload {
        None | Some(Value::Null) => {
            return Err(MalformedPropertyError::MissingPayload {
                kind: kind.to_string(),
            })
        }
        Some(payload) => payload,
    };

    serde_json::from_value(payload).map_err(|e| MalformedPropertyError::InvalidPayload {
        kind: kind.to_string(),
        reason: e.to_string(),
    })
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = self.kind();
        let key = kind.as_str();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", key)?;

        match self {
            PropertyValue::Title(text) | PropertyValue::Text(text) => {
                map.serialize_entry(key, text)?
            }
            PropertyValue::RichText(run) => map.serialize_entry(key, run)?,
            PropertyValue::Select(select) => map.serialize_entry(key, select)?,
            PropertyValue::Number(number) => map.serialize_entry(key, number)?,
            PropertyValue::Formula(formula) => map.serialize_entry(key, formula)?,
            PropertyValue::Relation(relation) => map.serialize_entry(key, relation)?,
            PropertyValue::Rollup(rollup) => map.serialize_entry(key, rollup)?,
            PropertyValue::MultiSelect(select) => map.serialize_entry(key, select)?,
            PropertyValue::Paragraph(runs) => map.serialize_entry(key, runs)?,
            PropertyValue::Toggle(toggle) => map.serialize_entry(key, toggle)?,
            PropertyValue::Unsupported {
                payload: Some(payload),
                ..
            } => map.serialize_entry(key, payload)?,
            PropertyValue::Checkbox
            | PropertyValue::Date
            | PropertyValue::People
            | PropertyValue::Files
            | PropertyValue::Unsupported { payload: None, .. } => {}
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        PropertyValue::from_wire(value).map_err(serde::de::Error::custom)
    }
}

/// Options of a select property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectObject {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Options of a multi-select property, in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiSelectObject {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

impl SelectOption {
    pub fn new(name: &str, color: Color) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberObject {
    #[serde(default)]
    pub format: FormatType,
}

/// The formula a computed property evaluates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormulaObject {
    #[serde(default, rename = "value", alias = "expression")]
    pub expression: String,
}

/// A foreign reference to another database's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationObject {
    #[serde(rename = "database", alias = "database_id")]
    pub database_id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<ObjectId>,
}

/// An aggregation over the values reached through a relation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RollupObject {
    #[serde(default)]
    pub rollup_property_name: String,
    #[serde(default)]
    pub relation_property_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<ObjectId>,
    #[serde(default)]
    pub function: FunctionType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toggle {
    #[serde(default)]
    pub text: RichTextObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PAYLOAD_KEYS: [&str; 15] = [
        "title",
        "text",
        "rich_text",
        "checkbox",
        "select",
        "number",
        "formula",
        "date",
        "relation",
        "rollup",
        "multi_select",
        "people",
        "files",
        "paragraph",
        "toggle",
    ];

    fn representative_values() -> Vec<PropertyValue> {
        vec![
            PropertyValue::Title(TextObject::default()),
            PropertyValue::Text(TextObject {
                content: "Notes".to_string(),
                link: None,
            }),
            PropertyValue::RichText(RichTextObject::plain("Summary")),
            PropertyValue::Checkbox,
            PropertyValue::Select(SelectObject {
                options: vec![SelectOption::new("Done", Color::Green)],
            }),
            PropertyValue::Number(NumberObject {
                format: FormatType::Percent,
            }),
            PropertyValue::Formula(FormulaObject {
                expression: "prop(\"Price\") * 2".to_string(),
            }),
            PropertyValue::Date,
            PropertyValue::Relation(RelationObject {
                database_id: DatabaseId::new("db2"),
                synced_property_name: Some("Tasks".to_string()),
                synced_property_id: None,
            }),
            PropertyValue::Rollup(RollupObject {
                rollup_property_name: "Estimate".to_string(),
                relation_property_name: "Tasks".to_string(),
                rollup_property_id: Some(ObjectId::new("abc")),
                relation_property_id: Some(ObjectId::new("def")),
                function: FunctionType::Sum,
            }),
            PropertyValue::MultiSelect(MultiSelectObject {
                options: vec![
                    SelectOption::new("a", Color::Red),
                    SelectOption::new("b", Color::Other("teal".to_string())),
                ],
            }),
            PropertyValue::People,
            PropertyValue::Files,
            PropertyValue::Paragraph(vec![RichTextObject::plain("one")]),
            PropertyValue::Toggle(Toggle {
                text: RichTextObject::plain("open me"),
            }),
        ]
    }

    #[test]
    fn test_round_trip_every_discriminant() {
        for value in representative_values() {
            let wire = value.to_wire();
            let decoded = PropertyValue::from_wire(wire.clone()).unwrap();
            assert_eq!(decoded, value, "round trip failed for {}", wire);
        }
    }

    #[test]
    fn test_no_payload_leaks_across_discriminants() {
        for value in representative_values() {
            let wire = value.to_wire();
            let kind = value.kind();
            let object = wire.as_object().unwrap();

            for key in PAYLOAD_KEYS {
                if key != kind.as_str() {
                    assert!(!object.contains_key(key), "{} leaked into {}", key, kind);
                }
            }
            assert_eq!(object["type"], json!(kind.as_str()));
        }
    }

    #[test]
    fn test_presence_only_variants_omit_payload() {
        assert_eq!(PropertyValue::Checkbox.to_wire(), json!({"type": "checkbox"}));
        assert_eq!(PropertyValue::People.to_wire(), json!({"type": "people"}));
    }

    #[test]
    fn test_presence_only_variants_accept_empty_object() {
        let value = PropertyValue::from_wire(json!({"type": "date", "date": {}})).unwrap();
        assert_eq!(value, PropertyValue::Date);
    }

    #[test]
    fn test_exactly_one_accessor_matches() {
        let value = PropertyValue::from_wire(json!({
            "type": "relation",
            "relation": {"database_id": "db9", "synced_property_name": "Back"},
            "select": {"options": []}
        }))
        .unwrap();

        assert!(value.as_relation().is_some());
        assert!(value.as_select().is_none());
        assert!(value.as_rollup().is_none());
        assert!(value.as_title().is_none());
        assert_eq!(value.as_relation().unwrap().database_id.as_str(), "db9");
    }

    #[test]
    fn test_unknown_discriminant_is_unsupported() {
        let wire = json!({"type": "status", "status": {"groups": []}});
        let value = PropertyValue::from_wire(wire.clone()).unwrap();

        assert_eq!(
            value,
            PropertyValue::Unsupported {
                kind: "status".to_string(),
                payload: Some(json!({"groups": []})),
            }
        );
        assert_eq!(value.kind(), ObjectType::Other("status".to_string()));
        assert_eq!(value.to_wire(), wire);
    }

    #[test]
    fn test_missing_payload_is_malformed() {
        let err = PropertyValue::from_wire(json!({"type": "select"})).unwrap_err();
        assert_eq!(
            err,
            MalformedPropertyError::MissingPayload {
                kind: "select".to_string()
            }
        );

        let err = PropertyValue::from_wire(json!({"type": "rollup", "rollup": null})).unwrap_err();
        assert!(matches!(err, MalformedPropertyError::MissingPayload { .. }));
    }

    #[test]
    fn test_wrong_payload_shape_is_malformed() {
        let err = PropertyValue::from_wire(json!({"type": "select", "select": "Done"})).unwrap_err();
        assert!(matches!(err, MalformedPropertyError::InvalidPayload { .. }));
    }

    #[test]
    fn test_missing_type_is_malformed() {
        assert_eq!(
            PropertyValue::from_wire(json!({"select": {"options": []}})).unwrap_err(),
            MalformedPropertyError::MissingType
        );
        assert_eq!(
            PropertyValue::from_wire(json!([])).unwrap_err(),
            MalformedPropertyError::NotAnObject
        );
    }

    #[test]
    fn test_schema_flattens_identity_and_value() {
        let wire = json!({
            "id": "%3AUPp",
            "name": "Stage",
            "type": "select",
            "select": {"options": [{"id": "opt1", "name": "Idea", "color": "yellow"}]}
        });

        let schema: PropertySchema = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(schema.id, Some(ObjectId::new("%3AUPp")));
        assert_eq!(schema.name.as_deref(), Some("Stage"));
        assert_eq!(schema.kind(), ObjectType::Select);
        assert_eq!(
            schema.value.as_select().unwrap().options[0].color,
            Color::Yellow
        );
        assert_eq!(serde_json::to_value(&schema).unwrap(), wire);
    }

    #[test]
    fn test_relation_and_formula_wire_names() {
        let relation = PropertyValue::Relation(RelationObject {
            database_id: DatabaseId::new("db2"),
            synced_property_name: Some("Tasks".to_string()),
            synced_property_id: None,
        });
        assert_eq!(
            relation.to_wire(),
            json!({
                "type": "relation",
                "relation": {"database": "db2", "synced_property_name": "Tasks"}
            })
        );

        let formula = PropertyValue::Formula(FormulaObject {
            expression: "1 + 1".to_string(),
        });
        assert_eq!(
            formula.to_wire(),
            json!({"type": "formula", "formula": {"value": "1 + 1"}})
        );
    }

    #[test]
    fn test_newer_field_names_still_decode() {
        let value = PropertyValue::from_wire(json!({
            "type": "relation",
            "relation": {"database_id": "db3", "synced_property_name": "Parent"}
        }))
        .unwrap();
        assert_eq!(value.as_relation().unwrap().database_id, DatabaseId::new("db3"));

        let value = PropertyValue::from_wire(
            json!({"type": "formula", "formula": {"expression": "1 + 1"}}),
        )
        .unwrap();
        assert_eq!(value.as_formula().unwrap().expression, "1 + 1");
    }
}
