use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatabaseMarker;

/// Identifier of any Notion object (page, property, select option, ...).
pub type ObjectId = Id<ObjectMarker>;
/// Identifier of a database. Not interchangeable with [`ObjectId`].
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Wraps a service-issued ID verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Parse user-supplied input (bare hex, hyphenated UUID or a notion.so URL)
    /// into the hyphenated form the API expects.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let hex = normalize_notion_id(input)?;
        Ok(Self::new(hyphenate(&hex)))
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

/// Normalize various Notion ID formats into 32 lowercase hex characters
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim().trim_end_matches('/');

    if input.starts_with("http://") || input.starts_with("https://") {
        if let Some(id) = extract_id_from_url(input) {
            return normalize_notion_id(id);
        }
        return Err(ValidationError::InvalidId(format!(
            "Could not extract ID from URL: {}",
            input
        )));
    }

    let normalized = input.replace('-', "");

    // Notion IDs are 32 hex characters
    if normalized.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            normalized.len()
        )));
    }

    if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(normalized.to_lowercase())
}

/// Extract ID from Notion URL
fn extract_id_from_url(url: &str) -> Option<&str> {
    // Drop query string and fragment (`?v=` on database views)
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last_segment = path.rsplit('/').next()?;

    // Format: https://www.notion.so/[workspace]/[title]-[id]
    if let Some(pos) = last_segment.rfind('-') {
        let potential_id = &last_segment[pos + 1..];
        if potential_id.len() == 32 {
            return Some(potential_id);
        }
    }

    // Format: https://www.notion.so/[id]
    if last_segment.len() == 32 || (last_segment.len() == 36 && last_segment.contains('-')) {
        return Some(last_segment);
    }

    None
}

fn hyphenate(hex: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Name of a database property; the key of a database's property map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Opaque continuation token returned by a paginated listing.
///
/// The value is only ever handed back to the service on the next call;
/// nothing in this crate inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = DatabaseId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");

        let id = DatabaseId::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");

        let id = DatabaseId::parse(
            "https://www.notion.so/acme/Roadmap-550e8400e29b41d4a716446655440000?v=abc",
        )
        .unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(DatabaseId::parse("too-short").is_err());
        assert!(DatabaseId::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(DatabaseId::parse("").is_err());
        assert!(DatabaseId::parse("https://www.notion.so/nothing-here").is_err());
    }

    #[test]
    fn test_new_keeps_raw_value() {
        let id = DatabaseId::new("db1");
        assert_eq!(id.as_str(), "db1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"db1\"");
    }

    #[test]
    fn test_cursor_and_property_name_are_transparent() {
        let cursor: Cursor = serde_json::from_str("\"c1\"").unwrap();
        assert_eq!(cursor, Cursor::from("c1"));
        assert!(!cursor.is_empty());

        let name: PropertyName = serde_json::from_str("\"Status\"").unwrap();
        assert_eq!(name.as_str(), "Status");
    }
}
