// src/types/rich_text.rs
//! Rich text runs as the Notion API encodes them.
//!
//! Every field defaults when absent: schema-level `title` and `rich_text`
//! properties arrive as bare `{}` payloads.

use super::{Color, ObjectType};
use serde::{Deserialize, Serialize};

/// A styled run of text.
///
/// `plain_text` duplicates `text.content`; the wire protocol stores both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextObject {
    #[serde(rename = "type")]
    pub kind: ObjectType,
    pub text: TextObject,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextObject {
    /// Create an unstyled text run — the most common rich text variant.
    pub fn plain(text: &str) -> Self {
        Self {
            kind: ObjectType::Text,
            text: TextObject {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Attach a hyperlink to this run.
    pub fn with_link(mut self, url: &str) -> Self {
        self.text.link = Some(Link {
            url: url.to_string(),
        });
        self.href = Some(url.to_string());
        self
    }

    /// The unstyled text, falling back to the content when the service
    /// omitted the plain-text projection.
    pub fn plain_text(&self) -> &str {
        if self.plain_text.is_empty() {
            &self.text.content
        } else {
            &self.plain_text
        }
    }
}

/// Joins the plain text of consecutive runs.
pub fn concat_plain_text(runs: &[RichTextObject]) -> String {
    runs.iter().map(RichTextObject::plain_text).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextObject {
    pub content: String,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}
