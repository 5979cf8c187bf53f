string_enum! {
    /// Discriminant naming what kind of object or property a payload is.
    pub enum ObjectType {
        Database => "database",
        Page => "page",
        List => "list",
        Title => "title",
        Text => "text",
        RichText => "rich_text",
        Checkbox => "checkbox",
        Select => "select",
        Number => "number",
        Formula => "formula",
        Date => "date",
        Relation => "relation",
        Rollup => "rollup",
        MultiSelect => "multi_select",
        People => "people",
        Files => "files",
        Heading1 => "heading_1",
        Heading2 => "heading_2",
        Heading3 => "heading_3",
        Paragraph => "paragraph",
        Toggle => "toggle",
        User => "user",
        Person => "person",
        Bot => "bot",
        BulletedListItem => "bulleted_list_item",
        NumberedListItem => "numbered_list_item",
        ToDo => "to_do",
        ChildPage => "child_page",
        Unsupported => "unsupported",
    }
}

// Untagged rich text runs are plain text
impl Default for ObjectType {
    fn default() -> Self {
        ObjectType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_discriminants() {
        assert_eq!(ObjectType::from("multi_select"), ObjectType::MultiSelect);
        assert_eq!(ObjectType::MultiSelect.to_string(), "multi_select");

        let unknown = ObjectType::from("status".to_string());
        assert_eq!(unknown, ObjectType::Other("status".to_string()));
        assert_eq!(unknown.as_str(), "status");
    }
}
