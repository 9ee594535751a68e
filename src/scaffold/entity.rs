//! Entity and field specifications collected for one scaffolding session.
//!
//! An [`EntitySpec`] lives only for the duration of a single generation
//! session: it is built at the prompts, consumed by the renderers, and
//! discarded. Nothing here touches the filesystem.

/// Logical field types an operator can pick at the type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    String,
    Number,
    Boolean,
    Date,
    Text,
}

impl LogicalType {
    /// Every selectable type, in prompt order.
    pub const ALL: [Self; 5] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Date,
        Self::Text,
    ];

    /// Label shown in the selection prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Text => "text",
        }
    }

    /// Storage type token emitted into generated model code.
    #[must_use]
    pub const fn storage_token(self) -> &'static str {
        match self {
            Self::String | Self::Text => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
        }
    }

    /// Map a storage type token back to a logical type.
    ///
    /// Permissive on purpose: tokens this tool never emitted (hand-edited
    /// models, `Mixed`, `ObjectId`, ...) degrade to the string kind so that
    /// generation never fails on an unknown type.
    #[must_use]
    pub fn from_storage_token(token: &str) -> Self {
        match token {
            "Number" => Self::Number,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            _ => Self::String,
        }
    }

    /// HTML `<input type>` used for this field in generated views.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::String | Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "checkbox",
            Self::Date => "date",
        }
    }
}

/// One typed field of an entity, in the order the operator entered it.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub logical_type: LogicalType,
    pub required: bool,
}

/// A named entity plus its ordered fields, the unit scaffolding operates on.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    /// Capitalized identifier all artifact names derive from.
    pub name: String,
    /// Insertion order is preserved all the way into generated code.
    pub fields: Vec<FieldSpec>,
    pub timestamps: bool,
}

impl EntitySpec {
    /// Field names in insertion order, for status messages.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Validate an entity name: a capitalized ASCII identifier.
#[must_use]
pub fn is_valid_entity_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_tokens_follow_the_mapping_table() {
        assert_eq!(LogicalType::String.storage_token(), "String");
        assert_eq!(LogicalType::Number.storage_token(), "Number");
        assert_eq!(LogicalType::Boolean.storage_token(), "Boolean");
        assert_eq!(LogicalType::Date.storage_token(), "Date");
        assert_eq!(LogicalType::Text.storage_token(), "String");
    }

    #[test]
    fn unknown_storage_tokens_fall_back_to_string() {
        assert_eq!(LogicalType::from_storage_token("Mixed"), LogicalType::String);
        assert_eq!(
            LogicalType::from_storage_token("ObjectId"),
            LogicalType::String
        );
        assert_eq!(LogicalType::from_storage_token(""), LogicalType::String);
    }

    #[test]
    fn storage_tokens_round_trip_for_known_types() {
        assert_eq!(LogicalType::from_storage_token("Number"), LogicalType::Number);
        assert_eq!(
            LogicalType::from_storage_token("Boolean"),
            LogicalType::Boolean
        );
        assert_eq!(LogicalType::from_storage_token("Date"), LogicalType::Date);
    }

    #[test]
    fn input_types_match_field_kinds() {
        assert_eq!(LogicalType::String.input_type(), "text");
        assert_eq!(LogicalType::Text.input_type(), "text");
        assert_eq!(LogicalType::Number.input_type(), "number");
        assert_eq!(LogicalType::Boolean.input_type(), "checkbox");
        assert_eq!(LogicalType::Date.input_type(), "date");
    }

    #[test]
    fn valid_entity_names() {
        assert!(is_valid_entity_name("Task"));
        assert!(is_valid_entity_name("UserProfile"));
        assert!(is_valid_entity_name("Order2"));
    }

    #[test]
    fn invalid_entity_names() {
        assert!(!is_valid_entity_name(""));
        assert!(!is_valid_entity_name("task"));
        assert!(!is_valid_entity_name("1Task"));
        assert!(!is_valid_entity_name("My Task"));
        assert!(!is_valid_entity_name("My-Task"));
    }
}
