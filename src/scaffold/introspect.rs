//! Model introspection for view generation.
//!
//! The `views` command does not carry an [`EntitySpec`](super::entity::EntitySpec)
//! forward in memory; it reads the previously generated model source back
//! from disk and extracts field names and types from the schema object
//! literal. This is deliberately a tolerant text scan, not a JavaScript
//! parser: it understands the shapes this tool generates plus one level of
//! hand-added nested objects and array-typed attributes, and degrades
//! anything it cannot classify to a plain text input.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::entity::LogicalType;
use super::naming;

/// Identity and audit fields never surfaced in generated views.
pub const INTERNAL_FIELDS: [&str; 5] = ["id", "_id", "createdAt", "updatedAt", "__v"];

/// One renderable view field extracted from a model schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewField {
    pub name: String,
    /// HTML input type for scalar fields.
    pub input_type: &'static str,
    pub required: bool,
    /// Array-typed attribute, rendered as a single multi-value input.
    pub multiple: bool,
    /// Sub-fields of a nested object, rendered inside a fieldset.
    pub children: Vec<ViewField>,
}

impl ViewField {
    #[must_use]
    pub fn scalar(name: &str, logical_type: LogicalType, required: bool) -> Self {
        Self {
            name: name.to_string(),
            input_type: logical_type.input_type(),
            required,
            multiple: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn multiple(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: "text",
            required: false,
            multiple: true,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn nested(name: &str, children: Vec<Self>) -> Self {
        Self {
            name: name.to_string(),
            input_type: "text",
            required: false,
            multiple: false,
            children,
        }
    }
}

/// Load and introspect the generated model for `entity`.
///
/// A missing model file is the missing-dependency error: nothing has been
/// written yet when it is raised, so the caller can abort cleanly.
pub fn load_model_fields(root: &Path, entity: &str) -> Result<Vec<ViewField>> {
    let path = root.join(naming::model_path(entity));
    if !path.exists() {
        bail!(
            "model {entity} has not been generated yet (expected {}); run `crudforge model` first",
            path.display()
        );
    }
    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read model file: {}", path.display()))?;
    parse_schema_fields(&source)
        .with_context(|| format!("failed to introspect model file: {}", path.display()))
}

/// Extract view fields from a model source's schema object literal.
pub fn parse_schema_fields(source: &str) -> Result<Vec<ViewField>> {
    let start = source
        .find("new mongoose.Schema(")
        .context("no mongoose schema declaration found in model source")?;
    let body = brace_block(&source[start..]).context("schema object literal is not brace-balanced")?;
    Ok(entries(body)
        .into_iter()
        .filter(|(key, _)| !INTERNAL_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| field_from_entry(&key, &value, 0))
        .collect())
}

/// Text between the first balanced `{`..`}` pair of `input`.
fn brace_block(input: &str) -> Option<&str> {
    let open = input.find('{')?;
    let mut depth = 0_usize;
    for (offset, c) in input[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&input[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split an object literal body into `(key, value)` pairs at bracket depth 0.
fn entries(body: &str) -> Vec<(String, String)> {
    let mut result = Vec::new();
    let mut depth = 0_i32;
    let mut current = String::new();
    for c in body.chars() {
        match c {
            '{' | '[' | '(' => {
                depth += 1;
                current.push(c);
            }
            '}' | ']' | ')' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                push_entry(&mut result, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_entry(&mut result, &current);
    result
}

fn push_entry(result: &mut Vec<(String, String)>, raw: &str) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }
    if let Some((key, value)) = raw.split_once(':') {
        let key = key.trim().trim_matches(|c| c == '\'' || c == '"').to_string();
        result.push((key, value.trim().to_string()));
    }
}

/// Classify one schema entry. `level` caps nested-object recursion at one.
fn field_from_entry(name: &str, value: &str, level: usize) -> ViewField {
    let value = value.trim();

    // Shorthand array: `tags: [String]`
    if value.starts_with('[') {
        return ViewField::multiple(name);
    }

    if value.starts_with('{') {
        let inner = brace_block(value).unwrap_or("");
        let inner_entries = entries(inner);

        if let Some((_, type_value)) = inner_entries.iter().find(|(key, _)| key == "type") {
            // `tags: { type: [String], ... }`
            if type_value.trim_start().starts_with('[') {
                return ViewField::multiple(name);
            }
            let required = inner_entries
                .iter()
                .any(|(key, v)| key == "required" && v.trim() == "true");
            return ViewField::scalar(
                name,
                LogicalType::from_storage_token(type_value.trim()),
                required,
            );
        }

        // Object literal without a `type` key: nested sub-schema.
        if level == 0 {
            let children = inner_entries
                .iter()
                .filter(|(key, _)| !INTERNAL_FIELDS.contains(&key.as_str()))
                .map(|(key, v)| field_from_entry(key, v, level + 1))
                .collect();
            return ViewField::nested(name, children);
        }
        // Deeper nesting is out of contract; fall back to a text input.
        return ViewField::scalar(name, LogicalType::String, false);
    }

    // Bare token shorthand: `title: String`
    ViewField::scalar(name, LogicalType::from_storage_token(value), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "const mongoose = require('mongoose');\n\n\
        const TaskSchema = new mongoose.Schema({\n\
          title: { type: String, required: true },\n\
          count: { type: Number, required: false },\n\
          done: { type: Boolean, required: false },\n\
        }, { timestamps: true });\n\n\
        module.exports = mongoose.model('Task', TaskSchema);\n";

    #[test]
    fn parses_generated_scalar_fields_in_order() {
        let fields = parse_schema_fields(MODEL).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ViewField::scalar("title", LogicalType::String, true));
        assert_eq!(fields[1], ViewField::scalar("count", LogicalType::Number, false));
        assert_eq!(fields[2], ViewField::scalar("done", LogicalType::Boolean, false));
    }

    #[test]
    fn options_object_is_not_mistaken_for_fields() {
        // `{ timestamps: true }` sits outside the schema object literal.
        let fields = parse_schema_fields(MODEL).unwrap();
        assert!(fields.iter().all(|f| f.name != "timestamps"));
    }

    #[test]
    fn internal_fields_are_excluded() {
        let source = "new mongoose.Schema({\n\
            _id: { type: String, required: true },\n\
            title: { type: String, required: true },\n\
            createdAt: { type: Date, required: false },\n\
            updatedAt: { type: Date, required: false },\n\
            __v: { type: Number, required: false },\n\
        });";
        let fields = parse_schema_fields(source).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "title");
    }

    #[test]
    fn array_attributes_are_marked_multiple() {
        let source = "new mongoose.Schema({\n\
            tags: [String],\n\
            scores: { type: [Number], required: false },\n\
        });";
        let fields = parse_schema_fields(source).unwrap();
        assert!(fields[0].multiple);
        assert!(fields[1].multiple);
    }

    #[test]
    fn nested_objects_recurse_one_level() {
        let source = "new mongoose.Schema({\n\
            address: {\n\
              street: { type: String, required: true },\n\
              city: { type: String, required: false },\n\
            },\n\
            title: { type: String, required: true },\n\
        });";
        let fields = parse_schema_fields(source).unwrap();
        assert_eq!(fields[0].name, "address");
        assert_eq!(fields[0].children.len(), 2);
        assert_eq!(
            fields[0].children[0],
            ViewField::scalar("street", LogicalType::String, true)
        );
        assert_eq!(fields[1].name, "title");
    }

    #[test]
    fn unknown_storage_tokens_degrade_to_text_inputs() {
        let source = "new mongoose.Schema({\n\
            owner: { type: mongoose.Schema.Types.ObjectId, required: true },\n\
        });";
        let fields = parse_schema_fields(source).unwrap();
        assert_eq!(fields[0].input_type, "text");
        assert!(fields[0].required);
    }

    #[test]
    fn source_without_schema_is_an_error() {
        assert!(parse_schema_fields("module.exports = {};").is_err());
    }

    #[test]
    fn missing_model_file_is_a_missing_dependency_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_model_fields(dir.path(), "Ghost").unwrap_err();
        assert!(err.to_string().contains("Ghost"));
        assert!(err.to_string().contains("has not been generated"));
    }
}
